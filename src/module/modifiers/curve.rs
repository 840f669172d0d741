use crate::error::{NoiseError, Result};
use crate::math::cubic_interp;
use crate::module::{Module, ModuleRef};

/// Smallest number of control points a [`Curve`] accepts.
pub const CURVE_MIN_CONTROL_POINTS: usize = 4;

/// One `(input, output)` anchor of a [`Curve`]'s spline.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControlPoint {
    pub input: f64,
    pub output: f64,
}

impl ControlPoint {
    pub fn new(input: f64, output: f64) -> Self {
        ControlPoint { input, output }
    }
}

/// Cubic-spline remapping of the source module's output across a sorted
/// set of control points.
#[derive(Clone)]
pub struct Curve {
    source: ModuleRef,
    control_points: Vec<ControlPoint>,
}

impl Curve {
    /// Builds a `Curve` from control points, sorted by `input` ascending.
    ///
    /// Rejects fewer than [`CURVE_MIN_CONTROL_POINTS`] points or any pair
    /// of points sharing the same `input`.
    pub fn new(source: ModuleRef, mut control_points: Vec<ControlPoint>) -> Result<Self> {
        if control_points.len() < CURVE_MIN_CONTROL_POINTS {
            return Err(NoiseError::InvalidParameter(format!(
                "curve requires at least {} control points, got {}",
                CURVE_MIN_CONTROL_POINTS,
                control_points.len()
            )));
        }
        control_points.sort_by(|a, b| a.input.partial_cmp(&b.input).unwrap());
        for pair in control_points.windows(2) {
            if pair[0].input == pair[1].input {
                return Err(NoiseError::InvalidParameter(format!(
                    "duplicate curve control point input {}",
                    pair[0].input
                )));
            }
        }
        Ok(Curve {
            source,
            control_points,
        })
    }

    pub fn control_points(&self) -> &[ControlPoint] {
        &self.control_points
    }
}

impl Module for Curve {
    fn source_count(&self) -> usize {
        1
    }

    fn get_source(&self, index: usize) -> &ModuleRef {
        match index {
            0 => &self.source,
            _ => panic!("no source module"),
        }
    }

    fn set_source(&mut self, index: usize, module: ModuleRef) {
        match index {
            0 => self.source = module,
            _ => panic!("no source module"),
        }
    }

    fn value(&self, x: f64, y: f64, z: f64) -> f64 {
        let v = self.source.value(x, y, z);
        let points = &self.control_points;
        let last = points.len() - 1;

        let mut index_pos = 0usize;
        while index_pos < points.len() && v >= points[index_pos].input {
            index_pos += 1;
        }

        let clamp_idx = |i: isize| -> usize { i.clamp(0, last as isize) as usize };
        let i0 = clamp_idx(index_pos as isize - 2);
        let i1 = clamp_idx(index_pos as isize - 1);
        let i2 = clamp_idx(index_pos as isize);
        let i3 = clamp_idx(index_pos as isize + 1);

        if i1 == i2 {
            return points[i1].output;
        }

        let input0 = points[i1].input;
        let input1 = points[i2].input;
        let alpha = (v - input0) / (input1 - input0);

        cubic_interp(
            points[i0].output,
            points[i1].output,
            points[i2].output,
            points[i3].output,
            alpha,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module::generators::Const;
    use std::rc::Rc;

    fn points() -> Vec<ControlPoint> {
        vec![
            ControlPoint::new(-1.0, -1.0),
            ControlPoint::new(-0.5, 0.0),
            ControlPoint::new(0.5, 0.2),
            ControlPoint::new(1.0, 1.0),
        ]
    }

    #[test]
    fn rejects_too_few_points() {
        let src: ModuleRef = Rc::new(Const::new(0.0));
        let result = Curve::new(src, vec![ControlPoint::new(0.0, 0.0)]);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_duplicate_inputs() {
        let src: ModuleRef = Rc::new(Const::new(0.0));
        let mut pts = points();
        pts.push(ControlPoint::new(-1.0, 5.0));
        assert!(Curve::new(src, pts).is_err());
    }

    #[test]
    fn sorts_unsorted_points() {
        let src: ModuleRef = Rc::new(Const::new(0.0));
        let mut pts = points();
        pts.reverse();
        let c = Curve::new(src, pts).unwrap();
        for pair in c.control_points().windows(2) {
            assert!(pair[0].input < pair[1].input);
        }
    }

    #[test]
    fn passes_through_endpoint_outputs_at_endpoint_inputs() {
        let src: ModuleRef = Rc::new(Const::new(-1.0));
        let c = Curve::new(src, points()).unwrap();
        assert!((c.value(0.0, 0.0, 0.0) - (-1.0)).abs() < 1e-9);
    }
}
