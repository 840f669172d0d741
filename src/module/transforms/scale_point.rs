use crate::module::{Module, ModuleRef};

/// Scales the sample point before evaluating the source module.
#[derive(Clone)]
pub struct ScalePoint {
    source: ModuleRef,
    sx: f64,
    sy: f64,
    sz: f64,
}

impl ScalePoint {
    pub fn new(source: ModuleRef, sx: f64, sy: f64, sz: f64) -> Self {
        ScalePoint { source, sx, sy, sz }
    }

    pub fn scale(&self) -> (f64, f64, f64) {
        (self.sx, self.sy, self.sz)
    }

    pub fn set_scale(&mut self, sx: f64, sy: f64, sz: f64) {
        self.sx = sx;
        self.sy = sy;
        self.sz = sz;
    }
}

impl Module for ScalePoint {
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
        self.source.value(x * self.sx, y * self.sy, z * self.sz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module::generators::Perlin;
    use std::rc::Rc;

    #[test]
    fn inverse_scales_cancel_pointwise() {
        let perlin = Rc::new(Perlin::new());
        let scaled = ScalePoint::new(perlin.clone(), 2.0, 2.0, 2.0);
        let unscaled = ScalePoint::new(Rc::new(scaled), 0.5, 0.5, 0.5);
        let direct = perlin.value(0.7, -1.3, 2.1);
        assert!((unscaled.value(0.7, -1.3, 2.1) - direct).abs() < 1e-12);
    }
}
