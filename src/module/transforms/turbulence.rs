use crate::module::generators::Perlin;
use crate::module::{Module, ModuleRef};

/// Default power (displacement magnitude) for a newly constructed
/// [`Turbulence`].
pub const DEFAULT_TURBULENCE_POWER: f64 = 1.0;
/// Default frequency shared by the three internal displacer modules.
pub const DEFAULT_TURBULENCE_FREQUENCY: f64 = 1.0;
/// Default roughness (octave count of each internal displacer).
pub const DEFAULT_TURBULENCE_ROUGHNESS: u32 = 3;
/// Default seed for the first internal displacer; the other two use
/// `seed + 1` and `seed + 2`.
pub const DEFAULT_TURBULENCE_SEED: i32 = 0;

// Distinct per-axis sampling offsets for each of the three internal
// displacer modules, so that none of the three ever samples its Perlin
// at an integer lattice point (where gradient noise is exactly zero) at
// the same input coordinate as another axis.
const X_DISTORT_OFFSET: (f64, f64, f64) = (
    12414.0 / 65536.0,
    65124.0 / 65536.0,
    31337.0 / 65536.0,
);
const Y_DISTORT_OFFSET: (f64, f64, f64) = (
    26519.0 / 65536.0,
    18128.0 / 65536.0,
    60493.0 / 65536.0,
);
const Z_DISTORT_OFFSET: (f64, f64, f64) = (
    53820.0 / 65536.0,
    11213.0 / 65536.0,
    44845.0 / 65536.0,
);

/// Perturbs the sample point by three internal `Perlin` modules before
/// evaluating the source module, producing gnarled, organic distortion.
#[derive(Clone)]
pub struct Turbulence {
    source: ModuleRef,
    x_distort: Perlin,
    y_distort: Perlin,
    z_distort: Perlin,
    power: f64,
}

impl Turbulence {
    pub fn new(source: ModuleRef, seed: i32, frequency: f64, power: f64, roughness: u32) -> Self {
        let mut x_distort = Perlin::new();
        x_distort.set_seed(seed);
        x_distort.set_frequency(frequency);
        let _ = x_distort.set_octave_count(roughness.max(1).min(30));

        let mut y_distort = Perlin::new();
        y_distort.set_seed(seed.wrapping_add(1));
        y_distort.set_frequency(frequency);
        let _ = y_distort.set_octave_count(roughness.max(1).min(30));

        let mut z_distort = Perlin::new();
        z_distort.set_seed(seed.wrapping_add(2));
        z_distort.set_frequency(frequency);
        let _ = z_distort.set_octave_count(roughness.max(1).min(30));

        Turbulence {
            source,
            x_distort,
            y_distort,
            z_distort,
            power,
        }
    }

    pub fn power(&self) -> f64 {
        self.power
    }

    pub fn set_power(&mut self, power: f64) {
        self.power = power;
    }
}

impl Module for Turbulence {
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
        let px = self.x_distort.value(
            x + X_DISTORT_OFFSET.0,
            y + X_DISTORT_OFFSET.1,
            z + X_DISTORT_OFFSET.2,
        );
        let py = self.y_distort.value(
            x + Y_DISTORT_OFFSET.0,
            y + Y_DISTORT_OFFSET.1,
            z + Y_DISTORT_OFFSET.2,
        );
        let pz = self.z_distort.value(
            x + Z_DISTORT_OFFSET.0,
            y + Z_DISTORT_OFFSET.1,
            z + Z_DISTORT_OFFSET.2,
        );

        self.source.value(
            x + px * self.power,
            y + py * self.power,
            z + pz * self.power,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module::generators::Const;
    use std::rc::Rc;

    #[test]
    fn zero_power_collapses_to_the_source() {
        let source: ModuleRef = Rc::new(Const::new(0.5));
        let t = Turbulence::new(source, 2, 4.0, 0.0, 2);
        assert_eq!(t.value(0.3, 0.4, 0.5), 0.5);
    }

    #[test]
    fn nonzero_power_displaces_a_position_sensitive_source() {
        let source: ModuleRef = Rc::new(Perlin::new());
        let t = Turbulence::new(source.clone(), 2, 4.0, 1.0 / 16.0, 2);
        let distorted = t.value(0.3, 0.4, 0.5);
        let undistorted = source.value(0.3, 0.4, 0.5);
        assert!((distorted - undistorted).abs() > 1e-9);
    }
}
