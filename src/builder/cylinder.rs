use crate::builder::{validate_bounds, validate_size};
use crate::error::Result;
use crate::module::ModuleRef;
use crate::noisemap::NoiseMap;
use crate::surface::CylinderModel;

/// Default lower angle bound, in degrees.
pub const DEFAULT_CYLINDER_LOWER_ANGLE: f64 = -180.0;
/// Default upper angle bound, in degrees.
pub const DEFAULT_CYLINDER_UPPER_ANGLE: f64 = 180.0;
/// Default lower height bound.
pub const DEFAULT_CYLINDER_LOWER_HEIGHT: f64 = -1.0;
/// Default upper height bound.
pub const DEFAULT_CYLINDER_UPPER_HEIGHT: f64 = 1.0;

/// Samples a module across the surface of a unit-radius cylinder into a
/// [`NoiseMap`], sweeping angle along the destination's width and height
/// along its height.
pub struct NoiseMapBuilderCylinder {
    source_module: ModuleRef,
    dest_width: usize,
    dest_height: usize,
    lower_angle: f64,
    upper_angle: f64,
    lower_height: f64,
    upper_height: f64,
}

impl NoiseMapBuilderCylinder {
    pub fn new(source_module: ModuleRef) -> Self {
        NoiseMapBuilderCylinder {
            source_module,
            dest_width: 0,
            dest_height: 0,
            lower_angle: DEFAULT_CYLINDER_LOWER_ANGLE,
            upper_angle: DEFAULT_CYLINDER_UPPER_ANGLE,
            lower_height: DEFAULT_CYLINDER_LOWER_HEIGHT,
            upper_height: DEFAULT_CYLINDER_UPPER_HEIGHT,
        }
    }

    pub fn set_source_module(&mut self, source_module: ModuleRef) {
        self.source_module = source_module;
    }

    pub fn set_dest_size(&mut self, width: usize, height: usize) {
        self.dest_width = width;
        self.dest_height = height;
    }

    pub fn set_bounds(&mut self, lower_angle: f64, upper_angle: f64, lower_height: f64, upper_height: f64) {
        self.lower_angle = lower_angle;
        self.upper_angle = upper_angle;
        self.lower_height = lower_height;
        self.upper_height = upper_height;
    }

    pub fn build(&self) -> Result<NoiseMap> {
        validate_size(self.dest_width, self.dest_height)?;
        validate_bounds(self.lower_angle, self.upper_angle, "angle")?;
        validate_bounds(self.lower_height, self.upper_height, "height")?;

        let angle_delta = (self.upper_angle - self.lower_angle) / self.dest_width as f64;
        let height_delta = (self.upper_height - self.lower_height) / self.dest_height as f64;

        let model = CylinderModel::new(self.source_module.clone());
        let mut dest = NoiseMap::new(self.dest_width, self.dest_height);

        for j in 0..self.dest_height {
            let height = self.lower_height + j as f64 * height_delta;
            for i in 0..self.dest_width {
                let angle = self.lower_angle + i as f64 * angle_delta;
                dest.set(i as i64, j as i64, model.value(angle, height));
            }
        }

        Ok(dest)
    }
}
