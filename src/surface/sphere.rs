use crate::math::lat_lon_to_xyz;
use crate::module::ModuleRef;

/// Samples a module across the surface of a unit sphere using
/// latitude/longitude coordinates, in degrees.
pub struct SphereModel {
    module: ModuleRef,
}

impl SphereModel {
    pub fn new(module: ModuleRef) -> Self {
        SphereModel { module }
    }

    pub fn set_module(&mut self, module: ModuleRef) {
        self.module = module;
    }

    pub fn value(&self, lat_deg: f64, lon_deg: f64) -> f64 {
        let (x, y, z) = lat_lon_to_xyz(lat_deg, lon_deg);
        self.module.value(x, y, z)
    }
}
