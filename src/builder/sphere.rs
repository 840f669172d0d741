use crate::builder::{validate_bounds, validate_size};
use crate::error::Result;
use crate::module::ModuleRef;
use crate::noisemap::NoiseMap;
use crate::surface::SphereModel;

/// Default lower latitude bound, in degrees.
pub const DEFAULT_SPHERE_LOWER_LATITUDE: f64 = -90.0;
/// Default upper latitude bound, in degrees.
pub const DEFAULT_SPHERE_UPPER_LATITUDE: f64 = 90.0;
/// Default lower longitude bound, in degrees.
pub const DEFAULT_SPHERE_LOWER_LONGITUDE: f64 = -180.0;
/// Default upper longitude bound, in degrees.
pub const DEFAULT_SPHERE_UPPER_LONGITUDE: f64 = 180.0;

/// Samples a module across the surface of a unit sphere into a
/// [`NoiseMap`], sweeping longitude along the destination's width and
/// latitude along its height.
///
/// Row 0 sits at the upper latitude bound; every column of that row
/// evaluates the same pole point on the unit sphere, so a full-range
/// build (`lower = -90`, `upper = 90`) collapses that row to a single
/// value, as does a unit sphere itself at its poles.
pub struct NoiseMapBuilderSphere {
    source_module: ModuleRef,
    dest_width: usize,
    dest_height: usize,
    lower_latitude: f64,
    upper_latitude: f64,
    lower_longitude: f64,
    upper_longitude: f64,
}

impl NoiseMapBuilderSphere {
    pub fn new(source_module: ModuleRef) -> Self {
        NoiseMapBuilderSphere {
            source_module,
            dest_width: 0,
            dest_height: 0,
            lower_latitude: DEFAULT_SPHERE_LOWER_LATITUDE,
            upper_latitude: DEFAULT_SPHERE_UPPER_LATITUDE,
            lower_longitude: DEFAULT_SPHERE_LOWER_LONGITUDE,
            upper_longitude: DEFAULT_SPHERE_UPPER_LONGITUDE,
        }
    }

    pub fn set_source_module(&mut self, source_module: ModuleRef) {
        self.source_module = source_module;
    }

    pub fn set_dest_size(&mut self, width: usize, height: usize) {
        self.dest_width = width;
        self.dest_height = height;
    }

    pub fn set_bounds(
        &mut self,
        lower_latitude: f64,
        upper_latitude: f64,
        lower_longitude: f64,
        upper_longitude: f64,
    ) {
        self.lower_latitude = lower_latitude;
        self.upper_latitude = upper_latitude;
        self.lower_longitude = lower_longitude;
        self.upper_longitude = upper_longitude;
    }

    pub fn build(&self) -> Result<NoiseMap> {
        validate_size(self.dest_width, self.dest_height)?;
        validate_bounds(self.lower_latitude, self.upper_latitude, "latitude")?;
        validate_bounds(self.lower_longitude, self.upper_longitude, "longitude")?;

        let lat_delta = (self.upper_latitude - self.lower_latitude) / self.dest_height as f64;
        let lon_delta = (self.upper_longitude - self.lower_longitude) / self.dest_width as f64;

        let model = SphereModel::new(self.source_module.clone());
        let mut dest = NoiseMap::new(self.dest_width, self.dest_height);

        for j in 0..self.dest_height {
            let lat = self.upper_latitude - j as f64 * lat_delta;
            for i in 0..self.dest_width {
                let lon = self.lower_longitude + i as f64 * lon_delta;
                dest.set(i as i64, j as i64, model.value(lat, lon));
            }
        }

        Ok(dest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module::generators::{Const, Perlin};
    use std::rc::Rc;

    #[test]
    fn rejects_zero_size() {
        let b = NoiseMapBuilderSphere::new(Rc::new(Const::new(0.0)));
        assert!(b.build().is_err());
    }

    #[test]
    fn fills_every_pixel_with_a_constant_source() {
        let mut b = NoiseMapBuilderSphere::new(Rc::new(Const::new(-0.3)));
        b.set_dest_size(6, 5);
        let map = b.build().unwrap();
        for j in 0..5 {
            for i in 0..6 {
                assert_eq!(map.get(i, j), -0.3);
            }
        }
    }

    #[test]
    fn top_row_collapses_at_the_pole() {
        let mut b = NoiseMapBuilderSphere::new(Rc::new(Perlin::new()));
        b.set_dest_size(512, 256);
        b.set_bounds(-90.0, 90.0, -180.0, 180.0);
        let map = b.build().unwrap();

        let first = map.get(0, 0);
        for i in 1..512 {
            assert!(
                (map.get(i, 0) - first).abs() < 1e-12,
                "pole pixel {} differs from pixel 0",
                i
            );
        }
    }
}
