//! Leaf modules with no source dependencies.

mod const_value;
mod checkerboard;
mod cylinders;
mod spheres;
mod perlin;
mod billow;
mod ridged_multi;
mod voronoi;

pub use const_value::Const;
pub use checkerboard::Checkerboard;
pub use cylinders::Cylinders;
pub use spheres::Spheres;
pub use perlin::Perlin;
pub use billow::Billow;
pub use ridged_multi::RidgedMulti;
pub use voronoi::{DistanceFunction, Voronoi};
