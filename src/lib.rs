//! A coherent-noise module pipeline for procedural textures and
//! terrain-like heightmaps.
//!
//! A *noise module* is a value-producing node `f(x, y, z) -> f64`. Complex
//! effects come from composing many such modules into a directed acyclic
//! graph: generators sit at the leaves, and modifiers, combiners,
//! selectors, and transforms recombine their outputs further up the tree.
//! A map builder then samples the root module across a plane, cylinder,
//! or sphere into a [`NoiseMap`], the boundary artifact this crate hands
//! off to a renderer.
//!
//! # Quick start
//!
//! ```rust
//! use coherent_noise::module::generators::Perlin;
//! use coherent_noise::module::modifiers::ScaleBias;
//! use coherent_noise::module::Module;
//! use coherent_noise::builder::NoiseMapBuilderPlane;
//! use std::rc::Rc;
//!
//! let perlin = Rc::new(Perlin::new());
//! let terrain = Rc::new(ScaleBias::new(perlin.clone(), 0.5, 0.0));
//! println!("{}", terrain.value(0.1, 0.2, 0.3));
//!
//! let mut builder = NoiseMapBuilderPlane::new(terrain);
//! builder.set_dest_size(64, 64);
//! let map = builder.build().unwrap();
//! println!("generated a {}x{} noise map", map.width(), map.height());
//! ```

pub mod error;
pub mod math;
pub mod noisegen;
pub mod module;
pub mod surface;
pub mod noisemap;
pub mod builder;

pub use error::{NoiseError, Result};
pub use module::{Module, ModuleRef};
pub use noisegen::NoiseQuality;
pub use noisemap::NoiseMap;
