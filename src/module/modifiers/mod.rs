//! Single-source modules that transform their child's output value.

mod abs;
mod invert;
mod scale_bias;
mod clamp;
mod exponent;
mod curve;
mod terrace;

pub use abs::Abs;
pub use invert::Invert;
pub use scale_bias::ScaleBias;
pub use clamp::Clamp;
pub use exponent::Exponent;
pub use curve::{Curve, ControlPoint};
pub use terrace::Terrace;
