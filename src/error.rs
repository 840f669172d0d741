//! Error types for the noise module pipeline

use std::fmt;

/// Errors that can occur while configuring or evaluating a noise module
#[derive(Debug, Clone, PartialEq)]
pub enum NoiseError {
    /// A required source-module slot was empty when queried or evaluated
    NoSourceModule,
    /// A parameter value violated an invariant (range, ordering, arity)
    InvalidParameter(String),
}

impl fmt::Display for NoiseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoiseError::NoSourceModule => write!(f, "no source module"),
            NoiseError::InvalidParameter(msg) => write!(f, "invalid parameter: {}", msg),
        }
    }
}

impl std::error::Error for NoiseError {}

/// Result type alias used throughout the noise module pipeline
pub type Result<T> = std::result::Result<T, NoiseError>;
