//! Defines network errors.

use std::{error, fmt};

/// An error type for all operations on networks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NetworkError {
    /// A network was constructed with a layer of size zero.
    InvalidConfiguration(usize, usize, usize),
    /// An operation was given a vector whose length does not match the layer it feeds.
    DimensionMismatch(usize, usize),
}

impl error::Error for NetworkError {}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration(i, h, o) => {
                write!(f, "Layer sizes must be positive, got {}x{}x{}.", i, h, o)
            }
            Self::DimensionMismatch(expected, actual) => {
                write!(f, "Expected a vector of length {}, got {}.", expected, actual)
            }
        }
    }
}
