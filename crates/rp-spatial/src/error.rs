//! Spatial-subsystem error type.

use thiserror::Error;

/// Errors produced while building a `LinkGraph`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SpatialError {
    #[error("location {0:?} not found in index")]
    UnknownLocation(String),

    #[error("link {from:?}–{to:?} has invalid distance {distance}")]
    InvalidDistance { from: String, to: String, distance: f64 },
}

pub type SpatialResult<T> = Result<T, SpatialError>;
