//! Core error type.
//!
//! Sub-crates define their own error enums (`SpatialError`, `LoadError`).

use thiserror::Error;

/// Errors raised while parsing core values from text.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RpError {
    #[error("unknown transport mode {0:?}")]
    UnknownMode(String),
}
