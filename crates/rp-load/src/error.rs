use thiserror::Error;

use rp_spatial::SpatialError;

/// Why a bulk load was abandoned.  Nothing from the failed source is
/// committed.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("line {line}: {message}")]
    Parse { line: u64, message: String },

    #[error("line {line}: unknown transport mode {tag:?}")]
    UnknownMode { line: u64, tag: String },

    #[error("line {line}: {source}")]
    Link {
        line: u64,
        #[source]
        source: SpatialError,
    },

    #[error("malformed record: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type LoadResult<T> = Result<T, LoadError>;
