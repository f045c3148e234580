//! # Error Handling
//!
//! One error type for the whole mosaic pipeline. Engine failures arrive as
//! [`ScaleError`] and are wrapped; codec, file and configuration failures are
//! raised here with the operation and path that failed.
//!
//! Nothing in the pipeline is retried: decoding, scaling and encoding are
//! deterministic, so a failed step fails the job.
//!
//! ## Usage
//!
//! ```rust
//! use mosaic::error::MosaicError;
//!
//! let err = MosaicError::config("width", "must be greater than 0");
//! assert_eq!(err.to_string(), "invalid configuration for `width`: must be greater than 0");
//! ```

use std::path::{Path, PathBuf};

use mosaic_scale::ScaleError;
use thiserror::Error;

/// Errors produced by the mosaic pipeline.
#[derive(Debug, Error)]
pub enum MosaicError {
    /// Allocation, resampling or conversion failure inside the engine.
    #[error(transparent)]
    Scale(#[from] ScaleError),

    /// The encoder could not be opened or produced no output.
    #[error("failed to encode {}: {reason}", path.display())]
    Encode { path: PathBuf, reason: String },

    /// An input could not be decoded as an image.
    #[error("failed to decode {}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// A file could not be read or written.
    #[error("{operation} failed for {}", path.display())]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration rejected before any work started.
    #[error("invalid configuration for `{field}`: {reason}")]
    Config { field: &'static str, reason: String },
}

impl MosaicError {
    /// Create an encode error
    pub fn encode(path: impl AsRef<Path>, reason: impl Into<String>) -> Self {
        Self::Encode {
            path: path.as_ref().to_path_buf(),
            reason: reason.into(),
        }
    }

    /// Create a decode error
    pub fn decode(path: impl AsRef<Path>, source: image::ImageError) -> Self {
        Self::Decode {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create an I/O error
    pub fn io(operation: &'static str, path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            operation,
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a configuration error
    pub fn config(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Config {
            field,
            reason: reason.into(),
        }
    }
}

/// Result type for pipeline operations.
pub type MosaicResult<T> = Result<T, MosaicError>;
