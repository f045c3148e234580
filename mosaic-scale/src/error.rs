// SPDX-License-Identifier: MIT
//! Errors raised by the scaling engine.
//!
//! Every failure here is deterministic: the engine has no network, no
//! concurrency and no transient state, so nothing is retried internally.
//! Out-of-range pixel coordinates and overlay placements are caller contract
//! violations and are not reported through this type.

use thiserror::Error;

/// Errors that can occur while allocating, converting or scaling buffers.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ScaleError {
    /// A pixel buffer or staging area could not be allocated.
    #[error("allocation of {bytes} bytes failed")]
    AllocationFailure { bytes: usize },

    /// The external resampling context could not be constructed.
    #[error("resampler unavailable: {0}")]
    ResamplerUnavailable(String),

    /// Zero-sized buffers are not representable.
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Row pitch shorter than one packed row.
    #[error("invalid stride: {stride} bytes, need at least {min}")]
    InvalidStride { stride: usize, min: usize },

    /// Interchange or raw byte slice does not match the declared geometry.
    #[error("interchange buffer too small: need {needed} bytes, got {actual}")]
    InvalidInterchange { needed: usize, actual: usize },
}

impl From<fast_image_resize::ImageBufferError> for ScaleError {
    fn from(e: fast_image_resize::ImageBufferError) -> Self {
        Self::ResamplerUnavailable(e.to_string())
    }
}

impl From<fast_image_resize::ResizeError> for ScaleError {
    fn from(e: fast_image_resize::ResizeError) -> Self {
        Self::ResamplerUnavailable(e.to_string())
    }
}

/// Result type for engine operations.
pub type ScaleResult<T> = Result<T, ScaleError>;
