// SPDX-License-Identifier: MIT
//! # mosaic-scale: Multi-Pass Scaling and Compositing for Thumbnail Mosaics
//!
//! This crate resizes RGB24 rasters to arbitrary target sizes and places them
//! onto larger canvases pixel for pixel. It sits between frame decoding and
//! image encoding in a mosaic/barcode generator.
//!
//! ## Architecture Overview
//!
//! The crate is designed around three core principles:
//! 1. **One pixel format**: everything internal is packed `R, G, B` with an explicit stride
//! 2. **Safe passes**: an area-filter backend is only asked for reductions it handles well
//! 3. **New buffers out**: every transform returns a fresh buffer and never touches its input
//!
//! ## Key Components
//!
//! - [`pixel`]: the [`PixelBuffer`] raster and [`Size`]
//! - [`bridge`]: BGRA8 interchange import/export
//! - [`resampler`]: the [`Resample`] seam, backend [`Capabilities`] and the fast_image_resize backend
//! - [`engine`]: the multi-pass [`ScaleEngine`] and its box-filter fallback
//! - [`compositor`]: overlay, flip (transpose) and column extraction
//!
//! ## Pass Bounds
//!
//! - A single pass never reduces an axis by more than [`MAX_FILTER_SIZE`]
//! - Backends with a minimum target size are walked down to that minimum, then box-filtered
//! - Wide sources headed for width 1 stop at width 2 first
//!
//! ## Usage Example
//!
//! ```rust
//! use mosaic_scale::{FirResampler, PixelBuffer, ScaleEngine};
//!
//! let frame = PixelBuffer::create(1920, 1080, 40)?;
//! let mut engine = ScaleEngine::new(FirResampler::new());
//! let column = engine.scale(&frame, 1, 120)?;
//! assert_eq!((column.width(), column.height()), (1, 120));
//! # Ok::<(), mosaic_scale::ScaleError>(())
//! ```

pub mod bridge;
pub mod compositor;
pub mod engine;
mod error;
pub mod pixel;
pub mod resampler;

pub use compositor::{extract_column, flip, overlay};
pub use engine::{box_filter, plan_pass, Pass, ScaleEngine};
pub use error::{ScaleError, ScaleResult};
pub use pixel::{PixelBuffer, Size};
pub use resampler::{
    Capabilities, FirResampler, Resample, ResamplerProfile, LEGACY_MIN_HEIGHT, LEGACY_MIN_WIDTH,
    MAX_FILTER_SIZE,
};
