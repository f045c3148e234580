//! # Mosaic Library
//!
//! Builds "movie barcode" style mosaics: every input frame is shrunk to a
//! slice of a fixed canvas and the canvas is written out as a PNG.
//!
//! ## Architecture
//!
//! The library is organized into several key modules:
//! - `codec`: PNG encoding and image decoding for [`PixelBuffer`]s
//! - `processing`: slot layout and the frame-by-frame [`MosaicAssembler`]
//! - `config`: Configuration management and validation
//! - `session`: decode, assemble and write one mosaic from files
//! - `error`: the pipeline-wide [`MosaicError`]
//!
//! Scaling, flipping and compositing live in the `mosaic-scale` crate, which
//! is re-exported as [`scale`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use mosaic::config::MosaicConfig;
//! use mosaic::processing::Style;
//!
//! let config = MosaicConfig {
//!     style: Style::Middlecolumn,
//!     ..MosaicConfig::default()
//! };
//! let frames = ["0001.png", "0002.png", "0003.png"];
//! mosaic::render_mosaic(config, &frames, "barcode.png")?;
//! # Ok::<(), mosaic::MosaicError>(())
//! ```

use std::path::Path;

pub mod codec;
pub mod config;
pub mod error;
pub mod processing;
pub mod session;

pub use mosaic_scale as scale;
pub use mosaic_scale::PixelBuffer;

pub use config::MosaicConfig;
pub use error::{MosaicError, MosaicResult};
pub use processing::{MosaicAssembler, Style};
pub use session::{MosaicSession, SessionSummary};

/// Render `inputs` into a single mosaic PNG at `output`.
///
/// Validates `config` first, then runs a [`MosaicSession`].
pub fn render_mosaic<P: AsRef<Path>>(
    config: MosaicConfig,
    inputs: &[P],
    output: impl AsRef<Path>,
) -> MosaicResult<SessionSummary> {
    config
        .validate()
        .map_err(|reason| MosaicError::config("mosaic", reason))?;
    MosaicSession::new(config).run(inputs, output)
}
