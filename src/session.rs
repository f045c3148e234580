//! # Mosaic Session
//!
//! End-to-end orchestration for one mosaic: decode every input in order,
//! place it on the canvas and write the finished PNG.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use mosaic::config::MosaicConfig;
//! use mosaic::session::MosaicSession;
//!
//! let inputs = ["frame-0001.png", "frame-0002.png"];
//! let summary = MosaicSession::new(MosaicConfig::default()).run(&inputs, "barcode.png")?;
//! println!("{} frames", summary.frames);
//! # Ok::<(), mosaic::MosaicError>(())
//! ```

use std::path::{Path, PathBuf};

use mosaic_scale::{FirResampler, ScaleEngine};
use tracing::info;

use crate::codec;
use crate::config::MosaicConfig;
use crate::error::{MosaicError, MosaicResult};
use crate::processing::MosaicAssembler;

/// Outcome of a completed session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionSummary {
    /// Frames placed on the canvas.
    pub frames: u32,
    /// Frames dropped because their slot had no pixels.
    pub skipped: u32,
    pub output: PathBuf,
}

/// One mosaic render driven from files on disk.
pub struct MosaicSession {
    config: MosaicConfig,
}

impl MosaicSession {
    pub fn new(config: MosaicConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MosaicConfig {
        &self.config
    }

    /// Decode `inputs`, assemble them and write the mosaic to `output`.
    ///
    /// The first failing input aborts the session; nothing is written.
    pub fn run<P: AsRef<Path>>(
        &self,
        inputs: &[P],
        output: impl AsRef<Path>,
    ) -> MosaicResult<SessionSummary> {
        let output = output.as_ref();
        if inputs.is_empty() {
            return Err(MosaicError::config("inputs", "at least one input frame is required"));
        }
        let frames = u32::try_from(inputs.len())
            .map_err(|_| MosaicError::config("inputs", "too many input frames"))?;

        info!(
            frames,
            width = self.config.width,
            height = self.config.height,
            style = ?self.config.style,
            profile = ?self.config.profile,
            "mosaic session started"
        );

        let resampler = FirResampler::with_capabilities(self.config.profile.capabilities());
        let mut assembler = MosaicAssembler::new(ScaleEngine::new(resampler), &self.config, frames)?;
        for (index, path) in (0..frames).zip(inputs) {
            let frame = codec::read_image(path)?;
            assembler.place(index, &frame)?;
        }

        let placed = assembler.placed();
        let skipped = assembler.skipped();
        codec::write_png(&assembler.finish(), output)?;

        info!(
            placed,
            skipped,
            output = %output.display(),
            "mosaic session finished"
        );
        Ok(SessionSummary {
            frames: placed,
            skipped,
            output: output.to_path_buf(),
        })
    }
}
