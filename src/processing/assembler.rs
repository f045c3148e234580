//! Frame-by-frame mosaic assembly.
//!
//! The assembler owns the canvas and the scale engine. Each call to
//! [`MosaicAssembler::place`] reduces one frame according to the configured
//! [`Style`] and overlays the result at the frame's slot. Frames may arrive
//! in any order; a slot placed twice keeps the last frame.

use mosaic_scale::{extract_column, flip, overlay, PixelBuffer, Resample, ScaleEngine};
use tracing::{debug, warn};

use crate::config::MosaicConfig;
use crate::error::{MosaicError, MosaicResult};
use crate::processing::{Layout, Slot, Style};

/// Builds one mosaic canvas from a known number of frames.
pub struct MosaicAssembler<R> {
    engine: ScaleEngine<R>,
    layout: Layout,
    style: Style,
    canvas: PixelBuffer,
    placed: u32,
    skipped: u32,
}

impl<R: Resample> MosaicAssembler<R> {
    /// Allocate the canvas, filled with `config.background`.
    pub fn new(engine: ScaleEngine<R>, config: &MosaicConfig, frames: u32) -> MosaicResult<Self> {
        config
            .validate()
            .map_err(|reason| MosaicError::config("mosaic", reason))?;
        let canvas = PixelBuffer::create(config.width, config.height, config.background)?;
        Ok(Self {
            engine,
            layout: Layout::for_config(config, frames),
            style: config.style,
            canvas,
            placed: 0,
            skipped: 0,
        })
    }

    /// Render `frame` into slot `index`.
    ///
    /// Returns `Ok(false)` when the slot is empty and the frame was skipped.
    pub fn place(&mut self, index: u32, frame: &PixelBuffer) -> MosaicResult<bool> {
        let frames = self.layout.frames();
        if index >= frames {
            return Err(MosaicError::config(
                "index",
                format!("frame {index} is outside a mosaic of {frames} frames"),
            ));
        }

        let slot = self.layout.slot(index);
        if slot.is_empty() {
            warn!(index, frames, "slot has no pixels, skipping frame");
            self.skipped += 1;
            return Ok(false);
        }

        let slice = self.render(index, frame, slot)?;
        overlay(&slice, &mut self.canvas, slot.x, slot.y);
        self.placed += 1;
        debug!(
            index,
            x = slot.x,
            y = slot.y,
            width = slot.width,
            height = slot.height,
            "placed frame"
        );
        Ok(true)
    }

    fn render(&mut self, index: u32, frame: &PixelBuffer, slot: Slot) -> MosaicResult<PixelBuffer> {
        let slice = match self.style {
            Style::Horizontal | Style::Thumbnails => {
                self.engine.scale(frame, slot.width, slot.height)?
            }
            Style::Vertical => {
                let rows = self.engine.scale(frame, slot.height, slot.width)?;
                flip(&rows)?
            }
            Style::Slitscan => {
                let percent = f64::from(index) / f64::from(self.layout.frames());
                let column = extract_column(frame, percent)?;
                self.engine.scale(&column, slot.width, slot.height)?
            }
            Style::Middlecolumn => {
                let column = extract_column(frame, 0.5)?;
                self.engine.scale(&column, slot.width, slot.height)?
            }
        };
        Ok(slice)
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Frames overlaid so far.
    pub fn placed(&self) -> u32 {
        self.placed
    }

    /// Frames dropped because their slot was empty.
    pub fn skipped(&self) -> u32 {
        self.skipped
    }

    pub fn canvas(&self) -> &PixelBuffer {
        &self.canvas
    }

    pub fn finish(self) -> PixelBuffer {
        self.canvas
    }
}
