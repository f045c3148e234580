//! Slot geometry for strip and grid mosaics.
//!
//! Strips divide the canvas width evenly between frames using integer math,
//! so slot widths differ by at most one pixel and always sum to the canvas
//! width. When there are more frames than pixels some slots are empty.

use crate::config::MosaicConfig;
use crate::processing::Style;

/// Destination rectangle for one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slot {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Slot {
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Placement scheme for a fixed number of frames on a fixed canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    /// Full-height vertical slices, left to right.
    Strip { width: u32, height: u32, frames: u32 },
    /// Equal tiles, row-major.
    Grid {
        width: u32,
        height: u32,
        frames: u32,
        columns: u32,
    },
}

impl Layout {
    pub fn for_config(config: &MosaicConfig, frames: u32) -> Self {
        match config.style {
            Style::Thumbnails => Layout::Grid {
                width: config.width,
                height: config.height,
                frames,
                columns: config.columns.max(1),
            },
            _ => Layout::Strip {
                width: config.width,
                height: config.height,
                frames,
            },
        }
    }

    pub fn frames(&self) -> u32 {
        match *self {
            Layout::Strip { frames, .. } | Layout::Grid { frames, .. } => frames,
        }
    }

    /// Slot for frame `index`. `index` must be below [`Layout::frames`].
    pub fn slot(&self, index: u32) -> Slot {
        match *self {
            Layout::Strip {
                width,
                height,
                frames,
            } => {
                let edge = |i: u32| (u64::from(i) * u64::from(width) / u64::from(frames)) as u32;
                let x = edge(index);
                Slot {
                    x,
                    y: 0,
                    width: edge(index + 1) - x,
                    height,
                }
            }
            Layout::Grid {
                width,
                height,
                frames,
                columns,
            } => {
                let rows = frames.div_ceil(columns).max(1);
                let tile_w = width / columns;
                let tile_h = height / rows;
                Slot {
                    x: (index % columns) * tile_w,
                    y: (index / columns) * tile_h,
                    width: tile_w,
                    height: tile_h,
                }
            }
        }
    }
}
