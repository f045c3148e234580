//! # Processing Module
//!
//! Turns a sequence of frames into one mosaic canvas: [`layout`] decides where
//! each frame goes, [`assembler`] shrinks it and places it.

pub mod assembler;
pub mod layout;

pub use assembler::MosaicAssembler;
pub use layout::{Layout, Slot};

/// How a frame is reduced to its slot on the canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Style {
    /// Whole frame squashed into a column
    #[default]
    Horizontal,
    /// Frame squashed into a row, then turned on its side
    Vertical,
    /// One source column per frame, sweeping left to right across the sequence
    Slitscan,
    /// The centre column of every frame
    Middlecolumn,
    /// Grid of thumbnails
    Thumbnails,
}
