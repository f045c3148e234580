//! # Mosaic Configuration
//!
//! Configuration shared by the CLI and library callers. It fixes the canvas,
//! how each frame is turned into a slice, and which resampler limits the
//! scale engine must respect.
//!
//! ## Configuration Parameters
//!
//! | Parameter | Type | Range | Description |
//! |-----------|------|-------|-------------|
//! | `width` | `u32` | >= 1 | Canvas width in pixels |
//! | `height` | `u32` | >= 1 | Canvas height in pixels |
//! | `style` | `Style` | see [`Style`] | How frames become slices |
//! | `columns` | `u32` | >= 1 | Grid columns (`thumbnails` only) |
//! | `background` | `u8` | 0-255 | Fill for every channel of unused canvas |
//! | `profile` | `ResamplerProfile` | legacy / modern | Resampler capability set |
//!
//! ## Examples
//!
//! ```rust
//! use mosaic::config::MosaicConfig;
//! use mosaic::processing::Style;
//!
//! let mut config = MosaicConfig::default();
//! config.style = Style::Thumbnails;
//! config.columns = 4;
//! assert!(config.validate().is_ok());
//! ```

use mosaic_scale::ResamplerProfile;

use crate::processing::Style;

/// Parameters for one mosaic render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MosaicConfig {
    /// Canvas width in pixels.
    pub width: u32,

    /// Canvas height in pixels.
    pub height: u32,

    /// How each frame is reduced to its slot.
    pub style: Style,

    /// Number of grid columns for [`Style::Thumbnails`]. Ignored by strip styles.
    pub columns: u32,

    /// Byte written to every channel of the canvas before frames are placed.
    pub background: u8,

    /// Resampler limits the scale engine plans around.
    pub profile: ResamplerProfile,
}

impl Default for MosaicConfig {
    /// Default values:
    /// - `width` x `height`: 1000 x 150 (a typical barcode strip)
    /// - `style`: horizontal
    /// - `columns`: 4
    /// - `background`: 0 (black)
    /// - `profile`: modern
    fn default() -> Self {
        Self {
            width: 1000,
            height: 150,
            style: Style::Horizontal,
            columns: 4,
            background: 0,
            profile: ResamplerProfile::Modern,
        }
    }
}

impl MosaicConfig {
    /// Creates a new configuration with the specified parameters.
    pub fn new(
        width: u32,
        height: u32,
        style: Style,
        columns: u32,
        background: u8,
        profile: ResamplerProfile,
    ) -> Self {
        Self {
            width,
            height,
            style,
            columns,
            background,
            profile,
        }
    }

    /// Validates the configuration parameters.
    pub fn validate(&self) -> Result<(), String> {
        if self.width == 0 {
            return Err("Canvas width must be greater than 0".to_string());
        }
        if self.height == 0 {
            return Err("Canvas height must be greater than 0".to_string());
        }
        if self.style == Style::Thumbnails && self.columns == 0 {
            return Err("Thumbnail grid needs at least one column".to_string());
        }
        Ok(())
    }
}
