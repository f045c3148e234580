// SPDX-License-Identifier: MIT
// Area-filter resampler built on fast_image_resize.
// RGB24 in -> RGB24 out, one call per pass. The multi-pass policy lives in engine.rs;
// this file only knows how to run one resize and what the backend can't do.

use fast_image_resize as fir;
use fir::images::{TypedImage, TypedImageRef};
use fir::pixels::U8x3;
use fir::{FilterType, ResizeAlg, ResizeOptions, Resizer};

use crate::error::ScaleResult;
use crate::pixel::{alloc_filled, check_dimensions, try_reserve, PixelBuffer, BYTES_PER_PIXEL};

/// Largest per-call reduction factor along one axis.
pub const MAX_FILTER_SIZE: u32 = 256;
/// Smallest target width older area-filter backends accept.
pub const LEGACY_MIN_WIDTH: u32 = 8;
/// Smallest target height older area-filter backends accept.
pub const LEGACY_MIN_HEIGHT: u32 = 2;

/// What a resampler backend can be trusted with.
///
/// These are reported by the backend (or injected by configuration) and read
/// once by the engine; they are policy inputs, not compile-time switches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Capabilities {
    /// Targets narrower than this must not be requested directly.
    pub min_width: Option<u32>,
    /// Targets shorter than this must not be requested directly.
    pub min_height: Option<u32>,
    /// Going from a wide source straight to width 1 adds noise; stop at 2 first.
    pub single_column_guard: bool,
}

impl Capabilities {
    /// Backends with the 8x2 minimum target size.
    pub const fn legacy() -> Self {
        Self {
            min_width: Some(LEGACY_MIN_WIDTH),
            min_height: Some(LEGACY_MIN_HEIGHT),
            single_column_guard: true,
        }
    }

    /// Backends without a minimum target size.
    pub const fn modern() -> Self {
        Self {
            min_width: None,
            min_height: None,
            single_column_guard: true,
        }
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::modern()
    }
}

/// Named capability sets selectable from configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ResamplerProfile {
    /// Emulate a backend that refuses targets below 8x2
    Legacy,
    /// No minimum target size
    #[default]
    Modern,
}

impl ResamplerProfile {
    /// Capability set this profile stands for.
    pub fn capabilities(self) -> Capabilities {
        match self {
            ResamplerProfile::Legacy => Capabilities::legacy(),
            ResamplerProfile::Modern => Capabilities::modern(),
        }
    }
}

/// One resize call. Implementors do not loop; the engine does.
pub trait Resample {
    /// Limits of this backend.
    fn capabilities(&self) -> Capabilities;

    /// Produce a new `width x height` buffer from `src` with an area filter.
    fn resample(&mut self, src: &PixelBuffer, width: u32, height: u32)
        -> ScaleResult<PixelBuffer>;
}

impl<R: Resample + ?Sized> Resample for &mut R {
    fn capabilities(&self) -> Capabilities {
        (**self).capabilities()
    }

    fn resample(&mut self, src: &PixelBuffer, width: u32, height: u32) -> ScaleResult<PixelBuffer> {
        (**self).resample(src, width, height)
    }
}

/// Reused scratch to compact strided input to tightly packed rows (only if needed).
#[derive(Default)]
struct Staging {
    buf: Vec<u8>,
}

impl Staging {
    fn ensure_len(&mut self, len: usize) -> ScaleResult<()> {
        if self.buf.len() < len {
            let additional = len - self.buf.len();
            try_reserve(&mut self.buf, additional)?;
            self.buf.resize(len, 0);
        }
        Ok(())
    }
}

/// Production resampler: fast_image_resize box convolution.
pub struct FirResampler {
    resizer: Resizer,
    options: ResizeOptions,
    staging: Staging,
    caps: Capabilities,
}

impl Default for FirResampler {
    fn default() -> Self {
        Self::new()
    }
}

impl FirResampler {
    /// Box-filter backend with [`Capabilities::modern`].
    pub fn new() -> Self {
        Self::with_capabilities(Capabilities::modern())
    }

    /// Report `caps` instead of the backend's own limits.
    pub fn with_capabilities(caps: Capabilities) -> Self {
        Self {
            resizer: Resizer::new(),
            options: ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Box)),
            staging: Staging::default(),
            caps,
        }
    }
}

impl Resample for FirResampler {
    fn capabilities(&self) -> Capabilities {
        self.caps
    }

    fn resample(&mut self, src: &PixelBuffer, width: u32, height: u32) -> ScaleResult<PixelBuffer> {
        check_dimensions(width, height)?;

        // --- Build source view (tightly packed) ---
        let tight_row_bytes = src.width() as usize * BYTES_PER_PIXEL;
        let src_bytes: &[u8] = if src.is_packed() {
            src.as_bytes()
        } else {
            let len = tight_row_bytes * src.height() as usize;
            self.staging.ensure_len(len)?;
            compact_rows(
                src.as_bytes(),
                src.stride(),
                &mut self.staging.buf[..len],
                tight_row_bytes,
                src.height() as usize,
            );
            &self.staging.buf[..len]
        };
        let src_view = TypedImageRef::<U8x3>::from_buffer(src.width(), src.height(), src_bytes)?;

        // --- Build destination view (exact canvas) ---
        let mut dst_bytes = alloc_filled(width as usize * height as usize * BYTES_PER_PIXEL, 0)?;
        {
            let mut dst_view = TypedImage::<U8x3>::from_buffer(width, height, &mut dst_bytes)?;
            self.resizer
                .resize_typed::<U8x3>(&src_view, &mut dst_view, &self.options)?;
        }

        PixelBuffer::from_raw(width, height, width as usize * BYTES_PER_PIXEL, dst_bytes)
    }
}

#[inline]
fn compact_rows(src: &[u8], src_pitch: usize, dst: &mut [u8], row_bytes: usize, rows: usize) {
    for r in 0..rows {
        let s = &src[r * src_pitch..r * src_pitch + row_bytes];
        let d = &mut dst[r * row_bytes..(r + 1) * row_bytes];
        d.copy_from_slice(s);
    }
}
