// SPDX-License-Identifier: MIT
//! # RGB24 Pixel Buffer
//!
//! [`PixelBuffer`] is the only pixel representation the engine works on: a
//! contiguous byte vector holding `height` rows of `stride` bytes, each row
//! starting with `width` packed `R, G, B` triplets.
//!
//! ## Ownership
//!
//! A buffer is exclusively owned by whoever holds it. Every transform in this
//! crate (scale, flip, column extraction, format conversion) returns a new
//! buffer and leaves its input untouched. Releasing a buffer is dropping it.
//!
//! ## Addressing
//!
//! Pixel `(x, y)` lives at byte offset `y * stride + x * 3`. Coordinates are
//! the caller's responsibility: debug builds assert them, release builds only
//! get slice bounds checks.

use crate::error::{ScaleError, ScaleResult};

/// Bytes per pixel in the engine's internal format.
pub const BYTES_PER_PIXEL: usize = 3;

/// Width/height pair in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Size {
    pub w: u32,
    pub h: u32,
}

impl Size {
    pub const fn new(w: u32, h: u32) -> Self {
        Self { w, h }
    }
}

/// Owned RGB24 raster with an explicit row pitch.
#[derive(Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    stride: usize,
    bytes: Vec<u8>,
}

impl std::fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("stride", &self.stride)
            .finish_non_exhaustive()
    }
}

impl PixelBuffer {
    /// Allocate a tightly packed buffer with every channel set to `fill`.
    pub fn create(width: u32, height: u32, fill: u8) -> ScaleResult<Self> {
        Self::with_stride(width, height, packed_row_bytes(width)?, fill)
    }

    /// Allocate a buffer whose rows are `stride` bytes apart.
    ///
    /// Padding bytes at the end of each row receive `fill` as well.
    pub fn with_stride(width: u32, height: u32, stride: usize, fill: u8) -> ScaleResult<Self> {
        check_dimensions(width, height)?;
        let min = packed_row_bytes(width)?;
        if stride < min {
            return Err(ScaleError::InvalidStride { stride, min });
        }
        let len = stride
            .checked_mul(height as usize)
            .ok_or(ScaleError::AllocationFailure { bytes: usize::MAX })?;
        let bytes = alloc_filled(len, fill)?;
        Ok(Self {
            width,
            height,
            stride,
            bytes,
        })
    }

    /// Adopt an existing byte vector laid out with the given stride.
    pub fn from_raw(width: u32, height: u32, stride: usize, bytes: Vec<u8>) -> ScaleResult<Self> {
        check_dimensions(width, height)?;
        let min = packed_row_bytes(width)?;
        if stride < min {
            return Err(ScaleError::InvalidStride { stride, min });
        }
        let needed = stride
            .checked_mul(height as usize)
            .ok_or(ScaleError::AllocationFailure { bytes: usize::MAX })?;
        if bytes.len() != needed {
            return Err(ScaleError::InvalidInterchange {
                needed,
                actual: bytes.len(),
            });
        }
        Ok(Self {
            width,
            height,
            stride,
            bytes,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Bytes between the starts of consecutive rows.
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Whether rows carry no padding.
    #[inline]
    pub fn is_packed(&self) -> bool {
        self.stride == self.width as usize * BYTES_PER_PIXEL
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[inline]
    pub(crate) fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    /// Pixel bytes of row `y`, without padding.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        debug_assert!(y < self.height, "row {y} outside height {}", self.height);
        let start = y as usize * self.stride;
        &self.bytes[start..start + self.width as usize * BYTES_PER_PIXEL]
    }

    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        debug_assert!(y < self.height, "row {y} outside height {}", self.height);
        let start = y as usize * self.stride;
        let end = start + self.width as usize * BYTES_PER_PIXEL;
        &mut self.bytes[start..end]
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        debug_assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{}",
            self.width,
            self.height
        );
        y as usize * self.stride + x as usize * BYTES_PER_PIXEL
    }

    /// Read pixel `(x, y)` as `[r, g, b]`.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> [u8; 3] {
        let o = self.offset(x, y);
        [self.bytes[o], self.bytes[o + 1], self.bytes[o + 2]]
    }

    /// Write pixel `(x, y)`.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        let o = self.offset(x, y);
        self.bytes[o..o + BYTES_PER_PIXEL].copy_from_slice(&rgb);
    }

    /// Tightly packed copy of the pixel data (rows without padding).
    pub fn to_packed(&self) -> ScaleResult<Vec<u8>> {
        let row_bytes = self.width as usize * BYTES_PER_PIXEL;
        let mut out = Vec::new();
        try_reserve(&mut out, row_bytes * self.height as usize)?;
        if self.is_packed() {
            out.extend_from_slice(&self.bytes);
        } else {
            for y in 0..self.height {
                out.extend_from_slice(self.row(y));
            }
        }
        Ok(out)
    }
}

pub(crate) fn check_dimensions(width: u32, height: u32) -> ScaleResult<()> {
    if width == 0 || height == 0 {
        return Err(ScaleError::InvalidDimensions { width, height });
    }
    Ok(())
}

fn packed_row_bytes(width: u32) -> ScaleResult<usize> {
    (width as usize)
        .checked_mul(BYTES_PER_PIXEL)
        .ok_or(ScaleError::AllocationFailure { bytes: usize::MAX })
}

pub(crate) fn try_reserve(v: &mut Vec<u8>, additional: usize) -> ScaleResult<()> {
    v.try_reserve_exact(additional)
        .map_err(|_| ScaleError::AllocationFailure { bytes: additional })
}

/// Fallible `vec![fill; len]`.
pub(crate) fn alloc_filled(len: usize, fill: u8) -> ScaleResult<Vec<u8>> {
    let mut v = Vec::new();
    try_reserve(&mut v, len)?;
    v.resize(len, fill);
    Ok(v)
}
