// SPDX-License-Identifier: MIT
//! Pixel-exact compositing on [`PixelBuffer`]s: opaque overlay, transpose and
//! single-column extraction. No blending, no resampling.

use crate::error::ScaleResult;
use crate::pixel::{PixelBuffer, BYTES_PER_PIXEL};

/// Copy every pixel of `src` into `dst` at `(offset_x, offset_y)`.
///
/// The placement must fit: `offset_x + src.width() <= dst.width()` and
/// `offset_y + src.height() <= dst.height()`. Debug builds assert this.
pub fn overlay(src: &PixelBuffer, dst: &mut PixelBuffer, offset_x: u32, offset_y: u32) {
    debug_assert!(
        offset_x as u64 + src.width() as u64 <= dst.width() as u64
            && offset_y as u64 + src.height() as u64 <= dst.height() as u64,
        "{}x{} at ({offset_x}, {offset_y}) does not fit {}x{}",
        src.width(),
        src.height(),
        dst.width(),
        dst.height()
    );

    let row_bytes = src.width() as usize * BYTES_PER_PIXEL;
    let dst_stride = dst.stride();
    let x_start = offset_x as usize * BYTES_PER_PIXEL;
    let bytes = dst.bytes_mut();
    for y in 0..src.height() {
        let start = (offset_y + y) as usize * dst_stride + x_start;
        bytes[start..start + row_bytes].copy_from_slice(src.row(y));
    }
}

/// Transpose: the result is `src.height() x src.width()` with
/// `out[x, y] == src[y, x]`.
pub fn flip(src: &PixelBuffer) -> ScaleResult<PixelBuffer> {
    let mut out = PixelBuffer::create(src.height(), src.width(), 0)?;
    for y in 0..src.height() {
        for x in 0..src.width() {
            out.set(y, x, src.get(x, y));
        }
    }
    Ok(out)
}

/// One-pixel-wide copy of the source column at `floor(width * percent)`.
///
/// `percent` is expected in `[0.0, 1.0)`.
pub fn extract_column(src: &PixelBuffer, percent: f64) -> ScaleResult<PixelBuffer> {
    let x = (f64::from(src.width()) * percent) as u32;
    debug_assert!(x < src.width(), "column {x} outside width {}", src.width());

    let mut out = PixelBuffer::create(1, src.height(), 0)?;
    for y in 0..src.height() {
        out.set(0, y, src.get(x, y));
    }
    Ok(out)
}
