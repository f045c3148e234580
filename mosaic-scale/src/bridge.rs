// SPDX-License-Identifier: MIT
// BGRA8 interchange <-> RGB24 PixelBuffer. Straight channel reorder, no resampling.
// Interchange rows are tightly packed (width * 4 bytes); alpha is 255 on export
// and ignored on import.

use crate::error::{ScaleError, ScaleResult};
use crate::pixel::{alloc_filled, check_dimensions, PixelBuffer, BYTES_PER_PIXEL};

/// Bytes per pixel in the interchange format.
pub const BGRA_BYTES_PER_PIXEL: usize = 4;

fn bgra_len(width: u32, height: u32) -> ScaleResult<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(BGRA_BYTES_PER_PIXEL))
        .ok_or(ScaleError::AllocationFailure { bytes: usize::MAX })
}

/// Import a tightly packed BGRA8 surface.
pub fn from_bgra(bgra: &[u8], width: u32, height: u32) -> ScaleResult<PixelBuffer> {
    check_dimensions(width, height)?;
    let needed = bgra_len(width, height)?;
    if bgra.len() < needed {
        return Err(ScaleError::InvalidInterchange {
            needed,
            actual: bgra.len(),
        });
    }

    let mut out = PixelBuffer::create(width, height, 0)?;
    let src_row = width as usize * BGRA_BYTES_PER_PIXEL;
    for y in 0..height {
        let src = &bgra[y as usize * src_row..(y as usize + 1) * src_row];
        let dst = out.row_mut(y);
        for (d, s) in dst
            .chunks_exact_mut(BYTES_PER_PIXEL)
            .zip(src.chunks_exact(BGRA_BYTES_PER_PIXEL))
        {
            d[0] = s[2];
            d[1] = s[1];
            d[2] = s[0];
        }
    }
    Ok(out)
}

/// Export the whole buffer as a tightly packed BGRA8 surface.
pub fn to_bgra(buf: &PixelBuffer) -> ScaleResult<Vec<u8>> {
    let mut out = alloc_filled(bgra_len(buf.width(), buf.height())?, 0)?;
    write_bgra(buf, &mut out, buf.width(), buf.height(), 0, 0)?;
    Ok(out)
}

/// Place `buf` into a larger BGRA8 surface of `target_width x target_height`
/// at `(offset_x, offset_y)`.
///
/// Pixels falling past the surface's right or bottom edge are clipped.
pub fn write_bgra(
    buf: &PixelBuffer,
    target: &mut [u8],
    target_width: u32,
    target_height: u32,
    offset_x: u32,
    offset_y: u32,
) -> ScaleResult<()> {
    let needed = bgra_len(target_width, target_height)?;
    if target.len() < needed {
        return Err(ScaleError::InvalidInterchange {
            needed,
            actual: target.len(),
        });
    }

    let cols = buf.width().min(target_width.saturating_sub(offset_x));
    let rows = buf.height().min(target_height.saturating_sub(offset_y));
    if cols == 0 {
        return Ok(());
    }
    let dst_row = target_width as usize * BGRA_BYTES_PER_PIXEL;
    for y in 0..rows {
        let start = (offset_y + y) as usize * dst_row + offset_x as usize * BGRA_BYTES_PER_PIXEL;
        let dst = &mut target[start..start + cols as usize * BGRA_BYTES_PER_PIXEL];
        let src = &buf.row(y)[..cols as usize * BYTES_PER_PIXEL];
        for (d, s) in dst
            .chunks_exact_mut(BGRA_BYTES_PER_PIXEL)
            .zip(src.chunks_exact(BYTES_PER_PIXEL))
        {
            d[0] = s[2];
            d[1] = s[1];
            d[2] = s[0];
            d[3] = 255;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_reorders_and_ignores_alpha() {
        let bgra = [10, 20, 30, 0, 1, 2, 3, 77];
        let buf = from_bgra(&bgra, 2, 1).unwrap();
        assert_eq!(buf.get(0, 0), [30, 20, 10]);
        assert_eq!(buf.get(1, 0), [3, 2, 1]);
    }

    #[test]
    fn test_export_sets_opaque_alpha() {
        let mut buf = PixelBuffer::create(1, 2, 0).unwrap();
        buf.set(0, 1, [200, 100, 50]);
        assert_eq!(to_bgra(&buf).unwrap(), vec![0, 0, 0, 255, 50, 100, 200, 255]);
    }

    #[test]
    fn test_write_bgra_clips_at_edges() {
        let buf = PixelBuffer::create(3, 3, 9).unwrap();
        let mut surface = vec![0u8; 4 * 4 * 4];
        write_bgra(&buf, &mut surface, 4, 4, 2, 3).unwrap();
        let written: Vec<(usize, usize)> = (0..4)
            .flat_map(|y| (0..4).map(move |x| (x, y)))
            .filter(|&(x, y)| surface[(y * 4 + x) * 4 + 3] == 255)
            .collect();
        assert_eq!(written, vec![(2, 3), (3, 3)]);
    }

    #[test]
    fn test_short_interchange_rejected() {
        assert!(matches!(
            from_bgra(&[0; 7], 2, 1),
            Err(ScaleError::InvalidInterchange { needed: 8, actual: 7 })
        ));
    }
}
