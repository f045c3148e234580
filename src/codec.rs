//! # Codec Bridge
//!
//! Glue between [`PixelBuffer`] and the `image` crate. Output is always PNG
//! (lossless, RGB8, one still image per file); input is anything the `image`
//! crate can decode, converted to RGB24.
//!
//! Encoding happens in memory first and the payload is written verbatim
//! afterwards, so an encoder failure never leaves a truncated file behind.

use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use mosaic_scale::PixelBuffer;
use tracing::debug;

use crate::error::{MosaicError, MosaicResult};

/// Encode `buf` as a complete PNG file image.
///
/// `path` is where the payload is headed; it only labels errors.
pub fn encode_png(buf: &PixelBuffer, path: impl AsRef<Path>) -> MosaicResult<Vec<u8>> {
    let path = path.as_ref();
    let packed = buf.to_packed()?;
    let mut payload = Vec::new();
    PngEncoder::new(&mut payload)
        .write_image(&packed, buf.width(), buf.height(), ExtendedColorType::Rgb8)
        .map_err(|e| MosaicError::encode(path, e.to_string()))?;
    if payload.is_empty() {
        return Err(MosaicError::encode(path, "encoder produced no output"));
    }
    Ok(payload)
}

/// Encode `buf` as PNG and write it to `path`.
pub fn write_png(buf: &PixelBuffer, path: impl AsRef<Path>) -> MosaicResult<()> {
    let path = path.as_ref();
    let payload = encode_png(buf, path)?;
    std::fs::write(path, &payload).map_err(|e| MosaicError::io("write", path, e))?;
    debug!(
        path = %path.display(),
        width = buf.width(),
        height = buf.height(),
        bytes = payload.len(),
        "wrote png"
    );
    Ok(())
}

/// Decode the image at `path` into an RGB24 buffer.
pub fn read_image(path: impl AsRef<Path>) -> MosaicResult<PixelBuffer> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| MosaicError::io("read", path, e))?;
    let rgb = image::load_from_memory(&bytes)
        .map_err(|e| MosaicError::decode(path, e))?
        .to_rgb8();
    let (width, height) = rgb.dimensions();
    Ok(PixelBuffer::from_raw(
        width,
        height,
        width as usize * 3,
        rgb.into_raw(),
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_produces_png_signature() {
        let buf = PixelBuffer::create(3, 2, 128).unwrap();
        let payload = encode_png(&buf, "mem.png").unwrap();
        assert_eq!(&payload[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_write_to_missing_directory_is_io_error() {
        let buf = PixelBuffer::create(1, 1, 0).unwrap();
        let err = write_png(&buf, "/definitely/not/here/out.png").unwrap_err();
        assert!(matches!(err, MosaicError::Io { operation: "write", .. }));
    }
}
