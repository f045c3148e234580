//! Shared fixtures for the mosaic integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use mosaic::codec;
use mosaic::PixelBuffer;

pub fn solid(width: u32, height: u32, rgb: [u8; 3]) -> PixelBuffer {
    let mut buf = PixelBuffer::create(width, height, 0).unwrap();
    for y in 0..height {
        for x in 0..width {
            buf.set(x, y, rgb);
        }
    }
    buf
}

/// Each column carries its own x value, so column picks are visible.
pub fn column_ramp(width: u32, height: u32) -> PixelBuffer {
    let mut buf = PixelBuffer::create(width, height, 0).unwrap();
    for y in 0..height {
        for x in 0..width {
            let v = (x % 256) as u8;
            buf.set(x, y, [v, 255 - v, 7]);
        }
    }
    buf
}

/// Write `frames` as numbered PNGs under `dir` and return their paths.
pub fn write_frames(dir: &Path, frames: &[PixelBuffer]) -> Vec<PathBuf> {
    frames
        .iter()
        .enumerate()
        .map(|(i, frame)| {
            let path = dir.join(format!("frame-{i:04}.png"));
            codec::write_png(frame, &path).unwrap();
            path
        })
        .collect()
}
