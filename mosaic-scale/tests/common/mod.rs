//! Shared fixtures for the mosaic-scale integration tests.

#![allow(dead_code)]

use mosaic_scale::{PixelBuffer, Resample, ScaleResult, Size};

/// Solid buffer with distinct channel values.
pub fn solid(width: u32, height: u32, rgb: [u8; 3]) -> PixelBuffer {
    let mut buf = PixelBuffer::create(width, height, 0).unwrap();
    for y in 0..height {
        for x in 0..width {
            buf.set(x, y, rgb);
        }
    }
    buf
}

/// Diagonal gradient, handy for spotting transposition mistakes.
pub fn gradient(width: u32, height: u32) -> PixelBuffer {
    let mut buf = PixelBuffer::create(width, height, 0).unwrap();
    for y in 0..height {
        for x in 0..width {
            buf.set(x, y, [(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8]);
        }
    }
    buf
}

/// Pixel-level equality, ignoring row padding.
pub fn same_pixels(a: &PixelBuffer, b: &PixelBuffer) -> bool {
    a.size() == b.size() && (0..a.height()).all(|y| a.row(y) == b.row(y))
}

/// Wraps a resampler and records every call it serves.
pub struct CountingResampler<R> {
    pub inner: R,
    pub calls: Vec<(Size, Size)>,
}

impl<R> CountingResampler<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            calls: Vec::new(),
        }
    }

    pub fn passes(&self) -> usize {
        self.calls.len()
    }
}

impl<R: Resample> Resample for CountingResampler<R> {
    fn capabilities(&self) -> mosaic_scale::Capabilities {
        self.inner.capabilities()
    }

    fn resample(&mut self, src: &PixelBuffer, width: u32, height: u32) -> ScaleResult<PixelBuffer> {
        self.calls.push((src.size(), Size::new(width, height)));
        self.inner.resample(src, width, height)
    }
}
