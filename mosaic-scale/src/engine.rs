// SPDX-License-Identifier: MIT
//! # Multi-Pass Scale Engine
//!
//! A single area-filter call is not safe for every request. It misbehaves when
//!
//! 1. one axis shrinks by more than [`MAX_FILTER_SIZE`],
//! 2. the target is below the backend's minimum size ([`Capabilities`]), or
//! 3. a wide source goes straight to width 1.
//!
//! [`ScaleEngine::scale`] therefore walks toward the target in passes. Each
//! pass picks the true target, then relaxes it toward the current size wherever
//! one of the rules above would be violated ([`plan_pass`]). When the backend
//! cannot get any closer to a degenerate target, the remainder is done by the
//! manual [`box_filter`] and the loop ends.
//!
//! Every pass strictly shrinks the distance to the target, so the number of
//! passes is logarithmic in the overall ratio.
//!
//! ## Buffer ownership
//!
//! The caller's buffer is only ever borrowed. Intermediates are owned by the
//! loop and dropped as soon as the next pass replaces them, on every exit path.

use std::borrow::Cow;

use tracing::debug;

use crate::error::ScaleResult;
use crate::pixel::{check_dimensions, PixelBuffer, Size};
use crate::resampler::{Capabilities, Resample, MAX_FILTER_SIZE};

/// Decision for the next step toward a target size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pass {
    /// Current size equals the target.
    Done,
    /// Run the resampler to this intermediate (or final) size.
    Resample(Size),
    /// The resampler cannot serve the rest; finish with the box filter.
    BoxFilter,
}

/// Choose the next pass from `current` toward `target` under `caps`.
pub fn plan_pass(caps: &Capabilities, current: Size, target: Size) -> Pass {
    if current == target {
        return Pass::Done;
    }

    let mut w = target.w;
    let mut h = target.h;

    if let Some(min_w) = caps.min_width {
        if w < min_w {
            if current.w > min_w {
                w = min_w;
            } else {
                return Pass::BoxFilter;
            }
        }
    }
    if let Some(min_h) = caps.min_height {
        if h < min_h {
            if current.h > min_h {
                h = min_h;
            } else {
                return Pass::BoxFilter;
            }
        }
    }

    if caps.single_column_guard && w == 1 && current.w > 2 {
        w = 2;
    }

    if current.w / w > MAX_FILTER_SIZE {
        w = current.w / MAX_FILTER_SIZE + 1;
    }
    if current.h / h > MAX_FILTER_SIZE {
        h = current.h / MAX_FILTER_SIZE + 1;
    }

    Pass::Resample(Size::new(w, h))
}

/// Drives a [`Resample`] backend across as many passes as a request needs.
pub struct ScaleEngine<R> {
    resampler: R,
    caps: Capabilities,
}

impl<R: Resample> ScaleEngine<R> {
    /// Wrap `resampler`, reading its capabilities once.
    pub fn new(resampler: R) -> Self {
        let caps = resampler.capabilities();
        Self { resampler, caps }
    }

    /// Wrap `resampler` but plan passes with `caps`.
    pub fn with_capabilities(resampler: R, caps: Capabilities) -> Self {
        Self { resampler, caps }
    }

    /// Capabilities passes are planned with.
    pub fn capabilities(&self) -> Capabilities {
        self.caps
    }

    /// The wrapped backend.
    pub fn resampler(&self) -> &R {
        &self.resampler
    }

    /// Scale `src` to exactly `width x height`.
    ///
    /// Returns a new buffer in every case, including the identity case.
    pub fn scale(&mut self, src: &PixelBuffer, width: u32, height: u32) -> ScaleResult<PixelBuffer> {
        check_dimensions(width, height)?;
        let target = Size::new(width, height);

        let mut current: Cow<'_, PixelBuffer> = Cow::Borrowed(src);
        let mut passes = 0u32;
        loop {
            match plan_pass(&self.caps, current.size(), target) {
                Pass::Done => {
                    debug!(passes, width, height, "scale complete");
                    return Ok(current.into_owned());
                }
                Pass::BoxFilter => {
                    debug!(
                        passes,
                        from_w = current.width(),
                        from_h = current.height(),
                        width,
                        height,
                        "resampler cannot reach target, using box filter"
                    );
                    return box_filter(&current, width, height);
                }
                Pass::Resample(step) => {
                    passes += 1;
                    debug!(
                        pass = passes,
                        from_w = current.width(),
                        from_h = current.height(),
                        to_w = step.w,
                        to_h = step.h,
                        "resample pass"
                    );
                    let next = self.resampler.resample(&current, step.w, step.h)?;
                    debug_assert_eq!(next.size(), step, "resampler returned the wrong size");
                    current = Cow::Owned(next);
                }
            }
        }
    }
}

/// Source span `[lower, upper]` sampled for destination coordinate `coord`.
///
/// Single-precision factor, truncating conversions. An inverted span collapses
/// to the nearest-neighbour sample.
#[inline]
fn sample_span(factor: f32, coord: u32) -> (u32, u32) {
    let lower = (f64::from(factor * coord as f32) + 0.5) as i64;
    let upper = (f64::from(factor * (coord + 1) as f32) - 0.5) as i64;
    if lower > upper {
        let nearest = (f64::from(factor) * (f64::from(coord) + 0.5)) as i64;
        return (nearest as u32, nearest as u32);
    }
    (lower as u32, upper as u32)
}

/// Manual box filter: every destination pixel is the truncated mean of its
/// source sample rectangle.
///
/// Used when the resampler cannot serve a degenerate target. Also handles
/// up-scaling through the nearest-neighbour branch of the span computation.
pub fn box_filter(src: &PixelBuffer, width: u32, height: u32) -> ScaleResult<PixelBuffer> {
    let mut out = PixelBuffer::create(width, height, 0)?;

    let x_factor = (f64::from(src.width()) / f64::from(width)) as f32;
    let y_factor = (f64::from(src.height()) / f64::from(height)) as f32;
    let x_spans: Vec<(u32, u32)> = (0..width).map(|x| sample_span(x_factor, x)).collect();

    for y in 0..height {
        let (y_lower, y_upper) = sample_span(y_factor, y);
        for (x, &(x_lower, x_upper)) in (0u32..).zip(x_spans.iter()) {
            let mut sum = [0u64; 3];
            for yy in y_lower..=y_upper {
                for xx in x_lower..=x_upper {
                    let p = src.get(xx, yy);
                    sum[0] += u64::from(p[0]);
                    sum[1] += u64::from(p[1]);
                    sum[2] += u64::from(p[2]);
                }
            }
            let n = u64::from(x_upper - x_lower + 1) * u64::from(y_upper - y_lower + 1);
            out.set(
                x,
                y,
                [(sum[0] / n) as u8, (sum[1] / n) as u8, (sum[2] / n) as u8],
            );
        }
    }

    Ok(out)
}
