//! Integration tests for the multi-pass ScaleEngine.

mod common;

use common::{gradient, same_pixels, solid, CountingResampler};
use mosaic_scale::{
    Capabilities, FirResampler, PixelBuffer, Resample, ScaleEngine, ScaleError, ScaleResult, Size,
};

fn engine(caps: Capabilities) -> ScaleEngine<CountingResampler<FirResampler>> {
    ScaleEngine::new(CountingResampler::new(FirResampler::with_capabilities(caps)))
}

fn is_uniform(buf: &PixelBuffer, rgb: [u8; 3]) -> bool {
    (0..buf.height()).all(|y| (0..buf.width()).all(|x| buf.get(x, y) == rgb))
}

#[test]
fn test_identity_copies_without_resampling() {
    let mut src = PixelBuffer::with_stride(5, 4, 20, 0).unwrap();
    for y in 0..4 {
        for x in 0..5 {
            src.set(x, y, [x as u8, y as u8, 9]);
        }
    }
    let mut engine = engine(Capabilities::modern());
    let out = engine.scale(&src, 5, 4).unwrap();
    assert!(same_pixels(&out, &src));
    assert_eq!(engine.resampler().passes(), 0);
}

#[test]
fn test_four_by_four_to_single_pixel_goes_through_width_two() {
    let src = PixelBuffer::create(4, 4, 10).unwrap();
    let mut engine = engine(Capabilities::modern());
    let out = engine.scale(&src, 1, 1).unwrap();

    assert_eq!((out.width(), out.height()), (1, 1));
    assert_eq!(out.get(0, 0), [10, 10, 10]);
    assert_eq!(
        engine.resampler().calls,
        vec![
            (Size::new(4, 4), Size::new(2, 1)),
            (Size::new(2, 1), Size::new(1, 1)),
        ]
    );
}

fn log_128_bound(extent: u32) -> usize {
    (f64::from(extent).ln() / 128f64.ln()).ceil() as usize
}

fn assert_within_filter_size(engine: &ScaleEngine<CountingResampler<FirResampler>>) {
    for (from, to) in &engine.resampler().calls {
        assert!(from.w / to.w <= mosaic_scale::MAX_FILTER_SIZE);
        assert!(from.h / to.h <= mosaic_scale::MAX_FILTER_SIZE);
    }
}

#[test]
fn test_thousand_square_to_single_pixel_without_column_guard() {
    let src = PixelBuffer::create(1000, 1000, 200).unwrap();
    let mut engine = engine(Capabilities {
        min_width: None,
        min_height: None,
        single_column_guard: false,
    });
    let out = engine.scale(&src, 1, 1).unwrap();

    assert_eq!(out.get(0, 0), [200, 200, 200]);
    assert_eq!(log_128_bound(1000), 2);
    assert!(engine.resampler().passes() <= log_128_bound(1000));
    assert_eq!(
        engine.resampler().calls,
        vec![
            (Size::new(1000, 1000), Size::new(4, 4)),
            (Size::new(4, 4), Size::new(1, 1)),
        ]
    );
    assert_within_filter_size(&engine);
}

#[test]
fn test_thousand_square_to_single_pixel_with_column_guard() {
    let src = PixelBuffer::create(1000, 1000, 200).unwrap();
    let mut engine = engine(Capabilities::modern());
    let out = engine.scale(&src, 1, 1).unwrap();

    assert_eq!(out.get(0, 0), [200, 200, 200]);
    // the guard adds one settle pass through width 2
    assert_eq!(engine.resampler().passes(), log_128_bound(1000) + 1);
    assert_eq!(engine.resampler().calls[1].1, Size::new(2, 1));
    assert_within_filter_size(&engine);
}

#[test]
fn test_one_backend_shared_across_engines() {
    let mut backend = CountingResampler::new(FirResampler::new());
    let src = solid(64, 64, [9, 8, 7]);

    let small = ScaleEngine::new(&mut backend).scale(&src, 8, 8).unwrap();
    let wide = ScaleEngine::new(&mut backend).scale(&src, 32, 4).unwrap();

    assert!(is_uniform(&small, [9, 8, 7]));
    assert!(is_uniform(&wide, [9, 8, 7]));
    assert_eq!(
        backend.calls,
        vec![
            (Size::new(64, 64), Size::new(8, 8)),
            (Size::new(64, 64), Size::new(32, 4)),
        ]
    );
}

#[test]
fn test_legacy_backend_walks_to_minimum_then_boxes() {
    let src = solid(100, 100, [30, 60, 90]);
    let mut engine = engine(Capabilities::legacy());
    let out = engine.scale(&src, 3, 1).unwrap();

    assert_eq!((out.width(), out.height()), (3, 1));
    assert!(is_uniform(&out, [30, 60, 90]));
    assert_eq!(
        engine.resampler().calls,
        vec![(Size::new(100, 100), Size::new(8, 2))]
    );
}

#[test]
fn test_box_fallback_reaches_true_target_after_width_relaxed() {
    // width guard relaxes 5 -> 8, then the height guard forces the box filter;
    // the result must still be the requested 5x1
    let src = gradient(20, 2);
    let mut engine = engine(Capabilities::legacy());
    let out = engine.scale(&src, 5, 1).unwrap();
    assert_eq!((out.width(), out.height()), (5, 1));
    assert_eq!(engine.resampler().passes(), 0);
}

#[test]
fn test_upscale_reaches_target_in_one_pass() {
    let src = gradient(3, 2);
    let mut engine = engine(Capabilities::modern());
    let out = engine.scale(&src, 40, 25).unwrap();
    assert_eq!((out.width(), out.height()), (40, 25));
    assert_eq!(engine.resampler().passes(), 1);
}

#[test]
fn test_uniform_source_stays_uniform_when_shrunk() {
    let src = solid(333, 77, [1, 128, 254]);
    for caps in [Capabilities::modern(), Capabilities::legacy()] {
        for (w, h) in [(1, 1), (2, 1), (7, 3), (100, 50), (332, 76)] {
            let out = engine(caps).scale(&src, w, h).unwrap();
            assert_eq!((out.width(), out.height()), (w, h));
            assert!(is_uniform(&out, [1, 128, 254]), "{w}x{h} under {caps:?}");
        }
    }
}

#[test]
fn test_source_is_left_untouched() {
    let src = gradient(64, 48);
    let before = src.clone();
    let _ = engine(Capabilities::legacy()).scale(&src, 1, 1).unwrap();
    assert_eq!(src, before);
}

#[test]
fn test_zero_target_is_rejected() {
    let src = gradient(4, 4);
    assert!(matches!(
        engine(Capabilities::modern()).scale(&src, 0, 3),
        Err(ScaleError::InvalidDimensions { width: 0, height: 3 })
    ));
}

struct Unavailable;

impl Resample for Unavailable {
    fn capabilities(&self) -> Capabilities {
        Capabilities::modern()
    }

    fn resample(&mut self, _: &PixelBuffer, _: u32, _: u32) -> ScaleResult<PixelBuffer> {
        Err(ScaleError::ResamplerUnavailable("no context".into()))
    }
}

#[test]
fn test_resampler_failure_propagates() {
    let src = gradient(16, 16);
    let err = ScaleEngine::new(Unavailable).scale(&src, 4, 4).unwrap_err();
    assert!(matches!(err, ScaleError::ResamplerUnavailable(_)));
}

#[test]
fn test_injected_capabilities_override_backend() {
    let src = solid(4, 4, [5, 5, 5]);
    let mut engine = ScaleEngine::with_capabilities(
        CountingResampler::new(FirResampler::new()),
        Capabilities::legacy(),
    );
    assert_eq!(engine.capabilities(), Capabilities::legacy());
    let out = engine.scale(&src, 1, 1).unwrap();
    assert_eq!(out.get(0, 0), [5, 5, 5]);
    assert_eq!(engine.resampler().passes(), 0);
}
