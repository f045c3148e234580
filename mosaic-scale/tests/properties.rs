//! Property tests for the engine's contracts.

mod common;

use common::{gradient, same_pixels, solid};
use mosaic_scale::{extract_column, flip, Capabilities, FirResampler, ScaleEngine};
use proptest::prelude::*;

fn caps_strategy() -> impl Strategy<Value = Capabilities> {
    prop_oneof![Just(Capabilities::modern()), Just(Capabilities::legacy())]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn scale_hits_requested_dimensions(
        sw in 1u32..48, sh in 1u32..48,
        tw in 1u32..64, th in 1u32..64,
        caps in caps_strategy(),
    ) {
        let src = gradient(sw, sh);
        let mut engine = ScaleEngine::new(FirResampler::with_capabilities(caps));
        let out = engine.scale(&src, tw, th).unwrap();
        prop_assert_eq!((out.width(), out.height()), (tw, th));
    }

    #[test]
    fn uniform_input_shrinks_to_uniform_output(
        sw in 2u32..80, sh in 2u32..80,
        fw in 0.0f64..1.0, fh in 0.0f64..1.0,
        rgb in any::<[u8; 3]>(),
        caps in caps_strategy(),
    ) {
        let tw = ((f64::from(sw) * fw) as u32).max(1);
        let th = ((f64::from(sh) * fh) as u32).max(1);
        let src = solid(sw, sh, rgb);
        let out = ScaleEngine::new(FirResampler::with_capabilities(caps))
            .scale(&src, tw, th)
            .unwrap();
        for y in 0..th {
            for x in 0..tw {
                prop_assert_eq!(out.get(x, y), rgb);
            }
        }
    }

    #[test]
    fn flip_is_an_involution(w in 1u32..40, h in 1u32..40) {
        let src = gradient(w, h);
        let back = flip(&flip(&src).unwrap()).unwrap();
        prop_assert!(same_pixels(&back, &src));
    }

    #[test]
    fn column_extraction_samples_floor(w in 1u32..64, h in 1u32..16, p in 0.0f64..1.0) {
        let src = gradient(w, h);
        let col = extract_column(&src, p).unwrap();
        let x = (f64::from(w) * p) as u32;
        prop_assert_eq!(col.height(), h);
        for y in 0..h {
            prop_assert_eq!(col.get(0, y), src.get(x, y));
        }
    }
}
