// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../crates/choreo-core/src/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn host_constants_are_within_reasonable_bounds() {
    assert!(PIN_SCROLL_LENGTH_VIEWPORTS > 0.0);
    assert!(PANEL_INTERACTIVE_OPACITY > 0.0 && PANEL_INTERACTIVE_OPACITY < 1.0);
    assert!(!PIN_ELEMENT_ID.is_empty());
    assert!(!PIN_ELEMENT_ID.starts_with('#'));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn smoothing_constants_are_valid_rates() {
    assert!(REFERENCE_FRAME_RATE > 0.0);
    assert!(DEFAULT_SMOOTHING_RATE > 0.0 && DEFAULT_SMOOTHING_RATE <= 1.0);
    assert!(DEFAULT_PARALLAX_FOLLOW_PER_SEC > 0.0);
    assert!(DEFAULT_IDLE_CROSSFADE_PER_SEC > 0.0);
    assert!(DEFAULT_SCROLL_SCRUB_SEC >= 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn ambient_sway_stays_below_parallax() {
    // Sway is a background wobble; the pointer should dominate.
    for a in AMBIENT_SWAY_AMPLITUDE {
        assert!(a > 0.0 && a < DEFAULT_PARALLAX_INTENSITY);
    }
    for r in AMBIENT_SWAY_RATE {
        assert!(r > 0.0);
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn tolerances_are_small() {
    assert!(RANGE_EPSILON > 0.0 && RANGE_EPSILON < 1e-3);
    assert!(CONTINUITY_EPSILON > 0.0 && CONTINUITY_EPSILON < 1e-2);
    assert!(IDLE_WEIGHT_EPSILON > 0.0 && IDLE_WEIGHT_EPSILON < 1e-2);
    assert!(MAX_FRAME_DELTA_SEC > 1.0 / 60.0);
}
