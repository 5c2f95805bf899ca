// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use std::collections::HashSet;

#[test]
#[allow(clippy::assertions_on_constants)]
fn alphabet_is_distinct_and_large_enough() {
    let unique: HashSet<&str> = SYMBOL_ALPHABET.iter().copied().collect();
    assert_eq!(unique.len(), SYMBOL_ALPHABET.len());
    assert!(SYMBOL_COUNT <= SYMBOL_ALPHABET.len());
    assert_eq!(SYMBOL_SLOTS.len(), SYMBOL_COUNT);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn spin_and_bob_parameters_are_positive() {
    assert!(SPIN_SPEED_X_MIN > 0.0);
    assert!(SPIN_SPEED_X_SPAN > 0.0);
    assert!(SPIN_SPEED_Y_MIN > 0.0);
    assert!(SPIN_SPEED_Y_SPAN > 0.0);
    assert!(SPIN_RATE_SCALE > 0.0);
    assert!(BOB_AMPLITUDE > 0.0);
    assert!(BOB_RATE > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn outline_is_strictly_larger_than_its_source() {
    assert!(OUTLINE_SCALE > 1.0);
    // A thin shell, not a halo
    assert!(OUTLINE_SCALE < 1.2);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_configuration_is_sane() {
    assert!(CAMERA_FOV_DEG > 0.0 && CAMERA_FOV_DEG < 180.0);
    assert!(CAMERA_ZNEAR > 0.0);
    assert!(CAMERA_ZFAR > CAMERA_ZNEAR);
    assert!(CAMERA_Z > CAMERA_ZNEAR && CAMERA_Z < CAMERA_ZFAR);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn geometry_and_render_parameters_are_sane() {
    assert!(TEXT_SIZE > 0.0);
    assert!(TEXT_DEPTH > 0.0);
    assert!(FLATTEN_TOLERANCE > 0.0);
    assert!(MAX_PIXEL_RATIO >= 1.0);
    assert!(EDGE_TOLERANCE_PX > 0.0);
    assert!(AMBIENT_INTENSITY >= 0.0 && AMBIENT_INTENSITY <= 1.0);
    for c in SYMBOL_COLOR.iter().chain(OUTLINE_COLOR.iter()) {
        assert!((0.0..=1.0).contains(c));
    }
}
