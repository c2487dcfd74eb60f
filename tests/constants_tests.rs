// Sanity checks on tuning constants.
// The main crate is wasm-only, so we include the constants module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}

use constants::*;

#[test]
fn click_timers_are_ordered() {
    assert_eq!(CLICK_DEBOUNCE_MS, 200.0);
    assert_eq!(SELECTION_CLEAR_MS, 500.0);
    assert_eq!(PANEL_HIDE_MS, 5000.0);
    assert!(CLICK_DEBOUNCE_MS < SELECTION_CLEAR_MS);
    assert!(SELECTION_CLEAR_MS < PANEL_HIDE_MS);
}

#[test]
fn selection_stands_out_more_than_hover() {
    assert!(HOVER_SCALE > 1.0);
    assert!(SELECT_SCALE > HOVER_SCALE);
    assert_ne!(HOVER_COLOR, SELECT_COLOR);
    for c in HOVER_COLOR.iter().chain(SELECT_COLOR.iter()) {
        assert!((0.0..=1.0).contains(c));
    }
}

#[test]
fn orbit_defaults_are_consistent() {
    assert!(ORBIT_RADIUS_MIN > 0.0);
    assert!(ORBIT_RADIUS_MIN <= ORBIT_RADIUS && ORBIT_RADIUS <= ORBIT_RADIUS_MAX);
    assert!(ORBIT_RADIUS - ORBIT_RADIUS_WOBBLE >= ORBIT_RADIUS_MIN);
    assert!(ORBIT_SPEED >= 0.0);
    assert!(ORBIT_SPEED_STEP > 0.0);
    assert!(MANUAL_PITCH_LIMIT < std::f32::consts::FRAC_PI_2);
    assert!(CAMERA_ZNEAR > 0.0 && CAMERA_ZNEAR < CAMERA_ZFAR);
}
