// Host-side tests for hover / selection styling.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod parts {
    include!("../src/core/parts.rs");
}
mod feedback {
    include!("../src/core/feedback.rs");
}

use constants::*;
use feedback::*;
use parts::*;

const BASE: [f32; 3] = [0.4, 0.3, 0.2];

#[test]
fn idle_part_keeps_base_styling() {
    let a = appearance(BASE, 1.0, false, false);
    assert_eq!(a.color, BASE);
    assert_eq!(a.scale, 1.0);
}

#[test]
fn hover_uses_accent_and_small_scale() {
    let a = appearance(BASE, 1.0, true, false);
    assert_eq!(a.color, HOVER_COLOR);
    assert!((a.scale - 1.05).abs() < 1e-6);
}

#[test]
fn selection_wins_over_hover() {
    let both = appearance(BASE, 1.0, true, true);
    let selected = appearance(BASE, 1.0, false, true);
    assert_eq!(both, selected);
    assert_eq!(both.color, SELECT_COLOR);
    assert!((both.scale - 1.10).abs() < 1e-6);
}

#[test]
fn scale_is_relative_to_base() {
    let a = appearance(BASE, 2.0, true, false);
    assert!((a.scale - 2.1).abs() < 1e-6);
}

#[test]
fn repeated_frames_do_not_compound_scale() {
    let mut reg = PartRegistry::new(&chair_parts()).expect("chair registry");
    let seat = reg.id_of("seat").expect("seat");
    for _ in 0..100 {
        apply_feedback(&mut reg, Some(seat), None);
    }
    let part = reg.get(seat).expect("seat");
    assert!((part.scale - HOVER_SCALE).abs() < 1e-6);
    assert_eq!(part.color, HOVER_COLOR);
}

#[test]
fn clearing_state_restores_base_styling() {
    let mut reg = PartRegistry::new(&chair_parts()).expect("chair registry");
    let seat = reg.id_of("seat").expect("seat");
    let leg = reg.id_of("back-left-leg").expect("leg");
    apply_feedback(&mut reg, Some(leg), Some(seat));
    assert_eq!(reg.get(seat).expect("seat").color, SELECT_COLOR);
    assert_eq!(reg.get(leg).expect("leg").color, HOVER_COLOR);

    apply_feedback(&mut reg, None, None);
    for (_, part) in reg.iter() {
        assert_eq!(part.color, part.base_color, "{}", part.name);
        assert_eq!(part.scale, part.base_scale, "{}", part.name);
    }
}

#[test]
fn only_the_named_parts_are_styled() {
    let mut reg = PartRegistry::new(&chair_parts()).expect("chair registry");
    let backrest = reg.id_of("backrest").expect("backrest");
    apply_feedback(&mut reg, Some(backrest), Some(backrest));
    for (id, part) in reg.iter() {
        if id == backrest {
            assert_eq!(part.color, SELECT_COLOR);
        } else {
            assert_eq!(part.color, part.base_color, "{}", part.name);
        }
    }
}
