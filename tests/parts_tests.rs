// Host-side tests for the part registry and name formatting.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod parts {
    include!("../src/core/parts.rs");
}

use constants::FALLBACK_DESCRIPTION;
use glam::Vec3;
use parts::*;

fn spec(name: &'static str) -> PartSpec {
    PartSpec {
        name,
        description: "test part",
        primitive: Primitive::Box { size: Vec3::ONE },
        position: Vec3::ZERO,
        color: [0.5, 0.5, 0.5],
    }
}

#[test]
fn format_part_name_title_cases_kebab_names() {
    assert_eq!(format_part_name("back-right-leg"), "Back Right Leg");
    assert_eq!(format_part_name("front-left-leg"), "Front Left Leg");
    assert_eq!(format_part_name("seat"), "Seat");
}

#[test]
fn format_part_name_edge_cases() {
    assert_eq!(format_part_name(""), "");
    assert_eq!(format_part_name("--seat--cushion-"), "Seat Cushion");
    assert_eq!(format_part_name("arm-Rest"), "Arm Rest");
}

#[test]
fn describe_falls_back_for_unknown_names() {
    let reg = PartRegistry::new(&chair_parts()).expect("chair registry");
    assert_eq!(reg.describe("no-such-part"), "Chair component");
    assert_eq!(reg.describe(""), FALLBACK_DESCRIPTION);
    assert_ne!(reg.describe("seat"), FALLBACK_DESCRIPTION);
}

#[test]
fn chair_has_expected_parts_in_order() {
    let reg = PartRegistry::new(&chair_parts()).expect("chair registry");
    let names: Vec<&str> = reg.iter().map(|(_, p)| p.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "seat",
            "seat-cushion",
            "backrest",
            "front-left-leg",
            "front-right-leg",
            "back-left-leg",
            "back-right-leg",
        ]
    );
    for (id, part) in reg.iter() {
        assert_eq!(reg.id_of(&part.name), Some(id));
        assert_eq!(part.handle.0 as usize, id.0);
        assert_eq!(part.scale, part.base_scale);
        assert_eq!(part.color, part.base_color);
    }
}

#[test]
fn legs_stand_on_the_floor_and_meet_the_seat() {
    let reg = PartRegistry::new(&chair_parts()).expect("chair registry");
    let seat = reg.by_name("seat").expect("seat");
    let seat_bottom = seat.position.y - seat.half_extents().y;
    for name in ["front-left-leg", "front-right-leg", "back-left-leg", "back-right-leg"] {
        let leg = reg.by_name(name).expect("leg");
        let half = leg.half_extents();
        assert!((leg.position.y - half.y).abs() < 1e-6, "{} floats", name);
        assert!((leg.position.y + half.y - seat_bottom).abs() < 1e-6, "{} gap", name);
    }
}

#[test]
fn duplicate_and_empty_names_are_rejected() {
    let err = PartRegistry::new(&[spec("a"), spec("b"), spec("a")]).unwrap_err();
    assert_eq!(err, RegistryError::DuplicateName("a".to_string()));
    assert_eq!(err.to_string(), "duplicate part name `a`");

    let err = PartRegistry::new(&[spec("")]).unwrap_err();
    assert_eq!(err, RegistryError::EmptyName);
}

#[test]
fn empty_registry_is_valid() {
    let reg = PartRegistry::new(&[]).expect("empty registry");
    assert!(reg.is_empty());
    assert_eq!(reg.len(), 0);
    assert_eq!(reg.describe("seat"), FALLBACK_DESCRIPTION);
    assert!(reg.get(PartId(0)).is_none());
}

#[test]
fn model_matrix_applies_extents_and_current_scale() {
    let mut reg = PartRegistry::new(&[PartSpec {
        name: "post",
        description: "",
        primitive: Primitive::Cylinder {
            radius: 0.25,
            height: 2.0,
        },
        position: Vec3::new(1.0, 2.0, 3.0),
        color: [1.0, 1.0, 1.0],
    }])
    .expect("registry");
    let id = reg.id_of("post").expect("post");
    reg.get_mut(id).expect("post").scale = 2.0;
    let part = reg.get(id).expect("post");

    let top = part.model_matrix().transform_point3(Vec3::new(0.5, 0.5, 0.0));
    assert!((top - Vec3::new(1.5, 4.0, 3.0)).length() < 1e-5, "{:?}", top);
    assert_eq!(part.half_extents(), Vec3::new(0.5, 2.0, 0.5));
}
