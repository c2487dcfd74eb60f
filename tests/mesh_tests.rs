// Host-side tests for the unit meshes and keyboard bindings.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod mesh {
    include!("../src/core/mesh.rs");
}
mod keys {
    include!("../src/core/keys.rs");
}

use glam::Vec3;
use keys::*;
use mesh::*;

fn check_unit(mesh: &Mesh) {
    assert_eq!(mesh.indices.len() % 3, 0);
    let n = mesh.vertices.len();
    assert!(mesh.indices.iter().all(|&i| (i as usize) < n));
    for v in &mesh.vertices {
        let p = Vec3::from_array(v.position);
        assert!(p.abs().max_element() <= 0.5 + 1e-6, "{:?}", p);
        assert!((Vec3::from_array(v.normal).length() - 1.0).abs() < 1e-5);
    }
}

#[test]
fn unit_box_has_six_quads() {
    let mesh = unit_box();
    assert_eq!(mesh.vertices.len(), 24);
    assert_eq!(mesh.indices.len(), 36);
    check_unit(&mesh);
}

#[test]
fn unit_cylinder_counts() {
    let mesh = unit_cylinder(CYLINDER_SEGMENTS);
    let s = CYLINDER_SEGMENTS;
    assert_eq!(mesh.vertices.len(), 2 * (s + 1) + 2 * (s + 2));
    assert_eq!(mesh.indices.len(), 6 * s + 2 * 3 * s);
    check_unit(&mesh);
}

#[test]
fn unit_cylinder_has_minimum_segments() {
    let mesh = unit_cylinder(1);
    assert_eq!(mesh.indices.len(), 6 * 3 + 2 * 3 * 3);
    check_unit(&mesh);
}

#[test]
fn vertex_is_tightly_packed() {
    assert_eq!(std::mem::size_of::<Vertex>(), 24);
    let mesh = unit_box();
    let bytes: &[u8] = bytemuck::cast_slice(&mesh.vertices);
    assert_eq!(bytes.len(), 24 * 24);
}

#[test]
fn key_bindings() {
    assert_eq!(key_action("r"), Some(KeyAction::ToggleAutoRotate));
    assert_eq!(key_action("R"), Some(KeyAction::ToggleAutoRotate));
    assert_eq!(key_action("+"), Some(KeyAction::SpeedUp));
    assert_eq!(key_action("="), Some(KeyAction::SpeedUp));
    assert_eq!(key_action("-"), Some(KeyAction::SlowDown));
    assert_eq!(key_action("Escape"), Some(KeyAction::ClearSelection));
    assert_eq!(key_action("d"), Some(KeyAction::DebugSnapshot));
    assert_eq!(key_action("x"), None);
    assert_eq!(key_action(""), None);
}
