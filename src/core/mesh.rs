use glam::Vec3;
use std::f32::consts::TAU;

/// Unit-extent meshes (every shape spans [-0.5, 0.5] on each axis) that parts
/// scale into place through their model matrix.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u16>,
}

impl Mesh {
    fn push(&mut self, position: Vec3, normal: Vec3) -> u16 {
        self.vertices.push(Vertex {
            position: position.to_array(),
            normal: normal.to_array(),
        });
        (self.vertices.len() - 1) as u16
    }
}

pub const CYLINDER_SEGMENTS: usize = 24;

pub fn unit_box() -> Mesh {
    let mut mesh = Mesh::default();
    let faces = [
        (Vec3::X, Vec3::Y, Vec3::Z),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::Z, Vec3::X),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::Y, Vec3::X),
    ];
    for (n, u, v) in faces {
        let c = n * 0.5;
        let a = mesh.push(c - u * 0.5 - v * 0.5, n);
        let b = mesh.push(c + u * 0.5 - v * 0.5, n);
        let d = mesh.push(c + u * 0.5 + v * 0.5, n);
        let e = mesh.push(c - u * 0.5 + v * 0.5, n);
        mesh.indices.extend_from_slice(&[a, b, d, a, d, e]);
    }
    mesh
}

pub fn unit_cylinder(segments: usize) -> Mesh {
    let segments = segments.max(3);
    let mut mesh = Mesh::default();
    let ring = |i: usize| {
        let a = TAU * i as f32 / segments as f32;
        Vec3::new(a.cos(), 0.0, a.sin())
    };

    // side
    let side_start = mesh.vertices.len() as u16;
    for i in 0..=segments {
        let dir = ring(i);
        mesh.push(dir * 0.5 - Vec3::Y * 0.5, dir);
        mesh.push(dir * 0.5 + Vec3::Y * 0.5, dir);
    }
    for i in 0..segments as u16 {
        let b0 = side_start + i * 2;
        let t0 = b0 + 1;
        let b1 = b0 + 2;
        let t1 = b0 + 3;
        mesh.indices.extend_from_slice(&[b0, t0, t1, b0, t1, b1]);
    }

    // caps
    for (y, n) in [(0.5, Vec3::Y), (-0.5, Vec3::NEG_Y)] {
        let center = mesh.push(Vec3::new(0.0, y, 0.0), n);
        let first = mesh.vertices.len() as u16;
        for i in 0..=segments {
            mesh.push(ring(i) * 0.5 + Vec3::new(0.0, y, 0.0), n);
        }
        for i in 0..segments as u16 {
            mesh.indices
                .extend_from_slice(&[center, first + i + 1, first + i]);
        }
    }
    mesh
}
