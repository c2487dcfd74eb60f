use super::camera::{client_to_ndc, Camera, Ray};
use super::parts::{Part, PartId, PartRegistry, Primitive};
use glam::Vec3;
use smallvec::SmallVec;

const PARALLEL_EPS: f32 = 1e-8;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub part: PartId,
    pub distance: f32,
}

/// Entry distance along `ray` into an axis-aligned box, or `None` if the box is
/// missed or lies behind the origin. A ray starting inside the box does not hit it.
#[inline]
pub fn ray_box(ray: &Ray, center: Vec3, half: Vec3) -> Option<f32> {
    let o = ray.origin - center;
    let mut t_min = f32::NEG_INFINITY;
    let mut t_max = f32::INFINITY;
    for axis in 0..3 {
        let (oa, da, ha) = (o[axis], ray.dir[axis], half[axis]);
        if da.abs() < PARALLEL_EPS {
            if oa.abs() > ha {
                return None;
            }
            continue;
        }
        let inv = 1.0 / da;
        let (t0, t1) = {
            let a = (-ha - oa) * inv;
            let b = (ha - oa) * inv;
            if a <= b {
                (a, b)
            } else {
                (b, a)
            }
        };
        t_min = t_min.max(t0);
        t_max = t_max.min(t1);
        if t_max < t_min {
            return None;
        }
    }
    (t_min >= 0.0).then_some(t_min)
}

/// Nearest non-negative hit against a finite cylinder on the Y axis (side and caps).
#[inline]
pub fn ray_cylinder(ray: &Ray, center: Vec3, radius: f32, half_height: f32) -> Option<f32> {
    let o = ray.origin - center;
    let d = ray.dir;
    let mut best: Option<f32> = None;
    let mut consider = |t: f32| {
        if t >= 0.0 && best.map_or(true, |b| t < b) {
            best = Some(t);
        }
    };

    let a = d.x * d.x + d.z * d.z;
    if a > PARALLEL_EPS {
        let b = o.x * d.x + o.z * d.z;
        let c = o.x * o.x + o.z * o.z - radius * radius;
        let disc = b * b - a * c;
        if disc >= 0.0 {
            let t = (-b - disc.sqrt()) / a;
            if (o.y + t * d.y).abs() <= half_height {
                consider(t);
            }
        }
    }

    if d.y.abs() > PARALLEL_EPS {
        for cap_y in [half_height, -half_height] {
            let t = (cap_y - o.y) / d.y;
            let x = o.x + t * d.x;
            let z = o.z + t * d.z;
            if x * x + z * z <= radius * radius {
                consider(t);
            }
        }
    }
    best
}

/// Distance to a part at its current on-screen scale.
pub fn intersect_part(ray: &Ray, part: &Part) -> Option<f32> {
    let half = part.half_extents();
    match part.primitive {
        Primitive::Box { .. } => ray_box(ray, part.position, half),
        Primitive::Cylinder { .. } => ray_cylinder(ray, part.position, half.x, half.y),
    }
}

/// Every part under the ray, nearest first.
pub fn intersect_all(ray: &Ray, registry: &PartRegistry) -> SmallVec<[Hit; 4]> {
    let mut hits: SmallVec<[Hit; 4]> = registry
        .iter()
        .filter_map(|(id, part)| {
            intersect_part(ray, part).map(|distance| Hit { part: id, distance })
        })
        .collect();
    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    hits
}

#[inline]
pub fn pick(ray: &Ray, registry: &PartRegistry) -> Option<PartId> {
    intersect_all(ray, registry).first().map(|h| h.part)
}

/// Full hit test from a pointer position: client pixels plus the element rect
/// `(left, top, width, height)`.
pub fn hit_test(
    camera: &Camera,
    registry: &PartRegistry,
    client_x: f32,
    client_y: f32,
    rect: (f32, f32, f32, f32),
) -> Option<PartId> {
    if registry.is_empty() {
        return None;
    }
    let ndc = client_to_ndc(client_x, client_y, rect)?;
    pick(&camera.ray_from_ndc(ndc), registry)
}
