// Part registry: the fixed set of named solids that make up the chair.
//
// Parts are created once at startup and never added or removed. Each part keeps
// its base appearance alongside the current (per-frame) appearance written by the
// feedback driver, plus the instance slot the renderer draws it from.

use super::constants::FALLBACK_DESCRIPTION;
use fnv::FnvHashMap;
use glam::{Mat4, Vec3};

/// Solid shape of a part, in local units before scaling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Primitive {
    /// Axis-aligned box with full extents `size`.
    Box { size: Vec3 },
    /// Cylinder standing on the Y axis.
    Cylinder { radius: f32, height: f32 },
}

impl Primitive {
    /// Non-uniform scale that maps the unit mesh (extent 1 on every axis) onto this shape.
    pub fn extents(&self) -> Vec3 {
        match *self {
            Primitive::Box { size } => size,
            Primitive::Cylinder { radius, height } => Vec3::new(radius * 2.0, height, radius * 2.0),
        }
    }
}

/// Index of a part in its registry. Cheap to copy; resolve names through the registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PartId(pub usize);

/// Opaque handle to the renderable instance slot backing a part.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RenderHandle(pub u32);

/// Static definition used to build the registry.
#[derive(Clone, Debug)]
pub struct PartSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub primitive: Primitive,
    pub position: Vec3,
    pub color: [f32; 3],
}

#[derive(Clone, Debug)]
pub struct Part {
    pub name: String,
    pub description: String,
    pub primitive: Primitive,
    pub position: Vec3,
    pub base_color: [f32; 3],
    pub base_scale: f32,
    pub color: [f32; 3],
    pub scale: f32,
    pub handle: RenderHandle,
}

impl Part {
    /// World transform for the current scale.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
            * Mat4::from_scale(self.primitive.extents() * self.scale)
    }

    /// Current world-space half extents (what the user sees on screen).
    pub fn half_extents(&self) -> Vec3 {
        self.primitive.extents() * self.scale * 0.5
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("duplicate part name `{0}`")]
    DuplicateName(String),
    #[error("part name must not be empty")]
    EmptyName,
}

#[derive(Clone, Debug, Default)]
pub struct PartRegistry {
    parts: Vec<Part>,
    by_name: FnvHashMap<String, PartId>,
}

impl PartRegistry {
    pub fn new(specs: &[PartSpec]) -> Result<Self, RegistryError> {
        let mut parts = Vec::with_capacity(specs.len());
        let mut by_name = FnvHashMap::default();
        for (i, spec) in specs.iter().enumerate() {
            if spec.name.is_empty() {
                return Err(RegistryError::EmptyName);
            }
            if by_name.insert(spec.name.to_string(), PartId(i)).is_some() {
                return Err(RegistryError::DuplicateName(spec.name.to_string()));
            }
            parts.push(Part {
                name: spec.name.to_string(),
                description: spec.description.to_string(),
                primitive: spec.primitive,
                position: spec.position,
                base_color: spec.color,
                base_scale: 1.0,
                color: spec.color,
                scale: 1.0,
                handle: RenderHandle(i as u32),
            });
        }
        Ok(Self { parts, by_name })
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn get(&self, id: PartId) -> Option<&Part> {
        self.parts.get(id.0)
    }

    pub fn get_mut(&mut self, id: PartId) -> Option<&mut Part> {
        self.parts.get_mut(id.0)
    }

    pub fn id_of(&self, name: &str) -> Option<PartId> {
        self.by_name.get(name).copied()
    }

    pub fn by_name(&self, name: &str) -> Option<&Part> {
        self.id_of(name).and_then(|id| self.get(id))
    }

    pub fn name_of(&self, id: PartId) -> Option<&str> {
        self.get(id).map(|p| p.name.as_str())
    }

    /// Description for `name`, or the generic fallback for names the registry does not know.
    pub fn describe(&self, name: &str) -> &str {
        self.by_name(name)
            .map(|p| p.description.as_str())
            .unwrap_or(FALLBACK_DESCRIPTION)
    }

    /// Parts in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (PartId, &Part)> {
        self.parts.iter().enumerate().map(|(i, p)| (PartId(i), p))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PartId, &mut Part)> {
        self.parts
            .iter_mut()
            .enumerate()
            .map(|(i, p)| (PartId(i), p))
    }
}

/// Turn a kebab-case part name into a display title: "front-left-leg" → "Front Left Leg".
pub fn format_part_name(name: &str) -> String {
    name.split('-')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

const WOOD: [f32; 3] = [0.55, 0.35, 0.20];
const DARK_WOOD: [f32; 3] = [0.42, 0.26, 0.15];
const FABRIC: [f32; 3] = [0.22, 0.32, 0.48];

const LEG_RADIUS: f32 = 0.045;
const LEG_HEIGHT: f32 = 0.5;
const LEG_INSET: f32 = 0.42;

fn leg(name: &'static str, description: &'static str, x: f32, z: f32) -> PartSpec {
    PartSpec {
        name,
        description,
        primitive: Primitive::Cylinder {
            radius: LEG_RADIUS,
            height: LEG_HEIGHT,
        },
        position: Vec3::new(x, LEG_HEIGHT * 0.5, z),
        color: DARK_WOOD,
    }
}

/// The chair shown by the viewer. Z+ faces the front.
pub fn chair_parts() -> Vec<PartSpec> {
    vec![
        PartSpec {
            name: "seat",
            description: "Solid beech seat board, 45 cm deep, sanded and oiled.",
            primitive: Primitive::Box {
                size: Vec3::new(1.0, 0.08, 1.0),
            },
            position: Vec3::new(0.0, LEG_HEIGHT + 0.04, 0.0),
            color: WOOD,
        },
        PartSpec {
            name: "seat-cushion",
            description: "Removable foam cushion with a washable wool cover.",
            primitive: Primitive::Box {
                size: Vec3::new(0.88, 0.06, 0.88),
            },
            position: Vec3::new(0.0, LEG_HEIGHT + 0.11, 0.02),
            color: FABRIC,
        },
        PartSpec {
            name: "backrest",
            description: "Curved backrest panel supporting the lower back.",
            primitive: Primitive::Box {
                size: Vec3::new(1.0, 0.7, 0.08),
            },
            position: Vec3::new(0.0, LEG_HEIGHT + 0.43, -0.46),
            color: WOOD,
        },
        leg(
            "front-left-leg",
            "Turned front leg, joined to the seat with a mortise and tenon.",
            -LEG_INSET,
            LEG_INSET,
        ),
        leg(
            "front-right-leg",
            "Turned front leg, joined to the seat with a mortise and tenon.",
            LEG_INSET,
            LEG_INSET,
        ),
        leg(
            "back-left-leg",
            "Rear leg carrying most of the load when leaning back.",
            -LEG_INSET,
            -LEG_INSET,
        ),
        leg(
            "back-right-leg",
            "Rear leg carrying most of the load when leaning back.",
            LEG_INSET,
            -LEG_INSET,
        ),
    ]
}
