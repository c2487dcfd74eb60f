use super::constants::{HOVER_COLOR, HOVER_SCALE, SELECT_COLOR, SELECT_SCALE};
use super::parts::{PartId, PartRegistry};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Appearance {
    pub color: [f32; 3],
    pub scale: f32,
}

/// Displayed appearance as a pure function of state. Selection is applied after
/// hover, so it wins when both hold.
#[inline]
pub fn appearance(
    base_color: [f32; 3],
    base_scale: f32,
    is_hovered: bool,
    is_selected: bool,
) -> Appearance {
    let mut out = Appearance {
        color: base_color,
        scale: base_scale,
    };
    if is_hovered {
        out.color = HOVER_COLOR;
        out.scale = base_scale * HOVER_SCALE;
    }
    if is_selected {
        out.color = SELECT_COLOR;
        out.scale = base_scale * SELECT_SCALE;
    }
    out
}

/// Per-frame pass: every part is reset to base and restyled from the current state.
pub fn apply_feedback(registry: &mut PartRegistry, hovered: Option<PartId>, selected: Option<PartId>) {
    for (id, part) in registry.iter_mut() {
        let a = appearance(
            part.base_color,
            part.base_scale,
            hovered == Some(id),
            selected == Some(id),
        );
        part.color = a.color;
        part.scale = a.scale;
    }
}
