// Application context: everything the browser glue mutates, owned in one place.
//
// The glue keeps a single `Rc<RefCell<Viewer>>` and translates DOM events into
// calls here; the returned values tell it which side effects to perform (cursor,
// panel, sound, timers).

use super::camera::Camera;
use super::constants::CLICK_DRAG_TOLERANCE_PX;
use super::feedback::apply_feedback;
use super::hit::hit_test;
use super::interaction::{
    ClickOutcome, Generation, HoverUpdate, InteractionConfig, InteractionState,
};
use super::orbit::{ManualOrbit, OrbitAnimator, OrbitConfig};
use super::parts::{format_part_name, PartId, PartRegistry, PartSpec, RegistryError};
use glam::{Vec2, Vec3};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewerConfig {
    pub interaction: InteractionConfig,
    pub orbit: OrbitConfig,
}

/// Text for the information panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelContent {
    pub title: String,
    pub body: String,
}

#[derive(Clone, Copy, Debug, Default)]
struct DragState {
    pressed: bool,
    last: Vec2,
    travel_px: f32,
    suppress_click: bool,
}

pub struct Viewer {
    registry: PartRegistry,
    interaction: InteractionState,
    camera: Camera,
    animator: OrbitAnimator,
    manual: ManualOrbit,
    drag: DragState,
    elapsed_sec: f32,
}

impl Viewer {
    pub fn new(specs: &[PartSpec], config: ViewerConfig, aspect: f32) -> Result<Self, RegistryError> {
        let registry = PartRegistry::new(specs)?;
        let animator = OrbitAnimator::new(config.orbit);
        let (min_r, max_r) = animator.radius_range();
        let camera = Camera::new(animator.position_at(0.0), animator.target(), aspect);
        let mut manual = ManualOrbit::new(animator.target(), min_r, max_r);
        manual.sync_from_eye(camera.eye);
        Ok(Self {
            registry,
            interaction: InteractionState::new(config.interaction),
            camera,
            animator,
            manual,
            drag: DragState::default(),
            elapsed_sec: 0.0,
        })
    }

    pub fn registry(&self) -> &PartRegistry {
        &self.registry
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn animator(&self) -> &OrbitAnimator {
        &self.animator
    }

    pub fn animator_mut(&mut self) -> &mut OrbitAnimator {
        &mut self.animator
    }

    pub fn auto_rotate(&self) -> bool {
        self.animator.is_running()
    }

    /// Hit test without touching any state.
    pub fn part_at(&self, client_x: f32, client_y: f32, rect: (f32, f32, f32, f32)) -> Option<PartId> {
        hit_test(&self.camera, &self.registry, client_x, client_y, rect)
    }

    /// Pointer moved over the canvas. Updates hover and, while a press is held with
    /// auto-rotate off, orbits the camera.
    pub fn pointer_move(&mut self, client_x: f32, client_y: f32, rect: (f32, f32, f32, f32)) -> HoverUpdate {
        let pos = Vec2::new(client_x, client_y);
        if self.drag.pressed {
            let delta = pos - self.drag.last;
            self.drag.last = pos;
            self.drag.travel_px += delta.length();
            if !self.animator.is_running() {
                let eye = self.manual.drag(delta.x, delta.y);
                self.camera.look_at(eye, self.manual.target());
            }
        }
        let hit = self.part_at(client_x, client_y, rect);
        self.interaction.pointer_move(hit)
    }

    pub fn pointer_leave(&mut self) -> HoverUpdate {
        self.interaction.pointer_leave()
    }

    pub fn pointer_down(&mut self, client_x: f32, client_y: f32) {
        self.drag = DragState {
            pressed: true,
            last: Vec2::new(client_x, client_y),
            travel_px: 0.0,
            suppress_click: false,
        };
    }

    /// Release. The following click is dropped only if the press orbited the camera.
    pub fn pointer_up(&mut self) {
        self.drag.suppress_click = self.drag.pressed
            && !self.animator.is_running()
            && self.drag.travel_px > CLICK_DRAG_TOLERANCE_PX;
        self.drag.pressed = false;
    }

    /// Click at `now_ms`. Returns `None` when the press was an orbit drag.
    pub fn click(
        &mut self,
        now_ms: f64,
        client_x: f32,
        client_y: f32,
        rect: (f32, f32, f32, f32),
    ) -> Option<ClickOutcome> {
        if std::mem::take(&mut self.drag.suppress_click) {
            return None;
        }
        let camera = &self.camera;
        let registry = &self.registry;
        Some(
            self.interaction
                .click(now_ms, || hit_test(camera, registry, client_x, client_y, rect)),
        )
    }

    pub fn expire_selection(&mut self, generation: Generation) -> bool {
        self.interaction.expire_selection(generation)
    }

    pub fn expire_panel(&mut self, generation: Generation) -> bool {
        self.interaction.expire_panel(generation)
    }

    /// Escape: drop the selection and hide the panel right away.
    pub fn dismiss(&mut self) -> bool {
        let cleared = self.interaction.clear_selection();
        let hidden = self.interaction.hide_panel();
        cleared || hidden
    }

    pub fn panel_content(&self, part: PartId) -> Option<PanelContent> {
        let name = self.registry.name_of(part)?;
        Some(PanelContent {
            title: format_part_name(name),
            body: self.registry.describe(name).to_string(),
        })
    }

    /// Switch between automatic orbit and manual drag orbit.
    pub fn set_auto_rotate(&mut self, on: bool) {
        if on == self.animator.is_running() {
            return;
        }
        if on {
            self.animator.sync_from_position(self.camera.eye, self.elapsed_sec);
            self.animator.start();
        } else {
            self.animator.stop();
            self.manual.sync_from_eye(self.camera.eye);
        }
    }

    pub fn toggle_auto_rotate(&mut self) -> bool {
        let on = !self.animator.is_running();
        self.set_auto_rotate(on);
        on
    }

    /// Wheel zoom; only applies under manual control.
    pub fn wheel(&mut self, delta: f32) {
        if self.animator.is_running() {
            return;
        }
        let eye = self.manual.zoom(delta);
        self.camera.look_at(eye, self.manual.target());
    }

    pub fn set_target(&mut self, target: Vec3) {
        self.animator.set_target(target);
        self.manual.set_target(target);
        self.camera.target = target;
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.resize(width, height);
    }

    /// Per-frame update: camera motion, then visual feedback from the settled state.
    pub fn frame(&mut self, dt_sec: f32) {
        self.elapsed_sec += dt_sec.max(0.0);
        if let Some(eye) = self.animator.advance(dt_sec, self.elapsed_sec) {
            self.camera.look_at(eye, self.animator.target());
        }
        apply_feedback(
            &mut self.registry,
            self.interaction.hovered(),
            self.interaction.selected(),
        );
    }

    #[cfg(feature = "debug-hooks")]
    pub fn debug_snapshot(&self) -> String {
        let name = |id: Option<PartId>| id.and_then(|i| self.registry.name_of(i)).unwrap_or("-");
        format!(
            "[debug] hovered={} selected={} panel={} eye=({:.2},{:.2},{:.2}) auto_rotate={} | {}",
            name(self.interaction.hovered()),
            name(self.interaction.selected()),
            name(self.interaction.panel_part()),
            self.camera.eye.x,
            self.camera.eye.y,
            self.camera.eye.z,
            self.animator.is_running(),
            self.interaction.snapshot()
        )
    }
}
