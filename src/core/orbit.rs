// Camera motion: the automatic orbit animator and the drag-driven manual orbit.
//
// Only one of them drives the camera at a time. Whichever takes over first syncs
// from the camera's current eye so the hand-off has no jump.

use super::constants::*;
use glam::Vec3;
use std::f32::consts::TAU;

/// Sinusoidal offset `amplitude * sin(2π · frequency_hz · t)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Oscillation {
    pub amplitude: f32,
    pub frequency_hz: f32,
}

impl Oscillation {
    #[inline]
    pub fn value(&self, elapsed_sec: f32) -> f32 {
        self.amplitude * (TAU * self.frequency_hz * elapsed_sec).sin()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitConfig {
    pub start_angle: f32,
    pub radius: f32,
    pub height: f32,
    pub speed: f32,
    pub radius_min: f32,
    pub radius_max: f32,
    pub target: Vec3,
    pub radius_wobble: Option<Oscillation>,
    pub height_wobble: Option<Oscillation>,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            start_angle: ORBIT_START_ANGLE,
            radius: ORBIT_RADIUS,
            height: ORBIT_HEIGHT,
            speed: ORBIT_SPEED,
            radius_min: ORBIT_RADIUS_MIN,
            radius_max: ORBIT_RADIUS_MAX,
            target: Vec3::from_array(ORBIT_TARGET),
            radius_wobble: Some(Oscillation {
                amplitude: ORBIT_RADIUS_WOBBLE,
                frequency_hz: ORBIT_RADIUS_WOBBLE_HZ,
            }),
            height_wobble: Some(Oscillation {
                amplitude: ORBIT_HEIGHT_WOBBLE,
                frequency_hz: ORBIT_HEIGHT_WOBBLE_HZ,
            }),
        }
    }
}

/// Automatic orbit around the product: `(r·cos θ, h, r·sin θ)` aimed at `target`.
#[derive(Clone, Debug)]
pub struct OrbitAnimator {
    angle: f32,
    radius: f32,
    height: f32,
    speed: f32,
    radius_min: f32,
    radius_max: f32,
    target: Vec3,
    radius_wobble: Option<Oscillation>,
    height_wobble: Option<Oscillation>,
    running: bool,
}

impl OrbitAnimator {
    pub fn new(config: OrbitConfig) -> Self {
        let (radius_min, radius_max) = if config.radius_min <= config.radius_max {
            (config.radius_min, config.radius_max)
        } else {
            (config.radius_max, config.radius_min)
        };
        Self {
            angle: config.start_angle,
            radius: config.radius.clamp(radius_min, radius_max),
            height: config.height,
            speed: config.speed.max(0.0),
            radius_min,
            radius_max,
            target: config.target,
            radius_wobble: config.radius_wobble,
            height_wobble: config.height_wobble,
            running: true,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Flip running state and return the new one.
    pub fn toggle(&mut self) -> bool {
        self.running = !self.running;
        self.running
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn radius_range(&self) -> (f32, f32) {
        (self.radius_min, self.radius_max)
    }

    /// Angular speed in radians per second. Negative and NaN become zero.
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed.max(0.0);
    }

    /// Orbit radius, clamped to the configured range. NaN is ignored.
    pub fn set_radius(&mut self, radius: f32) {
        if radius.is_nan() {
            return;
        }
        self.radius = radius.clamp(self.radius_min, self.radius_max);
    }

    pub fn set_target(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Position for the current angle at `elapsed_sec`, oscillations included.
    pub fn position_at(&self, elapsed_sec: f32) -> Vec3 {
        let r = self.radius + self.radius_wobble.map_or(0.0, |o| o.value(elapsed_sec));
        let h = self.height + self.height_wobble.map_or(0.0, |o| o.value(elapsed_sec));
        Vec3::new(r * self.angle.cos(), h, r * self.angle.sin())
    }

    /// Advance by `dt_sec`. Returns the new eye when running; `None` leaves the camera alone.
    pub fn advance(&mut self, dt_sec: f32, elapsed_sec: f32) -> Option<Vec3> {
        if !self.running {
            return None;
        }
        self.angle = (self.angle + self.speed * dt_sec.max(0.0)).rem_euclid(TAU);
        Some(self.position_at(elapsed_sec))
    }

    /// Pick up from wherever the camera currently is (after manual control), so that
    /// `position_at(elapsed_sec)` reproduces `eye`. The wobble offsets at `elapsed_sec`
    /// are taken out of the stored base radius and height. The radius range is not
    /// applied here; only `set_radius` clamps.
    pub fn sync_from_position(&mut self, eye: Vec3, elapsed_sec: f32) {
        self.angle = eye.z.atan2(eye.x).rem_euclid(TAU);
        self.radius = (eye.x * eye.x + eye.z * eye.z).sqrt()
            - self.radius_wobble.map_or(0.0, |o| o.value(elapsed_sec));
        self.height = eye.y - self.height_wobble.map_or(0.0, |o| o.value(elapsed_sec));
    }
}

/// Drag-to-orbit and wheel zoom around a target, used while auto-rotate is off.
#[derive(Clone, Debug)]
pub struct ManualOrbit {
    yaw: f32,
    pitch: f32,
    distance: f32,
    target: Vec3,
    distance_min: f32,
    distance_max: f32,
}

impl ManualOrbit {
    pub fn new(target: Vec3, distance_min: f32, distance_max: f32) -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            distance: distance_min.max(1e-3),
            target,
            distance_min,
            distance_max,
        }
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn set_target(&mut self, target: Vec3) {
        self.target = target;
    }

    pub fn eye(&self) -> Vec3 {
        let (sp, cp) = self.pitch.sin_cos();
        let (sy, cy) = self.yaw.sin_cos();
        self.target + Vec3::new(cp * cy, sp, cp * sy) * self.distance
    }

    /// Take over from the camera's current eye.
    pub fn sync_from_eye(&mut self, eye: Vec3) {
        let offset = eye - self.target;
        let len = offset.length();
        if len <= f32::EPSILON {
            return;
        }
        self.distance = len.clamp(self.distance_min, self.distance_max);
        self.yaw = offset.z.atan2(offset.x);
        self.pitch = (offset.y / len)
            .clamp(-1.0, 1.0)
            .asin()
            .clamp(-MANUAL_PITCH_LIMIT, MANUAL_PITCH_LIMIT);
    }

    /// Rotate by a pointer drag in CSS pixels. Dragging right spins the product right.
    pub fn drag(&mut self, dx_px: f32, dy_px: f32) -> Vec3 {
        self.yaw += dx_px * DRAG_RADIANS_PER_PX;
        self.pitch = (self.pitch + dy_px * DRAG_RADIANS_PER_PX)
            .clamp(-MANUAL_PITCH_LIMIT, MANUAL_PITCH_LIMIT);
        self.eye()
    }

    /// Zoom by a wheel delta (positive moves away).
    pub fn zoom(&mut self, wheel_delta: f32) -> Vec3 {
        let factor = (1.0 + wheel_delta * ZOOM_PER_WHEEL_UNIT).max(0.1);
        self.distance = (self.distance * factor).clamp(self.distance_min, self.distance_max);
        self.eye()
    }
}
