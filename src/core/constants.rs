// Interaction, styling and camera tuning constants shared by the core modules.
//
// Times are milliseconds unless the name says otherwise. Colors are linear RGB.

// Click handling
pub const CLICK_DEBOUNCE_MS: f64 = 200.0; // clicks closer than this to the last accepted one are dropped
pub const SELECTION_CLEAR_MS: f64 = 500.0; // a clicked part stays selected this long
pub const PANEL_HIDE_MS: f64 = 5000.0; // info panel auto-hide delay

// Visual feedback
pub const HOVER_SCALE: f32 = 1.05;
pub const SELECT_SCALE: f32 = 1.10;
pub const HOVER_COLOR: [f32; 3] = [0.27, 0.53, 1.0]; // accent blue
pub const SELECT_COLOR: [f32; 3] = [1.0, 0.27, 0.27]; // alert red

// Part descriptions
pub const FALLBACK_DESCRIPTION: &str = "Chair component";

// Camera projection
pub const CAMERA_FOVY_RADIANS: f32 = std::f32::consts::FRAC_PI_4;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Orbit defaults
pub const ORBIT_TARGET: [f32; 3] = [0.0, 0.6, 0.0];
pub const ORBIT_START_ANGLE: f32 = 0.6;
pub const ORBIT_RADIUS: f32 = 3.2;
pub const ORBIT_HEIGHT: f32 = 1.7;
pub const ORBIT_SPEED: f32 = 0.3; // radians per second
pub const ORBIT_SPEED_STEP: f32 = 0.1; // keyboard +/- increment
pub const ORBIT_RADIUS_MIN: f32 = 1.5;
pub const ORBIT_RADIUS_MAX: f32 = 8.0;
pub const ORBIT_RADIUS_WOBBLE: f32 = 0.15; // amplitude
pub const ORBIT_RADIUS_WOBBLE_HZ: f32 = 0.05;
pub const ORBIT_HEIGHT_WOBBLE: f32 = 0.12;
pub const ORBIT_HEIGHT_WOBBLE_HZ: f32 = 0.08;

// Manual orbit
pub const DRAG_RADIANS_PER_PX: f32 = 0.008;
pub const ZOOM_PER_WHEEL_UNIT: f32 = 0.002; // fraction of distance per wheel delta unit
pub const MANUAL_PITCH_LIMIT: f32 = 1.45; // just short of straight up/down

// Pointer
pub const CLICK_DRAG_TOLERANCE_PX: f32 = 4.0; // a press that travels further is an orbit drag, not a click
