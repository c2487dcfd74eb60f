// DOM element ids the page is expected to provide.
pub const CANVAS_ID: &str = "viewer-canvas";
pub const LOADING_ID: &str = "loading";
pub const PANEL_ID: &str = "info-panel";
pub const PANEL_TITLE_ID: &str = "info-title";
pub const PANEL_BODY_ID: &str = "info-body";
pub const AUTO_ROTATE_ID: &str = "auto-rotate";

// CSS class toggled on the panel and the loading indicator
pub const HIDDEN_CLASS: &str = "hidden";

// Renderer
pub const CLEAR_COLOR: [f64; 3] = [0.93, 0.94, 0.96]; // light studio backdrop
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

// Frame loop: clamp long gaps (tab in background) so the orbit does not jump
pub const MAX_FRAME_DT_SEC: f32 = 0.1;

// Click sound
pub const CLICK_FREQ_HZ: f32 = 880.0;
pub const CLICK_GAIN: f32 = 0.08;
pub const CLICK_DURATION_SEC: f64 = 0.08;

// Wheel deltas in line mode are tiny compared to pixel mode
pub const WHEEL_LINE_TO_PX: f32 = 16.0;
