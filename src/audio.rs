use crate::constants::{CLICK_DURATION_SEC, CLICK_FREQ_HZ, CLICK_GAIN};
use web_sys as web;

/// Short blip played on selection. Entirely optional: when the page has no audio
/// capability every call is a silent no-op.
pub struct ClickSound {
    ctx: Option<web::AudioContext>,
}

impl ClickSound {
    pub fn new() -> Self {
        let ctx = match web::AudioContext::new() {
            Ok(c) => Some(c),
            Err(e) => {
                log::debug!("[audio] unavailable: {:?}", e);
                None
            }
        };
        Self { ctx }
    }

    pub fn play(&self) {
        let Some(ctx) = &self.ctx else {
            return;
        };
        // Autoplay policies keep the context suspended until a user gesture; a click is one.
        _ = ctx.resume();
        let Ok(src) = web::OscillatorNode::new(ctx) else {
            return;
        };
        let Ok(gain) = web::GainNode::new(ctx) else {
            return;
        };
        src.set_type(web::OscillatorType::Sine);
        src.frequency().set_value(CLICK_FREQ_HZ);
        gain.gain().set_value(0.0);
        let t0 = ctx.current_time() + 0.005;
        _ = gain.gain().linear_ramp_to_value_at_time(CLICK_GAIN, t0 + 0.01);
        _ = gain
            .gain()
            .linear_ramp_to_value_at_time(0.0, t0 + CLICK_DURATION_SEC);
        _ = src.connect_with_audio_node(&gain);
        _ = gain.connect_with_audio_node(&ctx.destination());
        _ = src.start_with_when(t0);
        _ = src.stop_with_when(t0 + CLICK_DURATION_SEC + 0.02);
    }
}
