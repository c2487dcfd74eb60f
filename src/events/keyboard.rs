use crate::app::AppContext;
use crate::constants::AUTO_ROTATE_ID;
use crate::core::{key_action, KeyAction, ORBIT_SPEED_STEP};
use crate::dom;
use web_sys as web;

pub fn wire_global_keydown(ctx: &AppContext) {
    let Some(window) = web::window() else {
        return;
    };
    let ctx_key = ctx.clone();
    dom::listen(&window, "keydown", move |ev: web::KeyboardEvent| {
        if ev.repeat() || ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
            return;
        }
        let Some(action) = key_action(&ev.key()) else {
            return;
        };
        handle_action(&ctx_key, action);
    });
}

fn handle_action(ctx: &AppContext, action: KeyAction) {
    match action {
        KeyAction::ToggleAutoRotate => {
            let on = ctx.viewer.borrow_mut().toggle_auto_rotate();
            dom::set_checkbox(&ctx.document, AUTO_ROTATE_ID, on);
            log::info!("[camera] auto-rotate {}", if on { "on" } else { "off" });
        }
        KeyAction::SpeedUp | KeyAction::SlowDown => {
            let step = if action == KeyAction::SpeedUp {
                ORBIT_SPEED_STEP
            } else {
                -ORBIT_SPEED_STEP
            };
            let mut viewer = ctx.viewer.borrow_mut();
            let speed = viewer.animator().speed() + step;
            viewer.animator_mut().set_speed(speed);
            log::info!("[camera] speed {:.2} rad/s", viewer.animator().speed());
        }
        KeyAction::ClearSelection => ctx.dismiss(),
        KeyAction::DebugSnapshot => {
            #[cfg(feature = "debug-hooks")]
            log::info!("{}", ctx.viewer.borrow().debug_snapshot());
        }
    }
}
