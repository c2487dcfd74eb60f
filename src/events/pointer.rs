use crate::app::AppContext;
use crate::constants::WHEEL_LINE_TO_PX;
use crate::dom;
use web_sys as web;

pub fn wire_input_handlers(ctx: &AppContext) {
    wire_pointermove(ctx);
    wire_pointerleave(ctx);
    wire_pointerdown(ctx);
    wire_pointerup(ctx);
    wire_click(ctx);
    wire_wheel(ctx);
}

fn wire_pointermove(ctx: &AppContext) {
    let ctx_move = ctx.clone();
    dom::listen(&ctx.canvas, "pointermove", move |ev: web::PointerEvent| {
        let rect = dom::client_rect(&ctx_move.canvas);
        let update = ctx_move.viewer.borrow_mut().pointer_move(
            ev.client_x() as f32,
            ev.client_y() as f32,
            rect,
        );
        if update.changed {
            let viewer = ctx_move.viewer.borrow();
            let name = viewer
                .interaction()
                .hovered()
                .and_then(|id| viewer.registry().name_of(id))
                .unwrap_or("-");
            log::debug!("[hover] {}", name);
            dom::set_cursor(&ctx_move.canvas, update.cursor.as_css());
        }
    });
}

fn wire_pointerleave(ctx: &AppContext) {
    let ctx_leave = ctx.clone();
    dom::listen(&ctx.canvas, "pointerleave", move |_ev: web::PointerEvent| {
        let update = ctx_leave.viewer.borrow_mut().pointer_leave();
        if update.changed {
            dom::set_cursor(&ctx_leave.canvas, update.cursor.as_css());
        }
    });
}

fn wire_pointerdown(ctx: &AppContext) {
    let ctx_down = ctx.clone();
    dom::listen(&ctx.canvas, "pointerdown", move |ev: web::PointerEvent| {
        ctx_down
            .viewer
            .borrow_mut()
            .pointer_down(ev.client_x() as f32, ev.client_y() as f32);
        _ = ctx_down.canvas.set_pointer_capture(ev.pointer_id());
    });
}

fn wire_pointerup(ctx: &AppContext) {
    for event in ["pointerup", "pointercancel"] {
        let ctx_up = ctx.clone();
        dom::listen(&ctx.canvas, event, move |ev: web::PointerEvent| {
            ctx_up.viewer.borrow_mut().pointer_up();
            _ = ctx_up.canvas.release_pointer_capture(ev.pointer_id());
        });
    }
}

fn wire_click(ctx: &AppContext) {
    let ctx_click = ctx.clone();
    dom::listen(&ctx.canvas, "click", move |ev: web::MouseEvent| {
        let rect = dom::client_rect(&ctx_click.canvas);
        let now = ctx_click.now_ms();
        let outcome = ctx_click.viewer.borrow_mut().click(
            now,
            ev.client_x() as f32,
            ev.client_y() as f32,
            rect,
        );
        match outcome {
            Some(outcome) => ctx_click.apply_click(outcome),
            None => log::debug!("[click] ignored after orbit drag"),
        }
    });
}

fn wire_wheel(ctx: &AppContext) {
    let ctx_wheel = ctx.clone();
    dom::listen(&ctx.canvas, "wheel", move |ev: web::WheelEvent| {
        let scale = if ev.delta_mode() == web::WheelEvent::DOM_DELTA_LINE {
            WHEEL_LINE_TO_PX
        } else {
            1.0
        };
        let mut viewer = ctx_wheel.viewer.borrow_mut();
        if !viewer.auto_rotate() {
            ev.prevent_default();
            viewer.wheel(ev.delta_y() as f32 * scale);
        }
    });
}
