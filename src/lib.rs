#![cfg(target_arch = "wasm32")]
use crate::core::{chair_parts, Viewer, ViewerConfig};
use anyhow::Context;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod app;
mod audio;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod panel;
mod render;
mod timers;

use app::AppContext;
use constants::CANVAS_ID;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("chair-viewer starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
            if let Some(document) = dom::window_document() {
                panel::show_fatal(&document, &format!("{:#}", e));
            }
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("#{} is not a canvas: {:?}", CANVAS_ID, e)))?;

    let (w, h) = dom::sync_canvas_backing_size(&canvas);
    let viewer = Viewer::new(&chair_parts(), ViewerConfig::default(), w as f32 / h as f32)
        .context("building part registry")?;
    let part_count = viewer.registry().len();
    log::info!("[init] {} parts", part_count);

    // Renderer first: if WebGPU is unavailable nothing else is wired up.
    let gpu = render::GpuState::new(&canvas, part_count)
        .await
        .context("initializing WebGPU")?;

    let ctx = AppContext {
        document: document.clone(),
        canvas,
        viewer: Rc::new(RefCell::new(viewer)),
        timers: Rc::new(RefCell::new(timers::PendingTimers::default())),
        sound: Rc::new(audio::ClickSound::new()),
        epoch: Instant::now(),
    };

    events::wire_resize(&ctx);
    events::wire_auto_rotate_checkbox(&ctx);
    events::wire_input_handlers(&ctx);
    events::wire_global_keydown(&ctx);

    panel::hide(&document);
    panel::hide_loading(&document);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        app: ctx,
        gpu,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
