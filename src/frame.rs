use crate::app::AppContext;
use crate::constants::MAX_FRAME_DT_SEC;
use crate::render::GpuState;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub app: AppContext,
    pub gpu: GpuState,
    pub last_instant: Instant,
}

impl FrameContext {
    /// One display refresh. Pointer events queued since the last frame have already
    /// been applied, so the feedback pass sees settled state.
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32().min(MAX_FRAME_DT_SEC);
        self.last_instant = now;

        self.app.viewer.borrow_mut().frame(dt_sec);

        let w = self.app.canvas.width();
        let h = self.app.canvas.height();
        self.gpu.resize_if_needed(w, h);

        let viewer = self.app.viewer.borrow();
        if let Err(e) = self.gpu.render(viewer.camera(), viewer.registry()) {
            log::error!("render error: {:?}", e);
        }
    }
}

fn request_frame(window: &web::Window, tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let Some(cb) = tick.borrow().as_ref() {
        _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        if let Some(w) = web::window() {
            request_frame(&w, &tick_clone);
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        request_frame(&w, &tick);
    }
}
