use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A pending `setTimeout`. Dropping it without `cancel` leaves the browser timer armed
/// but frees the callback, so always keep it in a slot until it is replaced.
pub struct Timeout {
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Timeout {
    pub fn schedule(delay_ms: f64, callback: impl FnMut() + 'static) -> Option<Self> {
        let window = web::window()?;
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            delay_ms.max(0.0).round() as i32,
        ) {
            Ok(handle) => Some(Self {
                handle,
                _callback: callback,
            }),
            Err(e) => {
                log::error!("[timer] setTimeout failed: {:?}", e);
                None
            }
        }
    }

    pub fn cancel(self) {
        if let Some(window) = web::window() {
            window.clear_timeout_with_handle(self.handle);
        }
    }
}

/// Timers armed by the last accepted click. Re-arming cancels the previous timer.
#[derive(Default)]
pub struct PendingTimers {
    pub deselect: Option<Timeout>,
    pub panel_hide: Option<Timeout>,
}

impl PendingTimers {
    pub fn replace(slot: &mut Option<Timeout>, next: Option<Timeout>) {
        if let Some(old) = std::mem::replace(slot, next) {
            old.cancel();
        }
    }

    pub fn cancel_all(&mut self) {
        Self::replace(&mut self.deselect, None);
        Self::replace(&mut self.panel_hide, None);
    }
}
