use crate::audio::ClickSound;
use crate::core::{ClickOutcome, PartId, TimerRequest, Viewer};
use crate::panel;
use crate::timers::{PendingTimers, Timeout};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Everything event handlers and the frame loop share, built once in `init`.
#[derive(Clone)]
pub struct AppContext {
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub viewer: Rc<RefCell<Viewer>>,
    pub timers: Rc<RefCell<PendingTimers>>,
    pub sound: Rc<ClickSound>,
    pub epoch: Instant,
}

impl AppContext {
    /// Milliseconds since startup; the clock the interaction state runs on.
    pub fn now_ms(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64() * 1000.0
    }

    pub fn apply_click(&self, outcome: ClickOutcome) {
        match outcome {
            ClickOutcome::Debounced => log::debug!("[click] debounced"),
            ClickOutcome::Selected {
                part,
                deselect,
                panel_hide,
            } => self.on_selected(part, deselect, panel_hide),
            ClickOutcome::Missed { panel_hidden } => {
                if panel_hidden {
                    log::debug!("[panel] hidden by empty-space click");
                    PendingTimers::replace(&mut self.timers.borrow_mut().panel_hide, None);
                    panel::hide(&self.document);
                }
            }
        }
    }

    fn on_selected(&self, part: PartId, deselect: TimerRequest, panel_hide: TimerRequest) {
        let content = self.viewer.borrow().panel_content(part);
        if let Some(content) = content {
            log::info!("[click] selected {}", content.title);
            panel::show(&self.document, &content);
        }
        self.sound.play();

        let viewer = self.viewer.clone();
        let deselect_timer = Timeout::schedule(deselect.delay_ms, move || {
            if viewer.borrow_mut().expire_selection(deselect.generation) {
                log::debug!("[click] selection cleared (gen {})", deselect.generation.0);
            }
        });

        let viewer = self.viewer.clone();
        let document = self.document.clone();
        let panel_timer = Timeout::schedule(panel_hide.delay_ms, move || {
            if viewer.borrow_mut().expire_panel(panel_hide.generation) {
                log::debug!("[panel] auto-hide (gen {})", panel_hide.generation.0);
                panel::hide(&document);
            }
        });

        let mut timers = self.timers.borrow_mut();
        PendingTimers::replace(&mut timers.deselect, deselect_timer);
        PendingTimers::replace(&mut timers.panel_hide, panel_timer);
    }

    /// Drop selection and panel immediately (Escape).
    pub fn dismiss(&self) {
        if self.viewer.borrow_mut().dismiss() {
            log::debug!("[click] dismissed");
        }
        self.timers.borrow_mut().cancel_all();
        panel::hide(&self.document);
    }
}
