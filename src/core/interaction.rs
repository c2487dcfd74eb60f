// Hover / selection state machine.
//
// Hover and selection are independent: a part can be hovered while the same or
// another part is selected. Time is passed in by the caller (milliseconds on any
// monotonic clock) so the machine stays deterministic. Delayed effects are
// returned as generations; the caller arms a timer and reports back with the
// generation, and only the current generation has any effect.

use super::constants::{CLICK_DEBOUNCE_MS, PANEL_HIDE_MS, SELECTION_CLEAR_MS};
use super::parts::PartId;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InteractionConfig {
    pub click_debounce_ms: f64,
    pub selection_clear_ms: f64,
    pub panel_hide_ms: f64,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            click_debounce_ms: CLICK_DEBOUNCE_MS,
            selection_clear_ms: SELECTION_CLEAR_MS,
            panel_hide_ms: PANEL_HIDE_MS,
        }
    }
}

/// Stamp identifying one selection or one panel show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Generation(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cursor {
    Default,
    Pointer,
}

impl Cursor {
    pub fn as_css(self) -> &'static str {
        match self {
            Cursor::Default => "default",
            Cursor::Pointer => "pointer",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HoverUpdate {
    pub changed: bool,
    pub cursor: Cursor,
}

/// A timer the caller should arm: fire `generation` back after `delay_ms`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimerRequest {
    pub generation: Generation,
    pub delay_ms: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ClickOutcome {
    /// Too soon after the last accepted click; nothing changed.
    Debounced,
    /// A part was hit. Show its panel and arm both timers.
    Selected {
        part: PartId,
        deselect: TimerRequest,
        panel_hide: TimerRequest,
    },
    /// Empty space. The panel (if any) is hidden; selection and hover are untouched.
    Missed { panel_hidden: bool },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct PanelShow {
    part: PartId,
    generation: Generation,
}

#[derive(Clone, Debug)]
pub struct InteractionState {
    config: InteractionConfig,
    hovered: Option<PartId>,
    selected: Option<(PartId, Generation)>,
    panel: Option<PanelShow>,
    last_click_ms: Option<f64>,
    next_generation: u64,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self::new(InteractionConfig::default())
    }
}

impl InteractionState {
    pub fn new(config: InteractionConfig) -> Self {
        Self {
            config,
            hovered: None,
            selected: None,
            panel: None,
            last_click_ms: None,
            next_generation: 1,
        }
    }

    pub fn config(&self) -> &InteractionConfig {
        &self.config
    }

    pub fn hovered(&self) -> Option<PartId> {
        self.hovered
    }

    pub fn selected(&self) -> Option<PartId> {
        self.selected.map(|(p, _)| p)
    }

    /// Part whose panel is currently visible.
    pub fn panel_part(&self) -> Option<PartId> {
        self.panel.map(|p| p.part)
    }

    pub fn is_panel_visible(&self) -> bool {
        self.panel.is_some()
    }

    fn bump(&mut self) -> Generation {
        let g = Generation(self.next_generation);
        self.next_generation += 1;
        g
    }

    /// Apply the latest hit-test result for a pointer move.
    pub fn pointer_move(&mut self, hit: Option<PartId>) -> HoverUpdate {
        let changed = self.hovered != hit;
        if changed {
            self.hovered = hit;
        }
        HoverUpdate {
            changed,
            cursor: if hit.is_some() {
                Cursor::Pointer
            } else {
                Cursor::Default
            },
        }
    }

    pub fn pointer_leave(&mut self) -> HoverUpdate {
        self.pointer_move(None)
    }

    /// Handle a click at `now_ms`. `pick` runs the hit test and is only called when
    /// the click survives the debounce window.
    pub fn click(&mut self, now_ms: f64, pick: impl FnOnce() -> Option<PartId>) -> ClickOutcome {
        if let Some(last) = self.last_click_ms {
            if now_ms - last < self.config.click_debounce_ms {
                return ClickOutcome::Debounced;
            }
        }
        self.last_click_ms = Some(now_ms);

        match pick() {
            Some(part) => {
                let selection = self.bump();
                let panel = self.bump();
                self.selected = Some((part, selection));
                self.panel = Some(PanelShow {
                    part,
                    generation: panel,
                });
                ClickOutcome::Selected {
                    part,
                    deselect: TimerRequest {
                        generation: selection,
                        delay_ms: self.config.selection_clear_ms,
                    },
                    panel_hide: TimerRequest {
                        generation: panel,
                        delay_ms: self.config.panel_hide_ms,
                    },
                }
            }
            None => ClickOutcome::Missed {
                panel_hidden: self.panel.take().is_some(),
            },
        }
    }

    /// Deselect timer fired. Clears only if `generation` is still the live selection.
    pub fn expire_selection(&mut self, generation: Generation) -> bool {
        match self.selected {
            Some((_, g)) if g == generation => {
                self.selected = None;
                true
            }
            _ => false,
        }
    }

    /// Panel auto-hide timer fired. Hides only if `generation` is still the live panel.
    pub fn expire_panel(&mut self, generation: Generation) -> bool {
        match self.panel {
            Some(p) if p.generation == generation => {
                self.panel = None;
                true
            }
            _ => false,
        }
    }

    pub fn hide_panel(&mut self) -> bool {
        self.panel.take().is_some()
    }

    pub fn clear_selection(&mut self) -> bool {
        self.selected.take().is_some()
    }

    #[cfg(feature = "debug-hooks")]
    pub fn snapshot(&self) -> String {
        format!(
            "hovered={:?} selected={:?} panel={:?} last_click_ms={:?} next_generation={}",
            self.hovered, self.selected, self.panel, self.last_click_ms, self.next_generation
        )
    }
}
