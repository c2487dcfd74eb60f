// Host-side tests for the hover / selection / panel state machine.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod parts {
    include!("../src/core/parts.rs");
}
mod interaction {
    include!("../src/core/interaction.rs");
}

use interaction::*;
use parts::PartId;

const A: PartId = PartId(0);
const B: PartId = PartId(1);

fn select(state: &mut InteractionState, now_ms: f64, part: PartId) -> (TimerRequest, TimerRequest) {
    match state.click(now_ms, || Some(part)) {
        ClickOutcome::Selected {
            part: got,
            deselect,
            panel_hide,
        } => {
            assert_eq!(got, part);
            (deselect, panel_hide)
        }
        other => panic!("expected selection at {}ms, got {:?}", now_ms, other),
    }
}

#[test]
fn hover_follows_latest_hit() {
    let mut s = InteractionState::default();
    let moves = [Some(A), None, Some(B), Some(B), Some(A)];
    let changed: Vec<bool> = moves.iter().map(|h| s.pointer_move(*h).changed).collect();
    assert_eq!(changed, vec![true, true, true, false, true]);
    assert_eq!(s.hovered(), Some(A));

    let leave = s.pointer_leave();
    assert!(leave.changed);
    assert_eq!(leave.cursor, Cursor::Default);
    assert_eq!(s.hovered(), None);
}

#[test]
fn cursor_tracks_hit_not_change() {
    let mut s = InteractionState::default();
    assert_eq!(s.pointer_move(Some(A)).cursor, Cursor::Pointer);
    assert_eq!(s.pointer_move(Some(A)).cursor, Cursor::Pointer);
    assert_eq!(s.pointer_move(None).cursor, Cursor::Default);
    assert_eq!(Cursor::Pointer.as_css(), "pointer");
    assert_eq!(Cursor::Default.as_css(), "default");
}

#[test]
fn first_click_selects_and_requests_both_timers() {
    let mut s = InteractionState::default();
    let (deselect, panel_hide) = select(&mut s, 1234.0, A);
    assert_eq!(deselect.delay_ms, 500.0);
    assert_eq!(panel_hide.delay_ms, 5000.0);
    assert_ne!(deselect.generation, panel_hide.generation);
    assert_eq!(s.selected(), Some(A));
    assert_eq!(s.panel_part(), Some(A));
    assert!(s.is_panel_visible());
}

#[test]
fn clicks_inside_debounce_window_are_ignored() {
    let mut s = InteractionState::default();
    select(&mut s, 0.0, A);

    let mut picked = false;
    let outcome = s.click(150.0, || {
        picked = true;
        Some(B)
    });
    assert_eq!(outcome, ClickOutcome::Debounced);
    assert!(!picked, "hit test must not run for a debounced click");
    assert_eq!(s.selected(), Some(A));
    assert_eq!(s.panel_part(), Some(A));
}

#[test]
fn debounce_window_is_measured_from_last_accepted_click() {
    let mut s = InteractionState::default();
    select(&mut s, 0.0, A);
    assert_eq!(s.click(150.0, || Some(B)), ClickOutcome::Debounced);
    // 250 - 0 >= 200; the dropped click at 150 does not extend the window
    select(&mut s, 250.0, B);
    assert_eq!(s.click(449.0, || Some(A)), ClickOutcome::Debounced);
    select(&mut s, 450.0, A);
}

#[test]
fn exactly_debounce_interval_is_accepted() {
    let mut s = InteractionState::default();
    select(&mut s, 1000.0, A);
    select(&mut s, 1200.0, B);
}

#[test]
fn missed_clicks_count_for_debounce() {
    let mut s = InteractionState::default();
    assert_eq!(
        s.click(0.0, || None),
        ClickOutcome::Missed {
            panel_hidden: false
        }
    );
    assert_eq!(s.click(100.0, || Some(A)), ClickOutcome::Debounced);
    assert_eq!(s.selected(), None);
}

#[test]
fn stale_deselect_timer_does_not_clear_newer_selection() {
    let mut s = InteractionState::default();
    let (a_deselect, _) = select(&mut s, 0.0, A);
    let (b_deselect, _) = select(&mut s, 300.0, B);

    // A's timer fires at 500ms while B is selected
    assert!(!s.expire_selection(a_deselect.generation));
    assert_eq!(s.selected(), Some(B));

    // B's timer fires at 800ms
    assert!(s.expire_selection(b_deselect.generation));
    assert_eq!(s.selected(), None);
    assert!(!s.expire_selection(b_deselect.generation));
}

#[test]
fn reselecting_same_part_restarts_deselect_timer() {
    let mut s = InteractionState::default();
    let (first, _) = select(&mut s, 0.0, A);
    let (second, _) = select(&mut s, 300.0, A);
    assert_ne!(first.generation, second.generation);
    assert!(!s.expire_selection(first.generation));
    assert_eq!(s.selected(), Some(A));
    assert!(s.expire_selection(second.generation));
}

#[test]
fn panel_outlives_selection_and_hides_on_its_own_timer() {
    let mut s = InteractionState::default();
    let (deselect, panel_hide) = select(&mut s, 0.0, A);
    assert!(s.expire_selection(deselect.generation));
    assert!(s.is_panel_visible());
    assert_eq!(s.panel_part(), Some(A));

    assert!(s.expire_panel(panel_hide.generation));
    assert!(!s.is_panel_visible());
}

#[test]
fn stale_panel_timer_does_not_hide_newer_panel() {
    let mut s = InteractionState::default();
    let (_, first_panel) = select(&mut s, 0.0, A);
    let (_, second_panel) = select(&mut s, 3000.0, B);
    assert!(!s.expire_panel(first_panel.generation));
    assert_eq!(s.panel_part(), Some(B));
    assert!(s.expire_panel(second_panel.generation));
    assert_eq!(s.panel_part(), None);
}

#[test]
fn empty_click_hides_panel_but_keeps_selection_and_hover() {
    let mut s = InteractionState::default();
    s.pointer_move(Some(B));
    select(&mut s, 0.0, A);

    assert_eq!(
        s.click(250.0, || None),
        ClickOutcome::Missed { panel_hidden: true }
    );
    assert!(!s.is_panel_visible());
    assert_eq!(s.selected(), Some(A));
    assert_eq!(s.hovered(), Some(B));

    assert_eq!(
        s.click(500.0, || None),
        ClickOutcome::Missed {
            panel_hidden: false
        }
    );
}

#[test]
fn hover_and_selection_are_independent() {
    let mut s = InteractionState::default();
    s.pointer_move(Some(A));
    select(&mut s, 0.0, A);
    s.pointer_move(Some(B));
    assert_eq!(s.hovered(), Some(B));
    assert_eq!(s.selected(), Some(A));
    s.pointer_leave();
    assert_eq!(s.selected(), Some(A));
}

#[test]
fn clear_and_hide_report_whether_anything_changed() {
    let mut s = InteractionState::default();
    assert!(!s.clear_selection());
    assert!(!s.hide_panel());
    select(&mut s, 0.0, A);
    assert!(s.clear_selection());
    assert!(s.hide_panel());
    assert_eq!(s.selected(), None);
    assert!(!s.is_panel_visible());
}

#[test]
fn custom_config_drives_timer_delays() {
    let mut s = InteractionState::new(InteractionConfig {
        click_debounce_ms: 50.0,
        selection_clear_ms: 100.0,
        panel_hide_ms: 1000.0,
    });
    let (deselect, panel_hide) = select(&mut s, 0.0, A);
    assert_eq!(deselect.delay_ms, 100.0);
    assert_eq!(panel_hide.delay_ms, 1000.0);
    select(&mut s, 50.0, B);
}
