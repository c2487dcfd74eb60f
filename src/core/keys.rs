/// Keyboard shortcuts understood by the viewer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    ToggleAutoRotate,
    SpeedUp,
    SlowDown,
    ClearSelection,
    DebugSnapshot,
}

/// Map a `KeyboardEvent.key` value to an action.
#[inline]
pub fn key_action(key: &str) -> Option<KeyAction> {
    match key {
        "r" | "R" => Some(KeyAction::ToggleAutoRotate),
        "+" | "=" => Some(KeyAction::SpeedUp),
        "-" | "_" => Some(KeyAction::SlowDown),
        "Escape" => Some(KeyAction::ClearSelection),
        "d" | "D" => Some(KeyAction::DebugSnapshot),
        _ => None,
    }
}
