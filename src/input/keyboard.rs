use serde::{Deserialize, Serialize};

/// Session-level actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// pan_left = "ArrowLeft"
/// cancel = "Escape"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Pan the detail view left by the keyboard step.
    PanLeft,
    /// Pan the detail view right by the keyboard step.
    PanRight,
    /// Abort the selection gesture in progress.
    Cancel,
}
