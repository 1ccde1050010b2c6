use serde::{Deserialize, Serialize};

use crate::drag::{MenuAction, PanelKind};
use crate::surface::MarkerPanel;

/// Platform-agnostic input events.
///
/// These are fed into a [`BrowserSession`](crate::session::BrowserSession),
/// which routes them to the drag controller or the panner. Positions are
/// page pixels, the same space the panels' bounding boxes are reported in.
///
/// # Example
///
/// ```ignore
/// let effects = session.handle_event(InputEvent::MouseDown {
///     panel: Some(PanelKind::Detail),
///     x: 412.0,
///     y: 90.0,
/// });
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    /// Primary button pressed.
    MouseDown {
        /// Scale bar under the cursor, if any.
        panel: Option<PanelKind>,
        /// Horizontal position.
        x: f64,
        /// Vertical position.
        y: f64,
    },
    /// Cursor moved.
    MouseMove {
        /// Horizontal position.
        x: f64,
        /// Vertical position.
        y: f64,
    },
    /// Primary button released.
    MouseUp {
        /// Horizontal position.
        x: f64,
        /// Vertical position.
        y: f64,
    },
    /// Key pressed.
    Key {
        /// Physical key string (`"ArrowLeft"`, `"Escape"`).
        code: String,
        /// Whether focus is in a text input, where arrow keys must not pan.
        #[serde(default)]
        in_text_field: bool,
    },
    /// An entry in the selection menu was clicked.
    MenuClick {
        /// The chosen entry.
        action: MenuAction,
    },
    /// A position marker was dragged to a new left offset.
    MarkerDragged {
        /// Which marker.
        panel: MarkerPanel,
        /// New left offset of the marker, in its panel's pixels.
        left: f64,
    },
    /// A detail track was dragged to a new left offset.
    DetailDragged {
        /// New left offset of the dragged track image.
        left: f64,
    },
    /// New detail tracks finished loading.
    TracksLoaded,
    /// The coordinate field was submitted.
    LandmarkSubmitted {
        /// Field contents, plain or with separators (`"chr1:10,000..20,000"`).
        text: String,
    },
}
