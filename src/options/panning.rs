use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Panning", inline)]
#[serde(default)]
/// Over-zoomed detail panning parameters.
pub struct PanOptions {
    /// Fraction of the visible span moved per arrow-key press.
    #[schemars(title = "Keyboard Step", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub keyboard_step: f64,
    /// How far (fraction of the visible span) a scroll may overshoot the
    /// loaded segment before it is refused.
    #[schemars(title = "Edge Tolerance", range(min = 0.0, max = 0.5), extend("step" = 0.01))]
    pub edge_tolerance: f64,
    /// Pan fraction used when the server requests no initial view.
    #[schemars(title = "Default Position", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub default_position: f64,
}

impl Default for PanOptions {
    fn default() -> Self {
        Self {
            keyboard_step: 0.15,
            edge_tolerance: 0.1,
            default_position: 0.5,
        }
    }
}
