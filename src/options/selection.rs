use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Selection", inline)]
#[serde(default)]
/// Rubber-band selection parameters.
pub struct SelectionOptions {
    /// Movement (px) a drag must exceed before it is a selection rather
    /// than a click.
    #[schemars(title = "Drag Threshold", range(min = 0.0, max = 10.0), extend("step" = 0.5))]
    pub drag_threshold_px: f64,
    /// Bands narrower than this (px) carry no "N bp" label.
    #[schemars(title = "Band Label Width", range(min = 0.0, max = 200.0), extend("step" = 1.0))]
    pub band_label_min_px: f64,
    /// Drag band fill color.
    #[schemars(skip)]
    pub band_color: String,
    /// Drag band fill color when the selection exceeds the server's
    /// maximum segment size.
    #[schemars(skip)]
    pub warning_color: String,
    /// Whether a plain click on a scale bar recenters the view.
    #[schemars(title = "Recenter On Click")]
    pub recenter_on_click: bool,
    /// Primer product size range is the selection width ± this margin.
    #[schemars(title = "Primer Size Margin", range(min = 0, max = 5000))]
    pub primer_size_margin: i64,
    /// Lower bound of the primer product size range.
    #[schemars(title = "Primer Minimum Size", range(min = 0, max = 5000))]
    pub primer_min_size: i64,
}

impl Default for SelectionOptions {
    fn default() -> Self {
        Self {
            drag_threshold_px: 1.0,
            band_label_min_px: 40.0,
            band_color: "#BABABA".to_owned(),
            warning_color: "#FF6347".to_owned(),
            recenter_on_click: true,
            primer_size_margin: 200,
            primer_min_size: 50,
        }
    }
}
