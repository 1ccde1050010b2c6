//! Centralized interaction options with TOML preset support.
//!
//! All tweakable settings (selection, panning, keybindings, labels) are
//! consolidated here. Options serialize to/from TOML so a page can ship a
//! preset next to its configuration.

mod keybindings;
mod labels;
mod panning;
mod selection;

use std::path::Path;

pub use keybindings::KeybindingOptions;
pub use labels::LabelOptions;
pub use panning::PanOptions;
use schemars::JsonSchema;
pub use selection::SelectionOptions;
use serde::{Deserialize, Serialize};

use crate::error::TrackPanError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[panning]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Rubber-band selection parameters.
    pub selection: SelectionOptions,
    /// Detail panning parameters.
    pub panning: PanOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
    /// Translation templates.
    #[schemars(skip)]
    pub labels: LabelOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, TrackPanError> {
        toml::from_str(content)
            .map_err(|e| TrackPanError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, TrackPanError> {
        let content =
            std::fs::read_to_string(path).map_err(TrackPanError::Io)?;
        Self::from_toml(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), TrackPanError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| TrackPanError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(TrackPanError::Io)?;
        }
        std::fs::write(path, content).map_err(TrackPanError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyAction;
    use crate::surface::Translator;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = Options::from_toml(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[panning]
keyboard_step = 0.25
";
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.panning.keyboard_step, 0.25);
        // Everything else should be default
        assert_eq!(opts.panning.edge_tolerance, 0.1);
        assert_eq!(opts.selection.band_label_min_px, 40.0);
        assert!(opts.selection.recenter_on_click);
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(
            opts.keybindings.lookup("ArrowLeft"),
            Some(KeyAction::PanLeft)
        );
        assert_eq!(opts.keybindings.lookup("Escape"), Some(KeyAction::Cancel));
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn preset_keybindings_override_stock_keys() {
        let toml_str = r#"
[keybindings.bindings]
pan_left = "KeyH"
pan_right = "KeyL"
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.keybindings.lookup("KeyH"), Some(KeyAction::PanLeft));
        assert_eq!(opts.keybindings.lookup("ArrowLeft"), None);
        assert_eq!(opts.keybindings.lookup("Escape"), Some(KeyAction::Cancel));
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let err = Options::from_toml("[panning\nkeyboard_step = ");
        assert!(matches!(err, Err(TrackPanError::OptionsParse(_))));
    }

    #[test]
    fn label_templates_fill_placeholders_in_order() {
        let labels = LabelOptions::default();
        let title = labels.translate(
            "SHOWING_FROM_TO",
            &["20 kbp", "chr1", "10,000", "30,000"],
        );
        assert_eq!(title, "20 kbp from chr1, positions 10,000 to 30,000");
        assert_eq!(labels.translate("ZOOM", &[]), "Zoom");
        assert_eq!(labels.translate("NOT_A_KEY", &["x"]), "NOT_A_KEY");
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("selection"));
        assert!(props.contains_key("panning"));

        // Skipped sections should be absent
        assert!(!props.contains_key("keybindings"));
        assert!(!props.contains_key("labels"));

        let selection = &props["selection"]["properties"];
        assert!(selection.get("drag_threshold_px").is_some());
        assert!(selection.get("band_color").is_none());
    }
}
