//! The page-facing vocabulary of the interaction core.
//!
//! Every visible consequence of a gesture is described as an `Effect`.
//! The page applies effects in order; the core never cares how.

use serde::Serialize;

use super::menu::SelectionMenu;
use super::panel::PanelKind;
use crate::navigation::NavigationRequest;

/// Geometry and appearance of the rubber band drawn during a drag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DragBand {
    /// Panel being selected on.
    pub panel: PanelKind,
    /// Left edge, page pixels.
    pub left: f64,
    /// Top edge, page pixels.
    pub top: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
    /// Fill color.
    pub color: String,
    /// Selected length label (`"1200 bp"`), once the band is wide enough
    /// to hold it.
    pub label: Option<String>,
    /// The selection exceeds the largest segment the server renders.
    pub oversized: bool,
}

/// Parameters for the primer-design page, derived from a selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrimerRequest {
    /// Left boundary of the target region.
    pub left: i64,
    /// Right boundary of the target region.
    pub right: i64,
    /// Acceptable PCR product sizes, inclusive.
    pub product_size: (i64, i64),
    /// `product_size` as the primer form's `PRIMER_PRODUCT_SIZE_RANGE`
    /// value (`"50-600"`).
    pub product_size_range: String,
}

impl PrimerRequest {
    /// Target `[left, right]` with products within `margin` of its width,
    /// never below `min_size`.
    #[must_use]
    pub fn new(left: i64, right: i64, margin: i64, min_size: i64) -> Self {
        let width = right - left;
        let (lo, hi) = ((width - margin).max(min_size), width + margin);
        Self {
            left,
            right,
            product_size: (lo, hi),
            product_size_range: format!("{lo}-{hi}"),
        }
    }
}

/// One visible consequence of an input event.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "effect", content = "value", rename_all = "snake_case")]
pub enum Effect {
    /// Suppress (`true`) or restore (`false`) tooltip balloons page-wide.
    SuppressTooltips(bool),
    /// Enable or disable native text selection on a panel's layer.
    TextSelection {
        /// Panel whose layer is affected.
        panel: PanelKind,
        /// Whether text selection is allowed.
        enabled: bool,
    },
    /// Draw or resize the drag band.
    DrawBand(DragBand),
    /// Hide the drag band on a panel.
    HideBand(PanelKind),
    /// Show the selection menu.
    ShowMenu(SelectionMenu),
    /// Hide the selection menu.
    HideMenu,
    /// Replace the coordinate input field's contents.
    SetLandmark(String),
    /// Hand a request to the update service.
    Navigate(NavigationRequest),
    /// Submit the primer-design form.
    DesignPrimers(PrimerRequest),
}
