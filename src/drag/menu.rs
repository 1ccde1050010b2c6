//! The small context menu shown after a selection is committed.

use serde::{Deserialize, Serialize};

use super::panel::{PanelKind, PanelProfile};
use crate::surface::{Rect, Translator};

/// Height of the menu's title row, in pixels.
const TITLE_HEIGHT: f64 = 24.0;
/// Height of one menu entry, in pixels.
const ROW_HEIGHT: f64 = 20.0;

/// A selection menu entry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MenuAction {
    /// Navigate to the selection.
    Zoom,
    /// Recenter on the selection, keeping the current span.
    Recenter,
    /// Dump the selected sequence as FASTA.
    DumpFasta,
    /// Discard the selection.
    Cancel,
}

impl MenuAction {
    /// Translation key of the entry's label on `panel`.
    #[must_use]
    pub fn label_key(self, panel: PanelKind) -> &'static str {
        match self {
            Self::Zoom if panel == PanelKind::Detail => "ZOOM_IN",
            Self::Zoom => "ZOOM",
            Self::Recenter => "RECENTER_ON_REGION",
            Self::DumpFasta => "DUMP_AS_FASTA",
            Self::Cancel => "CANCEL",
        }
    }
}

/// One rendered menu entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuItem {
    /// What clicking the entry does.
    pub action: MenuAction,
    /// Translated label.
    pub label: String,
}

/// A positioned, ready-to-render selection menu.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionMenu {
    /// Panel the selection was made on.
    pub panel: PanelKind,
    /// Title row: the selected landmark.
    pub title: String,
    /// Entries, top to bottom.
    pub items: Vec<MenuItem>,
    /// Placement in page pixels.
    pub bounds: Rect,
    /// Background color.
    pub background: String,
    /// Text color.
    pub font_color: String,
}

impl SelectionMenu {
    /// Build the menu for `profile`, placed near `cursor` and kept inside
    /// `viewport`.
    #[must_use]
    pub fn build(
        profile: &PanelProfile,
        title: String,
        cursor: (f64, f64),
        viewport: &Rect,
        labels: &dyn Translator,
    ) -> Self {
        let items: Vec<MenuItem> = profile
            .menu_items()
            .iter()
            .map(|&action| MenuItem {
                action,
                label: labels.translate(action.label_key(profile.kind), &[]),
            })
            .collect();
        let height = TITLE_HEIGHT + ROW_HEIGHT * items.len() as f64;
        let bounds = place(cursor, profile.menu_width, height, viewport);
        Self {
            panel: profile.kind,
            title,
            items,
            bounds,
            background: profile.background.clone(),
            font_color: profile.font_color.clone(),
        }
    }
}

/// Position a `width × height` box so that the cursor sits a quarter of the
/// way across and a third of the way down, then pull it back inside
/// `viewport`.
#[must_use]
pub fn place(
    cursor: (f64, f64),
    width: f64,
    height: f64,
    viewport: &Rect,
) -> Rect {
    let (x, y) = cursor;
    let left = clamp_span(
        x - (width / 4.0).round(),
        width,
        viewport.left,
        viewport.right(),
    );
    let top = clamp_span(
        y - (height / 3.0).round(),
        height,
        viewport.top,
        viewport.bottom(),
    );
    Rect::new(left, top, width, height)
}

/// Clamp the start of a span of `size` into `[lo, hi]`; if it cannot fit,
/// pin it to `lo`.
fn clamp_span(start: f64, size: f64, lo: f64, hi: f64) -> f64 {
    start.min(hi - size).max(lo)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::LabelOptions;

    fn viewport() -> Rect {
        Rect::new(0.0, 0.0, 1000.0, 700.0)
    }

    #[test]
    fn menu_sits_near_cursor() {
        let r = place((400.0, 300.0), 200.0, 90.0, &viewport());
        assert_eq!((r.left, r.top), (350.0, 270.0));
    }

    #[test]
    fn menu_is_pulled_inside_viewport() {
        let right = place((990.0, 690.0), 200.0, 90.0, &viewport());
        assert_eq!((right.right(), right.bottom()), (1000.0, 700.0));

        let left = place((5.0, 5.0), 200.0, 90.0, &viewport());
        assert_eq!((left.left, left.top), (0.0, 0.0));
    }

    #[test]
    fn oversized_menu_pins_to_top_left() {
        let r = place((50.0, 50.0), 2000.0, 90.0, &viewport());
        assert_eq!(r.left, 0.0);
    }

    #[test]
    fn detail_menu_labels() {
        let labels = LabelOptions::default();
        let menu = SelectionMenu::build(
            &PanelProfile::detail(),
            "chr1:100..200".to_owned(),
            (500.0, 300.0),
            &viewport(),
            &labels,
        );
        let names: Vec<&str> =
            menu.items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(
            names,
            [
                "Zoom in",
                "Recenter on this region",
                "Dump selection as FASTA",
                "Cancel"
            ]
        );
        assert_eq!(menu.bounds.height, 104.0);
        assert_eq!(menu.bounds.width, 200.0);
    }

    #[test]
    fn overview_zoom_is_plain_zoom() {
        assert_eq!(MenuAction::Zoom.label_key(PanelKind::Overview), "ZOOM");
        assert_eq!(MenuAction::Zoom.label_key(PanelKind::Detail), "ZOOM_IN");
    }
}
