//! Per-panel capability records.
//!
//! The overview, region, detail and primer-design panels all select the
//! same way; they differ only in where their segment comes from, how the
//! band and menu look, and whether a finished drag submits straight away.

use serde::{Deserialize, Serialize};

use super::menu::MenuAction;
use crate::coords::ViewGeometry;
use crate::error::TrackPanError;
use crate::segment::{Segment, SegmentInfo};
use crate::surface::Rect;

/// Which scale bar a gesture started on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PanelKind {
    /// Whole-chromosome overview.
    Overview,
    /// Intermediate region view.
    Region,
    /// Base-level detail view.
    Detail,
    /// Detail view on the primer-design page.
    Primers,
}

impl PanelKind {
    /// All panel kinds, in page order.
    pub const ALL: [Self; 4] =
        [Self::Overview, Self::Region, Self::Detail, Self::Primers];

    /// Whether the scale bar is one of the detail tracks and slides with
    /// the pan position.
    #[must_use]
    pub fn follows_pan(self) -> bool {
        matches!(self, Self::Detail | Self::Primers)
    }
}

/// How one panel kind behaves under the drag controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelProfile {
    /// Panel kind.
    pub kind: PanelKind,
    /// Element id of the panel's scale bar image.
    pub image_id: String,
    /// Menu background color.
    pub background: String,
    /// Menu text color.
    pub font_color: String,
    /// Menu width in pixels.
    pub menu_width: f64,
    /// Submit a finished selection without showing the menu.
    pub auto_submit: bool,
}

impl PanelProfile {
    /// Overview panel: zoom or cancel.
    #[must_use]
    pub fn overview() -> Self {
        Self {
            kind: PanelKind::Overview,
            image_id: "__scale___image".to_owned(),
            background: "yellow".to_owned(),
            font_color: "blue".to_owned(),
            menu_width: 120.0,
            auto_submit: false,
        }
    }

    /// Region panel: submits straight away.
    #[must_use]
    pub fn region() -> Self {
        Self {
            kind: PanelKind::Region,
            image_id: "Region Scale_image".to_owned(),
            menu_width: 160.0,
            auto_submit: true,
            ..Self::overview()
        }
    }

    /// Detail panel: zoom, recenter, FASTA dump or cancel.
    #[must_use]
    pub fn detail() -> Self {
        Self {
            kind: PanelKind::Detail,
            image_id: "Detail Scale_image".to_owned(),
            menu_width: 200.0,
            auto_submit: false,
            ..Self::overview()
        }
    }

    /// Primer-design panel: the selection becomes the primer target.
    #[must_use]
    pub fn primers() -> Self {
        Self {
            kind: PanelKind::Primers,
            image_id: "detail_image".to_owned(),
            background: "gray".to_owned(),
            menu_width: 200.0,
            auto_submit: true,
            ..Self::overview()
        }
    }

    /// The stock profile for `kind`.
    #[must_use]
    pub fn for_kind(kind: PanelKind) -> Self {
        match kind {
            PanelKind::Overview => Self::overview(),
            PanelKind::Region => Self::region(),
            PanelKind::Detail => Self::detail(),
            PanelKind::Primers => Self::primers(),
        }
    }

    /// Entries of the selection menu, top to bottom.
    #[must_use]
    pub fn menu_items(&self) -> &'static [MenuAction] {
        match self.kind {
            PanelKind::Overview | PanelKind::Region => {
                &[MenuAction::Zoom, MenuAction::Cancel]
            }
            PanelKind::Detail => &[
                MenuAction::Zoom,
                MenuAction::Recenter,
                MenuAction::DumpFasta,
                MenuAction::Cancel,
            ],
            PanelKind::Primers => &[],
        }
    }

    /// Derive the panel's segment and geometry from the server metadata
    /// and the scale bar's bounding box.
    ///
    /// When the rendered image is wider than the server expected (a
    /// left-hand key adds margin), the surplus is added to the padding.
    pub fn segment_from_info(
        &self,
        info: &SegmentInfo,
        bounds: &Rect,
    ) -> Result<(Segment, ViewGeometry), TrackPanError> {
        let (segment, ratio, expected_width) = match self.kind {
            PanelKind::Overview => (
                info.overview_segment(),
                info.overview_pixel_ratio,
                None,
            ),
            PanelKind::Region => (
                info.region_segment(),
                info.region_pixel_ratio,
                Some(info.overview_width),
            ),
            PanelKind::Detail | PanelKind::Primers => (
                info.detail_segment(),
                info.details_pixel_ratio,
                Some(info.detail_width),
            ),
        };

        let mut pad_left = info.image_padding as f64;
        if let Some(expected) = expected_width {
            let expected = expected as f64;
            if expected > 0.0 && bounds.width > expected {
                pad_left += bounds.width - expected;
            }
        }

        let geometry = ViewGeometry::new(
            &self.image_id,
            ratio,
            pad_left,
            bounds.width,
            bounds.left,
        )?;
        Ok((segment, geometry))
    }
}
