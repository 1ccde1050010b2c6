//! Pure pan math: where every panel's draggable element sits for a given
//! pan fraction, and the inverse.

use serde::Serialize;

use crate::segment::SegmentInfo;
use crate::surface::MarkerPanel;

/// Pixel extent of the loaded segment on one marker panel.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct MarkerTrack {
    /// Pixel where the loaded detail segment begins on this panel.
    pub segment_start: i64,
    /// Width of the loaded detail segment on this panel.
    pub segment_width: i64,
    /// How far the marker can travel.
    pub draggable_width: i64,
}

impl MarkerTrack {
    /// Width of the marker box: the visible share of the segment, less the
    /// two 1px borders, never under 1px.
    #[must_use]
    pub fn marker_width(&self, mult: f64) -> i64 {
        ((self.segment_width as f64 / mult).round() as i64 - 2).max(1)
    }

    /// Marker left offset for pan fraction `x`.
    #[must_use]
    pub fn marker_left(&self, x: f64) -> i64 {
        (self.segment_start as f64 + self.draggable_width as f64 * x).round()
            as i64
    }

    /// Snap a dragged marker's left offset into its travel range.
    #[must_use]
    pub fn snap(&self, left: f64) -> f64 {
        let lo = self.segment_start as f64;
        left.clamp(lo, lo + self.draggable_width.max(0) as f64)
    }

    /// Pan fraction for a marker at `left`. `None` when the marker cannot
    /// travel.
    #[must_use]
    pub fn fraction(&self, left: f64) -> Option<f64> {
        (self.draggable_width > 0).then(|| {
            (self.snap(left) - self.segment_start as f64)
                / self.draggable_width as f64
        })
    }
}

/// Every offset the panels take at one pan fraction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PanFrame {
    /// The clamped pan fraction.
    pub x: f64,
    /// Left offset of every detail track.
    pub detail_left: i64,
    /// Left offset of the overview marker.
    pub overview_left: i64,
    /// Left offset of the region marker.
    pub region_left: i64,
    /// First visible coordinate.
    pub visible_start: i64,
    /// Last visible coordinate.
    pub visible_stop: i64,
}

/// Everything the panner derives from one segment-info object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanGeometry {
    /// Zoom multiplier: loaded detail image width over viewport width.
    pub mult: f64,
    /// First coordinate of the loaded detail segment.
    pub detail_start: i64,
    /// Last coordinate of the loaded detail segment.
    pub detail_stop: i64,
    /// Detail panel shown reverse-complemented.
    pub flip: bool,
    /// How far the detail tracks can slide, in pixels.
    pub detail_draggable_width: i64,
    /// Overview marker extent.
    pub overview: MarkerTrack,
    /// Region marker extent.
    pub region: MarkerTrack,
    /// Genomic length visible through the viewport at once.
    pub viewable_length: i64,
}

impl PanGeometry {
    /// Derive pan geometry from server metadata.
    ///
    /// A non-positive multiplier is read as 1 (nothing to pan).
    #[must_use]
    pub fn from_info(info: &SegmentInfo) -> Self {
        let mult = if info.details_mult > 0.0 {
            info.details_mult
        } else {
            1.0
        };
        let len = (info.detail_stop - info.detail_start) as f64;
        let pad = info.image_padding as f64;

        let overview = marker_track(
            info.detail_start as f64 / positive(info.overview_pixel_ratio) + pad,
            len / positive(info.overview_pixel_ratio),
            mult,
        );
        let region = marker_track(
            (info.detail_start - info.region_start) as f64
                / positive(info.region_pixel_ratio)
                + pad,
            len / positive(info.region_pixel_ratio),
            mult,
        );

        Self {
            mult,
            detail_start: info.detail_start,
            detail_stop: info.detail_stop,
            flip: info.flip,
            detail_draggable_width: (info.detail_width - info.overview_width)
                .max(0),
            overview,
            region,
            viewable_length: (len / mult).round() as i64,
        }
    }

    /// Whether the detail image is wider than the viewport.
    #[must_use]
    pub fn is_pannable(&self) -> bool {
        self.mult > 1.0
    }

    /// Loaded detail segment length.
    #[must_use]
    pub fn length(&self) -> i64 {
        self.detail_stop - self.detail_start
    }

    /// Extent of `panel`'s marker.
    #[must_use]
    pub fn marker(&self, panel: MarkerPanel) -> &MarkerTrack {
        match panel {
            MarkerPanel::Overview => &self.overview,
            MarkerPanel::Region => &self.region,
        }
    }

    /// Left offset of the detail tracks for pan fraction `x`.
    #[must_use]
    pub fn detail_offset(&self, x: f64) -> i64 {
        let dw = self.detail_draggable_width;
        let pos = (-x * dw as f64).round() as i64;
        if self.flip {
            -pos - dw
        } else {
            pos
        }
    }

    /// Snap a dragged detail track's left offset into `[-dw, 0]`.
    #[must_use]
    pub fn snap_detail(&self, left: f64) -> f64 {
        left.clamp(-(self.detail_draggable_width as f64), 0.0)
    }

    /// Pan fraction for a detail track dragged to `left`. `None` when the
    /// tracks cannot slide.
    #[must_use]
    pub fn fraction_from_detail(&self, left: f64) -> Option<f64> {
        if self.detail_draggable_width <= 0 {
            return None;
        }
        let ratio = self.snap_detail(left) / self.detail_draggable_width as f64;
        Some(if self.flip { 1.0 + ratio } else { -ratio })
    }

    /// First coordinate visible at pan fraction `x`.
    #[must_use]
    pub fn visible_start(&self, x: f64) -> i64 {
        let len = self.length() as f64;
        (self.detail_start as f64 + len * (self.mult - 1.0) / self.mult * x)
            .round() as i64
    }

    /// Last coordinate visible at pan fraction `x`.
    #[must_use]
    pub fn visible_stop(&self, x: f64) -> i64 {
        self.visible_start(x) + (self.length() as f64 / self.mult).round() as i64
    }

    /// All panel offsets for pan fraction `x`, clamped to `[0, 1]`.
    #[must_use]
    pub fn frame(&self, x: f64) -> PanFrame {
        let x = x.clamp(0.0, 1.0);
        PanFrame {
            x,
            detail_left: self.detail_offset(x),
            overview_left: self.overview.marker_left(x),
            region_left: self.region.marker_left(x),
            visible_start: self.visible_start(x),
            visible_stop: self.visible_stop(x),
        }
    }

    /// Pan fraction that puts `start` at the left edge of the viewport.
    #[must_use]
    pub fn position_from_start(&self, start: i64) -> f64 {
        let scrollable = self.viewable_length as f64 * (self.mult - 1.0);
        if scrollable <= 0.0 {
            return 0.0;
        }
        (start - self.detail_start) as f64 / scrollable
    }
}

fn positive(ratio: f64) -> f64 {
    if ratio.is_finite() && ratio > 0.0 {
        ratio
    } else {
        f64::INFINITY
    }
}

fn marker_track(start: f64, width: f64, mult: f64) -> MarkerTrack {
    let start = if start.is_finite() { start } else { 0.0 };
    let width = if width.is_finite() { width.ceil() } else { 0.0 };
    MarkerTrack {
        segment_start: start.round() as i64,
        segment_width: width as i64,
        draggable_width: (width - width / mult).ceil() as i64,
    }
}
