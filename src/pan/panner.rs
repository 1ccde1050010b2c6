//! Keeps the overview, region and detail panels panned in lockstep.
//!
//! One pan fraction `x ∈ [0, 1]` describes where the viewport sits inside
//! an over-zoomed detail image. [`ViewportPanner::set_pan_position`] is the
//! only code that turns that fraction into element offsets; every drag and
//! scroll on any panel funnels back into it.

use super::geometry::{PanFrame, PanGeometry};
use super::ruler::Ruler;
use crate::navigation::{NavigationRequest, ScrollDirection};
use crate::options::{LabelOptions, Options, PanOptions};
use crate::segment::{add_commas, Segment, SegmentInfo};
use crate::surface::{MarkerPanel, StyleProperty, TrackRegistry, Translator};

/// Page-level text the panner keeps current.
#[derive(Debug, Clone, Default)]
struct TitleParts {
    ref_name: String,
    description: String,
    length_label: String,
}

/// The synchronized three-panel pan.
pub struct ViewportPanner<R: TrackRegistry> {
    registry: R,
    geometry: Option<PanGeometry>,
    ruler: Option<Ruler>,
    title: TitleParts,
    x: f64,
    detail_left: i64,
    options: PanOptions,
    labels: LabelOptions,
}

impl<R: TrackRegistry> ViewportPanner<R> {
    /// Create an unconfigured panner writing through `registry`.
    #[must_use]
    pub fn new(registry: R, options: &Options) -> Self {
        Self {
            registry,
            geometry: None,
            ruler: None,
            title: TitleParts::default(),
            x: 0.0,
            detail_left: 0,
            options: options.panning.clone(),
            labels: options.labels.clone(),
        }
    }

    /// The registry the panner writes through.
    #[must_use]
    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Mutable access to the registry, e.g. to add newly loaded tracks.
    pub fn registry_mut(&mut self) -> &mut R {
        &mut self.registry
    }

    /// Geometry of the current segment, once configured.
    #[must_use]
    pub fn geometry(&self) -> Option<&PanGeometry> {
        self.geometry.as_ref()
    }

    /// Current pan fraction.
    #[must_use]
    pub fn position(&self) -> f64 {
        self.x
    }

    /// Left offset last written to the detail tracks.
    #[must_use]
    pub fn detail_offset(&self) -> i64 {
        self.detail_left
    }

    /// Whether the detail view is over-zoomed and can be panned.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.geometry.as_ref().is_some_and(PanGeometry::is_pannable)
    }

    /// Adopt a new segment: size the markers and move everything to the
    /// initial view.
    pub fn configure(&mut self, info: &SegmentInfo) {
        let geometry = PanGeometry::from_info(info);
        self.title = TitleParts {
            ref_name: info.ref_name.clone(),
            description: info.description.clone(),
            length_label: info.length_label.clone(),
        };
        self.ruler = Some(Ruler::from_info(info));

        for panel in [MarkerPanel::Overview, MarkerPanel::Region] {
            let track = *geometry.marker(panel);
            if let Some(marker) = self.registry.marker(panel) {
                marker.set_px(StyleProperty::Left, track.segment_start);
                marker.set_px(StyleProperty::Width, track.marker_width(geometry.mult));
            }
        }

        let pannable = geometry.is_pannable();
        let start = if info.initial_view_start >= 0 {
            geometry.position_from_start(info.initial_view_start)
        } else {
            self.options.default_position
        };
        self.geometry = Some(geometry);

        if !pannable {
            log::debug!("detail view fits the viewport; panning disabled");
            self.x = 0.0;
            self.detail_left = 0;
            self.registry.for_each_detail_track(&mut |track| {
                track.set_px(StyleProperty::Left, 0);
            });
            return;
        }

        log::debug!("panning enabled, starting at {start:.3}");
        self.set_pan_position(start);
    }

    /// Move every panel to pan fraction `x`, clamped to `[0, 1]`.
    ///
    /// This is the only place element offsets are written. Does nothing
    /// while panning is disabled.
    pub fn set_pan_position(&mut self, x: f64) {
        let Some(geometry) = self.geometry.as_ref().filter(|g| g.is_pannable())
        else {
            return;
        };
        let frame = geometry.frame(if x.is_nan() { self.x } else { x });
        self.x = frame.x;
        self.detail_left = frame.detail_left;

        self.registry.for_each_detail_track(&mut |track| {
            track.set_px(StyleProperty::Left, frame.detail_left);
        });
        for (panel, left) in [
            (MarkerPanel::Overview, frame.overview_left),
            (MarkerPanel::Region, frame.region_left),
        ] {
            if let Some(marker) = self.registry.marker(panel) {
                marker.set_px(StyleProperty::Left, left);
            }
        }

        let (start, stop) = (frame.visible_start, frame.visible_stop);
        if start > 0 && stop > 0 {
            let TitleParts {
                ref_name,
                description,
                length_label,
            } = &self.title;
            self.registry.set_landmark(
                &Segment::new(ref_name.as_str(), start, stop).display_landmark(),
            );
            let (start, stop) = (add_commas(start), add_commas(stop));
            let showing = self.labels.translate(
                "SHOWING_FROM_TO",
                &[
                    length_label.as_str(),
                    ref_name.as_str(),
                    start.as_str(),
                    stop.as_str(),
                ],
            );
            self.registry
                .set_page_title(&format!("{description}: {showing}"));
        }
    }

    /// Scroll by `fraction` of the visible span.
    ///
    /// Refuses (returning `false`, changing nothing) when the visible window
    /// would overshoot the loaded segment by more than the configured edge
    /// tolerance.
    pub fn scroll(&mut self, direction: ScrollDirection, fraction: f64) -> bool {
        let Some(geometry) = self.geometry.as_ref().filter(|g| g.is_pannable())
        else {
            return false;
        };
        let viewable = geometry.viewable_length as f64;
        let slack = viewable * self.options.edge_tolerance;
        let step = fraction / (geometry.mult - 1.0);

        let target = match direction {
            ScrollDirection::Right => {
                let new_stop =
                    geometry.visible_stop(self.x) as f64 + fraction * viewable;
                if new_stop > geometry.detail_stop as f64 + slack {
                    return false;
                }
                self.x + step
            }
            ScrollDirection::Left => {
                let new_start =
                    geometry.visible_start(self.x) as f64 - fraction * viewable;
                if new_start < geometry.detail_start as f64 - slack {
                    return false;
                }
                self.x - step
            }
        };
        self.set_pan_position(target);
        true
    }

    /// Scroll locally if possible, otherwise produce the server request
    /// that loads the neighbouring segment.
    pub fn scroll_or_navigate(
        &mut self,
        direction: ScrollDirection,
        fraction: f64,
    ) -> Option<NavigationRequest> {
        if self.scroll(direction, fraction) {
            return None;
        }
        log::info!("scroll {direction} {fraction} leaves the loaded segment");
        Some(NavigationRequest::Scroll {
            direction,
            fraction,
        })
    }

    /// A position marker was dragged so its left edge sits at `left`.
    pub fn marker_dragged(&mut self, panel: MarkerPanel, left: f64) {
        let fraction = self
            .geometry
            .as_ref()
            .and_then(|g| g.marker(panel).fraction(left));
        if let Some(x) = fraction {
            self.set_pan_position(x);
        }
    }

    /// A detail track was dragged so its left edge sits at `left`.
    pub fn detail_dragged(&mut self, left: f64) {
        let fraction = self
            .geometry
            .as_ref()
            .and_then(|g| g.fraction_from_detail(left));
        if let Some(x) = fraction {
            self.set_pan_position(x);
        }
    }

    /// Bring newly loaded detail tracks to the current pan position.
    pub fn refresh_tracks(&mut self) {
        if self.is_enabled() {
            self.set_pan_position(self.x);
        }
    }

    /// Offsets for the current pan fraction.
    #[must_use]
    pub fn frame(&self) -> Option<PanFrame> {
        Some(self.geometry.as_ref()?.frame(self.x))
    }

    /// First coordinate visible through the viewport.
    #[must_use]
    pub fn visible_start(&self) -> Option<i64> {
        Some(self.geometry.as_ref()?.visible_start(self.x))
    }

    /// Last coordinate visible through the viewport.
    #[must_use]
    pub fn visible_stop(&self) -> Option<i64> {
        Some(self.geometry.as_ref()?.visible_stop(self.x))
    }

    /// Pan fraction that puts `start` at the left edge of the viewport.
    #[must_use]
    pub fn position_from_start(&self, start: i64) -> Option<f64> {
        Some(self.geometry.as_ref()?.position_from_start(start))
    }

    /// Coordinate under the ruler handle at `slider_px`.
    #[must_use]
    pub fn ruler_position(&self, slider_px: f64) -> Option<i64> {
        let geometry = self.geometry.as_ref()?;
        Some(self.ruler?.position(
            geometry.visible_start(self.x),
            geometry.visible_stop(self.x),
            slider_px,
        ))
    }
}
