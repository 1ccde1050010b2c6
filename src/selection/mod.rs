//! Transient state of one drag-selection gesture.

use serde::Serialize;

use crate::coords::{self, ViewGeometry};
use crate::segment::{Interval, Segment};

/// Default movement, in pixels, a drag must exceed before it counts as a
/// selection rather than a click.
pub const DEFAULT_DRAG_THRESHOLD_PX: f64 = 1.0;

/// Pixel and coordinate state of a single selection gesture.
///
/// Created on mouse-down over a scale bar, updated on every mouse-move and
/// finished (or cancelled) on mouse-up. Coordinates are kept normalized so
/// that `coord_start <= coord_end` after every update.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionState {
    pixel_start: f64,
    pixel_end: f64,
    coord_start: i64,
    coord_end: i64,
    active: bool,
    moved: bool,
    threshold_px: f64,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionState {
    /// Create an empty, inactive selection.
    #[must_use]
    pub fn new() -> Self {
        Self::with_threshold(DEFAULT_DRAG_THRESHOLD_PX)
    }

    /// Create an empty selection with a custom drag threshold.
    #[must_use]
    pub fn with_threshold(threshold_px: f64) -> Self {
        Self {
            pixel_start: 0.0,
            pixel_end: 0.0,
            coord_start: 0,
            coord_end: 0,
            active: false,
            moved: false,
            threshold_px,
        }
    }

    /// Start a gesture at `pixel`.
    pub fn begin(&mut self, pixel: f64) {
        self.pixel_start = pixel;
        self.pixel_end = pixel;
        self.coord_start = 0;
        self.coord_end = 0;
        self.active = true;
        self.moved = false;
    }

    /// Move the free end of the gesture to `pixel` and recompute the
    /// selected coordinates.
    ///
    /// Ignored when no gesture is active.
    pub fn update(
        &mut self,
        pixel: f64,
        geometry: &ViewGeometry,
        segment: &Segment,
    ) {
        if !self.active {
            return;
        }
        self.pixel_end = pixel;

        let length = segment.length();
        let a = coords::pixel_to_coordinate(self.pixel_start, geometry, segment);
        let b = coords::pixel_to_coordinate(self.pixel_end, geometry, segment);
        let normalized = Interval::new(
            coords::round_to_granularity(a, length),
            coords::round_to_granularity(b, length),
        );
        self.coord_start = normalized.start;
        self.coord_end = normalized.end;

        if self.pixel_width() > self.threshold_px {
            self.moved = true;
        }
    }

    /// End the gesture. Returns the selected interval, or `None` when the
    /// pointer never moved past the drag threshold.
    pub fn finish(&mut self) -> Option<Interval> {
        self.active = false;
        self.moved.then(|| self.interval())
    }

    /// Discard the gesture without producing output.
    pub fn cancel(&mut self) {
        *self = Self::with_threshold(self.threshold_px);
    }

    /// Whether a gesture is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether the gesture has moved past the drag threshold.
    #[must_use]
    pub fn moved(&self) -> bool {
        self.moved
    }

    /// Pixel where the gesture started.
    #[must_use]
    pub fn pixel_start(&self) -> f64 {
        self.pixel_start
    }

    /// Pixel of the gesture's free end.
    #[must_use]
    pub fn pixel_end(&self) -> f64 {
        self.pixel_end
    }

    /// Distance between the two ends, in pixels.
    #[must_use]
    pub fn pixel_width(&self) -> f64 {
        (self.pixel_end - self.pixel_start).abs()
    }

    /// Left pixel and width of the drag band, whichever way the user
    /// dragged.
    #[must_use]
    pub fn band(&self) -> (f64, f64) {
        (self.pixel_start.min(self.pixel_end), self.pixel_width())
    }

    /// Current normalized interval.
    #[must_use]
    pub fn interval(&self) -> Interval {
        Interval {
            start: self.coord_start,
            end: self.coord_end,
        }
    }
}
