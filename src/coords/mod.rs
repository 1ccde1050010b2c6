//! Pixel ↔ genomic coordinate conversion for a single panel.
//!
//! Everything here is stateless. A panel's [`ViewGeometry`] is computed
//! once per render cycle; conversions then map a page-space pixel to a
//! genomic coordinate (and back) using the panel's [`Segment`].

use serde::{Deserialize, Serialize};

use crate::error::TrackPanError;
use crate::segment::Segment;

/// Per-panel constants derived from the segment and the rendered image.
///
/// Construct through [`ViewGeometry::new`], which rejects ratios that
/// would make every conversion meaningless.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewGeometry {
    pixel_to_unit: f64,
    pad_left: f64,
    width: f64,
    left: f64,
}

impl ViewGeometry {
    /// Validate and build a panel geometry.
    ///
    /// `panel` only labels the error.
    pub fn new(
        panel: &str,
        pixel_to_unit: f64,
        pad_left: f64,
        width: f64,
        left: f64,
    ) -> Result<Self, TrackPanError> {
        if !pixel_to_unit.is_finite() || pixel_to_unit <= 0.0 {
            return Err(TrackPanError::InvalidGeometry {
                panel: panel.to_owned(),
                ratio: pixel_to_unit,
            });
        }
        Ok(Self {
            pixel_to_unit,
            pad_left,
            width,
            left,
        })
    }

    /// Genomic units per pixel (always > 0).
    #[must_use]
    pub fn pixel_to_unit(&self) -> f64 {
        self.pixel_to_unit
    }

    /// Left padding in pixels.
    #[must_use]
    pub fn pad_left(&self) -> f64 {
        self.pad_left
    }

    /// Total panel width in pixels.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Page-space pixel of the panel's left edge.
    #[must_use]
    pub fn left(&self) -> f64 {
        self.left
    }

    /// Page-space pixel where the segment's first coordinate is drawn.
    #[must_use]
    pub fn pixel_start(&self) -> f64 {
        self.left + self.pad_left
    }

    /// Page-space pixel just past the panel's right edge.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// The same panel moved so its left edge sits at `left`.
    #[must_use]
    pub fn at_left(self, left: f64) -> Self {
        Self { left, ..self }
    }

    /// Clamp a page-space pixel into the panel.
    #[must_use]
    pub fn clamp_pixel(&self, pixel: f64) -> f64 {
        pixel.clamp(self.left, self.right().max(self.left))
    }
}

/// Genomic coordinate under `pixel`. Not clamped.
#[must_use]
pub fn pixel_to_coordinate(
    pixel: f64,
    geometry: &ViewGeometry,
    segment: &Segment,
) -> f64 {
    let delta = (pixel - geometry.pixel_start()) * geometry.pixel_to_unit;
    if segment.flip {
        segment.end as f64 - delta
    } else {
        segment.start as f64 + delta
    }
}

/// Page-space pixel where `coordinate` is drawn. Inverse of
/// [`pixel_to_coordinate`].
#[must_use]
pub fn coordinate_to_pixel(
    coordinate: f64,
    geometry: &ViewGeometry,
    segment: &Segment,
) -> f64 {
    let delta = if segment.flip {
        segment.end as f64 - coordinate
    } else {
        coordinate - segment.start as f64
    };
    geometry.pixel_start() + delta / geometry.pixel_to_unit
}

/// Rounding step for a selection on a segment of `length` units, or `None`
/// when selections are reported unrounded.
#[must_use]
pub fn rounding_step(length: i64) -> Option<i64> {
    match length.abs() {
        l if l > 1_000_000 => Some(10_000),
        l if l > 50_000 => Some(1000),
        l if l > 5000 => Some(100),
        l if l > 500 => Some(10),
        _ => None,
    }
}

/// Round `coordinate` to the granularity chosen by [`rounding_step`],
/// half away from zero.
///
/// Start and end are rounded independently, so a narrow drag may
/// collapse to a zero-width interval.
#[must_use]
pub fn round_to_granularity(coordinate: f64, segment_length: i64) -> i64 {
    match rounding_step(segment_length) {
        Some(step) => {
            let step = step as f64;
            ((coordinate / step).round() * step) as i64
        }
        None => coordinate.round() as i64,
    }
}
