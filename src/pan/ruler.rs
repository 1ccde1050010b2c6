//! The ruler readout: the coordinate under the ruler handle on the detail
//! panel.

use serde::Serialize;

use crate::segment::SegmentInfo;

/// Constants for converting a ruler slider position to a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Ruler {
    units_per_pixel: f64,
    pad_units: f64,
    flip: bool,
}

impl Ruler {
    /// Ruler for the detail panel described by `info`.
    #[must_use]
    pub fn from_info(info: &SegmentInfo) -> Self {
        Self {
            units_per_pixel: info.details_pixel_ratio,
            pad_units: info.image_padding as f64 * info.details_pixel_ratio,
            flip: info.flip,
        }
    }

    /// Coordinate under a handle `slider_px` pixels into the ruler track,
    /// with `visible_start..visible_stop` showing through the viewport.
    ///
    /// The ruler track spans the padding on both sides of the image.
    #[must_use]
    pub fn position(
        &self,
        visible_start: i64,
        visible_stop: i64,
        slider_px: f64,
    ) -> i64 {
        let offset = slider_px * self.units_per_pixel;
        let position = if self.flip {
            visible_stop as f64 + self.pad_units - offset
        } else {
            visible_start as f64 - self.pad_units + offset
        };
        position.round() as i64
    }
}
