use serde::{Deserialize, Deserializer, Serialize};

use super::Segment;
use crate::error::TrackPanError;

/// Segment metadata delivered by the server with every page render and
/// every partial update.
///
/// The server has historically emitted numbers as strings (`"0.5"`) and
/// flags as `0`/`1`; every numeric field accepts either form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentInfo {
    /// Reference sequence name.
    #[serde(rename = "ref")]
    pub ref_name: String,
    /// Data source description, used as the page title prefix.
    pub description: String,
    /// Human-readable length of the loaded segment (e.g. `"20 kbp"`).
    pub length_label: String,
    /// First coordinate loaded in the detail panel.
    #[serde(deserialize_with = "lenient::int")]
    pub detail_start: i64,
    /// Last coordinate loaded in the detail panel.
    #[serde(deserialize_with = "lenient::int")]
    pub detail_stop: i64,
    /// First coordinate of the overview panel (usually 1).
    #[serde(deserialize_with = "lenient::int")]
    pub overview_start: i64,
    /// Last coordinate of the overview panel (reference length).
    #[serde(deserialize_with = "lenient::int")]
    pub overview_stop: i64,
    /// First coordinate of the region panel.
    #[serde(deserialize_with = "lenient::int")]
    pub region_start: i64,
    /// Last coordinate of the region panel.
    #[serde(deserialize_with = "lenient::int")]
    pub region_stop: i64,
    /// Left/right image padding in pixels.
    #[serde(deserialize_with = "lenient::int")]
    pub image_padding: i64,
    /// Genomic units per pixel in the detail panel.
    #[serde(deserialize_with = "lenient::float")]
    pub details_pixel_ratio: f64,
    /// Genomic units per pixel in the overview panel.
    #[serde(deserialize_with = "lenient::float")]
    pub overview_pixel_ratio: f64,
    /// Genomic units per pixel in the region panel.
    #[serde(deserialize_with = "lenient::float")]
    pub region_pixel_ratio: f64,
    /// Rendered detail image width in pixels (including the over-zoom).
    #[serde(deserialize_with = "lenient::int")]
    pub detail_width: i64,
    /// Rendered overview image width in pixels (the viewport width).
    #[serde(deserialize_with = "lenient::int")]
    pub overview_width: i64,
    /// Rendered region image width in pixels.
    #[serde(deserialize_with = "lenient::int")]
    pub region_width: i64,
    /// Zoom multiplier `detail_width / viewport_width`.
    #[serde(deserialize_with = "lenient::float")]
    pub details_mult: f64,
    /// Reverse-strand display.
    #[serde(deserialize_with = "lenient::flag")]
    pub flip: bool,
    /// Position marker fill color.
    pub hilite_fill: String,
    /// Position marker outline color.
    pub hilite_outline: String,
    /// Largest segment the server will render; bigger selections are
    /// flagged and not auto-submitted.
    #[serde(deserialize_with = "lenient::int")]
    pub max_segment: i64,
    /// Requested initial view start, negative when unset.
    #[serde(deserialize_with = "lenient::int")]
    pub initial_view_start: i64,
    /// Requested initial view stop, negative when unset.
    #[serde(deserialize_with = "lenient::int")]
    pub initial_view_stop: i64,
}

impl Default for SegmentInfo {
    fn default() -> Self {
        Self {
            ref_name: String::new(),
            description: String::new(),
            length_label: String::new(),
            detail_start: 0,
            detail_stop: 0,
            overview_start: 0,
            overview_stop: 0,
            region_start: 0,
            region_stop: 0,
            image_padding: 0,
            details_pixel_ratio: 1.0,
            overview_pixel_ratio: 1.0,
            region_pixel_ratio: 1.0,
            detail_width: 0,
            overview_width: 0,
            region_width: 0,
            details_mult: 1.0,
            flip: false,
            hilite_fill: "#BABABA".to_owned(),
            hilite_outline: "#404040".to_owned(),
            max_segment: i64::MAX,
            initial_view_start: -1,
            initial_view_stop: -1,
        }
    }
}

impl SegmentInfo {
    /// Decode the JSON object the server attaches to a page update.
    pub fn from_json(text: &str) -> Result<Self, TrackPanError> {
        serde_json::from_str(text).map_err(TrackPanError::from)
    }

    /// The loaded detail segment.
    #[must_use]
    pub fn detail_segment(&self) -> Segment {
        Segment::new(&self.ref_name, self.detail_start, self.detail_stop)
            .flipped(self.flip)
    }

    /// The overview segment (whole reference).
    #[must_use]
    pub fn overview_segment(&self) -> Segment {
        Segment::new(&self.ref_name, self.overview_start, self.overview_stop)
            .flipped(self.flip)
    }

    /// The region segment. The region panel is never flipped.
    #[must_use]
    pub fn region_segment(&self) -> Segment {
        Segment::new(&self.ref_name, self.region_start, self.region_stop)
    }
}

/// Deserializers accepting JSON numbers, numeric strings and flag-ish
/// values.
mod lenient {
    use serde::de::Error;

    use super::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Bool(bool),
        Num(f64),
        Str(String),
    }

    fn number<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
        match Raw::deserialize(d)? {
            Raw::Num(n) => Ok(n),
            Raw::Bool(b) => Ok(if b { 1.0 } else { 0.0 }),
            Raw::Str(s) => {
                let cleaned: String =
                    s.trim().chars().filter(|c| *c != ',').collect();
                cleaned.parse::<f64>().map_err(|_| {
                    D::Error::custom(format!("expected a number, got '{s}'"))
                })
            }
        }
    }

    pub(super) fn int<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<i64, D::Error> {
        number(d).map(|n| n.trunc() as i64)
    }

    pub(super) fn float<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<f64, D::Error> {
        number(d)
    }

    pub(super) fn flag<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<bool, D::Error> {
        Ok(match Raw::deserialize(d)? {
            Raw::Bool(b) => b,
            Raw::Num(n) => n != 0.0,
            Raw::Str(s) => !matches!(s.trim(), "" | "0" | "false"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_string_encoded_numbers() {
        let info = SegmentInfo::from_json(
            r#"{
                "ref": "chr3",
                "detail_start": "10000",
                "detail_stop": 30000,
                "details_pixel_ratio": "25.5",
                "details_mult": "3",
                "flip": "1",
                "max_segment": "5,000,000"
            }"#,
        )
        .unwrap();
        assert_eq!(info.ref_name, "chr3");
        assert_eq!(info.detail_start, 10000);
        assert_eq!(info.detail_stop, 30000);
        assert_eq!(info.details_pixel_ratio, 25.5);
        assert_eq!(info.details_mult, 3.0);
        assert!(info.flip);
        assert_eq!(info.max_segment, 5_000_000);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let info = SegmentInfo::from_json(r#"{"ref": "chrM"}"#).unwrap();
        assert_eq!(info.initial_view_start, -1);
        assert_eq!(info.details_mult, 1.0);
        assert!(!info.flip);
    }

    #[test]
    fn flag_forms() {
        for (raw, expected) in
            [("0", false), ("\"\"", false), ("true", true), ("\"yes\"", true)]
        {
            let json = format!(r#"{{"flip": {raw}}}"#);
            let info = SegmentInfo::from_json(&json).unwrap();
            assert_eq!(info.flip, expected, "flip: {raw}");
        }
    }

    #[test]
    fn rejects_non_numeric_strings() {
        let err = SegmentInfo::from_json(r#"{"detail_start": "abc"}"#);
        assert!(matches!(err, Err(TrackPanError::SegmentInfo(_))));
    }

    #[test]
    fn region_segment_is_never_flipped() {
        let info = SegmentInfo {
            ref_name: "chr1".to_owned(),
            region_start: 1,
            region_stop: 100_000,
            flip: true,
            ..SegmentInfo::default()
        };
        assert!(!info.region_segment().flip);
        assert!(info.detail_segment().flip);
    }
}
