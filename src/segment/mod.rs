//! Genomic segments, normalized intervals and landmark strings.
//!
//! A landmark is the textual form of a segment used by the page's
//! coordinate field and by navigation requests: `chr1:10000..20000`.
//! The display form adds thousands separators (`chr1:10,000..20,000`);
//! [`Segment::parse_landmark`] accepts either.

/// Server-supplied per-render segment metadata.
pub mod info;

use std::fmt;

pub use info::SegmentInfo;
use serde::{Deserialize, Serialize};

use crate::error::TrackPanError;

/// The genomic interval currently rendered in a panel.
///
/// `start` may exceed `end` only transiently while a drag is in progress;
/// anything surfaced externally goes through [`Interval`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Reference sequence name (chromosome, contig).
    pub ref_name: String,
    /// First displayed coordinate (1-based, inclusive).
    pub start: i64,
    /// Last displayed coordinate (1-based, inclusive).
    pub end: i64,
    /// Reverse-strand display: pixel-left is the higher coordinate.
    pub flip: bool,
}

impl Segment {
    /// Create a forward-strand segment.
    #[must_use]
    pub fn new(ref_name: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            ref_name: ref_name.into(),
            start,
            end,
            flip: false,
        }
    }

    /// Same segment, displayed reverse-complemented.
    #[must_use]
    pub fn flipped(mut self, flip: bool) -> Self {
        self.flip = flip;
        self
    }

    /// Span in genomic units (`end - start`).
    #[must_use]
    pub fn length(&self) -> i64 {
        self.end - self.start
    }

    /// Parse `ref:start..end`, tolerating thousands separators.
    pub fn parse_landmark(text: &str) -> Result<Self, TrackPanError> {
        let malformed = || TrackPanError::LandmarkParse(text.to_owned());
        let (ref_name, range) =
            text.trim().rsplit_once(':').ok_or_else(malformed)?;
        let (start, end) = range.split_once("..").ok_or_else(malformed)?;
        if ref_name.is_empty() {
            return Err(malformed());
        }
        let start = parse_coordinate(start).ok_or_else(malformed)?;
        let end = parse_coordinate(end).ok_or_else(malformed)?;
        Ok(Self::new(ref_name, start, end))
    }

    /// Landmark without separators, as submitted to the server.
    #[must_use]
    pub fn landmark(&self) -> String {
        landmark(&self.ref_name, self.start, self.end)
    }

    /// Landmark with thousands separators, as shown to the user.
    #[must_use]
    pub fn display_landmark(&self) -> String {
        format!(
            "{}:{}..{}",
            self.ref_name,
            add_commas(self.start),
            add_commas(self.end)
        )
    }

    /// Landmark for `interval` on this segment's reference.
    #[must_use]
    pub fn landmark_for(&self, interval: Interval) -> String {
        landmark(&self.ref_name, interval.start, interval.end)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.landmark())
    }
}

/// A normalized genomic interval: `start <= end` always holds.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default,
)]
pub struct Interval {
    /// Lower bound.
    pub start: i64,
    /// Upper bound.
    pub end: i64,
}

impl Interval {
    /// Build an interval from two endpoints in either order.
    #[must_use]
    pub fn new(a: i64, b: i64) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// `end - start`.
    #[must_use]
    pub fn width(&self) -> i64 {
        self.end - self.start
    }

    /// Midpoint, rounded half up.
    #[must_use]
    pub fn midpoint(&self) -> i64 {
        (self.start + self.end + 1).div_euclid(2)
    }

    /// An interval of the given span centered on `middle`.
    ///
    /// The half-span is rounded, so odd spans grow by one.
    #[must_use]
    pub fn centered(middle: i64, span: i64) -> Self {
        let half = (span + 1).div_euclid(2);
        Self::new(middle - half, middle + half)
    }
}

fn landmark(ref_name: &str, start: i64, end: i64) -> String {
    format!("{ref_name}:{start}..{end}")
}

fn parse_coordinate(text: &str) -> Option<i64> {
    let digits: String =
        text.trim().chars().filter(|c| *c != ',' && *c != '_').collect();
    digits.parse().ok()
}

/// Format an integer with `,` thousands separators.
#[must_use]
pub fn add_commas(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
