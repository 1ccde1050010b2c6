//! Requests handed to the page's update service, and the ticketing used
//! to discard stale responses.
//!
//! A [`NavigationRequest`] formats as the opaque action string the server
//! understands (`set segment chr1:100..200`, `left 0.15`). Responses arrive
//! asynchronously and in any order; stamp each request with an
//! [`UpdateKey`] from an [`UpdateSequencer`] and drop responses whose key
//! is no longer current.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::segment::Interval;

/// Horizontal scroll direction.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ScrollDirection {
    /// Toward lower pixel positions.
    Left,
    /// Toward higher pixel positions.
    Right,
}

impl fmt::Display for ScrollDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Left => "left",
            Self::Right => "right",
        })
    }
}

/// A request for the server to re-render the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NavigationRequest {
    /// Navigate to a new segment.
    SetSegment {
        /// Reference sequence name.
        ref_name: String,
        /// Target interval.
        interval: Interval,
    },
    /// Scroll the loaded segment by a fraction of the visible span.
    Scroll {
        /// Scroll direction.
        direction: ScrollDirection,
        /// Fraction of the visible span.
        fraction: f64,
    },
    /// Run a server-side plugin on a landmark (e.g. FASTA dump).
    Plugin {
        /// Plugin name.
        plugin: String,
        /// Plugin action.
        action: String,
        /// Landmark the plugin runs on.
        landmark: String,
    },
}

impl NavigationRequest {
    /// `set segment` request for `interval` on `ref_name`.
    #[must_use]
    pub fn set_segment(ref_name: impl Into<String>, interval: Interval) -> Self {
        Self::SetSegment {
            ref_name: ref_name.into(),
            interval,
        }
    }

    /// FASTA dump of `landmark`.
    #[must_use]
    pub fn dump_fasta(landmark: impl Into<String>) -> Self {
        Self::Plugin {
            plugin: "FastaDumper".to_owned(),
            action: "Go".to_owned(),
            landmark: landmark.into(),
        }
    }

    /// Landmark the page's coordinate field should hold while this request
    /// is in flight.
    #[must_use]
    pub fn landmark(&self) -> Option<String> {
        match self {
            Self::SetSegment { ref_name, interval } => Some(format!(
                "{ref_name}:{}..{}",
                interval.start, interval.end
            )),
            Self::Plugin { landmark, .. } => Some(landmark.clone()),
            Self::Scroll { .. } => None,
        }
    }
}

impl fmt::Display for NavigationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SetSegment { ref_name, interval } => write!(
                f,
                "set segment {ref_name}:{}..{}",
                interval.start, interval.end
            ),
            Self::Scroll {
                direction,
                fraction,
            } => write!(f, "{direction} {fraction}"),
            Self::Plugin {
                plugin,
                action,
                landmark,
            } => write!(f, "?plugin={plugin};plugin_action={action};name={landmark}"),
        }
    }
}

/// Identifies one issued update.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize,
)]
pub struct UpdateKey(u64);

/// Hands out monotonically increasing [`UpdateKey`]s.
///
/// Only the most recently issued key is current; callbacks for older
/// requests must not apply their results.
#[derive(Debug, Clone, Default)]
pub struct UpdateSequencer {
    latest: u64,
}

impl UpdateSequencer {
    /// Create a sequencer with nothing issued.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the key for a new request, superseding all earlier ones.
    pub fn issue(&mut self) -> UpdateKey {
        self.latest += 1;
        UpdateKey(self.latest)
    }

    /// Whether `key` belongs to the most recent request.
    #[must_use]
    pub fn is_current(&self, key: UpdateKey) -> bool {
        key.0 == self.latest
    }
}
