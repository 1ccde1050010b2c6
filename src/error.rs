//! Crate-level error types.

use std::fmt;

/// Errors produced by the trackpan crate.
///
/// Expected absences (a panel that was not rendered, a marker that does
/// not exist) are never errors; they surface as `Option`/`bool` returns.
#[derive(Debug)]
pub enum TrackPanError {
    /// A panel's pixel-per-unit ratio is zero, negative or not finite.
    InvalidGeometry {
        /// Element id of the offending panel's scale bar.
        panel: String,
        /// The rejected ratio.
        ratio: f64,
    },
    /// Server-supplied segment info could not be decoded.
    SegmentInfo(String),
    /// A landmark string was not of the form `ref:start..end`.
    LandmarkParse(String),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// A replay script could not be decoded.
    Script(String),
}

impl fmt::Display for TrackPanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGeometry { panel, ratio } => write!(
                f,
                "invalid geometry for panel '{panel}': pixel ratio {ratio}"
            ),
            Self::SegmentInfo(msg) => write!(f, "segment info error: {msg}"),
            Self::LandmarkParse(text) => {
                write!(f, "malformed landmark: '{text}'")
            }
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Script(msg) => write!(f, "replay script error: {msg}"),
        }
    }
}

impl std::error::Error for TrackPanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TrackPanError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for TrackPanError {
    fn from(e: serde_json::Error) -> Self {
        Self::SegmentInfo(e.to_string())
    }
}
