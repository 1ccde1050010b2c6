//! Synchronized panning of the overview, region and detail panels.

mod geometry;
mod panner;
mod ruler;

pub use geometry::{MarkerTrack, PanFrame, PanGeometry};
pub use panner::ViewportPanner;
pub use ruler::Ruler;

pub use crate::surface::MarkerPanel;
