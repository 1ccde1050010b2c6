//! Seams to the page: element handles, the track registry and the label
//! service.
//!
//! The interaction core never walks the DOM. It reads an element's bounding
//! box and writes a handful of positional style properties, nothing else.
//! [`memory`] provides in-process implementations for tests and replays;
//! the `web` feature provides `web-sys` ones.

/// In-memory handles and registry.
pub mod memory;

use serde::{Deserialize, Serialize};

pub use memory::{MemoryHandle, MemoryRegistry};

/// An axis-aligned bounding box in page pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub left: f64,
    /// Top edge.
    pub top: f64,
    /// Width (non-negative).
    pub width: f64,
    /// Height (non-negative).
    pub height: f64,
}

impl Rect {
    /// Build a rect from its left/top corner and size.
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Right edge.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// The only style properties the core ever writes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum StyleProperty {
    /// `left`
    Left,
    /// `top`
    Top,
    /// `width`
    Width,
    /// `height`
    Height,
    /// `display`
    Display,
}

impl StyleProperty {
    /// CSS property name.
    #[must_use]
    pub fn css_name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Top => "top",
            Self::Width => "width",
            Self::Height => "height",
            Self::Display => "display",
        }
    }
}

/// Which zoom tier a position marker lives on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MarkerPanel {
    /// Whole-chromosome overview.
    Overview,
    /// Intermediate region view.
    Region,
}

/// A positioned page element (track image, marker, band).
pub trait StyleHandle {
    /// Current bounding box, or `None` when the element is not laid out.
    fn bounds(&self) -> Option<Rect>;

    /// Write one style property.
    fn set_style(&mut self, property: StyleProperty, value: &str);

    /// Write a pixel-valued style property.
    fn set_px(&mut self, property: StyleProperty, px: i64) {
        self.set_style(property, &format!("{px}px"));
    }
}

/// Supplies the DOM handles of the loaded tracks and the page-level text
/// fields the panner keeps current.
pub trait TrackRegistry {
    /// Visit every loaded track in the detail section, scale track
    /// included.
    fn for_each_detail_track(&mut self, f: &mut dyn FnMut(&mut dyn StyleHandle));

    /// The position marker on `panel`, if that panel is rendered.
    fn marker(&mut self, panel: MarkerPanel) -> Option<&mut dyn StyleHandle>;

    /// Replace the contents of the coordinate input field.
    fn set_landmark(&mut self, landmark: &str);

    /// Replace the page title.
    fn set_page_title(&mut self, title: &str);
}

/// Looks up user-visible strings.
pub trait Translator {
    /// Translate `key`, substituting `args` into its placeholders.
    fn translate(&self, key: &str, args: &[&str]) -> String;
}
