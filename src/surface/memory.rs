use rustc_hash::FxHashMap;
use serde::Serialize;

use super::{MarkerPanel, Rect, StyleHandle, StyleProperty, TrackRegistry};

/// A page element kept in memory: a bounding box plus the styles written
/// to it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MemoryHandle {
    bounds: Option<Rect>,
    styles: FxHashMap<StyleProperty, String>,
}

impl MemoryHandle {
    /// An element laid out at `bounds`.
    #[must_use]
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds: Some(bounds),
            styles: FxHashMap::default(),
        }
    }

    /// Last value written to `property`.
    #[must_use]
    pub fn style(&self, property: StyleProperty) -> Option<&str> {
        self.styles.get(&property).map(String::as_str)
    }

    /// Last pixel value written to `property`.
    #[must_use]
    pub fn px(&self, property: StyleProperty) -> Option<i64> {
        self.style(property)?.strip_suffix("px")?.parse().ok()
    }
}

impl StyleHandle for MemoryHandle {
    fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    fn set_style(&mut self, property: StyleProperty, value: &str) {
        let _ = self.styles.insert(property, value.to_owned());
    }
}

/// An in-memory page: detail tracks, optional markers and the two text
/// fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MemoryRegistry {
    /// Detail tracks by track id, in page order.
    pub detail_tracks: Vec<(String, MemoryHandle)>,
    /// Overview position marker, when the overview panel is rendered.
    pub overview_marker: Option<MemoryHandle>,
    /// Region position marker, when the region panel is rendered.
    pub region_marker: Option<MemoryHandle>,
    /// Contents of the coordinate input field.
    pub landmark: String,
    /// Page title.
    pub title: String,
}

impl MemoryRegistry {
    /// A page with both markers and the given detail tracks.
    #[must_use]
    pub fn with_tracks<I, S>(track_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            detail_tracks: track_ids
                .into_iter()
                .map(|id| (id.into(), MemoryHandle::default()))
                .collect(),
            overview_marker: Some(MemoryHandle::default()),
            region_marker: Some(MemoryHandle::default()),
            ..Self::default()
        }
    }

    /// Drop the region marker, as on pages with a single zoom region.
    #[must_use]
    pub fn without_region(mut self) -> Self {
        self.region_marker = None;
        self
    }

    /// Add a freshly loaded detail track.
    pub fn push_track(&mut self, id: impl Into<String>) {
        self.detail_tracks.push((id.into(), MemoryHandle::default()));
    }

    /// The track with `id`.
    #[must_use]
    pub fn track(&self, id: &str) -> Option<&MemoryHandle> {
        self.detail_tracks
            .iter()
            .find(|(track_id, _)| track_id == id)
            .map(|(_, handle)| handle)
    }

    /// Marker handle for `panel`, read-only.
    #[must_use]
    pub fn marker_ref(&self, panel: MarkerPanel) -> Option<&MemoryHandle> {
        match panel {
            MarkerPanel::Overview => self.overview_marker.as_ref(),
            MarkerPanel::Region => self.region_marker.as_ref(),
        }
    }
}

impl TrackRegistry for MemoryRegistry {
    fn for_each_detail_track(&mut self, f: &mut dyn FnMut(&mut dyn StyleHandle)) {
        for (_, handle) in &mut self.detail_tracks {
            f(handle);
        }
    }

    fn marker(&mut self, panel: MarkerPanel) -> Option<&mut dyn StyleHandle> {
        let slot = match panel {
            MarkerPanel::Overview => &mut self.overview_marker,
            MarkerPanel::Region => &mut self.region_marker,
        };
        slot.as_mut().map(|handle| {
            let handle: &mut dyn StyleHandle = handle;
            handle
        })
    }

    fn set_landmark(&mut self, landmark: &str) {
        landmark.clone_into(&mut self.landmark);
    }

    fn set_page_title(&mut self, title: &str) {
        title.clone_into(&mut self.title);
    }
}
