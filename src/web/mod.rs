//! Browser bindings: `web-sys` implementations of the page seams and a
//! `wasm-bindgen` session wrapper.
//!
//! Positions are client pixels (`getBoundingClientRect`, `MouseEvent.clientX`).
//! Events go in and effects come out as JSON so the page script stays in
//! charge of the DOM beyond the handful of style writes the panner makes.

use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, HtmlInputElement};

use crate::drag::{PanelKind, PanelProfile};
use crate::error::TrackPanError;
use crate::input::InputEvent;
use crate::options::Options;
use crate::session::BrowserSession;
use crate::surface::{MarkerPanel, Rect, StyleHandle, StyleProperty, TrackRegistry};

/// Install the console logger and panic hook. Safe to call repeatedly.
pub fn init_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
}

fn document() -> Option<Document> {
    web_sys::window()?.document()
}

fn element(id: &str) -> Option<HtmlElement> {
    document()?.get_element_by_id(id)?.dyn_into().ok()
}

fn js_error(e: &TrackPanError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// A laid-out page element.
pub struct DomHandle(HtmlElement);

impl DomHandle {
    /// Look up the element with `id`.
    #[must_use]
    pub fn by_id(id: &str) -> Option<Self> {
        element(id).map(Self)
    }
}

impl StyleHandle for DomHandle {
    fn bounds(&self) -> Option<Rect> {
        let r = self.0.get_bounding_client_rect();
        Some(Rect::new(r.left(), r.top(), r.width(), r.height()))
    }

    fn set_style(&mut self, property: StyleProperty, value: &str) {
        if let Err(e) = self.0.style().set_property(property.css_name(), value) {
            log::warn!("failed to set {}: {e:?}", property.css_name());
        }
    }
}

/// Element ids the DOM registry resolves.
#[derive(Debug, Clone)]
pub struct DomIds {
    /// Id of the coordinate input field.
    pub landmark_field: String,
    /// Id of the element showing the page title.
    pub page_title: String,
    /// Id of the overview marker.
    pub overview_marker: String,
    /// Id of the region marker.
    pub region_marker: String,
}

impl Default for DomIds {
    fn default() -> Self {
        Self {
            landmark_field: "landmark_search_field".to_owned(),
            page_title: "page_title".to_owned(),
            overview_marker: "overview_marker".to_owned(),
            region_marker: "region_marker".to_owned(),
        }
    }
}

/// Resolves track images and markers by element id on every access, so
/// elements replaced by a page update are picked up.
pub struct DomTrackRegistry {
    ids: DomIds,
    detail_tracks: Vec<String>,
    marker: Option<DomHandle>,
}

impl DomTrackRegistry {
    /// A registry with no detail tracks yet.
    #[must_use]
    pub fn new(ids: DomIds) -> Self {
        Self {
            ids,
            detail_tracks: Vec::new(),
            marker: None,
        }
    }

    /// Register the image element of a loaded detail track.
    pub fn add_track(&mut self, element_id: impl Into<String>) {
        let id = element_id.into();
        if !self.detail_tracks.contains(&id) {
            self.detail_tracks.push(id);
        }
    }
}

impl TrackRegistry for DomTrackRegistry {
    fn for_each_detail_track(&mut self, f: &mut dyn FnMut(&mut dyn StyleHandle)) {
        for id in &self.detail_tracks {
            if let Some(mut handle) = DomHandle::by_id(id) {
                f(&mut handle);
            }
        }
    }

    fn marker(&mut self, panel: MarkerPanel) -> Option<&mut dyn StyleHandle> {
        let id = match panel {
            MarkerPanel::Overview => &self.ids.overview_marker,
            MarkerPanel::Region => &self.ids.region_marker,
        };
        self.marker = DomHandle::by_id(id);
        self.marker.as_mut().map(|handle| {
            let handle: &mut dyn StyleHandle = handle;
            handle
        })
    }

    fn set_landmark(&mut self, landmark: &str) {
        let field = document()
            .and_then(|d| d.get_element_by_id(&self.ids.landmark_field))
            .and_then(|e| e.dyn_into::<HtmlInputElement>().ok());
        if let Some(field) = field {
            field.set_value(landmark);
        }
    }

    fn set_page_title(&mut self, title: &str) {
        if let Some(document) = document() {
            document.set_title(title);
        }
        if let Some(heading) = element(&self.ids.page_title) {
            heading.set_text_content(Some(title));
        }
    }
}

/// A page session driven from JavaScript.
#[wasm_bindgen]
pub struct WebSession {
    inner: BrowserSession<DomTrackRegistry>,
}

#[wasm_bindgen]
impl WebSession {
    /// Start a session, optionally from a TOML options preset.
    #[wasm_bindgen(constructor)]
    pub fn new(options_toml: Option<String>) -> Result<WebSession, JsValue> {
        init_logging();
        let options = match options_toml {
            Some(text) => Options::from_toml(&text).map_err(|e| js_error(&e))?,
            None => Options::default(),
        };
        let registry = DomTrackRegistry::new(DomIds::default());
        Ok(Self {
            inner: BrowserSession::new(options, registry),
        })
    }

    /// Adopt the segment info JSON of a new render and re-attach every
    /// panel's scale bar.
    pub fn load_segment(&mut self, json: &str) -> Result<(), JsValue> {
        self.inner.load_segment_json(json).map_err(|e| js_error(&e))?;
        for kind in PanelKind::ALL {
            let bounds = DomHandle::by_id(&PanelProfile::for_kind(kind).image_id)
                .and_then(|handle| handle.bounds());
            let _ = self.inner.attach_panel(kind, bounds);
        }
        if let Some(window) = web_sys::window() {
            let width = window.inner_width().ok().and_then(|v| v.as_f64());
            let height = window.inner_height().ok().and_then(|v| v.as_f64());
            if let (Some(width), Some(height)) = (width, height) {
                self.inner.set_viewport(Rect::new(0.0, 0.0, width, height));
            }
        }
        Ok(())
    }

    /// Register a loaded detail track's image element.
    pub fn add_track(&mut self, element_id: &str) {
        self.inner.panner_mut().registry_mut().add_track(element_id);
    }

    /// Feed one JSON-encoded input event; returns the JSON-encoded effects.
    pub fn handle_event(&mut self, event_json: &str) -> Result<String, JsValue> {
        let event: InputEvent = serde_json::from_str(event_json)
            .map_err(|e| js_error(&TrackPanError::Script(e.to_string())))?;
        let effects = self.inner.handle_event(event);
        serde_json::to_string(&effects)
            .map_err(|e| js_error(&TrackPanError::Script(e.to_string())))
    }

    /// Coordinate under the ruler handle at `slider_px`.
    #[must_use]
    pub fn ruler_position(&self, slider_px: f64) -> Option<f64> {
        self.inner
            .panner()
            .ruler_position(slider_px)
            .map(|p| p as f64)
    }
}
