//! One page load's worth of interaction state.
//!
//! A [`BrowserSession`] owns the single [`DragController`] and
//! [`ViewportPanner`] for the page, plus the sequencer that tells fresh
//! server responses from stale ones. Consumers forward raw page events as
//! [`InputEvent`]s and apply the returned [`Effect`]s.

use crate::drag::{DragController, DragEvent, DragPhase, Effect, PanelKind, PanelProfile};
use crate::error::TrackPanError;
use crate::input::{InputEvent, KeyAction};
use crate::navigation::{NavigationRequest, ScrollDirection, UpdateKey, UpdateSequencer};
use crate::options::Options;
use crate::pan::ViewportPanner;
use crate::segment::{Interval, Segment, SegmentInfo};
use crate::surface::{Rect, TrackRegistry};

/// Key that cancels a gesture whatever the bindings say.
const ESCAPE: &str = "Escape";

/// Interaction state for one page load.
pub struct BrowserSession<R: TrackRegistry> {
    options: Options,
    drag: DragController,
    panner: ViewportPanner<R>,
    updates: UpdateSequencer,
    segment: Option<SegmentInfo>,
}

impl<R: TrackRegistry> BrowserSession<R> {
    /// Start a session writing through `registry`.
    #[must_use]
    pub fn new(options: Options, registry: R) -> Self {
        let drag = DragController::new(&options);
        let panner = ViewportPanner::new(registry, &options);
        Self {
            options,
            drag,
            panner,
            updates: UpdateSequencer::new(),
            segment: None,
        }
    }

    /// Options the session was started with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The selection state machine.
    #[must_use]
    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    /// The panner.
    #[must_use]
    pub fn panner(&self) -> &ViewportPanner<R> {
        &self.panner
    }

    /// Mutable access to the panner, e.g. to register new tracks.
    pub fn panner_mut(&mut self) -> &mut ViewportPanner<R> {
        &mut self.panner
    }

    /// Segment metadata of the current render, once loaded.
    #[must_use]
    pub fn segment(&self) -> Option<&SegmentInfo> {
        self.segment.as_ref()
    }

    /// Adopt the metadata of a new render.
    pub fn load_segment(&mut self, info: SegmentInfo) {
        log::info!(
            "loaded {}:{}..{} (x{:.2})",
            info.ref_name,
            info.detail_start,
            info.detail_stop,
            info.details_mult
        );
        self.drag.load_segment_info(&info);
        self.panner.configure(&info);
        self.sync_detail_offset();
        self.segment = Some(info);
    }

    /// Decode and adopt the JSON metadata of a new render.
    pub fn load_segment_json(&mut self, json: &str) -> Result<(), TrackPanError> {
        self.load_segment(SegmentInfo::from_json(json)?);
        Ok(())
    }

    /// Register `kind`'s scale bar at `bounds` (`None` when the panel is
    /// not rendered), measured at the current pan position. Returns whether
    /// the panel accepts selections.
    pub fn attach_panel(&mut self, kind: PanelKind, bounds: Option<Rect>) -> bool {
        self.sync_detail_offset();
        self.drag.attach(PanelProfile::for_kind(kind), bounds)
    }

    /// Set the visible page area menus must stay inside.
    pub fn set_viewport(&mut self, viewport: Rect) {
        self.drag.set_viewport(viewport);
    }

    /// Process a platform-agnostic input event.
    ///
    /// Pointer events and menu clicks go to the drag controller, marker
    /// and track drags to the panner. Bound keys pan the detail view or
    /// cancel the gesture in progress; Escape always cancels.
    pub fn handle_event(&mut self, event: InputEvent) -> Vec<Effect> {
        // Pans made through `panner_mut` since the last event.
        self.sync_detail_offset();
        let effects = self.route(event);
        self.sync_detail_offset();
        effects
    }

    fn route(&mut self, event: InputEvent) -> Vec<Effect> {
        match event {
            InputEvent::MouseDown { panel, x, y } => match panel {
                Some(panel) => self.drag.handle(DragEvent::MouseDown { panel, x, y }),
                None => Vec::new(),
            },
            InputEvent::MouseMove { x, y } => {
                self.drag.handle(DragEvent::MouseMove { x, y })
            }
            InputEvent::MouseUp { x, y } => {
                self.drag.handle(DragEvent::MouseUp { x, y })
            }
            InputEvent::Key {
                code,
                in_text_field,
            } => self.dispatch_key(&code, in_text_field),
            InputEvent::MenuClick { action } => {
                self.drag.handle(DragEvent::MenuClick(action))
            }
            InputEvent::MarkerDragged { panel, left } => {
                self.panner.marker_dragged(panel, left);
                Vec::new()
            }
            InputEvent::DetailDragged { left } => {
                self.panner.detail_dragged(left);
                Vec::new()
            }
            InputEvent::TracksLoaded => {
                self.panner.refresh_tracks();
                Vec::new()
            }
            InputEvent::LandmarkSubmitted { text } => submit_landmark(&text),
        }
    }

    /// Stamp a request about to be sent, superseding earlier ones.
    pub fn issue_update(&mut self, request: &NavigationRequest) -> UpdateKey {
        let key = self.updates.issue();
        log::debug!("issued {key:?} for {request}");
        key
    }

    /// Whether a response stamped `key` may still be applied.
    #[must_use]
    pub fn is_current(&self, key: UpdateKey) -> bool {
        self.updates.is_current(key)
    }

    /// Apply the segment metadata of a response, unless a newer request
    /// has been issued since. Returns whether it was applied.
    pub fn complete_update(&mut self, key: UpdateKey, info: SegmentInfo) -> bool {
        if !self.is_current(key) {
            log::debug!("discarding stale response {key:?}");
            return false;
        }
        self.load_segment(info);
        true
    }

    /// The detail and primer scale bars slide with the detail tracks.
    fn sync_detail_offset(&mut self) {
        self.drag
            .set_detail_offset(self.panner.detail_offset() as f64);
    }

    fn dispatch_key(&mut self, code: &str, in_text_field: bool) -> Vec<Effect> {
        if code == ESCAPE {
            return self.drag.handle(DragEvent::Escape);
        }
        let Some(action) = self.options.keybindings.lookup(code) else {
            return Vec::new();
        };
        match action {
            KeyAction::Cancel => self.drag.handle(DragEvent::Escape),
            KeyAction::PanLeft | KeyAction::PanRight => {
                if in_text_field || self.drag.phase() != DragPhase::Idle {
                    return Vec::new();
                }
                let direction = if action == KeyAction::PanLeft {
                    ScrollDirection::Left
                } else {
                    ScrollDirection::Right
                };
                self.panner
                    .scroll_or_navigate(direction, self.options.panning.keyboard_step)
                    .map(Effect::Navigate)
                    .into_iter()
                    .collect()
            }
        }
    }
}

/// Navigate to a landmark typed into the coordinate field.
fn submit_landmark(text: &str) -> Vec<Effect> {
    match Segment::parse_landmark(text) {
        Ok(segment) => {
            let request = NavigationRequest::set_segment(
                segment.ref_name,
                Interval::new(segment.start, segment.end),
            );
            log::info!("landmark submitted: {request}");
            vec![Effect::Navigate(request)]
        }
        Err(e) => {
            log::warn!("{e}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{MemoryRegistry, StyleProperty};

    fn info() -> SegmentInfo {
        SegmentInfo {
            ref_name: "chr1".to_owned(),
            detail_start: 10_000,
            detail_stop: 40_000,
            overview_start: 1,
            overview_stop: 100_000,
            region_start: 0,
            region_stop: 100_000,
            image_padding: 25,
            details_pixel_ratio: 12.5,
            overview_pixel_ratio: 100.0,
            region_pixel_ratio: 10.0,
            detail_width: 2400,
            overview_width: 800,
            details_mult: 3.0,
            ..SegmentInfo::default()
        }
    }

    fn session() -> BrowserSession<MemoryRegistry> {
        let registry = MemoryRegistry::with_tracks(["genes"]);
        let mut session = BrowserSession::new(Options::default(), registry);
        session.load_segment(info());
        session
    }

    fn key(code: &str) -> InputEvent {
        InputEvent::Key {
            code: code.to_owned(),
            in_text_field: false,
        }
    }

    #[test]
    fn arrow_keys_pan() {
        let mut session = session();
        assert!(session.handle_event(key("ArrowRight")).is_empty());
        assert!((session.panner().position() - 0.575).abs() < 1e-9);
    }

    #[test]
    fn arrow_keys_in_text_field_do_nothing() {
        let mut session = session();
        let effects = session.handle_event(InputEvent::Key {
            code: "ArrowLeft".to_owned(),
            in_text_field: true,
        });
        assert!(effects.is_empty());
        assert_eq!(session.panner().position(), 0.5);
    }

    #[test]
    fn arrow_key_at_edge_asks_server() {
        let mut session = session();
        session.panner_mut().set_pan_position(0.0);
        let effects = session.handle_event(key("ArrowLeft"));
        assert_eq!(
            effects,
            vec![Effect::Navigate(NavigationRequest::Scroll {
                direction: ScrollDirection::Left,
                fraction: 0.15,
            })]
        );
    }

    #[test]
    fn unbound_key_is_ignored() {
        let mut session = session();
        assert!(session.handle_event(key("KeyQ")).is_empty());
    }

    #[test]
    fn escape_cancels_gesture() {
        let mut session = session();
        assert!(session.attach_panel(
            PanelKind::Detail,
            Some(Rect::new(0.0, 0.0, 2400.0, 20.0))
        ));
        let _ = session.handle_event(InputEvent::MouseDown {
            panel: Some(PanelKind::Detail),
            x: 100.0,
            y: 5.0,
        });
        assert_eq!(session.drag().phase(), DragPhase::Selecting);
        let effects = session.handle_event(key("Escape"));
        assert!(effects.contains(&Effect::HideMenu));
        assert_eq!(session.drag().phase(), DragPhase::Idle);
    }

    fn detail_drag(
        session: &mut BrowserSession<MemoryRegistry>,
        from: f64,
        to: f64,
    ) -> Option<String> {
        let _ = session.handle_event(InputEvent::MouseDown {
            panel: Some(PanelKind::Detail),
            x: from,
            y: 5.0,
        });
        let _ = session.handle_event(InputEvent::MouseMove { x: to, y: 5.0 });
        let effects = session.handle_event(InputEvent::MouseUp { x: to, y: 5.0 });
        effects.into_iter().find_map(|e| match e {
            Effect::ShowMenu(menu) => Some(menu.title),
            _ => None,
        })
    }

    #[test]
    fn detail_selection_follows_the_pan() {
        let mut session = session();
        // Laid out at the configured offset.
        assert!(session.attach_panel(
            PanelKind::Detail,
            Some(Rect::new(-800.0, 0.0, 2400.0, 20.0))
        ));
        assert_eq!(
            detail_drag(&mut session, 25.0, 425.0).as_deref(),
            Some("chr1:20000..25000")
        );
        let _ = session.handle_event(key("Escape"));

        assert!(session.handle_event(key("ArrowRight")).is_empty());
        assert_eq!(session.panner().detail_offset(), -920);
        assert_eq!(session.panner().visible_start(), Some(21_500));
        assert_eq!(
            detail_drag(&mut session, 25.0, 425.0).as_deref(),
            Some("chr1:21500..26500")
        );
        let _ = session.handle_event(key("Escape"));

        let _ = session.handle_event(InputEvent::DetailDragged { left: 0.0 });
        assert_eq!(
            detail_drag(&mut session, 25.0, 425.0).as_deref(),
            Some("chr1:10000..15000")
        );
    }

    #[test]
    fn escape_cancels_even_when_rebound() {
        let mut options = Options::default();
        options.keybindings.bind(KeyAction::Cancel, "KeyC");
        let mut session =
            BrowserSession::new(options, MemoryRegistry::with_tracks(["genes"]));
        session.load_segment(info());
        assert!(session.attach_panel(
            PanelKind::Detail,
            Some(Rect::new(-800.0, 0.0, 2400.0, 20.0))
        ));
        let _ = detail_drag(&mut session, 25.0, 425.0);
        assert_eq!(session.drag().phase(), DragPhase::Committed);
        let effects = session.handle_event(key("Escape"));
        assert!(effects.contains(&Effect::HideMenu));
        assert_eq!(session.drag().phase(), DragPhase::Idle);
    }

    #[test]
    fn submitted_landmark_navigates() {
        let mut session = session();
        let effects = session.handle_event(InputEvent::LandmarkSubmitted {
            text: " chr2:1,000..25,000 ".to_owned(),
        });
        assert_eq!(
            effects,
            vec![Effect::Navigate(NavigationRequest::set_segment(
                "chr2",
                Interval::new(1000, 25_000)
            ))]
        );
        assert!(session
            .handle_event(InputEvent::LandmarkSubmitted {
                text: "chr2".to_owned(),
            })
            .is_empty());
    }

    #[test]
    fn mouse_down_off_panel_is_ignored() {
        let mut session = session();
        let effects = session.handle_event(InputEvent::MouseDown {
            panel: None,
            x: 100.0,
            y: 5.0,
        });
        assert!(effects.is_empty());
    }

    #[test]
    fn marker_drag_reaches_panner() {
        let mut session = session();
        let _ = session.handle_event(InputEvent::MarkerDragged {
            panel: crate::surface::MarkerPanel::Overview,
            left: 125.0,
        });
        assert_eq!(session.panner().position(), 0.0);
        let genes = session.panner().registry().track("genes");
        assert_eq!(genes.and_then(|t| t.px(StyleProperty::Left)), Some(0));
    }

    #[test]
    fn stale_responses_are_discarded() {
        let mut session = session();
        let first = session.issue_update(&NavigationRequest::set_segment(
            "chr1",
            Interval::new(1, 100),
        ));
        let second = session.issue_update(&NavigationRequest::Scroll {
            direction: ScrollDirection::Right,
            fraction: 0.15,
        });

        let mut stale = info();
        stale.detail_start = 1;
        assert!(!session.complete_update(first, stale));
        assert_eq!(session.segment().map(|s| s.detail_start), Some(10_000));

        let mut fresh = info();
        fresh.detail_start = 20_000;
        assert!(session.complete_update(second, fresh));
        assert_eq!(session.segment().map(|s| s.detail_start), Some(20_000));
    }

    #[test]
    fn bad_json_is_reported() {
        let mut session = session();
        assert!(matches!(
            session.load_segment_json("{not json"),
            Err(TrackPanError::SegmentInfo(_))
        ));
    }
}
