//! The selection gesture state machine.
//!
//! `DragController` owns the single live [`SelectionState`] for the page.
//! Every input reaches it through [`DragController::handle`], which moves
//! the machine between [`DragPhase`]s and answers with the [`Effect`]s the
//! page must apply:
//!
//! ```text
//! Idle ──mouse-down──▶ Selecting ──mouse-up (moved)──▶ Committed ──menu──▶ Idle
//!                          │  └──mouse-up (click)──▶ recenter ──▶ Idle
//!                          └──escape──▶ Cancelled ──▶ Idle
//! ```
//!
//! Only one gesture exists at a time. Starting a new one on any panel hides
//! whatever band or menu the previous gesture left behind.

use rustc_hash::FxHashMap;
use serde::Serialize;

use super::effect::{DragBand, Effect, PrimerRequest};
use super::menu::{MenuAction, SelectionMenu};
use super::panel::{PanelKind, PanelProfile};
use crate::coords::{self, ViewGeometry};
use crate::navigation::NavigationRequest;
use crate::options::{LabelOptions, Options, SelectionOptions};
use crate::segment::{Interval, Segment, SegmentInfo};
use crate::selection::SelectionState;
use crate::surface::Rect;

/// Input the drag controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEvent {
    /// Primary button pressed over a panel's scale bar.
    MouseDown {
        /// Panel under the cursor.
        panel: PanelKind,
        /// Horizontal page position.
        x: f64,
        /// Vertical page position.
        y: f64,
    },
    /// Cursor moved.
    MouseMove {
        /// Horizontal page position.
        x: f64,
        /// Vertical page position.
        y: f64,
    },
    /// Primary button released.
    MouseUp {
        /// Horizontal page position.
        x: f64,
        /// Vertical page position.
        y: f64,
    },
    /// Escape pressed.
    Escape,
    /// A selection menu entry was clicked.
    MenuClick(MenuAction),
}

/// Observable phase of the gesture machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DragPhase {
    /// No gesture in progress.
    Idle,
    /// Button held, band following the cursor.
    Selecting,
    /// Selection finished, menu waiting for a choice.
    Committed,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum DragState {
    Idle,
    Selecting { panel: PanelKind },
    Committed { panel: PanelKind, interval: Interval },
}

/// A registered scale bar. `view` is `None` when the panel's geometry is
/// invalid, leaving the panel inert.
///
/// `origin` is the page-space left the scale bar has at a pan offset of
/// zero; `bounds.left` is `origin` plus the current offset.
#[derive(Debug, Clone)]
struct PanelSlot {
    profile: PanelProfile,
    origin: f64,
    bounds: Rect,
    view: Option<(Segment, ViewGeometry)>,
}

/// What the controller knows about the page's current view.
#[derive(Debug, Clone)]
struct ViewContext {
    ref_name: String,
    span: i64,
    max_segment: i64,
    landmark: String,
}

impl Default for ViewContext {
    fn default() -> Self {
        Self {
            ref_name: String::new(),
            span: 0,
            max_segment: i64::MAX,
            landmark: String::new(),
        }
    }
}

impl ViewContext {
    fn from_info(info: &SegmentInfo) -> Self {
        Self {
            ref_name: info.ref_name.clone(),
            span: info.detail_stop - info.detail_start,
            max_segment: info.max_segment,
            landmark: info.detail_segment().landmark(),
        }
    }
}

/// Drives rubber-band selection on every registered panel.
pub struct DragController {
    panels: FxHashMap<PanelKind, PanelSlot>,
    info: Option<SegmentInfo>,
    context: ViewContext,
    selection: SelectionState,
    state: DragState,
    oversized: bool,
    detail_offset: f64,
    viewport: Rect,
    options: SelectionOptions,
    labels: LabelOptions,
}

impl DragController {
    /// Create a controller with no panels attached.
    #[must_use]
    pub fn new(options: &Options) -> Self {
        Self {
            panels: FxHashMap::default(),
            info: None,
            context: ViewContext::default(),
            selection: SelectionState::with_threshold(
                options.selection.drag_threshold_px,
            ),
            state: DragState::Idle,
            oversized: false,
            detail_offset: 0.0,
            viewport: Rect::new(0.0, 0.0, f64::MAX / 4.0, f64::MAX / 4.0),
            options: options.selection.clone(),
            labels: options.labels.clone(),
        }
    }

    /// Adopt the segment metadata of a new render.
    ///
    /// Every attached panel re-derives its segment and geometry. A gesture
    /// in progress belongs to the old render and is dropped.
    pub fn load_segment_info(&mut self, info: &SegmentInfo) {
        self.context = ViewContext::from_info(info);
        for slot in self.panels.values_mut() {
            slot.view = derive_view(&slot.profile, &slot.bounds, info);
        }
        if self.state != DragState::Idle {
            log::debug!("segment replaced mid-gesture; dropping selection");
            self.selection.cancel();
            self.state = DragState::Idle;
        }
        self.info = Some(info.clone());
    }

    /// Attach a panel's scale bar.
    ///
    /// `bounds` is the scale bar's bounding box as laid out now, or `None`
    /// when the panel is not rendered (e.g. no region panel). A missing
    /// scale bar is not an error: the panel simply has no drag capability.
    /// Returns whether the panel can now be dragged on.
    ///
    /// Detail and primer scale bars are measured at the offset last given
    /// to [`set_detail_offset`](Self::set_detail_offset).
    pub fn attach(&mut self, profile: PanelProfile, bounds: Option<Rect>) -> bool {
        let Some(bounds) = bounds else {
            log::debug!("no scale bar for {:?}; selection disabled", profile.kind);
            let _ = self.panels.remove(&profile.kind);
            return false;
        };
        let view = self
            .info
            .as_ref()
            .and_then(|info| derive_view(&profile, &bounds, info));
        let usable = view.is_some();
        let origin = if profile.kind.follows_pan() {
            bounds.left - self.detail_offset
        } else {
            bounds.left
        };
        let _ = self.panels.insert(
            profile.kind,
            PanelSlot {
                profile,
                origin,
                bounds,
                view,
            },
        );
        usable
    }

    /// Follow the detail tracks to a new pan offset.
    ///
    /// The detail and primer scale bars are detail tracks themselves, so
    /// every pan moves them; `left` is the offset the panner last wrote.
    pub fn set_detail_offset(&mut self, left: f64) {
        if left == self.detail_offset {
            return;
        }
        self.detail_offset = left;
        for slot in self
            .panels
            .values_mut()
            .filter(|slot| slot.profile.kind.follows_pan())
        {
            slot.bounds.left = slot.origin + left;
            if let Some((_, geometry)) = slot.view.as_mut() {
                *geometry = geometry.at_left(slot.bounds.left);
            }
        }
    }

    /// Set the visible page area the selection menu must stay inside.
    pub fn set_viewport(&mut self, viewport: Rect) {
        self.viewport = viewport;
    }

    /// Current phase of the gesture machine.
    #[must_use]
    pub fn phase(&self) -> DragPhase {
        match self.state {
            DragState::Idle => DragPhase::Idle,
            DragState::Selecting { .. } => DragPhase::Selecting,
            DragState::Committed { .. } => DragPhase::Committed,
        }
    }

    /// Panel of the gesture in progress, if any.
    #[must_use]
    pub fn active_panel(&self) -> Option<PanelKind> {
        match self.state {
            DragState::Idle => None,
            DragState::Selecting { panel }
            | DragState::Committed { panel, .. } => Some(panel),
        }
    }

    /// The live selection.
    #[must_use]
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Whether `kind` is attached and has usable geometry.
    #[must_use]
    pub fn is_selectable(&self, kind: PanelKind) -> bool {
        self.panels.get(&kind).is_some_and(|slot| slot.view.is_some())
    }

    /// The single transition function of the machine.
    pub fn handle(&mut self, event: DragEvent) -> Vec<Effect> {
        match (self.state, event) {
            (_, DragEvent::MouseDown { panel, x, .. }) => self.start(panel, x),
            (DragState::Selecting { panel }, DragEvent::MouseMove { x, .. }) => {
                self.track(panel, x)
            }
            (DragState::Selecting { panel }, DragEvent::MouseUp { x, y }) => {
                self.release(panel, x, y)
            }
            (
                DragState::Committed { panel, interval },
                DragEvent::MenuClick(action),
            ) => self.choose(panel, interval, action),
            (
                DragState::Selecting { panel }
                | DragState::Committed { panel, .. },
                DragEvent::Escape,
            ) => self.cancel(panel),
            _ => Vec::new(),
        }
    }

    // ── Transitions ─────────────────────────────────────────────────────

    /// Idle (or a leftover gesture) → Selecting.
    fn start(&mut self, panel: PanelKind, x: f64) -> Vec<Effect> {
        let Some((_, geometry)) = self.view(panel) else {
            return Vec::new();
        };
        let pixel = geometry.clamp_pixel(x);

        let mut effects = vec![Effect::HideMenu];
        effects.extend(
            PanelKind::ALL
                .into_iter()
                .filter(|kind| self.panels.contains_key(kind))
                .map(Effect::HideBand),
        );
        effects.push(Effect::SuppressTooltips(true));
        effects.push(Effect::TextSelection {
            panel,
            enabled: false,
        });

        self.selection.begin(pixel);
        self.oversized = false;
        self.state = DragState::Selecting { panel };
        log::debug!("selection started on {panel:?} at {pixel}px");
        effects
    }

    /// Selecting → Selecting: follow the cursor.
    fn track(&mut self, panel: PanelKind, x: f64) -> Vec<Effect> {
        let Some((segment, geometry)) = self.view(panel) else {
            return Vec::new();
        };
        let (segment, geometry) = (segment.clone(), *geometry);
        self.selection
            .update(geometry.clamp_pixel(x), &geometry, &segment);
        if !self.selection.moved() {
            return Vec::new();
        }

        let interval = self.selection.interval();
        self.oversized |= self.is_oversized(interval);
        vec![
            Effect::DrawBand(self.band(panel, interval)),
            Effect::SetLandmark(segment.landmark_for(interval)),
        ]
    }

    /// Selecting → Committed, or a click → Idle.
    fn release(&mut self, panel: PanelKind, x: f64, y: f64) -> Vec<Effect> {
        let Some((segment, geometry)) = self.view(panel) else {
            return self.cancel(panel);
        };
        let (segment, geometry) = (segment.clone(), *geometry);
        let pixel = geometry.clamp_pixel(x);
        self.selection.update(pixel, &geometry, &segment);

        match self.selection.finish() {
            Some(interval) => self.commit(panel, &segment, interval, (x, y)),
            None => self.click(panel, &segment, &geometry, pixel),
        }
    }

    fn commit(
        &mut self,
        panel: PanelKind,
        segment: &Segment,
        interval: Interval,
        cursor: (f64, f64),
    ) -> Vec<Effect> {
        let mut effects = vec![Effect::TextSelection {
            panel,
            enabled: true,
        }];
        let Some(profile) = self.panels.get(&panel).map(|s| s.profile.clone())
        else {
            return effects;
        };

        if panel == PanelKind::Primers {
            effects.push(Effect::HideBand(panel));
            effects.push(Effect::SuppressTooltips(false));
            if interval.width() > 0 {
                effects.push(Effect::DesignPrimers(PrimerRequest::new(
                    interval.start,
                    interval.end,
                    self.options.primer_size_margin,
                    self.options.primer_min_size,
                )));
            }
            self.state = DragState::Idle;
            return effects;
        }

        // Once the band has warned, the gesture is never auto-submitted.
        let oversized = self.oversized || self.is_oversized(interval);
        if profile.auto_submit && !oversized {
            let request =
                NavigationRequest::set_segment(&segment.ref_name, interval);
            log::info!("auto-submitting selection: {request}");
            effects.push(Effect::HideBand(panel));
            effects.push(Effect::SuppressTooltips(false));
            effects.push(Effect::Navigate(request));
            self.state = DragState::Idle;
            return effects;
        }

        let menu = SelectionMenu::build(
            &profile,
            segment.landmark_for(interval),
            cursor,
            &self.viewport,
            &self.labels,
        );
        effects.push(Effect::ShowMenu(menu));
        self.state = DragState::Committed { panel, interval };
        log::debug!("selection committed on {panel:?}: {interval:?}");
        effects
    }

    /// A mouse-up that never moved: recenter on the clicked coordinate.
    fn click(
        &mut self,
        panel: PanelKind,
        segment: &Segment,
        geometry: &ViewGeometry,
        pixel: f64,
    ) -> Vec<Effect> {
        self.state = DragState::Idle;
        let mut effects = vec![
            Effect::HideBand(panel),
            Effect::SuppressTooltips(false),
            Effect::TextSelection {
                panel,
                enabled: true,
            },
        ];
        if panel == PanelKind::Primers || !self.options.recenter_on_click {
            return effects;
        }

        let middle =
            coords::pixel_to_coordinate(pixel, geometry, segment).round() as i64;
        let target = Interval::centered(middle, self.context.span);
        let request = NavigationRequest::set_segment(&segment.ref_name, target);
        log::info!("recentering on click: {request}");
        effects.push(Effect::Navigate(request));
        effects
    }

    /// Committed → Idle through a menu entry.
    fn choose(
        &mut self,
        panel: PanelKind,
        interval: Interval,
        action: MenuAction,
    ) -> Vec<Effect> {
        let ref_name = self.context.ref_name.clone();
        let request = match action {
            MenuAction::Cancel => return self.cancel(panel),
            MenuAction::Zoom => NavigationRequest::set_segment(ref_name, interval),
            MenuAction::Recenter => NavigationRequest::set_segment(
                ref_name,
                Interval::centered(interval.midpoint(), self.context.span),
            ),
            MenuAction::DumpFasta => {
                let landmark = format!(
                    "{ref_name}:{}..{}",
                    interval.start, interval.end
                );
                let mut effects = self.cancel(panel);
                effects.push(Effect::Navigate(NavigationRequest::dump_fasta(
                    landmark,
                )));
                return effects;
            }
        };

        log::info!("menu {action:?}: {request}");
        self.selection.cancel();
        self.state = DragState::Idle;
        vec![
            Effect::HideBand(panel),
            Effect::HideMenu,
            Effect::SuppressTooltips(false),
            Effect::Navigate(request),
        ]
    }

    /// Any gesture → Cancelled → Idle.
    fn cancel(&mut self, panel: PanelKind) -> Vec<Effect> {
        log::debug!("selection on {panel:?} cancelled");
        self.selection.cancel();
        self.state = DragState::Idle;
        vec![
            Effect::HideBand(panel),
            Effect::HideMenu,
            Effect::SuppressTooltips(false),
            Effect::TextSelection {
                panel,
                enabled: true,
            },
            Effect::SetLandmark(self.context.landmark.clone()),
        ]
    }

    // ── Helpers ─────────────────────────────────────────────────────────

    fn view(&self, panel: PanelKind) -> Option<(&Segment, &ViewGeometry)> {
        let (segment, geometry) = self.panels.get(&panel)?.view.as_ref()?;
        Some((segment, geometry))
    }

    fn is_oversized(&self, interval: Interval) -> bool {
        interval.width() > self.context.max_segment
    }

    fn band(&self, panel: PanelKind, interval: Interval) -> DragBand {
        let (left, width) = self.selection.band();
        let (top, height) = self
            .panels
            .get(&panel)
            .map_or((0.0, 0.0), |slot| (slot.bounds.top, slot.bounds.height));
        let oversized = self.is_oversized(interval);
        DragBand {
            panel,
            left,
            top,
            width,
            height,
            color: if oversized {
                self.options.warning_color.clone()
            } else {
                self.options.band_color.clone()
            },
            label: (width > self.options.band_label_min_px)
                .then(|| format!("{} bp", interval.width())),
            oversized,
        }
    }
}

fn derive_view(
    profile: &PanelProfile,
    bounds: &Rect,
    info: &SegmentInfo,
) -> Option<(Segment, ViewGeometry)> {
    match profile.segment_from_info(info, bounds) {
        Ok(view) => Some(view),
        Err(e) => {
            log::warn!("{e}; selection disabled on this panel");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info() -> SegmentInfo {
        SegmentInfo {
            ref_name: "chr1".to_owned(),
            detail_start: 10_000,
            detail_stop: 30_000,
            overview_start: 1,
            overview_stop: 2_000_000,
            region_start: 0,
            region_stop: 200_000,
            image_padding: 25,
            details_pixel_ratio: 8.0,
            overview_pixel_ratio: 2500.0,
            region_pixel_ratio: 250.0,
            detail_width: 2550,
            overview_width: 850,
            max_segment: 1_000_000,
            ..SegmentInfo::default()
        }
    }

    fn controller_with(info: &SegmentInfo) -> DragController {
        let mut ctl = DragController::new(&Options::default());
        ctl.load_segment_info(info);
        ctl.set_viewport(Rect::new(0.0, 0.0, 1200.0, 800.0));
        assert!(ctl.attach(
            PanelProfile::overview(),
            Some(Rect::new(0.0, 50.0, 850.0, 20.0))
        ));
        assert!(ctl.attach(
            PanelProfile::region(),
            Some(Rect::new(0.0, 100.0, 850.0, 20.0))
        ));
        assert!(ctl.attach(
            PanelProfile::detail(),
            Some(Rect::new(0.0, 200.0, 2550.0, 20.0))
        ));
        ctl
    }

    fn controller() -> DragController {
        controller_with(&info())
    }

    fn down(panel: PanelKind, x: f64) -> DragEvent {
        DragEvent::MouseDown { panel, x, y: 210.0 }
    }

    fn drag(ctl: &mut DragController, panel: PanelKind, from: f64, to: f64) -> Vec<Effect> {
        let _ = ctl.handle(down(panel, from));
        let _ = ctl.handle(DragEvent::MouseMove { x: to, y: 210.0 });
        ctl.handle(DragEvent::MouseUp { x: to, y: 210.0 })
    }

    fn navigation(effects: &[Effect]) -> Option<&NavigationRequest> {
        effects.iter().find_map(|e| match e {
            Effect::Navigate(req) => Some(req),
            _ => None,
        })
    }

    fn menu(effects: &[Effect]) -> Option<&SelectionMenu> {
        effects.iter().find_map(|e| match e {
            Effect::ShowMenu(m) => Some(m),
            _ => None,
        })
    }

    #[test]
    fn missing_scale_bar_is_a_silent_no_op() {
        let mut ctl = DragController::new(&Options::default());
        ctl.load_segment_info(&info());
        assert!(!ctl.attach(PanelProfile::region(), None));
        assert!(!ctl.is_selectable(PanelKind::Region));
        assert!(ctl.handle(down(PanelKind::Region, 100.0)).is_empty());
        assert_eq!(ctl.phase(), DragPhase::Idle);
    }

    #[test]
    fn invalid_geometry_leaves_panel_inert() {
        let mut info = info();
        info.details_pixel_ratio = 0.0;
        let mut ctl = DragController::new(&Options::default());
        ctl.load_segment_info(&info);
        assert!(!ctl.attach(
            PanelProfile::detail(),
            Some(Rect::new(0.0, 0.0, 2550.0, 20.0))
        ));
        assert!(ctl.handle(down(PanelKind::Detail, 300.0)).is_empty());
        assert_eq!(ctl.phase(), DragPhase::Idle);
    }

    #[test]
    fn mouse_down_suppresses_tooltips_and_text_selection() {
        let mut ctl = controller();
        let effects = ctl.handle(down(PanelKind::Detail, 125.0));
        assert_eq!(effects[0], Effect::HideMenu);
        assert!(effects.contains(&Effect::SuppressTooltips(true)));
        assert!(effects.contains(&Effect::TextSelection {
            panel: PanelKind::Detail,
            enabled: false
        }));
        assert_eq!(ctl.phase(), DragPhase::Selecting);
        assert_eq!(ctl.active_panel(), Some(PanelKind::Detail));
    }

    #[test]
    fn detail_drag_draws_band_and_tracks_landmark() {
        let mut ctl = controller();
        let _ = ctl.handle(down(PanelKind::Detail, 125.0));
        let effects = ctl.handle(DragEvent::MouseMove { x: 375.0, y: 210.0 });
        let Effect::DrawBand(band) = &effects[0] else {
            panic!("expected a band, got {effects:?}");
        };
        assert_eq!((band.left, band.width), (125.0, 250.0));
        assert_eq!((band.top, band.height), (200.0, 20.0));
        assert_eq!(band.label.as_deref(), Some("2000 bp"));
        assert!(!band.oversized);
        assert_eq!(
            effects[1],
            Effect::SetLandmark("chr1:10800..12800".to_owned())
        );
    }

    #[test]
    fn detail_drag_commits_to_menu_then_zooms() {
        let mut ctl = controller();
        let effects = drag(&mut ctl, PanelKind::Detail, 125.0, 375.0);
        let menu = menu(&effects).expect("menu shown");
        assert_eq!(menu.title, "chr1:10800..12800");
        assert_eq!(menu.items.len(), 4);
        assert_eq!(ctl.phase(), DragPhase::Committed);
        assert!(navigation(&effects).is_none());

        let effects = ctl.handle(DragEvent::MenuClick(MenuAction::Zoom));
        assert_eq!(
            navigation(&effects).map(ToString::to_string).as_deref(),
            Some("set segment chr1:10800..12800")
        );
        assert!(effects.contains(&Effect::HideMenu));
        assert!(effects.contains(&Effect::SuppressTooltips(false)));
        assert_eq!(ctl.phase(), DragPhase::Idle);
    }

    #[test]
    fn right_to_left_drag_reports_ordered_interval() {
        let mut ctl = controller();
        let effects = drag(&mut ctl, PanelKind::Detail, 375.0, 125.0);
        assert_eq!(menu(&effects).unwrap().title, "chr1:10800..12800");
    }

    #[test]
    fn zero_width_drag_recenters_instead_of_committing() {
        let mut ctl = controller();
        let _ = ctl.handle(down(PanelKind::Detail, 1275.0));
        let effects = ctl.handle(DragEvent::MouseUp { x: 1275.0, y: 210.0 });
        assert!(!ctl.selection().moved());
        assert!(menu(&effects).is_none());
        assert_eq!(
            navigation(&effects),
            Some(&NavigationRequest::set_segment(
                "chr1",
                Interval::new(10_000, 30_000)
            ))
        );
        assert_eq!(ctl.phase(), DragPhase::Idle);
    }

    #[test]
    fn region_selection_auto_submits() {
        let mut ctl = controller();
        let effects = drag(&mut ctl, PanelKind::Region, 25.0, 425.0);
        assert!(menu(&effects).is_none());
        assert_eq!(
            navigation(&effects).map(ToString::to_string).as_deref(),
            Some("set segment chr1:0..100000")
        );
        assert_eq!(ctl.phase(), DragPhase::Idle);
    }

    #[test]
    fn oversized_region_selection_needs_confirmation() {
        let mut info = info();
        info.max_segment = 50_000;
        let mut ctl = controller_with(&info);

        let _ = ctl.handle(down(PanelKind::Region, 25.0));
        let moved = ctl.handle(DragEvent::MouseMove { x: 425.0, y: 110.0 });
        let Effect::DrawBand(band) = &moved[0] else {
            panic!("expected a band, got {moved:?}");
        };
        assert!(band.oversized);
        assert_eq!(band.color, SelectionOptions::default().warning_color);

        let effects = ctl.handle(DragEvent::MouseUp { x: 425.0, y: 110.0 });
        assert!(navigation(&effects).is_none());
        assert!(menu(&effects).is_some());
        assert_eq!(ctl.phase(), DragPhase::Committed);
    }

    #[test]
    fn warned_gesture_is_not_auto_submitted_after_shrinking() {
        let mut info = info();
        info.max_segment = 50_000;
        let mut ctl = controller_with(&info);

        let _ = ctl.handle(down(PanelKind::Region, 25.0));
        let _ = ctl.handle(DragEvent::MouseMove { x: 425.0, y: 110.0 });
        let _ = ctl.handle(DragEvent::MouseMove { x: 125.0, y: 110.0 });
        let effects = ctl.handle(DragEvent::MouseUp { x: 125.0, y: 110.0 });
        assert!(navigation(&effects).is_none());
        assert_eq!(menu(&effects).map(|m| m.title.as_str()), Some("chr1:0..25000"));
        assert_eq!(ctl.phase(), DragPhase::Committed);

        // The warning belongs to that gesture only.
        let _ = ctl.handle(DragEvent::Escape);
        let effects = drag(&mut ctl, PanelKind::Region, 25.0, 125.0);
        assert_eq!(
            navigation(&effects).map(ToString::to_string).as_deref(),
            Some("set segment chr1:0..25000")
        );
    }

    #[test]
    fn panned_detail_scale_bar_maps_from_its_new_left() {
        let mut ctl = controller();
        ctl.set_detail_offset(-400.0);
        let effects = drag(&mut ctl, PanelKind::Detail, 125.0, 375.0);
        assert_eq!(menu(&effects).unwrap().title, "chr1:14000..16000");

        // Other panels do not slide with the detail tracks.
        let _ = ctl.handle(DragEvent::Escape);
        let effects = drag(&mut ctl, PanelKind::Region, 25.0, 425.0);
        assert_eq!(
            navigation(&effects).map(ToString::to_string).as_deref(),
            Some("set segment chr1:0..100000")
        );
    }

    #[test]
    fn scale_bar_attached_mid_pan_keeps_its_origin() {
        let mut ctl = DragController::new(&Options::default());
        ctl.load_segment_info(&info());
        ctl.set_detail_offset(-400.0);
        assert!(ctl.attach(
            PanelProfile::detail(),
            Some(Rect::new(-400.0, 200.0, 2550.0, 20.0))
        ));
        ctl.set_detail_offset(0.0);
        let effects = drag(&mut ctl, PanelKind::Detail, 125.0, 375.0);
        assert_eq!(menu(&effects).unwrap().title, "chr1:10800..12800");
    }

    #[test]
    fn escape_cancels_and_restores_landmark() {
        let mut ctl = controller();
        let _ = ctl.handle(down(PanelKind::Detail, 125.0));
        let _ = ctl.handle(DragEvent::MouseMove { x: 375.0, y: 210.0 });
        let effects = ctl.handle(DragEvent::Escape);
        assert!(effects.contains(&Effect::HideBand(PanelKind::Detail)));
        assert!(effects.contains(&Effect::HideMenu));
        assert!(effects.contains(&Effect::SuppressTooltips(false)));
        assert!(effects
            .contains(&Effect::SetLandmark("chr1:10000..30000".to_owned())));
        assert_eq!(ctl.phase(), DragPhase::Idle);

        // The release that follows belongs to no gesture.
        assert!(ctl
            .handle(DragEvent::MouseUp { x: 375.0, y: 210.0 })
            .is_empty());
    }

    #[test]
    fn escape_while_idle_does_nothing() {
        let mut ctl = controller();
        assert!(ctl.handle(DragEvent::Escape).is_empty());
    }

    #[test]
    fn escape_dismisses_committed_menu() {
        let mut ctl = controller();
        let _ = drag(&mut ctl, PanelKind::Detail, 125.0, 375.0);
        let effects = ctl.handle(DragEvent::Escape);
        assert!(effects.contains(&Effect::HideMenu));
        assert_eq!(ctl.phase(), DragPhase::Idle);
    }

    #[test]
    fn new_gesture_hides_other_panels_leftovers() {
        let mut ctl = controller();
        let _ = drag(&mut ctl, PanelKind::Detail, 125.0, 375.0);
        assert_eq!(ctl.phase(), DragPhase::Committed);

        let effects = ctl.handle(down(PanelKind::Overview, 300.0));
        assert!(effects.contains(&Effect::HideMenu));
        assert!(effects.contains(&Effect::HideBand(PanelKind::Detail)));
        assert_eq!(ctl.active_panel(), Some(PanelKind::Overview));
        assert_eq!(ctl.phase(), DragPhase::Selecting);
    }

    #[test]
    fn menu_recenter_keeps_current_span() {
        let mut ctl = controller();
        let _ = drag(&mut ctl, PanelKind::Detail, 125.0, 375.0);
        let effects = ctl.handle(DragEvent::MenuClick(MenuAction::Recenter));
        assert_eq!(
            navigation(&effects),
            Some(&NavigationRequest::set_segment(
                "chr1",
                Interval::new(1800, 21_800)
            ))
        );
    }

    #[test]
    fn menu_fasta_dump_runs_plugin_and_clears() {
        let mut ctl = controller();
        let _ = drag(&mut ctl, PanelKind::Detail, 125.0, 375.0);
        let effects = ctl.handle(DragEvent::MenuClick(MenuAction::DumpFasta));
        assert_eq!(
            navigation(&effects),
            Some(&NavigationRequest::dump_fasta("chr1:10800..12800"))
        );
        assert_eq!(ctl.phase(), DragPhase::Idle);
    }

    #[test]
    fn menu_click_without_menu_is_ignored() {
        let mut ctl = controller();
        assert!(ctl
            .handle(DragEvent::MenuClick(MenuAction::Zoom))
            .is_empty());
    }

    #[test]
    fn primer_selection_designs_primers() {
        let mut ctl = controller();
        assert!(ctl.attach(
            PanelProfile::primers(),
            Some(Rect::new(0.0, 200.0, 2550.0, 20.0))
        ));
        let effects = drag(&mut ctl, PanelKind::Primers, 125.0, 375.0);
        assert!(effects.contains(&Effect::DesignPrimers(PrimerRequest {
            left: 10_800,
            right: 12_800,
            product_size: (1800, 2200),
            product_size_range: "1800-2200".to_owned(),
        })));
        assert!(menu(&effects).is_none());
        assert_eq!(ctl.phase(), DragPhase::Idle);

        // A click on the primer panel does not navigate.
        let _ = ctl.handle(down(PanelKind::Primers, 500.0));
        let effects = ctl.handle(DragEvent::MouseUp { x: 500.0, y: 210.0 });
        assert!(navigation(&effects).is_none());
    }

    #[test]
    fn drag_past_panel_edge_is_clipped() {
        let mut ctl = controller();
        let _ = ctl.handle(down(PanelKind::Overview, 25.0));
        let effects = ctl.handle(DragEvent::MouseMove { x: 5000.0, y: 60.0 });
        let Effect::DrawBand(band) = &effects[0] else {
            panic!("expected a band, got {effects:?}");
        };
        assert_eq!(band.left + band.width, 850.0);
    }

    #[test]
    fn new_segment_drops_gesture_in_progress() {
        let mut ctl = controller();
        let _ = ctl.handle(down(PanelKind::Detail, 125.0));
        ctl.load_segment_info(&info());
        assert_eq!(ctl.phase(), DragPhase::Idle);
        assert!(!ctl.selection().is_active());
    }
}
