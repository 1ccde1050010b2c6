//! Rubber-band selection on the scale bars.
//!
//! [`DragController`] is the state machine; [`PanelProfile`] records how
//! each panel kind behaves; [`Effect`] is what the controller asks the page
//! to do.

mod controller;
mod effect;
mod menu;
mod panel;

pub use controller::{DragController, DragEvent, DragPhase};
pub use effect::{DragBand, Effect, PrimerRequest};
pub use menu::{place as place_menu, MenuAction, MenuItem, SelectionMenu};
pub use panel::{PanelKind, PanelProfile};
