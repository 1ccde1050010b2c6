//! Input handling: platform-agnostic event types and the bindable key
//! actions a [`BrowserSession`](crate::session::BrowserSession) routes.

/// Platform-agnostic input events.
pub mod event;
/// Bindable keyboard actions.
pub mod keyboard;

pub use event::InputEvent;
pub use keyboard::KeyAction;
