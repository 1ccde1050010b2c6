// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Pixel math casts between f64 and i64 are intentional
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::module_name_repetitions)]

//! Interaction core for genome-browser panels.
//!
//! Trackpan turns mouse gestures on a panel's scale bar into genomic
//! intervals ("rubber-band" selection) and keeps the overview, region and
//! detail panels panned in lockstep when the detail image is wider than
//! its viewport.
//!
//! # Key entry points
//!
//! - [`session::BrowserSession`] - one per page load; owns the drag
//!   controller and the panner and routes [`input::InputEvent`]s
//! - [`drag::DragController`] - the selection state machine
//! - [`pan::ViewportPanner`] - the synchronized three-panel pan
//! - [`coords`] - pixel ↔ genomic coordinate conversion
//! - [`options::Options`] - runtime configuration (selection, panning,
//!   keybindings, labels)
//!
//! # Architecture
//!
//! Nothing here touches the DOM directly. The drag controller answers each
//! event with a list of [`drag::Effect`]s for the page to apply, and the
//! panner writes positions through the [`surface::TrackRegistry`] trait.
//! The `web` feature provides `web-sys` implementations of those seams.

pub mod coords;
pub mod drag;
pub mod error;
pub mod input;
pub mod navigation;
pub mod options;
pub mod pan;
pub mod segment;
pub mod selection;
pub mod session;
pub mod surface;
#[cfg(feature = "web")]
pub mod web;

pub use error::TrackPanError;
