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
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
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

//! Placemark picking, highlighting, and modal dialog control for a 3D
//! globe view.
//!
//! A [`scene::Scene`] holds imagery and overlay layers plus renderable
//! layers of placemarks. Raw pointer events are turned into clicks and taps
//! by [`input::InputProcessor`], and a [`controller::PickController`] picks
//! the scene at that point, highlights whatever was hit, and opens a
//! [`modal::Modal`] when the designated placemark is among the hits.
//!
//! # Key entry points
//!
//! - [`controller::PickController`] - pick handling and highlight state
//! - [`demo::build_scene`] - the pushpin and landmark demo scene
//! - [`options::Options`] - camera, layers, placemarks, modal trigger, input
//!   thresholds
//! - [`picking::PickScene`] - the seam between the controller and a scene
//!
//! Rendering is left to the host. The scene only asks for a redraw, through
//! a hook, when highlight state changes. With the `web` feature the crate
//! binds to a browser canvas and a DOM modal element.

pub mod camera;
pub mod controller;
pub mod demo;
pub mod error;
pub mod geo;
pub mod input;
pub mod modal;
pub mod options;
pub mod picking;
pub mod scene;
pub mod util;
#[cfg(feature = "web")]
pub mod web;

pub use controller::{DismissalRouter, PickController, PickOutcome};
pub use error::GeoPickError;
pub use input::{InputEvent, InputProcessor, PointerEvent, PointerSource};
pub use modal::{ClickTarget, HeadlessSurface, Modal, ModalState, ModalSurface};
pub use options::Options;
pub use scene::Scene;
