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
// Complexity limits (thresholds in clippy.toml)
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

//! Interactive rotating showpiece for a bakery landing page.
//!
//! Toque drives a decorative 3D object (a chef's hat) that visitors can
//! spin with a mouse or a finger: drags rotate it, a flick keeps it turning
//! under friction, and when left alone it slowly auto-rotates while bobbing
//! in place. Rendering stays with the host's scene graph; this crate owns
//! the interaction state and hands the host a pose each frame.
//!
//! # Key entry points
//!
//! - [`stage::Stage`] - one mounted showpiece: feed it events and ticks
//! - [`controller::RotationController`] - the drag/inertia state machine
//! - [`options::Options`] - runtime configuration with TOML presets
//! - [`asset`] - polled handle for the asynchronously loaded model
//!
//! # Frame flow
//!
//! Host events become [`input::InputEvent`]s and go through
//! [`stage::Stage::handle_event`], which reports whether the native default
//! should be suppressed. Each frame the host calls [`stage::Stage::tick`]
//! with the elapsed seconds; the stage polls the model load, skips work
//! while the showpiece is off screen, advances inertia and idle motion, and
//! writes the pose into the model through [`stage::DisplayObject`].

pub mod asset;
pub mod controller;
pub mod error;
pub mod input;
pub mod options;
pub mod page;
pub mod replay;
pub mod stage;
pub mod util;
#[cfg(feature = "web")]
pub mod web;
