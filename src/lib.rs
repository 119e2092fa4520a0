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

//! Interaction and transform core for a wall of pinned, draggable photos
//! viewed through a 3D camera.
//!
//! Photos rest on a container plane, can be dragged across it with the
//! pointer, and can be picked up (clicked) to be presented full-screen in
//! front of the camera. The host renders; this crate decides where every
//! photo is and how large it appears each frame.
//!
//! # Key entry points
//!
//! - [`gallery::Gallery`] - composes photos and drives them from pointer
//!   events and per-frame updates
//! - [`store::PositionStore`] - durable resting positions
//! - [`geometry`] - viewport fitting and ray/plane math
//! - [`options::Options`] - runtime configuration with TOML presets
//!
//! # Architecture
//!
//! The host calls [`gallery::Gallery::handle_pointer`] for each pointer
//! event and [`gallery::Gallery::update`] once per frame with the elapsed
//! time and camera pose, then reads [`gallery::Gallery::transforms`]. Pointer
//! capture keeps a drag attached to its photo even when the pointer leaves
//! it. Every drag move writes through to the position store.

pub mod animation;
pub mod camera;
pub mod error;
pub mod gallery;
pub mod geometry;
pub mod input;
pub mod interaction;
pub mod options;
pub mod store;
