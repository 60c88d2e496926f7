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
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Graphics math: casts and exact float comparisons are intentional
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::doc_markdown)]

//! Layout and tilt dynamics for an interactive 3D model wall.
//!
//! A wall is a grid of cloned instances of one template model covering the
//! visible view volume. The grid tilts toward a pointer: each instance within
//! an influence radius rotates proportionally to its offset from the pointer,
//! with an exponential low-pass smoothing the motion frame to frame.
//!
//! The crate owns the reproducible core only. Rendering, windowing, and
//! model decoding live in the host, reached through narrow seams:
//!
//! - [`scene::SceneHost`] - the host scene graph (spawn / clear / set tilt)
//! - [`engine::WallEngine`] - the composition-root context driving layout,
//!   input interpretation, and per-frame tilt updates
//! - [`options::Options`] - runtime configuration (camera, grid, tilt,
//!   input) with TOML preset support
//!
//! # Frame loop
//!
//! The host feeds raw [`input::InputEvent`]s into
//! [`WallEngine::handle_event`](engine::WallEngine::handle_event) as they
//! arrive, and calls [`WallEngine::frame`](engine::WallEngine::frame) once
//! per repaint tick. Nothing here schedules frames; if the host stops
//! ticking, motion simply freezes.

pub mod camera;
pub mod engine;
pub mod error;
pub mod input;
pub mod layout;
pub mod options;
pub mod scene;
pub mod tilt;
