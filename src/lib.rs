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
// Tests unwrap freely
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! Camera extrinsics for an interactive two-camera viewer.
//!
//! Converts between look-at vectors and horizontal/vertical angles, rotates
//! vectors with quaternions, builds view matrices from orthonormal camera
//! frames, and measures the relative orientation of two cameras.
//!
//! # Key entry points
//!
//! - [`camera::Camera`] - position plus yaw/pitch, with derived look-at/up
//! - [`camera::view_matrix`] - rotate-then-translate view transform
//! - [`camera::relative_orientation`] - angular deviation between two cameras
//! - [`camera::CameraRig`] - the two cameras driven once per frame
//! - [`options::Options`] - starting poses, projection, steps, keybindings
//!
//! # Conventions
//!
//! Angles on public camera fields are degrees; [`camera::RelativePose`] is
//! radians until converted with [`camera::RelativePose::to_degrees`].
//! Rotations are right-handed about `+Y` for yaw. Matrices are glam
//! column-major and upload as-is.

pub mod camera;
pub mod error;
pub mod input;
pub mod math;
pub mod options;

pub use error::ExtrinsicsError;
