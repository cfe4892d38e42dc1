//! gatewright core: policy model, constraint compilation, and manifest
//! rendering.
//!
//! This crate holds the whole pure pipeline: the typed shape of the
//! data-access policy document, the alias table that collapses source
//! namespace spellings to their canonical principals, the compiler that
//! derives one admission constraint per data category, and the renderer
//! that turns the constraint list into a `---`-separated YAML stream. It
//! carries no process concerns so it can be driven entirely from tests
//! with in-memory documents and sinks.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths surface as `GatewrightError`/`Result` so a malformed
//! policy aborts the run with a diagnosable error instead of a crash.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod compile;
pub mod constraint;
pub mod emit;
pub mod error;
pub mod policy;

/// Shared result type.
pub use error::{GatewrightError, Result};
