//! gatewright CLI library entry.
//!
//! Wires the core pipeline to the process surface: the fixed policy file
//! path in, the manifest stream out. Kept as a library so the end-to-end
//! run is callable from integration tests with an in-memory sink.

pub mod run;
