//! Top-level facade crate for gatewright.
//!
//! Re-exports the core pipeline and the CLI library so users can depend on
//! a single crate.

pub mod core {
    pub use gatewright_core::*;
}

pub mod cli {
    pub use gatewright_cli::*;
}
