//! Shared error type across gatewright crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, GatewrightError>;

/// Unified error type used by core and the CLI.
///
/// Nothing in the pipeline catches or retries these; every variant
/// propagates to the process boundary and terminates the run.
#[derive(Debug, Error)]
pub enum GatewrightError {
    /// Policy file could not be read (missing file included).
    #[error("read policy {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// Policy document is not well-formed YAML, or a required field
    /// (`data_access_controls`, an access rule's `from`) is absent.
    #[error("policy parse failed: {0}")]
    Parse(#[source] serde_yaml::Error),
    /// A constraint could not be rendered to YAML.
    #[error("manifest render failed: {0}")]
    Render(#[source] serde_yaml::Error),
    /// The output sink rejected a write.
    #[error("manifest write failed: {0}")]
    Sink(#[from] std::io::Error),
}
