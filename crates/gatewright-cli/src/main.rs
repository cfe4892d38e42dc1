//! gatewright
//!
//! Reads the data-access control policy and prints one admission
//! constraint per data category to stdout, as a `---`-separated YAML
//! stream. Diagnostics go to stderr so the manifest stream stays clean
//! for piping into the enforcement tooling.

use tracing_subscriber::{fmt, EnvFilter};

use gatewright_cli::run::{run, DEFAULT_POLICY_PATH};

fn main() {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Err(err) = run(DEFAULT_POLICY_PATH, &mut out) {
        tracing::error!(%err, "compile failed");
        std::process::exit(1);
    }
}
