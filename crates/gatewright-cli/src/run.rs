//! End-to-end compile run: policy file in, manifest stream out.

use std::io::Write;

use gatewright_core::{compile, emit, policy, Result};

/// Where the policy document lives, relative to the working directory.
pub const DEFAULT_POLICY_PATH: &str = "policy/data_access_control_gatekeeper.yaml";

/// Load the policy at `path`, compile it, and write the manifest stream
/// to `sink`.
///
/// One linear pass with no process-wide state: load and compile finish
/// before the first write, so any failure up to that point produces no
/// output at all.
pub fn run<W: Write>(path: &str, sink: &mut W) -> Result<()> {
    let policy = policy::load_from_file(path)?;
    let constraints = compile::compile(&policy);
    tracing::info!(path, categories = constraints.len(), "policy compiled");
    emit::write_stream(&constraints, sink)
}
