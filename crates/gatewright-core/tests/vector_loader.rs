//! YAML test vector loader shared by policy/compile tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct TestVector {
    pub description: String,
    /// Policy document text, fed to `policy::load_from_str` verbatim.
    pub policy: String,
    /// Expected constraints, in order. Ignored when `expect_error` is set.
    #[serde(default)]
    pub expect: Vec<ExpectedConstraint>,
    /// When true, loading the policy must fail.
    #[serde(default)]
    pub expect_error: bool,
}

#[derive(Debug, Deserialize)]
pub struct ExpectedConstraint {
    pub name: String,
    pub allowed_namespaces: Vec<String>,
}
