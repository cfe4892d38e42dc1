//! Admission constraint manifest model.
//!
//! Output shape expected by the enforcement side: a Gatekeeper-style
//! constraint with a fixed `apiVersion`/`kind`, a generated name, a match
//! block shared by every constraint, and the per-category allowlist under
//! `spec.parameters`.

use serde::Serialize;

/// API version stamped on every emitted constraint.
pub const API_VERSION: &str = "constraints.gatekeeper.sh/v1beta1";

/// Constraint kind consumed by the enforcement system.
pub const KIND: &str = "SecretAccessControl";

/// Namespaces the constraints are enforced in. Constant across categories;
/// if enforcement scope ever becomes per-category this is the one place
/// that changes.
pub const RESTRICTED_NAMESPACES: &[&str] = &["domain1-untrusted", "domain2-medium"];

/// One admission constraint, ready to serialize. Derived, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Constraint {
    #[serde(rename = "apiVersion")]
    pub api_version: &'static str,
    pub kind: &'static str,
    pub metadata: Metadata,
    pub spec: Spec,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metadata {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Spec {
    #[serde(rename = "match")]
    pub match_block: MatchBlock,
    pub parameters: Parameters,
}

/// What the constraint applies to: Pods in the restricted namespaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchBlock {
    pub kinds: Vec<KindSelector>,
    pub namespaces: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KindSelector {
    #[serde(rename = "apiGroups")]
    pub api_groups: Vec<String>,
    pub kinds: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameters {
    pub allowed_namespaces: Vec<String>,
}

impl Constraint {
    /// Build the constraint for one data category.
    ///
    /// `allowed_namespaces` arrives already canonicalized; order and
    /// duplicates are kept as given.
    pub fn for_category(category: &str, allowed_namespaces: Vec<String>) -> Self {
        Self {
            api_version: API_VERSION,
            kind: KIND,
            metadata: Metadata {
                name: constraint_name(category),
            },
            spec: Spec {
                match_block: MatchBlock::restricted(),
                parameters: Parameters { allowed_namespaces },
            },
        }
    }
}

impl MatchBlock {
    /// The fixed match target: Pods in the restricted namespaces.
    pub fn restricted() -> Self {
        Self {
            kinds: vec![KindSelector {
                api_groups: vec![String::new()],
                kinds: vec!["Pod".to_string()],
            }],
            namespaces: RESTRICTED_NAMESPACES.iter().map(|ns| ns.to_string()).collect(),
        }
    }
}

/// Derive the manifest name for a category: underscores hyphenated, then
/// wrapped as `restrict-<category>-access`.
///
/// Not injective: `a_b` and `a-b` both map to `restrict-a-b-access`. That
/// collision is accepted; category names are hyphen-free in practice.
pub fn constraint_name(category: &str) -> String {
    format!("restrict-{}-access", category.replace('_', "-"))
}
