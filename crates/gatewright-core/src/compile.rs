//! Policy-to-constraint compilation.
//!
//! Pure and order-preserving: one constraint per category, in document
//! order. All failure modes live in parsing and rendering; by the time a
//! `CategoryMap` exists, compilation cannot fail.

use crate::constraint::Constraint;
use crate::policy::alias::canonical_source;
use crate::policy::CategoryMap;

/// Compile the policy document into one constraint per category.
///
/// Every access rule's `from` is canonicalized; order and duplicates are
/// preserved (the enforcement side treats the list as opaque). A category
/// with no `allowed_access` entries compiles to an empty allowlist.
pub fn compile(policy: &CategoryMap) -> Vec<Constraint> {
    policy
        .iter()
        .map(|(category, config)| {
            let allowed: Vec<String> = config
                .allowed_access
                .iter()
                .map(|rule| canonical_source(&rule.from).to_string())
                .collect();
            tracing::debug!(category, allowed = allowed.len(), "compiled constraint");
            Constraint::for_category(category, allowed)
        })
        .collect()
}
