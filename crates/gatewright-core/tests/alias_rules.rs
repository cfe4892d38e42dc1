//! Alias table resolution tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use gatewright_core::policy::alias::{canonical_source, SOURCE_ALIASES};

#[test]
fn domain3_spellings_collapse_to_tcb() {
    for raw in [
        "domain3",
        "domain3-tcb",
        "domain3_token_policy",
        "legacy-domain3-issuer",
    ] {
        assert_eq!(canonical_source(raw), "domain3-tcb", "raw: {raw}");
    }
}

#[test]
fn unrelated_sources_pass_through() {
    for raw in ["auth-service", "domain1-untrusted", "domain2-medium", ""] {
        assert_eq!(canonical_source(raw), raw, "raw: {raw}");
    }
}

#[test]
fn substring_match_is_coarse() {
    // "domain30" also contains the fragment; the table matches fragments,
    // not whole identifiers.
    assert_eq!(canonical_source("domain30"), "domain3-tcb");
}

#[test]
fn resolution_is_idempotent() {
    for raw in ["domain3_token_policy", "auth-service", "domain3-tcb"] {
        let once = canonical_source(raw);
        assert_eq!(canonical_source(once), once, "raw: {raw}");
    }
}

#[test]
fn canonical_names_contain_their_own_fragment() {
    // Idempotence rests on this table property.
    for rule in SOURCE_ALIASES {
        assert!(
            rule.canonical.contains(rule.fragment),
            "{} must contain {}",
            rule.canonical,
            rule.fragment
        );
    }
}
