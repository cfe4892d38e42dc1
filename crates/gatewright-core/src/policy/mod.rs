//! Policy document loading.
//!
//! The policy file is authored by hand, so parsing is typed but lenient:
//! fields the compiler does not consume are ignored rather than rejected.

pub mod alias;
pub mod schema;

use std::fs;

use crate::error::{GatewrightError, Result};

pub use schema::{AccessRule, CategoryConfig, CategoryMap, PolicyFile};

/// Load the policy document from a file path.
///
/// The file handle lives only inside the read call, so it is released on
/// every path, parse failure included.
pub fn load_from_file(path: &str) -> Result<CategoryMap> {
    let s = fs::read_to_string(path).map_err(|e| GatewrightError::Read {
        path: path.to_string(),
        source: e,
    })?;
    load_from_str(&s)
}

/// Parse the policy document from a string and unwrap the top-level
/// `data_access_controls` key. A missing key surfaces as a parse error.
pub fn load_from_str(s: &str) -> Result<CategoryMap> {
    let file: PolicyFile = serde_yaml::from_str(s).map_err(GatewrightError::Parse)?;
    Ok(file.data_access_controls)
}
