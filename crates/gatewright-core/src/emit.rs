//! Manifest stream rendering.
//!
//! The output contract is a sequence of `---`-separated YAML documents,
//! one per constraint, in compilation order. The constraint list is fully
//! materialized before the first byte is written, so a failed run never
//! leaves a truncated stream behind.

use std::io::Write;

use crate::constraint::Constraint;
use crate::error::{GatewrightError, Result};

/// Write the constraints to `sink` as a `---`-separated YAML stream.
///
/// Sink failures propagate uncaught; there is no partial-output recovery.
pub fn write_stream<W: Write>(constraints: &[Constraint], sink: &mut W) -> Result<()> {
    for constraint in constraints {
        let doc = serde_yaml::to_string(constraint).map_err(GatewrightError::Render)?;
        sink.write_all(b"---\n")?;
        sink.write_all(doc.as_bytes())?;
    }
    Ok(())
}
