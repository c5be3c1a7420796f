//! Worklist entry rendering.

use crate::worklist::WorklistEntry;
use crate::MwlResult;

/// Render a worklist entry as pretty-printed JSON.
///
/// Output uses two-space indentation and the field order declared on [`WorklistEntry`], so
/// rendering the same entry twice gives identical text.
///
/// # Errors
///
/// Returns [`crate::MwlError::Serialization`] if `serde_json` reports a failure. The entry
/// holds only strings, so this does not happen in practice.
pub fn render(entry: &WorklistEntry) -> MwlResult<String> {
    Ok(serde_json::to_string_pretty(entry)?)
}
