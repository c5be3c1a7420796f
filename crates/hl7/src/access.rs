//! Total string accessors for message tree reads.
//!
//! Every leaf read from a message goes through these functions. Missing data is expected at
//! every depth, so absence maps to `""` instead of an error, and every present value has a
//! string form.

use crate::Node;

/// Coerce an optional node to a string.
///
/// - `None` and [`Node::Null`] become `""`
/// - text is returned verbatim
/// - numbers and booleans use their display form
/// - composite nodes join their children in position order with the separator of their
///   level: `|` between fields, `^` between components, `&` between subcomponents
/// - repeated nodes join their repetitions with `~`
pub fn text(node: Option<&Node>) -> String {
    match node {
        None => String::new(),
        Some(Node::Text(value)) => value.clone(),
        Some(node) => node.to_string(),
    }
}

/// Byte order mark, which upstream renderings sometimes leave at the start of a value.
const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Same as [`text`], with leading and trailing whitespace and byte order marks removed.
pub fn trimmed(node: Option<&Node>) -> String {
    text(node)
        .trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK)
        .to_owned()
}
