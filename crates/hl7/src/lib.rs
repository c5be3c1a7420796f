//! HL7 v2 message tree support for the worklist transform.
//!
//! This crate provides the **read-only input model** consumed by the `mwl` crate:
//! - a segment -> field -> component tree, as produced by an upstream HL7 parser
//! - `const` addresses into that tree using dotted HL7 key names (`PID.3.1`)
//! - a total accessor that turns any (possibly absent) node into a string
//!
//! This crate does NOT parse pipe-delimited HL7 wire text. Trees are loaded from the JSON or
//! YAML rendering an upstream interface engine already produced.

pub mod access;
pub mod location;
pub mod tree;

pub use access::{text, trimmed};
pub use location::Location;
pub use tree::{Message, Node};

/// Errors returned by the `hl7` crate.
///
/// Only loading a tree can fail. Reading from a loaded tree never does.
#[derive(Debug, thiserror::Error)]
pub enum Hl7Error {
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("translation error: {0}")]
    Translation(String),
}

/// Type alias for Results that can fail with an [`Hl7Error`].
pub type Hl7Result<T> = Result<T, Hl7Error>;
