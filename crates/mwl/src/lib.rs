//! # MWL
//!
//! Reshapes one HL7 v2 radiology order message into a DICOM-style Modality Worklist entry.
//!
//! The crate is a fixed, single-purpose mapping:
//! - `extract`: one extractor per input segment (PID, PV1, OBR, OBX, MSH)
//! - `resolve`: picks the requested procedure description (OBX text first, OBR text second)
//! - `assemble`: builds the nested [`WorklistEntry`]
//! - `render` / `channel`: serialise the entry and publish it under `mwlJson`
//!
//! Missing segments, fields and components never fail the transform. They become `""`.
//!
//! **No transport concerns**: parsing HL7 wire text, routing and forwarding the published
//! artifact belong to the caller.

pub mod assemble;
pub mod channel;
pub mod constants;
pub mod extract;
pub mod pipeline;
pub mod render;
pub mod resolve;
pub mod worklist;

pub use assemble::assemble;
pub use channel::ChannelMap;
pub use pipeline::{build_worklist, transform};
pub use render::render;
pub use resolve::{resolve_description, DescriptionSource, Resolution};
pub use worklist::WorklistEntry;

/// Errors returned by the `mwl` crate.
#[derive(Debug, thiserror::Error)]
pub enum MwlError {
    #[error("failed to serialise worklist entry: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Type alias for Results that can fail with an [`MwlError`].
pub type MwlResult<T> = Result<T, MwlError>;
