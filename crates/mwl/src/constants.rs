//! Constants used throughout the MWL crate.
//!
//! Segment names, the fixed scheduled-step values and the channel key of the published
//! artifact live here so the mapping tables and the assembler agree on them.

/// Message header segment.
pub const MSH: &str = "MSH";

/// Patient identification segment.
pub const PID: &str = "PID";

/// Patient visit segment.
pub const PV1: &str = "PV1";

/// Observation request (order) segment.
pub const OBR: &str = "OBR";

/// Observation result segment.
pub const OBX: &str = "OBX";

/// OBX-3 identifier marking free-text requested procedure descriptions.
pub const REQUESTED_PROCEDURE_TEXT_ID: &str = "REQPROCTEXT";

/// Scheduled procedure step modality (computed radiography).
pub const MODALITY: &str = "CR";

/// Scheduled station AE title.
pub const STATION_AE_TITLE: &str = "XRAY_ROOM_3";

/// Channel map key under which the rendered worklist entry is published.
pub const MWL_JSON_KEY: &str = "mwlJson";

/// Separator between the parts of a composed person name.
pub const NAME_SEPARATOR: char = '^';
