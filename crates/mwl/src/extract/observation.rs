//! Free-text requested procedure description (OBX).

use super::join_text;
use crate::constants::{OBX, REQUESTED_PROCEDURE_TEXT_ID};
use hl7::{Location, Message};

/// OBX-3.1, the observation identifier.
pub const OBSERVATION_TYPE: Location = Location::component(OBX, 3, 1);

/// The two halves of the free-text value (OBX-5.1.1, OBX-5.1.2).
pub const OBSERVATION_TEXT_PARTS: [Location; 2] = [
    Location::subcomponent(OBX, 5, 1, 1),
    Location::subcomponent(OBX, 5, 1, 2),
];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ObservationFields {
    /// OBX-3.1 as read, `""` when OBX was absent.
    pub type_id: String,
    /// Joined free text, only filled for `REQPROCTEXT` observations.
    pub description: String,
}

impl ObservationFields {
    pub fn is_requested_procedure_text(&self) -> bool {
        self.type_id == REQUESTED_PROCEDURE_TEXT_ID
    }
}

/// Reads the OBX segment, if present.
///
/// Only a `REQPROCTEXT` observation contributes a description. Any other identifier yields an
/// empty description whatever OBX-5 holds.
pub struct ObservationExtractor;

impl ObservationExtractor {
    pub fn extract(message: &Message) -> ObservationFields {
        if !message.has_segment(OBX) {
            tracing::trace!("no OBX segment, observation description left empty");
            return ObservationFields::default();
        }

        let mut observation = ObservationFields {
            type_id: message.text(&OBSERVATION_TYPE),
            description: String::new(),
        };
        if observation.is_requested_procedure_text() {
            observation.description = join_text(message, &OBSERVATION_TEXT_PARTS);
        }
        observation
    }
}
