//! Message header (MSH).

use super::{fill, Slots};
use crate::constants::MSH;
use hl7::{Location, Message};

/// Output slots of [`HeaderExtractor`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderField {
    MessageControlId,
    CreationDateTime,
    SourceSystem,
    ReceivingSystem,
}

/// Where each header value is read from.
pub const HEADER_MAP: &[(HeaderField, Location)] = &[
    (HeaderField::MessageControlId, Location::component(MSH, 10, 1)),
    (HeaderField::CreationDateTime, Location::component(MSH, 7, 1)),
    (HeaderField::SourceSystem, Location::component(MSH, 3, 1)),
    (HeaderField::ReceivingSystem, Location::component(MSH, 5, 1)),
];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeaderFields {
    pub message_control_id: String,
    pub creation_date_time: String,
    pub source_system: String,
    pub receiving_system: String,
}

impl Slots for HeaderFields {
    type Field = HeaderField;

    fn slot(&mut self, field: HeaderField) -> &mut String {
        match field {
            HeaderField::MessageControlId => &mut self.message_control_id,
            HeaderField::CreationDateTime => &mut self.creation_date_time,
            HeaderField::SourceSystem => &mut self.source_system,
            HeaderField::ReceivingSystem => &mut self.receiving_system,
        }
    }
}

pub struct HeaderExtractor;

impl HeaderExtractor {
    pub fn extract(message: &Message) -> HeaderFields {
        fill(message, HEADER_MAP)
    }
}
