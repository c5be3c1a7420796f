//! Ordering physician, procedure and scheduling (OBR).
//!
//! OBR is optional. Without it every order value is `""`, including the composed physician
//! name, so downstream code cannot tell "absent" from "empty".

use super::{compose_name, fill, join_text, Slots};
use crate::constants::OBR;
use hl7::{Location, Message};

/// Output slots of [`OrderExtractor`] copied straight from the segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrderField {
    PhysicianId,
    PhysicianLastName,
    PhysicianFirstName,
    PhysicianMiddleName,
    ProcedureCode,
    CodingScheme,
    ScheduledStart,
    ObservationDate,
}

/// Where each order value is read from.
///
/// The observation date comes from OBR-23.4, not from the OBR-7 scheduling timestamp.
pub const ORDER_MAP: &[(OrderField, Location)] = &[
    (OrderField::PhysicianId, Location::component(OBR, 14, 1)),
    (OrderField::PhysicianLastName, Location::component(OBR, 14, 2)),
    (OrderField::PhysicianFirstName, Location::component(OBR, 14, 3)),
    (OrderField::PhysicianMiddleName, Location::component(OBR, 14, 4)),
    (OrderField::ProcedureCode, Location::component(OBR, 4, 1)),
    (OrderField::CodingScheme, Location::component(OBR, 4, 3)),
    (OrderField::ScheduledStart, Location::component(OBR, 7, 1)),
    (OrderField::ObservationDate, Location::component(OBR, 23, 4)),
];

/// The two halves of the procedure description (OBR-4.2.1, OBR-4.2.2).
pub const ORDER_TEXT_PARTS: [Location; 2] = [
    Location::subcomponent(OBR, 4, 2, 1),
    Location::subcomponent(OBR, 4, 2, 2),
];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrderFields {
    /// Whether the message carried an OBR segment at all.
    pub present: bool,
    pub physician_id: String,
    pub physician_last_name: String,
    pub physician_first_name: String,
    pub physician_middle_name: String,
    pub procedure_code: String,
    /// Procedure description parts, trimmed and joined with one space.
    pub procedure_text: String,
    pub coding_scheme: String,
    pub scheduled_start: String,
    pub observation_date: String,
}

impl OrderFields {
    /// Ordering physician as `Last^First^Middle`, or `""` when OBR was absent.
    pub fn physician_name(&self) -> String {
        if !self.present {
            return String::new();
        }
        compose_name(
            &self.physician_last_name,
            &self.physician_first_name,
            &self.physician_middle_name,
        )
    }
}

impl Slots for OrderFields {
    type Field = OrderField;

    fn slot(&mut self, field: OrderField) -> &mut String {
        match field {
            OrderField::PhysicianId => &mut self.physician_id,
            OrderField::PhysicianLastName => &mut self.physician_last_name,
            OrderField::PhysicianFirstName => &mut self.physician_first_name,
            OrderField::PhysicianMiddleName => &mut self.physician_middle_name,
            OrderField::ProcedureCode => &mut self.procedure_code,
            OrderField::CodingScheme => &mut self.coding_scheme,
            OrderField::ScheduledStart => &mut self.scheduled_start,
            OrderField::ObservationDate => &mut self.observation_date,
        }
    }
}

/// Reads [`ORDER_MAP`] and [`ORDER_TEXT_PARTS`] from the OBR segment, if present.
pub struct OrderExtractor;

impl OrderExtractor {
    pub fn extract(message: &Message) -> OrderFields {
        if !message.has_segment(OBR) {
            tracing::trace!("no OBR segment, order values left empty");
            return OrderFields::default();
        }

        let mut order: OrderFields = fill(message, ORDER_MAP);
        order.present = true;
        order.procedure_text = join_text(message, &ORDER_TEXT_PARTS);
        order
    }
}
