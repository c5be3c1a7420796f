//! Visit / encounter (PV1).

use super::{fill, Slots};
use crate::constants::PV1;
use hl7::{Location, Message};

/// Output slots of [`VisitExtractor`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisitField {
    PatientClass,
    PointOfCare,
    Room,
    Bed,
    Facility,
    VisitNumber,
    AdmitDateTime,
}

/// Where each visit value is read from.
pub const VISIT_MAP: &[(VisitField, Location)] = &[
    (VisitField::PatientClass, Location::component(PV1, 2, 1)),
    (VisitField::PointOfCare, Location::component(PV1, 3, 1)),
    (VisitField::Room, Location::component(PV1, 3, 2)),
    (VisitField::Bed, Location::component(PV1, 3, 3)),
    (VisitField::Facility, Location::component(PV1, 3, 4)),
    (VisitField::VisitNumber, Location::component(PV1, 15, 1)),
    (VisitField::AdmitDateTime, Location::component(PV1, 39, 1)),
];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisitFields {
    pub patient_class: String,
    pub point_of_care: String,
    pub room: String,
    pub bed: String,
    pub facility: String,
    pub visit_number: String,
    pub admit_date_time: String,
}

impl Slots for VisitFields {
    type Field = VisitField;

    fn slot(&mut self, field: VisitField) -> &mut String {
        match field {
            VisitField::PatientClass => &mut self.patient_class,
            VisitField::PointOfCare => &mut self.point_of_care,
            VisitField::Room => &mut self.room,
            VisitField::Bed => &mut self.bed,
            VisitField::Facility => &mut self.facility,
            VisitField::VisitNumber => &mut self.visit_number,
            VisitField::AdmitDateTime => &mut self.admit_date_time,
        }
    }
}

/// Reads [`VISIT_MAP`] from the PV1 segment.
pub struct VisitExtractor;

impl VisitExtractor {
    pub fn extract(message: &Message) -> VisitFields {
        fill(message, VISIT_MAP)
    }
}
