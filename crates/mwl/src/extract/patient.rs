//! Patient demographics (PID).

use super::{compose_name, fill, Slots};
use crate::constants::PID;
use hl7::{Location, Message};

/// Output slots of [`PatientExtractor`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PatientField {
    Id,
    AssigningAuthority,
    LastName,
    FirstName,
    MiddleName,
    BirthDate,
    Sex,
    Street,
    City,
    State,
    Zip,
    Country,
    Phone,
}

/// Where each patient value is read from.
pub const PATIENT_MAP: &[(PatientField, Location)] = &[
    (PatientField::Id, Location::component(PID, 3, 1)),
    (PatientField::AssigningAuthority, Location::component(PID, 3, 4)),
    (PatientField::LastName, Location::component(PID, 5, 1)),
    (PatientField::FirstName, Location::component(PID, 5, 2)),
    (PatientField::MiddleName, Location::component(PID, 5, 3)),
    (PatientField::BirthDate, Location::component(PID, 7, 1)),
    (PatientField::Sex, Location::component(PID, 8, 1)),
    (PatientField::Street, Location::component(PID, 11, 1)),
    (PatientField::City, Location::component(PID, 11, 3)),
    (PatientField::State, Location::component(PID, 11, 4)),
    (PatientField::Zip, Location::component(PID, 11, 5)),
    (PatientField::Country, Location::component(PID, 11, 6)),
    (PatientField::Phone, Location::component(PID, 13, 1)),
];

/// Flat patient demographics.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PatientFields {
    pub id: String,
    pub assigning_authority: String,
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
    pub birth_date: String,
    pub sex: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
    pub phone: String,
}

impl PatientFields {
    /// Patient name as `Last^First^Middle`.
    pub fn name(&self) -> String {
        compose_name(&self.last_name, &self.first_name, &self.middle_name)
    }
}

impl Slots for PatientFields {
    type Field = PatientField;

    fn slot(&mut self, field: PatientField) -> &mut String {
        match field {
            PatientField::Id => &mut self.id,
            PatientField::AssigningAuthority => &mut self.assigning_authority,
            PatientField::LastName => &mut self.last_name,
            PatientField::FirstName => &mut self.first_name,
            PatientField::MiddleName => &mut self.middle_name,
            PatientField::BirthDate => &mut self.birth_date,
            PatientField::Sex => &mut self.sex,
            PatientField::Street => &mut self.street,
            PatientField::City => &mut self.city,
            PatientField::State => &mut self.state,
            PatientField::Zip => &mut self.zip,
            PatientField::Country => &mut self.country,
            PatientField::Phone => &mut self.phone,
        }
    }
}

/// Reads [`PATIENT_MAP`] from the PID segment.
///
/// PID is expected on every message, but a missing segment still yields empty strings.
pub struct PatientExtractor;

impl PatientExtractor {
    pub fn extract(message: &Message) -> PatientFields {
        fill(message, PATIENT_MAP)
    }
}
