//! Modality Worklist entry wire model.
//!
//! This is the exact JSON shape the modality scheduling consumer reads. Key names and field
//! order are part of that contract: `serde` emits fields in declaration order, so do not
//! reorder them.
//!
//! Every leaf is a `String`. Absent source data is `""`, never a missing key or `null`.

use serde::{Deserialize, Serialize};

/// One scheduled procedure for a modality device.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct WorklistEntry {
    #[serde(rename = "Patient")]
    pub patient: PatientWire,

    #[serde(rename = "Visit")]
    pub visit: VisitWire,

    #[serde(rename = "RequestedProcedure")]
    pub requested_procedure: RequestedProcedureWire,

    #[serde(rename = "Meta")]
    pub meta: MetaWire,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PatientWire {
    #[serde(rename = "PatientID")]
    pub patient_id: String,

    #[serde(rename = "AssigningAuthority")]
    pub assigning_authority: String,

    /// `Last^First^Middle`.
    #[serde(rename = "PatientName")]
    pub patient_name: String,

    #[serde(rename = "PatientSex")]
    pub patient_sex: String,

    #[serde(rename = "PatientBirthDate")]
    pub patient_birth_date: String,

    #[serde(rename = "PatientAddress")]
    pub patient_address: AddressWire,

    #[serde(rename = "PatientPhone")]
    pub patient_phone: String,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct AddressWire {
    #[serde(rename = "Street")]
    pub street: String,

    #[serde(rename = "City")]
    pub city: String,

    #[serde(rename = "State")]
    pub state: String,

    #[serde(rename = "Zip")]
    pub zip: String,

    #[serde(rename = "Country")]
    pub country: String,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct VisitWire {
    #[serde(rename = "PatientClass")]
    pub patient_class: String,

    #[serde(rename = "VisitNumber")]
    pub visit_number: String,

    #[serde(rename = "Location")]
    pub location: LocationWire,

    #[serde(rename = "AdmitDateTime")]
    pub admit_date_time: String,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LocationWire {
    #[serde(rename = "PointOfCare")]
    pub point_of_care: String,

    #[serde(rename = "Room")]
    pub room: String,

    #[serde(rename = "Bed")]
    pub bed: String,

    #[serde(rename = "Facility")]
    pub facility: String,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RequestedProcedureWire {
    /// Reuses the PV1-15 visit number.
    #[serde(rename = "RequestedProcedureID")]
    pub requested_procedure_id: String,

    #[serde(rename = "RequestedProcedureDescription")]
    pub requested_procedure_description: String,

    #[serde(rename = "RequestedProcedureCode")]
    pub requested_procedure_code: ProcedureCodeWire,

    #[serde(rename = "ScheduledProcedureStep")]
    pub scheduled_procedure_step: ScheduledStepWire,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ProcedureCodeWire {
    #[serde(rename = "CodeValue")]
    pub code_value: String,

    /// Always the OBR procedure text, never the OBX override.
    #[serde(rename = "CodeMeaning")]
    pub code_meaning: String,

    #[serde(rename = "CodingSchemeDesignator")]
    pub coding_scheme_designator: String,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ScheduledStepWire {
    #[serde(rename = "StartDateTime")]
    pub start_date_time: String,

    #[serde(rename = "Modality")]
    pub modality: String,

    #[serde(rename = "StationAETitle")]
    pub station_ae_title: String,

    #[serde(rename = "PerformingPhysicianName")]
    pub performing_physician_name: String,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct MetaWire {
    #[serde(rename = "HL7MessageControlId")]
    pub hl7_message_control_id: String,

    #[serde(rename = "CreationDateTime")]
    pub creation_date_time: String,

    #[serde(rename = "SourceSystem")]
    pub source_system: String,

    #[serde(rename = "ReceivingSystem")]
    pub receiving_system: String,

    #[serde(rename = "ObservationDate")]
    pub observation_date: String,
}
