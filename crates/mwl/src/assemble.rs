//! Worklist entry assembly.
//!
//! A total function from extractor outputs to the nested [`WorklistEntry`]. No validation
//! happens here; empty inputs give an entry with the same shape and empty leaves.

use crate::constants::{MODALITY, STATION_AE_TITLE};
use crate::extract::Extracted;
use crate::worklist::{
    AddressWire, LocationWire, MetaWire, PatientWire, ProcedureCodeWire, RequestedProcedureWire,
    ScheduledStepWire, VisitWire, WorklistEntry,
};

/// Build the worklist entry.
///
/// # Arguments
///
/// * `extracted` - Outputs of every segment extractor for one message.
/// * `description` - The resolved requested procedure description.
pub fn assemble(extracted: &Extracted, description: String) -> WorklistEntry {
    let Extracted {
        patient,
        visit,
        order,
        observation: _,
        header,
    } = extracted;

    WorklistEntry {
        patient: PatientWire {
            patient_id: patient.id.clone(),
            assigning_authority: patient.assigning_authority.clone(),
            patient_name: patient.name(),
            patient_sex: patient.sex.clone(),
            patient_birth_date: patient.birth_date.clone(),
            patient_address: AddressWire {
                street: patient.street.clone(),
                city: patient.city.clone(),
                state: patient.state.clone(),
                zip: patient.zip.clone(),
                country: patient.country.clone(),
            },
            patient_phone: patient.phone.clone(),
        },
        visit: VisitWire {
            patient_class: visit.patient_class.clone(),
            visit_number: visit.visit_number.clone(),
            location: LocationWire {
                point_of_care: visit.point_of_care.clone(),
                room: visit.room.clone(),
                bed: visit.bed.clone(),
                facility: visit.facility.clone(),
            },
            admit_date_time: visit.admit_date_time.clone(),
        },
        requested_procedure: RequestedProcedureWire {
            requested_procedure_id: visit.visit_number.clone(),
            requested_procedure_description: description,
            requested_procedure_code: ProcedureCodeWire {
                code_value: order.procedure_code.clone(),
                code_meaning: order.procedure_text.clone(),
                coding_scheme_designator: order.coding_scheme.clone(),
            },
            scheduled_procedure_step: ScheduledStepWire {
                start_date_time: order.scheduled_start.clone(),
                modality: MODALITY.to_owned(),
                station_ae_title: STATION_AE_TITLE.to_owned(),
                performing_physician_name: order.physician_name(),
            },
        },
        meta: MetaWire {
            hl7_message_control_id: header.message_control_id.clone(),
            creation_date_time: header.creation_date_time.clone(),
            source_system: header.source_system.clone(),
            receiving_system: header.receiving_system.clone(),
            observation_date: order.observation_date.clone(),
        },
    }
}
