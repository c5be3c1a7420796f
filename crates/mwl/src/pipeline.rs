//! The whole transform for one message.
//!
//! Extract every segment, resolve the requested procedure description, assemble the entry,
//! render it and publish it under [`MWL_JSON_KEY`]. The caller gets the input message back
//! unchanged as the signal to keep processing it.

use crate::constants::MWL_JSON_KEY;
use crate::extract::Extracted;
use crate::{assemble, render, resolve_description, ChannelMap, MwlResult, WorklistEntry};
use hl7::Message;

/// Build the worklist entry for `message` without publishing it.
pub fn build_worklist(message: &Message) -> WorklistEntry {
    let extracted = Extracted::from_message(message);
    let description = resolve_description(&extracted.observation, &extracted.order).into_text();
    assemble(&extracted, description)
}

/// Transform `message` and publish the rendered entry into `channel` under `mwlJson`.
///
/// Missing data never fails this call; it produces empty strings in the entry.
///
/// # Returns
///
/// The input message, untouched.
///
/// # Errors
///
/// Returns [`crate::MwlError`] only if rendering fails.
pub fn transform<'m>(message: &'m Message, channel: &mut ChannelMap) -> MwlResult<&'m Message> {
    let entry = build_worklist(message);
    let rendered = render(&entry)?;

    if channel.put(MWL_JSON_KEY, rendered).is_some() {
        tracing::debug!("replaced existing {MWL_JSON_KEY} channel value");
    }
    tracing::debug!(
        control_id = %entry.meta.hl7_message_control_id,
        "published worklist entry"
    );

    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORM_JSON: &str = r#"{
  "MSH": {
    "MSH.3": { "MSH.3.1": "RIS" },
    "MSH.5": { "MSH.5.1": "PACS" },
    "MSH.7": { "MSH.7.1": "20250201104500" },
    "MSH.10": { "MSH.10.1": "MSG00001" }
  },
  "PID": {
    "PID.3": { "PID.3.1": "98765432", "PID.3.4": "HOSPITAL1" },
    "PID.5": { "PID.5.1": "DOE", "PID.5.2": "JANE", "PID.5.3": "MARIE" },
    "PID.7": { "PID.7.1": "19870412" },
    "PID.8": { "PID.8.1": "F" },
    "PID.11": {
      "PID.11.1": "123 BLUEBIRD LN",
      "PID.11.3": "NEWARK",
      "PID.11.4": "NJ",
      "PID.11.5": "07104",
      "PID.11.6": "USA"
    },
    "PID.13": { "PID.13.1": "(973)555-3421" }
  },
  "PV1": {
    "PV1.2": { "PV1.2.1": "O" },
    "PV1.3": { "PV1.3.1": "RAD", "PV1.3.2": "RM3", "PV1.3.3": "B1", "PV1.3.4": "HOSPITAL1" },
    "PV1.15": { "PV1.15.1": "VST4321987" },
    "PV1.39": { "PV1.39.1": "20250201103000" }
  },
  "ORC": {
    "ORC.1": { "ORC.1.1": "NW" }
  },
  "OBR": {
    "OBR.4": {
      "OBR.4.1": "XRCHEST",
      "OBR.4.2": { "OBR.4.2.1": "Chest X-Ray PA ", "OBR.4.2.2": "LAT" },
      "OBR.4.3": "L"
    },
    "OBR.7": { "OBR.7.1": "20250201113000" },
    "OBR.14": { "OBR.14.1": "1234", "OBR.14.2": "SMITH", "OBR.14.3": "JOHN", "OBR.14.4": "A" },
    "OBR.23": { "OBR.23.4": "20250201" }
  }
}"#;

    const EXPECTED_MWL_JSON: &str = r#"{
  "Patient": {
    "PatientID": "98765432",
    "AssigningAuthority": "HOSPITAL1",
    "PatientName": "DOE^JANE^MARIE",
    "PatientSex": "F",
    "PatientBirthDate": "19870412",
    "PatientAddress": {
      "Street": "123 BLUEBIRD LN",
      "City": "NEWARK",
      "State": "NJ",
      "Zip": "07104",
      "Country": "USA"
    },
    "PatientPhone": "(973)555-3421"
  },
  "Visit": {
    "PatientClass": "O",
    "VisitNumber": "VST4321987",
    "Location": {
      "PointOfCare": "RAD",
      "Room": "RM3",
      "Bed": "B1",
      "Facility": "HOSPITAL1"
    },
    "AdmitDateTime": "20250201103000"
  },
  "RequestedProcedure": {
    "RequestedProcedureID": "VST4321987",
    "RequestedProcedureDescription": "Chest X-Ray PA LAT",
    "RequestedProcedureCode": {
      "CodeValue": "XRCHEST",
      "CodeMeaning": "Chest X-Ray PA LAT",
      "CodingSchemeDesignator": "L"
    },
    "ScheduledProcedureStep": {
      "StartDateTime": "20250201113000",
      "Modality": "CR",
      "StationAETitle": "XRAY_ROOM_3",
      "PerformingPhysicianName": "SMITH^JOHN^A"
    }
  },
  "Meta": {
    "HL7MessageControlId": "MSG00001",
    "CreationDateTime": "20250201104500",
    "SourceSystem": "RIS",
    "ReceivingSystem": "PACS",
    "ObservationDate": "20250201"
  }
}"#;

    fn sample() -> Message {
        Message::from_json_str(ORM_JSON).expect("parse sample")
    }

    fn with_segment(json: &str) -> Message {
        let mut value: serde_json::Value = serde_json::from_str(ORM_JSON).expect("sample json");
        let extra: serde_json::Value = serde_json::from_str(json).expect("extra json");
        if let (Some(target), Some(source)) = (value.as_object_mut(), extra.as_object()) {
            for (name, segment) in source {
                target.insert(name.clone(), segment.clone());
            }
        }
        Message::from_json_str(&value.to_string()).expect("parse merged sample")
    }

    fn without_segment(name: &str) -> Message {
        let mut value: serde_json::Value = serde_json::from_str(ORM_JSON).expect("sample json");
        if let Some(target) = value.as_object_mut() {
            target.remove(name);
        }
        Message::from_json_str(&value.to_string()).expect("parse trimmed sample")
    }

    fn observation(type_id: &str, first: &str, second: &str) -> String {
        format!(
            r#"{{ "OBX": {{
                "OBX.3": {{ "OBX.3.1": "{type_id}" }},
                "OBX.5": {{ "OBX.5.1": {{ "OBX.5.1.1": "{first}", "OBX.5.1.2": "{second}" }} }}
            }} }}"#
        )
    }

    #[test]
    fn publishes_exact_worklist_json() {
        let message = sample();
        let mut channel = ChannelMap::new();

        let returned = transform(&message, &mut channel).expect("transform sample");

        assert!(std::ptr::eq(returned, &message));
        assert_eq!(channel.get(MWL_JSON_KEY), Some(EXPECTED_MWL_JSON));

        let mut expected = ChannelMap::new();
        expected.put(MWL_JSON_KEY, EXPECTED_MWL_JSON);
        assert_eq!(channel, expected);
    }

    #[test]
    fn order_text_used_without_observation() {
        let entry = build_worklist(&sample());
        assert_eq!(entry.patient.patient_name, "DOE^JANE^MARIE");
        assert_eq!(
            entry.requested_procedure.requested_procedure_description,
            "Chest X-Ray PA LAT"
        );
    }

    #[test]
    fn requested_procedure_text_observation_overrides_order_text() {
        let message = with_segment(&observation("REQPROCTEXT", "Chest X-Ray PA ", " Lateral"));
        let entry = build_worklist(&message);

        let procedure = &entry.requested_procedure;
        assert_eq!(procedure.requested_procedure_description, "Chest X-Ray PA Lateral");
        assert_eq!(procedure.requested_procedure_code.code_meaning, "Chest X-Ray PA LAT");
    }

    #[test]
    fn other_observation_falls_back_to_order_text() {
        let message = with_segment(&observation("IMPRESSION", "Pneumonia", "suspected"));
        let entry = build_worklist(&message);
        assert_eq!(
            entry.requested_procedure.requested_procedure_description,
            "Chest X-Ray PA LAT"
        );
    }

    #[test]
    fn blank_requested_procedure_text_falls_back_to_order_text() {
        let message = with_segment(&observation("REQPROCTEXT", " ", " "));
        let entry = build_worklist(&message);
        assert_eq!(
            entry.requested_procedure.requested_procedure_description,
            "Chest X-Ray PA LAT"
        );
    }

    #[test]
    fn missing_order_empties_order_values() {
        let entry = build_worklist(&without_segment("OBR"));

        let procedure = &entry.requested_procedure;
        assert_eq!(procedure.requested_procedure_description, "");
        assert_eq!(procedure.requested_procedure_code.code_value, "");
        assert_eq!(procedure.requested_procedure_code.code_meaning, "");
        assert_eq!(procedure.requested_procedure_code.coding_scheme_designator, "");
        assert_eq!(procedure.scheduled_procedure_step.start_date_time, "");
        assert_eq!(procedure.scheduled_procedure_step.performing_physician_name, "");
        assert_eq!(procedure.scheduled_procedure_step.modality, "CR");
        assert_eq!(entry.meta.observation_date, "");
        assert_eq!(procedure.requested_procedure_id, "VST4321987");
    }

    #[test]
    fn missing_order_still_uses_observation_text() {
        let mut value: serde_json::Value =
            serde_json::from_str(&observation("REQPROCTEXT", "Chest", "PA")).expect("json");
        if let Some(segments) = value.as_object_mut() {
            segments.insert(
                "PID".into(),
                serde_json::json!({ "PID.3": { "PID.3.1": "98765432" } }),
            );
        }
        let message = Message::from_json_str(&value.to_string()).expect("parse message");
        let entry = build_worklist(&message);

        assert_eq!(entry.patient.patient_id, "98765432");
        assert_eq!(entry.requested_procedure.requested_procedure_description, "Chest PA");
    }

    #[test]
    fn empty_message_gives_full_shape() {
        let mut channel = ChannelMap::new();
        transform(&Message::default(), &mut channel).expect("transform empty message");

        let rendered = channel.get(MWL_JSON_KEY).expect("published");
        let entry: WorklistEntry = serde_json::from_str(rendered).expect("strict parse");
        assert_eq!(entry.patient.patient_name, "^^");
        assert_eq!(entry.patient.patient_id, "");
        assert_eq!(entry.visit.location.facility, "");
        assert_eq!(
            entry.requested_procedure.scheduled_procedure_step.station_ae_title,
            "XRAY_ROOM_3"
        );
        assert_eq!(entry.meta.hl7_message_control_id, "");
    }

    #[test]
    fn shape_does_not_depend_on_input() {
        fn keys(value: &serde_json::Value, prefix: &str, out: &mut Vec<String>) {
            if let Some(object) = value.as_object() {
                for (key, child) in object {
                    let path = format!("{prefix}/{key}");
                    out.push(path.clone());
                    keys(child, &path, out);
                }
            }
        }

        let full = serde_json::to_value(build_worklist(&sample())).expect("to value");
        let empty = serde_json::to_value(build_worklist(&Message::default())).expect("to value");

        let (mut full_keys, mut empty_keys) = (Vec::new(), Vec::new());
        keys(&full, "", &mut full_keys);
        keys(&empty, "", &mut empty_keys);
        assert_eq!(full_keys, empty_keys);
    }

    #[test]
    fn transform_is_deterministic() {
        let message = sample();
        let (mut first, mut second) = (ChannelMap::new(), ChannelMap::new());
        transform(&message, &mut first).expect("first run");
        transform(&message, &mut second).expect("second run");
        assert_eq!(first, second);
    }
}
