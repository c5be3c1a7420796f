//! The segment -> field -> component tree of one HL7 message.
//!
//! Responsibilities:
//! - Hold the tree exactly as the upstream parser rendered it
//! - Load it from JSON or YAML text
//! - Walk it by key without ever failing on absent branches
//!
//! Notes:
//! - Absent segments, fields and components are normal. Lookups return `None`.
//! - A segment rendered as `null` counts as absent.

use crate::{Hl7Error, Hl7Result, Location};
use serde::Deserialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

/// HL7 field separator, used when a whole segment is read as a single value.
const FIELD_SEPARATOR: &str = "|";

/// HL7 component separator, used when a field is read as a single value.
const COMPONENT_SEPARATOR: &str = "^";

/// HL7 subcomponent separator, used when a component is read as a single value.
const SUBCOMPONENT_SEPARATOR: &str = "&";

/// HL7 repetition separator, used when a repeated node is read as a single value.
const REPETITION_SEPARATOR: &str = "~";

/// One value in a message tree.
///
/// Upstream renderings are loosely typed: most leaves are text, but numbers and booleans do
/// appear, and repeated fields arrive as lists.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    Repeated(Vec<Node>),
    Composite(BTreeMap<String, Node>),
}

impl Node {
    /// Build a text leaf.
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text(value.into())
    }

    /// Build a composite node from `(key, child)` pairs.
    pub fn composite<K: Into<String>>(children: impl IntoIterator<Item = (K, Node)>) -> Self {
        Node::Composite(
            children
                .into_iter()
                .map(|(key, child)| (key.into(), child))
                .collect(),
        )
    }

    /// Look up a named child.
    ///
    /// Leaves have no children. A repeated node is read through its first repetition.
    pub fn child(&self, key: &str) -> Option<&Node> {
        match self {
            Node::Composite(children) => children.get(key),
            Node::Repeated(repetitions) => repetitions.first().and_then(|r| r.child(key)),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Node::Null)
    }
}

/// Sort position of a dotted key (`PID.5.10` -> 10). Keys without one sort last.
fn position(key: &str) -> Option<u32> {
    key.rsplit('.').next().and_then(|last| last.parse().ok())
}

/// Separator between children keyed like `key`.
///
/// `PID.5` is a field of a segment, `PID.5.1` a component of a field, `OBR.4.2.1` a
/// subcomponent of a component.
fn separator_for(key: &str) -> &'static str {
    match key.matches('.').count() {
        1 => FIELD_SEPARATOR,
        0 | 2 => COMPONENT_SEPARATOR,
        _ => SUBCOMPONENT_SEPARATOR,
    }
}

fn by_position(a: &str, b: &str) -> Ordering {
    let pa = position(a).unwrap_or(u32::MAX);
    let pb = position(b).unwrap_or(u32::MAX);
    pa.cmp(&pb).then_with(|| a.cmp(b))
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Null => Ok(()),
            Node::Bool(value) => write!(f, "{value}"),
            Node::Integer(value) => write!(f, "{value}"),
            Node::Float(value) => write!(f, "{value}"),
            Node::Text(value) => f.write_str(value),
            Node::Repeated(repetitions) => {
                for (i, repetition) in repetitions.iter().enumerate() {
                    if i > 0 {
                        f.write_str(REPETITION_SEPARATOR)?;
                    }
                    write!(f, "{repetition}")?;
                }
                Ok(())
            }
            Node::Composite(children) => {
                let mut ordered: Vec<(&String, &Node)> = children.iter().collect();
                ordered.sort_by(|(a, _), (b, _)| by_position(a, b));

                let separator = ordered
                    .first()
                    .map_or(COMPONENT_SEPARATOR, |(key, _)| separator_for(key));

                for (i, (_, child)) in ordered.into_iter().enumerate() {
                    if i > 0 {
                        f.write_str(separator)?;
                    }
                    write!(f, "{child}")?;
                }
                Ok(())
            }
        }
    }
}

/// A whole message: segment name -> segment node.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Message {
    segments: BTreeMap<String, Node>,
}

impl Message {
    /// Build a message from `(segment name, node)` pairs.
    pub fn from_segments<K: Into<String>>(segments: impl IntoIterator<Item = (K, Node)>) -> Self {
        Self {
            segments: segments
                .into_iter()
                .map(|(name, node)| (name.into(), node))
                .collect(),
        }
    }

    /// Parse a message tree from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`Hl7Error`] if the text is not JSON or its top level is not a mapping.
    pub fn from_json_str(json_text: &str) -> Hl7Result<Self> {
        let mut deserializer = serde_json::Deserializer::from_str(json_text);
        let message: Self =
            serde_path_to_error::deserialize(&mut deserializer).map_err(mismatch)?;
        deserializer.end()?;
        Ok(message)
    }

    /// Parse a message tree from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`Hl7Error`] if the text is not YAML or its top level is not a mapping.
    pub fn from_yaml_str(yaml_text: &str) -> Hl7Result<Self> {
        let deserializer = serde_yaml::Deserializer::from_str(yaml_text);
        serde_path_to_error::deserialize(deserializer).map_err(mismatch)
    }

    pub fn segment(&self, name: &str) -> Option<&Node> {
        self.segments.get(name)
    }

    /// Whether the segment exists and is not `null`.
    pub fn has_segment(&self, name: &str) -> bool {
        self.segment(name).is_some_and(|node| !node.is_null())
    }

    pub fn segment_names(&self) -> impl Iterator<Item = &str> {
        self.segments.keys().map(String::as_str)
    }

    /// Walk to the node at `location`, if every level along the way exists.
    pub fn resolve(&self, location: &Location) -> Option<&Node> {
        let mut node = self.segment(location.segment())?;
        for key in location.keys() {
            node = node.child(&key)?;
        }
        Some(node)
    }

    /// Read `location` as a string. See [`crate::text`].
    pub fn text(&self, location: &Location) -> String {
        crate::text(self.resolve(location))
    }

    /// Read `location` as a whitespace-trimmed string. See [`crate::trimmed`].
    pub fn trimmed(&self, location: &Location) -> String {
        crate::trimmed(self.resolve(location))
    }
}

fn mismatch<E: fmt::Display>(err: serde_path_to_error::Error<E>) -> Hl7Error {
    let path = err.path().to_string();
    let source = err.into_inner();
    let path = if path.is_empty() || path == "." {
        "<root>"
    } else {
        path.as_str()
    };
    Hl7Error::Translation(format!("message tree mismatch at {path}: {source}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PID_JSON: &str = r#"{
  "PID": {
    "PID.3": { "PID.3.1": "98765432", "PID.3.4": "HOSPITAL1" },
    "PID.5": { "PID.5.1": "DOE", "PID.5.2": "JANE", "PID.5.3": "MARIE" }
  },
  "OBX": null
}"#;

    #[test]
    fn parses_json_tree() {
        let message = Message::from_json_str(PID_JSON).expect("parse json");
        let node = message
            .resolve(&Location::component("PID", 3, 1))
            .expect("PID.3.1 present");
        assert_eq!(node, &Node::text("98765432"));
    }

    #[test]
    fn parses_yaml_tree() {
        let input = r#"PID:
  PID.8:
    PID.8.1: F
  PID.11:
    PID.11.5: "07104"
"#;
        let message = Message::from_yaml_str(input).expect("parse yaml");
        assert_eq!(message.text(&Location::component("PID", 8, 1)), "F");
        assert_eq!(message.text(&Location::component("PID", 11, 5)), "07104");
    }

    #[test]
    fn null_segment_counts_as_absent() {
        let message = Message::from_json_str(PID_JSON).expect("parse json");
        assert!(message.has_segment("PID"));
        assert!(!message.has_segment("OBX"));
        assert!(!message.has_segment("OBR"));
        assert_eq!(message.segment_names().collect::<Vec<_>>(), vec!["OBX", "PID"]);
    }

    #[test]
    fn resolve_returns_none_at_any_missing_level() {
        let message = Message::from_json_str(PID_JSON).expect("parse json");
        assert!(message.resolve(&Location::component("PV1", 2, 1)).is_none());
        assert!(message.resolve(&Location::component("PID", 7, 1)).is_none());
        assert!(message.resolve(&Location::component("PID", 3, 9)).is_none());
        assert!(message
            .resolve(&Location::subcomponent("PID", 3, 1, 1))
            .is_none());
    }

    #[test]
    fn repeated_field_reads_first_repetition() {
        let input = r#"{ "PID": { "PID.13": [
            { "PID.13.1": "(973)555-3421" },
            { "PID.13.1": "(973)555-0000" }
        ] } }"#;
        let message = Message::from_json_str(input).expect("parse json");
        assert_eq!(message.text(&Location::component("PID", 13, 1)), "(973)555-3421");
    }

    #[test]
    fn numbers_and_booleans_are_accepted() {
        let input = r#"{ "PV1": {
            "PV1.39": { "PV1.39.1": 20250201103000 },
            "PV1.2": { "PV1.2.1": true }
        } }"#;
        let message = Message::from_json_str(input).expect("parse json");
        assert_eq!(message.text(&Location::component("PV1", 39, 1)), "20250201103000");
        assert_eq!(message.text(&Location::component("PV1", 2, 1)), "true");
    }

    #[test]
    fn composite_displays_components_in_position_order() {
        let node = Node::composite([
            ("PID.5.10", Node::text("J")),
            ("PID.5.2", Node::text("JANE")),
            ("PID.5.1", Node::text("DOE")),
        ]);
        assert_eq!(node.to_string(), "DOE^JANE^J");
    }

    #[test]
    fn component_displays_subcomponents_with_ampersand() {
        let node = Node::composite([
            ("OBR.4.2.2", Node::text("LAT")),
            ("OBR.4.2.1", Node::text("Chest X-Ray PA")),
        ]);
        assert_eq!(node.to_string(), "Chest X-Ray PA&LAT");
    }

    #[test]
    fn nested_field_uses_separator_per_level() {
        let node = Node::composite([
            ("OBR.4.1", Node::text("XRCHEST")),
            (
                "OBR.4.2",
                Node::composite([
                    ("OBR.4.2.1", Node::text("Chest")),
                    ("OBR.4.2.2", Node::text("LAT")),
                ]),
            ),
            ("OBR.4.3", Node::text("L")),
        ]);
        assert_eq!(node.to_string(), "XRCHEST^Chest&LAT^L");
    }

    #[test]
    fn segment_displays_fields_with_pipe() {
        let node = Node::composite([
            ("PID.8", Node::composite([("PID.8.1", Node::text("F"))])),
            ("PID.7", Node::composite([("PID.7.1", Node::text("19870412"))])),
        ]);
        assert_eq!(node.to_string(), "19870412|F");
    }

    #[test]
    fn repeated_displays_with_repetition_separator() {
        let node = Node::Repeated(vec![Node::text("A"), Node::Null, Node::Integer(3)]);
        assert_eq!(node.to_string(), "A~~3");
    }

    #[test]
    fn rejects_non_mapping_top_level() {
        let err = Message::from_json_str(r#"["PID"]"#).expect_err("should reject array");
        match err {
            Hl7Error::Translation(msg) => assert!(msg.contains("message tree mismatch")),
            other => panic!("expected Translation error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_trailing_json() {
        let err = Message::from_json_str(r#"{ "PID": {} } extra"#).expect_err("should reject");
        assert!(matches!(err, Hl7Error::InvalidJson(_)));
    }

    #[test]
    fn rejects_malformed_yaml() {
        let err = Message::from_yaml_str("PID: [unclosed").expect_err("should reject");
        assert!(matches!(err, Hl7Error::Translation(_)));
    }
}
