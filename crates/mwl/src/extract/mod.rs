//! Segment extractors.
//!
//! Each extractor reads a fixed, declared list of locations from one segment and returns a
//! flat struct of strings. The lists are `const` tables (`PATIENT_MAP`, `VISIT_MAP`, ...) so
//! the mapping can be read and tested without running a message through it.

pub mod header;
pub mod observation;
pub mod order;
pub mod patient;
pub mod visit;

pub use header::{HeaderExtractor, HeaderFields};
pub use observation::{ObservationExtractor, ObservationFields};
pub use order::{OrderExtractor, OrderFields};
pub use patient::{PatientExtractor, PatientFields};
pub use visit::{VisitExtractor, VisitFields};

use crate::constants::NAME_SEPARATOR;
use hl7::{Location, Message};

/// The outputs of every extractor for one message.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Extracted {
    pub patient: PatientFields,
    pub visit: VisitFields,
    pub order: OrderFields,
    pub observation: ObservationFields,
    pub header: HeaderFields,
}

impl Extracted {
    /// Run every extractor over `message`.
    pub fn from_message(message: &Message) -> Self {
        Self {
            patient: PatientExtractor::extract(message),
            visit: VisitExtractor::extract(message),
            order: OrderExtractor::extract(message),
            observation: ObservationExtractor::extract(message),
            header: HeaderExtractor::extract(message),
        }
    }
}

/// A flat extractor output whose string slots are addressed by a field enum.
pub(crate) trait Slots: Default {
    type Field: Copy;

    fn slot(&mut self, field: Self::Field) -> &mut String;
}

/// Copy every `(field, location)` pair of `table` out of `message`.
pub(crate) fn fill<T: Slots>(message: &Message, table: &[(T::Field, Location)]) -> T {
    let mut out = T::default();
    for (field, location) in table {
        *out.slot(*field) = message.text(location);
    }
    out
}

/// Compose an HL7 person name as `Last^First^Middle`.
///
/// Empty parts keep their slot, so `("DOE", "", "")` gives `DOE^^`. Nothing is trimmed.
pub fn compose_name(last: &str, first: &str, middle: &str) -> String {
    let mut name = String::with_capacity(last.len() + first.len() + middle.len() + 2);
    name.push_str(last);
    name.push(NAME_SEPARATOR);
    name.push_str(first);
    name.push(NAME_SEPARATOR);
    name.push_str(middle);
    name
}

/// Read two free-text parts, trim each, join them with one space and trim the result.
///
/// The final trim drops the joining space when either part is empty.
pub fn join_text(message: &Message, parts: &[Location; 2]) -> String {
    let first = message.trimmed(&parts[0]);
    let second = message.trimmed(&parts[1]);
    format!("{first} {second}").trim().to_owned()
}
