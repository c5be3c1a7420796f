//! Requested procedure description resolution.
//!
//! Two sources, strict priority, no merging:
//! 1. the OBX `REQPROCTEXT` free text, when non-empty
//! 2. the OBR-4.2 procedure text (itself `""` without OBR)

use crate::extract::{ObservationFields, OrderFields};

/// Which segment the requested procedure description came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DescriptionSource {
    Observation,
    Order,
}

/// The chosen description and where it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub text: String,
    pub source: DescriptionSource,
}

impl Resolution {
    pub fn into_text(self) -> String {
        self.text
    }
}

/// Pick the requested procedure description.
pub fn resolve_description(observation: &ObservationFields, order: &OrderFields) -> Resolution {
    let resolution = if observation.description.is_empty() {
        Resolution {
            text: order.procedure_text.clone(),
            source: DescriptionSource::Order,
        }
    } else {
        Resolution {
            text: observation.description.clone(),
            source: DescriptionSource::Observation,
        }
    };

    tracing::debug!(source = ?resolution.source, "resolved requested procedure description");
    resolution
}
