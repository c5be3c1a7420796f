//! Addresses into a message tree.
//!
//! A [`Location`] names one leaf using the dotted HL7 convention the upstream parser emits:
//! the segment `PID` holds field `PID.5`, which holds component `PID.5.1`, which may in turn
//! hold subcomponent `PID.5.1.1`. Locations are plain `const` values so mapping tables can be
//! declared statically and audited without a message at hand.

use std::fmt;

/// A `(segment, field, component, subcomponent)` address. Positions are 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Location {
    segment: &'static str,
    field: u16,
    component: Option<u16>,
    subcomponent: Option<u16>,
}

impl Location {
    /// Address a whole field, e.g. `PID.3`.
    pub const fn field(segment: &'static str, field: u16) -> Self {
        Self {
            segment,
            field,
            component: None,
            subcomponent: None,
        }
    }

    /// Address one component of a field, e.g. `PID.3.1`.
    pub const fn component(segment: &'static str, field: u16, component: u16) -> Self {
        Self {
            segment,
            field,
            component: Some(component),
            subcomponent: None,
        }
    }

    /// Address one subcomponent, e.g. `OBR.4.2.1`.
    pub const fn subcomponent(
        segment: &'static str,
        field: u16,
        component: u16,
        subcomponent: u16,
    ) -> Self {
        Self {
            segment,
            field,
            component: Some(component),
            subcomponent: Some(subcomponent),
        }
    }

    pub fn segment(&self) -> &'static str {
        self.segment
    }

    /// The keys to follow below the segment node, outermost first.
    ///
    /// `OBR.4.2.1` yields `["OBR.4", "OBR.4.2", "OBR.4.2.1"]`.
    pub fn keys(&self) -> Vec<String> {
        let mut key = format!("{}.{}", self.segment, self.field);
        let mut keys = vec![key.clone()];

        for position in [self.component, self.subcomponent].into_iter().flatten() {
            key = format!("{key}.{position}");
            keys.push(key.clone());
        }

        keys
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.segment, self.field)?;
        if let Some(component) = self.component {
            write!(f, ".{component}")?;
        }
        if let Some(subcomponent) = self.subcomponent {
            write!(f, ".{subcomponent}")?;
        }
        Ok(())
    }
}
