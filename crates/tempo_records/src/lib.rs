//! Typed schemas for the records returned by the Tempo API.
//!
//! Every field is optional. Construction is lenient: absent fields, explicit
//! `null`s and values of the wrong JSON type all become `None` instead of
//! failing the whole record.

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

mod lenient;
pub mod event;
pub mod scalar;
pub mod wellness;
pub mod workout;

pub use event::Event;
pub use scalar::Scalar;
pub use wellness::WellnessEntry;
pub use workout::{Lap, PowerCurve, SensorTriple, Workout, ZoneDistribution};

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{kind} record must be a JSON object, got {found}")]
    NotAnObject { kind: &'static str, found: &'static str },
}

/// A record kind that can be built from loosely-typed JSON.
pub trait Record: DeserializeOwned + Default {
    /// Name used in diagnostics.
    const KIND: &'static str;

    /// Lenient construction. Never fails: a non-object input yields an
    /// empty record.
    fn from_value(value: &Value) -> Self {
        match Self::deserialize(value) {
            Ok(record) => record,
            Err(err) => {
                tracing::debug!(
                    kind = Self::KIND,
                    error = %err,
                    "record input is not an object, using empty record"
                );
                Self::default()
            }
        }
    }

    /// Like [`Record::from_value`] but rejects inputs that are not objects.
    fn try_from_value(value: &Value) -> Result<Self, RecordError> {
        if !value.is_object() {
            return Err(RecordError::NotAnObject {
                kind: Self::KIND,
                found: json_type_name(value),
            });
        }
        Ok(Self::from_value(value))
    }

    fn from_json_str(text: &str) -> Result<Self, RecordError> {
        let value: Value = serde_json::from_str(text)?;
        Self::try_from_value(&value)
    }
}

impl Record for Workout {
    const KIND: &'static str = "workout";
}

impl Record for Lap {
    const KIND: &'static str = "lap";
}

impl Record for WellnessEntry {
    const KIND: &'static str = "wellness";
}

impl Record for Event {
    const KIND: &'static str = "event";
}

pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
