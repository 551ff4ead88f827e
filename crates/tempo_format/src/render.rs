//! Dispatch from a record kind and decoded JSON to the matching formatter.

use std::fmt;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use serde_json::Value;
use tempo_records::{Event, Lap, Record, WellnessEntry, Workout};

use crate::domains::events::{format_event_details, format_event_summary};
use crate::domains::wellness::format_wellness_entry;
use crate::domains::workouts::{format_workout_details, format_workout_lap, format_workout_summary};
use crate::error::{FormatError, FormatResult};

/// Separator between records when a list is rendered.
pub const RECORD_SEPARATOR: &str = "\n\n";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordKind {
    WorkoutSummary,
    WorkoutDetails,
    WorkoutLap,
    Wellness,
    EventSummary,
    EventDetails,
}

impl RecordKind {
    pub const ALL: [RecordKind; 6] = [
        RecordKind::WorkoutSummary,
        RecordKind::WorkoutDetails,
        RecordKind::WorkoutLap,
        RecordKind::Wellness,
        RecordKind::EventSummary,
        RecordKind::EventDetails,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RecordKind::WorkoutSummary => "workout-summary",
            RecordKind::WorkoutDetails => "workout-details",
            RecordKind::WorkoutLap => "workout-lap",
            RecordKind::Wellness => "wellness",
            RecordKind::EventSummary => "event-summary",
            RecordKind::EventDetails => "event-details",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('_', "-");
        RecordKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| FormatError::UnknownKind(s.to_string()))
    }
}

/// Render one record. Lenient: a non-object renders as an empty record.
pub fn render_record(kind: RecordKind, value: &Value) -> String {
    match kind {
        RecordKind::WorkoutSummary => format_workout_summary(&Workout::from_value(value)),
        RecordKind::WorkoutDetails => format_workout_details(&Workout::from_value(value)),
        RecordKind::WorkoutLap => format_workout_lap(&Lap::from_value(value)),
        RecordKind::Wellness => format_wellness_entry(&WellnessEntry::from_value(value)),
        RecordKind::EventSummary => format_event_summary(&Event::from_value(value)),
        RecordKind::EventDetails => format_event_details(&Event::from_value(value)),
    }
}

/// Render a record, or every record of a list separated by a blank line.
pub fn render_value(kind: RecordKind, value: &Value) -> String {
    match value {
        Value::Array(items) => items
            .iter()
            .map(|item| render_record(kind, item))
            .collect::<Vec<_>>()
            .join(RECORD_SEPARATOR),
        _ => render_record(kind, value),
    }
}

/// Parse JSON text and render it. Rejects input that is neither an object
/// nor a list of objects.
pub fn render_json_str(kind: RecordKind, text: &str) -> FormatResult<String> {
    let value: Value = serde_json::from_str(text)?;
    let records: Vec<&Value> = match &value {
        Value::Array(items) => items.iter().collect(),
        other => vec![other],
    };
    for record in &records {
        ensure_record(kind, record)?;
    }
    tracing::debug!(kind = %kind, records = records.len(), "rendering records");
    Ok(render_value(kind, &value))
}

/// Read the whole input from `path`, or from stdin when no path is given.
pub fn load_input(path: Option<&Path>) -> FormatResult<String> {
    match path {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn ensure_record(kind: RecordKind, value: &Value) -> FormatResult<()> {
    match kind {
        RecordKind::WorkoutSummary | RecordKind::WorkoutDetails => {
            Workout::try_from_value(value).map(drop)?
        }
        RecordKind::WorkoutLap => Lap::try_from_value(value).map(drop)?,
        RecordKind::Wellness => WellnessEntry::try_from_value(value).map(drop)?,
        RecordKind::EventSummary | RecordKind::EventDetails => {
            Event::try_from_value(value).map(drop)?
        }
    }
    Ok(())
}
