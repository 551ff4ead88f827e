//! Human-readable text rendering of Tempo API records.
//!
//! Every formatter takes a typed record from [`tempo_records`] and returns a
//! multi-line string. Formatting is total: missing data becomes `N/A` or a
//! skipped line/section, never an error.

pub mod config;
pub mod domains;
pub mod error;
pub mod render;
pub mod text;
pub mod transforms;
pub mod vocabulary;

pub use domains::events::{format_event_details, format_event_summary};
pub use domains::wellness::format_wellness_entry;
pub use domains::workouts::{format_workout_details, format_workout_lap, format_workout_summary};
pub use domains::zones::format_time_in_zone;
pub use error::{FormatError, FormatResult};
pub use render::{RecordKind, render_json_str, render_record, render_value};
pub use transforms::{
    PLACEHOLDER, format_datetime, format_distance, format_duration, format_percentage,
    format_timestamp, hrv_score, value_or_placeholder,
};
