use tempo_records::{Event, Scalar};

use crate::text::TextBlock;
use crate::transforms::{format_datetime, value_or_placeholder};

/// Descriptions longer than this many characters are cut in summaries.
pub const SUMMARY_DESCRIPTION_CHARS: usize = 100;

pub fn format_event_summary(event: &Event) -> String {
    let mut text = TextBlock::new();
    text.line(format!("Event: {}", name_or_unnamed(event)));
    text.line(format!("  ID: {}", value_or_placeholder(event.id.as_deref())));
    text.line(format!("  Date: {}", format_datetime(event.event_date.as_deref())));
    text.line(format!("  Type: {}", type_or_unknown(event)));
    text.line(format!("  Status: {}", value_or_placeholder(event.status.as_deref())));

    if let Some(location) = truthy(&event.location) {
        text.line(format!("  Location: {location}"));
    }
    if let Some(distance) = truthy(&event.distance_km) {
        text.line(format!("  Distance: {distance} km"));
    }
    if let Some(description) = truthy(&event.description) {
        text.line(format!(
            "  Description: {}",
            truncate_description(&description.to_string(), SUMMARY_DESCRIPTION_CHARS)
        ));
    }

    text.finish()
}

pub fn format_event_details(event: &Event) -> String {
    let mut text = TextBlock::new();
    text.line("Event Details:");
    text.blank();

    text.section("General Information", general_information(event));
    text.section("Course Details", course_details(event));
    text.section("Targets & Estimates", targets(event));
    text.section("Settings", settings(event));
    text.section("Links", links(event));

    if let Some(notes) = truthy(&event.notes) {
        text.line(format!("Notes: {notes}"));
        text.blank();
    }

    text.line("Metadata:");
    if let Some(workout_id) = truthy(&event.workout_id) {
        text.line(format!("  Linked Workout ID: {workout_id}"));
    }
    text.line(format!("  Created: {}", format_datetime(event.created_at.as_deref())));
    text.line(format!("  Updated: {}", format_datetime(event.updated_at.as_deref())));

    text.finish()
}

/// First `max_chars` characters plus `...`, or the text unchanged.
pub fn truncate_description(description: &str, max_chars: usize) -> String {
    match description.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &description[..cut]),
        None => description.to_string(),
    }
}

fn general_information(event: &Event) -> Vec<String> {
    let mut lines = vec![
        format!("  Name: {}", name_or_unnamed(event)),
        format!("  ID: {}", value_or_placeholder(event.id.as_deref())),
        format!("  Date: {}", format_datetime(event.event_date.as_deref())),
        format!("  Type: {}", type_or_unknown(event)),
        format!("  Category: {}", value_or_placeholder(event.category.as_deref())),
        format!("  Status: {}", value_or_placeholder(event.status.as_deref())),
    ];
    if let Some(location) = truthy(&event.location) {
        lines.push(format!("  Location: {location}"));
    }
    if let Some(description) = truthy(&event.description) {
        lines.push(format!("  Description: {description}"));
    }
    lines
}

fn course_details(event: &Event) -> Vec<String> {
    [
        truthy(&event.distance_km).map(|v| format!("  Distance: {v} km")),
        truthy(&event.elevation_gain_m).map(|v| format!("  Elevation Gain: {v} m")),
        truthy(&event.duration_minutes).map(|v| format!("  Duration: {v} min")),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn targets(event: &Event) -> Vec<String> {
    [
        truthy(&event.target_tss).map(|v| format!("  Target TSS: {v}")),
        event
            .target_intensity_factor
            .filter(|v| *v != 0.0)
            .map(|v| format!("  Target IF: {v:.2}")),
        truthy(&event.target_power_watts).map(|v| format!("  Target Power: {v} W")),
        truthy(&event.estimated_calories).map(|v| format!("  Est. Calories: {v}")),
        truthy(&event.estimated_carbs).map(|v| format!("  Est. Carbs: {v} g")),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// An explicit `false` is a setting too, so only absence hides a line.
fn settings(event: &Event) -> Vec<String> {
    [
        event
            .auto_calculate_intensity
            .map(|on| format!("  Auto Calculate Intensity: {}", yes_no(on))),
        event
            .include_drafting
            .map(|on| format!("  Include Drafting: {}", yes_no(on))),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn links(event: &Event) -> Vec<String> {
    [
        truthy(&event.event_website).map(|v| format!("  Website: {v}")),
        truthy(&event.registration_url).map(|v| format!("  Registration: {v}")),
        truthy(&event.results_url).map(|v| format!("  Results: {v}")),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

fn name_or_unnamed(event: &Event) -> &str {
    event.name.as_deref().unwrap_or("Unnamed")
}

fn type_or_unknown(event: &Event) -> &str {
    event.event_type.as_deref().unwrap_or("Unknown")
}

fn truthy(value: &Option<Scalar>) -> Option<&Scalar> {
    value.as_ref().filter(|v| v.is_truthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempo_records::Record;

    #[test]
    fn truncation_counts_characters() {
        let long = "é".repeat(150);
        let cut = truncate_description(&long, 100);
        assert_eq!(cut.chars().count(), 103);
        assert!(cut.ends_with("..."));

        let exact = "x".repeat(100);
        assert_eq!(truncate_description(&exact, 100), exact);
    }

    #[test]
    fn summary_omits_zero_distance() {
        let event = Event::from_value(&json!({"name": "Crit", "distance_km": 0}));
        assert!(!format_event_summary(&event).contains("Distance"));
    }

    #[test]
    fn settings_render_explicit_false() {
        let event = Event::from_value(&json!({
            "auto_calculate_intensity": false,
            "include_drafting": true
        }));
        let out = format_event_details(&event);
        assert!(out.contains(
            "Settings:\n  Auto Calculate Intensity: No\n  Include Drafting: Yes\n"
        ));
    }

    #[test]
    fn targets_use_two_decimal_intensity() {
        let event = Event::from_value(&json!({"target_intensity_factor": 0.8, "estimated_carbs": 240}));
        let out = format_event_details(&event);
        assert!(out.contains("Targets & Estimates:\n  Target IF: 0.80\n  Est. Carbs: 240 g\n"));
    }

    #[test]
    fn metadata_with_linked_workout() {
        let event = Event::from_value(&json!({
            "workout_id": 77,
            "created_at": "2024-03-01T10:00:00Z"
        }));
        let out = format_event_details(&event);
        assert!(out.ends_with(
            "Metadata:\n  Linked Workout ID: 77\n  Created: 2024-03-01 10:00:00\n  Updated: N/A"
        ));
    }

    #[test]
    fn zero_workout_id_is_not_linked() {
        let event = Event::from_value(&json!({"workout_id": 0, "location": 0, "notes": ""}));
        let out = format_event_details(&event);
        assert!(!out.contains("Linked Workout ID"));
        assert!(!out.contains("Location:"));
        assert!(!out.contains("Notes:"));
    }

    #[test]
    fn empty_optional_sections_are_omitted() {
        let out = format_event_details(&Event::default());
        for heading in ["Course Details", "Targets & Estimates", "Settings", "Links", "Notes"] {
            assert!(!out.contains(heading), "{heading}");
        }
    }
}
