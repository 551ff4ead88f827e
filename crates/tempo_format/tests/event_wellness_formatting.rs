use serde_json::{Value, json};
use tempo_format::{format_event_details, format_event_summary, format_wellness_entry};
use tempo_records::{Event, Record, WellnessEntry};

fn sample_event() -> Value {
    json!({
        "id": 42,
        "name": "Gran Fondo",
        "event_date": "2024-06-15T07:00:00Z",
        "event_type": "race",
        "category": "A",
        "status": "planned",
        "location": "Girona",
        "description": "Hilly loop through the Gavarres.",
        "distance_km": 120,
        "elevation_gain_m": 1800,
        "duration_minutes": 300,
        "target_tss": 280,
        "target_intensity_factor": 0.78,
        "target_power_watts": 215,
        "estimated_calories": 3600,
        "estimated_carbs": 450,
        "auto_calculate_intensity": true,
        "include_drafting": false,
        "event_website": "https://example.org/fondo",
        "registration_url": "https://example.org/fondo/register",
        "results_url": "https://example.org/fondo/results",
        "notes": "Bring two bottles.",
        "workout_id": "w-981",
        "created_at": "2024-01-10T12:00:00Z",
        "updated_at": "2024-02-01T18:30:00Z"
    })
}

fn event(value: &Value) -> Event {
    Event::from_value(value)
}

#[test]
fn event_summary_lines() {
    let out = format_event_summary(&event(&sample_event()));
    assert_eq!(
        out,
        "Event: Gran Fondo\n  ID: 42\n  Date: 2024-06-15 07:00:00\n  Type: race\n  Status: planned\n  Location: Girona\n  Distance: 120 km\n  Description: Hilly loop through the Gavarres."
    );
}

#[test]
fn event_summary_truncates_long_description() {
    let mut value = sample_event();
    value["description"] = json!("a".repeat(150));
    let out = format_event_summary(&event(&value));
    let expected = format!("  Description: {}...", "a".repeat(100));
    assert!(out.ends_with(&expected));

    value["description"] = json!("b".repeat(50));
    let out = format_event_summary(&event(&value));
    assert!(out.ends_with(&format!("  Description: {}", "b".repeat(50))));
    assert!(!out.ends_with("..."));
}

#[test]
fn event_details_sections() {
    let out = format_event_details(&event(&sample_event()));
    assert!(out.starts_with("Event Details:\n\nGeneral Information:\n  Name: Gran Fondo\n"));
    assert!(out.contains("  Category: A"));
    assert!(out.contains(
        "Course Details:\n  Distance: 120 km\n  Elevation Gain: 1800 m\n  Duration: 300 min\n"
    ));
    assert!(out.contains(
        "Targets & Estimates:\n  Target TSS: 280\n  Target IF: 0.78\n  Target Power: 215 W\n  Est. Calories: 3600\n  Est. Carbs: 450 g\n"
    ));
    assert!(out.contains(
        "Settings:\n  Auto Calculate Intensity: Yes\n  Include Drafting: No\n"
    ));
    assert!(out.contains(
        "Links:\n  Website: https://example.org/fondo\n  Registration: https://example.org/fondo/register\n  Results: https://example.org/fondo/results\n"
    ));
    assert!(out.contains("Notes: Bring two bottles.\n"));
    assert!(out.ends_with(
        "Metadata:\n  Linked Workout ID: w-981\n  Created: 2024-01-10 12:00:00\n  Updated: 2024-02-01 18:30:00"
    ));
}

#[test]
fn event_details_full_description_is_not_truncated() {
    let mut value = sample_event();
    let long = "c".repeat(150);
    value["description"] = json!(long);
    let out = format_event_details(&event(&value));
    assert!(out.contains(&format!("  Description: {long}\n")));
}

#[test]
fn event_details_skips_empty_sections() {
    let out = format_event_details(&event(&json!({"name": "Club Ride"})));
    for heading in ["Course Details:", "Targets & Estimates:", "Settings:", "Links:", "Notes:"] {
        assert!(!out.contains(heading), "unexpected {heading}");
    }
    assert!(!out.contains("Linked Workout ID"));
    assert!(out.ends_with("Metadata:\n  Created: N/A\n  Updated: N/A"));
}

#[test]
fn event_zero_targets_are_hidden() {
    let out = format_event_details(&event(&json!({
        "target_tss": 0,
        "target_intensity_factor": 0.0,
        "distance_km": 0
    })));
    assert!(!out.contains("Targets & Estimates:"));
    assert!(!out.contains("Course Details:"));
}

#[test]
fn wellness_full_entry() {
    let entry = WellnessEntry::from_value(&json!({
        "id": "2024-01-01",
        "date": "2024-01-01",
        "weight_kg": 72.34,
        "body_fat_percentage": 12.1,
        "hydration_kg": 41.2,
        "sleep_hours": 7.5,
        "resting_hr": 48,
        "hrv_rmssd": 45.0,
        "readiness_score": 82,
        "vo2max": 61.2,
        "hrv_rmssd_baseline": 100.0,
        "resting_hr_baseline": 49.0,
        "sleep_baseline": 7.2,
        "hydration_baseline": 58.0,
        "vo2max_baseline": 60.8
    }));
    let expected = [
        "Wellness Entry:",
        "  Date: 2024-01-01",
        "  ID: 2024-01-01",
        "",
        "Body Metrics:",
        "  Weight: 72.3 kg",
        "  Body Fat: 12.1%",
        "  Hydration: 41.2 kg",
        "",
        "Recovery Metrics:",
        "  Sleep: 7.5 hours",
        "  Resting HR: 48 bpm",
        "  HRV Score: 76",
        "  Readiness Score: 82",
        "  VO2max: 61.2 ml/kg/min",
        "",
        "7-Day Baselines:",
        "  HRV Score Baseline: 92",
        "  Resting HR Baseline: 49.0 bpm",
        "  Sleep Baseline: 7.2 hours",
        "  Hydration Baseline: 58.0%",
        "  VO2max Baseline: 60.8 ml/kg/min",
        "",
    ];
    assert_eq!(format_wellness_entry(&entry), expected.join("\n"));
}

#[test]
fn wellness_sections_are_independent() {
    let entry = WellnessEntry::from_value(&json!({"date": "2024-01-02", "sleep_hours": 6}));
    let out = format_wellness_entry(&entry);
    assert!(out.contains("Recovery Metrics:\n  Sleep: 6.0 hours\n"));
    assert!(!out.contains("Body Metrics:"));
    assert!(!out.contains("7-Day Baselines:"));
    assert!(out.contains("  ID: N/A"));
}
