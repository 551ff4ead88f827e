use tempo_records::WellnessEntry;

use crate::text::TextBlock;
use crate::transforms::{hrv_score, value_or_placeholder};

/// Daily wellness entry with body, recovery and baseline sections.
///
/// Each section appears only when at least one of its lines does. HRV is
/// shown as a score derived from RMSSD, never as the raw value.
pub fn format_wellness_entry(entry: &WellnessEntry) -> String {
    let mut text = TextBlock::new();
    text.line("Wellness Entry:");
    text.line(format!("  Date: {}", value_or_placeholder(entry.day())));
    text.line(format!("  ID: {}", value_or_placeholder(entry.id.as_deref())));
    text.blank();

    text.section("Body Metrics", body_metrics(entry));
    text.section("Recovery Metrics", recovery_metrics(entry));
    text.section("7-Day Baselines", baselines(entry));

    text.finish()
}

fn body_metrics(entry: &WellnessEntry) -> Vec<String> {
    [
        entry.weight_kg.map(|v| format!("  Weight: {v:.1} kg")),
        entry
            .body_fat_percentage
            .map(|v| format!("  Body Fat: {v:.1}%")),
        entry.hydration_kg.map(|v| format!("  Hydration: {v:.1} kg")),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn recovery_metrics(entry: &WellnessEntry) -> Vec<String> {
    [
        entry.sleep_hours.map(|v| format!("  Sleep: {v:.1} hours")),
        entry
            .resting_hr
            .as_ref()
            .map(|v| format!("  Resting HR: {v} bpm")),
        hrv_score(entry.hrv_rmssd).map(|score| format!("  HRV Score: {score}")),
        entry
            .readiness_score
            .as_ref()
            .map(|v| format!("  Readiness Score: {v}")),
        entry.vo2max.map(|v| format!("  VO2max: {v:.1} ml/kg/min")),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn baselines(entry: &WellnessEntry) -> Vec<String> {
    [
        hrv_score(entry.hrv_rmssd_baseline).map(|score| format!("  HRV Score Baseline: {score}")),
        entry
            .resting_hr_baseline
            .map(|v| format!("  Resting HR Baseline: {v:.1} bpm")),
        entry
            .sleep_baseline
            .map(|v| format!("  Sleep Baseline: {v:.1} hours")),
        entry
            .hydration_baseline
            .map(|v| format!("  Hydration Baseline: {v:.1}%")),
        entry
            .vo2max_baseline
            .map(|v| format!("  VO2max Baseline: {v:.1} ml/kg/min")),
    ]
    .into_iter()
    .flatten()
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempo_records::Record;

    #[test]
    fn header_only_entry() {
        let entry = WellnessEntry::from_value(&json!({"id": "2024-01-01"}));
        assert_eq!(
            format_wellness_entry(&entry),
            "Wellness Entry:\n  Date: 2024-01-01\n  ID: 2024-01-01\n"
        );
    }

    #[test]
    fn hrv_score_replaces_raw_rmssd() {
        let entry = WellnessEntry::from_value(&json!({"hrv_rmssd": 45}));
        let out = format_wellness_entry(&entry);
        assert!(out.contains("Recovery Metrics:\n  HRV Score: 76\n"));
        assert!(!out.contains("45"));
    }

    #[test]
    fn non_positive_rmssd_drops_the_section() {
        let entry = WellnessEntry::from_value(&json!({"hrv_rmssd": 0, "hrv_rmssd_baseline": -3}));
        let out = format_wellness_entry(&entry);
        assert!(!out.contains("HRV Score"));
        assert!(!out.contains("Recovery Metrics"));
        assert!(!out.contains("7-Day Baselines"));
    }

    #[test]
    fn baselines_section() {
        let entry = WellnessEntry::from_value(&json!({
            "hrv_rmssd_baseline": 100,
            "resting_hr_baseline": 52.26,
            "hydration_baseline": 60
        }));
        let out = format_wellness_entry(&entry);
        assert!(out.contains(
            "7-Day Baselines:\n  HRV Score Baseline: 92\n  Resting HR Baseline: 52.3 bpm\n  Hydration Baseline: 60.0%\n"
        ));
    }
}
