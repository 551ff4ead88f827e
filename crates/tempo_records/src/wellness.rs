use serde::Deserialize;

use crate::Scalar;
use crate::lenient::{lenient, lenient_string};

/// One day of recovery and body metrics, with optional 7-day baselines.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct WellnessEntry {
    #[serde(deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub date: Option<String>,

    #[serde(deserialize_with = "lenient")]
    pub weight_kg: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub body_fat_percentage: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub hydration_kg: Option<f64>,

    #[serde(deserialize_with = "lenient")]
    pub sleep_hours: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub resting_hr: Option<Scalar>,
    /// Raw RMSSD in milliseconds.
    #[serde(deserialize_with = "lenient")]
    pub hrv_rmssd: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub readiness_score: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub vo2max: Option<f64>,

    #[serde(deserialize_with = "lenient")]
    pub hrv_rmssd_baseline: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub resting_hr_baseline: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub sleep_baseline: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub hydration_baseline: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub vo2max_baseline: Option<f64>,
}

impl WellnessEntry {
    /// The entry date, falling back to the id (entries are keyed by date).
    pub fn day(&self) -> Option<&str> {
        self.date.as_deref().or(self.id.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Record;
    use serde_json::json;

    #[test]
    fn day_falls_back_to_id() {
        let entry = WellnessEntry::from_value(&json!({"id": "2024-03-02"}));
        assert_eq!(entry.day(), Some("2024-03-02"));

        let entry = WellnessEntry::from_value(&json!({"id": 9, "date": "2024-03-01"}));
        assert_eq!(entry.day(), Some("2024-03-01"));
    }

    #[test]
    fn integer_metrics_accepted_as_decimals() {
        let entry = WellnessEntry::from_value(&json!({"hrv_rmssd": 45, "resting_hr": 55}));
        assert_eq!(entry.hrv_rmssd, Some(45.0));
        assert_eq!(entry.resting_hr, Some(Scalar::Integer(55)));
    }
}
