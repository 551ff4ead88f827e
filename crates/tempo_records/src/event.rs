use serde::Deserialize;

use crate::Scalar;
use crate::lenient::{lenient, lenient_string};

/// A planned or past race or ride.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Event {
    #[serde(deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub event_date: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub event_type: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub category: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub status: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub location: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub description: Option<Scalar>,

    #[serde(deserialize_with = "lenient")]
    pub distance_km: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub elevation_gain_m: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub duration_minutes: Option<Scalar>,

    #[serde(deserialize_with = "lenient")]
    pub target_tss: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub target_intensity_factor: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub target_power_watts: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub estimated_calories: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub estimated_carbs: Option<Scalar>,

    #[serde(deserialize_with = "lenient")]
    pub auto_calculate_intensity: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub include_drafting: Option<bool>,

    #[serde(deserialize_with = "lenient")]
    pub event_website: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub registration_url: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub results_url: Option<Scalar>,

    #[serde(deserialize_with = "lenient")]
    pub notes: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub workout_id: Option<Scalar>,
    #[serde(deserialize_with = "lenient_string")]
    pub created_at: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub updated_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Record;
    use serde_json::json;

    #[test]
    fn explicit_false_is_kept() {
        let event = Event::from_value(&json!({"include_drafting": false}));
        assert_eq!(event.include_drafting, Some(false));
        assert_eq!(event.auto_calculate_intensity, None);
    }

    #[test]
    fn non_boolean_setting_is_dropped() {
        let event = Event::from_value(&json!({"include_drafting": "yes"}));
        assert_eq!(event.include_drafting, None);
    }

    #[test]
    fn numeric_workout_id_keeps_its_kind() {
        let event = Event::from_value(&json!({"workout_id": 314, "distance_km": 100}));
        assert_eq!(event.workout_id, Some(Scalar::Integer(314)));
        assert_eq!(event.distance_km, Some(Scalar::Integer(100)));
    }
}
