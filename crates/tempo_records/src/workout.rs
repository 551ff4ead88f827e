use std::collections::HashMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::Scalar;
use crate::lenient::{lenient, lenient_laps, lenient_string};

/// One exercise session.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Workout {
    #[serde(deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub workout_type: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub status: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub description: Option<Scalar>,

    #[serde(deserialize_with = "lenient_string")]
    pub start_time: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub end_time: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub duration_total_seconds: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub duration_active_seconds: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub duration_paused_seconds: Option<f64>,

    #[serde(deserialize_with = "lenient")]
    pub distance_meters: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub elevation_gain: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub elevation_loss: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub speed_average: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub speed_max: Option<Scalar>,

    #[serde(deserialize_with = "lenient")]
    pub power_average: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub power_max: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub power_normalized: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub estimated_ftp: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub intensity_factor: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub variability_index: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub left_right_balance: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub power_duration_curve: Option<PowerCurve>,

    #[serde(deserialize_with = "lenient")]
    pub heart_rate_average: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub heart_rate_max: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub best_vagal_rebound: Option<Scalar>,

    #[serde(deserialize_with = "lenient")]
    pub training_stress_score: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub efficiency_factor: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub estimated_vo2max: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub power_hr_ratio: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub cadence_average: Option<Scalar>,

    #[serde(deserialize_with = "lenient")]
    pub cardiac_drift: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub power_fade: Option<f64>,

    #[serde(deserialize_with = "lenient")]
    pub calories: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub work_joules: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub carbohydrate_intake: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub carbohydrate_used: Option<Scalar>,

    #[serde(deserialize_with = "lenient")]
    pub feel: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub perceived_exertion: Option<Scalar>,

    #[serde(deserialize_with = "lenient")]
    pub time_in_hr_zone: Option<ZoneDistribution>,
    #[serde(deserialize_with = "lenient")]
    pub time_in_power_zone: Option<ZoneDistribution>,
    #[serde(deserialize_with = "lenient")]
    pub time_in_temperature_zone: Option<ZoneDistribution>,
    #[serde(deserialize_with = "lenient")]
    pub time_in_core_temperature_zone: Option<ZoneDistribution>,
    #[serde(deserialize_with = "lenient")]
    pub time_in_skin_temperature_zone: Option<ZoneDistribution>,
    #[serde(deserialize_with = "lenient")]
    pub time_in_heat_strain_zone: Option<ZoneDistribution>,

    #[serde(deserialize_with = "lenient")]
    pub min_core_temperature: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub avg_core_temperature: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub max_core_temperature: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub min_skin_temperature: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub avg_skin_temperature: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub max_skin_temperature: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub min_heat_strain_index: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub avg_heat_strain_index: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub max_heat_strain_index: Option<f64>,

    #[serde(deserialize_with = "lenient")]
    pub notes: Option<Scalar>,
    #[serde(deserialize_with = "lenient_string")]
    pub source: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub device_name: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub time_zone: Option<Scalar>,
    #[serde(deserialize_with = "lenient_string")]
    pub created_at: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub updated_at: Option<String>,

    /// The lap list as sent; `None` entries mark items that are not objects.
    #[serde(deserialize_with = "lenient_laps")]
    pub laps: Option<Vec<Option<Lap>>>,
}

impl Workout {
    pub fn core_temperature(&self) -> SensorTriple {
        SensorTriple {
            min: self.min_core_temperature,
            avg: self.avg_core_temperature,
            max: self.max_core_temperature,
        }
    }

    pub fn skin_temperature(&self) -> SensorTriple {
        SensorTriple {
            min: self.min_skin_temperature,
            avg: self.avg_skin_temperature,
            max: self.max_skin_temperature,
        }
    }

    pub fn heat_strain(&self) -> SensorTriple {
        SensorTriple {
            min: self.min_heat_strain_index,
            avg: self.avg_heat_strain_index,
            max: self.max_heat_strain_index,
        }
    }

    /// Length of the lap list, counting entries that are not objects.
    pub fn lap_count(&self) -> usize {
        self.laps.as_ref().map_or(0, Vec::len)
    }

    /// The laps that are objects, in list order.
    pub fn laps(&self) -> impl Iterator<Item = &Lap> {
        self.laps.iter().flatten().flatten()
    }
}

/// One interval or segment within a workout.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Lap {
    #[serde(deserialize_with = "lenient")]
    pub lap_index: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub name: Option<Scalar>,
    #[serde(deserialize_with = "lenient_string")]
    pub start_time: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub source: Option<String>,

    #[serde(deserialize_with = "lenient")]
    pub elapsed_time: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub moving_time: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub distance: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub total_elevation_gain: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub avg_speed: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub max_speed: Option<f64>,

    #[serde(deserialize_with = "lenient")]
    pub avg_power: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub normalized_power: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub max_power: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub watts_per_kg: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub avg_cadence: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub avg_heart_rate: Option<Scalar>,
    #[serde(deserialize_with = "lenient")]
    pub max_heart_rate: Option<Scalar>,

    #[serde(deserialize_with = "lenient")]
    pub intensity_factor: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub variability_index: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub training_stress_score: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub efficiency_factor: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub power_hr_ratio: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub vam: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub work_joules: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub calories: Option<Scalar>,
}

/// Min/avg/max readings of one body sensor channel.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SensorTriple {
    pub min: Option<f64>,
    pub avg: Option<f64>,
    pub max: Option<f64>,
}

impl SensorTriple {
    pub fn has_reading(&self) -> bool {
        self.min.is_some() || self.avg.is_some() || self.max.is_some()
    }
}

/// Seconds spent per zone, in the order the API listed the zones.
///
/// A zone whose value is not numeric is kept with `None` seconds.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ZoneDistribution(Vec<(String, Option<f64>)>);

impl ZoneDistribution {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<f64>)> {
        self.0.iter().map(|(zone, secs)| (zone.as_str(), *secs))
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for ZoneDistribution {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        ZoneDistribution(
            iter.into_iter()
                .map(|(zone, secs)| (zone.into(), Some(secs)))
                .collect(),
        )
    }
}

impl<'de> Deserialize<'de> for ZoneDistribution {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ZoneVisitor;

        impl<'de> Visitor<'de> for ZoneVisitor {
            type Value = ZoneDistribution;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of zone code to seconds")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((zone, secs)) = map.next_entry::<String, Value>()? {
                    entries.push((zone, secs.as_f64()));
                }
                Ok(ZoneDistribution(entries))
            }
        }

        deserializer.deserialize_map(ZoneVisitor)
    }
}

/// Peak power keyed by benchmark duration label (`"1s"`, `"5min"`, ...).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PowerCurve(HashMap<String, Option<Scalar>>);

impl PowerCurve {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `None` when the label is missing, `Some(None)` when it is present
    /// without a usable value.
    pub fn lookup(&self, label: &str) -> Option<Option<&Scalar>> {
        self.0.get(label).map(Option::as_ref)
    }
}

impl<K: Into<String>, V: Into<Scalar>> FromIterator<(K, V)> for PowerCurve {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        PowerCurve(
            iter.into_iter()
                .map(|(label, watts)| (label.into(), Some(watts.into())))
                .collect(),
        )
    }
}

impl<'de> Deserialize<'de> for PowerCurve {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = HashMap::<String, Value>::deserialize(deserializer)?;
        Ok(PowerCurve(
            raw.into_iter()
                .map(|(label, watts)| {
                    let watts = Scalar::from_json(&watts);
                    (label, watts)
                })
                .collect(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Record;
    use serde_json::json;

    #[test]
    fn zone_distribution_keeps_source_order() {
        let workout = Workout::from_value(&json!({
            "time_in_hr_zone": {"Z3": 1200, "Z1": 120, "Z2": 600.5}
        }));
        let zones = workout.time_in_hr_zone.expect("zones");
        let codes: Vec<&str> = zones.iter().map(|(code, _)| code).collect();
        assert_eq!(codes, ["Z3", "Z1", "Z2"]);
        assert_eq!(zones.iter().nth(2).and_then(|(_, secs)| secs), Some(600.5));
    }

    #[test]
    fn zone_distribution_tolerates_bad_values() {
        let workout = Workout::from_value(&json!({"time_in_power_zone": {"Z1": "long"}}));
        let zones = workout.time_in_power_zone.expect("zones");
        assert_eq!(zones.len(), 1);
        assert_eq!(zones.iter().next(), Some(("Z1", None)));
    }

    #[test]
    fn malformed_fields_do_not_poison_the_record() {
        let workout = Workout::from_value(&json!({
            "name": "Tempo",
            "distance_meters": "far",
            "time_in_hr_zone": [1, 2],
            "power_duration_curve": "none",
            "laps": 3
        }));
        assert_eq!(workout.name.as_deref(), Some("Tempo"));
        assert!(workout.distance_meters.is_none());
        assert!(workout.time_in_hr_zone.is_none());
        assert!(workout.power_duration_curve.is_none());
        assert_eq!(workout.lap_count(), 0);
        assert!(workout.laps().next().is_none());
    }

    #[test]
    fn lap_count_includes_entries_that_are_not_objects() {
        let workout = Workout::from_value(&json!({"laps": [{"lap_index": 1}, "junk", null]}));
        assert_eq!(workout.lap_count(), 3);
        assert_eq!(workout.laps().count(), 1);

        let workout = Workout::from_value(&json!({"laps": ["junk"]}));
        assert_eq!(workout.lap_count(), 1);
        assert!(workout.laps().next().is_none());
    }

    #[test]
    fn sensor_triples_group_flat_fields() {
        let workout = Workout::from_value(&json!({
            "avg_core_temperature": 38.2,
            "max_heat_strain_index": 55
        }));
        assert!(workout.core_temperature().has_reading());
        assert_eq!(workout.core_temperature().avg, Some(38.2));
        assert!(!workout.skin_temperature().has_reading());
        assert_eq!(workout.heat_strain().max, Some(55.0));
    }

    #[test]
    fn power_curve_lookup_distinguishes_missing_and_null() {
        let workout = Workout::from_value(&json!({
            "power_duration_curve": {"1s": 900, "5s": null}
        }));
        let curve = workout.power_duration_curve.expect("curve");
        assert_eq!(curve.lookup("1s"), Some(Some(&Scalar::Integer(900))));
        assert_eq!(curve.lookup("5s"), Some(None));
        assert_eq!(curve.lookup("10s"), None);
    }
}
