//! Fixed lookup tables shared with the web and iOS clients.
//!
//! Zone tables map the API's zone codes to display names; codes outside a
//! table are still rendered, using the raw code.

use tempo_records::{Workout, ZoneDistribution};

/// Zone code to display name pairs, one table per taxonomy.
pub mod zone_names {
    pub const HEART_RATE: &[(&str, &str)] = &[
        ("Z1", "Z1 Recovery"),
        ("Z2", "Z2 Endurance"),
        ("Z3", "Z3 Tempo"),
        ("Z4", "Z4 Threshold"),
        ("Z5", "Z5 VO2 Max"),
    ];

    pub const POWER: &[(&str, &str)] = &[
        ("Z1", "Z1 Recovery"),
        ("Z2", "Z2 Endurance"),
        ("Z3", "Z3 Tempo"),
        ("SS", "SS Sweet Spot"),
        ("Z4", "Z4 Threshold"),
        ("Z5", "Z5 VO2 Max"),
        ("Z6", "Z6 Anaerobic"),
        ("Z7", "Z7 Neuromuscular"),
    ];

    pub const TEMPERATURE: &[(&str, &str)] = &[
        ("z1_freezing", "Freezing"),
        ("z2_cold", "Cold"),
        ("z3_cool", "Cool"),
        ("z4_mild", "Mild"),
        ("z5_warm", "Warm"),
        ("z6_hot", "Hot"),
        ("z7_extreme", "Extreme"),
    ];

    pub const CORE_TEMPERATURE: &[(&str, &str)] = &[
        ("z1_low", "Low"),
        ("z2_normal", "Normal"),
        ("z3_moderate", "Moderate"),
        ("z4_elevated", "Elevated"),
        ("z5_high", "High"),
        ("z6_very_high", "Very High"),
    ];

    pub const SKIN_TEMPERATURE: &[(&str, &str)] = &[
        ("z1_cool", "Cool"),
        ("z2_mild", "Mild"),
        ("z3_normal", "Normal"),
        ("z4_warm", "Warm"),
        ("z5_hot", "Hot"),
        ("z6_very_hot", "Very Hot"),
    ];

    pub const HEAT_STRAIN: &[(&str, &str)] = &[
        ("z1_no_strain", "No Strain"),
        ("z2_moderate", "Moderate"),
        ("z3_high", "High"),
        ("z4_extremely_high", "Extremely High"),
    ];
}

/// Look up a zone code in a table.
pub fn zone_display_name(table: &[(&str, &'static str)], code: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, name)| *name)
}

/// The six time-in-zone breakdowns a workout can carry, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoneTaxonomy {
    HeartRate,
    Power,
    Temperature,
    CoreTemperature,
    SkinTemperature,
    HeatStrain,
}

impl ZoneTaxonomy {
    pub const ALL: [ZoneTaxonomy; 6] = [
        ZoneTaxonomy::HeartRate,
        ZoneTaxonomy::Power,
        ZoneTaxonomy::Temperature,
        ZoneTaxonomy::CoreTemperature,
        ZoneTaxonomy::SkinTemperature,
        ZoneTaxonomy::HeatStrain,
    ];

    pub fn heading(self) -> &'static str {
        match self {
            ZoneTaxonomy::HeartRate => "Heart Rate Zones",
            ZoneTaxonomy::Power => "Power Zones",
            ZoneTaxonomy::Temperature => "Temperature Zones",
            ZoneTaxonomy::CoreTemperature => "Core Temperature Zones",
            ZoneTaxonomy::SkinTemperature => "Skin Temperature Zones",
            ZoneTaxonomy::HeatStrain => "Heat Strain Zones",
        }
    }

    pub fn names(self) -> &'static [(&'static str, &'static str)] {
        match self {
            ZoneTaxonomy::HeartRate => zone_names::HEART_RATE,
            ZoneTaxonomy::Power => zone_names::POWER,
            ZoneTaxonomy::Temperature => zone_names::TEMPERATURE,
            ZoneTaxonomy::CoreTemperature => zone_names::CORE_TEMPERATURE,
            ZoneTaxonomy::SkinTemperature => zone_names::SKIN_TEMPERATURE,
            ZoneTaxonomy::HeatStrain => zone_names::HEAT_STRAIN,
        }
    }

    /// The workout field holding this breakdown.
    pub fn distribution(self, workout: &Workout) -> Option<&ZoneDistribution> {
        match self {
            ZoneTaxonomy::HeartRate => workout.time_in_hr_zone.as_ref(),
            ZoneTaxonomy::Power => workout.time_in_power_zone.as_ref(),
            ZoneTaxonomy::Temperature => workout.time_in_temperature_zone.as_ref(),
            ZoneTaxonomy::CoreTemperature => workout.time_in_core_temperature_zone.as_ref(),
            ZoneTaxonomy::SkinTemperature => workout.time_in_skin_temperature_zone.as_ref(),
            ZoneTaxonomy::HeatStrain => workout.time_in_heat_strain_zone.as_ref(),
        }
    }
}

/// Durations of the power-duration curve, shortest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum PowerBenchmark {
    S1,
    S3,
    S5,
    S10,
    S12,
    S15,
    S20,
    S30,
    S45,
    Min1,
    Min2,
    Min3,
    Min5,
    Min8,
    Min10,
    Min12,
    Min15,
    Min20,
    Min30,
    Min40,
    Min60,
    Min90,
    H2,
    H3,
    H4,
    H5,
}

impl PowerBenchmark {
    /// Canonical rendering order.
    pub const ALL: [PowerBenchmark; 26] = [
        PowerBenchmark::S1,
        PowerBenchmark::S3,
        PowerBenchmark::S5,
        PowerBenchmark::S10,
        PowerBenchmark::S12,
        PowerBenchmark::S15,
        PowerBenchmark::S20,
        PowerBenchmark::S30,
        PowerBenchmark::S45,
        PowerBenchmark::Min1,
        PowerBenchmark::Min2,
        PowerBenchmark::Min3,
        PowerBenchmark::Min5,
        PowerBenchmark::Min8,
        PowerBenchmark::Min10,
        PowerBenchmark::Min12,
        PowerBenchmark::Min15,
        PowerBenchmark::Min20,
        PowerBenchmark::Min30,
        PowerBenchmark::Min40,
        PowerBenchmark::Min60,
        PowerBenchmark::Min90,
        PowerBenchmark::H2,
        PowerBenchmark::H3,
        PowerBenchmark::H4,
        PowerBenchmark::H5,
    ];

    /// Key used by the API's `power_duration_curve` map.
    pub fn label(self) -> &'static str {
        match self {
            PowerBenchmark::S1 => "1s",
            PowerBenchmark::S3 => "3s",
            PowerBenchmark::S5 => "5s",
            PowerBenchmark::S10 => "10s",
            PowerBenchmark::S12 => "12s",
            PowerBenchmark::S15 => "15s",
            PowerBenchmark::S20 => "20s",
            PowerBenchmark::S30 => "30s",
            PowerBenchmark::S45 => "45s",
            PowerBenchmark::Min1 => "1min",
            PowerBenchmark::Min2 => "2min",
            PowerBenchmark::Min3 => "3min",
            PowerBenchmark::Min5 => "5min",
            PowerBenchmark::Min8 => "8min",
            PowerBenchmark::Min10 => "10min",
            PowerBenchmark::Min12 => "12min",
            PowerBenchmark::Min15 => "15min",
            PowerBenchmark::Min20 => "20min",
            PowerBenchmark::Min30 => "30min",
            PowerBenchmark::Min40 => "40min",
            PowerBenchmark::Min60 => "60min",
            PowerBenchmark::Min90 => "90min",
            PowerBenchmark::H2 => "2h",
            PowerBenchmark::H3 => "3h",
            PowerBenchmark::H4 => "4h",
            PowerBenchmark::H5 => "5h",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn benchmarks_are_strictly_increasing() {
        assert!(PowerBenchmark::ALL.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(PowerBenchmark::ALL[0].label(), "1s");
        assert_eq!(PowerBenchmark::ALL[25].label(), "5h");
    }

    #[test]
    fn zone_lookup_hits_and_misses() {
        assert_eq!(
            zone_display_name(zone_names::POWER, "SS"),
            Some("SS Sweet Spot")
        );
        assert_eq!(zone_display_name(zone_names::HEART_RATE, "Z6"), None);
    }

    #[test]
    fn every_taxonomy_has_a_table() {
        for taxonomy in ZoneTaxonomy::ALL {
            assert!(!taxonomy.names().is_empty(), "{taxonomy:?}");
            assert!(taxonomy.heading().ends_with("Zones"));
        }
    }
}
