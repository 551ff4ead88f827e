//! Workout summary, detail and lap formatting.

use tempo_records::{Lap, PowerCurve, Scalar, SensorTriple, Workout};

use super::zones::format_time_in_zone;
use crate::text::{TextBlock, joined};
use crate::transforms::{
    PLACEHOLDER, format_datetime, format_distance, format_duration, format_percentage,
    value_or_placeholder,
};
use crate::vocabulary::{PowerBenchmark, ZoneTaxonomy};

/// Short list-view summary of a workout.
pub fn format_workout_summary(workout: &Workout) -> String {
    let mut text = TextBlock::new();
    text.line(format!("Workout: {}", name_or_unnamed(workout)));
    text.line(format!("  ID: {}", value_or_placeholder(workout.id.as_deref())));
    text.line(format!("  Type: {}", type_or_unknown(workout)));
    text.line(format!("  Date: {}", format_datetime(workout.start_time.as_deref())));
    text.line(format!(
        "  Duration: {}",
        format_duration(workout.duration_total_seconds)
    ));
    text.line(format!(
        "  Distance: {}",
        format_distance(workout.distance_meters)
    ));

    if let Some(np) = truthy(&workout.power_normalized) {
        text.line(format!("  Norm Power: {np} W"));
    }
    if let Some(load) = truthy(&workout.training_stress_score) {
        text.line(format!("  Load: {load}"));
    }
    if let Some(intensity) = truthy(&workout.intensity_factor) {
        text.line(format!("  Intensity: {}", fixed(intensity, 2)));
    }

    let lap_count = workout.lap_count();
    if lap_count > 0 {
        text.line(format!("  Laps: {lap_count}"));
    }

    text.finish()
}

/// Full breakdown of a workout, section by section.
pub fn format_workout_details(workout: &Workout) -> String {
    let mut text = TextBlock::new();
    text.line("Workout Details:");
    text.blank();

    text.section("General Information", general_information(workout));
    text.section(
        "Duration",
        vec![
            format!("  Total: {}", format_duration(workout.duration_total_seconds)),
            format!("  Active: {}", format_duration(workout.duration_active_seconds)),
            format!("  Paused: {}", format_duration(workout.duration_paused_seconds)),
        ],
    );
    text.section(
        "Distance & Elevation",
        vec![
            format!("  Distance: {}", format_distance(workout.distance_meters)),
            format!("  Elevation Gain: {} m", raw(&workout.elevation_gain)),
            format!("  Elevation Loss: {} m", raw(&workout.elevation_loss)),
        ],
    );
    text.section(
        "Speed",
        vec![
            format!("  Average Speed: {} m/s", raw(&workout.speed_average)),
            format!("  Max Speed: {} m/s", raw(&workout.speed_max)),
        ],
    );
    text.section(
        "Power",
        vec![
            format!("  Average Power: {} W", raw(&workout.power_average)),
            format!("  Max Power: {} W", raw(&workout.power_max)),
            format!("  Norm Power: {} W", raw(&workout.power_normalized)),
            format!("  Estimated FTP: {} W", raw(&workout.estimated_ftp)),
            format!("  Intensity: {}", raw(&workout.intensity_factor)),
            format!(
                "  Variability Index (VI): {}",
                raw(&workout.variability_index)
            ),
            format!("  L/R Balance: {}", raw(&workout.left_right_balance)),
        ],
    );

    if let Some(curve) = workout.power_duration_curve.as_ref().filter(|c| !c.is_empty()) {
        // heading stays even when no canonical label is present
        text.line("Power Duration Curve:");
        text.extend(power_curve_lines(curve));
        text.blank();
    }

    text.section(
        "Heart Rate",
        vec![
            format!("  Average HR: {} bpm", raw(&workout.heart_rate_average)),
            format!("  Max HR: {} bpm", raw(&workout.heart_rate_max)),
            format!("  HR Recovery: {} bpm", raw(&workout.best_vagal_rebound)),
        ],
    );
    text.section(
        "Training Metrics",
        vec![
            format!("  Load: {}", raw(&workout.training_stress_score)),
            format!("  Efficiency Factor: {}", raw(&workout.efficiency_factor)),
            format!("  Estimated VO2max: {}", raw(&workout.estimated_vo2max)),
            format!("  Power:HR Ratio: {}", raw(&workout.power_hr_ratio)),
            format!("  Cadence: {} rpm", raw(&workout.cadence_average)),
        ],
    );

    if has_decoupling(workout) {
        let mut body = Vec::with_capacity(2);
        if let Some(drift) = workout.cardiac_drift {
            body.push(format!("  Cardiac Drift: {}", format_percentage(Some(drift))));
        }
        if let Some(fade) = workout.power_fade {
            body.push(format!("  Power Fade: {}", format_percentage(Some(fade))));
        }
        text.section("Decoupling", body);
    }

    text.section(
        "Energy",
        vec![
            format!("  Calories: {}", raw(&workout.calories)),
            format!("  Work (Joules): {}", raw(&workout.work_joules)),
            format!("  Carb Intake: {} g", raw(&workout.carbohydrate_intake)),
            format!("  Carb Used: {} g", raw(&workout.carbohydrate_used)),
        ],
    );

    if has_subjective(workout) {
        let mut body = Vec::with_capacity(2);
        if let Some(feel) = truthy(&workout.feel) {
            body.push(format!("  Feel: {feel}"));
        }
        if let Some(rpe) = truthy(&workout.perceived_exertion) {
            body.push(format!("  RPE: {rpe}/10"));
        }
        text.section("Subjective", body);
    }

    for taxonomy in ZoneTaxonomy::ALL {
        text.block(format_time_in_zone(
            taxonomy.distribution(workout),
            taxonomy.heading(),
            Some(taxonomy.names()),
        ));
    }

    text.section("CORE Sensor", core_sensor_lines(workout));

    if let Some(notes) = truthy(&workout.notes) {
        text.line(format!("Notes: {notes}"));
        text.blank();
    }

    text.line("Source:");
    text.line(format!("  Source: {}", value_or_placeholder(workout.source.as_deref())));
    if let Some(device) = truthy(&workout.device_name) {
        text.line(format!("  Device: {device}"));
    }
    if let Some(tz) = truthy(&workout.time_zone) {
        text.line(format!("  Time Zone: {tz}"));
    }
    text.line(format!("  Created: {}", format_datetime(workout.created_at.as_deref())));
    text.line(format!("  Updated: {}", format_datetime(workout.updated_at.as_deref())));

    // the count covers the whole list; only object entries are rendered
    let lap_count = workout.lap_count();
    if lap_count > 0 {
        text.blank();
        text.line(format!("Laps ({lap_count}):"));
        text.extend(workout.laps().map(format_workout_lap));
    }

    text.finish()
}

/// One lap as an indented block. Only metrics that are present are shown.
pub fn format_workout_lap(lap: &Lap) -> String {
    let mut header = format!(
        "  Lap {}",
        lap.lap_index
            .as_ref()
            .map_or_else(|| "?".to_string(), Scalar::to_string)
    );
    if let Some(name) = truthy(&lap.name) {
        header = format!("{header} - {name}");
    }

    let mut text = TextBlock::new();
    text.line(header);

    if let Some(elapsed) = lap.elapsed_time {
        text.line(format!("    Elapsed: {}", format_duration(Some(elapsed))));
    }
    if let Some(moving) = lap.moving_time {
        text.line(format!("    Moving: {}", format_duration(Some(moving))));
    }

    if let Some(distance) = lap.distance {
        text.line(format!("    Distance: {}", format_distance(Some(distance))));
    }
    if let Some(gain) = lap.total_elevation_gain {
        text.line(format!("    Elevation Gain: {gain:.0} m"));
    }

    if let Some(speed) = lap.avg_speed {
        text.line(format!("    Avg Speed: {speed:.1} m/s"));
    }
    if let Some(speed) = lap.max_speed {
        text.line(format!("    Max Speed: {speed:.1} m/s"));
    }

    let power = [
        lap.avg_power.as_ref().map(|w| format!("Avg {w}W")),
        lap.normalized_power.as_ref().map(|w| format!("NP {w}W")),
        lap.max_power.as_ref().map(|w| format!("Max {w}W")),
    ];
    if let Some(line) = joined("    Power", &power, "") {
        text.line(line);
    }
    if let Some(wkg) = lap.watts_per_kg {
        text.line(format!("    W/kg: {wkg:.2}"));
    }

    if let Some(cadence) = &lap.avg_cadence {
        text.line(format!("    Cadence: {cadence} rpm"));
    }

    let heart_rate = [
        lap.avg_heart_rate.as_ref().map(|hr| format!("Avg {hr}")),
        lap.max_heart_rate.as_ref().map(|hr| format!("Max {hr}")),
    ];
    if let Some(line) = joined("    HR", &heart_rate, " bpm") {
        text.line(line);
    }

    let load = [
        lap.intensity_factor.map(|v| format!("IF {v:.2}")),
        lap.variability_index.map(|v| format!("VI {v:.2}")),
        lap.training_stress_score.map(|v| format!("TSS {v:.0}")),
    ];
    if let Some(line) = joined("    Load", &load, "") {
        text.line(line);
    }

    let efficiency = [
        lap.efficiency_factor.map(|v| format!("EF {v:.2}")),
        lap.power_hr_ratio.map(|v| format!("P:HR {v:.2}")),
    ];
    if let Some(line) = joined("    Efficiency", &efficiency, "") {
        text.line(line);
    }

    if let Some(vam) = lap.vam {
        text.line(format!("    VAM: {vam:.0} m/h"));
    }

    if let Some(work) = lap.work_joules {
        text.line(format!("    Work: {:.1} kJ", work / 1000.0));
    }
    if let Some(calories) = &lap.calories {
        text.line(format!("    Calories: {calories}"));
    }

    text.finish()
}

fn general_information(workout: &Workout) -> Vec<String> {
    let mut lines = vec![
        format!("  ID: {}", value_or_placeholder(workout.id.as_deref())),
        format!("  Name: {}", name_or_unnamed(workout)),
        format!("  Type: {}", type_or_unknown(workout)),
        format!("  Status: {}", value_or_placeholder(workout.status.as_deref())),
        format!("  Start Time: {}", format_datetime(workout.start_time.as_deref())),
        format!("  End Time: {}", format_datetime(workout.end_time.as_deref())),
    ];
    if let Some(description) = truthy(&workout.description) {
        lines.push(format!("  Description: {description}"));
    }
    lines
}

/// Canonical benchmark order; labels absent from the curve are skipped.
fn power_curve_lines(curve: &PowerCurve) -> Vec<String> {
    PowerBenchmark::ALL
        .iter()
        .filter_map(|benchmark| {
            let watts = curve.lookup(benchmark.label())?;
            Some(format!(
                "  {}: {} W",
                benchmark.label(),
                value_or_placeholder(watts)
            ))
        })
        .collect()
}

fn has_decoupling(workout: &Workout) -> bool {
    workout.cardiac_drift.is_some() || workout.power_fade.is_some()
}

fn has_subjective(workout: &Workout) -> bool {
    truthy(&workout.feel).is_some() || truthy(&workout.perceived_exertion).is_some()
}

fn core_sensor_lines(workout: &Workout) -> Vec<String> {
    [
        ("Core Temp", workout.core_temperature(), " °C"),
        ("Skin Temp", workout.skin_temperature(), " °C"),
        ("Heat Strain", workout.heat_strain(), " Heat Strain Index"),
    ]
    .into_iter()
    .filter(|(_, triple, _)| triple.has_reading())
    .map(|(label, triple, unit)| sensor_line(label, &triple, unit))
    .collect()
}

fn sensor_line(label: &str, triple: &SensorTriple, unit: &str) -> String {
    let one_decimal = |v: Option<f64>| v.map_or_else(|| PLACEHOLDER.to_string(), |v| format!("{v:.1}"));
    format!(
        "  {label}: {} / {} / {}{unit} (min/avg/max)",
        one_decimal(triple.min),
        one_decimal(triple.avg),
        one_decimal(triple.max)
    )
}

fn name_or_unnamed(workout: &Workout) -> &str {
    workout.name.as_deref().unwrap_or("Unnamed")
}

fn type_or_unknown(workout: &Workout) -> &str {
    workout.workout_type.as_deref().unwrap_or("Unknown")
}

fn raw(value: &Option<Scalar>) -> String {
    value_or_placeholder(value.as_ref())
}

fn truthy(value: &Option<Scalar>) -> Option<&Scalar> {
    value.as_ref().filter(|v| v.is_truthy())
}

/// Fixed precision for numbers; text is shown as-is.
fn fixed(value: &Scalar, precision: usize) -> String {
    match value.as_f64() {
        Some(v) => format!("{v:.precision$}"),
        None => value.to_string(),
    }
}
