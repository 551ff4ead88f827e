use tempo_records::ZoneDistribution;

use crate::transforms::format_duration;
use crate::vocabulary::zone_display_name;

/// Time-in-zone lines: `"{label}:"` then one `"  {zone}: {duration}"` line
/// per zone, in source order.
///
/// Returns no lines for an absent or empty distribution. Zone codes missing
/// from `names` (or all codes, without a table) are shown raw.
pub fn format_time_in_zone(
    zones: Option<&ZoneDistribution>,
    label: &str,
    names: Option<&[(&str, &'static str)]>,
) -> Vec<String> {
    let Some(zones) = zones.filter(|z| !z.is_empty()) else {
        return Vec::new();
    };

    let mut lines = Vec::with_capacity(zones.len() + 1);
    lines.push(format!("{label}:"));
    for (code, seconds) in zones.iter() {
        let display = names
            .and_then(|table| zone_display_name(table, code))
            .unwrap_or_else(|| {
                tracing::trace!(zone = code, label, "zone code not in vocabulary");
                code
            });
        lines.push(format!("  {display}: {}", format_duration(seconds)));
    }
    lines
}
