//! Field extraction from free-form utility output.
//!
//! Every extractor is an independent lookup over a text blob. None of them
//! fail: a field that cannot be found is `None`, except the percentage and
//! the named power components, which fall back to 0.

use crate::metrics::data::{BatteryStatus, PowerMetrics};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref PERCENTAGE: Regex = Regex::new(r"(\d+)%").expect("valid percentage pattern");
    static ref DURATION: Regex = Regex::new(r"(\d+:\d+)").expect("valid duration pattern");
    static ref CYCLE_COUNT: Regex =
        Regex::new(r"Cycle Count:\s+(\d+)").expect("valid cycle count pattern");
    static ref CONDITION: Regex = Regex::new(r"Condition:\s+(.+)").expect("valid condition pattern");
    static ref CPU_POWER: Regex = Regex::new(r"CPU Power:\s+(\d+)\s+mW").expect("valid CPU pattern");
    static ref GPU_POWER: Regex = Regex::new(r"GPU Power:\s+(\d+)\s+mW").expect("valid GPU pattern");
    static ref ANE_POWER: Regex = Regex::new(r"ANE Power:\s+(\d+)\s+mW").expect("valid ANE pattern");
    static ref COMBINED_POWER: Regex =
        Regex::new(r"Combined Power.*?:\s+(\d+)\s+mW").expect("valid combined pattern");
}

const AC_MARKER: &str = "AC Power";

/// First capture group of `pattern` parsed as an integer.
fn capture_u32(pattern: &Regex, text: &str) -> Option<u32> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// First integer immediately followed by `%`, or 0.
pub fn percentage(text: &str) -> u32 {
    capture_u32(&PERCENTAGE, text).unwrap_or(0)
}

/// On an AC source and not discharging.
pub fn is_charging(text: &str) -> bool {
    let lower = text.to_lowercase();
    text.contains(AC_MARKER) && !lower.contains("discharging")
}

/// Reported as charged and not discharged.
///
/// "discharged" contains "charged", so the decision is keyed on the
/// combination of both markers.
pub fn is_fully_charged(text: &str) -> bool {
    let lower = text.to_lowercase();
    match (lower.contains("charged"), lower.contains("discharged")) {
        (true, false) => true,
        (true, true) => false,
        (false, _) => false,
    }
}

/// First `H:MM` duration token.
pub fn time_remaining(text: &str) -> Option<String> {
    DURATION
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Integer after a `Cycle Count:` label.
pub fn cycle_count(text: &str) -> Option<u32> {
    capture_u32(&CYCLE_COUNT, text)
}

/// Trimmed text after a `Condition:` label.
pub fn condition(text: &str) -> Option<String> {
    CONDITION
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Build a battery record from the status query and hardware profile texts.
///
/// Charge flags are read from the same lowercase snapshot of `status_text`.
pub fn battery_status(status_text: &str, profile_text: &str) -> BatteryStatus {
    BatteryStatus {
        percentage: percentage(status_text),
        is_charging: is_charging(status_text),
        is_fully_charged: is_fully_charged(status_text),
        time_remaining: time_remaining(status_text),
        cycle_count: cycle_count(profile_text),
        condition: condition(profile_text),
    }
}

/// Build a power record from one sampler run. Missing lines read as 0.
pub fn power_metrics(text: &str) -> PowerMetrics {
    PowerMetrics {
        cpu_milliwatts: capture_u32(&CPU_POWER, text).unwrap_or(0),
        gpu_milliwatts: capture_u32(&GPU_POWER, text).unwrap_or(0),
        ane_milliwatts: capture_u32(&ANE_POWER, text).unwrap_or(0),
        total_milliwatts: capture_u32(&COMBINED_POWER, text).unwrap_or(0),
    }
}
