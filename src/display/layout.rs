//! Frame layouts.
//!
//! Layouts only build text; cursor movement and flushing belong to
//! [`crate::display::terminal::Screen`].

use crate::display::format::{
    battery_bar, battery_color, format_power, health_color, status_icon, status_label, status_word,
};
use crate::display::style::{paint, Style};
use crate::metrics::data::{BatteryStatus, EnergySnapshot, PowerMetrics};

const RULE_WIDTH: usize = 70;
const SECTION_RULE_WIDTH: usize = 40;
const SEPARATOR: &str = " │ ";

/// Lines of the full monitoring layout.
pub fn render_full(snapshot: &EnergySnapshot, interval_secs: f64, bar_width: usize) -> Vec<String> {
    let rule = paint(Style::Bold, "=".repeat(RULE_WIDTH));
    let timestamp = snapshot.captured_at.format("%H:%M:%S").to_string();

    let mut lines = vec![
        rule.clone(),
        format!(
            "{}                    {}",
            paint(Style::Bold, "  🔋 Battery & Energy Monitor"),
            paint(Style::Gray, timestamp)
        ),
        rule.clone(),
        String::new(),
    ];

    match &snapshot.battery {
        Some(battery) => push_battery_block(&mut lines, battery, bar_width),
        None => {
            lines.push(format!("  {}", paint(Style::Red, "Battery data unavailable")));
            lines.push(String::new());
        }
    }

    match &snapshot.power {
        Some(power) => push_power_block(&mut lines, power),
        None => {
            lines.push(format!("  {}", paint(Style::Yellow, "⚠️  Power metrics unavailable")));
            lines.push(String::new());
        }
    }

    lines.push(paint(
        Style::Gray,
        format!("  Updating every {:?}s • Press Ctrl+C to stop", interval_secs),
    ));
    lines.push(rule);
    lines
}

fn push_battery_block(lines: &mut Vec<String>, battery: &BatteryStatus, bar_width: usize) {
    let color = battery_color(battery.percentage, battery.is_charging);
    let bar = battery_bar(battery.percentage, bar_width);

    lines.push(format!("  {}", paint(Style::Bold, "Battery Status")));
    lines.push(format!("  {}", status_label(battery.charge_state())));
    lines.push(format!("  {}", paint(color, format!("{} {}%", bar, battery.percentage))));
    lines.push(String::new());

    if let Some(time) = &battery.time_remaining {
        lines.push(format!("  Time Remaining: {}", time));
    }
    if let Some(cycles) = battery.cycle_count {
        lines.push(format!("  Cycle Count: {}", cycles));
    }
    if let Some(condition) = &battery.condition {
        lines.push(format!("  Health: {}", paint(health_color(condition), condition)));
    }
    lines.push(String::new());
}

fn push_power_block(lines: &mut Vec<String>, power: &PowerMetrics) {
    let section_rule = "─".repeat(SECTION_RULE_WIDTH);

    lines.push(format!("  {}", paint(Style::Bold, "Power Consumption")));
    lines.push(format!("  {}", section_rule));
    lines.push(format!("  CPU:   {:>8}", format_power(power.cpu_milliwatts)));
    lines.push(format!("  GPU:   {:>8}", format_power(power.gpu_milliwatts)));
    lines.push(format!("  ANE:   {:>8}", format_power(power.ane_milliwatts)));
    lines.push(format!("  {}", section_rule));
    lines.push(format!(
        "  {}",
        paint(Style::Bold, format!("Total: {:>8}", format_power(power.total_milliwatts)))
    ));
    lines.push(String::new());
}

/// The single-line compact layout, without control codes.
pub fn render_compact(snapshot: &EnergySnapshot) -> String {
    let timestamp = paint(Style::Gray, snapshot.captured_at.format("%H:%M:%S").to_string());

    let battery = match &snapshot.battery {
        Some(battery) => format!(
            "{} {}",
            status_icon(battery.charge_state()),
            paint(
                battery_color(battery.percentage, battery.is_charging),
                format!("{:>3}%", battery.percentage)
            )
        ),
        None => paint(Style::Red, "Battery unavailable"),
    };

    let power = match &snapshot.power {
        Some(power) => [
            format!("CPU: {:>7}", format_power(power.cpu_milliwatts)),
            format!("GPU: {:>7}", format_power(power.gpu_milliwatts)),
            format!("Total: {:>7}", format_power(power.total_milliwatts)),
        ]
        .join(SEPARATOR),
        None => paint(Style::Yellow, "Power metrics unavailable"),
    };

    [battery, power, timestamp].join(SEPARATOR)
}

/// The one-shot snapshot report.
pub fn render_snapshot(snapshot: &EnergySnapshot, bar_width: usize) -> String {
    let mut lines = vec![
        String::new(),
        format!(
            "{} - {}",
            paint(Style::Bold, "Battery & Energy Snapshot"),
            snapshot.captured_at.format("%Y-%m-%d %H:%M:%S")
        ),
        String::new(),
    ];

    match &snapshot.battery {
        Some(battery) => {
            let color = battery_color(battery.percentage, battery.is_charging);
            lines.push(format!(
                "Battery: {} ({})",
                paint(
                    color,
                    format!("{} {}%", battery_bar(battery.percentage, bar_width), battery.percentage)
                ),
                status_word(battery.charge_state())
            ));
            if let Some(time) = &battery.time_remaining {
                lines.push(format!("Time Remaining: {}", time));
            }
            if let Some(cycles) = battery.cycle_count {
                lines.push(format!("Cycle Count: {}", cycles));
            }
            if let Some(condition) = &battery.condition {
                lines.push(format!("Health: {}", paint(health_color(condition), condition)));
            }
        }
        None => lines.push(paint(Style::Red, "Battery data unavailable")),
    }
    lines.push(String::new());

    match &snapshot.power {
        Some(power) => {
            lines.push("Power Consumption:".to_string());
            lines.push(format!("  CPU: {:>8}", format_power(power.cpu_milliwatts)));
            lines.push(format!("  GPU: {:>8}", format_power(power.gpu_milliwatts)));
            lines.push(format!("  ANE: {:>8}", format_power(power.ane_milliwatts)));
            lines.push(format!(
                "  Total: {}",
                paint(Style::Bold, format!("{:>8}", format_power(power.total_milliwatts)))
            ));
        }
        None => lines.push(paint(Style::Yellow, "⚠️  Power metrics unavailable")),
    }
    lines.push(String::new());

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    fn snapshot(battery: Option<BatteryStatus>, power: Option<PowerMetrics>) -> EnergySnapshot {
        let at = Local.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap();
        EnergySnapshot::at(at, battery, power)
    }

    fn discharging() -> BatteryStatus {
        BatteryStatus {
            percentage: 72,
            is_charging: false,
            is_fully_charged: false,
            time_remaining: Some("4:32".to_string()),
            cycle_count: Some(187),
            condition: Some("Normal".to_string()),
        }
    }

    fn power() -> PowerMetrics {
        PowerMetrics {
            cpu_milliwatts: 1500,
            gpu_milliwatts: 999,
            ane_milliwatts: 0,
            total_milliwatts: 2499,
        }
    }

    #[test]
    fn test_full_layout_with_both_records() {
        let text = render_full(&snapshot(Some(discharging()), Some(power())), 1.0, 20).join("\n");
        assert!(text.contains("Battery & Energy Monitor"));
        assert!(text.contains("09:26:53"));
        assert!(text.contains("🔋 On Battery"));
        assert!(text.contains("72%"));
        assert!(text.contains("Time Remaining: 4:32"));
        assert!(text.contains("Cycle Count: 187"));
        assert!(text.contains(&format!("Health: {}", paint(Style::Green, "Normal"))));
        assert!(text.contains("CPU:      1.50W"));
        assert!(text.contains("GPU:      999mW"));
        assert!(text.contains("Updating every 1.0s"));
        assert!(!text.contains("unavailable"));
    }

    #[test]
    fn test_full_layout_power_unavailable_keeps_battery() {
        let text = render_full(&snapshot(Some(discharging()), None), 0.5, 20).join("\n");
        assert!(text.contains("Power metrics unavailable"));
        assert!(text.contains("Battery Status"));
        assert!(text.contains("72%"));
        assert!(!text.contains("Power Consumption"));
        assert!(text.contains("Updating every 0.5s"));
    }

    #[test]
    fn test_full_layout_battery_unavailable_keeps_power() {
        let text = render_full(&snapshot(None, Some(power())), 1.0, 20).join("\n");
        assert!(text.contains("Battery data unavailable"));
        assert!(text.contains("Power Consumption"));
        assert!(text.contains("2.50W"));
    }

    #[test]
    fn test_full_layout_omits_absent_fields() {
        let battery = BatteryStatus {
            percentage: 100,
            is_charging: true,
            is_fully_charged: true,
            ..BatteryStatus::default()
        };
        let text = render_full(&snapshot(Some(battery), None), 1.0, 20).join("\n");
        assert!(text.contains("⚡ Fully Charged"));
        assert!(!text.contains("Time Remaining"));
        assert!(!text.contains("Cycle Count"));
        assert!(!text.contains("Health"));
    }

    #[test]
    fn test_compact_layout() {
        let line = render_compact(&snapshot(Some(discharging()), Some(power())));
        assert!(line.starts_with("🔋 "));
        assert!(line.contains(" 72%"));
        assert!(line.contains("CPU:   1.50W"));
        assert!(line.contains("Total:   2.50W"));
        assert!(line.contains("09:26:53"));
        assert!(!line.contains('\n'));
    }

    #[test]
    fn test_compact_layout_unavailable_records() {
        let line = render_compact(&snapshot(Some(discharging()), None));
        assert!(line.contains("Power metrics unavailable"));
        assert!(line.contains(" 72%"));

        let line = render_compact(&snapshot(None, Some(power())));
        assert!(line.contains("Battery unavailable"));
        assert!(line.contains("CPU:"));
    }

    #[test]
    fn test_snapshot_layout() {
        let text = render_snapshot(&snapshot(Some(discharging()), Some(power())), 30);
        assert!(text.contains("Battery & Energy Snapshot"));
        assert!(text.contains("2026-03-14 09:26:53"));
        assert!(text.contains("(Discharging)"));
        assert!(text.contains(&"█".repeat(21)));
        assert!(!text.contains(&"█".repeat(22)));
        assert!(text.contains("Power Consumption:"));
        assert!(text.contains("  ANE:      0mW"));
        assert!(text.ends_with('\n'));
    }
}
