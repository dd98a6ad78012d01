use chrono::{Local, TimeZone};
use energy_monitor::{
    display::{battery_bar, battery_color, format_power, Style},
    error::MonitorError,
    metrics::{extract, CommandSet},
    BatteryStatus, EnergySnapshot, Layout, MonitorConfig, PowerMetrics,
};
use std::time::Duration;

/// Test EnergySnapshot serialization and deserialization
#[test]
fn test_energy_snapshot_serialization() {
    let captured_at = Local.with_ymd_and_hms(2026, 10, 16, 14, 5, 0).unwrap();
    let snapshot = EnergySnapshot::at(
        captured_at,
        Some(BatteryStatus {
            percentage: 87,
            is_charging: true,
            is_fully_charged: false,
            time_remaining: Some("0:45".to_string()),
            cycle_count: Some(120),
            condition: Some("Normal".to_string()),
        }),
        None,
    );

    let json = serde_json::to_string_pretty(&snapshot).expect("Should serialize to JSON");
    assert!(json.contains("\"percentage\": 87"));
    assert!(json.contains("\"power\": null"));

    let deserialized: EnergySnapshot =
        serde_json::from_str(&json).expect("Should deserialize from JSON");
    assert_eq!(deserialized.battery, snapshot.battery);
    assert!(deserialized.power.is_none());
    assert_eq!(deserialized.captured_at, captured_at);
}

/// Test JSON field names for EnergySnapshot
#[test]
fn test_json_schema_validation() {
    let snapshot = EnergySnapshot::new(Some(BatteryStatus::default()), Some(PowerMetrics::default()));
    let json_value = serde_json::to_value(&snapshot).expect("Should serialize");

    assert!(json_value.get("captured_at").is_some());
    assert!(json_value.get("battery").is_some());
    assert!(json_value.get("power").is_some());

    let battery = json_value.get("battery").unwrap();
    for field in [
        "percentage",
        "is_charging",
        "is_fully_charged",
        "time_remaining",
        "cycle_count",
        "condition",
    ] {
        assert!(battery.get(field).is_some(), "missing battery.{field}");
    }

    let power = json_value.get("power").unwrap();
    for field in [
        "cpu_milliwatts",
        "gpu_milliwatts",
        "ane_milliwatts",
        "total_milliwatts",
    ] {
        assert!(power.get(field).is_some(), "missing power.{field}");
    }
}

/// Test default implementations
#[test]
fn test_default_implementations() {
    let battery = BatteryStatus::default();
    assert_eq!(battery.percentage, 0);
    assert!(!battery.is_charging);
    assert!(!battery.is_fully_charged);
    assert!(battery.time_remaining.is_none());
    assert!(battery.cycle_count.is_none());
    assert!(battery.condition.is_none());

    let power = PowerMetrics::default();
    assert_eq!(power.total_milliwatts, 0);
}

/// Test MonitorError creation and formatting
#[test]
fn test_monitor_error_types() {
    let timeout = MonitorError::timeout_error("pmset -g batt", Duration::from_secs(2));
    assert!(format!("{}", timeout).contains("pmset -g batt"));
    assert!(format!("{}", timeout).contains("2s"));

    let failed = MonitorError::command_failed("sudo -n powermetrics", Some(1));
    assert!(format!("{}", failed).contains("status 1"));

    let killed = MonitorError::command_failed("powermetrics", None);
    assert!(format!("{}", killed).contains("signal"));

    let spawn = MonitorError::spawn_error(
        "system_profiler",
        std::io::Error::from(std::io::ErrorKind::NotFound),
    );
    assert!(format!("{}", spawn).contains("system_profiler"));

    let config_error = MonitorError::config_error("Invalid configuration");
    assert!(format!("{}", config_error).contains("Invalid configuration"));

    let terminal_error = MonitorError::terminal_error("broken pipe");
    assert!(format!("{}", terminal_error).contains("broken pipe"));
}

/// Test MonitorConfig builder pattern
#[test]
fn test_monitor_config() {
    let config = MonitorConfig::default()
        .with_interval(0.5)
        .with_layout(Layout::Compact)
        .with_bar_width(10)
        .with_snapshot_bar_width(40)
        .with_privileges(false)
        .with_elevation_notice(Duration::ZERO)
        .with_commands(CommandSet::default());

    assert_eq!(config.interval, 0.5);
    assert_eq!(config.layout, Layout::Compact);
    assert_eq!(config.bar_width, 10);
    assert_eq!(config.snapshot_bar_width, 40);
    assert!(!config.request_privileges);
    assert_eq!(config.elevation_notice, Duration::ZERO);
    assert_eq!(config.tick_interval(), Duration::from_millis(500));
    assert!(config.validate().is_ok());
}

/// Test that MonitorConfig survives a JSON round trip
#[test]
fn test_monitor_config_json() {
    let config = MonitorConfig::default().with_layout(Layout::Compact);
    let json = serde_json::to_string(&config).expect("Should serialize");
    assert!(json.contains("\"layout\":\"compact\""));

    let parsed: MonitorConfig = serde_json::from_str(&json).expect("Should deserialize");
    assert_eq!(parsed.layout, Layout::Compact);
    assert_eq!(parsed.commands, CommandSet::default());
}

/// AC power without a discharging marker is charging
#[test]
fn test_ac_power_is_charging() {
    for text in [
        "Now drawing from 'AC Power'\n 45%; charging; 1:10 remaining",
        "Now drawing from 'AC Power'\n 100%; charged; 0:00 remaining",
        "Now drawing from 'AC Power'\n 80%; AC attached; not charging",
    ] {
        assert!(extract::is_charging(text), "{text}");
    }
}

/// "discharged" contains "charged"; both present must not read as full
#[test]
fn test_charged_and_discharged_regression() {
    let text = "Now drawing from 'Battery Power'\n 0%; discharged; charged 0:00";
    assert!(!extract::is_fully_charged(text));

    let status = extract::battery_status(text, "");
    assert!(!status.is_fully_charged);
    assert!(!status.is_charging);
}

/// Display contract for power values
#[test]
fn test_power_display_contract() {
    assert_eq!(format_power(999), " 999mW");
    assert_eq!(format_power(1500), "1.50W");
}

/// Bar fill and color thresholds
#[test]
fn test_bar_and_color() {
    let bar = battery_bar(50, 20);
    assert_eq!(bar.chars().filter(|&c| c == '█').count(), 10);
    assert_eq!(bar.chars().filter(|&c| c == '░').count(), 10);

    assert_eq!(battery_color(20, false), Style::Red);
    assert_eq!(battery_color(20, true), Style::Cyan);
}
