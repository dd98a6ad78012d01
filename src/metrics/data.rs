//! Data structures for battery and power metrics.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Battery charge state as reported by one acquisition cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatteryStatus {
    /// Charge level; 0 when the source text carried no percentage.
    /// Not range-checked: malformed text may yield values above 100.
    pub percentage: u32,
    /// On an AC source and not discharging
    pub is_charging: bool,
    /// Reported as charged and not as discharged
    pub is_fully_charged: bool,
    /// Remaining time as reported upstream (e.g. "4:32")
    pub time_remaining: Option<String>,
    /// Battery cycle count
    pub cycle_count: Option<u32>,
    /// Health label (e.g. "Normal")
    pub condition: Option<String>,
}

/// Power draw sampled from the privileged sampler, in milliwatts.
///
/// Each component defaults to 0 when its line is missing from the sample.
/// A failed sample is represented by the absence of the whole record, never
/// by a zeroed one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerMetrics {
    pub cpu_milliwatts: u32,
    pub gpu_milliwatts: u32,
    pub ane_milliwatts: u32,
    pub total_milliwatts: u32,
}

/// The result of one acquisition cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnergySnapshot {
    /// Local time the cycle finished
    pub captured_at: DateTime<Local>,
    /// `None` when battery acquisition failed this cycle
    pub battery: Option<BatteryStatus>,
    /// `None` when power sampling failed this cycle
    pub power: Option<PowerMetrics>,
}

/// Display state derived from the two charge flags.
///
/// Precedence is fully charged, then charging, then on battery, so the
/// flags need not be mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChargeState {
    FullyCharged,
    Charging,
    OnBattery,
}

impl BatteryStatus {
    /// Display state for this record.
    pub fn charge_state(&self) -> ChargeState {
        if self.is_fully_charged {
            ChargeState::FullyCharged
        } else if self.is_charging {
            ChargeState::Charging
        } else {
            ChargeState::OnBattery
        }
    }
}

impl Default for BatteryStatus {
    fn default() -> Self {
        Self {
            percentage: 0,
            is_charging: false,
            is_fully_charged: false,
            time_remaining: None,
            cycle_count: None,
            condition: None,
        }
    }
}

impl EnergySnapshot {
    /// Create a snapshot stamped with the current local time.
    pub fn new(battery: Option<BatteryStatus>, power: Option<PowerMetrics>) -> Self {
        Self::at(Local::now(), battery, power)
    }

    /// Create a snapshot with an explicit timestamp.
    pub fn at(
        captured_at: DateTime<Local>,
        battery: Option<BatteryStatus>,
        power: Option<PowerMetrics>,
    ) -> Self {
        Self {
            captured_at,
            battery,
            power,
        }
    }
}
