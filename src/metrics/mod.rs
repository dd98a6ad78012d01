//! Battery and power metrics acquisition.
//!
//! This module runs the external power utilities, extracts fields from their
//! free-form output, and assembles the per-cycle battery and power records.

pub mod collector;
pub mod command;
pub mod data;
pub mod extract;
pub mod traits;

// Re-export commonly used items
pub use collector::EnergyCollector;
pub use command::{CommandOutput, CommandRunner, CommandSet, CommandSpec, SystemCommandRunner};
pub use data::{BatteryStatus, ChargeState, EnergySnapshot, PowerMetrics};
pub use traits::MetricsProvider;
