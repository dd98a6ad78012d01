//! # Energy Monitor - Battery & Power Diagnostics
//!
//! Polls the macOS power utilities (`pmset`, `system_profiler`,
//! `powermetrics`) and renders battery and energy consumption either as a
//! one-shot report or as a continuously refreshing terminal display.
//!
//! ## Features
//!
//! - **Defensive parsing**: every field is extracted independently from free-form
//!   command output; a missing field never fails the whole record
//! - **Failure isolation**: battery and power acquisition fail independently
//! - **Flicker-free refresh**: in-place redraw after a single initial clear
//! - **Library + Binary**: use as a crate or standalone application
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use energy_monitor::{EnergyCollector, Monitor, MonitorConfig};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = MonitorConfig::default().with_interval(2.0);
//!     let mut monitor = Monitor::new(EnergyCollector::new(), std::io::stdout(), config);
//!     monitor.run().await?;
//!     Ok(())
//! }
//! ```

pub mod display;
pub mod error;
pub mod metrics;
pub mod monitor;

// Re-export public API
pub use error::{MonitorError, Result};
pub use metrics::{
    collector::EnergyCollector,
    data::{BatteryStatus, EnergySnapshot, PowerMetrics},
    traits::MetricsProvider,
};
pub use monitor::{snapshot, Layout, Monitor, MonitorConfig, OutputFormat};

/// The default refresh interval in seconds
pub const DEFAULT_INTERVAL_SECS: f64 = 1.0;

/// Battery bar width in continuous mode
pub const DEFAULT_BAR_WIDTH: usize = 20;

/// Battery bar width in the snapshot report
pub const SNAPSHOT_BAR_WIDTH: usize = 30;
