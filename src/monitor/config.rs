//! Monitor configuration.

use crate::error::{MonitorError, Result};
use crate::metrics::command::CommandSet;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Which continuous-mode layout to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Multi-line dashboard redrawn in place
    #[default]
    Full,
    /// One line rewritten in place
    Compact,
}

/// Configuration for the render loop and the snapshot report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// Seconds between ticks; fractional values allowed
    pub interval: f64,
    /// Continuous-mode layout
    pub layout: Layout,
    /// Bar width in continuous mode
    pub bar_width: usize,
    /// Bar width in the snapshot report
    pub snapshot_bar_width: usize,
    /// Run the privilege elevation command before the first tick
    pub request_privileges: bool,
    /// Pause after a failed elevation so the message can be read
    pub elevation_notice: Duration,
    /// External commands to run
    pub commands: CommandSet,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            interval: crate::DEFAULT_INTERVAL_SECS,
            layout: Layout::Full,
            bar_width: crate::DEFAULT_BAR_WIDTH,
            snapshot_bar_width: crate::SNAPSHOT_BAR_WIDTH,
            request_privileges: true,
            elevation_notice: Duration::from_secs(2),
            commands: CommandSet::default(),
        }
    }
}

impl MonitorConfig {
    /// Set the interval between ticks, in seconds.
    pub fn with_interval(mut self, seconds: f64) -> Self {
        self.interval = seconds;
        self
    }

    /// Set the continuous-mode layout.
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Set the continuous-mode bar width.
    pub fn with_bar_width(mut self, width: usize) -> Self {
        self.bar_width = width;
        self
    }

    /// Set the snapshot bar width.
    pub fn with_snapshot_bar_width(mut self, width: usize) -> Self {
        self.snapshot_bar_width = width;
        self
    }

    /// Enable or disable the startup privilege request.
    pub fn with_privileges(mut self, request: bool) -> Self {
        self.request_privileges = request;
        self
    }

    /// Set the pause after a failed privilege request.
    pub fn with_elevation_notice(mut self, pause: Duration) -> Self {
        self.elevation_notice = pause;
        self
    }

    /// Set the external commands.
    pub fn with_commands(mut self, commands: CommandSet) -> Self {
        self.commands = commands;
        self
    }

    /// Check the configuration before starting.
    pub fn validate(&self) -> Result<()> {
        if !self.interval.is_finite() || self.interval <= 0.0 {
            return Err(MonitorError::config_error(format!(
                "interval must be a positive number of seconds, got {}",
                self.interval
            )));
        }
        if self.bar_width == 0 || self.snapshot_bar_width == 0 {
            return Err(MonitorError::config_error("bar width must be at least 1"));
        }
        Ok(())
    }

    /// Interval between ticks. Call [`MonitorConfig::validate`] first.
    pub fn tick_interval(&self) -> Duration {
        Duration::try_from_secs_f64(self.interval).unwrap_or(Duration::from_secs(1))
    }
}
