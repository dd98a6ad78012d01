//! Battery and power metrics collection from external utilities.

use crate::error::{MonitorError, Result};
use crate::metrics::{
    command::{CommandRunner, CommandSet, CommandSpec, SystemCommandRunner},
    data::{BatteryStatus, PowerMetrics},
    extract,
    traits::MetricsProvider,
};
use tracing::{debug, info};

/// Metrics collector backed by `pmset`, `system_profiler` and `powermetrics`.
///
/// Nothing is cached between cycles; every call runs its commands afresh.
pub struct EnergyCollector<R = SystemCommandRunner> {
    runner: R,
    commands: CommandSet,
}

impl EnergyCollector {
    /// Create a collector that spawns the default commands.
    pub fn new() -> Self {
        Self::with_runner(SystemCommandRunner, CommandSet::default())
    }
}

impl Default for EnergyCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: CommandRunner> EnergyCollector<R> {
    /// Create a collector with a custom runner and command set.
    pub fn with_runner(runner: R, commands: CommandSet) -> Self {
        Self { runner, commands }
    }

    /// Commands this collector runs.
    pub fn commands(&self) -> &CommandSet {
        &self.commands
    }

    /// Run a command and return its stdout, treating a non-zero exit as failure.
    async fn run_checked(&self, spec: &CommandSpec) -> Result<String> {
        let output = self.runner.run(spec).await?;
        if !output.success() {
            return Err(MonitorError::command_failed(spec.display_name(), output.code));
        }
        Ok(output.stdout)
    }
}

impl<R: CommandRunner> MetricsProvider for EnergyCollector<R> {
    async fn collect_battery(&mut self) -> Result<BatteryStatus> {
        let status = self.run_checked(&self.commands.battery_status).await?;
        let profile = self.run_checked(&self.commands.hardware_profile).await?;

        let battery = extract::battery_status(&status, &profile);
        debug!(
            percentage = battery.percentage,
            charging = battery.is_charging,
            charged = battery.is_fully_charged,
            "battery status collected"
        );
        Ok(battery)
    }

    async fn collect_power(&mut self) -> Result<PowerMetrics> {
        let sample = self.run_checked(&self.commands.power_sampling).await?;
        let power = extract::power_metrics(&sample);
        debug!(total_mw = power.total_milliwatts, "power sample collected");
        Ok(power)
    }

    async fn request_privileges(&mut self) -> Result<()> {
        self.run_checked(&self.commands.privilege_elevation).await?;
        info!("elevated privileges granted");
        Ok(())
    }
}
