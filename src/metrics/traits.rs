//! Traits for battery and power metrics collection.

use crate::error::Result;
use crate::metrics::data::{BatteryStatus, EnergySnapshot, PowerMetrics};
use std::future::Future;
use tracing::{debug, warn};

/// Trait for acquiring battery and power metrics.
///
/// The two acquisitions are independent: a failure of one must not affect
/// the other. [`MetricsProvider::collect_snapshot`] runs both and folds
/// failures into record-level absence.
pub trait MetricsProvider: Send {
    /// Acquire the battery record for this cycle.
    fn collect_battery(&mut self) -> impl Future<Output = Result<BatteryStatus>> + Send;

    /// Acquire the power record for this cycle.
    fn collect_power(&mut self) -> impl Future<Output = Result<PowerMetrics>> + Send;

    /// Ask for elevated privileges once, before monitoring starts.
    fn request_privileges(&mut self) -> impl Future<Output = Result<()>> + Send;

    /// Run one acquisition cycle. Never fails.
    fn collect_snapshot(&mut self) -> impl Future<Output = EnergySnapshot> + Send {
        async move {
            let battery = match self.collect_battery().await {
                Ok(battery) => Some(battery),
                Err(e) => {
                    warn!(error = %e, "battery data unavailable");
                    None
                }
            };

            let power = match self.collect_power().await {
                Ok(power) => Some(power),
                Err(e) => {
                    debug!(error = %e, "power metrics unavailable");
                    None
                }
            };

            EnergySnapshot::new(battery, power)
        }
    }
}
