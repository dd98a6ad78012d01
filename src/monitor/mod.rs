//! Snapshot report and the continuous render loop.
//!
//! The loop is strictly sequential: acquire, render, sleep, repeat. An
//! interrupt is only observed while acquiring or sleeping, so a frame is
//! either written whole or not at all.

pub mod config;

pub use config::{Layout, MonitorConfig};

use crate::display::layout::{render_compact, render_full, render_snapshot};
use crate::display::style::Style;
use crate::display::terminal::Screen;
use crate::error::{MonitorError, Result};
use crate::metrics::data::EnergySnapshot;
use crate::metrics::traits::MetricsProvider;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::io::Write;
use tokio::{signal, time};
use tracing::{error, info, warn};

/// How the snapshot report is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Pretty,
    Json,
}

/// Render loop states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorState {
    Startup,
    Steady,
    Stopped,
}

/// Continuous battery and power monitor.
pub struct Monitor<P, W: Write> {
    provider: P,
    screen: Screen<W>,
    config: MonitorConfig,
    state: MonitorState,
}

impl<P: MetricsProvider, W: Write> Monitor<P, W> {
    /// Create a monitor drawing to `out`.
    pub fn new(provider: P, out: W, config: MonitorConfig) -> Self {
        Self {
            provider,
            screen: Screen::new(out),
            config,
            state: MonitorState::Startup,
        }
    }

    /// Current state.
    pub fn state(&self) -> MonitorState {
        self.state
    }

    /// Number of frames drawn.
    pub fn frames(&self) -> u64 {
        self.screen.frames()
    }

    /// Give back the output writer.
    pub fn into_inner(self) -> W {
        self.screen.into_inner()
    }

    /// Run until Ctrl+C. Returns the number of frames drawn.
    pub async fn run(&mut self) -> Result<u64> {
        self.run_until(interrupted()).await
    }

    /// Run until `shutdown` resolves. Returns the number of frames drawn.
    pub async fn run_until<F>(&mut self, shutdown: F) -> Result<u64>
    where
        F: Future<Output = ()>,
    {
        self.config.validate()?;
        tokio::pin!(shutdown);

        self.startup().await?;
        self.state = MonitorState::Steady;
        let interval = self.config.tick_interval();
        info!(interval = ?interval, layout = ?self.config.layout, "monitoring started");

        loop {
            let snapshot = tokio::select! {
                biased;
                _ = &mut shutdown => break,
                snapshot = self.provider.collect_snapshot() => snapshot,
            };

            self.draw(&snapshot)?;

            tokio::select! {
                biased;
                _ = &mut shutdown => break,
                _ = time::sleep(interval) => {}
            }
        }

        self.state = MonitorState::Stopped;
        self.screen.farewell()?;
        info!(frames = self.screen.frames(), "monitoring stopped");
        Ok(self.screen.frames())
    }

    /// Best-effort privilege request, then the single full-screen clear.
    async fn startup(&mut self) -> Result<()> {
        if self.config.request_privileges {
            self.screen
                .notice(Style::Yellow, "🔐 Requesting sudo access for power metrics...")?;
            if let Err(e) = self.provider.request_privileges().await {
                warn!(error = %e, "privilege elevation failed, power metrics unavailable");
                self.screen.notice(
                    Style::Red,
                    "✗ Failed to obtain sudo access. Power metrics will be unavailable.",
                )?;
                time::sleep(self.config.elevation_notice).await;
            }
        }
        self.screen.clear()
    }

    fn draw(&mut self, snapshot: &EnergySnapshot) -> Result<()> {
        match self.config.layout {
            Layout::Full => {
                let lines = render_full(snapshot, self.config.interval, self.config.bar_width);
                self.screen.present_full(&lines)
            }
            Layout::Compact => self.screen.present_line(&render_compact(snapshot)),
        }
    }
}

/// Run one acquisition cycle and write the report. No loop, no sleep.
///
/// Privileges are requested once first when the config asks for them; a
/// failure is logged and the report goes ahead without power data.
pub async fn snapshot<P, W>(
    provider: &mut P,
    out: W,
    config: &MonitorConfig,
    format: OutputFormat,
) -> Result<EnergySnapshot>
where
    P: MetricsProvider,
    W: Write,
{
    config.validate()?;
    if config.request_privileges {
        if let Err(e) = provider.request_privileges().await {
            warn!(error = %e, "privilege elevation failed, power metrics unavailable");
        }
    }
    let snapshot = provider.collect_snapshot().await;
    let mut screen = Screen::new(out);

    match format {
        OutputFormat::Pretty => {
            screen.print(&render_snapshot(&snapshot, config.snapshot_bar_width))?;
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&snapshot)
                .map_err(|e| MonitorError::terminal_error(format!("failed to encode snapshot: {e}")))?;
            screen.print(&format!("{json}\n"))?;
        }
    }

    Ok(snapshot)
}

/// Resolves on Ctrl+C. Never resolves if the handler cannot be installed.
async fn interrupted() {
    if let Err(e) = signal::ctrl_c().await {
        error!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
}
