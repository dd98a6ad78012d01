//! Energy Monitor - Battery & Power Diagnostics Binary
//!
//! Prints a one-shot battery and power report, or refreshes it continuously.

use clap::{Parser, ValueEnum};
use energy_monitor::{
    metrics::SystemCommandRunner, snapshot, EnergyCollector, Layout, Monitor, MonitorConfig,
    OutputFormat, DEFAULT_INTERVAL_SECS,
};
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "energy_monitor")]
#[command(about = "🔋 Real-Time Battery & Energy Monitor for Apple Silicon Macs")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "Austin Couch")]
#[command(after_help = "Examples:
  energy_monitor                   # Single snapshot
  energy_monitor -m                # Real-time monitoring (full display)
  energy_monitor -m --compact      # Real-time monitoring (compact)
  energy_monitor -m --interval 2   # Update every 2 seconds")]
struct Cli {
    /// Enable real-time monitoring mode
    #[arg(short, long)]
    monitor: bool,

    /// Update interval in seconds
    #[arg(short, long, default_value_t = DEFAULT_INTERVAL_SECS)]
    interval: f64,

    /// Use compact single-line display
    #[arg(short, long)]
    compact: bool,

    /// Snapshot output format
    #[arg(short, long, value_enum, default_value_t = Format::Pretty)]
    format: Format,

    /// Skip the startup sudo prompt (power metrics need cached credentials)
    #[arg(long)]
    no_sudo: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Pretty,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Pretty => OutputFormat::Pretty,
            Format::Json => OutputFormat::Json,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(&cli)?;

    let config = build_config(&cli);
    config.validate()?;

    let mut collector = build_collector(&config);
    if cli.monitor {
        let mut monitor = Monitor::new(collector, std::io::stdout(), config);
        let frames = monitor.run().await?;
        info!(frames, "exiting");
    } else {
        snapshot(&mut collector, std::io::stdout(), &config, cli.format.into()).await?;
    }

    Ok(())
}

fn build_config(cli: &Cli) -> MonitorConfig {
    let layout = if cli.compact {
        Layout::Compact
    } else {
        Layout::Full
    };

    MonitorConfig::default()
        .with_interval(cli.interval)
        .with_layout(layout)
        .with_privileges(!cli.no_sudo)
}

fn build_collector(config: &MonitorConfig) -> EnergyCollector {
    EnergyCollector::with_runner(SystemCommandRunner, config.commands.clone())
}

fn init_logging(cli: &Cli) -> anyhow::Result<()> {
    let level = if cli.debug {
        Level::DEBUG
    } else if cli.verbose {
        Level::INFO
    } else {
        Level::WARN
    };

    // stdout is the display; logs go to stderr
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialise logging: {e}"))?;

    Ok(())
}
