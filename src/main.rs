//! apanel — entry point.
//!
//! Two modes, mirroring the panel's lifecycle:
//!
//! - **run** (default): discover the panel, darken it, then mirror sim
//!   autopilot flags onto the LEDs until the sim quits.
//! - **self-test**: walk every LED through the attention pattern to
//!   validate the device path end to end, no sim required.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{info, warn};

use apanel::adapters::console::ConsolePanel;
use apanel::adapters::log_sink::LogEventSink;
use apanel::adapters::telemetry::ScriptedTelemetry;
use apanel::adapters::time::StdClock;
use apanel::app::ports::DeviceEnumerator;
use apanel::app::service::SyncService;
use apanel::config::PanelConfig;
use apanel::discovery::select_panel;
use apanel::rules;
use apanel::selftest;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Path to a JSON config file (defaults apply for missing fields).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the poll interval in milliseconds.
    #[arg(long)]
    interval_ms: Option<u32>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Flash every LED in sequence, then exit.
    SelfTest,
}

fn load_config(path: Option<&PathBuf>) -> Result<PanelConfig> {
    match path {
        Some(p) => {
            let raw = fs::read_to_string(p)
                .with_context(|| format!("reading config {}", p.display()))?;
            let config = serde_json::from_str(&raw)
                .with_context(|| format!("parsing config {}", p.display()))?;
            info!("Config loaded from {}", p.display());
            Ok(config)
        }
        None => Ok(PanelConfig::default()),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("apanel v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    let mut config = load_config(cli.config.as_ref())?;
    if let Some(ms) = cli.interval_ms {
        config.poll_interval_ms = ms;
    }

    // The console adapter stands in for the VKB HID transport; discovery
    // runs against its enumeration so startup takes the production path.
    let mut panel = ConsolePanel::new();
    let devices = panel.enumerate();
    let picked = select_panel(&devices)?;
    info!("FSM-GA panel found: {} ({})", picked.name, picked.guid);

    let mut clock = StdClock::new();

    match cli.command {
        Some(Command::SelfTest) => {
            selftest::run(&mut panel, &mut clock, &config);
        }
        None => {
            let mut telemetry = bench_script();
            let mut sink = LogEventSink::new();
            let mut service = SyncService::new();
            warn!("No sim client wired yet — running the bench telemetry script");
            service.run(&mut telemetry, &mut panel, &mut sink, &mut clock, &config)?;
        }
    }
    Ok(())
}

/// A short scripted flight until the sim client lands: master on, an
/// approach arming then capturing, altitude capture, then everything off.
fn bench_script() -> ScriptedTelemetry {
    ScriptedTelemetry::from_slices(&[
        &[(rules::AP_MASTER, 1.0), (rules::AP_FLIGHT_DIRECTOR, 1.0)],
        &[
            (rules::AP_MASTER, 1.0),
            (rules::AP_FLIGHT_DIRECTOR, 1.0),
            (rules::AP_HEADING_LOCK, 1.0),
            (rules::AP_ALTITUDE_ARM, 1.0),
        ],
        &[
            (rules::AP_MASTER, 1.0),
            (rules::AP_FLIGHT_DIRECTOR, 1.0),
            (rules::AP_HEADING_LOCK, 1.0),
            (rules::AP_ALTITUDE_LOCK, 1.0),
            (rules::AP_APPROACH_ARM, 1.0),
        ],
        &[
            (rules::AP_MASTER, 1.0),
            (rules::AP_FLIGHT_DIRECTOR, 1.0),
            (rules::AP_ALTITUDE_LOCK, 1.0),
            (rules::AP_APPROACH_ACTIVE, 1.0),
        ],
        &[],
    ])
}
