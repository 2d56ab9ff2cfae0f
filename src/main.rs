#![allow(non_snake_case)]

mod app;
mod components;
mod context;
mod theme;

use anyhow::Result;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use oceansim_core::{ClientConfig, SimulationClient, DEFAULT_ENDPOINT, ENDPOINT_ENV, TIMEOUT_ENV};

/// Ocean Simulation Viewer
#[derive(Parser, Debug)]
#[command(name = "oceansim-desktop")]
#[command(about = "Ocean Simulation Viewer - run a remote simulation and view the result")]
struct Args {
    /// Simulation endpoint URL
    #[arg(short, long, env = ENDPOINT_ENV, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Request timeout in seconds (waits indefinitely if unset)
    #[arg(short, long, env = TIMEOUT_ENV)]
    timeout_secs: Option<u64>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    let config = ClientConfig::new(&args.endpoint)?.with_timeout_secs(args.timeout_secs);
    tracing::info!(
        endpoint = %config.endpoint,
        timeout = ?config.timeout,
        "Starting Ocean Simulation Viewer"
    );
    let client = SimulationClient::new(config)?;

    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Ocean Simulation")
            .with_inner_size(dioxus::desktop::LogicalSize::new(900.0, 820.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .with_context(client)
        .launch(app::App);

    Ok(())
}
