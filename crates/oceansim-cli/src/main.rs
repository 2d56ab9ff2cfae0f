//! Ocean Simulation CLI
//!
//! Thin wrapper around oceansim-core for running simulations without the
//! desktop window.
//!
//! ## Usage
//!
//! ```bash
//! # Show the resolved configuration
//! oceansim info
//!
//! # Run with the service's default bathymetry
//! oceansim run --output result.png
//!
//! # Run with an uploaded grid against a remote service
//! oceansim --endpoint https://sim.example.org/simulate \
//!     run --file GEBCO_2024.nc --output result.png
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use oceansim_core::{
    ClientConfig, SelectedFile, SimulationClient, DEFAULT_ENDPOINT, ENDPOINT_ENV, TIMEOUT_ENV,
};

/// Ocean Simulation - headless runner
#[derive(Parser)]
#[command(name = "oceansim")]
#[command(version = "0.1.0")]
#[command(about = "Ocean Simulation - run the remote simulation from the command line")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Simulation endpoint URL
    #[arg(short, long, global = true, env = ENDPOINT_ENV, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Request timeout in seconds (waits indefinitely if unset)
    #[arg(short, long, global = true, env = TIMEOUT_ENV)]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the resolved configuration
    Info,

    /// Run a simulation and save the resulting image
    Run {
        /// Input file to upload (omit to use the service default)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Where to write the image
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let config = ClientConfig::new(&cli.endpoint)?.with_timeout_secs(cli.timeout_secs);

    match cli.command {
        Commands::Info => {
            println!("Ocean Simulation");
            println!("  Endpoint: {}", config.endpoint);
            match config.timeout {
                Some(t) => println!("  Timeout:  {}s", t.as_secs()),
                None => println!("  Timeout:  none"),
            }
        }

        Commands::Run { file, output } => {
            let file = match file {
                Some(path) => Some(
                    SelectedFile::from_path(&path)
                        .await
                        .with_context(|| format!("Failed to read {}", path.display()))?,
                ),
                None => None,
            };

            let client = SimulationClient::new(config)?;
            let image = client.fetch_image(file.as_ref()).await?;

            tokio::fs::write(&output, &image.bytes)
                .await
                .with_context(|| format!("Failed to write {}", output.display()))?;

            println!("Simulation complete");
            println!("  Output: {}", output.display());
            println!("  Size:   {} bytes", image.len());
            println!("  Type:   {}", image.mime);
        }
    }

    Ok(())
}
