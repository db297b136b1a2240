use anyhow::{Context, Result};
use clap::Parser;
use std::io::Read;
use std::path::PathBuf;
use std::rc::Rc;
use tracing::{Level, debug, info};
use tracing_subscriber::FmtSubscriber;

use parkade::Owner;
use parkade::config::{DEFAULT_CAPACITY, FileConfig};
use parkade::lot::LoggingNotifier;
use parkade::script::{Runner, parse_script};

/// Run a parking lot script against a single lot
///
/// Examples:
///   # Ten-slot lot, commands from a file
///   parkade -n 10 -s arrivals.txt
///
///   # Commands from stdin, status as JSON
///   printf 'park AP-1234 red\nstatus\n' | parkade -n 2 --json
///
///   # Use a config file
///   parkade --config my-lot.toml -s arrivals.txt
#[derive(Parser, Debug)]
#[command(name = "parkade")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches parkade.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of slots in the lot
    #[arg(short = 'n', long, allow_hyphen_values = true)]
    capacity: Option<i64>,

    /// Script file to run (reads stdin when omitted)
    #[arg(short = 's', long)]
    script: Option<PathBuf>,

    /// Print status snapshots as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let file_config = match args.config {
        Some(ref config_path) => Some(FileConfig::from_path(config_path)?),
        None => FileConfig::load(),
    };

    let capacity = args
        .capacity
        .or_else(|| file_config.as_ref().map(|c| c.capacity))
        .unwrap_or(DEFAULT_CAPACITY);
    let verbose = args.verbose || file_config.as_ref().map(|c| c.verbose).unwrap_or(false);
    let json = args.json || file_config.as_ref().map(|c| c.json).unwrap_or(false);

    FmtSubscriber::builder()
        .with_max_level(if verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    debug!(capacity, json, "configuration resolved");

    let source = match args.script {
        Some(ref path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script file: {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read script from stdin")?;
            buf
        }
    };
    let script = parse_script(&source).context("Failed to parse script")?;

    let owner = Owner::new();
    let lot = owner
        .create_parking_lot(capacity)
        .context("Failed to create parking lot")?;
    info!(lot = %lot.id(), capacity = lot.capacity(), "parking lot open");

    let mut runner = Runner::new(lot).with_json(json);
    runner.register_notifiable(Rc::new(LoggingNotifier::new("attendant")));

    for line in runner.run(&script) {
        println!("{}", line);
    }

    Ok(())
}
