//! grove command-line front end.
//!
//! Plants the trees described by a config file into the process-wide forest
//! and logs a message (or every stdin line) through them.
//!
//! ```text
//! grove --config grove.toml --priority warn --tag Net "slow handshake"
//! printf 'a\nb\n' | grove -p debug
//! ```

use std::io::{self, BufRead};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use grove::config::{load_config, GroveConfig};
use grove::Priority;

#[derive(Parser)]
#[command(name = "grove")]
#[command(about = "Log messages through configured grove trees", long_about = None)]
struct Cli {
    /// TOML file describing which trees to plant.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Priority name (verbose, debug, info, warn, error, assert) or number.
    #[arg(short, long, default_value = "info")]
    priority: Priority,

    /// One-shot tag for each message instead of the inferred one.
    #[arg(short, long)]
    tag: Option<String>,

    /// Message to log. Reads lines from stdin when omitted.
    message: Vec<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "grove=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => GroveConfig::default(),
    };

    config.plant_into(grove::global())?;

    if cli.message.is_empty() {
        for line in io::stdin().lock().lines() {
            log_line(&cli, &line?);
        }
    } else {
        log_line(&cli, &cli.message.join(" "));
    }

    grove::uproot_all();
    Ok(())
}

fn log_line(cli: &Cli, line: &str) {
    match &cli.tag {
        Some(tag) => grove::log!(in grove::tag(tag), cli.priority, line),
        None => grove::log!(cli.priority, line),
    }
}
