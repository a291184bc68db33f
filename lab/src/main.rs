//! Lab console entry point.
//!
//! Shows the activity menu on stdin/stdout until the operator exits.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use lab::activities::LabActivities;
use lab::exit_codes;
use lab::io::config::{DEFAULT_CONFIG_FILE, load_config};
use lab::io::console::StreamConsole;
use lab::menu::run_menu;

#[derive(Parser)]
#[command(
    name = "lab",
    version,
    about = "Console menu of introductory programming lab activities"
)]
struct Cli {
    /// Optional TOML config; ignored when the file does not exist.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
}

fn main() {
    lab::logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::INVALID);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli.config).context("load config")?;
    let activities = LabActivities::new().context("prepare activities")?;
    let mut console = StreamConsole::stdio();
    let outcome = run_menu(&mut console, &activities, &config)?;
    debug!(?outcome, "menu finished");
    Ok(())
}
