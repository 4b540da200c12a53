//! Noughts - unified CLI.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use noughts::{AppConfig, Cli, Command, ReplayFormat};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;
    let theme = cli.theme.unwrap_or(*config.theme());

    match cli.command.unwrap_or_default() {
        Command::Tui => {
            noughts::init_file_logging(config.log_file(), config.log_filter())?;
            info!(%theme, "Starting Noughts TUI");
            noughts::tui::run(theme)
        }
        Command::Replay { moves, json } => {
            noughts::init_stderr_logging(config.log_filter());
            let format = if json {
                ReplayFormat::Json
            } else {
                ReplayFormat::Text
            };
            noughts::run_replay(&moves, format, &mut std::io::stdout().lock())
        }
    }
}
