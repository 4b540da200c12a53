//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use noughts_core::Theme;
use std::path::PathBuf;

/// Noughts - tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Tic-tac-toe with a light/dark theme toggle", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it is missing)
    #[arg(short, long, default_value = "noughts.toml", global = true)]
    pub config: PathBuf,

    /// Initial theme, overriding the config file
    #[arg(long, global = true)]
    pub theme: Option<Theme>,

    /// Subcommand to run (defaults to the TUI)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq, Default)]
pub enum Command {
    /// Play interactively in the terminal
    #[default]
    Tui,

    /// Play a sequence of cell indices (0-8) and print the result
    Replay {
        /// Cell indices in play order, X first
        #[arg(required = true)]
        moves: Vec<usize>,

        /// Print a JSON snapshot instead of the board
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_tui() {
        let cli = Cli::try_parse_from(["noughts"]).expect("parse");
        assert_eq!(cli.command, None);
        assert_eq!(cli.theme, None);
        assert_eq!(cli.config, PathBuf::from("noughts.toml"));
    }

    #[test]
    fn test_replay_args() {
        let cli = Cli::try_parse_from(["noughts", "--theme", "dark", "replay", "0", "3", "--json"])
            .expect("parse");
        assert_eq!(cli.theme, Some(Theme::Dark));
        assert_eq!(
            cli.command,
            Some(Command::Replay {
                moves: vec![0, 3],
                json: true
            })
        );
    }

    #[test]
    fn test_rejects_unknown_theme() {
        assert!(Cli::try_parse_from(["noughts", "--theme", "sepia"]).is_err());
    }
}
