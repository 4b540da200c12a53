//! Noughts - terminal tic-tac-toe with a light/dark theme toggle.
//!
//! # Architecture
//!
//! - **Core** ([`noughts_core`]): game engine and theme controller
//! - **TUI**: ratatui front end driven by mouse clicks and keys
//! - **Replay**: headless move playback for scripts
//! - **Config**: TOML settings and tracing setup

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod logging;
mod replay;
pub mod tui;

pub use cli::{Cli, Command};
pub use config::{AppConfig, ConfigError};
pub use logging::{init_file_logging, init_stderr_logging};
pub use replay::{ReplayFormat, run_replay};
