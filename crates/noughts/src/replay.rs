//! Headless playback of a move list.

use anyhow::{Context, Result};
use noughts_core::{Game, Placement};
use std::io::Write;
use tracing::{info, instrument, warn};

/// Output format for [`run_replay`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReplayFormat {
    /// Board grid followed by the status line.
    #[default]
    Text,
    /// Pretty-printed JSON snapshot.
    Json,
}

/// Plays `moves` on a fresh game and writes the final state to `out`.
///
/// Moves on filled cells or after a win are skipped, as in the TUI.
///
/// # Errors
///
/// Fails on an out-of-range index or if `out` cannot be written.
#[instrument(skip(out))]
pub fn run_replay(moves: &[usize], format: ReplayFormat, out: &mut impl Write) -> Result<()> {
    let mut game = Game::new();
    for (turn, &index) in moves.iter().enumerate() {
        match game
            .play(index)
            .with_context(|| format!("Move {} is invalid", turn + 1))?
        {
            Placement::Placed { position, mark } => {
                info!(turn = turn + 1, %position, %mark, "Replayed move");
            }
            Placement::Ignored(reason) => {
                warn!(turn = turn + 1, index, %reason, "Skipped move");
            }
        }
    }

    match format {
        ReplayFormat::Text => {
            writeln!(out, "{}", game.board().display())?;
            writeln!(out)?;
            writeln!(out, "{}", game.status())?;
        }
        ReplayFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &game.snapshot())?;
            writeln!(out)?;
        }
    }
    Ok(())
}
