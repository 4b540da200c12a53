//! At most one mark can hold a winning line.

use super::Invariant;
use crate::game::rules::LINES;
use crate::game::{Game, Mark};

/// Play stops at the first completed line, so the opponent can never have
/// one of their own.
pub struct SingleWinnerInvariant;

impl SingleWinnerInvariant {
    fn has_line(game: &Game, mark: Mark) -> bool {
        LINES
            .iter()
            .any(|line| line.iter().all(|pos| game.board().get(*pos).mark() == Some(mark)))
    }
}

impl Invariant<Game> for SingleWinnerInvariant {
    fn holds(game: &Game) -> bool {
        !(Self::has_line(game, Mark::X) && Self::has_line(game, Mark::O))
    }

    fn description() -> &'static str {
        "Both marks cannot complete a line"
    }
}
