//! Status line derivation.

use super::rules;
use super::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// What the status line reports about a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// A mark completed a line.
    #[display("Winner: {}", _0)]
    Winner(Mark),
    /// The board filled with no completed line.
    #[display("Draw")]
    Draw,
    /// The game continues with this mark to move.
    #[display("Next player: {}", _0)]
    NextPlayer(Mark),
}

impl Status {
    /// True once no further move can be accepted.
    pub fn is_over(self) -> bool {
        !matches!(self, Status::NextPlayer(_))
    }
}

/// Derives the status from a board and the mark due to move.
///
/// A winner takes precedence over a full board.
#[instrument(skip(board))]
pub fn status(board: &Board, next: Mark) -> Status {
    if let Some(mark) = rules::winner(board) {
        Status::Winner(mark)
    } else if rules::is_full(board) {
        Status::Draw
    } else {
        Status::NextPlayer(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text() {
        assert_eq!(Status::Winner(Mark::X).to_string(), "Winner: X");
        assert_eq!(Status::NextPlayer(Mark::O).to_string(), "Next player: O");
        assert_eq!(Status::Draw.to_string(), "Draw");
    }

    #[test]
    fn test_empty_board_next_player() {
        assert_eq!(status(&Board::new(), Mark::X), Status::NextPlayer(Mark::X));
        assert!(!status(&Board::new(), Mark::X).is_over());
    }
}
