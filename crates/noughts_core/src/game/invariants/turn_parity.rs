//! Turn parity: mark counts agree with the turn flag.

use super::Invariant;
use crate::game::{Game, Mark};

/// X moves first and turns alternate, so either the counts are equal and X
/// is next, or X leads by one and O is next.
pub struct TurnParityInvariant;

impl Invariant<Game> for TurnParityInvariant {
    fn holds(game: &Game) -> bool {
        let x = game.board().count(Mark::X);
        let o = game.board().count(Mark::O);
        match game.next() {
            Mark::X => x == o,
            Mark::O => x == o + 1,
        }
    }

    fn description() -> &'static str {
        "Mark counts must agree with the player to move"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, Position};

    #[test]
    fn test_holds_through_full_game() {
        let mut game = Game::new();
        for index in [0, 2, 1, 3, 5, 4, 6, 7, 8] {
            game.play(index).expect("in range");
            assert!(TurnParityInvariant::holds(&game));
        }
    }

    #[test]
    fn test_detects_missing_mark() {
        let mut game = Game::new();
        game.play(0).expect("in range");
        game.board.set(Position::TopLeft, Cell::Empty);
        assert!(!TurnParityInvariant::holds(&game));
    }
}
