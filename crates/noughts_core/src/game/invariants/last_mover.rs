//! A completed line belongs to the mark that moved last.

use super::Invariant;
use crate::game::Game;

/// Play stops on the winning move and the turn still passes, so a winner is
/// always the opponent of the mark due to move.
pub struct LastMoverWinsInvariant;

impl Invariant<Game> for LastMoverWinsInvariant {
    fn holds(game: &Game) -> bool {
        game.winner()
            .is_none_or(|winner| winner == game.next().opponent())
    }

    fn description() -> &'static str {
        "Only the mark that moved last can hold a line"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, Mark, Position};

    #[test]
    fn test_holds_after_win() {
        let game = Game::replay(&[0, 3, 1, 4, 2]).expect("valid replay");
        assert_eq!(game.next(), Mark::O);
        assert!(LastMoverWinsInvariant::holds(&game));
    }

    #[test]
    fn test_detects_line_for_player_to_move() {
        let mut game = Game::new();
        for pos in [Position::MiddleLeft, Position::Center, Position::MiddleRight] {
            game.board.set(pos, Cell::O);
        }
        assert!(!LastMoverWinsInvariant::holds(&game));
    }
}
