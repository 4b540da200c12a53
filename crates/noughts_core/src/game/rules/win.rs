//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Position};
use tracing::instrument;

/// The eight winning lines, in checking order.
///
/// Rows top to bottom, then columns left to right, then the
/// top-left diagonal, then the top-right diagonal.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first completed line and the mark that completed it.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Mark, [Position; 3])> {
    LINES.into_iter().find_map(|[a, b, c]| {
        let mark = board.get(a).mark()?;
        (board.get(b) == board.get(a) && board.get(c) == board.get(a)).then_some((mark, [a, b, c]))
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if a mark occupies all three cells of a line,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Mark> {
    winning_line(board).map(|(mark, _)| mark)
}

#[cfg(test)]
mod tests {
    use super::super::super::Cell;
    use super::*;

    fn board_with(cells: &[(Position, Cell)]) -> Board {
        let mut board = Board::new();
        for (pos, cell) in cells {
            board.set(*pos, *cell);
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(&[
            (Position::TopLeft, Cell::X),
            (Position::TopCenter, Cell::X),
            (Position::TopRight, Cell::X),
        ]);
        assert_eq!(winner(&board), Some(Mark::X));
    }

    #[test]
    fn test_winner_column() {
        let board = board_with(&[
            (Position::TopCenter, Cell::O),
            (Position::Center, Cell::O),
            (Position::BottomCenter, Cell::O),
        ]);
        assert_eq!(
            winning_line(&board),
            Some((
                Mark::O,
                [Position::TopCenter, Position::Center, Position::BottomCenter]
            ))
        );
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(&[
            (Position::TopRight, Cell::O),
            (Position::Center, Cell::O),
            (Position::BottomLeft, Cell::O),
        ]);
        assert_eq!(winner(&board), Some(Mark::O));
    }

    #[test]
    fn test_no_winner_mixed_line() {
        let board = board_with(&[
            (Position::TopLeft, Cell::X),
            (Position::TopCenter, Cell::O),
            (Position::TopRight, Cell::X),
        ]);
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(&[(Position::TopLeft, Cell::X), (Position::TopCenter, Cell::X)]);
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_first_line_in_order_is_reported() {
        // X holds both the top row and the left column.
        let board = board_with(&[
            (Position::TopLeft, Cell::X),
            (Position::TopCenter, Cell::X),
            (Position::TopRight, Cell::X),
            (Position::MiddleLeft, Cell::X),
            (Position::BottomLeft, Cell::X),
        ]);
        let (_, line) = winning_line(&board).expect("winner");
        assert_eq!(line, LINES[0]);
    }
}
