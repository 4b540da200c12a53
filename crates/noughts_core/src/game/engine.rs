//! Click-driven tic-tac-toe engine.

use super::action::{IgnoreReason, MoveError, Placement};
use super::invariants::{GameInvariants, InvariantSet, InvariantViolation};
use super::status::{Status, status};
use super::{Board, Cell, Mark, Position, rules};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Tic-tac-toe engine: a board and the mark due to move.
///
/// The winner is never stored. It is derived from the board on every read,
/// so the only mutable state is the board and the turn flag.
///
/// Serializes as a [`GameSnapshot`]. Deserializing goes through
/// `TryFrom<GameSnapshot>`, which rejects boards play could not have produced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "GameSnapshot", try_from = "GameSnapshot")]
pub struct Game {
    pub(crate) board: Board,
    next: Mark,
}

impl Game {
    /// Creates a new game with an empty board and X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            next: Mark::X,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark due to move.
    pub fn next(&self) -> Mark {
        self.next
    }

    /// Returns the winner, if a line is complete.
    pub fn winner(&self) -> Option<Mark> {
        rules::winner(&self.board)
    }

    /// Returns the status line for the current state.
    pub fn status(&self) -> Status {
        status(&self.board, self.next)
    }

    /// Plays the mark due to move at board index `index` (0-8).
    ///
    /// Playing an occupied cell, or any cell once a winner exists, is
    /// ignored and leaves the game untouched.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] if `index` is not a board index.
    #[instrument(skip(self), fields(next = %self.next))]
    pub fn play(&mut self, index: usize) -> Result<Placement, MoveError> {
        let position = Position::from_index(index).ok_or(MoveError::OutOfRange { index })?;
        Ok(self.play_at(position))
    }

    /// Plays the mark due to move at `position`.
    #[instrument(skip(self), fields(next = %self.next))]
    pub fn play_at(&mut self, position: Position) -> Placement {
        if !self.board.is_empty(position) {
            debug!(%position, "Ignoring move on occupied cell");
            return Placement::Ignored(IgnoreReason::Occupied(position));
        }
        if self.winner().is_some() {
            debug!(%position, "Ignoring move after game over");
            return Placement::Ignored(IgnoreReason::GameOver);
        }

        let mark = self.next;
        self.board.set(position, Cell::from(mark));
        self.next = mark.opponent();
        debug!(%position, %mark, status = %self.status(), "Mark placed");

        #[cfg(debug_assertions)]
        super::invariants::assert_invariants(self);

        Placement::Placed { position, mark }
    }

    /// Clears the board and gives the first move back to X.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("Resetting game");
        self.board = Board::new();
        self.next = Mark::X;
    }

    /// Plays `indices` in order on a fresh game.
    ///
    /// Ignored moves are skipped like any other ignored click.
    ///
    /// # Errors
    ///
    /// Returns the first [`MoveError`] encountered.
    #[instrument]
    pub fn replay(indices: &[usize]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for &index in indices {
            game.play(index)?;
        }
        Ok(game)
    }

    /// Returns a serializable view of the game.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self
                .board
                .cells()
                .iter()
                .map(|c| c.mark().map(|m| m.to_string()))
                .collect(),
            next_player: self.next,
            winner: self.winner(),
            status: self.status().to_string(),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Flat, serializable view of a game.
///
/// Empty cells are `None`, filled cells hold `"X"` or `"O"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// The nine cells in board order.
    pub board: Vec<Option<String>>,
    /// Mark due to move.
    pub next_player: Mark,
    /// Winner, if any.
    pub winner: Option<Mark>,
    /// Status line text.
    pub status: String,
}

impl From<Game> for GameSnapshot {
    fn from(game: Game) -> Self {
        game.snapshot()
    }
}

/// Why a [`GameSnapshot`] does not describe a playable game.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SnapshotError {
    /// The board does not have nine cells.
    #[display("Board has {} cells (expected 9)", len)]
    BoardLength {
        /// Number of cells found.
        len: usize,
    },
    /// A cell holds something other than `X` or `O`.
    #[display("Cell {} holds unknown mark {:?}", index, mark)]
    UnknownMark {
        /// Board index of the cell.
        index: usize,
        /// The rejected text.
        mark: String,
    },
    /// The cells and turn flag break the rules of play.
    #[display("Game rules violated: {}", violations.iter().map(ToString::to_string).collect::<Vec<_>>().join("; "))]
    Unreachable {
        /// Every violated invariant.
        violations: Vec<InvariantViolation>,
    },
}

impl TryFrom<GameSnapshot> for Game {
    type Error = SnapshotError;

    /// Rebuilds a game from its cells and turn flag.
    ///
    /// `winner` and `status` are derived, so their snapshot values are not
    /// read.
    #[instrument(skip(snapshot), fields(next = %snapshot.next_player))]
    fn try_from(snapshot: GameSnapshot) -> Result<Self, Self::Error> {
        let len = snapshot.board.len();
        let cells: [Option<String>; 9] = snapshot
            .board
            .try_into()
            .map_err(|_| SnapshotError::BoardLength { len })?;

        let mut board = Board::new();
        for (pos, cell) in Position::ALL.into_iter().zip(cells) {
            let cell = match cell.as_deref() {
                None => Cell::Empty,
                Some("X") => Cell::X,
                Some("O") => Cell::O,
                Some(other) => {
                    return Err(SnapshotError::UnknownMark {
                        index: pos.index(),
                        mark: other.to_string(),
                    });
                }
            };
            board.set(pos, cell);
        }

        let game = Self {
            board,
            next: snapshot.next_player,
        };
        GameInvariants::check_all(&game).map_err(|violations| {
            warn!(count = violations.len(), "Rejecting unreachable game");
            SnapshotError::Unreachable { violations }
        })?;
        Ok(game)
    }
}
