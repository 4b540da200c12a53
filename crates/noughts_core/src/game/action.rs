//! Outcomes of a move request.
//!
//! Clicking a filled cell or clicking after the game ended is not an error:
//! the request is ignored and the caller learns why. Only an index outside
//! the board is reported as an error.

use super::{Mark, Position};
use serde::{Deserialize, Serialize};

/// Why a move request left the game unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum IgnoreReason {
    /// The cell already holds a mark.
    #[display("{} is already occupied", _0)]
    Occupied(Position),
    /// A winner already exists.
    #[display("game is already over")]
    GameOver,
}

/// Result of a move request that addressed a real cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Placement {
    /// The mark was placed and the turn passed.
    Placed {
        /// Where the mark went.
        position: Position,
        /// The mark placed.
        mark: Mark,
    },
    /// Nothing changed.
    Ignored(IgnoreReason),
}

impl Placement {
    /// True if the board changed.
    pub fn is_placed(&self) -> bool {
        matches!(self, Placement::Placed { .. })
    }
}

/// Error returned for a move request that violates its precondition.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The index does not name a cell.
    #[display("Cell index {} is out of range (must be 0-8)", index)]
    OutOfRange {
        /// The rejected index.
        index: usize,
    },
}
