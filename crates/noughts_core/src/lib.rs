//! Noughts core - tic-tac-toe and theme state machines.
//!
//! Two independent state machines driven by the same input surface:
//!
//! - **Game**: a 3x3 board and the mark due to move. Moves on filled cells
//!   or after a win are ignored; the winner and status line are derived.
//! - **Theme**: a light/dark value that pushes every change into a
//!   [`ThemeTarget`].
//!
//! # Example
//!
//! ```
//! use noughts_core::{Game, Mark, Status};
//!
//! let game = Game::replay(&[0, 3, 1, 4, 2])?;
//! assert_eq!(game.winner(), Some(Mark::X));
//! assert_eq!(game.status(), Status::Winner(Mark::X));
//! # Ok::<(), noughts_core::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
mod theme;

pub use game::rules;
pub use game::{
    Board, Cell, Game, GameInvariants, GameSnapshot, IgnoreReason, Invariant, InvariantSet,
    InvariantViolation, LastMoverWinsInvariant, Mark, MoveError, Placement, Position,
    SingleWinnerInvariant, SnapshotError, Status, TurnParityInvariant, status,
};
pub use theme::{Theme, ThemeController, ThemeTarget};
