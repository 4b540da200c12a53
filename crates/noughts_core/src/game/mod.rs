//! Tic-tac-toe game engine.

mod action;
mod engine;
mod invariants;
mod position;
pub mod rules;
mod status;
mod types;

pub use action::{IgnoreReason, MoveError, Placement};
pub use engine::{Game, GameSnapshot, SnapshotError};
pub use invariants::{
    GameInvariants, Invariant, InvariantSet, InvariantViolation, LastMoverWinsInvariant,
    SingleWinnerInvariant, TurnParityInvariant,
};
pub use position::Position;
pub use status::{Status, status};
pub use types::{Board, Cell, Mark};
