//! Checkers rules.
//!
//! - `movegen`: legal slides and jump chains for a piece
//! - `apply`: validate a move against the generated set and apply it
//! - `engine`: victory detection and game results
//! - `error`: why a move was rejected
//!
//! Generation never mutates the board; only `apply_move` does, and only
//! after validation succeeds.

pub mod movegen;
pub mod apply;
pub mod engine;
pub mod error;

pub use movegen::{directions, legal_moves, JumpAccumulator};
pub use apply::apply_move;
pub use engine::{check_victory, GameResult, MoveOutcome};
pub use error::MoveError;
