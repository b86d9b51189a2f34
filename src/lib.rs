//! # draughts-engine
//!
//! A checkers (draughts) rules engine.
//!
//! Given a position and a piece, the engine enumerates the piece's legal
//! moves (diagonal slides and multi-capture jump chains), validates a chosen
//! move against that set, applies it, checks for victory and passes the turn.
//!
//! ## Rules
//!
//! - Pawns move and capture forward only: dark toward row 0, light toward
//!   the last row. Kings use all four diagonals.
//! - A jump passes over one adjacent opposing piece onto the empty square
//!   beyond. Jumps chain from the landing square, in any allowed direction.
//!   Every prefix of a chain is a legal move in its own right.
//! - A side with no pieces left has lost.
//! - Pawns are not promoted, and a player is never forced to keep jumping.
//!
//! ## Example
//!
//! ```
//! use draughts_engine::{Color, GameState, Move, Piece, Square};
//!
//! let mut game = GameState::standard();
//! let moves = game.legal_moves(Piece::DARK_PAWN, 7, 2);
//! assert_eq!(moves, vec![Move::slide(Square::new(6, 1)), Move::slide(Square::new(6, 3))]);
//!
//! game.apply_move(7, 2, &moves[0]).unwrap();
//! assert_eq!(game.turn(), Color::Light);
//! ```
//!
//! ## Modules
//!
//! - `core`: pieces, squares, board, configuration, moves, game state
//! - `rules`: move generation, move application, victory, errors

pub mod core;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Board, BoardConfig, Color, ColorMap, ConfigError, Direction, GameState, JumpStep, Move,
    MoveRecord, Piece, Placement, Rank, Square,
};

pub use crate::rules::{
    apply_move, check_victory, legal_moves, GameResult, JumpAccumulator, MoveError, MoveOutcome,
};
