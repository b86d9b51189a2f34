//! Core types: pieces, squares, board, configuration, moves, game state.
//!
//! These are the data the rules operate on. Move generation and
//! application live in `rules`; `GameState` exposes them as methods.

pub mod piece;
pub mod square;
pub mod board;
pub mod config;
pub mod action;
pub mod state;

pub use piece::{Color, ColorMap, Piece, Rank};
pub use square::{Direction, Square};
pub use board::Board;
pub use config::{BoardConfig, ConfigError, Placement, STANDARD_ROWS_PER_SIDE, STANDARD_SIZE};
pub use action::{JumpStep, Move, MoveRecord};
pub use state::GameState;
