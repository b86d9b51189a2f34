//! Game results and victory detection.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Color, Move, Piece, Square};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// One side has no pieces left.
    Winner(Color),
    /// Neither side has pieces. Only reachable from a hand-built empty board.
    Draw,
}

impl GameResult {
    /// Check if a color won.
    #[must_use]
    pub fn is_winner(&self, color: Color) -> bool {
        match self {
            GameResult::Winner(c) => *c == color,
            GameResult::Draw => false,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(color) => write!(f, "{color} wins"),
            GameResult::Draw => write!(f, "draw"),
        }
    }
}

/// What an accepted move did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The piece that moved.
    pub mover: Piece,

    /// Square it ended on.
    pub destination: Square,

    /// Pieces removed by the move, in chain order.
    pub captured: Vec<(Square, Piece)>,

    /// Set when this move decided the game.
    pub result: Option<GameResult>,

    /// The move as applied.
    pub mv: Move,
}

/// Decide the game from the pieces left on the board.
///
/// A color loses when its living-piece count is exactly zero.
#[must_use]
pub fn check_victory(board: &Board) -> Option<GameResult> {
    let counts = board.piece_counts();
    match (counts[Color::Dark] == 0, counts[Color::Light] == 0) {
        (false, false) => None,
        (false, true) => Some(GameResult::Winner(Color::Dark)),
        (true, false) => Some(GameResult::Winner(Color::Light)),
        (true, true) => Some(GameResult::Draw),
    }
}
