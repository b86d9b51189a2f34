//! Move rejection reasons.

use thiserror::Error;

use crate::core::{Color, Move, Piece, Square};

/// Why a move was rejected.
///
/// Every rejection leaves the game state untouched, so callers can simply
/// ask the player again.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("{at} is off the board")]
    OffBoard { at: Square },

    #[error("no piece at {at}")]
    EmptySquare { at: Square },

    /// The piece belongs to the side not on move.
    #[error("{piece} at {at} cannot move on {turn}'s turn")]
    WrongPlayer { at: Square, piece: Piece, turn: Color },

    #[error("piece at {at} has no legal moves")]
    NoLegalMoves { at: Square },

    /// The move is not among the piece's generated legal moves.
    #[error("{mv} is not a legal move for the piece at {at}")]
    InvalidMove { at: Square, mv: Move },
}
