//! Game state.
//!
//! ## GameState
//!
//! Everything one game needs:
//! - The board
//! - Side to move and turn number
//! - The legal moves the last accepted move was validated against
//! - The result, once decided
//! - Move history
//!
//! A `GameState` is an ordinary owned value. Independent games are
//! independent values; nothing is shared between them.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{Move, MoveRecord};
use super::board::Board;
use super::config::{BoardConfig, ConfigError};
use super::piece::{Color, Piece};
use super::square::Square;
use crate::rules::{self, GameResult, MoveError, MoveOutcome};

/// State of one checkers game.
///
/// Uses an `im` persistent vector for history so cloning a long game stays cheap.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: Board,

    /// Side to move.
    pub(crate) turn: Color,

    /// Legal-move list computed while validating the last accepted move.
    pub(crate) last_legal_moves: Vec<Move>,

    pub(crate) result: Option<GameResult>,

    /// Turn number (starts at 1).
    pub(crate) turn_number: u32,

    pub(crate) history: Vector<MoveRecord>,
}

impl GameState {
    /// Start a game from a configuration.
    pub fn new(config: BoardConfig) -> Result<Self, ConfigError> {
        let board = config.build_board()?;
        Ok(Self::from_board(board, config.first_to_move))
    }

    /// Start a game from the default 10x10 position.
    #[must_use]
    pub fn standard() -> Self {
        let config = BoardConfig::standard();
        match config.build_board() {
            Ok(board) => Self::from_board(board, config.first_to_move),
            Err(err) => unreachable!("default layout rejected: {err}"),
        }
    }

    fn from_board(board: Board, first_to_move: Color) -> Self {
        let result = rules::check_victory(&board);
        Self {
            board,
            turn: first_to_move,
            last_legal_moves: Vec::new(),
            result,
            turn_number: 1,
            history: Vector::new(),
        }
    }

    /// Current board contents.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move.
    #[must_use]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Turn number (starts at 1, advances on every accepted move).
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// The game result, once one side has no pieces left.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    /// Accepted moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Legal moves computed while validating the last accepted move.
    #[must_use]
    pub fn last_legal_moves(&self) -> &[Move] {
        &self.last_legal_moves
    }

    /// All legal moves for `piece` standing on `(x, y)`.
    ///
    /// Reads the board only. The piece is taken as given; it does not have
    /// to match what actually stands on the square.
    #[must_use]
    pub fn legal_moves(&self, piece: Piece, x: usize, y: usize) -> Vec<Move> {
        rules::legal_moves(&self.board, piece, Square::new(x, y))
    }

    /// Validate and apply a move for the piece on `(x, y)`.
    ///
    /// On success the turn passes to the other side. On failure nothing
    /// changes.
    pub fn apply_move(&mut self, x: usize, y: usize, mv: &Move) -> Result<MoveOutcome, MoveError> {
        rules::apply_move(self, Square::new(x, y), mv)
    }

    /// Squares of the side to move holding a piece with at least one legal move.
    #[must_use]
    pub fn movable_pieces(&self) -> Vec<Square> {
        self.own_pieces()
            .filter(|&(sq, piece)| !rules::legal_moves(&self.board, piece, sq).is_empty())
            .map(|(sq, _)| sq)
            .collect()
    }

    /// Every legal move of the side to move, paired with its origin.
    #[must_use]
    pub fn all_legal_moves(&self) -> Vec<(Square, Move)> {
        self.own_pieces()
            .flat_map(|(sq, piece)| {
                rules::legal_moves(&self.board, piece, sq)
                    .into_iter()
                    .map(move |mv| (sq, mv))
            })
            .collect()
    }

    fn own_pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.board
            .pieces()
            .filter(move |(_, piece)| piece.color == self.turn)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::standard()
    }
}
