//! Board configuration.
//!
//! Games are set up from a `BoardConfig`:
//! - `size`: side length of the square grid
//! - `first_to_move`: which color opens the game
//! - `placements`: the pieces on the board at the start
//!
//! The default layout (`BoardConfig::standard`) is a 10x10 grid with three
//! rows of pawns per side on alternating cells, dark to move. Other layouts
//! can be built piece by piece or read from a text diagram.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::board::Board;
use super::piece::{Color, Piece};
use super::square::Square;

/// Side length of the default board.
pub const STANDARD_SIZE: usize = 10;

/// Rows of pawns each side starts with on the default board.
pub const STANDARD_ROWS_PER_SIDE: usize = 3;

/// Errors raised while turning a configuration into a board.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board size must be at least 1, got {size}")]
    InvalidSize { size: usize },

    #[error("placement at {at} is outside a {size}x{size} board")]
    OutOfBounds { at: Square, size: usize },

    #[error("more than one piece placed at {at}")]
    DuplicatePlacement { at: Square },

    #[error("unknown cell '{ch}' at row {row}, column {column}")]
    UnknownCell { row: usize, column: usize, ch: char },

    #[error("diagram row {row} has {found} cells, expected {expected}")]
    RaggedDiagram {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("diagram contains no rows")]
    EmptyDiagram,

    #[error("board of size {size} needs {} cells, got {found}", size * size)]
    CellCount { size: usize, found: usize },
}

/// One piece placed on the starting board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub at: Square,
    pub piece: Piece,
}

/// Starting position and dimensions of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Side length of the square grid.
    pub size: usize,

    /// Color that makes the first move.
    pub first_to_move: Color,

    /// Pieces on the board at the start.
    pub placements: Vec<Placement>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl BoardConfig {
    /// An empty board of the given size, dark to move.
    #[must_use]
    pub fn empty(size: usize) -> Self {
        Self {
            size,
            first_to_move: Color::Dark,
            placements: Vec::new(),
        }
    }

    /// The default 10x10 starting position.
    #[must_use]
    pub fn standard() -> Self {
        Self::starting(STANDARD_SIZE, STANDARD_ROWS_PER_SIDE)
    }

    /// A starting position with `rows_per_side` rows of pawns for each color.
    ///
    /// Pawns stand on cells where `x + y` is odd. Light fills the low rows
    /// (and advances toward higher `x`), dark fills the high rows.
    #[must_use]
    pub fn starting(size: usize, rows_per_side: usize) -> Self {
        let mut config = Self::empty(size);

        for x in 0..rows_per_side.min(size) {
            for y in (0..size).filter(|y| (x + y) % 2 == 1) {
                config = config.with_piece(Square::new(x, y), Piece::LIGHT_PAWN);
            }
        }

        for x in size.saturating_sub(rows_per_side)..size {
            for y in (0..size).filter(|y| (x + y) % 2 == 1) {
                config = config.with_piece(Square::new(x, y), Piece::DARK_PAWN);
            }
        }

        config
    }

    /// Parse a text diagram.
    ///
    /// One line per row (row 0 first), one character per column:
    /// `.` empty, `d`/`D` dark pawn/king, `l`/`L` light pawn/king.
    /// Whitespace inside a line is ignored and blank lines are skipped.
    /// The diagram must be square.
    ///
    /// ```
    /// use draughts_engine::core::{BoardConfig, Piece, Square};
    ///
    /// let config = BoardConfig::from_diagram(
    ///     "
    ///     . l .
    ///     . . .
    ///     d . .
    ///     ",
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(config.size, 3);
    /// assert_eq!(config.placements.len(), 2);
    /// assert_eq!(config.placements[0].at, Square::new(0, 1));
    /// assert_eq!(config.placements[1].piece, Piece::DARK_PAWN);
    /// ```
    pub fn from_diagram(diagram: &str) -> Result<Self, ConfigError> {
        let rows: Vec<Vec<char>> = diagram
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();

        if rows.is_empty() {
            return Err(ConfigError::EmptyDiagram);
        }

        let size = rows.len();
        let mut config = Self::empty(size);

        for (x, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(ConfigError::RaggedDiagram {
                    row: x,
                    expected: size,
                    found: row.len(),
                });
            }

            for (y, &ch) in row.iter().enumerate() {
                if ch == '.' {
                    continue;
                }
                let piece = Piece::from_symbol(ch).ok_or(ConfigError::UnknownCell {
                    row: x,
                    column: y,
                    ch,
                })?;
                config = config.with_piece(Square::new(x, y), piece);
            }
        }

        Ok(config)
    }

    /// Add a piece to the starting position.
    #[must_use]
    pub fn with_piece(mut self, at: Square, piece: Piece) -> Self {
        self.placements.push(Placement { at, piece });
        self
    }

    /// Set the color that moves first.
    #[must_use]
    pub fn with_first_to_move(mut self, color: Color) -> Self {
        self.first_to_move = color;
        self
    }

    /// Build the starting board, checking size and placements.
    pub fn build_board(&self) -> Result<Board, ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::InvalidSize { size: self.size });
        }

        let mut board = Board::empty(self.size);
        for placement in &self.placements {
            if !board.contains(placement.at) {
                return Err(ConfigError::OutOfBounds {
                    at: placement.at,
                    size: self.size,
                });
            }
            if board.get(placement.at).is_some() {
                return Err(ConfigError::DuplicatePlacement { at: placement.at });
            }
            board.set(placement.at, Some(placement.piece));
        }

        Ok(board)
    }
}
