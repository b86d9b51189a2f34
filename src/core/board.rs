//! The checkers grid.
//!
//! A square grid of cells, each empty or holding one piece. The size is
//! fixed when the board is created.

use serde::{Deserialize, Serialize};

use super::config::ConfigError;
use super::piece::{Color, ColorMap, Piece};
use super::square::Square;

/// Square grid of optional pieces, stored row-major.
///
/// Deserialization checks that the cell list matches the size.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    size: usize,
    cells: Vec<Option<Piece>>,
}

/// Unchecked serialized form of a `Board`.
#[derive(Deserialize)]
struct RawBoard {
    size: usize,
    cells: Vec<Option<Piece>>,
}

impl TryFrom<RawBoard> for Board {
    type Error = ConfigError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        if raw.size == 0 {
            return Err(ConfigError::InvalidSize { size: raw.size });
        }
        if raw.size.checked_mul(raw.size) != Some(raw.cells.len()) {
            return Err(ConfigError::CellCount {
                size: raw.size,
                found: raw.cells.len(),
            });
        }
        Ok(Self {
            size: raw.size,
            cells: raw.cells,
        })
    }
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Side length of the grid.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check if a square lies on the board.
    #[must_use]
    pub fn contains(&self, sq: Square) -> bool {
        sq.x < self.size && sq.y < self.size
    }

    /// Piece at a square. Off-board squares read as empty.
    #[must_use]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.index(sq).and_then(|i| self.cells[i])
    }

    /// Check if a square is on the board and holds no piece.
    #[must_use]
    pub fn is_empty_at(&self, sq: Square) -> bool {
        self.contains(sq) && self.get(sq).is_none()
    }

    /// Replace the contents of a square, returning what was there.
    ///
    /// Writes to off-board squares are ignored.
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) -> Option<Piece> {
        match self.index(sq) {
            Some(i) => std::mem::replace(&mut self.cells[i], piece),
            None => None,
        }
    }

    /// Remove and return the piece at a square.
    pub fn take(&mut self, sq: Square) -> Option<Piece> {
        self.set(sq, None)
    }

    /// Iterate over occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(i, cell)| cell.map(|p| (Square::new(i / size, i % size), p)))
    }

    /// Count living pieces (pawns and kings) per color.
    #[must_use]
    pub fn piece_counts(&self) -> ColorMap<usize> {
        let mut counts = ColorMap::with_value(0);
        for (_, piece) in self.pieces() {
            counts[piece.color] += 1;
        }
        counts
    }

    /// Count living pieces of one color.
    #[must_use]
    pub fn count(&self, color: Color) -> usize {
        self.piece_counts()[color]
    }

    fn index(&self, sq: Square) -> Option<usize> {
        self.contains(sq).then(|| sq.x * self.size + sq.y)
    }
}

/// Renders the board as a diagram, one row per line.
///
/// The output is accepted by [`BoardConfig::from_diagram`](super::BoardConfig::from_diagram).
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks(self.size.max(1)) {
            let line: Vec<String> = row
                .iter()
                .map(|cell| cell.map_or('.', Piece::symbol).to_string())
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board() {
        let board = Board::empty(10);
        assert_eq!(board.size(), 10);
        assert_eq!(board.pieces().count(), 0);
        assert!(board.is_empty_at(Square::new(0, 0)));
        assert!(!board.is_empty_at(Square::new(10, 0)));
    }

    #[test]
    fn test_set_get_take() {
        let mut board = Board::empty(4);
        let sq = Square::new(2, 1);

        assert_eq!(board.set(sq, Some(Piece::DARK_PAWN)), None);
        assert_eq!(board.get(sq), Some(Piece::DARK_PAWN));
        assert!(!board.is_empty_at(sq));

        assert_eq!(board.take(sq), Some(Piece::DARK_PAWN));
        assert_eq!(board.get(sq), None);
    }

    #[test]
    fn test_off_board_access() {
        let mut board = Board::empty(4);
        let off = Square::new(4, 4);

        assert!(!board.contains(off));
        assert_eq!(board.get(off), None);
        assert_eq!(board.set(off, Some(Piece::LIGHT_KING)), None);
        assert_eq!(board.pieces().count(), 0);
    }

    #[test]
    fn test_piece_counts_include_kings() {
        let mut board = Board::empty(6);
        board.set(Square::new(0, 1), Some(Piece::LIGHT_PAWN));
        board.set(Square::new(0, 3), Some(Piece::LIGHT_KING));
        board.set(Square::new(5, 0), Some(Piece::DARK_KING));

        let counts = board.piece_counts();
        assert_eq!(counts[Color::Light], 2);
        assert_eq!(counts[Color::Dark], 1);
        assert_eq!(board.count(Color::Dark), 1);
    }

    #[test]
    fn test_pieces_row_major() {
        let mut board = Board::empty(3);
        board.set(Square::new(2, 0), Some(Piece::DARK_PAWN));
        board.set(Square::new(0, 2), Some(Piece::LIGHT_PAWN));

        let pieces: Vec<_> = board.pieces().collect();
        assert_eq!(
            pieces,
            vec![
                (Square::new(0, 2), Piece::LIGHT_PAWN),
                (Square::new(2, 0), Piece::DARK_PAWN),
            ]
        );
    }

    #[test]
    fn test_display() {
        let mut board = Board::empty(3);
        board.set(Square::new(0, 1), Some(Piece::LIGHT_KING));
        board.set(Square::new(2, 0), Some(Piece::DARK_PAWN));

        assert_eq!(board.to_string(), ". L .\n. . .\nd . .\n");
    }

    #[test]
    fn test_board_serialization() {
        let mut board = Board::empty(4);
        board.set(Square::new(3, 0), Some(Piece::DARK_KING));

        let json = serde_json::to_string(&board).unwrap();
        let deserialized: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, deserialized);
    }

    #[test]
    fn test_deserialize_rejects_wrong_cell_count() {
        let err = serde_json::from_str::<Board>(r#"{"size":10,"cells":[]}"#).unwrap_err();
        assert!(err.to_string().contains("needs 100 cells"));

        let cells = vec![None::<Piece>; 5];
        let json = serde_json::json!({ "size": 2, "cells": cells });
        assert!(serde_json::from_value::<Board>(json).is_err());
    }

    #[test]
    fn test_deserialize_rejects_zero_size() {
        assert!(serde_json::from_str::<Board>(r#"{"size":0,"cells":[]}"#).is_err());
    }
}
