//! Piece identification and per-color data storage.
//!
//! ## Piece
//!
//! A piece is a `Color` (dark or light) plus a `Rank` (pawn or king).
//! The four combinations are exposed as constants (`Piece::DARK_PAWN`, ...)
//! so callers can name a piece without building it field by field.
//!
//! ## ColorMap
//!
//! Per-color data storage backed by a two-element array for O(1) access.
//! Supports iteration and indexing by `Color`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Side of the board a piece belongs to.
///
/// Dark pawns advance toward row 0, light pawns toward the last row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Dark,
    Light,
}

impl Color {
    /// Both colors, dark first.
    pub const ALL: [Color; 2] = [Color::Dark, Color::Light];

    /// The other color.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Color::Dark => Color::Light,
            Color::Light => Color::Dark,
        }
    }

    /// Index into per-color arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Color::Dark => 0,
            Color::Light => 1,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Dark => write!(f, "dark"),
            Color::Light => write!(f, "light"),
        }
    }
}

/// Rank of a piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Moves and captures forward only.
    Pawn,
    /// Moves and captures along all four diagonals.
    King,
}

/// A piece on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub rank: Rank,
}

impl Piece {
    pub const DARK_PAWN: Piece = Piece::new(Color::Dark, Rank::Pawn);
    pub const LIGHT_PAWN: Piece = Piece::new(Color::Light, Rank::Pawn);
    pub const DARK_KING: Piece = Piece::new(Color::Dark, Rank::King);
    pub const LIGHT_KING: Piece = Piece::new(Color::Light, Rank::King);

    /// Create a piece.
    #[must_use]
    pub const fn new(color: Color, rank: Rank) -> Self {
        Self { color, rank }
    }

    /// Create a pawn of the given color.
    #[must_use]
    pub const fn pawn(color: Color) -> Self {
        Self::new(color, Rank::Pawn)
    }

    /// Create a king of the given color.
    #[must_use]
    pub const fn king(color: Color) -> Self {
        Self::new(color, Rank::King)
    }

    #[must_use]
    pub const fn is_king(self) -> bool {
        matches!(self.rank, Rank::King)
    }

    /// Check if `other` belongs to the opposing side.
    ///
    /// Rank is irrelevant: a king and a pawn of the same color are allies.
    #[must_use]
    pub fn is_opponent_of(self, other: Piece) -> bool {
        self.color != other.color
    }

    /// Diagram character: `d`/`D` for dark, `l`/`L` for light, uppercase for kings.
    #[must_use]
    pub const fn symbol(self) -> char {
        match (self.color, self.rank) {
            (Color::Dark, Rank::Pawn) => 'd',
            (Color::Dark, Rank::King) => 'D',
            (Color::Light, Rank::Pawn) => 'l',
            (Color::Light, Rank::King) => 'L',
        }
    }

    /// Inverse of [`Piece::symbol`].
    #[must_use]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'd' => Some(Self::DARK_PAWN),
            'D' => Some(Self::DARK_KING),
            'l' => Some(Self::LIGHT_PAWN),
            'L' => Some(Self::LIGHT_KING),
            _ => None,
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rank = match self.rank {
            Rank::Pawn => "pawn",
            Rank::King => "king",
        };
        write!(f, "{} {}", self.color, rank)
    }
}

/// Per-color data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use draughts_engine::core::{Color, ColorMap};
///
/// let mut counts: ColorMap<usize> = ColorMap::with_value(0);
/// counts[Color::Dark] += 3;
///
/// assert_eq!(counts[Color::Dark], 3);
/// assert_eq!(counts[Color::Light], 0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorMap<T> {
    data: [T; 2],
}

impl<T> ColorMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Color) -> T) -> Self {
        Self {
            data: [factory(Color::Dark), factory(Color::Light)],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Iterate over (Color, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Color, &T)> {
        Color::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Color> for ColorMap<T> {
    type Output = T;

    fn index(&self, color: Color) -> &Self::Output {
        &self.data[color.index()]
    }
}

impl<T> IndexMut<Color> for ColorMap<T> {
    fn index_mut(&mut self, color: Color) -> &mut Self::Output {
        &mut self.data[color.index()]
    }
}
