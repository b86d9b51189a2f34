//! Move representation: slides and jump chains.
//!
//! A move is described relative to the square the piece starts on:
//! - `Slide`: one diagonal step into an empty cell
//! - `Jump`: one or more captures performed as a single move, each step
//!   recording the captured square and the square landed on
//!
//! Moves compare structurally, so a caller-built move matches a generated
//! one exactly when kind, coordinates and chain order agree.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::piece::Color;
use super::square::Square;

/// One capture in a jump chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JumpStep {
    /// Square of the opposing piece jumped over.
    pub capture: Square,
    /// Empty square the moving piece lands on.
    pub landing: Square,
}

impl JumpStep {
    #[must_use]
    pub const fn new(capture: Square, landing: Square) -> Self {
        Self { capture, landing }
    }
}

/// A checkers move.
///
/// ## Example
///
/// ```
/// use draughts_engine::core::{JumpStep, Move, Square};
///
/// let slide = Move::slide(Square::new(6, 1));
/// assert!(!slide.is_jump());
///
/// let jump = Move::jump(&[
///     JumpStep::new(Square::new(6, 1), Square::new(5, 2)),
///     JumpStep::new(Square::new(4, 3), Square::new(3, 4)),
/// ]);
/// assert_eq!(jump.capture_count(), 2);
/// assert_eq!(jump.destination(), Some(Square::new(3, 4)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Non-capturing one-step diagonal move.
    Slide { to: Square },

    /// Capture chain, in the order the captures are made.
    /// SmallVec keeps chains of up to 4 captures off the heap.
    Jump { steps: SmallVec<[JumpStep; 4]> },
}

impl Move {
    /// Create a slide to `to`.
    #[must_use]
    pub fn slide(to: Square) -> Self {
        Move::Slide { to }
    }

    /// Create a jump chain from its steps.
    #[must_use]
    pub fn jump(steps: &[JumpStep]) -> Self {
        Move::Jump {
            steps: SmallVec::from_slice(steps),
        }
    }

    #[must_use]
    pub fn is_jump(&self) -> bool {
        matches!(self, Move::Jump { .. })
    }

    /// Jump steps; empty for a slide.
    #[must_use]
    pub fn steps(&self) -> &[JumpStep] {
        match self {
            Move::Slide { .. } => &[],
            Move::Jump { steps } => steps,
        }
    }

    /// Number of pieces captured.
    #[must_use]
    pub fn capture_count(&self) -> usize {
        self.steps().len()
    }

    /// Captured squares, in chain order.
    pub fn captures(&self) -> impl Iterator<Item = Square> + '_ {
        self.steps().iter().map(|s| s.capture)
    }

    /// Landing squares, in chain order.
    pub fn landings(&self) -> impl Iterator<Item = Square> + '_ {
        self.steps().iter().map(|s| s.landing)
    }

    /// Square the piece ends on.
    ///
    /// `None` only for a malformed jump with no steps.
    #[must_use]
    pub fn destination(&self) -> Option<Square> {
        match self {
            Move::Slide { to } => Some(*to),
            Move::Jump { steps } => steps.last().map(|s| s.landing),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Slide { to } => write!(f, "slide to {to}"),
            Move::Jump { steps } => {
                write!(f, "jump")?;
                for step in steps {
                    write!(f, " x{} -> {}", step.capture, step.landing)?;
                }
                Ok(())
            }
        }
    }
}

/// An accepted move with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Color that made the move.
    pub mover: Color,

    /// Square the piece started on.
    pub from: Square,

    /// The move made.
    pub mv: Move,

    /// Turn number the move was made on (starts at 1).
    pub turn: u32,
}

impl MoveRecord {
    #[must_use]
    pub fn new(mover: Color, from: Square, mv: Move, turn: u32) -> Self {
        Self {
            mover,
            from,
            mv,
            turn,
        }
    }
}
