//! Legal move generation.
//!
//! For a piece standing on a square, produces every slide and every jump
//! chain it may make. Generation only reads the board.
//!
//! ## Directions
//!
//! Which diagonals a piece may use depends on its color and rank and is
//! looked up in one table (`directions`) shared by slides and jumps:
//! - dark pawns move toward row 0
//! - light pawns move toward the last row
//! - kings move along all four diagonals
//!
//! ## Jump chains
//!
//! Jumps are found depth first. Every time a capture lands legally the chain
//! so far is emitted as its own move, then the search continues from the
//! landing square in every allowed direction. A one-capture jump and each of
//! its extensions are therefore all separate legal moves.
//!
//! Each branch of the search owns its own `JumpAccumulator`. The accumulator
//! is a persistent vector, so handing a copy to a sibling branch is O(1) and
//! siblings never see each other's captures.

use im::Vector;

use crate::core::{Board, Color, Direction, JumpStep, Move, Piece, Rank, Square};

const DARK_PAWN_DIRS: [Direction; 2] = [Direction::new(-1, -1), Direction::new(-1, 1)];

const LIGHT_PAWN_DIRS: [Direction; 2] = [Direction::new(1, 1), Direction::new(1, -1)];

const KING_DIRS: [Direction; 4] = [
    Direction::new(-1, 1),
    Direction::new(1, 1),
    Direction::new(-1, -1),
    Direction::new(1, -1),
];

/// Diagonals a piece may move and capture along.
#[must_use]
pub fn directions(piece: Piece) -> &'static [Direction] {
    match (piece.color, piece.rank) {
        (Color::Dark, Rank::Pawn) => &DARK_PAWN_DIRS,
        (Color::Light, Rank::Pawn) => &LIGHT_PAWN_DIRS,
        (_, Rank::King) => &KING_DIRS,
    }
}

/// Captures and landings collected along one branch of the jump search.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JumpAccumulator {
    steps: Vector<JumpStep>,
}

impl JumpAccumulator {
    /// An empty chain.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of this chain with one more step. `self` is left untouched.
    #[must_use]
    pub fn extended(&self, step: JumpStep) -> Self {
        let mut steps = self.steps.clone();
        steps.push_back(step);
        Self { steps }
    }

    /// Check if `sq` was already captured earlier in this chain.
    #[must_use]
    pub fn has_captured(&self, sq: Square) -> bool {
        self.steps.iter().any(|step| step.capture == sq)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The chain as a jump move.
    #[must_use]
    pub fn to_move(&self) -> Move {
        Move::Jump {
            steps: self.steps.iter().copied().collect(),
        }
    }
}

/// All legal moves for `piece` standing on `from`.
///
/// Slides come first, in direction-table order, followed by jump chains in
/// the order the search discovers them. An off-board origin has no moves.
#[must_use]
pub fn legal_moves(board: &Board, piece: Piece, from: Square) -> Vec<Move> {
    let mut moves = Vec::new();
    if !board.contains(from) {
        return moves;
    }

    for &dir in directions(piece) {
        if let Some(to) = from.offset(dir, 1, board.size()) {
            if board.get(to).is_none() {
                moves.push(Move::slide(to));
            }
        }
    }

    collect_jumps(board, piece, from, &JumpAccumulator::new(), &mut moves);

    log::trace!("{} moves for {} at {}", moves.len(), piece, from);
    moves
}

/// Emit every jump chain extending `chain` from `at`.
fn collect_jumps(
    board: &Board,
    piece: Piece,
    at: Square,
    chain: &JumpAccumulator,
    out: &mut Vec<Move>,
) {
    for &dir in directions(piece) {
        let Some(step) = check_landing(board, piece, at, dir, chain) else {
            continue;
        };

        let branch = chain.extended(step);
        out.push(branch.to_move());
        collect_jumps(board, piece, step.landing, &branch, out);
    }
}

/// A single capture from `at` along `dir`, if one is legal.
///
/// The landing must be on the board and empty, and the square in between
/// must hold an opposing piece not already captured in this chain.
fn check_landing(
    board: &Board,
    piece: Piece,
    at: Square,
    dir: Direction,
    chain: &JumpAccumulator,
) -> Option<JumpStep> {
    let landing = at.offset(dir, 2, board.size())?;
    if board.get(landing).is_some() {
        return None;
    }

    let capture = at.offset(dir, 1, board.size())?;
    let target = board.get(capture)?;
    if !piece.is_opponent_of(target) || chain.has_captured(capture) {
        return None;
    }

    Some(JumpStep::new(capture, landing))
}
