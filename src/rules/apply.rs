//! Move validation and application.
//!
//! A move is only applied after the mover's legal moves have been
//! regenerated from the current board and the move found among them. Any
//! rejection returns before the state is touched, including the cached
//! legal-move list, which is only replaced once a move is accepted.
//!
//! After an accepted move the victory check runs and the turn passes to the
//! other color, even if the game was just decided.

use crate::core::{GameState, Move, MoveRecord, Piece, Square};

use super::engine::{check_victory, MoveOutcome};
use super::error::MoveError;
use super::movegen::legal_moves;

/// Validate and apply `mv` for the piece on `from`.
///
/// Rejections are also logged at warn level.
pub fn apply_move(
    state: &mut GameState,
    from: Square,
    mv: &Move,
) -> Result<MoveOutcome, MoveError> {
    let outcome = try_apply(state, from, mv);
    if let Err(err) = &outcome {
        log::warn!("illegal move rejected: {err}");
    }
    outcome
}

fn try_apply(state: &mut GameState, from: Square, mv: &Move) -> Result<MoveOutcome, MoveError> {
    if !state.board.contains(from) {
        return Err(MoveError::OffBoard { at: from });
    }
    let piece = state
        .board
        .get(from)
        .ok_or(MoveError::EmptySquare { at: from })?;
    if piece.color != state.turn {
        return Err(MoveError::WrongPlayer {
            at: from,
            piece,
            turn: state.turn,
        });
    }

    let legal = legal_moves(&state.board, piece, from);
    if legal.is_empty() {
        return Err(MoveError::NoLegalMoves { at: from });
    }
    if !legal.contains(mv) {
        return Err(MoveError::InvalidMove {
            at: from,
            mv: mv.clone(),
        });
    }

    let (destination, captured) = execute(state, from, piece, mv)?;
    state.last_legal_moves = legal;

    let result = check_victory(&state.board);
    if let Some(result) = result {
        if state.result.is_none() {
            log::info!("game over after turn {}: {result}", state.turn_number);
        }
        state.result = Some(result);
    }

    log::debug!("turn {}: {piece} {from} {mv}", state.turn_number);
    state
        .history
        .push_back(MoveRecord::new(piece.color, from, mv.clone(), state.turn_number));
    state.turn_number += 1;
    state.turn = state.turn.opponent();

    Ok(MoveOutcome {
        mover: piece,
        destination,
        captured,
        result,
        mv: mv.clone(),
    })
}

/// Mutate the board for an already-validated move.
///
/// For a jump the piece rests only on the final landing; intermediate
/// landings are left empty.
fn execute(
    state: &mut GameState,
    from: Square,
    piece: Piece,
    mv: &Move,
) -> Result<(Square, Vec<(Square, Piece)>), MoveError> {
    let destination = mv
        .destination()
        .ok_or_else(|| MoveError::InvalidMove { at: from, mv: mv.clone() })?;

    state.board.take(from);
    let captured = mv
        .captures()
        .filter_map(|sq| state.board.take(sq).map(|p| (sq, p)))
        .collect();
    state.board.set(destination, Some(piece));

    Ok((destination, captured))
}
