//! Move application integration tests.
//!
//! These tests drive `GameState::apply_move` through accepted and rejected
//! moves and check board mutation, turn passing and victory.

use draughts_engine::{
    BoardConfig, Color, GameResult, GameState, JumpStep, Move, MoveError, Piece, Square,
};

fn sq(x: usize, y: usize) -> Square {
    Square::new(x, y)
}

fn game(diagram: &str) -> GameState {
    GameState::new(BoardConfig::from_diagram(diagram).unwrap()).unwrap()
}

/// Squares whose contents differ between two boards of the same size.
fn changed_squares(before: &GameState, after: &GameState) -> Vec<Square> {
    let size = before.board().size();
    (0..size)
        .flat_map(|x| (0..size).map(move |y| sq(x, y)))
        .filter(|&s| before.board().get(s) != after.board().get(s))
        .collect()
}

// =============================================================================
// Accepted Moves
// =============================================================================

/// Test the default-board capture: (7, 0) takes (6, 1) and lands on (5, 2).
#[test]
fn test_default_board_capture_applied() {
    let config = BoardConfig::standard().with_piece(sq(6, 1), Piece::LIGHT_PAWN);
    let mut state = GameState::new(config).unwrap();
    let mv = Move::jump(&[JumpStep::new(sq(6, 1), sq(5, 2))]);

    let outcome = state.apply_move(7, 0, &mv).unwrap();

    assert_eq!(outcome.captured, vec![(sq(6, 1), Piece::LIGHT_PAWN)]);
    assert_eq!(state.board().get(sq(6, 1)), None);
    assert_eq!(state.board().get(sq(7, 0)), None);
    assert_eq!(state.board().get(sq(5, 2)), Some(Piece::DARK_PAWN));
    assert_eq!(state.turn(), Color::Light);
    assert_eq!(state.board().count(Color::Light), 15);
    assert_eq!(state.last_legal_moves(), &[mv]);
}

/// Test that a slide changes exactly the origin and the destination.
#[test]
fn test_slide_touches_two_squares() {
    let mut state = GameState::standard();
    let before = state.clone();

    state.apply_move(7, 4, &Move::slide(sq(6, 5))).unwrap();

    assert_eq!(changed_squares(&before, &state), vec![sq(6, 5), sq(7, 4)]);
    assert_eq!(state.board().get(sq(6, 5)), Some(Piece::DARK_PAWN));
}

/// Test a two-capture chain leaves the middle landing empty.
#[test]
fn test_double_jump_applied() {
    let mut state = game(
        "
        . . . . . .
        . . . . l .
        . . . . . .
        . . l . . .
        . d . . . .
        l . . . . .
        ",
    );
    let mv = Move::jump(&[
        JumpStep::new(sq(3, 2), sq(2, 3)),
        JumpStep::new(sq(1, 4), sq(0, 5)),
    ]);

    let outcome = state.apply_move(4, 1, &mv).unwrap();

    assert_eq!(outcome.captured.len(), 2);
    assert_eq!(outcome.destination, sq(0, 5));
    assert_eq!(outcome.result, None);
    assert_eq!(state.board().get(sq(2, 3)), None);
    assert_eq!(state.board().get(sq(0, 5)), Some(Piece::DARK_PAWN));
    assert_eq!(state.board().count(Color::Light), 1);
    assert_eq!(state.turn(), Color::Light);
}

/// Test that only the chosen prefix of a chain is applied.
#[test]
fn test_partial_chain_applied() {
    let mut state = game(
        "
        . . . . . .
        . . . . l .
        . . . . . .
        . . l . . .
        . d . . . .
        l . . . . .
        ",
    );
    let mv = Move::jump(&[JumpStep::new(sq(3, 2), sq(2, 3))]);

    state.apply_move(4, 1, &mv).unwrap();

    assert_eq!(state.board().get(sq(2, 3)), Some(Piece::DARK_PAWN));
    assert_eq!(state.board().get(sq(1, 4)), Some(Piece::LIGHT_PAWN));
    assert_eq!(state.board().count(Color::Light), 2);
}

// =============================================================================
// Rejected Moves
// =============================================================================

/// Test each rejection reason and that none of them change the state.
#[test]
fn test_rejections_leave_state_unchanged() {
    let mut state = GameState::standard();
    let before = state.clone();

    let cases = [
        (sq(2, 1), Move::slide(sq(3, 2))),
        (sq(8, 1), Move::slide(sq(7, 2))),
        (sq(7, 0), Move::slide(sq(5, 2))),
        (sq(7, 0), Move::jump(&[JumpStep::new(sq(6, 1), sq(5, 2))])),
        (sq(5, 5), Move::slide(sq(4, 4))),
        (sq(12, 0), Move::slide(sq(11, 1))),
    ];

    for (from, mv) in &cases {
        assert!(state.apply_move(from.x, from.y, mv).is_err());
        assert_eq!(state, before);
    }
}

/// Test the error kinds reported for each rejection.
#[test]
fn test_rejection_kinds() {
    let mut state = GameState::standard();

    assert_eq!(
        state.apply_move(2, 1, &Move::slide(sq(3, 2))),
        Err(MoveError::WrongPlayer {
            at: sq(2, 1),
            piece: Piece::LIGHT_PAWN,
            turn: Color::Dark
        })
    );
    assert_eq!(
        state.apply_move(8, 1, &Move::slide(sq(7, 2))),
        Err(MoveError::NoLegalMoves { at: sq(8, 1) })
    );
    assert_eq!(
        state.apply_move(7, 0, &Move::slide(sq(5, 2))),
        Err(MoveError::InvalidMove {
            at: sq(7, 0),
            mv: Move::slide(sq(5, 2))
        })
    );
    assert_eq!(
        state.apply_move(5, 5, &Move::slide(sq(4, 4))),
        Err(MoveError::EmptySquare { at: sq(5, 5) })
    );
    assert_eq!(
        state.apply_move(12, 0, &Move::slide(sq(11, 1))),
        Err(MoveError::OffBoard { at: sq(12, 0) })
    );
}

/// Test that a surrounded piece cannot move at all.
#[test]
fn test_surrounded_piece_rejected() {
    let mut state = game(
        "
        d . . . d
        . l . l .
        . . D . .
        . l . l .
        d . . . d
        ",
    );

    for mv in [
        Move::slide(sq(1, 1)),
        Move::slide(sq(3, 3)),
        Move::jump(&[JumpStep::new(sq(1, 1), sq(0, 0))]),
    ] {
        assert_eq!(
            state.apply_move(2, 2, &mv),
            Err(MoveError::NoLegalMoves { at: sq(2, 2) })
        );
    }
    assert_eq!(state.turn(), Color::Dark);
}

/// Test that a jump chain with the steps reordered is rejected.
#[test]
fn test_reordered_chain_rejected() {
    let mut state = game(
        "
        . . . . . .
        . . . . l .
        . . . . . .
        . . l . . .
        . d . . . .
        l . . . . .
        ",
    );
    let mv = Move::jump(&[
        JumpStep::new(sq(1, 4), sq(0, 5)),
        JumpStep::new(sq(3, 2), sq(2, 3)),
    ]);

    assert!(matches!(
        state.apply_move(4, 1, &mv),
        Err(MoveError::InvalidMove { .. })
    ));
}

// =============================================================================
// Turns and Victory
// =============================================================================

/// Test turns alternate on accepted moves only.
#[test]
fn test_turn_alternation() {
    let mut state = GameState::standard();

    assert_eq!(state.turn(), Color::Dark);
    state.apply_move(7, 2, &Move::slide(sq(6, 3))).unwrap();
    assert_eq!(state.turn(), Color::Light);

    assert!(state.apply_move(7, 4, &Move::slide(sq(6, 5))).is_err());
    assert_eq!(state.turn(), Color::Light);

    state.apply_move(2, 5, &Move::slide(sq(3, 4))).unwrap();
    assert_eq!(state.turn(), Color::Dark);
    assert_eq!(state.turn_number(), 3);
}

/// Test victory fires when the last opposing piece is captured, and the
/// turn still passes.
#[test]
fn test_capture_last_piece_wins() {
    let mut state = game(
        "
        . . . .
        . . . .
        . l . .
        d . . d
        ",
    );

    let outcome = state
        .apply_move(3, 0, &Move::jump(&[JumpStep::new(sq(2, 1), sq(1, 2))]))
        .unwrap();

    assert_eq!(outcome.result, Some(GameResult::Winner(Color::Dark)));
    assert_eq!(state.result(), Some(GameResult::Winner(Color::Dark)));
    assert!(state.is_over());
    assert_eq!(state.turn(), Color::Light);
}

/// Test that losing some but not all pieces does not end the game.
#[test]
fn test_victory_requires_zero_pieces() {
    let mut state = game(
        "
        . . . L
        . . . .
        . l . .
        d . . .
        ",
    );

    let outcome = state
        .apply_move(3, 0, &Move::jump(&[JumpStep::new(sq(2, 1), sq(1, 2))]))
        .unwrap();

    assert_eq!(outcome.result, None);
    assert!(!state.is_over());
    assert_eq!(state.board().count(Color::Light), 1);
}

/// Test the light side can win too.
#[test]
fn test_light_wins() {
    let config = BoardConfig::from_diagram(
        "
        . . . .
        . l . .
        . . d .
        . . . .
        ",
    )
    .unwrap()
    .with_first_to_move(Color::Light);
    let mut state = GameState::new(config).unwrap();

    let outcome = state
        .apply_move(1, 1, &Move::jump(&[JumpStep::new(sq(2, 2), sq(3, 3))]))
        .unwrap();

    assert_eq!(outcome.result, Some(GameResult::Winner(Color::Light)));
    assert_eq!(state.turn(), Color::Dark);
}

/// Test that independent games do not affect each other.
#[test]
fn test_independent_games() {
    let mut first = GameState::standard();
    let second = GameState::standard();

    first.apply_move(7, 0, &Move::slide(sq(6, 1))).unwrap();

    assert_ne!(first, second);
    assert_eq!(second.turn(), Color::Dark);
    assert_eq!(second.board().get(sq(7, 0)), Some(Piece::DARK_PAWN));
}
