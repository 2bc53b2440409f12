use super::*;

// ==================== PAWN MOVEMENT TESTS ====================

#[test]
fn test_pawn_single_and_double_push_from_home() {
    let mut pos = Position::new();
    let moves = pos.legal_moves(sq("e2"));

    assert_eq!(moves.len(), 2);
    assert!(has_move(&moves, "e2", "e3"));
    assert!(has_move(&moves, "e2", "e4"));
}

#[test]
fn test_black_pawn_moves_down_the_board() {
    let mut pos = fen("4k3/3p4/8/8/8/8/8/4K3 b - - 0 1");
    let moves = pos.legal_moves(sq("d7"));

    assert_eq!(moves.len(), 2);
    assert!(has_move(&moves, "d7", "d6"));
    assert!(has_move(&moves, "d7", "d5"));
}

#[test]
fn test_double_push_needs_both_squares_empty() {
    // Blocker on e3: no push at all
    let mut pos = fen("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1");
    assert!(pos.legal_moves(sq("e2")).is_empty());

    // Blocker on e4: single push only
    let mut pos = fen("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1");
    let moves = pos.legal_moves(sq("e2"));
    assert_eq!(moves.len(), 1);
    assert!(has_move(&moves, "e2", "e3"));
}

#[test]
fn test_no_double_push_off_home_rank() {
    let mut pos = fen("4k3/8/8/8/8/4P3/8/4K3 w - - 0 1");
    let moves = pos.legal_moves(sq("e3"));

    assert_eq!(moves.len(), 1);
    assert!(has_move(&moves, "e3", "e4"));
}

#[test]
fn test_pawn_captures_only_enemies() {
    let mut pos = fen("4k3/8/8/3p1P2/4P3/8/8/4K3 w - - 0 1");
    let moves = pos.legal_moves(sq("e4"));

    assert_eq!(moves.len(), 2);
    assert!(has_move(&moves, "e4", "e5"));
    assert!(has_move(&moves, "e4", "d5"));
    assert!(!has_move(&moves, "e4", "f5"), "Can't capture own pawn");
}

#[test]
fn test_pawn_cannot_capture_straight_ahead() {
    let mut pos = fen("4k3/8/8/8/4p3/4P3/8/4K3 w - - 0 1");
    assert!(pos.legal_moves(sq("e3")).is_empty());
}

#[test]
fn test_edge_pawn_does_not_wrap() {
    let mut pos = fen("4k3/8/8/8/8/1p5p/P7/4K3 w - - 0 1");
    let moves = pos.legal_moves(sq("a2"));

    assert_eq!(moves.len(), 3);
    assert!(has_move(&moves, "a2", "b3"));
    assert!(!has_move(&moves, "a2", "h3"), "Capture must not wrap around the board");
}
