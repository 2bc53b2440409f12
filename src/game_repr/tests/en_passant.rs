use super::*;

// ==================== EN PASSANT TESTS ====================

fn open_with_d5(pos: &mut Position) {
    play(pos, &["e2e4", "a7a6", "e4e5", "d7d5"]);
}

#[test]
fn test_double_push_sets_target() {
    let mut pos = Position::new();
    play(&mut pos, &["e2e4"]);
    assert_eq!(pos.en_passant(), Some(sq("e3")));

    play(&mut pos, &["g8f6"]);
    assert_eq!(pos.en_passant(), None, "Single moves clear the target");
}

#[test]
fn test_en_passant_available_immediately() {
    let mut pos = Position::new();
    open_with_d5(&mut pos);
    assert_eq!(pos.en_passant(), Some(sq("d6")));

    let mv = pos.find_legal_move(sq("e5"), sq("d6")).expect("e.p. capture");
    assert!(mv.is_en_passant);
    assert_eq!(mv.piece_captured, black(Type::Pawn));
}

#[test]
fn test_en_passant_lasts_one_ply() {
    let mut pos = Position::new();
    open_with_d5(&mut pos);
    play(&mut pos, &["g1f3", "g8f6"]);

    let moves = pos.legal_moves(sq("e5"));
    assert!(!has_move(&moves, "e5", "d6"));
    assert!(has_move(&moves, "e5", "f6"));
}

#[test]
fn test_en_passant_execution_and_undo() {
    let mut pos = Position::new();
    open_with_d5(&mut pos);
    let before = pos.clone();

    play(&mut pos, &["e5d6"]);
    assert_eq!(pos.piece_at(sq("d6")), white(Type::Pawn));
    assert!(pos.piece_at(sq("d5")).is_none(), "Captured pawn is removed");
    assert!(pos.piece_at(sq("e5")).is_none());
    assert_eq!(pos.en_passant(), None);

    pos.undo_move();
    assert_eq!(pos, before);
    assert_eq!(pos.piece_at(sq("d5")), black(Type::Pawn));
    assert!(pos.piece_at(sq("d6")).is_none());
    assert_eq!(pos.en_passant(), Some(sq("d6")));
}

#[test]
fn test_black_en_passant_evades_check() {
    let mut pos = fen("8/8/8/3k4/3p4/8/4P3/4K3 w - - 0 1");
    play(&mut pos, &["e2e4"]);
    assert!(pos.in_check(), "e4 pawn checks the king on d5");

    let mv = pos.find_legal_move(sq("d4"), sq("e3")).expect("e.p. removes the checker");
    assert!(mv.is_en_passant);

    pos.make_move(mv);
    assert!(pos.piece_at(sq("e4")).is_none());
    assert_eq!(pos.piece_at(sq("e3")), black(Type::Pawn));

    pos.undo_move();
    assert_eq!(pos.piece_at(sq("e4")), white(Type::Pawn));
    assert_eq!(pos.piece_at(sq("d4")), black(Type::Pawn));
    assert!(pos.piece_at(sq("e3")).is_none());
    assert_eq!(pos.en_passant(), Some(sq("e3")));
}

#[test]
fn test_en_passant_blocked_by_horizontal_pin() {
    // Taking on d6 would empty the fifth rank between the rook and the king
    let mut pos = fen("8/8/8/K2pP2r/8/8/8/7k w - d6 0 1");
    let moves = pos.legal_moves(sq("e5"));

    assert!(!has_move(&moves, "e5", "d6"));
    assert!(has_move(&moves, "e5", "e6"));
}
