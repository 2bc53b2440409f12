use super::*;

// ==================== HELPER FUNCTIONS ====================

/// Parse an algebraic square such as "e4"
pub fn sq(s: &str) -> Square {
    s.parse().expect("valid square in test")
}

pub fn fen(s: &str) -> Position {
    Position::from_fen(s).expect("valid FEN in test")
}

/// Helper function to create an empty board
pub fn empty_board() -> Position {
    Position::from_parts(Board::empty(), Color::White, CastlingRights::none(), None)
}

/// Helper function to place a piece, keeping the king cache in sync
pub fn place_piece(pos: &mut Position, at: &str, piece: Piece) {
    let at = sq(at);
    pos.board[at] = piece;
    if piece.piece_type == Type::King {
        pos.set_king_square(piece.color, at);
    }
}

pub fn white(piece_type: Type) -> Piece {
    Piece::new(Color::White, piece_type)
}

pub fn black(piece_type: Type) -> Piece {
    Piece::new(Color::Black, piece_type)
}

/// Helper function to check if a move exists in the move list
pub fn has_move(moves: &[Move], from: &str, to: &str) -> bool {
    moves.iter().any(|m| m.from == sq(from) && m.to == sq(to))
}

/// Play a sequence of long-form moves ("e2e4"), each of which must be legal
pub fn play(pos: &mut Position, moves: &[&str]) {
    for notation in moves {
        let (from, to) = notation.split_at(2);
        let mv = pos
            .find_legal_move(sq(from), sq(to))
            .unwrap_or_else(|| panic!("{} should be legal in {}", notation, pos.to_fen()));
        pos.make_move(mv);
    }
}

// ==================== TEST MODULES ====================

mod pawn_movement;
mod en_passant;
mod perft;
