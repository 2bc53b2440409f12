use std::fmt;
use std::hash::{Hash, Hasher};

use super::{Board, Piece, Square, Type};

/// One ply, captured with everything needed to undo it.
///
/// Two moves compare equal when they share endpoints, whatever their flags.
/// A click pair built with [`Move::new`] therefore matches the flagged move
/// (castle, en passant) sitting in the legal list.
#[derive(Debug, Clone, Copy)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece_moved: Piece,
    /// For en passant this is the enemy pawn, even though `to` is empty
    pub piece_captured: Piece,
    pub is_en_passant: bool,
    pub is_castle: bool,
    pub is_promotion: bool,
}

impl Move {
    pub fn new(from: Square, to: Square, board: &Board) -> Move {
        let piece_moved = board[from];
        let is_promotion =
            piece_moved.piece_type == Type::Pawn && to.row == piece_moved.color.promotion_row();

        Move {
            from,
            to,
            piece_moved,
            piece_captured: board[to],
            is_en_passant: false,
            is_castle: false,
            is_promotion,
        }
    }

    pub fn en_passant(from: Square, to: Square, board: &Board) -> Move {
        let mut mv = Move::new(from, to, board);
        mv.is_en_passant = true;
        mv.piece_captured = Piece::new(mv.piece_moved.color.opposite(), Type::Pawn);
        mv
    }

    pub fn castle(from: Square, to: Square, board: &Board) -> Move {
        let mut mv = Move::new(from, to, board);
        mv.is_castle = true;
        mv
    }

    pub fn is_capture(&self) -> bool {
        !self.piece_captured.is_none()
    }

    /// Square the captured piece actually stood on
    pub fn capture_square(&self) -> Square {
        if self.is_en_passant {
            Square::new(self.from.row, self.to.col)
        } else {
            self.to
        }
    }

    pub fn is_kingside_castle(&self) -> bool {
        self.is_castle && self.to.col > self.from.col
    }

    /// Identity key built from the endpoints only
    pub fn move_id(&self) -> u16 {
        self.from.row as u16 * 1000
            + self.from.col as u16 * 100
            + self.to.row as u16 * 10
            + self.to.col as u16
    }

    /// Long form such as "e2e4"
    pub fn chess_notation(&self) -> String {
        format!("{}{}", self.from, self.to)
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.move_id() == other.move_id()
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.move_id().hash(state);
    }
}

impl fmt::Display for Move {
    /// Short algebraic form without disambiguation or check suffixes
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_castle {
            return f.write_str(if self.is_kingside_castle() { "O-O" } else { "O-O-O" });
        }

        match self.piece_moved.piece_type {
            Type::Pawn if self.is_capture() => write!(f, "{}x{}", self.from.file(), self.to),
            Type::Pawn => write!(f, "{}", self.to),
            kind => {
                let capture = if self.is_capture() { "x" } else { "" };
                write!(f, "{}{}{}", kind.letter(), capture, self.to)
            }
        }
    }
}
