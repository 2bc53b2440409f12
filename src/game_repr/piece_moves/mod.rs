pub mod pawn;
pub mod knight;
pub mod bishop;
pub mod rook;
pub mod queen;
pub mod king;

use smallvec::SmallVec;

use crate::game_repr::{Move, Position, Square};

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1), (-2, 1), (-1, -2), (-1, 2),
    (1, -2), (1, 2), (2, -1), (2, 1),
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1), (-1, 0), (-1, 1), (0, -1),
    (0, 1), (1, -1), (1, 0), (1, 1),
];

impl Position {
    /// Walk each direction until the edge or the first piece. The first
    /// enemy piece is a capture; an ally stops the ray without a move.
    pub(crate) fn slide_moves_into(&self, from: Square, directions: &[(i8, i8)], moves: &mut SmallVec<[Move; 64]>) {
        let color = self.board[from].color;

        for &(dr, dc) in directions {
            let mut current = from;
            while let Some(next) = current.offset(dr, dc) {
                let target = self.board[next];
                if target.is_none() {
                    moves.push(Move::new(from, next, &self.board));
                } else {
                    if target.color != color {
                        moves.push(Move::new(from, next, &self.board));
                    }
                    break;
                }
                current = next;
            }
        }
    }

    /// Single steps by fixed offsets onto empty or enemy squares
    pub(crate) fn step_moves_into(&self, from: Square, offsets: &[(i8, i8)], moves: &mut SmallVec<[Move; 64]>) {
        let color = self.board[from].color;

        for &(dr, dc) in offsets {
            if let Some(to) = from.offset(dr, dc) {
                if !self.board[to].is(color) {
                    moves.push(Move::new(from, to, &self.board));
                }
            }
        }
    }
}
