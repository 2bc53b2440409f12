use smallvec::SmallVec;

use crate::game_repr::{Move, Position, Square};

use super::BISHOP_DIRECTIONS;

impl Position {
    pub fn bishop_moves_into(&self, from: Square, moves: &mut SmallVec<[Move; 64]>) {
        self.slide_moves_into(from, &BISHOP_DIRECTIONS, moves);
    }

    pub fn bishop_moves(&self, from: Square) -> SmallVec<[Move; 64]> {
        let mut moves: SmallVec<[Move; 64]> = SmallVec::with_capacity(13); // Bishops have max 13 moves (7+6 diagonals)
        self.bishop_moves_into(from, &mut moves);
        moves
    }
}
