use smallvec::SmallVec;

use crate::game_repr::{Move, Position, Square};

use super::ROOK_DIRECTIONS;

impl Position {
    pub fn rook_moves_into(&self, from: Square, moves: &mut SmallVec<[Move; 64]>) {
        self.slide_moves_into(from, &ROOK_DIRECTIONS, moves);
    }

    pub fn rook_moves(&self, from: Square) -> SmallVec<[Move; 64]> {
        let mut moves: SmallVec<[Move; 64]> = SmallVec::with_capacity(14);
        self.rook_moves_into(from, &mut moves);
        moves
    }
}
