use smallvec::SmallVec;

use crate::game_repr::{Move, Position, Square};

use super::KNIGHT_OFFSETS;

impl Position {
    pub fn knight_moves_into(&self, from: Square, moves: &mut SmallVec<[Move; 64]>) {
        self.step_moves_into(from, &KNIGHT_OFFSETS, moves);
    }

    pub fn knight_moves(&self, from: Square) -> SmallVec<[Move; 64]> {
        let mut moves: SmallVec<[Move; 64]> = SmallVec::with_capacity(8); // Knights have max 8 moves
        self.knight_moves_into(from, &mut moves);
        moves
    }
}
