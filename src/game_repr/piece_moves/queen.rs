use smallvec::SmallVec;

use crate::game_repr::{Move, Position, Square};

impl Position {
    pub fn queen_moves_into(&self, from: Square, moves: &mut SmallVec<[Move; 64]>) {
        self.rook_moves_into(from, moves);
        self.bishop_moves_into(from, moves);
    }

    pub fn queen_moves(&self, from: Square) -> SmallVec<[Move; 64]> {
        let mut moves: SmallVec<[Move; 64]> = SmallVec::with_capacity(27); // Queens have max 27 moves (13 + 14)
        self.queen_moves_into(from, &mut moves);
        moves
    }
}
