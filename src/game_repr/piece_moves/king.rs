use smallvec::SmallVec;

use crate::game_repr::{Move, Position, Side, Square};

use super::KING_OFFSETS;

impl Position {
    /// Plain king steps. Castling is generated separately by
    /// [`Position::castle_moves_into`] so attack detection never recurses into it.
    pub fn king_moves_into(&self, from: Square, moves: &mut SmallVec<[Move; 64]>) {
        self.step_moves_into(from, &KING_OFFSETS, moves);
    }

    pub fn king_moves(&self, from: Square) -> SmallVec<[Move; 64]> {
        let mut moves: SmallVec<[Move; 64]> = SmallVec::with_capacity(8);
        self.king_moves_into(from, &mut moves);
        moves
    }

    /// Castling moves for the king of the side to move standing on `king_sq`
    pub fn castle_moves_into(&self, king_sq: Square, moves: &mut SmallVec<[Move; 64]>) {
        // Can't castle out of check
        if self.square_under_attack(king_sq) {
            return;
        }

        let color = self.side_to_move;
        for side in [Side::King, Side::Queen] {
            if !self.castling_rights.get(color, side) {
                continue;
            }

            // Squares between king and rook must be empty; only the two the
            // king crosses must be safe (b1/b8 may be attacked)
            let step: i8 = match side {
                Side::King => 1,
                Side::Queen => -1,
            };
            let path_clear = (1..)
                .map_while(|i| king_sq.offset(0, step * i))
                .take_while(|sq| sq.col != side.rook_col())
                .all(|sq| self.board.is_empty(sq));
            if !path_clear {
                continue;
            }

            let crossed = [king_sq.offset(0, step), king_sq.offset(0, 2 * step)];
            let king_safe = crossed
                .iter()
                .all(|sq| matches!(sq, Some(sq) if !self.square_under_attack(*sq)));

            if king_safe {
                if let Some(to) = crossed[1] {
                    moves.push(Move::castle(king_sq, to, &self.board));
                }
            }
        }
    }
}
