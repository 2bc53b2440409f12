use smallvec::SmallVec;

use crate::game_repr::{Move, Position, Square};

impl Position {
    pub fn pawn_moves_into(&self, from: Square, moves: &mut SmallVec<[Move; 64]>) {
        let color = self.board[from].color;
        let forward = color.forward();

        // Pushes: the double step needs both squares free
        if let Some(one) = from.offset(forward, 0) {
            if self.board.is_empty(one) {
                moves.push(Move::new(from, one, &self.board));

                if from.row == color.pawn_home_row() {
                    if let Some(two) = one.offset(forward, 0) {
                        if self.board.is_empty(two) {
                            moves.push(Move::new(from, two, &self.board));
                        }
                    }
                }
            }
        }

        for to in self.pawn_attacks(from) {
            if self.board[to].is(color.opposite()) {
                moves.push(Move::new(from, to, &self.board));
            } else if self.en_passant == Some(to) {
                moves.push(Move::en_passant(from, to, &self.board));
            }
        }
    }

    pub fn pawn_moves(&self, from: Square) -> SmallVec<[Move; 64]> {
        let mut moves: SmallVec<[Move; 64]> = SmallVec::with_capacity(4);
        self.pawn_moves_into(from, &mut moves);
        moves
    }

    /// The (up to) two diagonal squares a pawn on `from` attacks, occupied or not
    pub fn pawn_attacks(&self, from: Square) -> impl Iterator<Item = Square> {
        let forward = self.board[from].color.forward();
        [-1, 1]
            .into_iter()
            .filter_map(move |dc| from.offset(forward, dc))
    }
}
