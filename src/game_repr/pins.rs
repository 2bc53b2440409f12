use smallvec::SmallVec;

use super::piece_moves::{BISHOP_DIRECTIONS, KNIGHT_OFFSETS, ROOK_DIRECTIONS};
use super::{Position, Square, Type};

/// An allied piece that shields the king from a slider along `direction`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pin {
    pub square: Square,
    pub direction: (i8, i8),
}

/// An enemy piece giving check; `direction` points from the king to it
/// (the knight offset for knight checks)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Check {
    pub square: Square,
    pub direction: (i8, i8),
}

#[derive(Debug, Clone, Default)]
pub struct PinsAndChecks {
    pub in_check: bool,
    pub pins: SmallVec<[Pin; 8]>,
    pub checks: SmallVec<[Check; 2]>,
}

impl Position {
    /// Ray based check detection for the side to move.
    ///
    /// Casts the eight lines out of the king and inspects the first enemy
    /// piece on each, remembering a single allied blocker as a pin, then
    /// looks at the knight squares. Its `in_check` agrees with
    /// [`Position::in_check`].
    pub fn check_for_pins_and_checks(&self) -> PinsAndChecks {
        let ally = self.side_to_move;
        let enemy = ally.opposite();
        let king_sq = self.king_square(ally);
        let mut result = PinsAndChecks::default();

        let rays = ROOK_DIRECTIONS
            .iter()
            .map(|&d| (d, true))
            .chain(BISHOP_DIRECTIONS.iter().map(|&d| (d, false)));

        for ((dr, dc), orthogonal) in rays {
            let mut possible_pin: Option<Square> = None;
            let mut current = king_sq;
            let mut distance = 0;

            while let Some(next) = current.offset(dr, dc) {
                current = next;
                distance += 1;
                let piece = self.board[next];

                if piece.is(ally) {
                    if possible_pin.is_some() {
                        // Second allied piece: nothing on this line matters
                        break;
                    }
                    possible_pin = Some(next);
                } else if piece.is(enemy) {
                    let attacks = match piece.piece_type {
                        Type::Rook => orthogonal,
                        Type::Bishop => !orthogonal,
                        Type::Queen => true,
                        Type::King => distance == 1,
                        // Enemy pawns hit the king from the squares in front of it
                        Type::Pawn => distance == 1 && !orthogonal && dr == ally.forward(),
                        Type::Knight | Type::None => false,
                    };

                    if attacks {
                        match possible_pin {
                            None => {
                                result.in_check = true;
                                result.checks.push(Check { square: next, direction: (dr, dc) });
                            }
                            Some(square) => result.pins.push(Pin { square, direction: (dr, dc) }),
                        }
                    }
                    break;
                }
            }
        }

        for &(dr, dc) in &KNIGHT_OFFSETS {
            if let Some(sq) = king_sq.offset(dr, dc) {
                if self.board[sq].is_kind(enemy, Type::Knight) {
                    result.in_check = true;
                    result.checks.push(Check { square: sq, direction: (dr, dc) });
                }
            }
        }

        result
    }

    /// Pin on the piece standing on `sq`, if any
    pub fn pin_on(&self, sq: Square) -> Option<Pin> {
        self.check_for_pins_and_checks()
            .pins
            .into_iter()
            .find(|pin| pin.square == sq)
    }
}
