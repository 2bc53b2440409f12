//! One-ply greedy move chooser.
//!
//! Every candidate is tried on a private copy of the position. A move that
//! mates wins outright; otherwise the move that wins the most material
//! (captured piece plus promotion gain) is played. Ties are broken at
//! random so that self-play games do not repeat.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::agent::player::Player;
use crate::game_repr::{Move, Position, Type};

// Material values in centipawns
const PAWN_VALUE: i32 = 100;
const KNIGHT_VALUE: i32 = 300;
const BISHOP_VALUE: i32 = 320;
const ROOK_VALUE: i32 = 500;
const QUEEN_VALUE: i32 = 900;

const MATE_SCORE: i32 = 100_000;

/// Get material value for a piece type
pub fn piece_value(piece_type: Type) -> i32 {
    match piece_type {
        Type::Pawn => PAWN_VALUE,
        Type::Knight => KNIGHT_VALUE,
        Type::Bishop => BISHOP_VALUE,
        Type::Rook => ROOK_VALUE,
        Type::Queen => QUEEN_VALUE,
        Type::King | Type::None => 0,
    }
}

pub struct GreedyPlayer {
    rng: StdRng,
    name: String,
}

impl GreedyPlayer {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            name: "Greedy".to_string(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            name: format!("Greedy#{}", seed),
        }
    }

    /// Immediate value of playing `mv` from `scratch`; the position is
    /// restored before returning
    fn score(scratch: &mut Position, mv: Move) -> i32 {
        let mut gain = piece_value(mv.piece_captured.piece_type);
        if mv.is_promotion {
            gain += QUEEN_VALUE - PAWN_VALUE;
        }

        scratch.make_move(mv);
        scratch.valid_moves();
        if scratch.is_checkmate() {
            gain = MATE_SCORE;
        }
        scratch.undo_move();
        gain
    }
}

impl Default for GreedyPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for GreedyPlayer {
    fn get_move(&mut self, pos: &Position, legal: &[Move]) -> Option<Move> {
        let mut scratch = pos.clone();
        let scored: Vec<(Move, i32)> = legal
            .iter()
            .map(|&mv| (mv, Self::score(&mut scratch, mv)))
            .collect();

        let best = scored.iter().map(|(_, s)| *s).max()?;
        let top: Vec<Move> = scored
            .into_iter()
            .filter(|(_, s)| *s == best)
            .map(|(mv, _)| mv)
            .collect();

        log::trace!("{} picks among {} moves scoring {}", self.name, top.len(), best);
        top.choose(&mut self.rng).copied()
    }

    fn name(&self) -> &str {
        &self.name
    }
}
