//! Uniformly random move chooser.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::agent::player::Player;
use crate::game_repr::{Move, Position};

/// Picks any legal move with equal probability.
///
/// Seeded construction makes whole games reproducible, which the
/// self-play tests rely on.
pub struct RandomPlayer {
    rng: StdRng,
    name: String,
}

impl RandomPlayer {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            name: "Random".to_string(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            name: format!("Random#{}", seed),
        }
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for RandomPlayer {
    fn get_move(&mut self, _pos: &Position, legal: &[Move]) -> Option<Move> {
        legal.choose(&mut self.rng).copied()
    }

    fn name(&self) -> &str {
        &self.name
    }
}
