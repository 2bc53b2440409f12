//! Game configuration types.
//!
//! A [`GameConfig`] holds everything the orchestrator needs to start a
//! headless game: who plays each side, where the game starts and how long
//! it may run.

use crate::agent::{GreedyPlayer, Player, RandomPlayer};
use crate::game_repr::{Color, ParseError, Position};

/// Plies after which an undecided game is abandoned
pub const DEFAULT_MAX_PLIES: usize = 300;

/// Configuration for a single player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerConfig {
    /// Uniformly random legal moves
    Random,
    /// One-ply material grabber
    Greedy,
}

impl PlayerConfig {
    /// Build the player. With a seed, the two sides get distinct streams.
    pub fn build(&self, seed: Option<u64>, color: Color) -> Box<dyn Player> {
        let seed = seed.map(|s| match color {
            Color::White => s,
            Color::Black => s.wrapping_add(1),
        });
        match (self, seed) {
            (PlayerConfig::Random, Some(s)) => Box::new(RandomPlayer::with_seed(s)),
            (PlayerConfig::Random, None) => Box::new(RandomPlayer::new()),
            (PlayerConfig::Greedy, Some(s)) => Box::new(GreedyPlayer::with_seed(s)),
            (PlayerConfig::Greedy, None) => Box::new(GreedyPlayer::new()),
        }
    }
}

/// Complete game configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Configuration for the White player
    pub white_player: PlayerConfig,
    /// Configuration for the Black player
    pub black_player: PlayerConfig,
    /// Game stops undecided after this many plies
    pub max_plies: usize,
    /// RNG seed shared by both players; `None` draws from entropy
    pub seed: Option<u64>,
    /// Starting position; `None` is the standard setup
    pub fen: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::random_vs_random()
    }
}

impl GameConfig {
    pub fn new(white_player: PlayerConfig, black_player: PlayerConfig) -> Self {
        Self {
            white_player,
            black_player,
            max_plies: DEFAULT_MAX_PLIES,
            seed: None,
            fen: None,
        }
    }

    pub fn random_vs_random() -> Self {
        Self::new(PlayerConfig::Random, PlayerConfig::Random)
    }

    pub fn greedy_vs_random() -> Self {
        Self::new(PlayerConfig::Greedy, PlayerConfig::Random)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_max_plies(mut self, max_plies: usize) -> Self {
        self.max_plies = max_plies;
        self
    }

    pub fn with_fen(mut self, fen: impl Into<String>) -> Self {
        self.fen = Some(fen.into());
        self
    }

    pub fn player(&self, color: Color) -> PlayerConfig {
        match color {
            Color::White => self.white_player,
            Color::Black => self.black_player,
        }
    }

    /// Starting position described by this configuration
    pub fn starting_position(&self) -> Result<Position, ParseError> {
        match &self.fen {
            Some(fen) => Position::from_fen(fen),
            None => Ok(Position::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.white_player, PlayerConfig::Random);
        assert_eq!(config.black_player, PlayerConfig::Random);
        assert_eq!(config.max_plies, DEFAULT_MAX_PLIES);
        assert_eq!(config.seed, None);
        assert_eq!(config.starting_position(), Ok(Position::new()));
    }

    #[test]
    fn test_greedy_vs_random() {
        let config = GameConfig::greedy_vs_random().with_seed(4).with_max_plies(10);
        assert_eq!(config.player(Color::White), PlayerConfig::Greedy);
        assert_eq!(config.player(Color::Black), PlayerConfig::Random);
        assert_eq!(config.seed, Some(4));
        assert_eq!(config.max_plies, 10);
    }

    #[test]
    fn test_seeded_players_get_distinct_names() {
        let white = PlayerConfig::Random.build(Some(7), Color::White);
        let black = PlayerConfig::Random.build(Some(7), Color::Black);
        assert_eq!(white.name(), "Random#7");
        assert_eq!(black.name(), "Random#8");
    }

    #[test]
    fn test_bad_fen_is_reported() {
        let config = GameConfig::default().with_fen("not a position");
        assert!(config.starting_position().is_err());
    }
}
