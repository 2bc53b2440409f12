//! Player trait and game outcome types.
//!
//! A player is anything that can pick one move out of a legal-move list:
//! a seeded random mover, a one-ply greedy mover, or a caller relaying
//! clicks through the [`Orchestrator`](crate::orchestrator::Orchestrator).
//!
//! Players never mutate the game. They receive the position read-only
//! together with the legal moves the orchestrator already computed, and
//! the orchestrator applies whatever they return.
//!
//! # Examples
//!
//! ```rust
//! use chess_rules::agent::{Player, RandomPlayer};
//! use chess_rules::game_repr::Position;
//!
//! let mut pos = Position::new();
//! let legal = pos.valid_moves();
//! let mut player = RandomPlayer::with_seed(42);
//! let mv = player.get_move(&pos, &legal).expect("opening has moves");
//! assert!(legal.contains(&mv));
//! ```

use std::fmt;

use crate::game_repr::{Color, Move, Position};

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// Black was checkmated
    WhiteWins,
    /// White was checkmated
    BlackWins,
    /// Side to move has no legal moves but is not in check
    Stalemate,
}

impl GameResult {
    /// Create a GameResult from the winning color
    pub fn from_winner(winner: Color) -> Self {
        match winner {
            Color::White => GameResult::WhiteWins,
            Color::Black => GameResult::BlackWins,
        }
    }

    /// Read the outcome off a position whose legal moves were just generated.
    ///
    /// Returns `None` while the game is still going.
    pub fn of(pos: &Position) -> Option<Self> {
        if pos.is_checkmate() {
            // The side to move is the one that got mated
            Some(Self::from_winner(pos.side_to_move().opposite()))
        } else if pos.is_stalemate() {
            Some(GameResult::Stalemate)
        } else {
            None
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameResult::WhiteWins => "White wins by checkmate",
            GameResult::BlackWins => "Black wins by checkmate",
            GameResult::Stalemate => "Stalemate",
        };
        f.write_str(text)
    }
}

/// Trait for entities that choose moves.
///
/// # Required Methods
///
/// Only `get_move()` must be implemented.
///
/// ## `get_move()`
/// - **Returns `Some(Move)`**: one of the moves in `legal`
/// - **Returns `None`**: when `legal` is empty or the player gives up
///
/// The orchestrator checks the answer against its own legal list, so a
/// misbehaving player cannot corrupt the position.
pub trait Player {
    /// Pick a move for the side to move in `pos`.
    ///
    /// `legal` is the full legal-move list for `pos`, castling included.
    fn get_move(&mut self, pos: &Position, legal: &[Move]) -> Option<Move>;

    /// Notify this player that the game has ended.
    fn game_ended(&mut self, _result: GameResult) {}

    /// Get the display name of this player.
    fn name(&self) -> &str {
        "Player"
    }
}
