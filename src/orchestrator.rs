//! Game flow coordination.
//!
//! This module contains the [`Orchestrator`], the driver that sits between the
//! rules engine and whoever chooses moves. It manages:
//! - The single authoritative [`Position`] of the game
//! - The cached legal-move list for the side to move
//! - Turn management between two [`Player`]s
//! - Game end detection and reporting
//!
//! # Example Flow
//!
//! ```text
//! [New] -> [Query legal moves] -> [Player picks move] -> [Apply move]
//!   -> [Query legal moves] -> [Check end] -> [Player picks move] ...
//! ```
//!
//! Callers that relay clicks instead of running players use
//! [`Orchestrator::try_move`], which matches a (from, to) pair against the
//! cached legal list and applies the engine's own flagged move.

use crate::agent::player::{GameResult, Player};
use crate::config::GameConfig;
use crate::game_repr::{Color, Move, ParseError, Position, Square};

/// Root component of a headless game.
///
/// # Invariants
///
/// - `legal` always holds the legal moves of `position`, so the checkmate
///   and stalemate flags of `position` are current
/// - `result` is `Some` exactly when `legal` is empty
pub struct Orchestrator {
    position: Position,
    /// Position restored by [`reset`](Self::reset)
    start: Position,
    legal: Vec<Move>,
    result: Option<GameResult>,
    /// (white, black)
    players: (Box<dyn Player>, Box<dyn Player>),
    max_plies: usize,
}

impl Orchestrator {
    /// Create a game from a configuration.
    ///
    /// # Errors
    ///
    /// Returns the [`ParseError`] of an invalid starting FEN.
    pub fn new(config: &GameConfig) -> Result<Self, ParseError> {
        let start = config.starting_position()?;
        let white = config.white_player.build(config.seed, Color::White);
        let black = config.black_player.build(config.seed, Color::Black);

        log::info!("New game: {} vs {}", white.name(), black.name());
        Ok(Self::with_players(start, white, black, config.max_plies))
    }

    /// Create a game from an explicit position and players.
    pub fn with_players(
        start: Position,
        white: Box<dyn Player>,
        black: Box<dyn Player>,
        max_plies: usize,
    ) -> Self {
        let mut orchestrator = Self {
            position: start.clone(),
            start,
            legal: Vec::new(),
            result: None,
            players: (white, black),
            max_plies,
        };
        orchestrator.refresh();
        orchestrator
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Legal moves of the side to move
    pub fn legal_moves(&self) -> &[Move] {
        &self.legal
    }

    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move()
    }

    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    pub fn is_game_over(&self) -> bool {
        self.result.is_some()
    }

    pub fn plies(&self) -> usize {
        self.position.move_log().len()
    }

    /// Re-query legality after the position changed.
    fn refresh(&mut self) {
        self.legal = self.position.valid_moves();
        self.result = GameResult::of(&self.position);
    }

    fn apply(&mut self, mv: Move) {
        log::debug!("{:?} plays {}", self.side_to_move(), mv);
        self.position.make_move(mv);
        self.refresh();

        if let Some(result) = self.result {
            log::info!("Game over after {} plies: {}", self.plies(), result);
            self.players.0.game_ended(result);
            self.players.1.game_ended(result);
        }
    }

    /// Apply the legal move with these endpoints.
    ///
    /// The move actually applied is the one from the legal list, so castling,
    /// en-passant and promotion flags come from the engine, not the caller.
    /// Returns `None` (leaving the game untouched) when no legal move matches.
    pub fn try_move(&mut self, from: Square, to: Square) -> Option<Move> {
        let found = self
            .legal
            .iter()
            .copied()
            .find(|m| m.from == from && m.to == to);

        match found {
            Some(mv) => {
                self.apply(mv);
                Some(mv)
            }
            None => {
                log::warn!("Rejected {}{}: not a legal move", from, to);
                None
            }
        }
    }

    /// Take back the last ply. Does nothing at the start of the game.
    pub fn undo(&mut self) {
        if let Some(mv) = self.position.last_move() {
            log::debug!("Undo {}", mv);
        }
        self.position.undo_move();
        self.refresh();
    }

    /// Return to the starting position
    pub fn reset(&mut self) {
        self.position = self.start.clone();
        self.refresh();
    }

    /// Ask the player to move for one ply.
    ///
    /// Returns the move that was played, or `None` when the game is over or
    /// the player declined to move. An answer that is not in the legal list is
    /// rejected.
    pub fn step(&mut self) -> Option<Move> {
        if self.is_game_over() {
            return None;
        }

        let player = match self.side_to_move() {
            Color::White => &mut self.players.0,
            Color::Black => &mut self.players.1,
        };
        let mv = player.get_move(&self.position, &self.legal)?;

        if !self.legal.contains(&mv) {
            log::warn!("{} proposed illegal move {}", player.name(), mv.chess_notation());
            return None;
        }

        self.apply(mv);
        Some(mv)
    }

    /// Run the game until it ends, a player declines, or the ply limit is hit.
    ///
    /// Returns the result, `None` if the game was left undecided.
    pub fn play(&mut self) -> Option<GameResult> {
        while self.plies() < self.max_plies {
            if self.step().is_none() {
                break;
            }
        }

        if self.result.is_none() {
            log::info!("Game stopped undecided after {} plies", self.plies());
        }
        self.result
    }

    /// Numbered move list, e.g. `1. e4 e5 2. Nf3`
    pub fn move_log_text(&self) -> String {
        let mut text = String::new();
        let mut number = 1;
        let mut color = self.start.side_to_move();

        for (i, mv) in self.position.move_log().iter().enumerate() {
            if !text.is_empty() {
                text.push(' ');
            }
            match color {
                Color::White => text.push_str(&format!("{}. ", number)),
                Color::Black if i == 0 => text.push_str(&format!("{}... ", number)),
                Color::Black => {}
            }
            text.push_str(&mv.to_string());

            if color == Color::Black {
                number += 1;
            }
            color = color.opposite();
        }
        text
    }
}
