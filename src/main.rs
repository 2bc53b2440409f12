use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, Subcommand, ValueEnum};

use chess_rules::config::{GameConfig, PlayerConfig, DEFAULT_MAX_PLIES};
use chess_rules::game_repr::{Position, STARTING_FEN};
use chess_rules::orchestrator::Orchestrator;

#[derive(Parser, Debug)]
#[command(name = "chess_rules")]
#[command(about = "Chess rules engine: self-play and move-generation checks")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play one game between two automatic players
    Play {
        #[arg(long, value_enum, default_value_t = Kind::Greedy)]
        white: Kind,

        #[arg(long, value_enum, default_value_t = Kind::Random)]
        black: Kind,

        /// Seed for reproducible games
        #[arg(long)]
        seed: Option<u64>,

        /// Stop undecided after this many plies
        #[arg(long, default_value_t = DEFAULT_MAX_PLIES)]
        max_plies: usize,

        /// Starting position
        #[arg(long)]
        fen: Option<String>,
    },
    /// Count leaf nodes of the legal move tree
    Perft {
        depth: u32,

        #[arg(long, default_value = STARTING_FEN)]
        fen: String,

        /// Split root moves across threads
        #[arg(long)]
        parallel: bool,
    },
    /// Perft count per root move
    Divide {
        depth: u32,

        #[arg(long, default_value = STARTING_FEN)]
        fen: String,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Kind {
    Random,
    Greedy,
}

impl From<Kind> for PlayerConfig {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Random => PlayerConfig::Random,
            Kind::Greedy => PlayerConfig::Greedy,
        }
    }
}

fn parse_position(fen: &str) -> Option<Position> {
    match Position::from_fen(fen) {
        Ok(pos) => Some(pos),
        Err(e) => {
            log::error!("Cannot read position: {}", e);
            None
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    match args.command {
        Command::Play { white, black, seed, max_plies, fen } => {
            let mut config = GameConfig::new(white.into(), black.into()).with_max_plies(max_plies);
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            if let Some(fen) = fen {
                config = config.with_fen(fen);
            }

            let mut game = match Orchestrator::new(&config) {
                Ok(game) => game,
                Err(e) => {
                    log::error!("Cannot start game: {}", e);
                    return ExitCode::FAILURE;
                }
            };

            let result = game.play();
            println!("{}", game.move_log_text());
            match result {
                Some(result) => println!("{}", result),
                None => println!("Undecided after {} plies", game.plies()),
            }
            print!("{}", game.position().board());
            println!("{}", game.position().to_fen());
        }
        Command::Perft { depth, fen, parallel } => {
            let Some(pos) = parse_position(&fen) else {
                return ExitCode::FAILURE;
            };

            let start = Instant::now();
            let nodes = if parallel { pos.perft_parallel(depth) } else { pos.perft(depth) };
            let elapsed = start.elapsed();
            println!("perft({}) = {}", depth, nodes);
            log::info!(
                "{} nodes in {:.3}s ({:.0} nps)",
                nodes,
                elapsed.as_secs_f64(),
                nodes as f64 / elapsed.as_secs_f64().max(1e-9)
            );
        }
        Command::Divide { depth, fen } => {
            let Some(pos) = parse_position(&fen) else {
                return ExitCode::FAILURE;
            };

            let split = pos.divide(depth);
            for (mv, count) in &split {
                println!("{}: {}", mv.chess_notation(), count);
            }
            println!();
            println!("Moves: {}", split.len());
            println!("Nodes: {}", split.iter().map(|(_, n)| n).sum::<u64>());
        }
    }

    ExitCode::SUCCESS
}
