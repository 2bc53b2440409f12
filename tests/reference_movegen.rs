//! Cross-check legal move generation against the `chess` crate.
//!
//! Promotion here is always to a queen, so the reference only counts
//! queen promotions.

use std::str::FromStr;

use chess::{Board, MoveGen};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use chess_rules::game_repr::Position;

fn reference_moves(board: &Board) -> Vec<chess::ChessMove> {
    MoveGen::new_legal(board)
        .filter(|m| m.get_promotion().map_or(true, |p| p == chess::Piece::Queen))
        .collect()
}

fn reference_perft(board: &Board, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = reference_moves(board);
    if depth == 1 {
        return moves.len() as u64;
    }
    moves
        .iter()
        .map(|&m| reference_perft(&board.make_move_new(m), depth - 1))
        .sum()
}

fn reference(pos: &Position) -> Board {
    Board::from_str(&pos.to_fen()).expect("engine FEN is readable by the reference")
}

#[test]
fn perft_matches_reference() {
    let fens = [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
        "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
    ];
    for fen in fens {
        let pos = Position::from_fen(fen).unwrap();
        let board = Board::from_str(fen).unwrap();
        assert_eq!(pos.perft(2), reference_perft(&board, 2), "{}", fen);
    }
}

#[test]
fn random_walks_match_reference() {
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..8 {
        let mut pos = Position::new();
        for _ in 0..100 {
            let ours = pos.valid_moves();
            let theirs = reference_moves(&reference(&pos));
            assert_eq!(ours.len(), theirs.len(), "{}", pos.to_fen());

            let mut ours_text: Vec<String> = ours.iter().map(|m| m.chess_notation()).collect();
            let mut theirs_text: Vec<String> = theirs
                .iter()
                .map(|m| format!("{}{}", m.get_source(), m.get_dest()))
                .collect();
            ours_text.sort();
            theirs_text.sort();
            assert_eq!(ours_text, theirs_text, "{}", pos.to_fen());

            let Some(&mv) = ours.choose(&mut rng) else {
                break;
            };
            pos.make_move(mv);
        }
    }
}
