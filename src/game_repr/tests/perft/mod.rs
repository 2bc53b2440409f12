use super::*;

// ==================== PERFT TESTS ====================
//
// Reference node counts from https://www.chessprogramming.org/Perft_Results.
// Depths stop before any under-promotion appears, since promotion here is
// always to a queen.

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
const POSITION_3: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";

#[test]
fn test_perft_starting_position() {
    let pos = Position::new();
    assert_eq!(pos.perft(0), 1);
    assert_eq!(pos.perft(1), 20);
    assert_eq!(pos.perft(2), 400);
    assert_eq!(pos.perft(3), 8_902);
}

#[test]
#[ignore = "slow in debug builds"]
fn test_perft_starting_position_depth_4() {
    assert_eq!(Position::new().perft(4), 197_281);
}

#[test]
fn test_perft_kiwipete() {
    let pos = fen(KIWIPETE);
    assert_eq!(pos.perft(1), 48);
    assert_eq!(pos.perft(2), 2_039);
}

#[test]
fn test_perft_position_3() {
    let pos = fen(POSITION_3);
    assert_eq!(pos.perft(1), 14);
    assert_eq!(pos.perft(2), 191);
    assert_eq!(pos.perft(3), 2_812);
}

#[test]
fn test_perft_leaves_position_untouched() {
    let pos = fen(KIWIPETE);
    let before = pos.clone();
    pos.perft(2);
    assert_eq!(pos, before);
}

#[test]
fn test_divide_sums_to_perft() {
    let pos = fen(KIWIPETE);
    let split = pos.divide(2);

    assert_eq!(split.len(), 48);
    assert_eq!(split.iter().map(|(_, n)| n).sum::<u64>(), 2_039);
}

#[test]
fn test_parallel_matches_serial() {
    let pos = fen(POSITION_3);
    assert_eq!(pos.perft_parallel(3), pos.perft(3));
    assert_eq!(Position::new().perft_parallel(3), 8_902);
}
