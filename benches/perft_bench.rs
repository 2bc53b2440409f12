use criterion::{black_box, criterion_group, criterion_main, Criterion};
use chess_rules::game_repr::Position;

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

fn bench_perft_depth_3(c: &mut Criterion) {
    let pos = Position::default();
    c.bench_function("perft depth 3", |b| {
        b.iter(|| black_box(pos.perft(3)))
    });
}

fn bench_perft_parallel_depth_4(c: &mut Criterion) {
    let pos = Position::default();
    c.bench_function("perft parallel depth 4", |b| {
        b.iter(|| black_box(pos.perft_parallel(4)))
    });
}

fn bench_kiwipete_depth_2(c: &mut Criterion) {
    let pos = Position::from_fen(KIWIPETE).unwrap();
    c.bench_function("kiwipete depth 2", |b| {
        b.iter(|| black_box(pos.perft(2)))
    });
}

criterion_group!(benches, bench_perft_depth_3, bench_perft_parallel_depth_4, bench_kiwipete_depth_2);
criterion_main!(benches);
