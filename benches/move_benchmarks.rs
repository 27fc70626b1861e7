use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;
use IsoHexSokoban::config::TileCodes;
use IsoHexSokoban::core::{Game, HexagonalLayout, IsometricLayout, LevelGrid};

const MOVES_PER_ITERATION: usize = 1000;

const LEVELS: &[(&str, &str)] = &[
    ("small", r#"
-1,0,0,0,1,-1
0,3,0,0,0,0
0,0,2,3,0,1
-1,0,3,0,0,-1
0,1,0,0,0,0
"#),
    ("open_12x12", r#"
0,0,0,0,0,0,0,0,0,0,0,0
0,3,0,0,0,0,0,0,0,0,3,0
0,0,0,0,1,0,0,1,0,0,0,0
0,0,0,3,0,0,0,0,3,0,0,0
0,0,1,0,0,0,0,0,0,1,0,0
0,0,0,0,0,2,0,0,0,0,0,0
0,0,0,0,0,0,0,0,0,0,0,0
0,0,1,0,0,0,0,0,0,1,0,0
0,0,0,3,0,0,0,0,3,0,0,0
0,0,0,0,1,0,0,1,0,0,0,0
0,3,0,0,0,0,0,0,0,0,3,0
0,0,0,0,0,0,0,0,0,0,0,0
"#),
];

fn random_moves(count: usize, directions: usize) -> Vec<usize> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    (0..count).map(|_| rng.random_range(0..directions)).collect()
}

pub fn bench_random_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_moves");
    let codes = TileCodes::default();

    for &(name, text) in LEVELS {
        let level = LevelGrid::load(text, &codes).unwrap();

        let iso_moves = random_moves(MOVES_PER_ITERATION, 4);
        group.bench_with_input(BenchmarkId::new("isometric", name), &level, |b, level| {
            b.iter_with_setup(
                || Game::new(level.clone(), IsometricLayout::new(level.rows(), level.cols(), 64.0)),
                |mut game| {
                    for &index in &iso_moves {
                        black_box(game.try_move_index(index));
                    }
                    game
                },
            );
        });

        let hex_moves = random_moves(MOVES_PER_ITERATION, 6);
        group.bench_with_input(BenchmarkId::new("hexagonal", name), &level, |b, level| {
            b.iter_with_setup(
                || Game::new(level.clone(), HexagonalLayout::new(level.rows(), level.cols(), 64.0, Vec2::ZERO)),
                |mut game| {
                    for &index in &hex_moves {
                        black_box(game.try_move_index(index));
                    }
                    game
                },
            );
        });
    }
    group.finish();
}

pub fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("load");
    let codes = TileCodes::default();
    for &(name, text) in LEVELS {
        group.bench_with_input(BenchmarkId::new("parse", name), &text, |b, &text| {
            b.iter(|| LevelGrid::load(black_box(text), &codes).unwrap());
        });
    }
    group.finish();
}

criterion_group!(move_benches, bench_random_moves, bench_load);
criterion_main!(move_benches);
