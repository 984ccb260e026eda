use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use minefield_core::GridEngine;
use std::hint::black_box;

const TIERS: [(&str, u8, u8, u16); 3] = [
    ("beginner", 9, 9, 10),
    ("intermediate", 16, 16, 40),
    ("expert", 30, 16, 99),
];

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for (name, width, height, mines) in TIERS {
        group.bench_function(name, |b| {
            let mut seed = 0;
            b.iter(|| {
                seed += 1;
                black_box(GridEngine::with_seed(width, height, mines, seed).unwrap())
            })
        });
    }
    group.finish();
}

fn bench_clear_board(c: &mut Criterion) {
    let mut group = c.benchmark_group("clear_board");
    for (name, width, height, mines) in TIERS {
        group.bench_function(name, |b| {
            b.iter_batched(
                || GridEngine::with_seed(width, height, mines, 42).unwrap(),
                |mut engine| {
                    for row in 0..height {
                        for col in 0..width {
                            if !engine.cell_at(row, col).unwrap().has_mine {
                                black_box(engine.reveal(row, col).unwrap());
                            }
                        }
                    }
                    engine
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_open_field(c: &mut Criterion) {
    // a single reveal floods the whole board
    c.bench_function("flood_fill_255x255", |b| {
        b.iter_batched(
            || GridEngine::with_seed(255, 255, 0, 0).unwrap(),
            |mut engine| black_box(engine.reveal(127, 127).unwrap()),
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, bench_generate, bench_clear_board, bench_open_field);
criterion_main!(benches);
