use std::hint::black_box;

use banqi_core::*;
use criterion::{Criterion, criterion_group, criterion_main};

fn dealt_board(seed: u64) -> Board {
    create_board(&RandomDealer::new(seed).deal()).expect("full deal fits the board")
}

fn bench_deal(c: &mut Criterion) {
    c.bench_function("deal_and_create_board", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed = seed.wrapping_add(1);
            black_box(dealt_board(black_box(seed)))
        })
    });
}

fn bench_validate_all_pairs(c: &mut Criterion) {
    // half-empty board so cannons have screens and slides are possible
    let mut board = dealt_board(17);
    for coords in iter_coords().filter(|&(row, col)| (row + col) % 2 == 0) {
        board[coords] = None;
    }
    let cells: Vec<_> = iter_coords().collect();

    c.bench_function("is_valid_move_all_pairs", |b| {
        b.iter(|| {
            let mut legal = 0usize;
            for &start in &cells {
                for &end in &cells {
                    legal += usize::from(is_valid_move(black_box(&board), start, end));
                }
            }
            black_box(legal)
        })
    });

    c.bench_function("legal_targets_every_cell", |b| {
        b.iter(|| {
            cells
                .iter()
                .map(|&from| legal_targets(black_box(&board), from).len())
                .sum::<usize>()
        })
    });
}

criterion_group!(benches, bench_deal, bench_validate_all_pairs);
criterion_main!(benches);
