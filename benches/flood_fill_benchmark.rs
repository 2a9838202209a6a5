use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use minesweeper_engine::{MineField, Position};
use rand::{rngs::StdRng, SeedableRng};

fn open_empty_field(size: usize) -> usize {
    let mut field = MineField::from_mines(size, &[Position::new(0, 0)]).unwrap();
    let last = size as i32 - 1;
    field.open_cell(Position::new(last, last));
    field.opened_count()
}

fn open_every_cell(size: usize, mines: usize, seed: u64) -> bool {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut field = MineField::with_rng(size, mines, &mut rng).unwrap();
    let safe: Vec<Position> = field.positions().filter(|p| !field.is_mine(*p)).collect();
    for pos in safe {
        field.open_cell(pos);
    }
    field.check_win()
}

fn benchmark_flood_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("flood_fill");

    for size in [15, 64, 256] {
        group.bench_with_input(BenchmarkId::new("single_region", size), &size, |b, &size| {
            b.iter(|| open_empty_field(black_box(size)))
        });
    }

    group.finish();
}

fn benchmark_presets(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_clear");

    for (name, size, mines) in [("easy", 10, 10), ("medium", 12, 20), ("hard", 15, 40)] {
        group.bench_function(name, |b| {
            let mut seed = 0;
            b.iter(|| {
                seed += 1;
                open_every_cell(black_box(size), mines, seed)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_flood_fill, benchmark_presets);
criterion_main!(benches);
