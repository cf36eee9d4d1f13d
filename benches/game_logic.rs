use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_match3::core::{CascadeEngine, Grid, HintFinder, MatchScanner, PlaySession, SimpleRng, TileGenerator};

fn stable_board(seed: u32) -> Grid {
    let mut generator = TileGenerator::new(SimpleRng::new(seed));
    let mut grid = Grid::default();
    grid.initialize(1, &mut generator);
    grid
}

fn bench_scan(c: &mut Criterion) {
    let grid = stable_board(12345);

    c.bench_function("scan_8x8", |b| {
        b.iter(|| MatchScanner::scan(black_box(&grid)))
    });
}

fn bench_cascade(c: &mut Criterion) {
    let mut generator = TileGenerator::new(SimpleRng::new(12345));
    let mut unstable = Grid::default();
    unstable.initialize_unchecked(3, &mut generator);
    let mut engine = CascadeEngine::new(generator, 3);

    c.bench_function("cascade_from_random_board", |b| {
        b.iter(|| {
            let mut grid = unstable.clone();
            engine.resolve(black_box(&mut grid), &mut ())
        })
    });
}

fn bench_gravity(c: &mut Criterion) {
    let mut full = stable_board(777);
    for x in 0..8 {
        full.take(x, 4).ok();
        full.take(x, 5).ok();
    }

    c.bench_function("gravity_two_rows", |b| {
        b.iter(|| {
            let mut grid = full.clone();
            CascadeEngine::<SimpleRng>::apply_gravity(black_box(&mut grid))
        })
    });
}

fn bench_hint(c: &mut Criterion) {
    let grid = stable_board(4242);
    let mut rng = SimpleRng::new(1);

    c.bench_function("find_hint_within", |b| {
        b.iter(|| HintFinder::find_hint_within(black_box(&grid), &mut rng, 10_000))
    });

    c.bench_function("all_moves", |b| b.iter(|| HintFinder::all_moves(black_box(&grid))));
}

fn bench_tick(c: &mut Criterion) {
    let mut session = PlaySession::new(12345, 1);

    c.bench_function("session_tick_16ms", |b| {
        b.iter(|| {
            if session.game_over() {
                session.restart();
            }
            session.tick(black_box(16))
        })
    });
}

criterion_group!(benches, bench_scan, bench_cascade, bench_gravity, bench_hint, bench_tick);
criterion_main!(benches);
