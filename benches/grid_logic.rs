use criterion::{black_box, criterion_group, criterion_main, Criterion};
use same_game::core::GridEngine;
use same_game::types::{GemKind, GemLayout, GRID_COLS, GRID_ROWS};

fn bench_recompute_groups(c: &mut Criterion) {
    let mut engine = GridEngine::random_default(12345);

    c.bench_function("recompute_groups_10x15", |b| {
        b.iter(|| {
            engine.recompute_groups();
        })
    });
}

fn bench_connected_gems(c: &mut Criterion) {
    let engine = GridEngine::random_default(12345);

    c.bench_function("connected_gems", |b| {
        b.iter(|| engine.connected_gems(black_box(7), black_box(5)))
    });
}

fn bench_full_board_clear(c: &mut Criterion) {
    // Worst-case move: one group covering the entire board.
    let layout = GemLayout::from_fn(GRID_ROWS, GRID_COLS, |_, _| GemKind::Ruby);

    c.bench_function("play_full_board_clear", |b| {
        b.iter(|| {
            let mut engine = GridEngine::from_layout(&layout);
            engine.play(black_box(0), black_box(0))
        })
    });
}

fn bench_full_session(c: &mut Criterion) {
    c.bench_function("full_session_10x15", |b| {
        b.iter(|| {
            let mut engine = GridEngine::random_default(black_box(2024));
            loop {
                let removable = (0..engine.group_count()).find_map(|id| {
                    let members = engine.group_by_id(id).ok()?;
                    (members.len() > 1).then(|| members[0])
                });
                match removable {
                    Some((x, y)) => {
                        engine.play(x, y);
                    }
                    None => break,
                }
            }
            engine.remaining_cells()
        })
    });
}

criterion_group!(
    benches,
    bench_recompute_groups,
    bench_connected_gems,
    bench_full_board_clear,
    bench_full_session
);
criterion_main!(benches);
