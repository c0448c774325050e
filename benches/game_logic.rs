use std::time::{Duration, Instant};

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use termtris::core::{get_shape, ActivePiece, Board, GameSession, GameSnapshot};
use termtris::term::{FrameBuffer, GameView, Viewport};
use termtris::types::{GameEvent, GameMode, ShapeKind};

fn bench_step(c: &mut Criterion) {
    let mut now = Instant::now();
    let mut session = GameSession::with_seed(12345, now);
    session.step([GameEvent::Confirm], now);

    c.bench_function("session_step_16ms", |b| {
        b.iter(|| {
            now += Duration::from_millis(16);
            if session.mode() == GameMode::GameOver {
                session.step([GameEvent::Restart], now);
            }
            session.step(black_box([GameEvent::MoveLeft, GameEvent::RotateCw]), now);
            session.drain_requests().for_each(drop);
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, true);
                }
            }
            black_box(board.clear_full_rows())
        })
    });
}

fn bench_collides(c: &mut Criterion) {
    let board = Board::from_ascii(&["#####.....", "###.######", "#########."]);
    let shape = get_shape(ShapeKind::T);

    c.bench_function("collides", |b| {
        b.iter(|| black_box(&board).collides(black_box(&shape), 4, 16))
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let board = Board::from_ascii(&["#####.....", "###.######"]);

    c.bench_function("hard_drop", |b| {
        b.iter(|| {
            let mut piece = ActivePiece::new(black_box(ShapeKind::I));
            piece.hard_drop(&board)
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let board = Board::new();
    let mut piece = ActivePiece::new(ShapeKind::L);
    piece.y = 5;

    c.bench_function("try_rotate", |b| {
        b.iter(|| {
            piece.try_rotate(black_box(&board));
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let now = Instant::now();
    let mut session = GameSession::with_seed(7, now);
    session.step([GameEvent::Confirm], now);
    let mut snap = GameSnapshot::default();
    session.snapshot_into(&mut snap);

    let view = GameView::default();
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("render_playfield_80x24", |b| {
        b.iter(|| view.render_into(black_box(&snap), Viewport::new(80, 24), &mut fb))
    });
}

criterion_group!(
    benches,
    bench_step,
    bench_line_clear,
    bench_collides,
    bench_hard_drop,
    bench_rotate,
    bench_render
);
criterion_main!(benches);
