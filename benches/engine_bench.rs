use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::time::Duration;

use twenty_squares::board::{GameState, Phase, Player};
use twenty_squares::engine::GameEngine;
use twenty_squares::movegen::{move_diagnostics, valid_moves};
use twenty_squares::protocol::Snapshot;

/// A busy mid-game position: pieces in both lanes and the war zone.
fn midgame_state() -> GameState {
    let mut state = GameState::new();
    state.phase = Phase::Move;
    state.dice_result = 2;
    let p1 = [2, 5, 9, -1, -1, -2, -2];
    let p2 = [1, 6, 10, 12, -1, -1, -2];
    state.players[Player::One.index()].pieces = p1;
    state.players[Player::One.index()].completed = 2;
    state.players[Player::Two.index()].pieces = p2;
    state.players[Player::Two.index()].completed = 1;
    state.rebuild_occupancy();
    state
}

fn bench_valid_moves(c: &mut Criterion) {
    let state = midgame_state();
    c.bench_function("valid_moves_midgame", |b| {
        b.iter(|| valid_moves(black_box(&state)))
    });
}

fn bench_diagnostics(c: &mut Criterion) {
    let state = midgame_state();
    c.bench_function("move_diagnostics_midgame", |b| {
        b.iter(|| move_diagnostics(black_box(&state)))
    });
}

fn bench_occupancy_rebuild(c: &mut Criterion) {
    let state = midgame_state();
    c.bench_function("occupancy_rebuild", |b| {
        b.iter(|| {
            let mut s = state.clone();
            s.rebuild_occupancy();
            s
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let state = midgame_state();
    c.bench_function("snapshot_build", |b| {
        b.iter(|| Snapshot::of(black_box(&state)))
    });
}

fn bench_snapshot_json(c: &mut Criterion) {
    let snap = Snapshot::of(&midgame_state());
    c.bench_function("snapshot_to_json", |b| {
        b.iter(|| serde_json::to_string(black_box(&snap)).unwrap())
    });
}

fn bench_full_game(c: &mut Criterion) {
    c.bench_function("self_play_full_game", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed += 1;
            let mut engine = GameEngine::seeded(seed);
            for _ in 0..10_000 {
                if engine.state.winner.is_some() {
                    break;
                }
                engine.roll_dice().unwrap();
                if engine.state.phase == Phase::Move {
                    let pick = engine.bot_move().unwrap();
                    engine.move_piece(pick).unwrap();
                }
            }
            engine.state.winner
        })
    });
}

fn configured() -> Criterion {
    Criterion::default()
        .measurement_time(Duration::from_secs(5))
        .sample_size(50)
}

criterion_group! {
    name = benches;
    config = configured();
    targets = bench_valid_moves, bench_diagnostics, bench_occupancy_rebuild,
        bench_snapshot, bench_snapshot_json, bench_full_game
}
criterion_main!(benches);
