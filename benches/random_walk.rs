use criterion::{criterion_group, criterion_main, Criterion};
use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};
use torus_snake::engine::GameEngine;
use torus_snake::types::Command;

fn bench_random_walk(c: &mut Criterion) {
    let _ = tracing_subscriber::fmt::try_init();
    let commands = Command::all();

    c.bench_function("random walk 1000 steps on a 32x32 grid", |b| {
        b.iter(|| {
            let mut control = SmallRng::seed_from_u64(0x5eed);
            let mut engine =
                GameEngine::with_rng(32, 3, SmallRng::seed_from_u64(1)).expect("valid board");
            for _ in 0..1000 {
                if engine.state.is_over() {
                    break;
                }
                let command = *commands.choose(&mut control).expect("commands is non-empty");
                engine.apply(command, &());
            }
            engine.score
        })
    });
}

criterion_group!(benches, bench_random_walk);
criterion_main!(benches);
