use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dijkstra_sssp::data_structures::PriorityQueue;
use dijkstra_sssp::graph::generators::{generate_grid, generate_random};
use dijkstra_sssp::{Dijkstra, QueueStrategy};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra");
    let mut rng = StdRng::seed_from_u64(7);

    for &size in &[1_000usize, 10_000] {
        let graph = generate_random(size, size * 4, 100, &mut rng);
        for strategy in [QueueStrategy::LazyDeletion, QueueStrategy::DecreaseKey] {
            let dijkstra = Dijkstra::new().with_strategy(strategy);
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", strategy), size),
                &graph,
                |b, graph| b.iter(|| dijkstra.run(black_box(graph), 0)),
            );
        }
    }

    let grid = generate_grid(100, 100, 1);
    group.bench_function("grid_100x100", |b| {
        b.iter(|| Dijkstra::new().run(black_box(&grid), 0))
    });

    group.finish();
}

fn bench_priority_queue(c: &mut Criterion) {
    c.bench_function("priority_queue_push_pop_10k", |b| {
        b.iter(|| {
            let mut queue = PriorityQueue::with_capacity(10_000);
            for i in 0..10_000u64 {
                queue.push(i, (i * 7919) % 10_007);
            }
            while let Ok(item) = queue.pop() {
                black_box(item);
            }
        })
    });
}

criterion_group!(benches, bench_strategies, bench_priority_queue);
criterion_main!(benches);
