use criterion::{criterion_group, criterion_main, Criterion};
use crossbeam_utils::sync::WaitGroup;
use taskpool::{PoolConfig, WorkerPool};

fn submit_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("submit_100_tasks");

    let mut sizes = vec![1, 2, num_cpus::get()];
    sizes.sort_unstable();
    sizes.dedup();

    for workers in sizes {
        group.bench_function(format!("workers_{}", workers), |b| {
            b.iter_batched(
                || WorkerPool::with_config(PoolConfig::new(workers, 100)).unwrap(),
                |pool| {
                    let wg = WaitGroup::new();
                    for _ in 0..100 {
                        let wg = wg.clone();
                        pool.execute(move || drop(wg)).unwrap();
                    }
                    wg.wait();
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, submit_bench);
criterion_main!(benches);
