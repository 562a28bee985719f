use chainmap::ChainedHashMap;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn random_keys(n: usize) -> Vec<u64> {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    (0..n).map(|_| rng.gen()).collect()
}

fn bench_put(c: &mut Criterion) {
    let mut group = c.benchmark_group("chained_put");
    for size in [1_000, 10_000, 100_000] {
        let keys = random_keys(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &keys, |b, keys| {
            b.iter(|| {
                let mut map = ChainedHashMap::new();
                for &k in keys {
                    map.put(k, k);
                }
                black_box(map.len())
            })
        });
    }
    group.finish();
}

fn bench_update(c: &mut Criterion) {
    let keys = random_keys(10_000);
    let mut map = ChainedHashMap::new();
    for &k in &keys {
        map.put(k, 0u64);
    }
    c.bench_function("chained_update_10k", |b| {
        b.iter(|| {
            for &k in &keys {
                black_box(map.put(k, k));
            }
        })
    });
}

fn bench_iter(c: &mut Criterion) {
    let map: ChainedHashMap<u64, u64> = random_keys(100_000)
        .into_iter()
        .map(|k| (k, k))
        .collect();
    c.bench_function("chained_iter_100k", |b| {
        b.iter(|| black_box(map.iter().map(|e| *e.value()).fold(0u64, u64::wrapping_add)))
    });
}

criterion_group!(benches, bench_put, bench_update, bench_iter);
criterion_main!(benches);
