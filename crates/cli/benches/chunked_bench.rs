use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use engine::ChunkedIndex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const N_KEYS: usize = 100_000;
const SEED: u64 = 0x5eed;

fn workload_keys() -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(SEED);
    (0..N_KEYS).map(|_| rng.gen()).collect()
}

fn build_index(keys: &[u64], capacity: usize) -> ChunkedIndex<u64, String> {
    let mut idx = ChunkedIndex::new(capacity).unwrap();
    for &k in keys {
        idx.insert(k, k.to_string());
    }
    idx
}

/// Fill and probe at two generation counts: capacity N/10 gives ~10
/// generations, capacity N/100 gives ~100, bracketing the fan-out the
/// capacity knob trades against insert cost.
fn chunked_fill_benchmark(c: &mut Criterion) {
    let keys = workload_keys();
    for generations in [10usize, 100] {
        let capacity = N_KEYS / generations;
        c.bench_function(&format!("chunked_fill_100k_{}gens", generations), |b| {
            b.iter_batched(
                || keys.clone(),
                |keys| build_index(&keys, capacity),
                BatchSize::LargeInput,
            );
        });
    }
}

fn chunked_lookup_hit_benchmark(c: &mut Criterion) {
    let keys = workload_keys();
    let mut rng = StdRng::seed_from_u64(SEED + 1);
    let probes: Vec<u64> = (0..N_KEYS)
        .map(|_| keys[rng.gen_range(0..keys.len())])
        .collect();

    for generations in [10usize, 100] {
        let idx = build_index(&keys, N_KEYS / generations);
        c.bench_function(
            &format!("chunked_lookup_hit_100k_{}gens", generations),
            |b| {
                b.iter(|| {
                    let mut hits = 0usize;
                    for k in &probes {
                        if idx.lookup_latest(k).is_some() {
                            hits += 1;
                        }
                    }
                    hits
                });
            },
        );
    }
}

/// Misses are the worst case: every generation is probed before giving up.
fn chunked_lookup_miss_benchmark(c: &mut Criterion) {
    let keys = workload_keys();
    let mut rng = StdRng::seed_from_u64(SEED + 2);
    let probes: Vec<u64> = (0..N_KEYS).map(|_| rng.gen()).collect();

    for generations in [10usize, 100] {
        let idx = build_index(&keys, N_KEYS / generations);
        c.bench_function(
            &format!("chunked_lookup_miss_100k_{}gens", generations),
            |b| {
                b.iter(|| {
                    let mut hits = 0usize;
                    for k in &probes {
                        if idx.lookup_latest(k).is_some() {
                            hits += 1;
                        }
                    }
                    hits
                });
            },
        );
    }
}

criterion_group!(
    benches,
    chunked_fill_benchmark,
    chunked_lookup_hit_benchmark,
    chunked_lookup_miss_benchmark
);
criterion_main!(benches);
