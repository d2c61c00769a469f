//! Ordered tree insert and drain benchmarks.
//!
//! Compares shuffled keys, which keep the unbalanced tree shallow on
//! average, against ascending keys, which degrade it to a linked list.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
#![expect(
    clippy::shadow_reuse,
    reason = "Criterion bench_with_input closures rebind parameter names"
)]
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use spanwalk_benches::{error::BenchSetupError, params::TreeBenchParams, source::tree_keys};
use spanwalk_core::{OrderedTree, TreeError};

/// Seed used for key shuffling.
const SEED: u64 = 42;

/// Key counts to benchmark.
const KEY_COUNTS: &[u32] = &[100, 1_000, 5_000];

fn fill(keys: &[u32]) -> Result<OrderedTree<u32>, TreeError> {
    let mut tree = OrderedTree::new();
    for &key in keys {
        tree.insert(key)?;
    }
    Ok(tree)
}

fn drain(mut tree: OrderedTree<u32>) -> Result<u64, TreeError> {
    let mut checksum = 0_u64;
    while !tree.is_empty() {
        checksum = checksum.wrapping_add(u64::from(tree.remove_min()?));
    }
    Ok(checksum)
}

fn tree_insert_drain_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("ordered_tree");
    group.sample_size(20);

    for &key_count in KEY_COUNTS {
        for sorted in [false, true] {
            let keys = tree_keys(key_count, sorted, SEED);
            // Fail setup early rather than inside the timed loop.
            drain(fill(&keys)?)?;

            let params = TreeBenchParams {
                key_count: usize::try_from(key_count).unwrap_or(usize::MAX),
                sorted,
            };
            group.bench_with_input(
                BenchmarkId::new("insert_drain", &params),
                &keys,
                |b, keys| {
                    b.iter(|| fill(keys).and_then(drain));
                },
            );
        }
    }

    group.finish();
    Ok(())
}

fn tree_insert_drain(c: &mut Criterion) {
    if let Err(err) = tree_insert_drain_impl(c) {
        panic!("tree benchmark setup failed: {err}");
    }
}

criterion_group!(benches, tree_insert_drain);
criterion_main!(benches);
