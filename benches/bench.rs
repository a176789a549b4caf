use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use linked_bst::linked::Tree;

/// Builds a tree holding `0..n` inserted midpoint-first, so lookups see a
/// balanced tree without paying the quadratic cost of sorted insertion.
fn balanced_tree(n: i32) -> Tree<i32> {
    let mut tree = Tree::new();
    let mut ranges = vec![(0, n - 1)];
    while let Some((lo, hi)) = ranges.pop() {
        if lo > hi {
            continue;
        }
        let mid = lo + (hi - lo) / 2;
        tree.add(mid);
        ranges.push((lo, mid - 1));
        ranges.push((mid + 1, hi));
    }
    tree
}

/// Helper to bench a function on a BST.
/// It creates a group for the given name and closure and runs tests for
/// various tree sizes before finishing the group.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&mut Tree<i32>, i32)) {
    let mut group = c.benchmark_group(name);

    for num_levels in [3u32, 7, 11, 15] {
        let num_nodes = 2i32.pow(num_levels) - 1;
        let largest_element_in_tree = num_nodes - 1;

        let tree = balanced_tree(num_nodes);
        let id = BenchmarkId::from_parameter(largest_element_in_tree);

        group.bench_function(id, |b| {
            b.iter_custom(|iters| {
                let mut time = std::time::Duration::ZERO;
                for _ in 0..iters {
                    let mut tree = black_box(tree.clone());
                    let instant = std::time::Instant::now();
                    f(&mut tree, black_box(largest_element_in_tree));
                    let elapsed = instant.elapsed();
                    time += elapsed;
                }
                time
            })
        });
    }

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "find", |tree, i| {
        let _value = black_box(tree.find(&i));
    });
    bench_helper(c, "remove", |tree, i| {
        let _removed = tree.remove(&i);
    });

    bench_helper(c, "add", |tree, i| {
        tree.add(i + 1);
    });

    bench_helper(c, "find-miss", |tree, i| {
        let _value = black_box(tree.find(&(i + 1)));
    });

    bench_helper(c, "rebalance", |tree, _| {
        tree.rebalance();
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
