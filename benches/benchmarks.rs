//! Performance benchmarks for twig

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use twig::test_utils::TestTree;
use twig::{OutputConfig, SizeFormat, TreeFormatter, TreeWalker, WalkerConfig};

/// Build a tree `width` directories wide and `depth` levels deep, with
/// `files` files in every directory.
fn create_test_tree(width: usize, depth: usize, files: usize) -> TestTree {
    fn fill(tree: &TestTree, prefix: &str, width: usize, depth: usize, files: usize) {
        for f in 0..files {
            tree.add_sized(&format!("{}file_{}.txt", prefix, f), f * 16);
        }
        if depth == 0 {
            return;
        }
        for d in 0..width {
            let sub = format!("{}dir_{}/", prefix, d);
            tree.add_dir(&sub);
            fill(tree, &sub, width, depth - 1, files);
        }
    }

    let tree = TestTree::new();
    fill(&tree, "", width, depth, files);
    tree
}

fn bench_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("walk");

    let small = create_test_tree(3, 2, 5);
    group.bench_function("small_tree", |b| {
        let walker = TreeWalker::new(WalkerConfig::default());
        b.iter(|| walker.walk(black_box(small.path())))
    });

    let large = create_test_tree(4, 4, 10);
    group.bench_function("large_tree", |b| {
        let walker = TreeWalker::new(WalkerConfig::default());
        b.iter(|| walker.walk(black_box(large.path())))
    });

    group.bench_function("large_tree_depth_2", |b| {
        let walker = TreeWalker::new(WalkerConfig::default().with_level(2));
        b.iter(|| walker.walk(black_box(large.path())))
    });

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let tree = create_test_tree(4, 4, 10);
    let root = TreeWalker::new(WalkerConfig::default())
        .walk(tree.path())
        .unwrap();
    let roots = vec![root];

    let mut group = c.benchmark_group("render");

    group.bench_function("iterate_prefixes", |b| {
        b.iter(|| roots[0].iter().map(|n| n.prefix().len()).sum::<usize>())
    });

    let plain = TreeFormatter::new(OutputConfig {
        use_color: false,
        ..Default::default()
    });
    group.bench_function("format_plain", |b| b.iter(|| plain.format(black_box(&roots))));

    let detailed = TreeFormatter::new(OutputConfig {
        use_color: false,
        permissions: true,
        size: SizeFormat::Human,
        date: true,
        ..Default::default()
    });
    group.bench_function("format_detailed", |b| {
        b.iter(|| detailed.format(black_box(&roots)))
    });

    group.finish();
}

criterion_group!(benches, bench_walk, bench_render);
criterion_main!(benches);
