// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use arbor_surface::DisplayList;
use arbor_tree::{ManualScheduler, Progress, Scene, Tree};
use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};

struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
}

fn shuffled_values(n: usize, seed: u64) -> Vec<i64> {
    let mut values: Vec<i64> = (0..n as i64).collect();
    let mut rng = Rng::new(seed);
    for i in (1..values.len()).rev() {
        let j = (rng.next_u64() % (i as u64 + 1)) as usize;
        values.swap(i, j);
    }
    values
}

fn grow_incremental(values: &[i64]) -> Tree {
    let mut tree = Tree::default();
    for &v in values {
        let ins = tree.insert(v).unwrap();
        tree.assign_coords(ins.moved);
    }
    tree
}

fn grow_full_relayout(values: &[i64]) -> Tree {
    let mut tree = Tree::default();
    let root = tree.root();
    for &v in values {
        let _ = tree.insert(v).unwrap();
        tree.assign_coords(root);
    }
    tree
}

fn bench_incremental_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("incremental_layout");
    for &n in &[64usize, 256, 1024] {
        let values = shuffled_values(n, 0xCAFE_F00D_DEAD_BEEF);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("shuffled_n{}", n), |b| {
            b.iter_batched(
                || values.clone(),
                |values| {
                    let tree = grow_incremental(&values);
                    black_box(tree.len());
                },
                BatchSize::SmallInput,
            )
        });
    }
    for &n in &[64usize, 256] {
        let values: Vec<i64> = (0..n as i64).collect();
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("ascending_chain_n{}", n), |b| {
            b.iter_batched(
                || values.clone(),
                |values| {
                    let tree = grow_incremental(&values);
                    black_box(tree.len());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

// The baseline the moved-subtree scheme replaces: reposition the whole tree
// after every insert.
fn bench_full_relayout(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_relayout");
    for &n in &[64usize, 256, 1024] {
        let values = shuffled_values(n, 0xCAFE_F00D_DEAD_BEEF);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("shuffled_n{}", n), |b| {
            b.iter_batched(
                || values.clone(),
                |values| {
                    let tree = grow_full_relayout(&values);
                    black_box(tree.len());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_scene_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene_fill");
    for &n in &[64u32, 256, 1024] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("fill_redraw_n{}", n), |b| {
            b.iter_batched(
                || Scene::new(ManualScheduler::new(), DisplayList::new()),
                |mut scene| {
                    scene.fill(n).unwrap();
                    black_box(scene.surface().cmds().len());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_animation_pump(c: &mut Criterion) {
    let mut group = c.benchmark_group("animation_pump");
    group.bench_function("search_found_in_256", |b| {
        b.iter_batched(
            || {
                let mut scene = Scene::new(ManualScheduler::new(), DisplayList::new());
                scene.fill(256).unwrap();
                scene
            },
            |mut scene| {
                scene.search_animated(200).unwrap();
                loop {
                    let _ = scene.scheduler_mut().fire_next();
                    match scene.tick() {
                        Progress::Running => {}
                        Progress::Done(done) => {
                            black_box(done);
                            break;
                        }
                        Progress::Idle => break,
                    }
                }
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_incremental_layout,
    bench_full_relayout,
    bench_scene_fill,
    bench_animation_pump,
);
criterion_main!(benches);
