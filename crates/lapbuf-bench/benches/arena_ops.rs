//! Criterion micro-benchmarks for arena reserve, release, and slicing.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lapbuf_arena::FixedArena;

/// Benchmark: construct a 4096-element arena (one zero-filled allocation).
fn bench_arena_alloc(c: &mut Criterion) {
    c.bench_function("arena_alloc_4k", |b| {
        b.iter(|| {
            let arena = FixedArena::with_capacity(4096);
            black_box(arena.capacity());
        });
    });
}

/// Benchmark: a deep LIFO reserve/release cycle on one reused arena.
fn bench_arena_reserve_release(c: &mut Criterion) {
    let mut arena = FixedArena::with_capacity(4096);
    c.bench_function("arena_reserve_release_x16", |b| {
        b.iter(|| {
            let mut offsets = [0usize; 16];
            for slot in &mut offsets {
                *slot = arena.reserve(64).unwrap();
            }
            black_box(offsets[15]);
            for _ in 0..16 {
                arena.release(64);
            }
        });
    });
}

/// Benchmark: reserve, write through a mutable slice, release.
fn bench_arena_write(c: &mut Criterion) {
    let mut arena = FixedArena::with_capacity(4096);
    c.bench_function("arena_write_1k", |b| {
        b.iter(|| {
            let off = arena.reserve(1024).unwrap();
            let region = arena.slice_mut(off, 1024);
            for (i, val) in region.iter_mut().enumerate() {
                *val = i as f64;
            }
            black_box(region[0]);
            arena.release(1024);
        });
    });
}

/// Benchmark: split one arena into two disjoint mutable regions and touch both.
fn bench_arena_split(c: &mut Criterion) {
    let mut arena = FixedArena::with_capacity(4096);
    let first = arena.reserve(512).unwrap();
    let second = arena.reserve(512).unwrap();
    c.bench_function("arena_split_mut", |b| {
        b.iter(|| {
            let (lo, hi) = arena.split_mut((first, 512), (second, 512));
            lo[0] = 1.0;
            hi[0] = 2.0;
            black_box(lo[0] + hi[0]);
        });
    });
}

criterion_group!(
    benches,
    bench_arena_alloc,
    bench_arena_reserve_release,
    bench_arena_write,
    bench_arena_split
);
criterion_main!(benches);
