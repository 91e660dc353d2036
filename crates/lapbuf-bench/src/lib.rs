//! Benchmark profiles and sizing helpers for the lapbuf benchmarks.
//!
//! Provides the matrix shapes the benchmarks sweep over and a helper that
//! computes the exact arena capacity a shape needs, so every benchmark runs
//! against a tight-fitting buffer rather than a generously padded one.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use lapbuf_core::{SvdJob, SvdKernel, Workspace};
use lapbuf_jacobi::JacobiKernel;

/// Shapes swept by the decomposition benchmarks: square, tall, and wide.
pub const BENCH_SHAPES: &[(usize, usize)] = &[(8, 8), (16, 8), (8, 16), (32, 32)];

/// Exact arena capacity for an economy decomposition of an `m` by `n` input.
///
/// Input copy plus the scratch the Jacobi kernel reports for this shape.
pub fn arena_capacity(m: usize, n: usize) -> usize {
    let kernel = JacobiKernel::new();
    let job = SvdJob::new(m, n, false, false);
    let mut lwork = 0usize;
    let info = kernel.gesvd(
        &job,
        &mut [],
        &mut [],
        &mut [],
        &mut [],
        Workspace::Query(&mut lwork),
    );
    assert_eq!(info, 0, "workspace query failed for {m}x{n}");
    m * n + lwork
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_matches_tall_formula() {
        // 16x8 tall: input 128, scratch 8*8 + 8 = 72.
        assert_eq!(arena_capacity(16, 8), 128 + 72);
    }

    #[test]
    fn capacity_matches_wide_formula() {
        // 8x16 wide economy: input 128, scratch 8*16 + 8*8 + 8 = 200.
        assert_eq!(arena_capacity(8, 16), 128 + 200);
    }

    #[test]
    fn every_bench_shape_has_positive_capacity() {
        for &(m, n) in BENCH_SHAPES {
            assert!(arena_capacity(m, n) > m * n);
        }
    }
}
