//! Test utilities and mock kernels for lapbuf development.
//!
//! Provides [`MockKernel`], a scripted implementation of
//! [`SvdKernel`](lapbuf_core::SvdKernel) for driving the orchestrator down
//! every failure path, plus deterministic matrix generators and numeric
//! helpers shared by the workspace's tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::cell::Cell;

use lapbuf_core::{SvdJob, SvdKernel, Workspace};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Sentinel value the mock writes into every output element it touches.
pub const MOCK_FILL: f64 = 0.5;

/// A scripted kernel with fixed query and compute outcomes.
///
/// The mock never looks at the matrix data. It reports a configured
/// scratch requirement (or query failure), returns a configured compute
/// status, and records how it was called so tests can assert on the
/// orchestrator's sequencing: how many query and compute invocations
/// happened, and how long the scratch slice handed to compute was.
pub struct MockKernel {
    query_info: i32,
    required_lwork: usize,
    compute_info: i32,
    query_calls: Cell<usize>,
    compute_calls: Cell<usize>,
    observed_work_len: Cell<Option<usize>>,
}

impl MockKernel {
    /// A kernel whose query reports `lwork` and whose compute succeeds,
    /// filling every output element with [`MOCK_FILL`].
    pub fn succeeding(lwork: usize) -> Self {
        Self::scripted(0, lwork, 0)
    }

    /// A kernel whose query call fails with the given status.
    pub fn failing_query(info: i32) -> Self {
        Self::scripted(info, 0, 0)
    }

    /// A kernel whose query reports `lwork` and whose compute fails with
    /// the given status.
    pub fn failing_compute(lwork: usize, info: i32) -> Self {
        Self::scripted(0, lwork, info)
    }

    fn scripted(query_info: i32, required_lwork: usize, compute_info: i32) -> Self {
        Self {
            query_info,
            required_lwork,
            compute_info,
            query_calls: Cell::new(0),
            compute_calls: Cell::new(0),
            observed_work_len: Cell::new(None),
        }
    }

    /// Number of query-mode invocations so far.
    pub fn query_calls(&self) -> usize {
        self.query_calls.get()
    }

    /// Number of compute-mode invocations so far.
    pub fn compute_calls(&self) -> usize {
        self.compute_calls.get()
    }

    /// Length of the scratch slice passed to the most recent compute
    /// call, if any compute call happened.
    pub fn observed_work_len(&self) -> Option<usize> {
        self.observed_work_len.get()
    }
}

impl SvdKernel for MockKernel {
    fn name(&self) -> &str {
        "mock"
    }

    fn gesvd(
        &self,
        job: &SvdJob,
        _a: &mut [f64],
        s: &mut [f64],
        u: &mut [f64],
        vt: &mut [f64],
        work: Workspace<'_>,
    ) -> i32 {
        match work {
            Workspace::Query(slot) => {
                self.query_calls.set(self.query_calls.get() + 1);
                if self.query_info != 0 {
                    return self.query_info;
                }
                *slot = self.required_lwork;
                0
            }
            Workspace::Slice(w) => {
                self.compute_calls.set(self.compute_calls.get() + 1);
                self.observed_work_len.set(Some(w.len()));
                if self.compute_info != 0 {
                    return self.compute_info;
                }
                s[..job.s_len()].fill(MOCK_FILL);
                u[..job.u_len()].fill(MOCK_FILL);
                vt[..job.vt_len()].fill(MOCK_FILL);
                0
            }
        }
    }
}

/// Deterministic `m×n` column-major matrix with entries in `[-1, 1)`.
pub fn seeded_matrix(seed: u64, m: usize, n: usize) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..m * n).map(|_| rng.random::<f64>() * 2.0 - 1.0).collect()
}

/// Largest absolute difference between two equally sized slices.
///
/// # Panics
///
/// Panics if the slices differ in length.
pub fn max_abs_diff(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f64::max)
}

/// Reconstruct `U · diag(S) · VT` for the given job into a dense `m×n`
/// column-major matrix.
///
/// Only the first `s_len` terms contribute, matching the rank of the
/// factorisation regardless of the completeness modes.
pub fn reconstruct(job: &SvdJob, u: &[f64], s: &[f64], vt: &[f64]) -> Vec<f64> {
    let (m, n) = (job.m, job.n);
    let mut out = vec![0.0; m * n];
    for k in 0..job.s_len() {
        for j in 0..n {
            let vkj = vt[k + j * job.ldvt];
            for i in 0..m {
                out[i + j * m] += u[i + k * job.ldu] * s[k] * vkj;
            }
        }
    }
    out
}

/// Assert that the `cols` leading columns of a column-major matrix are
/// orthonormal to within `tol`.
///
/// # Panics
///
/// Panics with a descriptive message when a pair of columns violates the
/// tolerance.
pub fn assert_orthonormal_columns(mat: &[f64], ld: usize, rows: usize, cols: usize, tol: f64) {
    for p in 0..cols {
        for q in 0..cols {
            let dot: f64 = (0..rows).map(|i| mat[i + p * ld] * mat[i + q * ld]).sum();
            let expect = if p == q { 1.0 } else { 0.0 };
            assert!(
                (dot - expect).abs() < tol,
                "columns {p} and {q}: dot = {dot}, expected {expect}"
            );
        }
    }
}
