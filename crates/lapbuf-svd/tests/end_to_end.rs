//! End-to-end decompositions through the real Jacobi kernel.

use lapbuf_arena::FixedArena;
use lapbuf_core::SvdJob;
use lapbuf_jacobi::JacobiKernel;
use lapbuf_svd::{decompose, ArenaRegion, SvdError};
use lapbuf_test_utils::{assert_orthonormal_columns, max_abs_diff, reconstruct, seeded_matrix};

struct Outputs {
    u: Vec<f64>,
    s: Vec<f64>,
    vt: Vec<f64>,
}

fn outputs(job: &SvdJob) -> Outputs {
    Outputs {
        u: vec![0.0; job.u_len()],
        s: vec![0.0; job.s_len()],
        vt: vec![0.0; job.vt_len()],
    }
}

#[test]
fn identity_3x3_yields_unit_singular_values() {
    let kernel = JacobiKernel::new();
    let a = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0];
    let job = SvdJob::new(3, 3, false, false);
    let mut out = outputs(&job);
    let mut arena = FixedArena::with_capacity(64);

    decompose(
        &kernel, &mut out.u, &mut out.s, &mut out.vt, &a, 3, 3, false, false, &mut arena,
    )
    .unwrap();

    assert!(arena.is_empty());
    for &sv in &out.s {
        assert!((sv - 1.0).abs() < 1e-12, "singular value {sv}");
    }
    let back = reconstruct(&job, &out.u, &out.s, &out.vt);
    assert!(max_abs_diff(&back, &a) < 1e-12);
}

#[test]
fn arena_smaller_than_input_copy_fails_cleanly() {
    let kernel = JacobiKernel::new();
    let a = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0];
    let job = SvdJob::new(3, 3, false, false);
    let mut out = outputs(&job);
    let mut arena = FixedArena::with_capacity(5);

    let err = decompose(
        &kernel, &mut out.u, &mut out.s, &mut out.vt, &a, 3, 3, false, false, &mut arena,
    )
    .unwrap_err();

    assert_eq!(
        err,
        SvdError::InsufficientBuffer {
            region: ArenaRegion::InputCopy,
            requested: 9,
            remaining: 5,
        }
    );
    assert!(arena.is_empty());
    assert!(out.s.iter().all(|&v| v == 0.0));
}

#[test]
fn arena_smaller_than_reported_scratch_fails_cleanly() {
    let kernel = JacobiKernel::new();
    let a = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0];
    let job = SvdJob::new(3, 3, false, false);
    let mut out = outputs(&job);
    // The 3×3 tall job reports 3*3 + 3 = 12 scratch elements; leave 5.
    let mut arena = FixedArena::with_capacity(9 + 5);

    let err = decompose(
        &kernel, &mut out.u, &mut out.s, &mut out.vt, &a, 3, 3, false, false, &mut arena,
    )
    .unwrap_err();

    assert_eq!(
        err,
        SvdError::InsufficientBuffer {
            region: ArenaRegion::Scratch,
            requested: 12,
            remaining: 5,
        }
    );
    assert!(arena.is_empty());
}

#[test]
fn input_matrix_is_not_modified() {
    let kernel = JacobiKernel::new();
    let a = seeded_matrix(11, 4, 4);
    let original = a.clone();
    let job = SvdJob::new(4, 4, false, false);
    let mut out = outputs(&job);
    let mut arena = FixedArena::with_capacity(256);

    decompose(
        &kernel, &mut out.u, &mut out.s, &mut out.vt, &a, 4, 4, false, false, &mut arena,
    )
    .unwrap();
    assert_eq!(a, original);
}

#[test]
fn all_flag_combinations_reconstruct_the_input() {
    let kernel = JacobiKernel::new();
    for &(m, n) in &[(3usize, 3usize), (5, 3), (3, 5), (4, 1), (1, 4)] {
        let a = seeded_matrix(42 + (m * 10 + n) as u64, m, n);
        for &u_full in &[false, true] {
            for &v_full in &[false, true] {
                let job = SvdJob::new(m, n, u_full, v_full);
                let mut out = outputs(&job);
                let mut arena = FixedArena::with_capacity(512);

                decompose(
                    &kernel, &mut out.u, &mut out.s, &mut out.vt, &a, m, n, u_full, v_full,
                    &mut arena,
                )
                .unwrap();

                assert!(arena.is_empty(), "arena leaked for {m}x{n} {u_full}/{v_full}");
                let back = reconstruct(&job, &out.u, &out.s, &out.vt);
                assert!(
                    max_abs_diff(&back, &a) < 1e-10,
                    "reconstruction failed for {m}x{n} u_full={u_full} v_full={v_full}"
                );
                for k in 1..job.s_len() {
                    assert!(out.s[k - 1] >= out.s[k], "S not descending for {m}x{n}");
                }
                assert_orthonormal_columns(&out.u, job.ldu, m, job.u_cols(), 1e-10);
            }
        }
    }
}

#[test]
fn wide_economy_vt_rows_are_orthonormal() {
    let kernel = JacobiKernel::new();
    let (m, n) = (2usize, 5usize);
    let a = seeded_matrix(7, m, n);
    let job = SvdJob::new(m, n, false, false);
    assert_eq!(job.ldvt, 2);
    let mut out = outputs(&job);
    let mut arena = FixedArena::with_capacity(256);

    decompose(
        &kernel, &mut out.u, &mut out.s, &mut out.vt, &a, m, n, false, false, &mut arena,
    )
    .unwrap();

    // Rows of VT: check pairwise dot products over the n columns.
    for p in 0..job.vt_rows() {
        for q in 0..job.vt_rows() {
            let dot: f64 = (0..n)
                .map(|j| out.vt[p + j * job.ldvt] * out.vt[q + j * job.ldvt])
                .sum();
            let expect = if p == q { 1.0 } else { 0.0 };
            assert!((dot - expect).abs() < 1e-10, "vt rows {p},{q}: {dot}");
        }
    }
}

#[test]
fn repeated_use_of_one_arena_does_not_leak() {
    let kernel = JacobiKernel::new();
    let mut arena = FixedArena::with_capacity(128);
    for seed in 0..4 {
        let a = seeded_matrix(seed, 3, 3);
        let job = SvdJob::new(3, 3, false, false);
        let mut out = outputs(&job);
        decompose(
            &kernel, &mut out.u, &mut out.s, &mut out.vt, &a, 3, 3, false, false, &mut arena,
        )
        .unwrap();
        assert!(arena.is_empty());
    }
}

#[test]
fn exact_fit_arena_succeeds() {
    let kernel = JacobiKernel::new();
    let a = [2.0, 0.0, 0.0, 1.0];
    let job = SvdJob::new(2, 2, false, false);
    let mut out = outputs(&job);
    // 2×2 tall job: input copy 4 + scratch (2*2 + 2) = 10 exactly.
    let mut arena = FixedArena::with_capacity(10);

    decompose(
        &kernel, &mut out.u, &mut out.s, &mut out.vt, &a, 2, 2, false, false, &mut arena,
    )
    .unwrap();
    assert!((out.s[0] - 2.0).abs() < 1e-12);
    assert!((out.s[1] - 1.0).abs() < 1e-12);
    assert!(arena.is_empty());
}
