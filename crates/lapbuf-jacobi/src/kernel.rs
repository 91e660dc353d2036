//! The [`JacobiKernel`] implementation of the kernel contract.

use lapbuf_core::{SvdJob, SvdKernel, Workspace};
use smallvec::{smallvec, SmallVec};

use crate::ortho::{complete_basis, ColSet};
use crate::sweep::{column_norm, sweep_columns};

/// One-sided Jacobi SVD kernel over column-major `f64` storage.
///
/// The tall orientation (`m >= n`) iterates directly on the caller's input
/// copy and needs `n*n + n` scratch elements (rotation accumulator plus
/// singular-value staging). The wide orientation (`m < n`) materialises the
/// transpose into scratch and swaps the roles of U and V on output; it
/// needs `m*n + m*m + m` elements, plus `n*n` when a full V basis is
/// requested. Query mode reports exactly these requirements.
///
/// Singular values come out non-negative and sorted descending. Columns of
/// U (and rows of VT) that pair with a zero singular value, and the extra
/// columns of a full-mode basis, are completed to an orthonormal set.
#[derive(Clone, Copy, Debug, Default)]
pub struct JacobiKernel;

impl JacobiKernel {
    /// Create a new kernel. The kernel is stateless; one instance can
    /// serve any number of decompositions.
    pub fn new() -> Self {
        JacobiKernel
    }

    /// Minimal scratch length (in f64 elements) for the given job.
    pub fn required_workspace(job: &SvdJob) -> usize {
        let (m, n) = (job.m, job.n);
        if m >= n {
            n * n + n
        } else {
            let staging = if job.jobvt.is_full() { n * n } else { 0 };
            m * n + m * m + m + staging
        }
    }
}

/// Validate the dimensional arguments shared by query and compute mode.
///
/// Returns `0` or `-i` for the first invalid argument, with the 1-based
/// positions `m`, `n`, `lda`, `ldu`, `ldvt`.
fn validate_job(job: &SvdJob) -> i32 {
    if job.m < 1 {
        return -1;
    }
    if job.n < 1 {
        return -2;
    }
    if job.lda < job.m {
        return -3;
    }
    if job.ldu < job.m {
        return -4;
    }
    if job.ldvt < job.vt_rows() {
        return -5;
    }
    0
}

impl SvdKernel for JacobiKernel {
    fn name(&self) -> &str {
        "jacobi"
    }

    fn gesvd(
        &self,
        job: &SvdJob,
        a: &mut [f64],
        s: &mut [f64],
        u: &mut [f64],
        vt: &mut [f64],
        work: Workspace<'_>,
    ) -> i32 {
        let bad = validate_job(job);
        if bad != 0 {
            return bad;
        }
        let lwork = Self::required_workspace(job);
        match work {
            Workspace::Query(slot) => {
                *slot = lwork;
                0
            }
            Workspace::Slice(w) => {
                if a.len() < job.a_len() {
                    return -6;
                }
                if s.len() < job.s_len() {
                    return -7;
                }
                if u.len() < job.u_len() {
                    return -8;
                }
                if vt.len() < job.vt_len() {
                    return -9;
                }
                if w.len() < lwork {
                    return -10;
                }
                if job.m >= job.n {
                    compute_tall(job, a, s, u, vt, w)
                } else {
                    compute_wide(job, a, s, u, vt, w)
                }
            }
        }
    }
}

/// Descending-order permutation of the first `count` entries of `sigma`.
fn sort_descending(sigma: &[f64], count: usize) -> SmallVec<[usize; 16]> {
    let mut order: SmallVec<[usize; 16]> = (0..count).collect();
    order.sort_unstable_by(|&x, &y| {
        sigma[y]
            .partial_cmp(&sigma[x])
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    order
}

/// Threshold separating genuine singular values from rank-deficient noise.
fn rank_tolerance(sigma_max: f64, rows: usize) -> f64 {
    sigma_max * f64::EPSILON * rows as f64
}

/// Tall orientation: iterate on the input copy in place.
fn compute_tall(
    job: &SvdJob,
    a: &mut [f64],
    s: &mut [f64],
    u: &mut [f64],
    vt: &mut [f64],
    w: &mut [f64],
) -> i32 {
    let (m, n) = (job.m, job.n);
    let (v, rest) = w.split_at_mut(n * n);
    let sigma = &mut rest[..n];

    let info = sweep_columns(a, job.lda, m, n, v);
    if info != 0 {
        return info;
    }

    for j in 0..n {
        sigma[j] = column_norm(a, job.lda, m, j);
    }
    let order = sort_descending(sigma, n);
    let tol = rank_tolerance(sigma[order[0]], m);

    // U: scaled working columns where the singular value is genuine,
    // basis completion for the rest (zero directions and full-mode extras).
    let mut kept: ColSet = smallvec![];
    let mut missing: ColSet = smallvec![];
    for k in 0..job.u_cols() {
        match order.get(k) {
            Some(&src) if sigma[src] > tol => {
                let inv = 1.0 / sigma[src];
                for i in 0..m {
                    u[i + k * job.ldu] = a[i + src * job.lda] * inv;
                }
                kept.push(k);
            }
            _ => missing.push(k),
        }
    }
    complete_basis(u, job.ldu, m, &mut kept, &missing);

    for k in 0..n {
        s[k] = sigma[order[k]];
    }

    // VT rows are the accumulated right singular vectors, permuted.
    for k in 0..job.vt_rows() {
        let src = order[k];
        for j in 0..n {
            vt[k + j * job.ldvt] = v[j + src * n];
        }
    }
    0
}

/// Wide orientation: run the tall algorithm on the transpose held in
/// scratch, then swap the roles of the two vector matrices.
fn compute_wide(
    job: &SvdJob,
    a: &mut [f64],
    s: &mut [f64],
    u: &mut [f64],
    vt: &mut [f64],
    w: &mut [f64],
) -> i32 {
    let (m, n) = (job.m, job.n);
    let (t, rest) = w.split_at_mut(m * n);
    let (vacc, rest) = rest.split_at_mut(m * m);
    let (sigma, rest) = rest.split_at_mut(m);

    // t = A^T, an n×m tall matrix.
    for col in 0..n {
        for row in 0..m {
            t[col + row * n] = a[row + col * job.lda];
        }
    }

    let info = sweep_columns(t, n, n, m, vacc);
    if info != 0 {
        return info;
    }

    for j in 0..m {
        sigma[j] = column_norm(t, n, n, j);
    }
    let order = sort_descending(sigma, m);
    let tol = rank_tolerance(sigma[order[0]], n);

    // Left vectors of A are the accumulated rotations of the transpose.
    // Both completeness modes want m columns here since s = m.
    for k in 0..job.u_cols() {
        let src = order[k];
        for i in 0..m {
            u[i + k * job.ldu] = vacc[i + src * m];
        }
    }

    for k in 0..m {
        s[k] = sigma[order[k]];
    }

    if job.jobvt.is_full() {
        // Stage a full n×n left basis of the transpose, then emit its
        // transpose as VT.
        let stage = &mut rest[..n * n];
        let mut kept: ColSet = smallvec![];
        let mut missing: ColSet = smallvec![];
        for k in 0..n {
            match order.get(k) {
                Some(&src) if sigma[src] > tol => {
                    let inv = 1.0 / sigma[src];
                    for i in 0..n {
                        stage[i + k * n] = t[i + src * n] * inv;
                    }
                    kept.push(k);
                }
                _ => missing.push(k),
            }
        }
        complete_basis(stage, n, n, &mut kept, &missing);
        for k in 0..n {
            for j in 0..n {
                vt[k + j * job.ldvt] = stage[j + k * n];
            }
        }
    } else {
        // Economy: normalise the genuine columns of the transpose in
        // place, complete the rank-deficient ones, and emit m rows.
        let mut kept: ColSet = smallvec![];
        let mut missing: ColSet = smallvec![];
        for j in 0..m {
            if sigma[j] > tol {
                let inv = 1.0 / sigma[j];
                for i in 0..n {
                    t[i + j * n] *= inv;
                }
                kept.push(j);
            } else {
                missing.push(j);
            }
        }
        complete_basis(t, n, n, &mut kept, &missing);
        for k in 0..m {
            let src = order[k];
            for j in 0..n {
                vt[k + j * job.ldvt] = t[j + src * n];
            }
        }
    }
    0
}
