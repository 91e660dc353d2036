//! Cyclic Jacobi sweeps over column pairs.

/// Sweep limit before the kernel reports non-convergence.
pub(crate) const MAX_SWEEPS: usize = 30;

/// Relative threshold below which a column pair counts as orthogonal.
const ORTHO_TOL: f64 = 1.0e-15;

/// Run cyclic one-sided Jacobi sweeps on the `rows×cols` matrix `t`
/// (column-major, leading dimension `ld_t`), accumulating the right
/// rotations into the `cols×cols` matrix `v` (initialised to identity
/// here).
///
/// On success the columns of `t` are mutually orthogonal, `t = U·Σ` up to
/// column scaling, and `v` holds the accumulated right singular vectors.
/// Returns `0` on convergence, or the number of column pairs still
/// rotating in the final sweep if `MAX_SWEEPS` was exhausted.
pub(crate) fn sweep_columns(
    t: &mut [f64],
    ld_t: usize,
    rows: usize,
    cols: usize,
    v: &mut [f64],
) -> i32 {
    for j in 0..cols {
        for i in 0..cols {
            v[i + j * cols] = if i == j { 1.0 } else { 0.0 };
        }
    }

    let mut rotated = 0i32;
    for _ in 0..MAX_SWEEPS {
        rotated = 0;
        for p in 0..cols {
            for q in (p + 1)..cols {
                let mut alpha = 0.0;
                let mut beta = 0.0;
                let mut gamma = 0.0;
                for i in 0..rows {
                    let tp = t[i + p * ld_t];
                    let tq = t[i + q * ld_t];
                    alpha += tp * tp;
                    beta += tq * tq;
                    gamma += tp * tq;
                }
                if gamma == 0.0 || gamma.abs() <= ORTHO_TOL * (alpha * beta).sqrt() {
                    continue;
                }
                rotated += 1;

                // Rotation angle that zeroes the p/q inner product.
                let zeta = (beta - alpha) / (2.0 * gamma);
                let tan = zeta.signum() / (zeta.abs() + (1.0 + zeta * zeta).sqrt());
                let cos = 1.0 / (1.0 + tan * tan).sqrt();
                let sin = cos * tan;

                rotate_pair(t, ld_t, rows, p, q, cos, sin);
                rotate_pair(v, cols, cols, p, q, cos, sin);
            }
        }
        if rotated == 0 {
            return 0;
        }
    }
    rotated
}

/// Apply the plane rotation to columns `p` and `q`.
fn rotate_pair(mat: &mut [f64], ld: usize, rows: usize, p: usize, q: usize, cos: f64, sin: f64) {
    for i in 0..rows {
        let xp = mat[i + p * ld];
        let xq = mat[i + q * ld];
        mat[i + p * ld] = cos * xp - sin * xq;
        mat[i + q * ld] = sin * xp + cos * xq;
    }
}

/// Euclidean norm of column `col`.
pub(crate) fn column_norm(mat: &[f64], ld: usize, rows: usize, col: usize) -> f64 {
    let mut sum = 0.0;
    for i in 0..rows {
        let x = mat[i + col * ld];
        sum += x * x;
    }
    sum.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair_dot(mat: &[f64], ld: usize, rows: usize, p: usize, q: usize) -> f64 {
        (0..rows).map(|i| mat[i + p * ld] * mat[i + q * ld]).sum()
    }

    #[test]
    fn sweeps_orthogonalise_columns() {
        // 3×2 with strongly correlated columns.
        let mut t = [1.0, 2.0, 3.0, 1.1, 1.9, 3.2];
        let mut v = [0.0; 4];
        let info = sweep_columns(&mut t, 3, 3, 2, &mut v);
        assert_eq!(info, 0);
        assert!(pair_dot(&t, 3, 3, 0, 1).abs() < 1e-10);
    }

    #[test]
    fn accumulated_v_is_orthogonal() {
        let mut t = [4.0, 0.0, 3.0, -5.0, 1.0, 2.0, 0.5, 0.5, 0.5];
        let mut v = [0.0; 9];
        let info = sweep_columns(&mut t, 3, 3, 3, &mut v);
        assert_eq!(info, 0);
        for p in 0..3 {
            for q in 0..3 {
                let dot = pair_dot(&v, 3, 3, p, q);
                let expect = if p == q { 1.0 } else { 0.0 };
                assert!((dot - expect).abs() < 1e-12, "v^T v [{p},{q}] = {dot}");
            }
        }
    }

    #[test]
    fn identity_converges_without_rotations() {
        let mut t = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0];
        let before = t;
        let mut v = [0.0; 9];
        assert_eq!(sweep_columns(&mut t, 3, 3, 3, &mut v), 0);
        assert_eq!(t, before);
    }

    #[test]
    fn zero_columns_are_skipped() {
        let mut t = [0.0, 0.0, 1.0, 2.0];
        let mut v = [0.0; 4];
        assert_eq!(sweep_columns(&mut t, 2, 2, 2, &mut v), 0);
        assert_eq!(&t[..2], &[0.0, 0.0]);
    }

    #[test]
    fn single_column_is_trivially_converged() {
        let mut t = [3.0, 4.0];
        let mut v = [0.0];
        assert_eq!(sweep_columns(&mut t, 2, 2, 1, &mut v), 0);
        assert_eq!(v[0], 1.0);
        assert!((column_norm(&t, 2, 2, 0) - 5.0).abs() < 1e-12);
    }
}
