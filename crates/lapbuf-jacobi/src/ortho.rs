//! Orthonormal basis completion for full-mode and rank-deficient columns.

use smallvec::SmallVec;

/// Column index list. Stays on the stack for the matrix sizes a fixed
/// arena typically hosts.
pub(crate) type ColSet = SmallVec<[usize; 16]>;

/// Fill the `fill` columns of a column-major `rows`-row matrix with unit
/// vectors orthonormal to the `filled` columns and to each other.
///
/// The `filled` columns must already be orthonormal. Each new column is the
/// normalised residual of the coordinate vector least represented by the
/// current basis, orthogonalised with a second Gram-Schmidt pass for
/// stability. Filled columns are appended to `filled` as they are
/// produced.
///
/// Requires `filled.len() + fill.len() <= rows`, which guarantees every
/// step finds a candidate with a nonzero residual.
pub(crate) fn complete_basis(
    mat: &mut [f64],
    ld: usize,
    rows: usize,
    filled: &mut ColSet,
    fill: &[usize],
) {
    debug_assert!(filled.len() + fill.len() <= rows);
    for &target in fill {
        // The candidate axis with the smallest projection onto the current
        // basis leaves the largest residual.
        let mut best_axis = 0;
        let mut best_proj = f64::INFINITY;
        for axis in 0..rows {
            let mut proj = 0.0;
            for &j in filled.iter() {
                let x = mat[axis + j * ld];
                proj += x * x;
            }
            if proj < best_proj {
                best_proj = proj;
                best_axis = axis;
            }
        }

        for i in 0..rows {
            mat[i + target * ld] = 0.0;
        }
        mat[best_axis + target * ld] = 1.0;

        // Two passes of modified Gram-Schmidt.
        for _ in 0..2 {
            for &j in filled.iter() {
                let mut dot = 0.0;
                for i in 0..rows {
                    dot += mat[i + j * ld] * mat[i + target * ld];
                }
                for i in 0..rows {
                    mat[i + target * ld] -= dot * mat[i + j * ld];
                }
            }
        }

        let mut norm = 0.0;
        for i in 0..rows {
            let x = mat[i + target * ld];
            norm += x * x;
        }
        let norm = norm.sqrt();
        for i in 0..rows {
            mat[i + target * ld] /= norm;
        }
        filled.push(target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn col_dot(mat: &[f64], ld: usize, rows: usize, p: usize, q: usize) -> f64 {
        (0..rows).map(|i| mat[i + p * ld] * mat[i + q * ld]).sum()
    }

    #[test]
    fn completes_identity_from_empty() {
        let mut mat = vec![0.0; 9];
        let mut filled: ColSet = smallvec![];
        complete_basis(&mut mat, 3, 3, &mut filled, &[0, 1, 2]);
        for p in 0..3 {
            for q in 0..3 {
                let expect = if p == q { 1.0 } else { 0.0 };
                assert!((col_dot(&mat, 3, 3, p, q) - expect).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn completed_column_is_orthogonal_to_existing() {
        // One existing unit column along (1,1,0)/sqrt(2).
        let inv = 1.0 / 2.0f64.sqrt();
        let mut mat = vec![inv, inv, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];
        let mut filled: ColSet = smallvec![0];
        complete_basis(&mut mat, 3, 3, &mut filled, &[1, 2]);
        for p in 0..3 {
            for q in 0..3 {
                let expect = if p == q { 1.0 } else { 0.0 };
                assert!(
                    (col_dot(&mat, 3, 3, p, q) - expect).abs() < 1e-12,
                    "[{p},{q}]"
                );
            }
        }
    }

    #[test]
    fn respects_leading_dimension() {
        // 2 rows stored with ld = 4; garbage beyond row 2 must be ignored.
        let mut mat = vec![9.0; 8];
        mat[0] = 1.0;
        mat[1] = 0.0;
        let mut filled: ColSet = smallvec![0];
        complete_basis(&mut mat, 4, 2, &mut filled, &[1]);
        assert!(col_dot(&mat, 4, 2, 0, 1).abs() < 1e-12);
        assert!((col_dot(&mat, 4, 2, 1, 1) - 1.0).abs() < 1e-12);
    }
}
