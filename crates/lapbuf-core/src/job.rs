//! The [`SvdJob`] shape descriptor and [`VectorMode`] selector.
//!
//! An `SvdJob` captures everything the kernel needs to know about one
//! decomposition: the input dimensions, which singular-vector matrices are
//! wanted in full, and the leading dimensions of the column-major storage
//! for the input and the three outputs.

/// Output-completeness selector for a singular-vector matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VectorMode {
    /// Only the `min(m, n)` singular-vector columns/rows that pair with
    /// the singular values. Equivalent of the reference kernel's `'S'` job.
    Economy,

    /// The complete orthonormal basis (`m×m` for U, `n×n` for V).
    /// Equivalent of the reference kernel's `'A'` job.
    Full,
}

impl VectorMode {
    /// Construct from the boolean flag convention of the caller-facing API.
    pub fn from_full_flag(full: bool) -> Self {
        if full {
            VectorMode::Full
        } else {
            VectorMode::Economy
        }
    }

    /// Whether this mode requests the complete basis.
    pub fn is_full(self) -> bool {
        matches!(self, VectorMode::Full)
    }
}

/// Shape descriptor for one decomposition.
///
/// All storage is column-major. The leading dimensions are derived at
/// construction and never change:
///
/// | `u_full` | `v_full` | U shape | S length | VT shape |
/// |----------|----------|---------|----------|----------|
/// | false    | false    | m×s     | s        | s×n      |
/// | true     | false    | m×m     | s        | s×n      |
/// | false    | true     | m×s     | s        | n×n      |
/// | true     | true     | m×m     | s        | n×n      |
///
/// where `s = min(m, n)`. `ldvt` equals the number of stored VT rows, so
/// it is `n` except in the wide economy case (`m < n`, economy V) where it
/// is `m` — the economy VT region is never larger than necessary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SvdJob {
    /// Rows of the input matrix.
    pub m: usize,
    /// Columns of the input matrix.
    pub n: usize,
    /// Completeness of the left singular-vector matrix U.
    pub jobu: VectorMode,
    /// Completeness of the right singular-vector matrix V (output as VT).
    pub jobvt: VectorMode,
    /// Leading dimension of the input matrix A. Always `m`.
    pub lda: usize,
    /// Leading dimension of U. Always `m`.
    pub ldu: usize,
    /// Leading dimension of VT: `n`, or `m` when `m < n` with economy V.
    pub ldvt: usize,
}

impl SvdJob {
    /// Derive the job for an `m×n` input with the given completeness flags.
    pub fn new(m: usize, n: usize, u_full: bool, v_full: bool) -> Self {
        let jobvt = VectorMode::from_full_flag(v_full);
        let ldvt = if m < n && !jobvt.is_full() { m } else { n };
        Self {
            m,
            n,
            jobu: VectorMode::from_full_flag(u_full),
            jobvt,
            lda: m,
            ldu: m,
            ldvt,
        }
    }

    /// Number of singular values: `min(m, n)`.
    pub fn s_len(&self) -> usize {
        self.m.min(self.n)
    }

    /// Number of U columns: `m` in full mode, `min(m, n)` in economy mode.
    pub fn u_cols(&self) -> usize {
        if self.jobu.is_full() {
            self.m
        } else {
            self.s_len()
        }
    }

    /// Number of stored VT rows: `n` in full mode, `min(m, n)` otherwise.
    pub fn vt_rows(&self) -> usize {
        if self.jobvt.is_full() {
            self.n
        } else {
            self.s_len()
        }
    }

    /// Element count of the input region (`lda * n`).
    pub fn a_len(&self) -> usize {
        self.lda * self.n
    }

    /// Element count of the U output region (`ldu * u_cols`).
    pub fn u_len(&self) -> usize {
        self.ldu * self.u_cols()
    }

    /// Element count of the VT output region (`ldvt * n`).
    pub fn vt_len(&self) -> usize {
        self.ldvt * self.n
    }
}
