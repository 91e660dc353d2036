//! The [`SvdKernel`] trait and its two-phase [`Workspace`] argument.
//!
//! The kernel is the numerical collaborator behind the arena-disciplined
//! orchestrator. It is invoked twice per decomposition: once in query mode
//! to report how much scratch it needs (the explicit form of the reference
//! kernel's `lwork = -1` sentinel), and once in compute mode with a scratch
//! slice of at least that length.

use crate::job::SvdJob;

/// Workspace argument for one kernel invocation.
///
/// Selects between the two phases of the query-then-compute protocol.
pub enum Workspace<'a> {
    /// Size query: the kernel writes the minimal required scratch length
    /// (in `f64` elements) into the slot and performs no decomposition.
    /// The matrix arguments are not touched in this mode.
    Query(&'a mut usize),

    /// Compute: the kernel performs the decomposition using this scratch
    /// slice. Its length must be at least what query mode reported for the
    /// same job.
    Slice(&'a mut [f64]),
}

/// A singular-value-decomposition routine with caller-supplied storage.
///
/// # Contract
///
/// - `gesvd` in compute mode factorises the column-major `m×n` matrix in
///   `a` as `A = U · diag(s) · VT`, writing into the caller's `u`, `s`,
///   and `vt` buffers sized per [`SvdJob`]. The contents of `a` are
///   destroyed.
/// - `gesvd` in query mode writes the required scratch length and must not
///   read or write `a`, `s`, `u`, or `vt`.
/// - The kernel allocates no numeric storage of its own; matrix and vector
///   data live entirely in the supplied arguments.
/// - Singular values are non-negative and sorted descending.
///
/// # Status convention
///
/// The return value follows the reference kernel's `info` convention:
/// `0` on success; `-i` when the `i`-th argument is invalid (1-based over
/// `m`, `n`, `lda`, `ldu`, `ldvt`, `a`, `s`, `u`, `vt`, `work`); a
/// positive value when the iteration failed to converge.
///
/// # Examples
///
/// A degenerate kernel that only handles `1×1` matrices and needs no
/// scratch:
///
/// ```
/// use lapbuf_core::{SvdJob, SvdKernel, Workspace};
///
/// struct Trivial;
///
/// impl SvdKernel for Trivial {
///     fn name(&self) -> &str { "trivial" }
///
///     fn gesvd(
///         &self,
///         job: &SvdJob,
///         a: &mut [f64],
///         s: &mut [f64],
///         u: &mut [f64],
///         vt: &mut [f64],
///         work: Workspace<'_>,
///     ) -> i32 {
///         if job.m != 1 || job.n != 1 {
///             return -1;
///         }
///         match work {
///             Workspace::Query(len) => {
///                 *len = 0;
///                 0
///             }
///             Workspace::Slice(_) => {
///                 s[0] = a[0].abs();
///                 u[0] = if a[0] < 0.0 { -1.0 } else { 1.0 };
///                 vt[0] = 1.0;
///                 0
///             }
///         }
///     }
/// }
///
/// let kernel = Trivial;
/// let job = SvdJob::new(1, 1, false, false);
/// let mut lwork = usize::MAX;
/// let info = kernel.gesvd(
///     &job,
///     &mut [],
///     &mut [],
///     &mut [],
///     &mut [],
///     Workspace::Query(&mut lwork),
/// );
/// assert_eq!(info, 0);
/// assert_eq!(lwork, 0);
/// ```
pub trait SvdKernel {
    /// Human-readable name for error reporting and diagnostics.
    fn name(&self) -> &str;

    /// Query the scratch requirement or perform the decomposition,
    /// depending on the `work` mode. See the trait-level contract.
    fn gesvd(
        &self,
        job: &SvdJob,
        a: &mut [f64],
        s: &mut [f64],
        u: &mut [f64],
        vt: &mut [f64],
        work: Workspace<'_>,
    ) -> i32;
}
