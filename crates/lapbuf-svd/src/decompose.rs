//! The two-phase, arena-scoped decomposition protocol.

use lapbuf_arena::{ArenaError, FixedArena};
use lapbuf_core::{SvdJob, SvdKernel, Workspace};

use crate::error::{ArenaRegion, Buffer, SvdError};

/// Compute `A = U · diag(S) · VT` for the column-major `m×n` matrix `a`,
/// using `arena` for all temporary storage.
///
/// `u_full` and `v_full` select economy or full singular-vector matrices;
/// the required output sizes follow the [`SvdJob`] shape table. The input
/// is never modified — the kernel destroys its working copy, so the
/// orchestrator reserves a private copy inside the arena first, then a
/// scratch region of the length the kernel reports for this shape.
///
/// Both reservations are released, scratch first, on every exit path:
/// after the call, `arena.used()` equals its value before the call
/// whether the decomposition succeeded or failed. Output buffers are
/// written only if the kernel's compute phase is reached; on
/// [`SvdError::KernelInputError`] or [`SvdError::KernelNonConvergence`]
/// their content is kernel-defined and unreliable.
///
/// The arena supports one in-flight decomposition at a time. Sequential
/// calls against the same arena are fine; concurrent ones are not.
#[allow(clippy::too_many_arguments)]
pub fn decompose<K: SvdKernel>(
    kernel: &K,
    u: &mut [f64],
    s: &mut [f64],
    vt: &mut [f64],
    a: &[f64],
    m: usize,
    n: usize,
    u_full: bool,
    v_full: bool,
    arena: &mut FixedArena,
) -> Result<(), SvdError> {
    if m < 1 || n < 1 {
        return Err(SvdError::InvalidDimensions { m, n });
    }
    let job = SvdJob::new(m, n, u_full, v_full);
    check_len(Buffer::Input, a.len(), job.a_len())?;
    check_len(Buffer::U, u.len(), job.u_len())?;
    check_len(Buffer::S, s.len(), job.s_len())?;
    check_len(Buffer::Vt, vt.len(), job.vt_len())?;

    let input_len = job.a_len();
    let input_off = arena
        .reserve(input_len)
        .map_err(|e| insufficient(ArenaRegion::InputCopy, e))?;
    let result = with_input_copy(kernel, &job, u, s, vt, a, arena, input_off);
    arena.release(input_len);
    result
}

/// Everything that runs while the input-copy reservation is live. The
/// caller releases it whatever this returns.
#[allow(clippy::too_many_arguments)]
fn with_input_copy<K: SvdKernel>(
    kernel: &K,
    job: &SvdJob,
    u: &mut [f64],
    s: &mut [f64],
    vt: &mut [f64],
    a: &[f64],
    arena: &mut FixedArena,
    input_off: usize,
) -> Result<(), SvdError> {
    let input_len = job.a_len();
    arena
        .slice_mut(input_off, input_len)
        .copy_from_slice(&a[..input_len]);

    let mut scratch_len = 0usize;
    let info = kernel.gesvd(
        job,
        &mut [],
        &mut [],
        &mut [],
        &mut [],
        Workspace::Query(&mut scratch_len),
    );
    if info != 0 {
        return Err(SvdError::KernelQueryFailed { info });
    }

    let scratch_off = arena
        .reserve(scratch_len)
        .map_err(|e| insufficient(ArenaRegion::Scratch, e))?;
    let result = with_scratch(
        kernel,
        job,
        u,
        s,
        vt,
        arena,
        (input_off, input_len),
        (scratch_off, scratch_len),
    );
    arena.release(scratch_len);
    result
}

/// The compute phase, with both regions live.
#[allow(clippy::too_many_arguments)]
fn with_scratch<K: SvdKernel>(
    kernel: &K,
    job: &SvdJob,
    u: &mut [f64],
    s: &mut [f64],
    vt: &mut [f64],
    arena: &mut FixedArena,
    input: (usize, usize),
    scratch: (usize, usize),
) -> Result<(), SvdError> {
    let (input_copy, work) = arena.split_mut(input, scratch);
    let info = kernel.gesvd(job, input_copy, s, u, vt, Workspace::Slice(work));
    match info {
        0 => Ok(()),
        i if i < 0 => Err(SvdError::KernelInputError { info: i }),
        i => Err(SvdError::KernelNonConvergence { info: i }),
    }
}

fn check_len(buffer: Buffer, actual: usize, required: usize) -> Result<(), SvdError> {
    if actual < required {
        return Err(SvdError::BufferTooSmall {
            buffer,
            required,
            actual,
        });
    }
    Ok(())
}

fn insufficient(region: ArenaRegion, err: ArenaError) -> SvdError {
    let ArenaError::OutOfCapacity {
        requested,
        remaining,
    } = err;
    SvdError::InsufficientBuffer {
        region,
        requested,
        remaining,
    }
}
