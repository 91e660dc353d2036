//! Orchestrator error types.

use std::error::Error;
use std::fmt;

/// Which arena region a reservation failure was for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArenaRegion {
    /// The private copy of the input matrix (`m*n` elements).
    InputCopy,
    /// The kernel's scratch workspace, sized by the query call.
    Scratch,
}

impl fmt::Display for ArenaRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputCopy => write!(f, "input copy"),
            Self::Scratch => write!(f, "scratch workspace"),
        }
    }
}

/// Which caller-supplied slice failed the size precondition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Buffer {
    /// The input matrix A.
    Input,
    /// The left singular-vector output U.
    U,
    /// The singular-value output S.
    S,
    /// The transposed right singular-vector output VT.
    Vt,
}

impl fmt::Display for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input => write!(f, "input matrix"),
            Self::U => write!(f, "U output"),
            Self::S => write!(f, "S output"),
            Self::Vt => write!(f, "VT output"),
        }
    }
}

/// Errors that can occur during a decomposition.
///
/// Whatever the variant, the arena is rolled back to its pre-call cursor
/// before the error is returned, so a failed call never poisons the arena
/// for subsequent ones.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SvdError {
    /// The matrix dimensions are degenerate (`m` or `n` is zero).
    InvalidDimensions {
        /// Requested row count.
        m: usize,
        /// Requested column count.
        n: usize,
    },
    /// A caller-supplied slice is smaller than the shape table requires.
    BufferTooSmall {
        /// Which slice failed the check.
        buffer: Buffer,
        /// Elements required for the derived shape.
        required: usize,
        /// Elements actually supplied.
        actual: usize,
    },
    /// The arena could not satisfy a reservation.
    InsufficientBuffer {
        /// Which of the two regions could not be reserved.
        region: ArenaRegion,
        /// Elements requested.
        requested: usize,
        /// Elements that were still free.
        remaining: usize,
    },
    /// The kernel could not even determine its workspace requirement.
    KernelQueryFailed {
        /// The kernel's status code.
        info: i32,
    },
    /// The kernel's compute phase rejected an argument. Output buffer
    /// content is kernel-defined and must not be relied on.
    KernelInputError {
        /// The kernel's (negative) status code.
        info: i32,
    },
    /// The kernel's iteration did not converge for this matrix. Output
    /// buffer content is kernel-defined and must not be relied on.
    KernelNonConvergence {
        /// The kernel's (positive) status code.
        info: i32,
    },
}

impl fmt::Display for SvdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { m, n } => {
                write!(f, "invalid matrix dimensions {m}x{n}: both must be >= 1")
            }
            Self::BufferTooSmall {
                buffer,
                required,
                actual,
            } => {
                write!(
                    f,
                    "{buffer} too small: {required} elements required, {actual} supplied"
                )
            }
            Self::InsufficientBuffer {
                region,
                requested,
                remaining,
            } => {
                write!(
                    f,
                    "arena cannot hold the {region}: {requested} elements requested, {remaining} remaining"
                )
            }
            Self::KernelQueryFailed { info } => {
                write!(f, "kernel workspace query failed with status {info}")
            }
            Self::KernelInputError { info } => {
                write!(f, "kernel rejected an argument with status {info}")
            }
            Self::KernelNonConvergence { info } => {
                write!(f, "kernel iteration did not converge (status {info})")
            }
        }
    }
}

impl Error for SvdError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_distinguishes_regions() {
        let input = SvdError::InsufficientBuffer {
            region: ArenaRegion::InputCopy,
            requested: 9,
            remaining: 5,
        };
        let scratch = SvdError::InsufficientBuffer {
            region: ArenaRegion::Scratch,
            requested: 12,
            remaining: 3,
        };
        assert!(input.to_string().contains("input copy"));
        assert!(scratch.to_string().contains("scratch"));
    }

    #[test]
    fn display_names_buffers() {
        let err = SvdError::BufferTooSmall {
            buffer: Buffer::Vt,
            required: 9,
            actual: 4,
        };
        assert!(err.to_string().contains("VT output"));
    }
}
