//! Arena-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during arena operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// The reservation would push the cursor past the arena's capacity.
    /// The cursor is left unchanged — no partial reservation ever occurs.
    OutOfCapacity {
        /// Number of f64 elements requested.
        requested: usize,
        /// Number of f64 elements still free at the time of the request.
        remaining: usize,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfCapacity {
                requested,
                remaining,
            } => {
                write!(
                    f,
                    "arena out of capacity: requested {requested} elements, {remaining} remaining"
                )
            }
        }
    }
}

impl Error for ArenaError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_counts() {
        let err = ArenaError::OutOfCapacity {
            requested: 9,
            remaining: 5,
        };
        let msg = err.to_string();
        assert!(msg.contains("9"));
        assert!(msg.contains("5"));
    }
}
