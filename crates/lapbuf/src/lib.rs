//! lapbuf: singular value decomposition on a fixed block of storage.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all lapbuf sub-crates. For most users, adding `lapbuf` as a single
//! dependency is sufficient.
//!
//! A decomposition runs entirely inside a caller-owned [`FixedArena`]: the
//! orchestrator reserves a private copy of the input (the kernel destroys
//! its working matrix), asks the kernel how much scratch it needs for this
//! shape, reserves that on top, computes, and releases both regions in
//! reverse order whatever happens. The arena is reusable immediately after
//! every call, successful or not.
//!
//! # Quick start
//!
//! ```rust
//! use lapbuf::prelude::*;
//!
//! // 2×2 identity, column-major.
//! let a = [1.0, 0.0, 0.0, 1.0];
//! let job = SvdJob::new(2, 2, false, false);
//!
//! let mut u = vec![0.0; job.u_len()];
//! let mut s = vec![0.0; job.s_len()];
//! let mut vt = vec![0.0; job.vt_len()];
//!
//! let kernel = JacobiKernel::new();
//! let mut arena = FixedArena::with_capacity(64);
//! decompose(&kernel, &mut u, &mut s, &mut vt, &a, 2, 2, false, false, &mut arena).unwrap();
//!
//! assert!((s[0] - 1.0).abs() < 1e-12);
//! assert!((s[1] - 1.0).abs() < 1e-12);
//! assert_eq!(arena.used(), 0);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `lapbuf-core` | [`SvdJob`], [`VectorMode`], the [`SvdKernel`] trait |
//! | [`arena`] | `lapbuf-arena` | [`FixedArena`], [`ArenaError`] |
//! | [`svd`] | `lapbuf-svd` | [`decompose`], [`SvdError`] |
//! | [`jacobi`] | `lapbuf-jacobi` | [`JacobiKernel`] |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and the kernel trait (`lapbuf-core`).
pub mod types {
    pub use lapbuf_core::{SvdJob, SvdKernel, VectorMode, Workspace};
}

/// Fixed-capacity LIFO arena (`lapbuf-arena`).
pub mod arena {
    pub use lapbuf_arena::{ArenaError, FixedArena};
}

/// The decomposition orchestrator (`lapbuf-svd`).
pub mod svd {
    pub use lapbuf_svd::{decompose, ArenaRegion, Buffer, SvdError};
}

/// The reference one-sided Jacobi kernel (`lapbuf-jacobi`).
pub mod jacobi {
    pub use lapbuf_jacobi::JacobiKernel;
}

pub use arena::{ArenaError, FixedArena};
pub use jacobi::JacobiKernel;
pub use svd::{decompose, SvdError};
pub use types::{SvdJob, SvdKernel, VectorMode, Workspace};

/// Convenience re-exports for the common case.
pub mod prelude {
    pub use crate::arena::FixedArena;
    pub use crate::jacobi::JacobiKernel;
    pub use crate::svd::{decompose, SvdError};
    pub use crate::types::{SvdJob, SvdKernel, VectorMode, Workspace};
}
