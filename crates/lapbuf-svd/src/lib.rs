//! Arena-disciplined SVD orchestration.
//!
//! [`decompose`] runs one singular value decomposition on a fixed,
//! pre-allocated block of storage. The orchestrator owns the arena
//! protocol — reserve a private input copy, ask the kernel how much
//! scratch it needs, reserve that scratch on top, compute, and release
//! both regions in reverse order on every exit path. The numerical work
//! itself is delegated through the [`SvdKernel`](lapbuf_core::SvdKernel)
//! seam.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod decompose;
pub mod error;

pub use decompose::decompose;
pub use error::{ArenaRegion, Buffer, SvdError};
