//! Reference one-sided Jacobi SVD kernel for lapbuf.
//!
//! [`JacobiKernel`] implements the [`SvdKernel`](lapbuf_core::SvdKernel)
//! contract with a one-sided (Hestenes) Jacobi iteration: plane rotations
//! are applied from the right until the columns of the working matrix are
//! mutually orthogonal, at which point the column norms are the singular
//! values and the accumulated rotations are the right singular vectors.
//!
//! The kernel allocates no numeric storage. The working copy of the input
//! lives in the caller's `a` buffer (tall case) or in the caller-supplied
//! scratch (wide case, which runs on the transpose), and the rotation
//! accumulator and staging areas live in the scratch as well. The scratch
//! length is data-shape-dependent and is reported through the trait's
//! query mode.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod kernel;
mod ortho;
mod sweep;

pub use kernel::JacobiKernel;
