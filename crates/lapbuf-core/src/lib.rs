//! Core types and traits for the lapbuf fixed-buffer SVD.
//!
//! This is the leaf crate with zero dependencies. It defines the shape
//! descriptor for a decomposition ([`SvdJob`]), the output-completeness
//! selector ([`VectorMode`]), and the kernel seam ([`SvdKernel`]) that
//! separates the arena-disciplined orchestrator from the numerical
//! routine that actually factorises the matrix.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod job;
pub mod kernel;

pub use job::{SvdJob, VectorMode};
pub use kernel::{SvdKernel, Workspace};
