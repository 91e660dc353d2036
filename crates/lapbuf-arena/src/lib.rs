//! Fixed-capacity LIFO scratch arena for the lapbuf SVD.
//!
//! [`FixedArena`] owns a contiguous block of `f64` storage allocated once
//! at construction. Callers reserve regions by bumping a cursor forward and
//! release them in strict reverse order of acquisition. The arena never
//! grows, never compacts, and never zeroes between reservations — it is a
//! pure stack discipline, sized by the caller for the worst-case
//! decomposition it will host.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod arena;
pub mod error;

pub use arena::FixedArena;
pub use error::ArenaError;
