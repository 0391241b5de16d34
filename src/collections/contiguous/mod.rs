//! Contiguous collection types, backed by a single heap allocation.
//!
//! [`Vector`] is the only public type here. Its storage is managed by a crate-private `Buffer`,
//! which allocates, moves and frees slots without tracking which of them hold values.

pub(crate) mod buffer;
pub mod vector;

pub(crate) use buffer::Buffer;
#[doc(inline)]
pub use vector::Vector;
