//! General-purpose collection types.
//!
//! # Method
//! [`Vector`](contiguous::Vector) implements [`Deref<Target = [T]>`](std::ops::Deref) (and
//! DerefMut), which saves writing a lot of the more repetitive slice functionality.
//! [`LinkedList`](linked::LinkedList) can't be viewed as a slice, so its equivalent functionality
//! is written out by hand and traversal goes through cursors.

#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "linked")]
pub mod linked;
