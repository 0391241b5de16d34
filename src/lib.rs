//! This crate provides two generic, owning sequence containers: a doubly linked list and a
//! growable contiguous array.
//!
//! # Contents
#![cfg_attr(
    feature = "linked",
    doc = "- [`LinkedList`](collections::linked::LinkedList): A doubly linked list with `O(1)` \
           insertion and removal at both ends, as well as anywhere a \
           [`CursorMut`](collections::linked::CursorMut) points."
)]
#![cfg_attr(
    feature = "contiguous",
    doc = "- [`Vector`](collections::contiguous::Vector): A contiguous, growable array which \
           doubles its capacity when full and can be viewed as a slice."
)]
//!
//! Each container sits behind a Cargo feature of the same module name (`linked` and
//! `contiguous`), both enabled by default.
//!
//! # Error Handling
//! Specifically for a collections library, it is more ergonomic for functions to panic in some
//! cases, because users don't want to be forced to handle an error every time they invoke a method.
//! For example, imagine having to handle the possibility of a capacity overflow every time you push
//! into a Vector. Because of this, most fallible operations come in pairs: a method which panics
//! (such as `front`) and a `try_` method which returns a [`Result`] instead (such as `try_front`).
//! Growth is no exception: `try_push_back`, `try_reserve` and friends report capacity overflow and
//! allocation failure rather than panicking or aborting.
//!
//! When this crate employs errors via [`Result`]s, it does so in a method that is strongly typed,
//! using enums for static dispatch rather than dynamic, with structs (often ZSTs) that implement
//! [`Error`](std::error::Error).
//!
//! # Logging
//! Reallocations and allocation failures are reported through [`tracing`] events, at the `trace`
//! and `debug` levels respectively. Nothing is emitted unless the consumer installs a subscriber.
//!
//! # Dependencies
//! This crate doesn't use [`Vec`] to write `Vector` or anything else. It does depend on some
//! derive macros because they're helpful and remove the need for some very repetitive programming.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

#[cfg(any(feature = "contiguous", feature = "linked"))]
pub(crate) mod util;
