use std::alloc::Layout;
use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// Returned when an element is requested from, or removed from, a collection with no elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyContainerAccess;

impl Display for EmptyContainerAccess {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Attempted to access an element of an empty collection!")
    }
}

impl Error for EmptyContainerAccess {}

/// Returned by checked index access when `index >= len`.
#[cfg(feature = "contiguous")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfRange {
    pub index: usize,
    pub len: usize,
}

#[cfg(feature = "contiguous")]
impl Display for IndexOutOfRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of range for collection with {} elements!", self.index, self.len)
    }
}

#[cfg(feature = "contiguous")]
impl Error for IndexOutOfRange {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityOverflow;

impl Display for CapacityOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Capacity overflow!")
    }
}

impl Error for CapacityOverflow {}

/// The global allocator returned null for the contained [`Layout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocFailure {
    pub layout: Layout,
}

impl Display for AllocFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Failed to allocate {} bytes with alignment {}!",
            self.layout.size(),
            self.layout.align(),
        )
    }
}

impl Error for AllocFailure {}

/// The reasons that growing a collection's storage can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum TryReserveError {
    CapacityOverflow(CapacityOverflow),
    AllocFailure(AllocFailure),
}

/// Returned by a failed `try_push_*` or `try_insert_before`, handing the rejected value back to
/// the caller.
pub struct PushError<T> {
    pub value: T,
    pub reason: TryReserveError,
}

impl<T> PushError<T> {
    pub fn into_value(self) -> T {
        self.value
    }

    /// Discards the value, keeping only the reason the push failed.
    pub fn into_reason(self) -> TryReserveError {
        self.reason
    }
}

impl<T> Debug for PushError<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("PushError")
            .field("reason", &self.reason)
            .finish_non_exhaustive()
    }
}

impl<T> Display for PushError<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Unable to push value: {}", self.reason)
    }
}

impl<T> Error for PushError<T> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.reason)
    }
}
