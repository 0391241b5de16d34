use std::alloc::{self, Layout};
use std::cmp;
use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::mem::{self, MaybeUninit};
use std::ptr::{self, NonNull};

use tracing::{debug, trace};

use crate::util::error::{AllocFailure, CapacityOverflow, TryReserveError};
use crate::util::result::infallible;

/// A single, exclusively owned allocation with room for `cap` values of `T`. None of the slots are
/// tracked as initialized: the Buffer never reads or drops its contents, it only allocates, moves
/// and deallocates storage. Owners (such as [`Vector`](super::super::Vector)) track which slots are
/// live.
///
/// A Buffer with capacity 0, or for a zero-sized `T`, never allocates and holds a dangling pointer.
pub(crate) struct Buffer<T> {
    pub(crate) ptr: NonNull<MaybeUninit<T>>,
    pub(crate) cap: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Buffer<T> {
    /// Creates a new Buffer with capacity 0, without allocating.
    pub const fn new() -> Buffer<T> {
        Buffer {
            ptr: NonNull::dangling(),
            cap: 0,
            _phantom: PhantomData,
        }
    }

    /// Creates a new Buffer with room for exactly `cap` values.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Errors
    /// In the event of an allocation error, this method calls [`alloc::handle_alloc_error`] as
    /// recommended, to avoid new allocations rather than panicking.
    pub fn with_cap(cap: usize) -> Buffer<T> {
        infallible(Buffer::try_with_cap(cap))
    }

    /// Creates a new Buffer with room for exactly `cap` values, returning an [`Err`] rather than
    /// panicking or aborting if the memory can't be provided.
    pub fn try_with_cap(cap: usize) -> Result<Buffer<T>, TryReserveError> {
        let layout = Buffer::<T>::make_layout(cap)?;
        let ptr = Buffer::<T>::make_ptr(layout)?;

        Ok(Buffer {
            ptr,
            cap,
            _phantom: PhantomData,
        })
    }

    /// Returns the number of slots in the Buffer.
    pub const fn cap(&self) -> usize {
        self.cap
    }

    /// Moves the Buffer to a new allocation with room for exactly `new_cap` values, carrying over
    /// the first `live` slots (or as many as fit) in order.
    ///
    /// A `new_cap` below `live` shrinks the Buffer: the slots that don't fit are released without
    /// being read or dropped, so the caller must have dropped any values in them beforehand.
    ///
    /// # Panics
    /// Panics if the memory layout of the new allocation would have a size that exceeds
    /// [`isize::MAX`].
    pub fn realloc(&mut self, new_cap: usize, live: usize) {
        infallible(self.try_realloc(new_cap, live))
    }

    /// Moves the Buffer to a new allocation with room for exactly `new_cap` values, carrying over
    /// the first `live` slots (or as many as fit) in order.
    ///
    /// The new allocation is made before anything is moved, and the old one is only released once
    /// every slot has been carried over. If the allocation fails, self is left untouched.
    pub fn try_realloc(&mut self, new_cap: usize, live: usize) -> Result<(), TryReserveError> {
        if new_cap == self.cap {
            return Ok(());
        }

        let new_buf = Buffer::<T>::try_with_cap(new_cap).inspect_err(|err| {
            debug!(old_cap = self.cap, new_cap, %err, "buffer reallocation failed");
        })?;
        trace!(old_cap = self.cap, new_cap, live, "relocating buffer");

        // SAFETY: Both pointers are valid and properly aligned for the number of slots copied,
        // which doesn't exceed either capacity. The allocations are distinct, so they can't
        // overlap. Copying MaybeUninit<T> is always valid, regardless of initialization.
        unsafe {
            ptr::copy_nonoverlapping(
                self.ptr.as_ptr().cast_const(),
                new_buf.ptr.as_ptr(),
                cmp::min(cmp::min(live, self.cap), new_cap),
            );
        }

        // The old allocation is released as the replaced Buffer drops. Its slots are never dropped,
        // so the values that were just moved out of it stay owned by the new Buffer only.
        drop(mem::replace(self, new_buf));
        Ok(())
    }
}

impl<T> Buffer<T> {
    /// A helper function to create a [`Layout`] for use during allocation, containing `cap` number
    /// of elements of type `T`.
    pub(crate) fn make_layout(cap: usize) -> Result<Layout, CapacityOverflow> {
        Layout::array::<MaybeUninit<T>>(cap).map_err(|_| CapacityOverflow)
    }

    /// A helper function to create a [`NonNull`] for the provided [`Layout`]. Returns a dangling
    /// pointer for a zero-sized layout.
    pub(crate) fn make_ptr(layout: Layout) -> Result<NonNull<MaybeUninit<T>>, AllocFailure> {
        if layout.size() == 0 {
            Ok(NonNull::dangling())
        } else {
            NonNull::new(
                // SAFETY: Zero-sized layouts have been guarded against.
                unsafe { alloc::alloc(layout).cast() }
            ).ok_or(AllocFailure { layout })
        }
    }
}

impl<T> Default for Buffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Buffer<T> {
    fn drop(&mut self) {
        // The layout was valid when the Buffer was allocated, so it is still valid now.
        if let Ok(layout) = Buffer::<T>::make_layout(self.cap) {
            if layout.size() != 0 {
                // SAFETY: ptr is always allocated in the global allocator and layout is the same as
                // when allocated. Zero-sized layouts aren't allocated and are guarded against
                // deallocation.
                unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) }
            }
        }
    }
}

// SAFETY: Buffers rely on unique pointers and are therefore safe for Send when T: Send.
unsafe impl<T: Send> Send for Buffer<T> {}
// SAFETY: A Buffer never hands out access to its slots through a shared reference.
unsafe impl<T: Sync> Sync for Buffer<T> {}

impl<T> Debug for Buffer<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buffer")
            .field("ptr", &self.ptr)
            .field("cap", &self.cap)
            .finish()
    }
}
