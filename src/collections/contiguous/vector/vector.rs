use std::borrow::{Borrow, BorrowMut};
use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem::MaybeUninit;
use std::ops::{Deref, DerefMut};
use std::slice;

use crate::collections::contiguous::Buffer;
#[doc(inline)]
pub use crate::util::error::{
    AllocFailure, CapacityOverflow, EmptyContainerAccess, IndexOutOfRange, PushError,
    TryReserveError,
};
use crate::util::result::{ResultExtension, infallible};

/// The capacity of a Vector's first allocation when it grows from empty.
const MIN_CAP: usize = 1;

/// Each time a full Vector grows, its capacity is multiplied by this.
const GROWTH_FACTOR: usize = 2;

/// A growable array, storing its elements in one contiguous heap allocation.
///
/// The first `len` slots of the allocation are live; the remaining `cap - len` are spare room for
/// future pushes. When a push finds no spare room, the capacity doubles (or becomes 1 for an empty
/// Vector), so a run of `n` pushes costs `O(n)` in total. Capacity is never given back implicitly:
/// popping, truncating and clearing only drop elements.
///
/// # Cost of each operation
/// | Operation | Cost |
/// |-|-|
/// | `at`, `front`, `back`, `len`, `cap` | `O(1)` |
/// | `push_back` | amortized `O(1)`, `O(len)` when it grows |
/// | `pop_back` | `O(1)` |
/// | `reserve` | `O(len)` when it reallocates, otherwise `O(1)` |
/// | `resize` | `O(len + added)` when it reallocates, otherwise `O(added or removed)` |
/// | `clear` | `O(len)` |
///
/// # Borrowing
/// Slice methods (including [`iter`](slice::Iter) and [`iter_mut`](slice::IterMut)) come from
/// [`Deref<Target = [T]>`](Deref). Anything borrowed that way keeps the Vector borrowed, so an
/// operation that could reallocate or drop elements can't happen while it is alive.
pub struct Vector<T> {
    pub(crate) buf: Buffer<T>,
    pub(crate) len: usize,
}

impl<T> Vector<T> {
    /// An empty Vector. Nothing is allocated until the first element is added or capacity is
    /// reserved.
    ///
    /// # Examples
    /// ```
    /// # use ds_collections::collections::contiguous::Vector;
    /// let vec: Vector<char> = Vector::new();
    /// assert!(vec.is_empty());
    /// assert_eq!(vec.cap(), 0);
    /// ```
    pub const fn new() -> Vector<T> {
        Vector {
            buf: Buffer::new(),
            len: 0,
        }
    }

    /// An empty Vector with room for exactly `cap` elements.
    ///
    /// # Panics
    /// Panics if `cap` elements of `T` would take more than [`isize::MAX`] bytes.
    ///
    /// # Examples
    /// ```
    /// # use ds_collections::collections::contiguous::Vector;
    /// let mut vec = Vector::with_cap(3);
    /// vec.extend(['x', 'y', 'z']);
    /// assert_eq!(vec.cap(), 3, "Filling reserved room doesn't reallocate.");
    /// ```
    pub fn with_cap(cap: usize) -> Vector<T> {
        Vector {
            buf: Buffer::with_cap(cap),
            len: 0,
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of elements the current allocation can hold. This is always exactly the value
    /// that the last reallocation asked for.
    pub const fn cap(&self) -> usize {
        self.buf.cap()
    }

    /// Views the live elements as a slice.
    pub const fn as_slice(&self) -> &[T] {
        // SAFETY: The first len slots are initialized, and the allocation is valid and aligned for
        // all of them. The slice borrows self, so nothing can drop or move them while it exists.
        unsafe { slice::from_raw_parts(self.buf.ptr.as_ptr().cast_const().cast(), self.len) }
    }

    /// Views the live elements as a mutable slice.
    pub const fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: As for as_slice, with the mutable borrow of self guaranteeing exclusivity.
        unsafe { slice::from_raw_parts_mut(self.buf.ptr.as_ptr().cast(), self.len) }
    }

    /// The element at `index`.
    ///
    /// # Panics
    /// Panics with an [`IndexOutOfRange`] message if `index >= len`.
    ///
    /// # Examples
    /// ```
    /// # use ds_collections::collections::contiguous::Vector;
    /// let vec = Vector::from(['a', 'b']);
    /// assert_eq!(*vec.at(1), 'b');
    /// assert!(vec.try_at(2).is_err());
    /// ```
    pub fn at(&self, index: usize) -> &T {
        self.try_at(index).throw()
    }

    pub fn try_at(&self, index: usize) -> Result<&T, IndexOutOfRange> {
        self.check_index(index)?;
        // SAFETY: check_index has confirmed that index < len.
        Ok(unsafe { self.get_unchecked(index) })
    }

    /// The element at `index`, mutably.
    ///
    /// # Panics
    /// Panics with an [`IndexOutOfRange`] message if `index >= len`.
    pub fn at_mut(&mut self, index: usize) -> &mut T {
        self.try_at_mut(index).throw()
    }

    pub fn try_at_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfRange> {
        self.check_index(index)?;
        // SAFETY: check_index has confirmed that index < len.
        Ok(unsafe { self.get_unchecked_mut(index) })
    }

    /// The element at `index`, without a bounds check in release builds.
    ///
    /// # Safety
    /// `index` must be less than [`len`](Vector::len). Anything else is undefined behaviour, even
    /// if the returned reference is never read.
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len, "get_unchecked({index}) on a Vector of {}", self.len);
        // SAFETY: The caller promises index < len, and every slot below len is initialized.
        unsafe { self.buf.ptr.add(index).as_ref().assume_init_ref() }
    }

    /// The element at `index`, mutably, without a bounds check in release builds.
    ///
    /// # Safety
    /// `index` must be less than [`len`](Vector::len).
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len, "get_unchecked_mut({index}) on a Vector of {}", self.len);
        // SAFETY: The caller promises index < len, and every slot below len is initialized.
        unsafe { self.buf.ptr.add(index).as_mut().assume_init_mut() }
    }

    /// # Panics
    /// Panics with an [`EmptyContainerAccess`] message if the Vector is empty.
    pub fn front(&self) -> &T {
        self.try_front().throw()
    }

    pub fn try_front(&self) -> Result<&T, EmptyContainerAccess> {
        self.first().ok_or(EmptyContainerAccess)
    }

    /// # Panics
    /// Panics with an [`EmptyContainerAccess`] message if the Vector is empty.
    pub fn front_mut(&mut self) -> &mut T {
        self.try_front_mut().throw()
    }

    pub fn try_front_mut(&mut self) -> Result<&mut T, EmptyContainerAccess> {
        self.first_mut().ok_or(EmptyContainerAccess)
    }

    /// # Panics
    /// Panics with an [`EmptyContainerAccess`] message if the Vector is empty.
    pub fn back(&self) -> &T {
        self.try_back().throw()
    }

    pub fn try_back(&self) -> Result<&T, EmptyContainerAccess> {
        self.last().ok_or(EmptyContainerAccess)
    }

    /// # Panics
    /// Panics with an [`EmptyContainerAccess`] message if the Vector is empty.
    pub fn back_mut(&mut self) -> &mut T {
        self.try_back_mut().throw()
    }

    pub fn try_back_mut(&mut self) -> Result<&mut T, EmptyContainerAccess> {
        self.last_mut().ok_or(EmptyContainerAccess)
    }

    /// Appends `value`, growing the allocation first if there is no spare room.
    ///
    /// # Panics
    /// Panics if the grown allocation would exceed [`isize::MAX`] bytes. If the allocator fails,
    /// [`handle_alloc_error`](std::alloc::handle_alloc_error) is called instead.
    ///
    /// # Examples
    /// ```
    /// # use ds_collections::collections::contiguous::Vector;
    /// let mut vec = Vector::from([1, 2, 3]);
    /// vec.push_back(4);
    /// assert_eq!(vec.len(), 4);
    /// assert_eq!(vec.cap(), 6);
    /// assert_eq!(&*vec, &[1, 2, 3, 4]);
    /// ```
    pub fn push_back(&mut self, value: T) {
        infallible(self.try_push_back(value).map_err(PushError::into_reason))
    }

    /// Appends `value` like [`push_back`](Vector::push_back), but hands it back inside a
    /// [`PushError`] if the Vector can't grow. The Vector is untouched on failure.
    pub fn try_push_back(&mut self, value: T) -> Result<(), PushError<T>> {
        if self.len == self.cap() {
            if let Err(reason) = self.try_grow() {
                return Err(PushError { value, reason });
            }
        }
        // SAFETY: There is at least one spare slot, either already or after growing.
        unsafe { self.push_unchecked(value) }
        Ok(())
    }

    /// Appends `value` into spare room without checking that any exists.
    ///
    /// # Safety
    /// `len` must be less than `cap`, for example after [`reserve`](Vector::reserve) or
    /// [`with_cap`](Vector::with_cap) made room. Pushing into a full Vector is undefined behaviour.
    pub unsafe fn push_unchecked(&mut self, value: T) {
        debug_assert!(self.len < self.cap(), "push_unchecked on a full Vector");
        // SAFETY: The caller promises that slot len is within the allocation. It is
        // uninitialized, so nothing is overwritten.
        unsafe { self.buf.ptr.add(self.len).write(MaybeUninit::new(value)) }
        self.len += 1;
    }

    /// Drops the last element. The capacity is kept.
    ///
    /// # Panics
    /// Panics with an [`EmptyContainerAccess`] message if the Vector is empty.
    pub fn pop_back(&mut self) {
        self.try_pop_back().throw()
    }

    pub fn try_pop_back(&mut self) -> Result<(), EmptyContainerAccess> {
        self.take_back().map(drop).ok_or(EmptyContainerAccess)
    }

    /// Drops every element. The capacity is kept.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Drops the elements at `new_len` and beyond, last first. Does nothing when the Vector is
    /// already that short.
    pub fn truncate(&mut self, new_len: usize) {
        while self.len > new_len {
            // The slot leaves the live range before its value is dropped, so a panicking drop
            // can't lead to a second drop of the same value.
            self.len -= 1;
            // SAFETY: The slot at the old last index is initialized and no longer counted as live.
            unsafe { self.buf.ptr.add(self.len).as_mut().assume_init_drop() }
        }
    }

    /// Makes sure the allocation can hold `new_cap` elements. A smaller capacity reallocates to
    /// exactly `new_cap`, moving the elements across in order; a capacity that is already large
    /// enough is left alone.
    ///
    /// # Panics
    /// Panics if `new_cap` elements would take more than [`isize::MAX`] bytes.
    ///
    /// # Examples
    /// ```
    /// # use ds_collections::collections::contiguous::Vector;
    /// let mut vec = Vector::from([1, 2]);
    /// vec.reserve(8);
    /// assert_eq!(vec.cap(), 8);
    /// vec.reserve(3);
    /// assert_eq!(vec.cap(), 8, "reserve never shrinks.");
    /// ```
    pub fn reserve(&mut self, new_cap: usize) {
        infallible(self.try_reserve(new_cap))
    }

    /// As [`reserve`](Vector::reserve), but reports failure instead of panicking or aborting. The
    /// Vector is untouched on failure.
    pub fn try_reserve(&mut self, new_cap: usize) -> Result<(), TryReserveError> {
        match new_cap > self.cap() {
            true => self.buf.try_realloc(new_cap, self.len),
            false => Ok(()),
        }
    }

    /// Changes the length to `new_len`. Extra slots are filled with clones of `value`; surplus
    /// elements are dropped.
    ///
    /// # Panics
    /// Panics if `new_len` elements would take more than [`isize::MAX`] bytes.
    ///
    /// # Examples
    /// ```
    /// # use ds_collections::collections::contiguous::Vector;
    /// let mut vec = Vector::from(['a']);
    /// vec.resize(3, '-');
    /// assert_eq!(&*vec, &['a', '-', '-']);
    /// vec.resize(0, '-');
    /// assert!(vec.is_empty());
    /// assert_eq!(vec.cap(), 3);
    /// ```
    pub fn resize(&mut self, new_len: usize, value: T)
    where
        T: Clone,
    {
        self.resize_with(new_len, || value.clone());
    }

    /// Changes the length to `new_len`, filling extra slots with `T::default()`.
    ///
    /// # Panics
    /// Panics if `new_len` elements would take more than [`isize::MAX`] bytes.
    pub fn resize_default(&mut self, new_len: usize)
    where
        T: Default,
    {
        self.resize_with(new_len, T::default);
    }

    /// Changes the length to `new_len`, filling extra slots with values from `fill`. Growing
    /// reserves exactly `new_len` up front. If `fill` panics, the values it already produced stay
    /// in the Vector.
    ///
    /// # Panics
    /// Panics if `new_len` elements would take more than [`isize::MAX`] bytes.
    pub fn resize_with<F: FnMut() -> T>(&mut self, new_len: usize, mut fill: F) {
        if new_len <= self.len {
            return self.truncate(new_len);
        }

        self.reserve(new_len);
        while self.len < new_len {
            // SAFETY: The capacity is now at least new_len, which is more than len.
            unsafe { self.push_unchecked(fill()) }
        }
    }

    /// Moves the last element out, if there is one.
    pub(crate) fn take_back(&mut self) -> Option<T> {
        self.len = self.len.checked_sub(1)?;
        // SAFETY: The slot at the new len was the last live one. Excluding it from len before
        // reading means the value now has exactly one owner: the caller.
        Some(unsafe { self.buf.ptr.add(self.len).read().assume_init() })
    }

    /// Reallocates to [`grown_cap`](Vector::grown_cap), making room for at least one more
    /// element. Fails with [`CapacityOverflow`] when the capacity can't increase any further.
    pub(crate) fn try_grow(&mut self) -> Result<(), TryReserveError> {
        let new_cap = self.grown_cap();
        if new_cap == self.cap() {
            return Err(CapacityOverflow.into());
        }
        self.buf.try_realloc(new_cap, self.len)
    }

    /// `max(cap * GROWTH_FACTOR, MIN_CAP)`, saturating at [`usize::MAX`].
    pub(crate) const fn grown_cap(&self) -> usize {
        let grown = self.cap().saturating_mul(GROWTH_FACTOR);
        if grown < MIN_CAP { MIN_CAP } else { grown }
    }

    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfRange> {
        match index < self.len {
            true => Ok(()),
            false => Err(IndexOutOfRange {
                index,
                len: self.len,
            }),
        }
    }
}

impl<T: Clone> Vector<T> {
    /// A Vector of `count` clones of `item`, with capacity exactly `count`.
    ///
    /// # Panics
    /// Panics if `count` elements would take more than [`isize::MAX`] bytes.
    ///
    /// # Examples
    /// ```
    /// # use ds_collections::collections::contiguous::Vector;
    /// let vec = Vector::repeat_item(0.5, 2);
    /// assert_eq!(&*vec, &[0.5, 0.5]);
    /// ```
    pub fn repeat_item(item: T, count: usize) -> Vector<T> {
        let mut vec = Vector::new();
        vec.resize(count, item);
        vec
    }
}

impl<T: Default> Vector<T> {
    /// A Vector of `count` default values, with capacity exactly `count`.
    ///
    /// # Panics
    /// Panics if `count` elements would take more than [`isize::MAX`] bytes.
    pub fn repeat_default(count: usize) -> Vector<T> {
        let mut vec = Vector::new();
        vec.resize_default(count);
        vec
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    /// Moves the array's elements into a Vector of capacity exactly `N`, keeping their order.
    fn from(array: [T; N]) -> Self {
        let mut vec = Vector::with_cap(N);
        for item in array {
            // SAFETY: There is room for all N items.
            unsafe { vec.push_unchecked(item) }
        }
        vec
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(items: I) -> Self {
        let items = items.into_iter();
        let mut vec = Vector::with_cap(items.size_hint().0);
        vec.extend(items);
        vec
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, items: I) {
        items.into_iter().for_each(|item| self.push_back(item));
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Vector::new()
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        // Only the elements are dropped here; the Buffer frees the allocation afterwards.
        self.clear();
    }
}

impl<T: Clone> Clone for Vector<T> {
    /// Copies every element into a new allocation sized exactly to the length of self. If a clone
    /// panics, the copies made so far are dropped and self is unaffected.
    fn clone(&self) -> Self {
        let mut copy = Vector::with_cap(self.len);
        for item in self.iter() {
            // SAFETY: copy has room for every element of self.
            unsafe { copy.push_unchecked(item.clone()) }
        }
        copy
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for Vector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Borrow<[T]> for Vector<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> BorrowMut<[T]> for Vector<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: PartialOrd> PartialOrd for Vector<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for Vector<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash> Hash for Vector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: Debug> Debug for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("contents", &self.as_slice())
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Debug> Display for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "!{:?}", self.as_slice())
    }
}
