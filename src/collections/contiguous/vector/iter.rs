use std::fmt::{self, Debug, Formatter};
use std::iter::FusedIterator;
use std::mem::{self, ManuallyDrop};
use std::slice;

use super::Vector;
use crate::collections::contiguous::Buffer;

impl<T> IntoIterator for Vector<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        // The Vector's Drop would drop the elements that are now owned by the iterator.
        let mut vec = ManuallyDrop::new(self);
        IntoIter {
            buf: mem::take(&mut vec.buf),
            start: 0,
            end: vec.len,
        }
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;

    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;

    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// A type for owned iteration over a [`Vector`]. Produces values of type `T`. See
/// [`Vector::into_iter`].
///
/// The iterator keeps the Vector's allocation until it is dropped, at which point any values that
/// haven't been yielded are dropped as well.
pub struct IntoIter<T> {
    pub(crate) buf: Buffer<T>,
    pub(crate) start: usize,
    pub(crate) end: usize,
}

impl<T> IntoIter<T> {
    /// Returns the remaining values as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: All slots in start..end are initialized and haven't been yielded yet. The range
        // is within the capacity of the Buffer.
        unsafe {
            slice::from_raw_parts(
                self.buf.ptr.add(self.start).as_ptr().cast_const().cast(),
                self.end - self.start,
            )
        }
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        while self.start < self.end {
            self.start += 1;
            // SAFETY: The slot at the old start is initialized and was never yielded. Incrementing
            // start first means that a panicking drop can't cause it to be dropped twice.
            unsafe { self.buf.ptr.add(self.start - 1).as_mut().assume_init_drop(); }
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            // SAFETY: The slot at start is initialized. Incrementing start moves the value out of
            // the Buffer, so it is never read again.
            let value = unsafe { self.buf.ptr.add(self.start).read().assume_init() };
            self.start += 1;
            Some(value)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.start;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            self.end -= 1;
            // SAFETY: The slot at the newly decremented end is initialized and is now excluded
            // from the remaining range.
            let value = unsafe { self.buf.ptr.add(self.end).read().assume_init() };
            Some(value)
        } else {
            None
        }
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.end - self.start
    }
}

impl<T: Debug> Debug for IntoIter<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter")
            .field(&self.as_slice())
            .finish()
    }
}
