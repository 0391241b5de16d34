use std::fmt::{self, Debug, Formatter};
use std::iter::FusedIterator;
use std::marker::PhantomData;

use super::{LinkedList, ListState, NodePtr};
use crate::util::option::OptionExtension;

use ListState::*;

/// The end of the remaining range that a [`RawIter`] takes its next node from.
#[derive(Clone, Copy)]
enum Side {
    Front,
    Back,
}

/// Shared traversal for [`Iter`] and [`IterMut`]. Holds a detached copy of the list's state and
/// shrinks it from either end; the nodes themselves are never modified. The copied length is the
/// number of nodes left to yield, so the two ends can't cross.
pub(crate) struct RawIter<T> {
    remaining: ListState<T>,
}

impl<T> RawIter<T> {
    pub(crate) const fn new(state: ListState<T>) -> RawIter<T> {
        RawIter {
            remaining: state,
        }
    }

    fn take(&mut self, side: Side) -> Option<NodePtr<T>> {
        let Full(contents) = &mut self.remaining else {
            return None;
        };

        let node = match side {
            Side::Front => contents.head,
            Side::Back => contents.tail,
        };

        match contents.len.checked_sub(1) {
            Some(len) => {
                let inward = match side {
                    Side::Front => node.next(),
                    Side::Back => node.prev(),
                };
                // SAFETY: At least one more node remains in the range, so the node being taken has
                // a neighbour on the inward side.
                let inward = unsafe { inward.unreachable() };

                match side {
                    Side::Front => contents.head = inward,
                    Side::Back => contents.tail = inward,
                }
                contents.len = len;
            },
            None => self.remaining = Empty,
        }

        Some(node)
    }

    const fn len(&self) -> usize {
        self.remaining.len()
    }
}

impl<T> Clone for RawIter<T> {
    fn clone(&self) -> Self {
        RawIter::new(self.remaining)
    }
}

/// An owned iterator over the elements of a [`LinkedList`]. Elements that haven't been yielded are
/// dropped along with the iterator.
pub struct IntoIter<T> {
    pub(crate) list: LinkedList<T>,
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            list: self,
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.take_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.list.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.list.take_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: Debug> Debug for IntoIter<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.list).finish()
    }
}

/// A borrowed iterator over the elements of a [`LinkedList`], front to back. See
/// [`LinkedList::iter`].
pub struct Iter<'a, T> {
    pub(crate) raw: RawIter<T>,
    pub(crate) _phantom: PhantomData<&'a T>,
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            raw: RawIter::new(self.state),
            _phantom: PhantomData,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.raw.take(Side::Front).map(NodePtr::value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.raw.len(), Some(self.raw.len()))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        self.raw.take(Side::Back).map(NodePtr::value)
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter {
            raw: self.raw.clone(),
            _phantom: PhantomData,
        }
    }
}

/// A borrowed iterator over mutable references to the elements of a [`LinkedList`]. See
/// [`LinkedList::iter_mut`].
pub struct IterMut<'a, T> {
    pub(crate) raw: RawIter<T>,
    pub(crate) _phantom: PhantomData<&'a mut T>,
}

impl<'a, T> IntoIterator for &'a mut LinkedList<T> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut {
            raw: RawIter::new(self.state),
            _phantom: PhantomData,
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        // Each node leaves the range as it is yielded, so no two references alias.
        self.raw.take(Side::Front).map(NodePtr::value_mut)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.raw.len(), Some(self.raw.len()))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<&'a mut T> {
        self.raw.take(Side::Back).map(NodePtr::value_mut)
    }
}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {}

impl<'a, T> FusedIterator for IterMut<'a, T> {}
