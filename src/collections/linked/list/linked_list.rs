use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem;

use derive_more::IsVariant;

use super::{Iter, IterMut, Length, Node, NodePtr, ONE};
use crate::collections::linked::cursor::{Cursor, CursorMut, Position};
#[doc(inline)]
pub use crate::util::error::{
    AllocFailure, CapacityOverflow, EmptyContainerAccess, PushError, TryReserveError,
};
use crate::util::fmt::DebugEntries;
use crate::util::option::OptionExtension;
use crate::util::result::{ResultExtension, infallible};

/// A list with links in both directions. See also: [`Cursor`] and [`CursorMut`] for bi-directional
/// traversal and for insertion or removal at an arbitrary position.
///
/// # Cost of each operation
/// `n` is the length of this list and `m` the length of the list passed to `append`.
///
/// | Operation | Cost |
/// |-|-|
/// | `len`, `is_empty` | constant |
/// | `front`, `back` and their `_mut` forms | constant |
/// | `push_front`, `push_back` | constant, one allocation |
/// | `pop_front`, `pop_back` | constant, one deallocation |
/// | `CursorMut::insert_before` | constant, one allocation |
/// | `CursorMut::remove_current` | constant, one deallocation |
/// | `append` | constant, independent of `m` |
/// | `clear`, `clone`, `contains` | linear in `n` |
///
/// No operation other than `clone` copies or moves an element to make room for another; every
/// structural change is a constant number of link updates.
pub struct LinkedList<T> {
    pub(crate) state: ListState<T>,
    pub(crate) _phantom: PhantomData<Box<Node<T>>>,
}

#[derive(Default, IsVariant)]
pub(crate) enum ListState<T> {
    #[default]
    Empty,
    Full(ListContents<T>),
}

use ListState::*;

pub(crate) struct ListContents<T> {
    pub len: Length,
    pub head: NodePtr<T>,
    pub tail: NodePtr<T>,
}

impl<T> LinkedList<T> {
    /// An empty list. Nothing is allocated until the first push.
    ///
    /// # Examples
    /// ```
    /// # use ds_collections::collections::linked::LinkedList;
    /// let list: LinkedList<u8> = LinkedList::new();
    /// assert!(list.is_empty());
    /// ```
    pub const fn new() -> LinkedList<T> {
        LinkedList {
            state: Empty,
            _phantom: PhantomData,
        }
    }

    /// The number of elements currently linked into the list.
    pub const fn len(&self) -> usize {
        self.state.len()
    }

    /// Whether the list holds no nodes at all.
    pub const fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns a reference to the first element in the list.
    ///
    /// # Panics
    /// Panics if the list is empty. See [`LinkedList::try_front`] for a non-panicking version.
    pub fn front(&self) -> &T {
        self.try_front().throw()
    }

    /// Returns a reference to the first element in the list, or [`EmptyContainerAccess`] if there
    /// isn't one.
    pub fn try_front(&self) -> Result<&T, EmptyContainerAccess> {
        match &self.state {
            Empty => Err(EmptyContainerAccess),
            Full(ListContents { head, .. }) => Ok(head.value()),
        }
    }

    /// Returns a mutable reference to the first element in the list.
    ///
    /// # Panics
    /// Panics if the list is empty.
    pub fn front_mut(&mut self) -> &mut T {
        self.try_front_mut().throw()
    }

    pub fn try_front_mut(&mut self) -> Result<&mut T, EmptyContainerAccess> {
        match &mut self.state {
            Empty => Err(EmptyContainerAccess),
            Full(ListContents { head, .. }) => Ok(head.value_mut()),
        }
    }

    /// Returns a reference to the last element in the list.
    ///
    /// # Panics
    /// Panics if the list is empty. See [`LinkedList::try_back`] for a non-panicking version.
    pub fn back(&self) -> &T {
        self.try_back().throw()
    }

    /// Returns a reference to the last element in the list, or [`EmptyContainerAccess`] if there
    /// isn't one.
    pub fn try_back(&self) -> Result<&T, EmptyContainerAccess> {
        match &self.state {
            Empty => Err(EmptyContainerAccess),
            Full(ListContents { tail, .. }) => Ok(tail.value()),
        }
    }

    /// Returns a mutable reference to the last element in the list.
    ///
    /// # Panics
    /// Panics if the list is empty.
    pub fn back_mut(&mut self) -> &mut T {
        self.try_back_mut().throw()
    }

    pub fn try_back_mut(&mut self) -> Result<&mut T, EmptyContainerAccess> {
        match &mut self.state {
            Empty => Err(EmptyContainerAccess),
            Full(ListContents { tail, .. }) => Ok(tail.value_mut()),
        }
    }

    /// Links `value` in as the new head of the list.
    ///
    /// # Panics
    /// Panics if the length of the list would overflow a [`usize`]. If the node can't be
    /// allocated, [`handle_alloc_error`](std::alloc::handle_alloc_error) is called instead. See
    /// [`LinkedList::try_push_front`] for a version that reports both.
    ///
    /// # Examples
    /// ```
    /// # use ds_collections::collections::linked::LinkedList;
    /// let mut list = LinkedList::from([1, 2]);
    /// list.push_front(0);
    /// assert_eq!(*list.front(), 0);
    /// assert_eq!(*list.back(), 2);
    /// assert_eq!(list.len(), 3);
    /// ```
    pub fn push_front(&mut self, value: T) {
        infallible(self.try_push_front(value).map_err(PushError::into_reason))
    }

    /// Links `value` in as the new head of the list, or hands it back inside a
    /// [`PushError`] if the length would overflow or the node can't be allocated. The list is left
    /// untouched on failure.
    pub fn try_push_front(&mut self, value: T) -> Result<(), PushError<T>> {
        match &mut self.state {
            Empty => self.state = ListState::try_single(value)?,
            Full(contents) => {
                let head = contents.head;
                contents.try_insert_before(head, value)?;
            },
        }
        Ok(())
    }

    /// Links `value` in as the new tail of the list.
    ///
    /// # Panics
    /// Panics if the length of the list would overflow a [`usize`]. If the node can't be
    /// allocated, [`handle_alloc_error`](std::alloc::handle_alloc_error) is called instead.
    pub fn push_back(&mut self, value: T) {
        infallible(self.try_push_back(value).map_err(PushError::into_reason))
    }

    /// Links `value` in as the new tail of the list, or hands it back inside a
    /// [`PushError`] on failure. The list is left untouched on failure.
    pub fn try_push_back(&mut self, value: T) -> Result<(), PushError<T>> {
        match &mut self.state {
            Empty => self.state = ListState::try_single(value)?,
            Full(contents) => contents.try_push_back(value)?,
        }
        Ok(())
    }

    /// Removes and drops the first element of the list. The value isn't returned, read it with
    /// [`front`](LinkedList::front) beforehand if it is needed.
    ///
    /// # Panics
    /// Panics if the list is empty. See [`LinkedList::try_pop_front`] for a non-panicking version.
    pub fn pop_front(&mut self) {
        self.try_pop_front().throw()
    }

    /// Removes and drops the first element of the list, or returns [`EmptyContainerAccess`] if the
    /// list is empty.
    pub fn try_pop_front(&mut self) -> Result<(), EmptyContainerAccess> {
        self.take_front().map(drop).ok_or(EmptyContainerAccess)
    }

    /// Removes and drops the last element of the list. The value isn't returned, read it with
    /// [`back`](LinkedList::back) beforehand if it is needed.
    ///
    /// # Panics
    /// Panics if the list is empty. See [`LinkedList::try_pop_back`] for a non-panicking version.
    pub fn pop_back(&mut self) {
        self.try_pop_back().throw()
    }

    /// Removes and drops the last element of the list, or returns [`EmptyContainerAccess`] if the
    /// list is empty.
    pub fn try_pop_back(&mut self) -> Result<(), EmptyContainerAccess> {
        self.take_back().map(drop).ok_or(EmptyContainerAccess)
    }

    /// Drops every element of the list, leaving it empty.
    pub fn clear(&mut self) {
        if let Full(contents) = mem::take(&mut self.state) {
            // SAFETY: The chain has just been detached from the list, so nothing else refers to it.
            unsafe { contents.drop_chain(); }
        }
    }

    /// Moves every element of `other` onto the back of self, leaving `other` empty.
    ///
    /// # Panics
    /// Panics if the combined length would overflow a [`usize`]. Neither list is modified in that
    /// case.
    pub fn append(&mut self, other: &mut LinkedList<T>) {
        let theirs = match &other.state {
            Empty => return,
            Full(contents) => *contents,
        };

        match &mut self.state {
            Empty => mem::swap(&mut self.state, &mut other.state),
            Full(ours) => {
                let len = ours.len.checked_add(theirs.len.get()).ok_or(CapacityOverflow).throw();

                *ours.tail.next_mut() = Some(theirs.head);
                *theirs.head.prev_mut() = Some(ours.tail);
                ours.tail = theirs.tail;
                ours.len = len;

                other.state = Empty;
            },
        }
    }

    /// Returns a read-only cursor pointing at the first element, or at the end position if the list
    /// is empty.
    ///
    /// # Examples
    /// ```
    /// # use ds_collections::collections::linked::LinkedList;
    /// let list = LinkedList::from([1, 2]);
    /// let mut cursor = list.cursor_front();
    /// assert_eq!(cursor.current(), Some(&1));
    /// cursor.move_next().move_next();
    /// assert!(cursor.is_end());
    /// assert_eq!(cursor, list.cursor_end());
    /// ```
    pub fn cursor_front(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.state.front_pos())
    }

    /// Returns a read-only cursor pointing at the last element, or at the end position if the list
    /// is empty.
    pub fn cursor_back(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.state.back_pos())
    }

    /// Returns a read-only cursor pointing at the end position, one past the last element.
    pub fn cursor_end(&self) -> Cursor<'_, T> {
        Cursor::new(self, Position::End)
    }

    /// Returns a mutable cursor pointing at the first element, or at the end position if the list
    /// is empty.
    ///
    /// # Examples
    /// ```
    /// # use ds_collections::collections::linked::LinkedList;
    /// let mut list = LinkedList::from([1, 2, 3]);
    /// let mut cursor = list.cursor_front_mut();
    /// cursor.move_next();
    /// cursor.insert_before(99);
    /// assert_eq!(cursor.current(), Some(&99));
    /// assert!(list.iter().eq(&[1, 99, 2, 3]));
    /// ```
    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, T> {
        let pos = self.state.front_pos();
        CursorMut::new(self, pos)
    }

    /// Returns a mutable cursor pointing at the last element, or at the end position if the list is
    /// empty.
    pub fn cursor_back_mut(&mut self) -> CursorMut<'_, T> {
        let pos = self.state.back_pos();
        CursorMut::new(self, pos)
    }

    /// Returns a mutable cursor pointing at the end position, one past the last element. Inserting
    /// here appends to the list.
    pub fn cursor_end_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self, Position::End)
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Removes the first element and returns it, if the list isn't empty.
    pub(crate) fn take_front(&mut self) -> Option<T> {
        let head = self.state.contents()?.head;
        // SAFETY: head is a node of this list.
        Some(unsafe { self.state.unlink(head) })
    }

    /// Removes the last element and returns it, if the list isn't empty.
    pub(crate) fn take_back(&mut self) -> Option<T> {
        let tail = self.state.contents()?.tail;
        // SAFETY: tail is a node of this list.
        Some(unsafe { self.state.unlink(tail) })
    }
}

impl<T: PartialEq> LinkedList<T> {
    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|i| i == item)
    }
}

impl<T> LinkedList<T> {
    /// Walks the whole chain in both directions, checking every structural invariant of the list.
    #[cfg(test)]
    pub(crate) fn verify_links(&self) {
        match self.state {
            Empty => {},
            Full(ListContents { len, head, tail }) => {
                assert!(head.prev().is_none(), "The head shouldn't have a previous node.");
                assert!(tail.next().is_none(), "The tail shouldn't have a next node.");

                let mut count = 1;
                let mut curr = head;
                while let Some(next) = *curr.next() {
                    assert!(*next.prev() == Some(curr), "Back links should mirror forward links.");
                    curr = next;
                    count += 1;
                }
                assert!(curr == tail, "Walking forward from the head should reach the tail.");
                assert_eq!(count, len.get(), "The stored length should match the chain.");
            },
        }
    }
}

impl<T> ListContents<T> {
    /// Creates a new node holding `value` and splices it in directly before `next`, updating the
    /// head if `next` was the head. Returns the new node.
    ///
    /// The length is checked and the node allocated before any link is touched, so on failure the
    /// chain is exactly as it was.
    pub fn try_insert_before(
        &mut self,
        next: NodePtr<T>,
        value: T,
    ) -> Result<NodePtr<T>, PushError<T>> {
        let Some(len) = self.len.checked_add(1) else {
            return Err(PushError {
                value,
                reason: CapacityOverflow.into(),
            });
        };
        let prev = *next.prev();

        let node = NodePtr::try_from_node(Node {
            value,
            prev,
            next: Some(next),
        })?;

        match prev {
            Some(prev) => *prev.next_mut() = Some(node),
            None => self.head = node,
        }
        *next.prev_mut() = Some(node);
        self.len = len;

        Ok(node)
    }

    pub fn try_push_back(&mut self, value: T) -> Result<(), PushError<T>> {
        let Some(len) = self.len.checked_add(1) else {
            return Err(PushError {
                value,
                reason: CapacityOverflow.into(),
            });
        };

        let node = NodePtr::try_from_node(Node {
            value,
            prev: Some(self.tail),
            next: None,
        })?;

        *self.tail.next_mut() = Some(node);
        self.tail = node;
        self.len = len;
        Ok(())
    }

    pub fn try_wrap_one(value: T) -> Result<ListContents<T>, PushError<T>> {
        let node = NodePtr::try_from_node(Node {
            value,
            prev: None,
            next: None,
        })?;

        Ok(ListContents {
            len: ONE,
            head: node,
            tail: node,
        })
    }

    /// Frees every node in the chain, front to back.
    ///
    /// # Safety
    /// The chain must no longer be reachable from any list, cursor or iterator.
    pub unsafe fn drop_chain(self) {
        let mut curr = Some(self.head);
        while let Some(ptr) = curr {
            // SAFETY: Each node is visited exactly once and the caller guarantees exclusive access.
            let node = unsafe { ptr.take_node() };
            curr = node.next;
        }
    }
}

impl<T> ListState<T> {
    pub fn try_single(value: T) -> Result<ListState<T>, PushError<T>> {
        ListContents::try_wrap_one(value).map(Full)
    }

    pub const fn len(&self) -> usize {
        match self {
            Empty => 0,
            Full(ListContents { len, .. }) => len.get(),
        }
    }

    pub const fn contents(&self) -> Option<&ListContents<T>> {
        match self {
            Empty => None,
            Full(contents) => Some(contents),
        }
    }

    pub fn front_pos(&self) -> Position<T> {
        match self {
            Empty => Position::End,
            Full(ListContents { head, .. }) => Position::Node(*head),
        }
    }

    pub fn back_pos(&self) -> Position<T> {
        match self {
            Empty => Position::End,
            Full(ListContents { tail, .. }) => Position::Node(*tail),
        }
    }

    /// Unlinks `ptr` from the chain, frees its node and returns the value it held.
    ///
    /// # Safety
    /// `ptr` must be a node belonging to this list.
    pub unsafe fn unlink(&mut self, ptr: NodePtr<T>) -> T {
        let contents = match self {
            Full(contents) => contents,
            // SAFETY: The caller guarantees that ptr is part of this list, so it can't be empty.
            Empty => unsafe { None::<&mut ListContents<T>>.unreachable() },
        };

        // SAFETY: The caller guarantees that ptr belongs to this list, and it is unlinked below so
        // that nothing refers to it afterwards.
        let node = unsafe { ptr.take_node() };

        match contents.len.checked_sub(1) {
            Some(new_len) => {
                match node.prev {
                    Some(prev) => *prev.next_mut() = node.next,
                    // SAFETY: The list holds at least two nodes, so the head has a successor.
                    None => contents.head = unsafe { node.next.unreachable() },
                }
                match node.next {
                    Some(next) => *next.prev_mut() = node.prev,
                    // SAFETY: The list holds at least two nodes, so the tail has a predecessor.
                    None => contents.tail = unsafe { node.prev.unreachable() },
                }
                contents.len = new_len;
            },
            None => *self = Empty,
        }

        node.value
    }
}

impl<T, const N: usize> From<[T; N]> for LinkedList<T> {
    /// Creates a LinkedList holding the elements of the array in order.
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

// SAFETY: A LinkedList exclusively owns its nodes, so sending it sends every T with it.
unsafe impl<T: Send> Send for LinkedList<T> {}
// SAFETY: LinkedList's safe API obeys all rules of the borrow checker, so no interior mutability
// occurs. This means that LinkedList<T> can safely implement Sync when T: Sync.
unsafe impl<T: Sync> Sync for LinkedList<T> {}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for item in self.iter() {
            item.hash(state);
        }
    }
}

impl<T> Clone for ListContents<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ListContents<T> {}

impl<T> Clone for ListState<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ListState<T> {}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedList")
            .field("contents", &DebugEntries(self.iter()))
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Debug> Display for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (index, item) in self.iter().enumerate() {
            if index != 0 {
                write!(f, ") -> (")?;
            }
            write!(f, "{item:?}")?;
        }
        write!(f, ")")
    }
}
