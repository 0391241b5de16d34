use std::fmt::{self, Debug, Formatter};
use std::ptr;

use derive_more::IsVariant;

use crate::collections::linked::list::{LinkedList, ListState, NodePtr};

/// A read-only position within a [`LinkedList`], supporting bi-directional traversal. See
/// [`LinkedList::cursor_front`], [`LinkedList::cursor_back`] and [`LinkedList::cursor_end`].
///
/// Two cursors compare equal when they point to the same position of the same list.
pub struct Cursor<'a, T> {
    pub(crate) list: &'a LinkedList<T>,
    pub(crate) pos: Position<T>,
}

#[derive(IsVariant)]
pub(crate) enum Position<T> {
    /// The position one past the last node, which is also the only position of an empty list.
    End,
    Node(NodePtr<T>),
}

use Position::*;

impl<'a, T> Cursor<'a, T> {
    pub(crate) const fn new(list: &'a LinkedList<T>, pos: Position<T>) -> Cursor<'a, T> {
        Cursor {
            list,
            pos,
        }
    }

    /// Returns the element at the cursor's position, or [`None`] at the end position.
    pub fn current(&self) -> Option<&'a T> {
        match self.pos {
            End => None,
            Node(ptr) => Some(ptr.value()),
        }
    }

    /// Returns true if the cursor is at the end position.
    pub fn is_end(&self) -> bool {
        self.pos.is_end()
    }

    /// Moves the cursor to the next position. Moving forward from the last node reaches the end
    /// position, and moving forward from the end position wraps to the first node.
    pub fn move_next(&mut self) -> &mut Self {
        self.pos = self.pos.next(&self.list.state);
        self
    }

    /// Moves the cursor to the previous position. Moving back from the first node reaches the end
    /// position, and moving back from the end position wraps to the last node.
    pub fn move_prev(&mut self) -> &mut Self {
        self.pos = self.pos.prev(&self.list.state);
        self
    }

    /// Returns the element that [`move_next`](Cursor::move_next) would move to, if any.
    pub fn peek_next(&self) -> Option<&'a T> {
        self.pos.next(&self.list.state).value()
    }

    /// Returns the element that [`move_prev`](Cursor::move_prev) would move to, if any.
    pub fn peek_prev(&self) -> Option<&'a T> {
        self.pos.prev(&self.list.state).value()
    }
}

impl<T> Position<T> {
    pub fn next(self, state: &ListState<T>) -> Position<T> {
        match self {
            End => state.front_pos(),
            Node(ptr) => match ptr.next() {
                Some(next) => Node(*next),
                None => End,
            },
        }
    }

    pub fn prev(self, state: &ListState<T>) -> Position<T> {
        match self {
            End => state.back_pos(),
            Node(ptr) => match ptr.prev() {
                Some(prev) => Node(*prev),
                None => End,
            },
        }
    }

    pub fn value<'a>(self) -> Option<&'a T> {
        match self {
            End => None,
            Node(ptr) => Some(ptr.value()),
        }
    }
}

impl<T> Clone for Position<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Position<T> {}

impl<T> PartialEq for Position<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (End, End) => true,
            (Node(a), Node(b)) => a == b,
            _ => false,
        }
    }
}

impl<T> Eq for Position<T> {}

impl<'a, T> Clone for Cursor<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for Cursor<'a, T> {}

impl<'a, T> PartialEq for Cursor<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.list, other.list) && self.pos == other.pos
    }
}

impl<'a, T> Eq for Cursor<'a, T> {}

impl<'a, T: Debug> Debug for Cursor<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cursor")
            .field(&self.current())
            .finish()
    }
}
