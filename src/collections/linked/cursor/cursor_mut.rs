use std::fmt::{self, Debug, Formatter};

use super::{Cursor, Position};
use crate::collections::linked::list::{LinkedList, ListState};
use crate::util::error::PushError;
use crate::util::option::OptionExtension;
use crate::util::result::infallible;

use Position::*;

/// A position within a [`LinkedList`] that allows the list to be modified around it. See
/// [`LinkedList::cursor_front_mut`], [`LinkedList::cursor_back_mut`] and
/// [`LinkedList::cursor_end_mut`].
///
/// Every modification made through a CursorMut takes `O(1)` time.
pub struct CursorMut<'a, T> {
    pub(crate) list: &'a mut LinkedList<T>,
    pub(crate) pos: Position<T>,
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) fn new(list: &'a mut LinkedList<T>, pos: Position<T>) -> CursorMut<'a, T> {
        CursorMut {
            list,
            pos,
        }
    }

    /// Returns the element at the cursor's position, or [`None`] at the end position.
    pub fn current(&self) -> Option<&T> {
        self.pos.value()
    }

    /// Returns a mutable reference to the element at the cursor's position, or [`None`] at the end
    /// position.
    pub fn current_mut(&mut self) -> Option<&mut T> {
        match self.pos {
            End => None,
            Node(ptr) => Some(ptr.value_mut()),
        }
    }

    /// Returns true if the cursor is at the end position.
    pub fn is_end(&self) -> bool {
        self.pos.is_end()
    }

    /// Returns the length of the underlying list.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Moves the cursor to the next position, wrapping from the end position to the first node.
    pub fn move_next(&mut self) -> &mut Self {
        self.pos = self.pos.next(&self.list.state);
        self
    }

    /// Moves the cursor to the previous position, wrapping from the end position to the last node.
    pub fn move_prev(&mut self) -> &mut Self {
        self.pos = self.pos.prev(&self.list.state);
        self
    }

    /// Returns a read-only cursor at the same position, borrowing from this one.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(&*self.list, self.pos)
    }

    /// Inserts `value` immediately before the cursor's position and moves the cursor onto the new
    /// element. At the end position this appends to the list, exactly like
    /// [`LinkedList::push_back`].
    ///
    /// # Panics
    /// Panics if the length of the list would overflow a [`usize`]. If the node can't be
    /// allocated, [`handle_alloc_error`](std::alloc::handle_alloc_error) is called instead. The
    /// list is unchanged in either case.
    ///
    /// # Examples
    /// ```
    /// # use ds_collections::collections::linked::LinkedList;
    /// let mut list = LinkedList::from([1, 3]);
    /// let mut cursor = list.cursor_end_mut();
    /// cursor.insert_before(4);
    /// cursor.move_prev().insert_before(2);
    /// assert!(list.iter().eq(&[1, 2, 3, 4]));
    /// ```
    pub fn insert_before(&mut self, value: T) -> &mut Self {
        infallible(self.try_insert_before(value).map(drop).map_err(PushError::into_reason));
        self
    }

    /// Inserts `value` immediately before the cursor's position, like
    /// [`insert_before`](CursorMut::insert_before), but hands the value back inside a
    /// [`PushError`] if the list can't grow. Neither the list nor the cursor move on failure.
    pub fn try_insert_before(&mut self, value: T) -> Result<&mut Self, PushError<T>> {
        self.pos = match self.pos {
            End => {
                self.list.try_push_back(value)?;
                self.list.state.back_pos()
            },
            Node(ptr) => {
                let contents = match &mut self.list.state {
                    ListState::Full(contents) => Some(contents),
                    ListState::Empty => None,
                };
                // SAFETY: The cursor points at a node of this list, so the list isn't empty.
                let contents = unsafe { contents.unreachable() };
                Node(contents.try_insert_before(ptr, value)?)
            },
        };
        Ok(self)
    }

    /// Removes the element at the cursor's position and returns it, moving the cursor to the
    /// following position. Returns [`None`] without moving at the end position.
    ///
    /// # Examples
    /// ```
    /// # use ds_collections::collections::linked::LinkedList;
    /// let mut list = LinkedList::from([1, 2, 3]);
    /// let mut cursor = list.cursor_front_mut();
    /// cursor.move_next();
    /// assert_eq!(cursor.remove_current(), Some(2));
    /// assert_eq!(cursor.current(), Some(&3));
    /// assert!(list.iter().eq(&[1, 3]));
    /// ```
    pub fn remove_current(&mut self) -> Option<T> {
        let ptr = match self.pos {
            End => return None,
            Node(ptr) => ptr,
        };

        let next = self.pos.next(&self.list.state);
        // SAFETY: ptr is a node of this list, and the cursor is moved off of it below.
        let value = unsafe { self.list.state.unlink(ptr) };
        self.pos = next;

        Some(value)
    }
}

impl<'a, T: Debug> Debug for CursorMut<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CursorMut")
            .field(&self.current())
            .finish()
    }
}
