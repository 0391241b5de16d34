//! Positions within a [`LinkedList`](super::LinkedList).
//!
//! A cursor is a borrow of a list plus a position: either a node of the list, or the single "end"
//! position one past the last node. Because a cursor borrows its list, the list can't be modified
//! through any other path while the cursor exists, so a cursor never refers to a removed node.
//! [`CursorMut::remove_current`] is the only way to remove the node a cursor points at, and it moves
//! the cursor on to the following position.

mod cursor;
mod cursor_mut;
mod tests;

pub use cursor::*;
pub use cursor_mut::*;
