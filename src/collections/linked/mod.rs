//! Linked collection types. Primarily revolves around [`LinkedList`] and its accompanying
//! [`Cursor`] and [`CursorMut`] types.

pub mod cursor;
pub mod list;

#[doc(inline)]
pub use cursor::{Cursor, CursorMut};
#[doc(inline)]
pub use list::LinkedList;
