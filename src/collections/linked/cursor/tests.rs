#![cfg(test)]

use super::*;
use crate::collections::linked::LinkedList;
use crate::util::alloc::CountedDrop;

#[test]
fn test_insert_before_node() {
    let mut list = LinkedList::from([1, 2, 3]);

    let mut cursor = list.cursor_front_mut();
    cursor.move_next();
    assert_eq!(cursor.current(), Some(&2));

    cursor.insert_before(99);
    assert_eq!(cursor.current(), Some(&99), "The cursor should point at the new element.");
    assert_eq!(cursor.len(), 4);

    list.verify_links();
    assert!(list.iter().eq(&[1, 99, 2, 3]));
}

#[test]
fn test_insert_before_front_and_end() {
    let mut list = LinkedList::from([2]);

    list.cursor_front_mut().insert_before(1);
    list.verify_links();
    assert_eq!(*list.front(), 1, "Inserting before the first node should update the front.");

    let mut cursor = list.cursor_end_mut();
    cursor.insert_before(3);
    assert_eq!(cursor.current(), Some(&3));
    cursor.move_next();
    assert!(cursor.is_end(), "Inserting at the end position should append.");

    list.verify_links();
    assert!(list.iter().eq(&[1, 2, 3]));

    let mut empty = LinkedList::new();
    empty.cursor_front_mut().insert_before('a');
    empty.verify_links();
    assert!(empty.iter().eq(&['a']), "The front of an empty list is its end position.");
}

#[test]
fn test_remove_current() {
    let mut list = LinkedList::from([1, 2, 3, 4]);

    let mut cursor = list.cursor_front_mut();
    assert_eq!(cursor.remove_current(), Some(1));
    assert_eq!(cursor.current(), Some(&2), "The cursor should move to the following node.");

    cursor.move_next().move_next();
    assert_eq!(cursor.remove_current(), Some(4));
    assert!(cursor.is_end(), "Removing the last node should leave the cursor at the end.");
    assert_eq!(cursor.remove_current(), None, "Nothing can be removed at the end position.");

    list.verify_links();
    assert!(list.iter().eq(&[2, 3]));

    let mut cursor = list.cursor_back_mut();
    assert_eq!(cursor.remove_current(), Some(3));
    assert_eq!(cursor.remove_current(), None);
    cursor.move_prev();
    assert_eq!(cursor.remove_current(), Some(2));
    assert!(cursor.is_empty());
    assert!(list.is_empty());
    assert!(list.state.is_empty());
}

#[test]
fn test_remove_drops_nothing_else() {
    let counter = CountedDrop::new();
    let mut list: LinkedList<_> = std::iter::repeat_with(|| counter.clone()).take(3).collect();

    let mut cursor = list.cursor_front_mut();
    cursor.move_next();
    drop(cursor.remove_current());
    assert_eq!(counter.count(), 1, "Only the removed element should be dropped.");
    assert_eq!(list.len(), 2);
}

#[test]
fn test_traversal() {
    let list = LinkedList::from([1, 2, 3]);

    let mut cursor = list.cursor_front();
    assert_eq!(cursor.peek_prev(), None, "Nothing precedes the first element.");
    assert_eq!(cursor.peek_next(), Some(&2));

    cursor.move_next().move_next();
    assert_eq!(cursor.current(), Some(&3));
    assert_eq!(cursor, list.cursor_back());

    cursor.move_next();
    assert!(cursor.is_end());
    assert_eq!(cursor.current(), None);
    assert_eq!(cursor, list.cursor_end());
    assert_eq!(cursor.peek_prev(), Some(&3));

    cursor.move_next();
    assert_eq!(cursor, list.cursor_front(), "Moving past the end should wrap to the front.");

    cursor.move_prev();
    assert!(cursor.is_end(), "Moving back from the front should reach the end position.");
    cursor.move_prev();
    assert_eq!(cursor.current(), Some(&3));
}

#[test]
fn test_cursor_equality() {
    let a = LinkedList::from([1, 2]);
    let b = LinkedList::from([1, 2]);

    assert_eq!(a.cursor_front(), a.cursor_front());
    assert_ne!(a.cursor_front(), a.cursor_back());
    assert_ne!(
        a.cursor_end(),
        b.cursor_end(),
        "Cursors into different lists are never equal."
    );

    let empty = LinkedList::<u8>::new();
    assert_eq!(empty.cursor_front(), empty.cursor_end());
    assert_eq!(empty.cursor_back(), empty.cursor_end());
}

#[test]
fn test_current_mut() {
    let mut list = LinkedList::from([1, 2, 3]);

    let mut cursor = list.cursor_back_mut();
    if let Some(value) = cursor.current_mut() {
        *value = 30;
    }
    assert_eq!(cursor.as_cursor().peek_prev(), Some(&2));

    assert_eq!(*list.back(), 30);
}

#[test]
fn test_try_insert_before() {
    let mut list = LinkedList::from([1, 3]);

    let mut cursor = list.cursor_back_mut();
    assert!(cursor.try_insert_before(2).is_ok());
    assert_eq!(cursor.current(), Some(&2));

    cursor.move_next().move_next();
    assert!(cursor.is_end());
    let cursor = cursor.try_insert_before(4).map(|cursor| cursor.current().copied());
    assert_eq!(cursor.ok(), Some(Some(4)), "Inserting at the end position should append.");

    list.verify_links();
    assert!(list.iter().eq(&[1, 2, 3, 4]));
}
