#![cfg(test)]

use std::hash::{BuildHasher, RandomState};
use std::iter;
use std::mem;
use std::num::NonZero;

use proptest::prelude::*;

use super::*;
use crate::util::alloc::{CountedDrop, ZeroSizedType};
use crate::util::panic::assert_panics;

#[test]
fn test_literal_order() {
    let list = LinkedList::from([1, 2, 3]);
    list.verify_links();

    assert_eq!(list.len(), 3);
    assert!(
        list.iter().eq(&[1, 2, 3]),
        "Iterating front to back should yield the literal order."
    );
    assert!(
        list.iter().rev().eq(&[3, 2, 1]),
        "Iterating back to front should yield the reverse order."
    );
}

#[test]
fn test_push_front() {
    let mut list = LinkedList::from([1, 2]);
    list.push_front(0);
    list.verify_links();

    assert_eq!(*list.front(), 0);
    assert_eq!(*list.back(), 2);
    assert_eq!(list.len(), 3);
}

#[test]
fn test_push_and_pop() {
    let mut list = LinkedList::new();
    list.push_back(2);
    list.push_front(1);
    list.push_back(3);
    list.verify_links();
    assert!(list.iter().eq(&[1, 2, 3]));

    list.pop_front();
    assert_eq!(*list.front(), 2);
    list.pop_back();
    assert_eq!(*list.back(), 2);
    list.verify_links();

    assert_eq!(list.len(), 1);
    assert_eq!(list.front(), list.back(), "A single element is both the front and back.");

    list.pop_back();
    assert!(list.is_empty());
    assert!(list.state.is_empty(), "An empty list shouldn't keep a head or tail.");
}

#[test]
fn test_try_push() {
    let mut list = LinkedList::new();
    assert!(list.try_push_back(2).is_ok());
    assert!(list.try_push_front(1).is_ok());
    assert!(list.try_push_back(3).is_ok());
    list.verify_links();
    assert!(list.iter().eq(&[1, 2, 3]));
}

#[test]
fn test_try_push_length_overflow() {
    let mut list = LinkedList::from([5]);
    let intact = list.state;
    if let ListState::Full(contents) = &mut list.state {
        contents.len = Length(NonZero::<usize>::MAX);
    }

    let err = list.try_push_back(6).unwrap_err();
    assert_eq!(err.reason, TryReserveError::CapacityOverflow(CapacityOverflow));
    assert_eq!(err.into_value(), 6, "The rejected value should be handed back.");

    let err = list.try_push_front(4).unwrap_err();
    assert!(err.reason.is_capacity_overflow());

    let mut cursor = list.cursor_front_mut();
    let err = cursor.try_insert_before(4).unwrap_err();
    assert_eq!(err.into_value(), 4);
    assert_eq!(cursor.current(), Some(&5), "A failed insert shouldn't move the cursor.");

    assert_panics!({
        let mut full = LinkedList::from([5]);
        if let ListState::Full(contents) = &mut full.state {
            contents.len = Length(NonZero::<usize>::MAX);
        }
        full.push_back(6);
    });

    list.state = intact;
    list.verify_links();
    assert!(list.iter().eq(&[5]), "Failed pushes shouldn't touch the chain.");
}

#[test]
fn test_empty_access() {
    let mut list = LinkedList::<u8>::new();

    assert_eq!(list.try_front(), Err(EmptyContainerAccess));
    assert_eq!(list.try_back(), Err(EmptyContainerAccess));
    assert_eq!(list.try_front_mut(), Err(EmptyContainerAccess));
    assert_eq!(list.try_back_mut(), Err(EmptyContainerAccess));
    assert_eq!(list.try_pop_front(), Err(EmptyContainerAccess));
    assert_eq!(list.try_pop_back(), Err(EmptyContainerAccess));

    assert_panics!({ LinkedList::<u8>::new().front(); });
    assert_panics!({ LinkedList::<u8>::new().back(); });
    assert_panics!({ LinkedList::<u8>::new().pop_front() });
    assert_panics!({ LinkedList::<u8>::new().pop_back() });

    let mut list = LinkedList::from([1, 2, 3]);
    list.clear();
    assert_eq!(
        list.try_front(),
        Err(EmptyContainerAccess),
        "A cleared list should behave like a new one."
    );
    assert_eq!(list.try_pop_back(), Err(EmptyContainerAccess));
}

#[test]
fn test_front_and_back_mut() {
    let mut list = LinkedList::from([1, 2, 3]);
    *list.front_mut() = 10;
    *list.back_mut() = 30;

    assert!(list.iter().eq(&[10, 2, 30]));
}

#[test]
fn test_clone_independence() {
    let mut a = LinkedList::from([1, 2, 3]);
    let mut b = a.clone();
    b.verify_links();
    assert_eq!(a, b, "A clone should hold the same elements.");

    a.push_back(4);
    a.pop_front();
    assert!(b.iter().eq(&[1, 2, 3]), "Mutating the source shouldn't affect the clone.");

    b.clear();
    assert!(a.iter().eq(&[2, 3, 4]), "Mutating the clone shouldn't affect the source.");

    let mut c = LinkedList::from([9, 9]);
    c.clone_from(&a);
    assert_eq!(c, a, "clone_from should replace the previous contents.");
}

#[test]
fn test_move_semantics() {
    let mut a = LinkedList::from([1, 2, 3]);
    let mut b = mem::take(&mut a);

    assert!(b.iter().eq(&[1, 2, 3]), "The chain should be transferred in order.");
    assert!(a.is_empty(), "The source should be left empty.");
    assert_eq!(a.try_front(), Err(EmptyContainerAccess));

    a.push_back(5);
    a.verify_links();
    assert!(a.iter().eq(&[5]), "The source should remain usable.");

    b.push_front(0);
    assert!(b.iter().eq(&[0, 1, 2, 3]));
}

#[test]
fn test_append() {
    let mut a = LinkedList::from([1, 2]);
    let mut b = LinkedList::from([3, 4]);
    a.append(&mut b);
    a.verify_links();

    assert!(a.iter().eq(&[1, 2, 3, 4]));
    assert!(b.is_empty(), "The appended list should be left empty.");

    let mut empty = LinkedList::new();
    empty.append(&mut a);
    empty.verify_links();
    assert!(empty.iter().eq(&[1, 2, 3, 4]), "Appending to an empty list should take everything.");
    assert!(a.is_empty());

    empty.append(&mut LinkedList::new());
    assert_eq!(empty.len(), 4, "Appending an empty list shouldn't change anything.");
}

#[test]
fn test_iterators() {
    let mut list: LinkedList<usize> = (0..5).collect();

    for i in list.iter_mut() {
        *i *= 2;
    }
    assert!(list.iter().eq(&[0, 2, 4, 6, 8]), "List mutated by iterator should match.");

    let mut iter = list.iter();
    assert_eq!(iter.len(), 5);
    assert_eq!(iter.next(), Some(&0));
    assert_eq!(iter.next_back(), Some(&8));
    assert_eq!(iter.len(), 3);

    let mut iter = list.clone().into_iter();
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next_back(), Some(8));
    assert_eq!(iter.next_back(), Some(6));
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);

    let mut total = 0;
    for i in &list {
        total += i;
    }
    assert_eq!(total, 20);
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new();
    let list: LinkedList<_> = iter::repeat_with(|| counter.clone()).take(10).collect();
    drop(list);
    assert_eq!(counter.count(), 10, "10 elements should have been dropped.");

    let counter = CountedDrop::new();
    let mut list: LinkedList<_> = iter::repeat_with(|| counter.clone()).take(10).collect();
    list.pop_front();
    list.pop_back();
    assert_eq!(counter.count(), 2, "Popping should drop the removed elements.");
    list.clear();
    assert_eq!(counter.count(), 10, "Clearing should drop every remaining element.");

    let counter = CountedDrop::new();
    let list: LinkedList<_> = iter::repeat_with(|| counter.clone()).take(10).collect();
    let mut iter = list.into_iter();
    drop(iter.next());
    drop(iter);
    assert_eq!(counter.count(), 10, "Dropping an owned iterator should drop all elements.");
}

#[test]
fn test_zst_support() {
    let mut list = LinkedList::from([ZeroSizedType; 4]);
    list.push_back(ZeroSizedType);
    list.pop_front();
    list.verify_links();
    assert_eq!(list.len(), 4);
}

#[test]
fn test_equality_and_hash() {
    let list = LinkedList::from([0_usize, 1, 2]);
    assert_eq!(list, (0..3).collect::<LinkedList<_>>());
    assert_ne!(list, LinkedList::from([0, 1]));
    assert_ne!(list, LinkedList::from([0, 1, 3]));

    let state = RandomState::new();
    assert_eq!(
        state.hash_one(&list),
        state.hash_one(LinkedList::from([0_usize, 1, 2])),
        "Equal lists should produce the same hash."
    );
    assert!(list.contains(&2));
    assert!(!list.contains(&3));
}

#[test]
fn test_formatting() {
    let list = LinkedList::from([1, 2, 3]);
    assert_eq!(format!("{list}"), "(1) -> (2) -> (3)");
    assert_eq!(format!("{:?}", list), "LinkedList { contents: [1, 2, 3], len: 3 }");
    assert_eq!(format!("{}", LinkedList::<u8>::new()), "()");
}

#[derive(Debug, Clone)]
enum Op {
    PushFront(u8),
    PushBack(u8),
    PopFront,
    PopBack,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<u8>().prop_map(Op::PushFront),
        any::<u8>().prop_map(Op::PushBack),
        Just(Op::PopFront),
        Just(Op::PopBack),
    ]
}

proptest! {
    #[test]
    fn length_tracks_successful_operations(ops in prop::collection::vec(op(), 0..200)) {
        let mut list = LinkedList::new();
        let mut pushes = 0_usize;
        let mut pops = 0_usize;

        for op in ops {
            match op {
                Op::PushFront(value) => { list.push_front(value); pushes += 1; },
                Op::PushBack(value) => { list.push_back(value); pushes += 1; },
                Op::PopFront => if list.try_pop_front().is_ok() { pops += 1 },
                Op::PopBack => if list.try_pop_back().is_ok() { pops += 1 },
            }
        }

        list.verify_links();
        prop_assert_eq!(list.len(), pushes - pops);
        prop_assert_eq!(list.is_empty(), list.len() == 0);
        prop_assert_eq!(list.iter().count(), list.len());
    }

    #[test]
    fn collected_order_is_preserved(items in prop::collection::vec(any::<i32>(), 0..100)) {
        let list: LinkedList<i32> = items.iter().copied().collect();
        prop_assert!(list.iter().eq(items.iter()));
        prop_assert!(list.into_iter().rev().eq(items.into_iter().rev()));
    }
}
