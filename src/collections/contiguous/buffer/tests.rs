#![cfg(test)]

use std::mem::MaybeUninit;
use std::ptr::NonNull;

use super::*;
use crate::util::alloc::ZeroSizedType;
use crate::util::error::{CapacityOverflow, TryReserveError};
use crate::util::panic::assert_panics;

fn write_all(buf: &mut Buffer<usize>, count: usize) {
    for i in 0..count {
        // SAFETY: count is never more than the capacity of the buffer in these tests.
        unsafe { buf.ptr.add(i).write(MaybeUninit::new(i * 10)) }
    }
}

fn read(buf: &Buffer<usize>, index: usize) -> usize {
    // SAFETY: Only slots written by write_all are read.
    unsafe { buf.ptr.add(index).read().assume_init() }
}

#[test]
fn test_new_does_not_allocate() {
    let buf = Buffer::<u64>::new();
    assert_eq!(buf.cap(), 0);
    assert_eq!(buf.ptr, NonNull::dangling(), "An empty buffer should hold a dangling pointer.");

    let buf = Buffer::<u64>::with_cap(0);
    assert_eq!(buf.ptr, NonNull::dangling());
}

#[test]
fn test_realloc_preserves_live_slots() {
    let mut buf = Buffer::<usize>::with_cap(4);
    write_all(&mut buf, 4);

    let old_ptr = buf.ptr;
    buf.realloc(4, 4);
    assert_eq!(buf.ptr, old_ptr, "Reallocating to the same capacity shouldn't move anything.");

    buf.realloc(8, 4);
    assert_eq!(buf.cap(), 8);
    for i in 0..4 {
        assert_eq!(read(&buf, i), i * 10, "Growing should keep every live slot in order.");
    }

    buf.realloc(2, 4);
    assert_eq!(buf.cap(), 2);
    for i in 0..2 {
        assert_eq!(read(&buf, i), i * 10, "Shrinking should keep the slots that still fit.");
    }
}

#[test]
fn test_capacity_overflow() {
    let mut buf = Buffer::<u64>::with_cap(3);
    let old_ptr = buf.ptr;

    assert_eq!(
        buf.try_realloc(isize::MAX as usize, 0),
        Err(TryReserveError::CapacityOverflow(CapacityOverflow)),
    );
    assert_eq!(buf.cap(), 3, "A failed reallocation should leave the buffer untouched.");
    assert_eq!(buf.ptr, old_ptr);

    assert!(Buffer::<u64>::try_with_cap(usize::MAX).is_err_and(|err| err.is_capacity_overflow()));
    assert_panics!({ Buffer::<u64>::with_cap(usize::MAX); });
}

#[test]
fn test_zst_support() {
    let mut buf = Buffer::<ZeroSizedType>::with_cap(10);
    let old_ptr = buf.ptr;

    buf.realloc(usize::MAX, 10);
    assert_eq!(buf.cap(), usize::MAX);
    assert_eq!(buf.ptr, old_ptr, "Zero-sized types should never be allocated.");
}
