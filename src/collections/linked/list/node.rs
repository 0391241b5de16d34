use std::alloc::{self, Layout};
use std::ptr::NonNull;

use tracing::debug;

use crate::util::error::{AllocFailure, PushError};

pub(crate) type Link<T> = Option<NodePtr<T>>;

/// A non-owning handle to a heap-allocated [`Node`]. The list holding the chain is the only owner;
/// handles are freely copied into cursors and iterators, but a node is only ever reclaimed through
/// [`NodePtr::take_node`].
#[derive(Debug)]
pub(crate) struct NodePtr<T>(NonNull<Node<T>>);

pub(crate) struct Node<T> {
    pub value: T,
    pub prev: Link<T>,
    pub next: Link<T>,
}

// SAFETY (for every dereference below): A NodePtr is only ever created by try_from_node and is
// only used while the list that owns the node is borrowed, so the pointee is a live, properly
// aligned Node<T>. The returned lifetimes are bounded by the borrow of that list at each call site.
impl<T> NodePtr<T> {
    /// Moves `node` into a new allocation. If the allocator can't provide one, the node's value is
    /// handed back inside the error and nothing is leaked.
    pub fn try_from_node(node: Node<T>) -> Result<NodePtr<T>, PushError<T>> {
        let layout = Self::layout();
        // SAFETY: A Node always holds two links, so its layout is never zero-sized.
        let raw = unsafe { alloc::alloc(layout) }.cast::<Node<T>>();

        match NonNull::new(raw) {
            Some(ptr) => {
                // SAFETY: ptr was just allocated with the layout of a Node<T>.
                unsafe { ptr.write(node) }
                Ok(NodePtr(ptr))
            },
            None => {
                debug!(size = layout.size(), "list node allocation failed");
                Err(PushError {
                    value: node.value,
                    reason: AllocFailure { layout }.into(),
                })
            },
        }
    }

    pub fn value<'a>(self) -> &'a T {
        // SAFETY: See above.
        unsafe { &(*self.0.as_ptr()).value }
    }

    pub fn value_mut<'a>(self) -> &'a mut T {
        // SAFETY: See above. Mutable access is only handed out through a mutable borrow of the
        // owning list.
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    pub fn prev<'a>(self) -> &'a Link<T> {
        // SAFETY: See above.
        unsafe { &(*self.0.as_ptr()).prev }
    }

    pub fn prev_mut<'a>(self) -> &'a mut Link<T> {
        // SAFETY: See above.
        unsafe { &mut (*self.0.as_ptr()).prev }
    }

    pub fn next<'a>(self) -> &'a Link<T> {
        // SAFETY: See above.
        unsafe { &(*self.0.as_ptr()).next }
    }

    pub fn next_mut<'a>(self) -> &'a mut Link<T> {
        // SAFETY: See above.
        unsafe { &mut (*self.0.as_ptr()).next }
    }

    /// Moves the node back out of its allocation and frees it.
    ///
    /// # Safety
    /// The node must still be allocated and must not be accessed through any other handle after
    /// this call.
    pub unsafe fn take_node(self) -> Node<T> {
        // SAFETY: The caller guarantees that this is the last use of a node created by
        // try_from_node. The value is read out exactly once before the memory is released with the
        // layout it was allocated with.
        unsafe {
            let node = self.0.read();
            alloc::dealloc(self.0.as_ptr().cast(), Self::layout());
            node
        }
    }

    const fn layout() -> Layout {
        Layout::new::<Node<T>>()
    }
}

impl<T> Clone for NodePtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodePtr<T> {}

impl<T> PartialEq for NodePtr<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for NodePtr<T> {}
