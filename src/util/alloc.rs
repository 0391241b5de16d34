use std::cell::Cell;
use std::rc::Rc;

/// A zero-sized element type, used to check that storage is never allocated for it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZeroSizedType;

/// An element which increments a shared counter every time an instance is dropped. Clones share
/// the same counter.
#[derive(Debug, Clone)]
pub struct CountedDrop(pub Rc<Cell<usize>>);

impl CountedDrop {
    pub fn new() -> CountedDrop {
        CountedDrop(Rc::new(Cell::new(0)))
    }

    /// Returns the number of drops recorded so far.
    pub fn count(&self) -> usize {
        self.0.get()
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

/// An element whose [`Clone`] implementation panics once the shared budget of clones is spent.
#[cfg(feature = "contiguous")]
#[derive(Debug)]
pub struct LimitedClone {
    pub value: usize,
    pub budget: Rc<Cell<usize>>,
}

#[cfg(feature = "contiguous")]
impl Clone for LimitedClone {
    fn clone(&self) -> Self {
        let remaining = self.budget.get();
        if remaining == 0 {
            panic!("clone budget exhausted");
        }
        self.budget.set(remaining - 1);
        LimitedClone {
            value: self.value,
            budget: self.budget.clone(),
        }
    }
}
