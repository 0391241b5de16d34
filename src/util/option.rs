use std::hint;

pub(crate) trait OptionExtension<T> {
    unsafe fn unreachable(self) -> T;
}

impl<T> OptionExtension<T> for Option<T> {
    /// Acts similarly to [`Option::unwrap`] but with [`unreachable!`] in the none branch for debug
    /// builds and [`unreachable_unchecked`](hint::unreachable_unchecked) for release builds.
    ///
    /// Used where a structural invariant of a collection rules out [`None`], such as a cursor
    /// pointing at a node of a list that is supposedly empty. Misuse is caught in debug builds only.
    unsafe fn unreachable(self) -> T {
        match self {
            Some(val) => val,
            None if cfg!(debug_assertions) => unreachable!(),
            // SAFETY: It is the responsibility of the caller to ensure that None is impossible when
            // invoking this method.
            None => unsafe { hint::unreachable_unchecked() },
        }
    }
}
