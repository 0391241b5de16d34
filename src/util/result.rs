use std::alloc;
use std::error::Error;

use crate::util::error::{AllocFailure, TryReserveError};

/// Backs the panicking half of each `method` / `try_method` pair.
pub(crate) trait ResultExtension<T, E: Error> {
    /// Returns the [`Ok`] value, or panics with the [`Display`](std::fmt::Display) message of the
    /// error. The panic location is reported as the caller's.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T, E> for Result<T, E> {
    #[track_caller]
    fn throw(self) -> T {
        match self {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }
}

/// Resolves the result of a growth operation for the infallible API: a capacity overflow panics,
/// while an allocation failure is passed to [`alloc::handle_alloc_error`].
///
/// # Panics
/// Panics if `result` is a [`TryReserveError::CapacityOverflow`].
#[track_caller]
pub(crate) fn infallible<T>(result: Result<T, TryReserveError>) -> T {
    match result {
        Ok(value) => value,
        Err(TryReserveError::CapacityOverflow(err)) => panic!("{err}"),
        Err(TryReserveError::AllocFailure(AllocFailure { layout })) => {
            alloc::handle_alloc_error(layout)
        },
    }
}
