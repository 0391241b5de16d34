#[cfg(test)]
pub mod alloc;
pub mod error;
#[cfg(feature = "linked")]
pub mod fmt;
#[cfg(feature = "linked")]
pub mod option;
pub mod panic;
pub mod result;
