//! Errors reported by [`Collection`](crate::Collection) operations.
//!
//! Every error is raised synchronously by the operation that detected it and
//! leaves the collection exactly as it was before the call.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An index-consuming operation got an index outside its valid range.
    ///
    /// `count` is the number of live elements at the time of the call.
    #[error("index {index} is out of range for collection of count {count}")]
    IndexOutOfRange { index: usize, count: usize },
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
