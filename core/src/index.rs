//! Index validation and operator indexing.

use core::ops::{Index, IndexMut};

use crate::{Collection, Error, Result};

/// Validates a position for reads, writes and removals: `index < count`.
pub(crate) fn check_index(index: usize, count: usize) -> Result<usize> {
    if index < count {
        Ok(index)
    } else {
        Err(out_of_range(index, count))
    }
}

/// Validates a position for insertion, where `index == count` appends.
pub(crate) fn check_insert_index(index: usize, count: usize) -> Result<usize> {
    if index <= count {
        Ok(index)
    } else {
        Err(out_of_range(index, count))
    }
}

#[cold]
fn out_of_range(index: usize, count: usize) -> Error {
    tracing::debug!(index, count, "rejected out-of-range index");
    Error::IndexOutOfRange { index, count }
}

impl<T> Index<usize> for Collection<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics with [`Error::IndexOutOfRange`]'s message if `index >= count`.
    /// Use [`Collection::get`] for a fallible read.
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<usize> for Collection<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }
}
