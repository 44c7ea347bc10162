//! A generic, growable, indexable sequence container.
//!
//! [`Collection<T>`] keeps its elements in one contiguous backing store
//! ([`RawStore`](collection_raw_store::RawStore)) and offers:
//!
//! - amortized O(1) [`add`](Collection::add) and bulk
//!   [`add_range`](Collection::add_range)
//! - positional [`insert_at`](Collection::insert_at) and
//!   [`remove_at`](Collection::remove_at)
//! - bounds-checked [`get`](Collection::get) / [`set`](Collection::set) and
//!   [`exchange`](Collection::exchange)
//! - a canonical `[e1, e2, ...]` `Display` that recurses into nested
//!   collections
//!
//! Every index-consuming operation returns [`Result`], failing with
//! [`Error::IndexOutOfRange`] and leaving the collection untouched.
//! Capacity grows automatically and is never reduced.
//!
//! ```
//! use collection_core::{Collection, Error, collection};
//!
//! let mut nums = collection![25, 36, 777];
//! nums.exchange(0, 2).unwrap();
//! assert_eq!(nums.to_string(), "[777, 36, 25]");
//!
//! assert_eq!(
//!     nums.remove_at(3),
//!     Err(Error::IndexOutOfRange { index: 3, count: 3 })
//! );
//! assert!(nums.capacity() >= nums.count());
//! ```

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

mod collection;
mod display;
mod error;
mod index;

pub use collection::{Collection, DEFAULT_CAPACITY};
pub use collection_raw_store::{MIN_NON_ZERO_CAPACITY, next_capacity};
pub use display::Displayable;
pub use error::{Error, Result};

/// Creates a [`Collection`] holding the given elements in order.
///
/// ```
/// use collection_core::collection;
///
/// let empty: collection_core::Collection<i32> = collection![];
/// assert_eq!(empty.to_string(), "[]");
/// assert_eq!(collection![5].to_string(), "[5]");
/// assert_eq!(collection!["Ivan", "Maria"].to_string(), "[Ivan, Maria]");
/// ```
#[macro_export]
macro_rules! collection {
    () => {
        $crate::Collection::new()
    };
    ($($item:expr),+ $(,)?) => {
        $crate::Collection::from_items([$($item),+])
    };
}
