//! Collection - a generic, growable, indexable sequence container
//!
//! # Overview
//!
//! [`Collection<T>`] stores homogeneous elements in insertion order inside a
//! single contiguous backing store. It offers amortized O(1) appends,
//! positional insert and removal, bounds-checked random access and a
//! canonical `[e1, e2, ...]` textual form.
//!
//! # Quick Start
//!
//! ```
//! use collection::{Collection, collection};
//!
//! let mut names = collection!["Ivan", "Maria"];
//! names.add("Elena");
//! names.add_range(["Petar", "Gosho"]);
//! assert_eq!(names.to_string(), "[Ivan, Maria, Elena, Petar, Gosho]");
//!
//! names.remove_at(4).unwrap();
//! assert_eq!(names.count(), 4);
//! assert!(names.capacity() >= names.count());
//! ```
//!
//! # Errors
//!
//! Every operation that takes a position returns a [`Result`]. An index
//! outside the valid range yields [`Error::IndexOutOfRange`] and the
//! collection is left exactly as it was:
//!
//! ```
//! use collection::{Error, collection};
//!
//! let mut nums = collection![55, 33, 44, 22, 777];
//! assert_eq!(
//!     nums.remove_at(5),
//!     Err(Error::IndexOutOfRange { index: 5, count: 5 })
//! );
//! assert_eq!(nums.to_string(), "[55, 33, 44, 22, 777]");
//! ```
//!
//! Operator indexing (`nums[i]`) panics instead, like slices do.
//!
//! # Nesting
//!
//! Collections display recursively. Collections of different element types
//! can share a parent by erasing them to a [`Displayable`]:
//!
//! ```
//! use collection::{Collection, Displayable, collection};
//!
//! let dates: Collection<u32> = Collection::new();
//! let nested: Collection<Displayable> = collection![
//!     collection!["Teddy", "Gerry"].into_displayable(),
//!     collection![10, 20].into_displayable(),
//!     dates.into_displayable(),
//! ];
//! assert_eq!(nested.to_string(), "[[Teddy, Gerry], [10, 20], []]");
//! ```
//!
//! # Capacity
//!
//! [`Collection::new`] starts with [`DEFAULT_CAPACITY`] slots. When more room
//! is needed the capacity doubles, or jumps straight to the required size for
//! large bulk appends (see [`next_capacity`]). Capacity is never reduced
//! automatically, not even by [`Collection::clear`].

pub use collection_core::{
    Collection, DEFAULT_CAPACITY, Displayable, Error, MIN_NON_ZERO_CAPACITY, Result, collection,
    next_capacity,
};
