//! The growable, indexable sequence container.

use core::slice;

use collection_raw_store::RawStore;

use crate::index::{check_index, check_insert_index};
use crate::Result;

/// Capacity of a collection created by [`Collection::new`].
pub const DEFAULT_CAPACITY: usize = 4;

/// An ordered, resizable sequence of `T` with bounds-checked access.
///
/// The first [`count`](Self::count) slots of the backing store are the live
/// elements. Appends are amortized O(1), positional inserts and removals shift
/// the tail in place, and capacity only ever grows.
///
/// # Example
///
/// ```
/// use collection_core::{Collection, collection};
///
/// let mut names = collection!["Ivan", "Maria"];
/// names.add("Elena");
/// assert_eq!(names.to_string(), "[Ivan, Maria, Elena]");
///
/// names.insert_at(0, "Teddy").unwrap();
/// assert_eq!(names.remove_at(1), Ok("Ivan"));
/// assert!(names.get(3).is_err());
/// ```
pub struct Collection<T> {
    store: RawStore<T>,
}

// --- Construction ---

impl<T> Collection<T> {
    /// An empty collection with [`DEFAULT_CAPACITY`] slots.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            store: RawStore::with_capacity(capacity),
        }
    }

    /// A collection holding `items` in order.
    ///
    /// The store is sized up front from the iterator's lower size hint, and
    /// never below [`DEFAULT_CAPACITY`].
    pub fn from_items(items: impl IntoIterator<Item = T>) -> Self {
        let items = items.into_iter();
        let mut collection = Self::with_capacity(items.size_hint().0.max(DEFAULT_CAPACITY));
        collection.add_range(items);
        collection
    }
}

// --- Accessors ---

impl<T> Collection<T> {
    /// Number of live elements.
    #[inline]
    pub fn count(&self) -> usize {
        self.store.len()
    }

    /// Number of allocated slots. Always `>= count()`.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        let index = check_index(index, self.count())?;
        Ok(&self.store[index])
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let index = check_index(index, self.count())?;
        Ok(&mut self.store[index])
    }

    /// Overwrites the element at `index`, returning the previous one.
    pub fn set(&mut self, index: usize, item: T) -> Result<T> {
        let slot = self.get_mut(index)?;
        Ok(core::mem::replace(slot, item))
    }

    /// The live elements, in order.
    pub fn as_slice(&self) -> &[T] {
        self.store.as_slice()
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.store.iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.store.iter_mut()
    }
}

// --- Mutation ---

impl<T> Collection<T> {
    /// Appends `item` after the last live element.
    pub fn add(&mut self, item: T) {
        self.store.push(item);
    }

    /// Appends every item of `items`, in order.
    ///
    /// Room for the iterator's lower size hint is reserved before the first
    /// item is moved, so an exact-size range grows the store at most once.
    pub fn add_range(&mut self, items: impl IntoIterator<Item = T>) {
        self.store.extend(items);
    }

    /// Inserts `item` at `index`, shifting later elements one position right.
    ///
    /// `index == count()` appends. On error `item` is dropped and the
    /// collection is left untouched.
    pub fn insert_at(&mut self, index: usize, item: T) -> Result<()> {
        let index = check_insert_index(index, self.count())?;
        self.store.insert(index, item);
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting later elements
    /// one position left.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        let index = check_index(index, self.count())?;
        Ok(self.store.remove(index))
    }

    /// Swaps the elements at positions `i` and `j`.
    ///
    /// Both indices are validated before anything moves.
    pub fn exchange(&mut self, i: usize, j: usize) -> Result<()> {
        let count = self.count();
        let i = check_index(i, count)?;
        let j = check_index(j, count)?;
        self.store.swap(i, j);
        Ok(())
    }

    /// Drops every live element. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.store.clear();
    }
}

// --- Trait impls ---

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<T> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_items(iter)
    }
}

impl<T> Extend<T> for Collection<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_range(iter);
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Collection<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
