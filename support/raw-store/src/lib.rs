#![allow(unsafe_code)]

//! RawStore: the owned, contiguous backing store of a growable sequence.
//!
//! RawStore provides the low-level half of a dynamic array:
//! - A single heap allocation of `cap` slots, of which the first `len` are live
//! - Amortized O(1) growth by doubling (see [`next_capacity`])
//! - In-place shifting for positional insert and removal via `ptr::copy`
//! - Correct drop accounting: live slots are dropped exactly once, stale
//!   slots are never read
//!
//! Index preconditions are `assert!`ed here. Callers that need recoverable
//! errors validate indices before reaching the store.
//!
//! ```text
//! RawStore<T>:  ptr ──▶ [ live | live | live | stale | stale ]
//!                        └──── len ────┘
//!                        └────────────── cap ──────────────┘
//! ```

#![no_std]

extern crate alloc;

use alloc::alloc::{Layout, alloc, dealloc, handle_alloc_error};
use core::{
    fmt,
    marker::PhantomData,
    ops::{Deref, DerefMut},
    ptr::{self, NonNull},
    slice,
};

/// Smallest capacity handed out when growing from an empty store.
pub const MIN_NON_ZERO_CAPACITY: usize = 4;

/// Growth policy: the capacity to reallocate to when `required` slots are
/// needed and only `current` are allocated.
///
/// Doubles the current capacity. If doubling still falls short (bulk appends),
/// grows to exactly `required`. Never returns less than
/// [`MIN_NON_ZERO_CAPACITY`].
pub fn next_capacity(current: usize, required: usize) -> usize {
    current
        .saturating_mul(2)
        .max(MIN_NON_ZERO_CAPACITY)
        .max(required)
}

pub struct RawStore<T> {
    ptr: NonNull<T>,
    cap: usize,
    len: usize,
    _marker: PhantomData<T>,
}

#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
static_assertions::assert_eq_size!(RawStore<u64>, [usize; 3]);

// SAFETY: RawStore exclusively owns its elements, exactly like `Box<[T]>`.
unsafe impl<T: Send> Send for RawStore<T> {}
unsafe impl<T: Sync> Sync for RawStore<T> {}

impl<T> RawStore<T> {
    /// An empty store with no allocation.
    pub const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
            len: 0,
            _marker: PhantomData,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let mut store = Self::new();
        if capacity > 0 {
            store.reallocate(capacity);
        }
        store
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Guarantees `capacity() >= len() + additional`.
    ///
    /// Never shrinks and never changes `len()`.
    pub fn reserve(&mut self, additional: usize) {
        let required = self.len.checked_add(additional).expect("capacity overflow");
        if required > self.cap {
            self.grow(required);
        }
    }

    #[cold]
    fn grow(&mut self, required: usize) {
        debug_assert!(required > self.cap);
        let new_cap = next_capacity(self.cap, required);
        tracing::trace!(
            old_capacity = self.cap,
            new_capacity = new_cap,
            len = self.len,
            "growing backing store"
        );
        self.reallocate(new_cap);
    }

    fn layout(cap: usize) -> Layout {
        Layout::array::<T>(cap).expect("capacity overflow")
    }

    /// Moves the live elements into a fresh allocation of `new_cap` slots.
    fn reallocate(&mut self, new_cap: usize) {
        assert!(new_cap >= self.len);
        let layout = Self::layout(new_cap);
        let new_ptr = if layout.size() == 0 {
            NonNull::dangling()
        } else {
            // SAFETY: layout has a non-zero size.
            let raw = unsafe { alloc(layout) }.cast::<T>();
            match NonNull::new(raw) {
                Some(ptr) => ptr,
                None => handle_alloc_error(layout),
            }
        };

        // SAFETY: the first `len` slots of the old allocation are initialized,
        // the new allocation holds at least `len` slots, and the two never overlap.
        unsafe {
            ptr::copy_nonoverlapping(self.ptr.as_ptr(), new_ptr.as_ptr(), self.len);
        }
        self.release();
        self.ptr = new_ptr;
        self.cap = new_cap;
    }

    /// Frees the allocation without touching any element.
    fn release(&mut self) {
        if self.cap == 0 {
            return;
        }
        let layout = Self::layout(self.cap);
        if layout.size() != 0 {
            // SAFETY: ptr was allocated by `reallocate` with this exact layout.
            unsafe { dealloc(self.ptr.as_ptr().cast(), layout) };
        }
    }

    pub fn push(&mut self, value: T) {
        if self.len == self.cap {
            self.reserve(1);
        }
        // SAFETY: len < cap after the reserve above, so the slot is in bounds and stale.
        unsafe { ptr::write(self.ptr.as_ptr().add(self.len), value) };
        self.len += 1;
    }

    /// Inserts `value` at `index`, shifting `[index, len)` one slot right.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, value: T) {
        assert!(
            index <= self.len,
            "insertion index (is {index}) should be <= len (is {})",
            self.len
        );
        if self.len == self.cap {
            self.reserve(1);
        }
        // SAFETY: index <= len < cap. The shifted run ends at slot `len`,
        // which is in bounds and stale.
        unsafe {
            let slot = self.ptr.as_ptr().add(index);
            ptr::copy(slot, slot.add(1), self.len - index);
            ptr::write(slot, value);
        }
        self.len += 1;
    }

    /// Removes and returns the element at `index`, shifting `(index, len)`
    /// one slot left.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn remove(&mut self, index: usize) -> T {
        assert!(
            index < self.len,
            "removal index (is {index}) should be < len (is {})",
            self.len
        );
        // SAFETY: index < len, so the slot is live. After the read it is
        // logically moved-out and immediately overwritten by the shift.
        let value = unsafe {
            let slot = self.ptr.as_ptr().add(index);
            let value = ptr::read(slot);
            ptr::copy(slot.add(1), slot, self.len - index - 1);
            value
        };
        self.len -= 1;
        value
    }

    /// Drops every live element past `new_len`. Capacity is kept.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }
        // SAFETY: `[new_len, len)` are live. `len` is lowered first so a
        // panicking destructor can't lead to a double drop.
        unsafe {
            let tail = ptr::slice_from_raw_parts_mut(
                self.ptr.as_ptr().add(new_len),
                self.len - new_len,
            );
            self.len = new_len;
            ptr::drop_in_place(tail);
        }
    }

    pub fn clear(&mut self) {
        self.truncate(0);
    }

    pub fn as_slice(&self) -> &[T] {
        // SAFETY: the first `len` slots are initialized; ptr is non-null and
        // aligned even when nothing is allocated.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as in `as_slice`, and `&mut self` guarantees uniqueness.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }
}

impl<T> Default for RawStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for RawStore<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for RawStore<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Extend<T> for RawStore<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for value in iter {
            self.push(value);
        }
    }
}

impl<T: Clone> Clone for RawStore<T> {
    fn clone(&self) -> Self {
        let mut store = Self::with_capacity(self.cap);
        store.extend(self.iter().cloned());
        store
    }
}

impl<T: fmt::Debug> fmt::Debug for RawStore<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawStore")
            .field("len", &self.len)
            .field("cap", &self.cap)
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T> Drop for RawStore<T> {
    fn drop(&mut self) {
        self.clear();
        self.release();
    }
}

#[cfg(test)]
mod tests {
    extern crate alloc;

    use alloc::rc::Rc;
    use alloc::string::{String, ToString};
    use alloc::vec::Vec;
    use core::cell::Cell;

    use super::*;

    struct DropCounter<'a>(&'a Cell<usize>);

    impl Drop for DropCounter<'_> {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_next_capacity() {
        assert_eq!(next_capacity(0, 1), 4);
        assert_eq!(next_capacity(4, 5), 8);
        assert_eq!(next_capacity(8, 9), 16);
        // Doubling is not enough for a bulk request.
        assert_eq!(next_capacity(4, 2004), 2004);
        assert_eq!(next_capacity(usize::MAX, usize::MAX), usize::MAX);
    }

    #[test]
    fn test_grow() {
        let mut store = RawStore::new();
        assert_eq!(store.capacity(), 0);
        store.push(1);
        store.push(2);
        store.push(3);
        assert_eq!(store.len(), 3);
        assert_eq!(store.capacity(), 4);
        store.push(4);
        assert_eq!(store.capacity(), 4);
        store.push(5);
        assert_eq!(store.len(), 5);
        assert_eq!(store.capacity(), 8);
        for i in 6..=17 {
            store.push(i);
        }
        assert_eq!(store.capacity(), 32);
        assert_eq!(store.as_slice(), (1..=17).collect::<Vec<_>>());
    }

    #[test]
    fn test_reserve_bulk() {
        let mut store: RawStore<u32> = RawStore::with_capacity(4);
        store.push(7);
        store.reserve(2000);
        assert_eq!(store.capacity(), 2001);
        assert_eq!(store.as_slice(), &[7]);

        // Already enough room: nothing changes.
        store.reserve(10);
        assert_eq!(store.capacity(), 2001);
    }

    #[test]
    fn test_extend_uses_size_hint() {
        let mut store = RawStore::with_capacity(4);
        store.extend(0..1000u32);
        assert_eq!(store.len(), 1000);
        assert_eq!(store.capacity(), 1000);
        assert_eq!(store[999], 999);
    }

    #[test]
    fn test_insert_shifts_right() {
        let mut store = RawStore::with_capacity(3);
        store.extend([25, 36, 777]);
        store.insert(0, 55);
        assert_eq!(store.as_slice(), &[55, 25, 36, 777]);
        assert_eq!(store.capacity(), 6);
        store.insert(2, 1);
        assert_eq!(store.as_slice(), &[55, 25, 1, 36, 777]);
        store.insert(5, 2);
        assert_eq!(store.as_slice(), &[55, 25, 1, 36, 777, 2]);
    }

    #[test]
    #[should_panic(expected = "insertion index (is 4) should be <= len (is 3)")]
    fn test_insert_out_of_bounds() {
        let mut store = RawStore::new();
        store.extend([1, 2, 3]);
        store.insert(4, 4);
    }

    #[test]
    fn test_remove_shifts_left() {
        let mut store = RawStore::new();
        store.extend([55, 25, 44, 36, 777]);
        assert_eq!(store.remove(2), 44);
        assert_eq!(store.as_slice(), &[55, 25, 36, 777]);
        assert_eq!(store.remove(3), 777);
        assert_eq!(store.remove(0), 55);
        assert_eq!(store.as_slice(), &[25, 36]);
        assert_eq!(store.capacity(), 5);
    }

    #[test]
    #[should_panic(expected = "removal index (is 0) should be < len (is 0)")]
    fn test_remove_from_empty() {
        let mut store: RawStore<i32> = RawStore::new();
        store.remove(0);
    }

    #[test]
    fn test_owned_elements_move_intact() {
        let mut store = RawStore::new();
        for name in ["Ivan", "Maria", "Elena", "Petar", "Gosho"] {
            store.push(name.to_string());
        }
        let removed = store.remove(1);
        assert_eq!(removed, "Maria");
        store.insert(0, String::from("Teddy"));
        assert_eq!(store.as_slice(), &["Teddy", "Ivan", "Elena", "Petar", "Gosho"]);
    }

    #[test]
    fn test_clear_drops_live_and_keeps_capacity() {
        let drops = Cell::new(0);
        let mut store = RawStore::new();
        for _ in 0..5 {
            store.push(DropCounter(&drops));
        }
        let cap = store.capacity();
        store.clear();
        assert_eq!(drops.get(), 5);
        assert_eq!(store.len(), 0);
        assert_eq!(store.capacity(), cap);
    }

    #[test]
    fn test_truncate() {
        let drops = Cell::new(0);
        let mut store = RawStore::new();
        for _ in 0..6 {
            store.push(DropCounter(&drops));
        }
        store.truncate(10);
        assert_eq!(drops.get(), 0);
        store.truncate(2);
        assert_eq!(drops.get(), 4);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_drop_releases_each_element_once() {
        let shared = Rc::new(());
        {
            let mut store = RawStore::new();
            for _ in 0..20 {
                store.push(Rc::clone(&shared));
            }
            let removed = store.remove(3);
            drop(removed);
            assert_eq!(Rc::strong_count(&shared), 20);
        }
        assert_eq!(Rc::strong_count(&shared), 1);
    }

    #[test]
    fn test_zero_sized() {
        let mut store = RawStore::new();
        for _ in 0..100 {
            store.push(());
        }
        store.insert(50, ());
        store.remove(0);
        assert_eq!(store.len(), 100);
        assert!(store.capacity() >= 100);
    }

    #[test]
    fn test_swap_through_slice() {
        let mut store = RawStore::new();
        store.extend([25, 36, 777]);
        store.swap(0, 2);
        assert_eq!(store.as_slice(), &[777, 36, 25]);
    }

    #[test]
    fn test_clone_keeps_capacity() {
        let mut store = RawStore::with_capacity(16);
        store.extend(["a".to_string(), "b".to_string()]);
        let cloned = store.clone();
        assert_eq!(cloned.as_slice(), store.as_slice());
        assert_eq!(cloned.capacity(), 16);
    }
}
