use core::fmt;
use core::mem;
use core::ops::{Index, IndexMut};

use tracing::{debug, trace, warn};

use crate::error::DualBufError;
use crate::iter::{IntoIter, Iter, IterMut};

const GROWTH_FACTOR: usize = 2;
pub(crate) const DEFAULT_CAPACITY: usize = 50;

/// A growable list backed by two equally sized buffers.
///
/// `primary` holds the live elements in its initialized prefix. `secondary`
/// is empty scratch space with the same capacity, used by [`retain_mut`]
/// to compact survivors before the two buffers trade roles.
///
/// [`retain_mut`]: DoubleBufferedList::retain_mut
pub struct DoubleBufferedList<T> {
    pub(crate) primary: Vec<T>,
    secondary: Vec<T>,
    capacity: usize,
}

impl<T> DoubleBufferedList<T> {
    /// Creates a new `DoubleBufferedList` with room for `capacity` elements.
    ///
    /// Both buffers are allocated up front; nothing else is allocated until
    /// the list outgrows `capacity`.
    ///
    /// # Errors
    ///
    /// Returns `DualBufError::InvalidInitialization` if:
    /// - `capacity` is 0
    /// - `capacity` exceeds the maximum element count a buffer of `T` can hold
    pub fn new(capacity: usize) -> Result<Self, DualBufError> {
        if capacity == 0 {
            return Err(DualBufError::InvalidInitialization {
                reason: "capacity cannot be 0",
            });
        }

        if capacity > Self::max_capacity() {
            return Err(DualBufError::InvalidInitialization {
                reason: "capacity exceeds the maximum buffer length",
            });
        }

        Ok(Self {
            primary: Vec::with_capacity(capacity),
            secondary: Vec::with_capacity(capacity),
            capacity,
        })
    }

    /// Creates a new `DoubleBufferedList` with the default capacity (50).
    #[must_use]
    pub fn with_default_capacity() -> Self {
        Self {
            primary: Vec::with_capacity(DEFAULT_CAPACITY),
            secondary: Vec::with_capacity(DEFAULT_CAPACITY),
            capacity: DEFAULT_CAPACITY,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.primary.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primary.is_empty()
    }

    /// Number of slots in each buffer. Never decreases.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Largest capacity a buffer of `T` may be grown to.
    fn max_capacity() -> usize {
        match mem::size_of::<T>() {
            0 => usize::MAX,
            size => isize::MAX as usize / size,
        }
    }

    fn check_bounds(&self, index: usize) -> Result<(), DualBufError> {
        if index >= self.primary.len() {
            Err(DualBufError::IndexOutOfBounds {
                index,
                length: self.primary.len(),
            })
        } else {
            Ok(())
        }
    }

    fn grow(&mut self) -> Result<(), DualBufError> {
        let max_capacity = Self::max_capacity();
        if self.capacity >= max_capacity {
            return Err(DualBufError::CapacityExhausted {
                capacity: self.capacity,
            });
        }

        let doubled = self.capacity.saturating_mul(GROWTH_FACTOR);
        let mut new_capacity = doubled.saturating_add(doubled % 2);
        if new_capacity > max_capacity {
            warn!(
                requested = new_capacity,
                clamped = max_capacity,
                "double-buffered list growth clamped to the maximum buffer length"
            );
            new_capacity = max_capacity;
        }

        debug!(
            old_capacity = self.capacity,
            new_capacity,
            count = self.primary.len(),
            "growing double-buffered list"
        );
        self.resize(new_capacity);
        Ok(())
    }

    fn resize(&mut self, new_capacity: usize) {
        let mut primary = Vec::with_capacity(new_capacity);
        primary.append(&mut self.primary);
        self.primary = primary;
        self.secondary = Vec::with_capacity(new_capacity);
        self.capacity = new_capacity;
    }

    /// Appends an element, doubling both buffers first if the list is full.
    ///
    /// # Panics
    ///
    /// Panics if the list is full and already at the maximum capacity.
    pub fn add(&mut self, item: T) {
        if let Err(err) = self.try_add(item) {
            panic!("{err}");
        }
    }

    /// Tries to append an element, doubling both buffers first if the list is full.
    ///
    /// # Errors
    ///
    /// Returns `DualBufError::CapacityExhausted` if the list is full and its
    /// capacity has already been clamped to the maximum buffer length.
    pub fn try_add(&mut self, item: T) -> Result<(), DualBufError> {
        if self.primary.len() == self.capacity {
            self.grow()?;
        }
        self.primary.push(item);
        Ok(())
    }

    /// Gets the element at the specified index.
    ///
    /// Returns `None` if the index is out of bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.primary.get(index)
    }

    /// Gets a mutable reference to the element at the specified index.
    ///
    /// Returns `None` if the index is out of bounds.
    #[must_use]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.primary.get_mut(index)
    }

    /// Tries to get the element at the specified index.
    ///
    /// # Errors
    ///
    /// Returns `DualBufError::IndexOutOfBounds` if `index` is out of bounds.
    pub fn try_get(&self, index: usize) -> Result<&T, DualBufError> {
        self.check_bounds(index)?;
        Ok(&self.primary[index])
    }

    /// Removes the first element equal to `item`, shifting the rest left.
    ///
    /// Returns the removed element, or `None` if no element matched.
    pub fn remove(&mut self, item: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let index = self.primary.iter().position(|candidate| candidate == item)?;
        Some(self.primary.remove(index))
    }

    /// Removes and returns the element at `index`, shifting the rest left.
    ///
    /// # Errors
    ///
    /// Returns `DualBufError::IndexOutOfBounds` if `index` is out of bounds.
    pub fn remove_at(&mut self, index: usize) -> Result<T, DualBufError> {
        self.check_bounds(index)?;
        Ok(self.primary.remove(index))
    }

    /// Drops every live element. The capacity is unchanged.
    pub fn clear(&mut self) {
        self.primary.clear();
    }

    #[must_use]
    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.primary.iter().any(|candidate| candidate == item)
    }

    /// Visits every element in order and keeps the ones for which `keep`
    /// returns `true`.
    ///
    /// `keep` may mutate the element before deciding. Survivors are moved once
    /// into the secondary buffer, then the buffers swap roles; rejected
    /// elements are dropped in place. Nothing is shifted and nothing is
    /// allocated.
    pub fn retain_mut<F>(&mut self, mut keep: F)
    where
        F: FnMut(&mut T) -> bool,
    {
        // Leftovers from a pass whose callback unwound.
        self.secondary.clear();

        let visited = self.primary.len();
        for mut item in self.primary.drain(..) {
            if keep(&mut item) {
                self.secondary.push(item);
            }
        }
        mem::swap(&mut self.primary, &mut self.secondary);

        trace!(visited, kept = self.primary.len(), "compacting pass finished");
    }

    /// Clones the live elements into `dest` starting at `offset`.
    ///
    /// # Errors
    ///
    /// Returns `DualBufError::IndexOutOfBounds` if `dest` has fewer than
    /// `offset + len()` slots.
    pub fn copy_to(&self, dest: &mut [T], offset: usize) -> Result<(), DualBufError>
    where
        T: Clone,
    {
        let end = offset.saturating_add(self.primary.len());
        if end > dest.len() {
            return Err(DualBufError::IndexOutOfBounds {
                index: end,
                length: dest.len(),
            });
        }
        dest[offset..end].clone_from_slice(&self.primary);
        Ok(())
    }

    /// Returns the live elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.primary
    }

    /// Returns an iterator over the live elements in order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.primary)
    }

    /// Returns an iterator that allows modifying each live element in order.
    #[must_use]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(&mut self.primary)
    }
}

impl<T> Index<usize> for DoubleBufferedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        assert!(
            index < self.primary.len(),
            "Index {} out of bounds for list of length {}",
            index,
            self.primary.len()
        );
        &self.primary[index]
    }
}

impl<T> IndexMut<usize> for DoubleBufferedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        assert!(
            index < self.primary.len(),
            "Index {} out of bounds for list of length {}",
            index,
            self.primary.len()
        );
        &mut self.primary[index]
    }
}

impl<T> Default for DoubleBufferedList<T> {
    fn default() -> Self {
        Self::with_default_capacity()
    }
}

impl<T: Clone> Clone for DoubleBufferedList<T> {
    fn clone(&self) -> Self {
        let mut primary = Vec::with_capacity(self.capacity);
        primary.extend_from_slice(&self.primary);
        Self {
            primary,
            secondary: Vec::with_capacity(self.capacity),
            capacity: self.capacity,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for DoubleBufferedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DoubleBufferedList")
            .field("items", &self.primary)
            .field("capacity", &self.capacity)
            .finish()
    }
}

impl<T: PartialEq> PartialEq for DoubleBufferedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.primary == other.primary
    }
}

impl<T: Eq> Eq for DoubleBufferedList<T> {}

impl<T: PartialEq> PartialEq<[T]> for DoubleBufferedList<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.primary.as_slice() == other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for DoubleBufferedList<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.primary.as_slice() == other.as_slice()
    }
}

impl<T> Extend<T> for DoubleBufferedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T> IntoIterator for DoubleBufferedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.primary)
    }
}
