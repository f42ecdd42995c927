//! Entity container built on a `DoubleBufferedList`.

use crate::core::{DoubleBufferedList, DEFAULT_CAPACITY};
use crate::error::DualBufError;
use crate::iter::Iter;

/// An object stored in an [`EntityContainer`].
pub trait Entity {
    /// Whether the entity has been marked for removal.
    ///
    /// Checked after the callback of [`EntityContainer::iterate`] has run, so
    /// an entity may delete itself during iteration.
    fn is_deleted(&self) -> bool;
}

/// Per-frame collection of entities.
///
/// Entities are stored in insertion order. Deleted entities are dropped on
/// the next call to [`iterate`](Self::iterate).
#[derive(Debug, Clone)]
pub struct EntityContainer<T: Entity> {
    entities: DoubleBufferedList<T>,
}

impl<T: Entity> EntityContainer<T> {
    /// Creates a container with room for `capacity` entities.
    ///
    /// # Errors
    ///
    /// Returns `DualBufError::InvalidInitialization` if `capacity` is 0.
    pub fn new(capacity: usize) -> Result<Self, DualBufError> {
        Ok(Self {
            entities: DoubleBufferedList::new(capacity)?,
        })
    }

    pub fn add_entity(&mut self, entity: T) {
        self.entities.add(entity);
    }

    /// Runs `iterator` on every entity in order, then drops the entities
    /// that report [`Entity::is_deleted`].
    pub fn iterate<F>(&mut self, mut iterator: F)
    where
        F: FnMut(&mut T),
    {
        self.entities.retain_mut(|entity| {
            iterator(entity);
            !entity.is_deleted()
        });
    }

    /// Runs `iterator` on every entity in parallel, in no particular order.
    ///
    /// Nothing is removed; deleted entities stay until the next
    /// [`iterate`](Self::iterate).
    pub fn immutable_iterate<F>(&self, iterator: F)
    where
        T: Sync,
        F: Fn(&T) + Sync,
    {
        self.entities.par_for_each(iterator);
    }

    #[must_use]
    pub fn count_entities(&self) -> usize {
        self.entities.len()
    }

    pub fn clear_container(&mut self) {
        self.entities.clear();
    }

    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        self.entities.iter()
    }
}

impl<T: Entity> Default for EntityContainer<T> {
    fn default() -> Self {
        Self {
            entities: DoubleBufferedList::with_default_capacity(),
        }
    }
}

impl<'a, T: Entity> IntoIterator for &'a EntityContainer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
