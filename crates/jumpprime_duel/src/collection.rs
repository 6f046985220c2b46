//! # Entity Collection
//!
//! Exclusive owner of an ordered, fixed-size group of [`JumpEntity`] values.
//!
//! The group is a single `Vec`, so cloning deep-copies every entity and moving
//! transfers the whole allocation. [`EntityCollection::take`] moves the
//! entities out and leaves the source empty.

use std::cmp::Ordering;

use jumpprime_core::{same_value, EntityConfig, JumpEntity, DEFAULT_JUMP_LIMIT};

/// An ordered group of independently owned entities.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EntityCollection {
    entities: Vec<JumpEntity>,
}

impl EntityCollection {
    /// Builds one entity per value with the default jump bound.
    #[must_use]
    pub fn from_values(values: &[u32]) -> Self {
        Self::from_values_with_bound(values, DEFAULT_JUMP_LIMIT)
    }

    /// Builds one entity per value, all sharing `jump_limit`.
    #[must_use]
    pub fn from_values_with_bound(values: &[u32], jump_limit: u32) -> Self {
        Self::from_values_with_config(values, &EntityConfig::with_jump_limit(jump_limit))
    }

    /// Builds one entity per value from a shared configuration.
    #[must_use]
    pub fn from_values_with_config(values: &[u32], config: &EntityConfig) -> Self {
        let entities: Vec<JumpEntity> = values
            .iter()
            .map(|&value| JumpEntity::with_config(value, config))
            .collect();

        let failed = entities.iter().filter(|e| e.is_disabled()).count();
        if failed > 0 {
            tracing::warn!(
                "Collection built with {} of {} entities failed at construction",
                failed,
                entities.len()
            );
        }

        Self { entities }
    }

    /// Takes ownership of already-constructed entities.
    #[must_use]
    pub fn from_entities(entities: Vec<JumpEntity>) -> Self {
        Self { entities }
    }

    /// Makes sure the entity at `index` can be queried.
    ///
    /// A non-active entity is revived and the result of `revive()` returned;
    /// an active one is left alone. Reviving is the only way the collection
    /// changes entity state on a caller's behalf, and it can fail an entity
    /// permanently.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn ensure_ready(&mut self, index: usize) -> bool {
        let entity = &mut self.entities[index];
        if entity.is_active() {
            return true;
        }
        let revived = entity.revive();
        tracing::debug!(
            "Collection slot {} readied: {} ({})",
            index,
            revived,
            entity.state().name()
        );
        revived
    }

    /// Returns the number of entities.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Alias of [`EntityCollection::len`].
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.len()
    }

    /// Returns true if the collection holds no entities.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Returns the entity at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&JumpEntity> {
        self.entities.get(index)
    }

    /// Returns the entity at `index` for direct lifecycle control.
    #[must_use]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut JumpEntity> {
        self.entities.get_mut(index)
    }

    /// Iterates over the entities in order.
    pub fn iter(&self) -> std::slice::Iter<'_, JumpEntity> {
        self.entities.iter()
    }

    /// Returns the current value of every entity, in order.
    #[must_use]
    pub fn current_values(&self) -> Vec<u32> {
        self.entities.iter().map(JumpEntity::current_value).collect()
    }

    /// Builds a fresh collection from the current values of `self` then `other`.
    ///
    /// Only values carry over: the new entities use the default jump bound and
    /// start active with cleared counters, whatever the sources' state.
    #[must_use]
    pub fn concatenate(&self, other: &Self) -> Self {
        let mut values = self.current_values();
        values.extend(other.iter().map(JumpEntity::current_value));
        Self::from_values(&values)
    }

    /// Builds a fresh collection with `entity`'s current value appended.
    #[must_use]
    pub fn append_entity(&self, entity: &JumpEntity) -> Self {
        let mut values = self.current_values();
        values.push(entity.current_value());
        Self::from_values(&values)
    }

    /// Moves the entities out, leaving this collection empty.
    #[must_use]
    pub fn take(&mut self) -> Self {
        Self {
            entities: std::mem::take(&mut self.entities),
        }
    }

    /// Consumes the collection, returning its entities.
    #[must_use]
    pub fn into_entities(self) -> Vec<JumpEntity> {
        self.entities
    }
}

impl<'a> IntoIterator for &'a EntityCollection {
    type Item = &'a JumpEntity;
    type IntoIter = std::slice::Iter<'a, JumpEntity>;

    fn into_iter(self) -> Self::IntoIter {
        self.entities.iter()
    }
}

/// Returns true if both collections hold the same number of entities.
#[must_use]
pub fn same_size(a: &EntityCollection, b: &EntityCollection) -> bool {
    a.len() == b.len()
}

/// Returns true if both collections hold entities with equal current values,
/// position by position.
#[must_use]
pub fn same_values(a: &EntityCollection, b: &EntityCollection) -> bool {
    same_size(a, b) && a.iter().zip(b.iter()).all(|(x, y)| same_value(x, y))
}

/// Orders two collections by size.
#[must_use]
pub fn compare_sizes(a: &EntityCollection, b: &EntityCollection) -> Ordering {
    a.len().cmp(&b.len())
}
