//! # Collision Counting
//!
//! A collision is an entity returning a value that an earlier entity already
//! returned in the same pass. Three entities reporting `103` is two
//! collisions; all-distinct outputs are zero.
//!
//! Every entity is readied and queried once, so a count advances each query
//! window and may relocate, deactivate or (through revival) fail entities.
//! Counting the same collection twice can give different answers.

use jumpprime_core::Direction;

use crate::collection::EntityCollection;

/// Insertion-ordered `(value, count)` buckets, scanned linearly.
#[derive(Debug, Default)]
struct ValueTally {
    buckets: Vec<(u32, usize)>,
}

impl ValueTally {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            buckets: Vec::with_capacity(capacity),
        }
    }

    fn record(&mut self, value: u32) {
        match self.buckets.iter_mut().find(|(v, _)| *v == value) {
            Some((_, count)) => *count += 1,
            None => self.buckets.push((value, 1)),
        }
    }

    /// Sum of `count - 1` over every bucket.
    fn collisions(&self) -> usize {
        self.buckets.iter().map(|&(_, count)| count - 1).sum()
    }
}

/// Counts entities whose query in `direction` repeats an earlier output.
///
/// Each entity is passed through [`EntityCollection::ensure_ready`] and then
/// queried once. Entities that cannot be revived answer `0`, and those zeros
/// collide with each other like any other value.
pub fn count_collisions(collection: &mut EntityCollection, direction: Direction) -> usize {
    let mut tally = ValueTally::with_capacity(collection.len());

    for index in 0..collection.len() {
        collection.ensure_ready(index);
        if let Some(entity) = collection.get_mut(index) {
            tally.record(entity.query(direction));
        }
    }

    let collisions = tally.collisions();
    tracing::debug!(
        "Counted {} {} collisions across {} entities",
        collisions,
        direction.name(),
        collection.len()
    );
    collisions
}

#[cfg(test)]
mod tests {
    use super::*;
    use jumpprime_core::JumpEntity;

    #[test]
    fn test_tally() {
        let mut tally = ValueTally::default();
        for value in [5, 7, 5, 5, 9, 7] {
            tally.record(value);
        }
        assert_eq!(tally.buckets, vec![(5, 3), (7, 2), (9, 1)]);
        assert_eq!(tally.collisions(), 3);
    }

    #[test]
    fn test_three_way_collision() {
        // 101 and 102 both have 103 as their upper boundary.
        let mut collection = EntityCollection::from_values(&[101, 102, 102]);
        assert_eq!(count_collisions(&mut collection, Direction::Up), 2);
    }

    #[test]
    fn test_distinct_values() {
        let mut collection = EntityCollection::from_values(&[101, 1000, 5000, 9999]);
        assert_eq!(count_collisions(&mut collection, Direction::Up), 0);
        assert_eq!(count_collisions(&mut collection, Direction::Down), 0);
    }

    #[test]
    fn test_empty_collection() {
        let mut collection = EntityCollection::default();
        assert_eq!(count_collisions(&mut collection, Direction::Up), 0);
    }

    #[test]
    fn test_failed_entities_collide_on_zero() {
        let mut collection = EntityCollection::from_values(&[1, 2, 3, 101]);
        assert_eq!(count_collisions(&mut collection, Direction::Down), 2);
    }

    #[test]
    fn test_down_direction() {
        let mut collection = EntityCollection::from_values(&[98, 99, 100, 101]);
        // 98 and 99 fail at birth (zeros collide once); 100 and 101 both see 97.
        assert_eq!(count_collisions(&mut collection, Direction::Down), 2);
    }

    #[test]
    fn test_counting_mutates_state() {
        // 101 has a window of 6 queries, 102 a window of 2.
        let mut collection =
            EntityCollection::from_entities(vec![JumpEntity::new(101, 1), JumpEntity::new(102, 1)]);
        assert_eq!(count_collisions(&mut collection, Direction::Up), 1);
        assert_eq!(count_collisions(&mut collection, Direction::Up), 1);

        // The second pass closed 102's window: it jumped to 203 and deactivated.
        let second = collection.get(1).unwrap();
        assert!(!second.is_active());
        assert_eq!(second.current_value(), 203);

        // Revived in place, it now reports 211 while 101 still reports 103.
        assert_eq!(count_collisions(&mut collection, Direction::Up), 0);
        assert!(collection.get(1).unwrap().is_active());
    }
}
