//! # Inversion Counting
//!
//! An inversion is an ordered pair `(i, j)` where entity `i`'s up-query equals
//! entity `j`'s down-query. Every pair is counted, including `i == j` and both
//! orders of a mirrored match.
//!
//! Each entity is queried up and then down within one pass and is readied
//! before each query. When the up-query closes the entity's window, the
//! down-query reads the boundaries of the relocated value.

use jumpprime_core::Direction;

use crate::collection::EntityCollection;

/// Reads one up value and one down value from every entity, in order.
fn read_up_down(collection: &mut EntityCollection) -> (Vec<u32>, Vec<u32>) {
    let mut up_values = Vec::with_capacity(collection.len());
    let mut down_values = Vec::with_capacity(collection.len());

    for index in 0..collection.len() {
        up_values.push(ready_query(collection, index, Direction::Up));
        down_values.push(ready_query(collection, index, Direction::Down));
    }

    (up_values, down_values)
}

fn ready_query(collection: &mut EntityCollection, index: usize, direction: Direction) -> u32 {
    collection.ensure_ready(index);
    collection
        .get_mut(index)
        .map_or(0, |entity| entity.query(direction))
}

/// Counts ordered pairs `(i, j)` with `up[i] == down[j]`.
fn matching_pairs(up_values: &[u32], down_values: &[u32]) -> usize {
    up_values
        .iter()
        .map(|up| down_values.iter().filter(|&down| down == up).count())
        .sum()
}

/// Counts up/down cross-matches over the whole collection.
///
/// Mutates every entity it reads: two queries per entity, plus revival of any
/// entity found inactive.
pub fn count_inversions(collection: &mut EntityCollection) -> usize {
    let (up_values, down_values) = read_up_down(collection);
    let inversions = matching_pairs(&up_values, &down_values);
    tracing::debug!(
        "Counted {} inversions across {} entities",
        inversions,
        collection.len()
    );
    inversions
}
