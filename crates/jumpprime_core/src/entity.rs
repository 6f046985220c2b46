//! # Jump Entity State Machine
//!
//! A `JumpEntity` wraps an unsigned value and answers queries about the
//! nearest primes strictly above and below it. Each relocation window allows
//! `upper_prime - lower_prime` queries; the query that reaches the limit makes
//! the entity jump past the boundary it just reported.
//!
//! ## States
//!
//! - **Active**: answers queries.
//! - **Inactive**: exhausted its jump bound. `revive()` brings it back in place.
//! - **Failed**: permanent. Entered at birth for values below the minimum, by
//!   reviving an entity that was not inactive, or when a boundary search runs
//!   off the `u32` range.
//!
//! Queries on a non-active entity return `0` and change nothing.

use std::cmp::Ordering;

use crate::config::{EntityConfig, DEFAULT_INITIAL_VALUE};
use crate::prime::{find_prime, Direction};

/// Lifecycle state of a [`JumpEntity`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityState {
    /// Answering queries.
    Active,
    /// Jump bound reached, recoverable through `revive()`.
    Inactive,
    /// Permanently disabled.
    Failed,
}

impl EntityState {
    /// Returns a human-readable state name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
            Self::Failed => "FAILED",
        }
    }
}

/// A value that tracks its boundary primes and relocates after a bounded
/// number of queries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JumpEntity {
    /// Value restored by `reset()`.
    initial_value: u32,
    /// Live value the boundaries are computed from.
    current_value: u32,
    /// Lifecycle state.
    state: EntityState,
    /// Smallest prime strictly above `current_value`.
    upper_prime: u32,
    /// Largest prime strictly below `current_value`.
    lower_prime: u32,
    /// Queries since the last relocation, reset or revival.
    query_count: u32,
    /// `upper_prime - lower_prime`.
    query_limit: u32,
    /// Relocations since the last reset or revival.
    jump_count: u32,
    /// Relocations allowed before deactivation.
    jump_limit: u32,
    /// Distance past the boundary a relocation lands on.
    jump_offset: u32,
}

impl JumpEntity {
    /// Creates an entity with the default jump offset and minimum value.
    ///
    /// Values below the minimum produce a failed entity.
    #[must_use]
    pub fn new(initial_value: u32, jump_limit: u32) -> Self {
        Self::with_config(initial_value, &EntityConfig::with_jump_limit(jump_limit))
    }

    /// Creates an entity from a configuration.
    #[must_use]
    pub fn with_config(initial_value: u32, config: &EntityConfig) -> Self {
        let mut entity = Self {
            initial_value,
            current_value: initial_value,
            state: EntityState::Failed,
            upper_prime: 0,
            lower_prime: 0,
            query_count: 0,
            query_limit: 0,
            jump_count: 0,
            jump_limit: config.jump_limit,
            jump_offset: config.jump_offset,
        };

        if initial_value < config.min_initial_value {
            tracing::warn!(
                "Entity rejected at construction: {} is below minimum {}",
                initial_value,
                config.min_initial_value
            );
            return entity;
        }

        entity.state = EntityState::Active;
        entity.reset();
        entity
    }

    /// Restores the initial value and clears both counters.
    ///
    /// Returns `false`, changing nothing, if the entity has failed.
    pub fn reset(&mut self) -> bool {
        match self.state {
            EntityState::Failed => false,
            EntityState::Active | EntityState::Inactive => {
                self.state = EntityState::Active;
                self.current_value = self.initial_value;
                self.jump_count = 0;
                if self.settle() {
                    true
                } else {
                    self.fail("reset");
                    false
                }
            }
        }
    }

    /// Reactivates an inactive entity in place.
    ///
    /// Clears the query and jump counters but keeps the current value and
    /// boundaries. Reviving an entity that is not inactive fails it for good.
    /// Returns `true` if the entity is active afterwards.
    pub fn revive(&mut self) -> bool {
        match self.state {
            EntityState::Inactive => {
                self.state = EntityState::Active;
                self.jump_count = 0;
                self.query_count = 0;
                tracing::info!("Entity revived at {}", self.current_value);
            }
            EntityState::Active | EntityState::Failed => self.fail("revive"),
        }
        self.is_active()
    }

    /// Returns the boundary prime in `direction`, counting the query.
    ///
    /// The returned boundary is the one in force when the query was made,
    /// even if this query triggers a relocation. Returns `0` if the entity is
    /// not active.
    pub fn query(&mut self, direction: Direction) -> u32 {
        if self.state != EntityState::Active {
            return 0;
        }

        let boundary = self.boundary(direction);
        self.query_count += 1;

        if self.query_count >= self.query_limit {
            self.relocate(boundary, direction);
        }

        boundary
    }

    /// Queries the nearest prime above the current value.
    pub fn up(&mut self) -> u32 {
        self.query(Direction::Up)
    }

    /// Queries the nearest prime below the current value.
    pub fn down(&mut self) -> u32 {
        self.query(Direction::Down)
    }

    /// Moves past `boundary` by the jump offset and opens a new query window.
    fn relocate(&mut self, boundary: u32, direction: Direction) {
        let from = self.current_value;
        self.current_value = direction.offset(boundary, self.jump_offset);
        self.jump_count += 1;

        if !self.settle() {
            self.fail("relocate");
            return;
        }

        tracing::debug!(
            "Entity jumped {}: {} -> {} (jump {}/{}, window {})",
            direction.name(),
            from,
            self.current_value,
            self.jump_count,
            self.jump_limit,
            self.query_limit
        );

        if self.jump_count >= self.jump_limit {
            self.state = EntityState::Inactive;
            tracing::info!(
                "Entity deactivated at {} after {} jumps",
                self.current_value,
                self.jump_count
            );
        }
    }

    /// Recomputes both boundaries and the query window for the current value.
    ///
    /// Returns `false` if either boundary search runs off the `u32` range.
    fn settle(&mut self) -> bool {
        let (Some(upper), Some(lower)) = (
            find_prime(self.current_value, Direction::Up),
            find_prime(self.current_value, Direction::Down),
        ) else {
            return false;
        };

        self.upper_prime = upper;
        self.lower_prime = lower;
        self.query_limit = upper - lower;
        self.query_count = 0;
        true
    }

    /// Moves to the permanent failed state.
    fn fail(&mut self, cause: &str) {
        if self.state != EntityState::Failed {
            tracing::warn!(
                "Entity failed during {}: {} -> {} at {}",
                cause,
                self.state.name(),
                EntityState::Failed.name(),
                self.current_value
            );
        }
        self.state = EntityState::Failed;
    }

    fn boundary(&self, direction: Direction) -> u32 {
        match direction {
            Direction::Up => self.upper_prime,
            Direction::Down => self.lower_prime,
        }
    }

    /// Returns true if the entity answers queries.
    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state == EntityState::Active
    }

    /// Returns true if the entity has permanently failed.
    #[inline]
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.state == EntityState::Failed
    }

    /// Returns the lifecycle state.
    #[inline]
    #[must_use]
    pub const fn state(&self) -> EntityState {
        self.state
    }

    /// Returns the value the boundaries are computed from.
    #[inline]
    #[must_use]
    pub const fn current_value(&self) -> u32 {
        self.current_value
    }

    /// Returns the value restored by `reset()`.
    #[inline]
    #[must_use]
    pub const fn initial_value(&self) -> u32 {
        self.initial_value
    }

    /// Returns the nearest prime above the current value.
    #[inline]
    #[must_use]
    pub const fn upper_prime(&self) -> u32 {
        self.upper_prime
    }

    /// Returns the nearest prime below the current value.
    #[inline]
    #[must_use]
    pub const fn lower_prime(&self) -> u32 {
        self.lower_prime
    }

    /// Returns queries made in the current window.
    #[inline]
    #[must_use]
    pub const fn query_count(&self) -> u32 {
        self.query_count
    }

    /// Returns the size of the current query window.
    #[inline]
    #[must_use]
    pub const fn query_limit(&self) -> u32 {
        self.query_limit
    }

    /// Returns relocations since the last reset or revival.
    #[inline]
    #[must_use]
    pub const fn jump_count(&self) -> u32 {
        self.jump_count
    }

    /// Returns relocations allowed before deactivation.
    #[inline]
    #[must_use]
    pub const fn jump_limit(&self) -> u32 {
        self.jump_limit
    }
}

impl Default for JumpEntity {
    fn default() -> Self {
        Self::with_config(DEFAULT_INITIAL_VALUE, &EntityConfig::default())
    }
}

/// Returns true if both entities hold the same current value.
#[must_use]
pub fn same_value(a: &JumpEntity, b: &JumpEntity) -> bool {
    a.current_value == b.current_value
}

/// Orders two entities by current value.
#[must_use]
pub fn compare_values(a: &JumpEntity, b: &JumpEntity) -> Ordering {
    a.current_value.cmp(&b.current_value)
}
