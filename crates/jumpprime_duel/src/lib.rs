//! # JumpPrime Duel
//!
//! Collections of [`jumpprime_core::JumpEntity`] values and the two
//! statistics computed over their query outputs.
//!
//! ## Statistics
//!
//! - **Collisions**: in one direction, every entity whose output repeats an
//!   earlier entity's output counts once.
//! - **Inversions**: every ordered pair `(i, j)`, self-pairs included, where
//!   entity `i`'s up value equals entity `j`'s down value.
//!
//! ## Mutation on read
//!
//! Both counts query the entities they read, which advances query windows and
//! can relocate or deactivate entities. Inactive entities are revived before
//! use. The counts therefore take `&mut EntityCollection`, and repeating a
//! count can give a different answer.
//!
//! ## Example
//!
//! ```rust
//! use jumpprime_core::Direction;
//! use jumpprime_duel::{count_collisions, count_inversions, EntityCollection};
//!
//! let mut duel = EntityCollection::from_values(&[101, 102, 102]);
//! assert_eq!(count_collisions(&mut duel, Direction::Up), 2);
//!
//! let mut chain = EntityCollection::from_values(&[100, 102, 104]);
//! assert_eq!(count_inversions(&mut chain), 2);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod collection;
pub mod collision;
pub mod inversion;

pub use collection::{compare_sizes, same_size, same_values, EntityCollection};
pub use collision::count_collisions;
pub use inversion::count_inversions;
