//! # JumpPrime Core
//!
//! Self-relocating numeric entities that report their nearest primes.
//!
//! ## Design Principles
//!
//! 1. **Faults are states** - Failed and inactive entities answer `0`, never panic
//! 2. **Strict boundaries** - The primes reported are strictly above and below the value
//! 3. **Bounded lifetime** - Query windows and jump bounds are enforced on every call
//! 4. **External configuration** - Jump bound and offset can come from TOML
//!
//! ## Example
//!
//! ```rust
//! use jumpprime_core::{JumpEntity, DEFAULT_JUMP_LIMIT};
//!
//! let mut entity = JumpEntity::new(101, DEFAULT_JUMP_LIMIT);
//! assert_eq!(entity.up(), 103);
//! assert_eq!(entity.down(), 97);
//! assert_eq!(entity.query_limit(), 6);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod entity;
pub mod error;
pub mod prime;

pub use config::{
    EntityConfig, DEFAULT_INITIAL_VALUE, DEFAULT_JUMP_LIMIT, DEFAULT_JUMP_OFFSET,
    MIN_INITIAL_VALUE,
};
pub use entity::{compare_values, same_value, EntityState, JumpEntity};
pub use error::{JumpPrimeError, JumpPrimeResult};
pub use prime::{find_prime, is_prime, is_prime_exhaustive, Direction};
