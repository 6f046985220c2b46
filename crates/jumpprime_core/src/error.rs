//! # JumpPrime Error Types
//!
//! Lifecycle faults are never errors: they are entity states plus sentinel
//! return values. The errors here cover configuration only.

use thiserror::Error;

/// Errors that can occur while building JumpPrime configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JumpPrimeError {
    /// The configuration text is not valid TOML for [`crate::EntityConfig`].
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A jump bound of zero would deactivate on the first relocation.
    #[error("jump limit must be at least 1")]
    ZeroJumpLimit,

    /// Relocation must move past the queried boundary by a positive offset.
    #[error("jump offset must be at least 1")]
    ZeroJumpOffset,

    /// The configuration file could not be read.
    #[error("failed to read configuration {path}: {reason}")]
    ConfigUnreadable {
        /// Path that was being read.
        path: String,
        /// Underlying I/O failure.
        reason: String,
    },
}

/// Result type for JumpPrime configuration operations.
pub type JumpPrimeResult<T> = Result<T, JumpPrimeError>;
