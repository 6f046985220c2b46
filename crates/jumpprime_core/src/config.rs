//! # Entity Configuration
//!
//! Tunables for [`crate::JumpEntity`], loaded once from TOML.
//!
//! ```toml
//! jump_limit = 10
//! jump_offset = 100
//! min_initial_value = 100
//! ```
//!
//! Missing keys fall back to the defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{JumpPrimeError, JumpPrimeResult};

/// Relocations allowed before an entity deactivates.
pub const DEFAULT_JUMP_LIMIT: u32 = 10;

/// Distance past the queried boundary that a relocation lands on.
pub const DEFAULT_JUMP_OFFSET: u32 = 100;

/// Smallest accepted initial value (three digits).
pub const MIN_INITIAL_VALUE: u32 = 100;

/// Initial value used by `JumpEntity::default()`.
pub const DEFAULT_INITIAL_VALUE: u32 = 9999;

/// Configuration shared by the entities of one construction call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EntityConfig {
    /// Relocations before the entity becomes inactive.
    pub jump_limit: u32,
    /// Offset applied past the boundary on relocation.
    pub jump_offset: u32,
    /// Initial values below this are born failed.
    pub min_initial_value: u32,
}

impl Default for EntityConfig {
    fn default() -> Self {
        Self {
            jump_limit: DEFAULT_JUMP_LIMIT,
            jump_offset: DEFAULT_JUMP_OFFSET,
            min_initial_value: MIN_INITIAL_VALUE,
        }
    }
}

impl EntityConfig {
    /// Default configuration with a custom jump bound.
    #[must_use]
    pub fn with_jump_limit(jump_limit: u32) -> Self {
        Self {
            jump_limit,
            ..Self::default()
        }
    }

    /// Parses and validates configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`JumpPrimeError::InvalidConfig`] for malformed TOML or unknown
    /// keys, and the validation errors of [`EntityConfig::validate`].
    pub fn from_toml_str(text: &str) -> JumpPrimeResult<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| JumpPrimeError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`JumpPrimeError::ConfigUnreadable`] if the file cannot be
    /// read, otherwise the errors of [`EntityConfig::from_toml_str`].
    pub fn from_toml_file(path: impl AsRef<Path>) -> JumpPrimeResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| JumpPrimeError::ConfigUnreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!("Loaded entity config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Checks the configuration for values the lifecycle cannot honour.
    ///
    /// # Errors
    ///
    /// Returns [`JumpPrimeError::ZeroJumpLimit`] or
    /// [`JumpPrimeError::ZeroJumpOffset`].
    pub fn validate(&self) -> JumpPrimeResult<()> {
        if self.jump_limit == 0 {
            return Err(JumpPrimeError::ZeroJumpLimit);
        }
        if self.jump_offset == 0 {
            return Err(JumpPrimeError::ZeroJumpOffset);
        }
        Ok(())
    }
}
