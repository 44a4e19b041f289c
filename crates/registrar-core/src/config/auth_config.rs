use serde::{Deserialize, Serialize};

use super::defaults;

/// Password hashing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// bcrypt work factor, 4..=31.
    pub bcrypt_cost: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: defaults::DEFAULT_BCRYPT_COST,
        }
    }
}
