use serde::{Deserialize, Serialize};

use super::defaults;

/// Login session lifetime and cookie settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Hard lifetime of a session from login, in seconds.
    pub max_age_secs: u64,
    /// Idle time after which a session is dropped, in seconds.
    pub inactivity_timeout_secs: u64,
    /// How often expired sessions are swept, in seconds.
    pub cleanup_interval_secs: u64,
    pub cookie_name: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_age_secs: defaults::DEFAULT_SESSION_MAX_AGE_SECS,
            inactivity_timeout_secs: defaults::DEFAULT_SESSION_INACTIVITY_TIMEOUT_SECS,
            cleanup_interval_secs: defaults::DEFAULT_SESSION_CLEANUP_INTERVAL_SECS,
            cookie_name: defaults::DEFAULT_SESSION_COOKIE_NAME.to_string(),
        }
    }
}
