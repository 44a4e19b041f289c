//! Session lifecycle management.
//!
//! A session expires after `max_age` from login or `inactivity_timeout`
//! without activity, whichever comes first.

use chrono::Duration;

use registrar_core::config::SessionConfig;

use crate::context::AuthSession;
use crate::manager::SessionManager;

/// Default max session duration: 24 hours.
pub const DEFAULT_MAX_AGE: Duration = Duration::hours(24);

/// Default inactivity timeout: 24 hours.
pub const DEFAULT_INACTIVITY_TIMEOUT: Duration = Duration::hours(24);

/// Upper bound applied to configured lifetimes (about 100 years).
const MAX_CONFIGURED_SECS: u64 = 100 * 365 * 86_400;

/// Expiry rules for sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionLifetime {
    pub max_age: Duration,
    pub inactivity_timeout: Duration,
}

impl SessionLifetime {
    pub fn is_expired(&self, session: &AuthSession) -> bool {
        session.session_duration() > self.max_age
            || session.idle_duration() > self.inactivity_timeout
    }
}

impl Default for SessionLifetime {
    fn default() -> Self {
        Self {
            max_age: DEFAULT_MAX_AGE,
            inactivity_timeout: DEFAULT_INACTIVITY_TIMEOUT,
        }
    }
}

impl From<&SessionConfig> for SessionLifetime {
    fn from(config: &SessionConfig) -> Self {
        let secs = |v: u64| Duration::seconds(v.min(MAX_CONFIGURED_SECS) as i64);
        Self {
            max_age: secs(config.max_age_secs),
            inactivity_timeout: secs(config.inactivity_timeout_secs),
        }
    }
}

/// Remove every expired session from the manager.
///
/// Returns the number of sessions removed.
pub fn cleanup_expired_sessions(manager: &SessionManager) -> usize {
    let lifetime = manager.lifetime();
    let mut removed = 0;

    for token in manager.tokens() {
        let should_remove = manager
            .peek(&token)
            .map(|session| lifetime.is_expired(&session))
            .unwrap_or(false);

        if should_remove && manager.remove_session(&token).is_some() {
            removed += 1;
        }
    }

    removed
}
