//! AuthSession: who is logged in behind a session token.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use registrar_core::models::{Semester, StudentId};

/// Per-session state: the authenticated student and activity timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    /// Opaque token stored in the session cookie.
    pub token: String,
    pub student_id: StudentId,
    /// Display name captured at login.
    pub name: String,
    /// Semester captured at login, kept in step by `update-semester`.
    pub semester: Semester,
    pub created_at: DateTime<Utc>,
    pub last_activity: DateTime<Utc>,
}

impl AuthSession {
    /// Create a session with a fresh random token.
    pub fn new(student_id: StudentId, name: String, semester: Semester) -> Self {
        let now = Utc::now();
        Self {
            token: uuid::Uuid::new_v4().simple().to_string(),
            student_id,
            name,
            semester,
            created_at: now,
            last_activity: now,
        }
    }

    /// Record activity.
    pub fn touch(&mut self) {
        self.last_activity = Utc::now();
    }

    /// Duration since last activity.
    pub fn idle_duration(&self) -> chrono::Duration {
        Utc::now() - self.last_activity
    }

    /// Duration since login.
    pub fn session_duration(&self) -> chrono::Duration {
        Utc::now() - self.created_at
    }
}
