//! SessionManager: concurrent per-session access via DashMap.

use std::sync::Arc;

use dashmap::DashMap;

use registrar_core::models::{Semester, StudentId};

use crate::cleanup::SessionLifetime;
use crate::context::AuthSession;

/// Thread-safe session store. Cloning shares the underlying map.
#[derive(Clone)]
pub struct SessionManager {
    sessions: Arc<DashMap<String, AuthSession>>,
    lifetime: SessionLifetime,
}

impl SessionManager {
    /// Create a manager with the default lifetime.
    pub fn new() -> Self {
        Self::with_lifetime(SessionLifetime::default())
    }

    pub fn with_lifetime(lifetime: SessionLifetime) -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
            lifetime,
        }
    }

    pub fn lifetime(&self) -> SessionLifetime {
        self.lifetime
    }

    /// Open a session for a student and return it (token included).
    pub fn create_session(&self, student_id: StudentId, name: String, semester: Semester) -> AuthSession {
        let session = AuthSession::new(student_id, name, semester);
        self.sessions.insert(session.token.clone(), session.clone());
        session
    }

    /// Look up a live session and mark it active. Expired sessions are
    /// evicted and reported as absent.
    pub fn get_session(&self, token: &str) -> Option<AuthSession> {
        {
            let mut entry = self.sessions.get_mut(token)?;
            if !self.lifetime.is_expired(&entry) {
                entry.touch();
                return Some(entry.clone());
            }
        }
        self.sessions.remove(token);
        None
    }

    /// Keep the cached semester in step after a semester change.
    /// Returns false if the session is gone.
    pub fn set_semester(&self, token: &str, semester: Semester) -> bool {
        if let Some(mut entry) = self.sessions.get_mut(token) {
            entry.semester = semester;
            entry.touch();
            true
        } else {
            false
        }
    }

    /// Remove a session.
    pub fn remove_session(&self, token: &str) -> Option<AuthSession> {
        self.sessions.remove(token).map(|(_, v)| v)
    }

    /// Number of stored sessions, expired or not.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Snapshot of all stored tokens.
    pub fn tokens(&self) -> Vec<String> {
        self.sessions.iter().map(|r| r.key().clone()).collect()
    }

    /// Peek without touching or evicting.
    pub(crate) fn peek(&self, token: &str) -> Option<AuthSession> {
        self.sessions.get(token).map(|r| r.clone())
    }

    /// Replace a stored session (test hook for ageing sessions).
    pub fn update_session(&self, session: AuthSession) {
        self.sessions.insert(session.token.clone(), session);
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}
