//! Password hashing and the authenticated-request extractor.

use std::convert::Infallible;

use axum::extract::{FromRequestParts, OptionalFromRequestParts};
use axum::http::request::Parts;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use registrar_core::errors::{RegistrarError, RegistrarResult};
use registrar_core::models::{Semester, StudentId};
use registrar_session::AuthSession;

use crate::error::ApiError;
use crate::state::AppState;

/// The logged-in student behind a request.
///
/// Handlers that require a login take `AuthContext` directly and reject
/// with 401; pages that only branch on it take `Option<AuthContext>`.
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub token: String,
    pub student_id: StudentId,
    pub name: String,
    pub semester: Semester,
}

impl From<AuthSession> for AuthContext {
    fn from(session: AuthSession) -> Self {
        Self {
            token: session.token,
            student_id: session.student_id,
            name: session.name,
            semester: session.semester,
        }
    }
}

impl AuthContext {
    fn resolve(parts: &Parts, state: &AppState) -> Option<Self> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(state.cookie_name())?.value();
        state.sessions.get_session(token).map(Self::from)
    }
}

impl FromRequestParts<AppState> for AuthContext {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        Self::resolve(parts, state).ok_or(ApiError(RegistrarError::Unauthorized))
    }
}

impl OptionalFromRequestParts<AppState> for AuthContext {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Option<Self>, Self::Rejection> {
        Ok(Self::resolve(parts, state))
    }
}

/// Cookie carrying a fresh session token.
pub fn session_cookie(state: &AppState, token: String) -> Cookie<'static> {
    let max_age = i64::try_from(state.config.session.max_age_secs).unwrap_or(i64::MAX);
    Cookie::build((state.cookie_name().to_string(), token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::seconds(max_age))
        .build()
}

/// Removal cookie matching the one set by [`session_cookie`].
pub fn expired_cookie(state: &AppState) -> Cookie<'static> {
    Cookie::build((state.cookie_name().to_string(), String::new()))
        .path("/")
        .build()
}

/// Hash a password with bcrypt at the configured cost.
pub async fn hash_password(password: String, cost: u32) -> RegistrarResult<String> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| RegistrarError::Internal(format!("hash task failed: {e}")))?
        .map_err(|e| RegistrarError::Internal(format!("password hashing failed: {e}")))
}

/// Check a password against a stored bcrypt hash.
///
/// A malformed stored hash counts as a mismatch, not a fault.
pub async fn verify_password(password: String, hash: String) -> RegistrarResult<bool> {
    let verified = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| RegistrarError::Internal(format!("verify task failed: {e}")))?;
    match verified {
        Ok(matches) => Ok(matches),
        Err(e) => {
            tracing::warn!(error = %e, "stored password hash could not be parsed");
            Ok(false)
        }
    }
}
