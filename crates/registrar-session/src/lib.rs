//! # registrar-session
//!
//! Server-side login sessions keyed by an opaque random token.
//! Concurrent access via `DashMap`.
//!
//! ## Modules
//!
//! - `manager`: `SessionManager` with `DashMap` for concurrent access
//! - `context`: `AuthSession`, the authenticated student carried per request
//! - `cleanup`: expiry rules and stale session removal

pub mod cleanup;
pub mod context;
pub mod manager;

pub use cleanup::{cleanup_expired_sessions, SessionLifetime};
pub use context::AuthSession;
pub use manager::SessionManager;
