//! # registrar-storage
//!
//! SQLite persistence for courses, students, and registration sets.
//!
//! ## Modules
//!
//! - `pool`: single write connection plus a round-robin read pool
//! - `migrations`: versioned schema migrations tracked in `schema_version`
//! - `queries`: SQL for courses, students, and registrations
//! - `engine`: `StorageEngine`, the `IRegistryStorage` implementation

pub mod engine;
pub mod migrations;
pub mod pool;
pub mod queries;

pub use engine::StorageEngine;

use registrar_core::errors::{RegistrarError, StorageError};

/// Wrap a low-level failure as a storage error.
pub(crate) fn to_storage_err(message: impl Into<String>) -> RegistrarError {
    RegistrarError::StorageError(StorageError::SqliteError {
        message: message.into(),
    })
}
