mod enrollment_error;
mod storage_error;

pub use enrollment_error::EnrollmentError;
pub use storage_error::StorageError;

/// Convenience alias used across the workspace.
pub type RegistrarResult<T> = Result<T, RegistrarError>;

/// Top-level error for every Registrar operation.
#[derive(Debug, thiserror::Error)]
pub enum RegistrarError {
    #[error("unauthorized: no active session")]
    Unauthorized,

    #[error("student not found: {id}")]
    StudentNotFound { id: String },

    #[error("course not found: {id}")]
    CourseNotFound { id: String },

    #[error("malformed identifier: {id}")]
    InvalidId { id: String },

    #[error("email already in use: {email}")]
    EmailInUse { email: String },

    #[error("student number already in use: {student_number}")]
    StudentNumberInUse { student_number: String },

    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("enrollment rejected: {0}")]
    EnrollmentError(#[from] EnrollmentError),

    #[error("storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("config error: {0}")]
    ConfigError(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl RegistrarError {
    /// Backing-store or runtime failures that a retry may clear.
    /// Everything else is a caller or business-rule error.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::StorageError(_) | Self::Internal(_))
    }
}
