//! Mapping from [`RegistrarError`] to HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use registrar_core::errors::{EnrollmentError, RegistrarError};
use registrar_observability::events;

use crate::response::ApiResponse;

pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

/// Error returned by JSON handlers.
#[derive(Debug)]
pub struct ApiError(pub RegistrarError);

impl From<RegistrarError> for ApiError {
    fn from(err: RegistrarError) -> Self {
        Self(err)
    }
}

impl From<EnrollmentError> for ApiError {
    fn from(err: EnrollmentError) -> Self {
        Self(RegistrarError::EnrollmentError(err))
    }
}

impl ApiError {
    /// Status code and client-facing message.
    pub fn status_and_message(&self) -> (StatusCode, String) {
        match &self.0 {
            RegistrarError::Unauthorized | RegistrarError::StudentNotFound { .. } => {
                (StatusCode::UNAUTHORIZED, "Unauthorized".to_string())
            }
            RegistrarError::CourseNotFound { .. } => {
                (StatusCode::NOT_FOUND, "Course not found".to_string())
            }
            RegistrarError::InvalidId { .. } => {
                (StatusCode::BAD_REQUEST, "Invalid course id".to_string())
            }
            RegistrarError::EmailInUse { .. } => {
                (StatusCode::CONFLICT, "Email already in use".to_string())
            }
            RegistrarError::StudentNumberInUse { .. } => {
                (StatusCode::CONFLICT, "Student ID already in use".to_string())
            }
            RegistrarError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "Invalid email or password".to_string())
            }
            RegistrarError::EnrollmentError(err) => (StatusCode::BAD_REQUEST, enrollment_message(err)),
            RegistrarError::StorageError(_)
            | RegistrarError::ConfigError(_)
            | RegistrarError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_FAILURE.to_string())
            }
        }
    }
}

/// Client-facing text for a policy rejection.
pub fn enrollment_message(err: &EnrollmentError) -> String {
    match err {
        EnrollmentError::AlreadyRegistered { .. } => "Already registered for this course".to_string(),
        EnrollmentError::InvalidSemester { .. } => "Invalid semester value".to_string(),
        EnrollmentError::CreditLimitExceeded { .. } => err.to_string(),
        EnrollmentError::SemesterOverLimit {
            semester,
            limit,
            total_credits,
        } => format!(
            "Credit limit exceeded! Semester {semester} allows {limit} credits \
             but {total_credits} are already registered"
        ),
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        if status.is_server_error() {
            events::request_failed("api", &self.0);
        }
        (status, Json(ApiResponse::failure(message))).into_response()
    }
}
