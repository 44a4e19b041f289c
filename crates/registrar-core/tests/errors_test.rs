use registrar_core::errors::*;
use registrar_core::models::Semester;

#[test]
fn course_not_found_carries_id() {
    let err = RegistrarError::CourseNotFound {
        id: "abc-123".into(),
    };
    assert!(err.to_string().contains("abc-123"));
}

#[test]
fn credit_limit_exceeded_carries_values() {
    let err = EnrollmentError::CreditLimitExceeded {
        limit: 22,
        current_total: 20,
        attempted: 3,
        semester: Semester::new(3).unwrap(),
    };
    let msg = err.to_string();
    assert!(msg.contains("22"));
    assert!(msg.contains("20"));
    assert!(msg.contains("Adding: 3"));
}

// --- From impls ---

#[test]
fn storage_error_converts_to_registrar_error() {
    let storage_err = StorageError::SqliteError {
        message: "disk full".into(),
    };
    let err: RegistrarError = storage_err.into();
    assert!(matches!(err, RegistrarError::StorageError(_)));
    assert!(err.is_transient());
}

#[test]
fn enrollment_error_converts_to_registrar_error() {
    let err: RegistrarError = EnrollmentError::InvalidSemester { value: "9".into() }.into();
    assert!(matches!(err, RegistrarError::EnrollmentError(_)));
    assert!(!err.is_transient());
}

#[test]
fn business_errors_are_not_transient() {
    assert!(!RegistrarError::Unauthorized.is_transient());
    assert!(!RegistrarError::InvalidCredentials.is_transient());
    assert!(RegistrarError::Internal("join".into()).is_transient());
}
