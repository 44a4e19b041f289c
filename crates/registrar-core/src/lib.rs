//! # registrar-core
//!
//! Foundation crate for the Registrar course registration service.
//! Defines the domain types, the credit-limit enrollment policy, the seed
//! catalog, errors, config, and constants. No I/O lives here; every other
//! crate in the workspace depends on this.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod policy;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::RegistrarConfig;
pub use errors::{EnrollmentError, RegistrarError, RegistrarResult, StorageError};
pub use models::{
    Course, CourseId, CourseType, CreditSummary, NewCourse, NewStudent, Semester, Student,
    StudentCredentials, StudentId,
};
pub use policy::{credit_limit_for, EnrollmentPolicy};
