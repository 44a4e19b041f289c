mod course;
mod credit_summary;
mod ids;
mod semester;
mod student;

pub use course::{Course, CourseType, NewCourse, SeedOutcome};
pub use credit_summary::{CreditSummary, RegistrationCheck, RegistrationReceipt, SemesterChange};
pub use ids::{CourseId, StudentId};
pub use semester::Semester;
pub use student::{NewStudent, Student, StudentCredentials};
