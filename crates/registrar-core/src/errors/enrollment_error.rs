use crate::models::Semester;

/// Business-rule rejections raised by the enrollment policy.
///
/// These are values, not faults: the request layer turns each one into a
/// structured failure response with a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnrollmentError {
    #[error("already registered for course {course_id}")]
    AlreadyRegistered { course_id: String },

    #[error(
        "Credit limit exceeded! Maximum {limit} credits allowed for Semester {semester}. \
         Current: {current_total}, Adding: {attempted}"
    )]
    CreditLimitExceeded {
        limit: u32,
        current_total: u32,
        attempted: u32,
        semester: Semester,
    },

    #[error("invalid semester value: {value}")]
    InvalidSemester { value: String },

    #[error(
        "semester {semester} allows {limit} credits but {total_credits} are already registered"
    )]
    SemesterOverLimit {
        semester: Semester,
        limit: u32,
        total_credits: u32,
    },
}
