use serde::{Deserialize, Serialize};

use super::{Course, Semester};

/// Credit position of a student in their current semester.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditSummary {
    pub semester: Semester,
    pub credit_limit: u32,
    pub total_credits: u32,
    /// `credit_limit - total_credits`; negative when over the cap.
    pub remaining_credits: i64,
}

/// Accepted registration decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistrationCheck {
    pub semester: Semester,
    pub limit: u32,
    pub current_total: u32,
    pub new_total: u32,
}

/// Returned once a registration has been persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationReceipt {
    pub course: Course,
    pub check: RegistrationCheck,
}

/// Outcome of a semester change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemesterChange {
    pub previous: Semester,
    pub semester: Semester,
    pub credit_limit: u32,
    /// Unchanged by the semester move.
    pub total_credits: u32,
    pub remaining_credits: i64,
}
