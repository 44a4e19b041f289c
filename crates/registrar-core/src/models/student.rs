use serde::{Deserialize, Serialize};

use super::{CourseId, Semester, StudentId};

/// A student and their registration set.
///
/// The password hash is deliberately absent; it only travels inside
/// [`StudentCredentials`] during login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub email: String,
    /// Institutional student number, unique across students.
    pub student_number: String,
    pub semester: Semester,
    /// Registered course ids in registration order.
    pub registered_courses: Vec<CourseId>,
}

impl Student {
    pub fn is_registered(&self, course_id: &CourseId) -> bool {
        self.registered_courses.contains(course_id)
    }
}

/// Sign-up payload.
#[derive(Debug, Clone)]
pub struct NewStudent {
    pub name: String,
    pub email: String,
    pub student_number: String,
    pub password_hash: String,
    pub semester: Semester,
}

impl NewStudent {
    /// Emails are matched case-insensitively; they are stored lowercase.
    pub fn normalize_email(email: &str) -> String {
        email.trim().to_lowercase()
    }
}

/// What login needs to check a password and open a session.
#[derive(Debug, Clone)]
pub struct StudentCredentials {
    pub student_id: StudentId,
    pub name: String,
    pub semester: Semester,
    pub password_hash: String,
}
