use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{CourseId, Semester};

/// Kind of contact hours a course carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CourseType {
    Theory,
    Lab,
}

impl CourseType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Theory => "Theory",
            Self::Lab => "Lab",
        }
    }
}

impl fmt::Display for CourseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CourseType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Theory" => Ok(Self::Theory),
            "Lab" => Ok(Self::Lab),
            other => Err(format!("unknown course type: {other}")),
        }
    }
}

/// A course offered in the catalog. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    /// Unique catalog code, e.g. `CS101`.
    pub code: String,
    pub name: String,
    /// Credit weight counted against the semester cap. Always positive.
    pub credits: u32,
    pub course_type: CourseType,
    /// Semester the course is normally taken in.
    pub semester: Semester,
}

/// Catalog entry before it has been assigned an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCourse {
    pub code: String,
    pub name: String,
    pub credits: u32,
    pub course_type: CourseType,
    pub semester: Semester,
}

impl NewCourse {
    pub fn into_course(self, id: CourseId) -> Course {
        Course {
            id,
            code: self.code,
            name: self.name,
            credits: self.credits,
            course_type: self.course_type,
            semester: self.semester,
        }
    }
}

/// Result of an idempotent catalog seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The catalog was not empty; nothing was written.
    AlreadySeeded { existing: usize },
    /// The catalog was empty and every entry was inserted.
    Seeded { inserted: usize },
}
