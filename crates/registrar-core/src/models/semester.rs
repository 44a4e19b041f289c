use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_SEMESTER, MIN_SEMESTER};
use crate::errors::EnrollmentError;
use crate::policy::credit_limit_for;

/// Academic term number, always within [1, 8].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Semester(u8);

impl Semester {
    pub const FIRST: Semester = Semester(MIN_SEMESTER);
    pub const LAST: Semester = Semester(MAX_SEMESTER);

    /// Strict constructor: `None` unless `value` is in [1, 8].
    pub fn new(value: i64) -> Option<Self> {
        if (i64::from(MIN_SEMESTER)..=i64::from(MAX_SEMESTER)).contains(&value) {
            Some(Self(value as u8))
        } else {
            None
        }
    }

    /// Clamp any integer into [1, 8].
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(i64::from(MIN_SEMESTER), i64::from(MAX_SEMESTER)) as u8)
    }

    /// Lenient sign-up parsing: blank, zero, NaN or unparsable input means
    /// the first semester. Anything else, infinities included, is clamped
    /// into [1, 8] and truncated.
    pub fn from_form_input(raw: &str) -> Self {
        match raw.trim().parse::<f64>() {
            Ok(v) if !v.is_nan() && v != 0.0 => {
                Self(v.clamp(f64::from(MIN_SEMESTER), f64::from(MAX_SEMESTER)).trunc() as u8)
            }
            _ => Self::FIRST,
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Credit cap for this semester.
    pub fn credit_limit(self) -> u32 {
        credit_limit_for(i64::from(self.0))
    }
}

impl Default for Semester {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for Semester {
    type Error = EnrollmentError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(EnrollmentError::InvalidSemester {
            value: value.to_string(),
        })
    }
}

impl From<Semester> for u8 {
    fn from(semester: Semester) -> Self {
        semester.0
    }
}
