use serde::{Deserialize, Serialize};

use super::defaults;
use crate::policy::EnrollmentPolicy;

/// Enrollment policy switches.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnrollmentConfig {
    /// Reject a semester change that would leave the student over the new
    /// semester's credit cap. Off by default.
    pub revalidate_on_semester_change: bool,
}

impl EnrollmentConfig {
    pub fn policy(&self) -> EnrollmentPolicy {
        EnrollmentPolicy::new(self.revalidate_on_semester_change)
    }
}

impl Default for EnrollmentConfig {
    fn default() -> Self {
        Self {
            revalidate_on_semester_change: defaults::DEFAULT_REVALIDATE_ON_SEMESTER_CHANGE,
        }
    }
}
