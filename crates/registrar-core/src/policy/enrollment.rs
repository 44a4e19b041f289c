use crate::errors::EnrollmentError;
use crate::models::{
    Course, CourseId, CreditSummary, RegistrationCheck, Semester, SemesterChange, Student,
};

/// Sum of credits over a set of courses.
pub fn total_credits(courses: &[Course]) -> u32 {
    courses.iter().map(|c| c.credits).sum()
}

/// Credit position for `semester` given the registered courses.
pub fn credit_summary(semester: Semester, registered: &[Course]) -> CreditSummary {
    let credit_limit = semester.credit_limit();
    let total = total_credits(registered);
    CreditSummary {
        semester,
        credit_limit,
        total_credits: total,
        remaining_credits: i64::from(credit_limit) - i64::from(total),
    }
}

/// Decide whether `student` may add `candidate` on top of `registered`.
///
/// `registered` must be the student's registered courses resolved from ids.
/// Nothing is mutated; the caller adds the course only on `Ok`.
pub fn can_register(
    student: &Student,
    candidate: &Course,
    registered: &[Course],
) -> Result<RegistrationCheck, EnrollmentError> {
    if student.is_registered(&candidate.id) || registered.iter().any(|c| c.id == candidate.id) {
        return Err(EnrollmentError::AlreadyRegistered {
            course_id: candidate.id.to_string(),
        });
    }

    let limit = student.semester.credit_limit();
    let current_total = total_credits(registered);
    let new_total = current_total + candidate.credits;

    if new_total > limit {
        return Err(EnrollmentError::CreditLimitExceeded {
            limit,
            current_total,
            attempted: candidate.credits,
            semester: student.semester,
        });
    }

    Ok(RegistrationCheck {
        semester: student.semester,
        limit,
        current_total,
        new_total,
    })
}

/// Drop `course_id` from a registration set. Absent ids are a no-op and the
/// order of the remaining ids is kept.
pub fn unregister(registration_set: &[CourseId], course_id: &CourseId) -> Vec<CourseId> {
    registration_set
        .iter()
        .filter(|id| *id != course_id)
        .cloned()
        .collect()
}

/// Move `student` to `new_semester`.
///
/// Existing registrations are not re-checked against the new cap, so
/// `remaining_credits` may come back negative.
pub fn change_semester(
    student: &Student,
    new_semester: i64,
    registered: &[Course],
) -> Result<SemesterChange, EnrollmentError> {
    let semester = Semester::try_from(new_semester)?;
    let summary = credit_summary(semester, registered);
    Ok(SemesterChange {
        previous: student.semester,
        semester,
        credit_limit: summary.credit_limit,
        total_credits: summary.total_credits,
        remaining_credits: summary.remaining_credits,
    })
}

/// Configured policy. The only knob is whether a semester change must keep
/// the student within the new semester's cap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnrollmentPolicy {
    pub revalidate_on_semester_change: bool,
}

impl EnrollmentPolicy {
    pub fn new(revalidate_on_semester_change: bool) -> Self {
        Self {
            revalidate_on_semester_change,
        }
    }

    pub fn can_register(
        &self,
        student: &Student,
        candidate: &Course,
        registered: &[Course],
    ) -> Result<RegistrationCheck, EnrollmentError> {
        can_register(student, candidate, registered)
    }

    pub fn unregister(&self, registration_set: &[CourseId], course_id: &CourseId) -> Vec<CourseId> {
        unregister(registration_set, course_id)
    }

    pub fn change_semester(
        &self,
        student: &Student,
        new_semester: i64,
        registered: &[Course],
    ) -> Result<SemesterChange, EnrollmentError> {
        let change = change_semester(student, new_semester, registered)?;
        if self.revalidate_on_semester_change && change.remaining_credits < 0 {
            return Err(EnrollmentError::SemesterOverLimit {
                semester: change.semester,
                limit: change.credit_limit,
                total_credits: change.total_credits,
            });
        }
        Ok(change)
    }
}
