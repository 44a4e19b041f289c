//! Registration set reads and the policy-gated mutations.
//!
//! Mutations load the student, evaluate the enrollment policy, and write,
//! all inside one immediate transaction.

use rusqlite::{params, Connection};

use registrar_core::errors::{RegistrarError, RegistrarResult};
use registrar_core::models::{
    Course, CourseId, RegistrationReceipt, SemesterChange, Student, StudentId,
};
use registrar_core::policy::EnrollmentPolicy;

use crate::queries::course_ops::{get_course, row_to_course};
use crate::queries::student_ops::{get_student, set_semester};
use crate::queries::with_immediate_tx;
use crate::to_storage_err;

/// Registered course ids in registration order.
pub fn registered_course_ids(conn: &Connection, student_id: &StudentId) -> RegistrarResult<Vec<CourseId>> {
    let mut stmt = conn
        .prepare("SELECT course_id FROM student_courses WHERE student_id = ?1 ORDER BY seq ASC")
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(params![student_id.as_str()], |row| {
            Ok(CourseId::from_trusted(row.get::<_, String>(0)?))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))
}

/// Registered courses resolved from ids, in registration order.
pub fn registered_courses(conn: &Connection, student_id: &StudentId) -> RegistrarResult<Vec<Course>> {
    let mut stmt = conn
        .prepare(
            "SELECT c.id, c.code, c.name, c.credits, c.course_type, c.semester
             FROM student_courses sc
             JOIN courses c ON c.id = sc.course_id
             WHERE sc.student_id = ?1
             ORDER BY sc.seq ASC",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(params![student_id.as_str()], row_to_course)
        .map_err(|e| to_storage_err(e.to_string()))?;

    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))
}

fn require_student(conn: &Connection, student_id: &StudentId) -> RegistrarResult<Student> {
    get_student(conn, student_id)?.ok_or_else(|| RegistrarError::StudentNotFound {
        id: student_id.to_string(),
    })
}

/// Add `course_id` to the student's set if the policy allows it.
pub fn register_course(
    conn: &Connection,
    student_id: &StudentId,
    course_id: &CourseId,
    policy: &EnrollmentPolicy,
) -> RegistrarResult<RegistrationReceipt> {
    with_immediate_tx(conn, "register_course", |conn| {
        let student = require_student(conn, student_id)?;
        let course = get_course(conn, course_id)?.ok_or_else(|| RegistrarError::CourseNotFound {
            id: course_id.to_string(),
        })?;
        let registered = registered_courses(conn, student_id)?;

        let check = policy.can_register(&student, &course, &registered)?;

        conn.execute(
            "INSERT INTO student_courses (student_id, course_id) VALUES (?1, ?2)",
            params![student_id.as_str(), course_id.as_str()],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

        Ok(RegistrationReceipt { course, check })
    })
}

/// Remove `course_id` from the student's set. Absent ids are a no-op.
pub fn unregister_course(
    conn: &Connection,
    student_id: &StudentId,
    course_id: &CourseId,
) -> RegistrarResult<Vec<CourseId>> {
    with_immediate_tx(conn, "unregister_course", |conn| {
        let student = require_student(conn, student_id)?;
        let remaining = registrar_core::policy::unregister(&student.registered_courses, course_id);

        if remaining.len() != student.registered_courses.len() {
            conn.execute(
                "DELETE FROM student_courses WHERE student_id = ?1 AND course_id = ?2",
                params![student_id.as_str(), course_id.as_str()],
            )
            .map_err(|e| to_storage_err(e.to_string()))?;
        }
        Ok(remaining)
    })
}

/// Move the student to `semester`, subject to the policy.
pub fn update_semester(
    conn: &Connection,
    student_id: &StudentId,
    semester: i64,
    policy: &EnrollmentPolicy,
) -> RegistrarResult<SemesterChange> {
    with_immediate_tx(conn, "update_semester", |conn| {
        let student = require_student(conn, student_id)?;
        let registered = registered_courses(conn, student_id)?;

        let change = policy.change_semester(&student, semester, &registered)?;
        set_semester(conn, student_id, change.semester)?;
        Ok(change)
    })
}
