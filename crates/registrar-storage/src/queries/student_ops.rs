//! Student creation, lookup, and credential reads.

use rusqlite::{params, Connection, OptionalExtension};

use registrar_core::errors::{RegistrarError, RegistrarResult};
use registrar_core::models::{NewStudent, Semester, Student, StudentCredentials, StudentId};

use crate::queries::registration_ops::registered_course_ids;
use crate::to_storage_err;

fn semester_from_sql(value: i64, column: usize) -> rusqlite::Result<Semester> {
    Semester::new(value).ok_or(rusqlite::Error::IntegralValueOutOfRange(column, value))
}

pub fn email_exists(conn: &Connection, email: &str) -> RegistrarResult<bool> {
    conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM students WHERE email = ?1)",
        params![email],
        |row| row.get(0),
    )
    .map_err(|e| to_storage_err(e.to_string()))
}

pub fn student_number_exists(conn: &Connection, student_number: &str) -> RegistrarResult<bool> {
    conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM students WHERE student_number = ?1)",
        params![student_number],
        |row| row.get(0),
    )
    .map_err(|e| to_storage_err(e.to_string()))
}

/// `EmailInUse` or `StudentNumberInUse` if either identity is taken.
pub fn ensure_identity_available(
    conn: &Connection,
    email: &str,
    student_number: &str,
) -> RegistrarResult<()> {
    let email = NewStudent::normalize_email(email);
    if email_exists(conn, &email)? {
        return Err(RegistrarError::EmailInUse { email });
    }
    if student_number_exists(conn, student_number)? {
        return Err(RegistrarError::StudentNumberInUse {
            student_number: student_number.to_string(),
        });
    }
    Ok(())
}

/// Insert a student. Call inside a transaction so the uniqueness checks and
/// the insert see the same snapshot.
pub fn insert_student(conn: &Connection, student: &NewStudent) -> RegistrarResult<Student> {
    ensure_identity_available(conn, &student.email, &student.student_number)?;
    let email = NewStudent::normalize_email(&student.email);

    let id = StudentId::generate();
    conn.execute(
        "INSERT INTO students (id, name, email, student_number, password_hash, semester)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            id.as_str(),
            student.name,
            email,
            student.student_number,
            student.password_hash,
            student.semester.value(),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    Ok(Student {
        id,
        name: student.name.clone(),
        email,
        student_number: student.student_number.clone(),
        semester: student.semester,
        registered_courses: Vec::new(),
    })
}

/// Load a student together with their registration set.
pub fn get_student(conn: &Connection, id: &StudentId) -> RegistrarResult<Option<Student>> {
    let row = conn
        .query_row(
            "SELECT name, email, student_number, semester FROM students WHERE id = ?1",
            params![id.as_str()],
            |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    semester_from_sql(row.get(3)?, 3)?,
                ))
            },
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;

    let Some((name, email, student_number, semester)) = row else {
        return Ok(None);
    };

    Ok(Some(Student {
        id: id.clone(),
        name,
        email,
        student_number,
        semester,
        registered_courses: registered_course_ids(conn, id)?,
    }))
}

pub fn find_credentials(conn: &Connection, email: &str) -> RegistrarResult<Option<StudentCredentials>> {
    conn.query_row(
        "SELECT id, name, semester, password_hash FROM students WHERE email = ?1",
        params![NewStudent::normalize_email(email)],
        |row| {
            Ok(StudentCredentials {
                student_id: StudentId::from_trusted(row.get::<_, String>(0)?),
                name: row.get(1)?,
                semester: semester_from_sql(row.get(2)?, 2)?,
                password_hash: row.get(3)?,
            })
        },
    )
    .optional()
    .map_err(|e| to_storage_err(e.to_string()))
}

/// Every student in sign-up order.
pub fn list_students(conn: &Connection) -> RegistrarResult<Vec<Student>> {
    let mut stmt = conn
        .prepare("SELECT id FROM students ORDER BY created_at ASC, rowid ASC")
        .map_err(|e| to_storage_err(e.to_string()))?;
    let ids = stmt
        .query_map([], |row| row.get::<_, String>(0))
        .map_err(|e| to_storage_err(e.to_string()))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut students = Vec::with_capacity(ids.len());
    for id in ids {
        if let Some(student) = get_student(conn, &StudentId::from_trusted(id))? {
            students.push(student);
        }
    }
    Ok(students)
}

pub fn set_semester(conn: &Connection, id: &StudentId, semester: Semester) -> RegistrarResult<()> {
    conn.execute(
        "UPDATE students
         SET semester = ?2, updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
         WHERE id = ?1",
        params![id.as_str(), semester.value()],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
