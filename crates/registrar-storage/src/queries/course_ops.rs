//! Course catalog reads and the idempotent seed.

use rusqlite::{params, Connection, OptionalExtension, Row};

use registrar_core::errors::RegistrarResult;
use registrar_core::models::{Course, CourseId, CourseType, NewCourse, SeedOutcome, Semester};

use crate::to_storage_err;

const COURSE_COLUMNS: &str = "id, code, name, credits, course_type, semester";

/// Map a row selected with [`COURSE_COLUMNS`] (optionally table-qualified).
pub(crate) fn row_to_course(row: &Row<'_>) -> rusqlite::Result<Course> {
    let course_type: String = row.get(4)?;
    let semester: i64 = row.get(5)?;
    Ok(Course {
        id: CourseId::from_trusted(row.get::<_, String>(0)?),
        code: row.get(1)?,
        name: row.get(2)?,
        credits: row.get(3)?,
        course_type: course_type.parse::<CourseType>().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(4, rusqlite::types::Type::Text, e.into())
        })?,
        semester: Semester::new(semester).ok_or_else(|| {
            rusqlite::Error::IntegralValueOutOfRange(5, semester)
        })?,
    })
}

pub fn count_courses(conn: &Connection) -> RegistrarResult<usize> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM courses", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(count as usize)
}

pub fn get_course(conn: &Connection, id: &CourseId) -> RegistrarResult<Option<Course>> {
    conn.query_row(
        &format!("SELECT {COURSE_COLUMNS} FROM courses WHERE id = ?1"),
        params![id.as_str()],
        row_to_course,
    )
    .optional()
    .map_err(|e| to_storage_err(e.to_string()))
}

/// Credits descending, code ascending.
pub fn list_courses(conn: &Connection) -> RegistrarResult<Vec<Course>> {
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {COURSE_COLUMNS} FROM courses ORDER BY credits DESC, code ASC"
        ))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map([], row_to_course)
        .map_err(|e| to_storage_err(e.to_string()))?;

    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))
}

/// Insert a single course under a fresh id.
pub fn insert_course(conn: &Connection, course: &NewCourse) -> RegistrarResult<Course> {
    let id = CourseId::generate();
    conn.execute(
        "INSERT INTO courses (id, code, name, credits, course_type, semester)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            id.as_str(),
            course.code,
            course.name,
            course.credits,
            course.course_type.as_str(),
            course.semester.value(),
        ],
    )
    .map_err(|e| to_storage_err(format!("insert course {}: {e}", course.code)))?;
    Ok(course.clone().into_course(id))
}

/// Insert `catalog` only when the table is empty. Call inside a transaction.
pub fn seed_courses(conn: &Connection, catalog: &[NewCourse]) -> RegistrarResult<SeedOutcome> {
    let existing = count_courses(conn)?;
    if existing > 0 {
        return Ok(SeedOutcome::AlreadySeeded { existing });
    }
    for course in catalog {
        insert_course(conn, course)?;
    }
    Ok(SeedOutcome::Seeded {
        inserted: catalog.len(),
    })
}
