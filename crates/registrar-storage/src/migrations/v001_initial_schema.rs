//! v001: Core tables: courses, students.

use rusqlite::Connection;

use registrar_core::errors::RegistrarResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> RegistrarResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS courses (
            id           TEXT PRIMARY KEY,
            code         TEXT NOT NULL UNIQUE,
            name         TEXT NOT NULL,
            credits      INTEGER NOT NULL CHECK (credits > 0),
            course_type  TEXT NOT NULL CHECK (course_type IN ('Theory', 'Lab')),
            semester     INTEGER NOT NULL CHECK (semester BETWEEN 1 AND 8),
            created_at   TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );

        CREATE INDEX IF NOT EXISTS idx_courses_credits ON courses(credits DESC, code);

        CREATE TABLE IF NOT EXISTS students (
            id              TEXT PRIMARY KEY,
            name            TEXT NOT NULL,
            email           TEXT NOT NULL UNIQUE,
            student_number  TEXT NOT NULL UNIQUE,
            password_hash   TEXT NOT NULL,
            semester        INTEGER NOT NULL DEFAULT 1 CHECK (semester BETWEEN 1 AND 8),
            created_at      TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
            updated_at      TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))
}
