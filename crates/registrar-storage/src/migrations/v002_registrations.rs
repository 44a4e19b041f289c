//! v002: Registration sets. `seq` keeps registration order for display.

use rusqlite::Connection;

use registrar_core::errors::RegistrarResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> RegistrarResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS student_courses (
            seq            INTEGER PRIMARY KEY AUTOINCREMENT,
            student_id     TEXT NOT NULL,
            course_id      TEXT NOT NULL,
            registered_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
            UNIQUE (student_id, course_id),
            FOREIGN KEY (student_id) REFERENCES students(id) ON DELETE CASCADE,
            FOREIGN KEY (course_id) REFERENCES courses(id) ON DELETE CASCADE
        );

        CREATE INDEX IF NOT EXISTS idx_student_courses_student ON student_courses(student_id, seq);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))
}
