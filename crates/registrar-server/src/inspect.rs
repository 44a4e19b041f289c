//! Plain-text dump of students and courses for the `inspect` command.

use std::fmt::Write;

use registrar_core::errors::RegistrarResult;
use registrar_core::traits::IRegistryStorage;

/// Render every student and course. Password hashes never leave storage here.
pub fn render_report(storage: &dyn IRegistryStorage) -> RegistrarResult<String> {
    let students = storage.list_students()?;
    let courses = storage.list_courses()?;
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(out, "Students ({})", students.len());
    if students.is_empty() {
        let _ = writeln!(out, "  (none)");
    }
    for s in &students {
        let _ = writeln!(
            out,
            "  {name} <{email}> student #{number}, semester {semester}, {count} course(s) registered",
            name = s.name,
            email = s.email,
            number = s.student_number,
            semester = s.semester,
            count = s.registered_courses.len(),
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Courses ({})", courses.len());
    if courses.is_empty() {
        let _ = writeln!(out, "  (none; run `registrar init-courses`)");
    }
    for c in &courses {
        let _ = writeln!(
            out,
            "  {code:<7} {name:<40} {credits} credits  {kind}",
            code = c.code,
            name = c.name,
            credits = c.credits,
            kind = c.course_type,
        );
    }
    Ok(out)
}
