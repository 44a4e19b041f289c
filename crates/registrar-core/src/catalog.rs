//! The fixed seed catalog installed by `init-courses`.

use crate::models::{CourseType, NewCourse, Semester};

/// (code, name, credits, type, semester)
const SEED: [(&str, &str, u32, CourseType, u8); 15] = [
    ("CS101", "Data Structures and Algorithms", 4, CourseType::Theory, 3),
    ("CS102", "Object-Oriented Programming", 3, CourseType::Theory, 2),
    ("CS103", "Database Management Systems", 3, CourseType::Theory, 4),
    ("CS104", "Computer Networks", 3, CourseType::Theory, 5),
    ("CS105", "Software Engineering", 3, CourseType::Theory, 6),
    ("EE201", "Digital Electronics", 4, CourseType::Theory, 3),
    ("EE202", "Signals and Systems", 4, CourseType::Theory, 4),
    ("ME301", "Thermodynamics", 3, CourseType::Theory, 5),
    ("ME302", "Engineering Mechanics", 4, CourseType::Theory, 2),
    ("CE401", "Structural Analysis", 3, CourseType::Theory, 6),
    ("CS151", "Programming Lab", 2, CourseType::Lab, 2),
    ("CS152", "Database Lab", 2, CourseType::Lab, 4),
    ("CS153", "Networks Lab", 2, CourseType::Lab, 5),
    ("EE251", "Electronics Lab", 2, CourseType::Lab, 3),
    ("ME351", "Mechanical Workshop", 2, CourseType::Lab, 5),
];

/// Build the seed catalog.
pub fn seed_catalog() -> Vec<NewCourse> {
    SEED.iter()
        .map(|&(code, name, credits, course_type, semester)| NewCourse {
            code: code.to_string(),
            name: name.to_string(),
            credits,
            course_type,
            semester: Semester::clamped(i64::from(semester)),
        })
        .collect()
}
