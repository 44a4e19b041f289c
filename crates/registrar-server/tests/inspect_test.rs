use registrar_core::catalog::seed_catalog;
use registrar_core::models::{NewStudent, Semester};
use registrar_core::traits::IRegistryStorage;
use registrar_server::inspect::render_report;
use registrar_storage::StorageEngine;

#[test]
fn empty_database_report_points_at_init_courses() {
    let engine = StorageEngine::open_in_memory().unwrap();
    let report = render_report(&engine).unwrap();
    assert!(report.contains("Students (0)"));
    assert!(report.contains("registrar init-courses"));
}

#[test]
fn report_lists_students_and_courses_without_hashes() {
    let engine = StorageEngine::open_in_memory().unwrap();
    engine.seed_courses(&seed_catalog()).unwrap();
    engine
        .create_student(&NewStudent {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.edu".to_string(),
            student_number: "S-0001".to_string(),
            password_hash: "$2b$04$secret-hash-material".to_string(),
            semester: Semester::new(3).unwrap(),
        })
        .unwrap();

    let report = render_report(&engine).unwrap();
    assert!(report.contains("Students (1)"));
    assert!(report.contains("Ada Lovelace <ada@example.edu> student #S-0001, semester 3"));
    assert!(report.contains("Courses (15)"));
    assert!(report.contains("CS101"));
    assert!(!report.contains("secret-hash-material"));
}
