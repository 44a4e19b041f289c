//! File-backed engine: migrations, reopen, and concurrent registrations.

mod common;

use std::sync::Arc;

use registrar_core::catalog::seed_catalog;
use registrar_core::policy::{credit_limit_for, total_credits, EnrollmentPolicy};
use registrar_core::traits::IRegistryStorage;
use registrar_storage::migrations::LATEST_VERSION;
use registrar_storage::pool::pragmas::verify_wal_mode;
use registrar_storage::StorageEngine;

#[test]
fn data_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("registrar.db");

    let student_id = {
        let engine = StorageEngine::open(&db_path).unwrap();
        engine.seed_courses(&seed_catalog()).unwrap();
        let student = engine.create_student(&common::new_student(1, 4)).unwrap();
        let course = common::course_by_code(&engine, "CS103");
        engine
            .register_course(&student.id, &course.id, &EnrollmentPolicy::default())
            .unwrap();
        student.id
    };

    let engine = StorageEngine::open(&db_path).unwrap();
    assert_eq!(engine.schema_version().unwrap(), LATEST_VERSION);
    assert_eq!(engine.count_courses().unwrap(), 15);
    let courses = engine.registered_courses(&student_id).unwrap();
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].code, "CS103");
}

#[test]
fn file_backed_engine_uses_wal() {
    let dir = tempfile::tempdir().unwrap();
    let engine = StorageEngine::open(&dir.path().join("wal.db")).unwrap();
    let wal = engine.pool().writer.with_conn(verify_wal_mode).unwrap();
    assert!(wal);
}

#[test]
fn concurrent_registrations_never_exceed_the_cap() {
    let dir = tempfile::tempdir().unwrap();
    let engine = Arc::new(StorageEngine::open(&dir.path().join("race.db")).unwrap());
    engine.seed_courses(&seed_catalog()).unwrap();

    // Semester 7: limit 18, while the whole catalog is worth 44 credits.
    let student = engine.create_student(&common::new_student(1, 7)).unwrap();
    let courses = engine.list_courses().unwrap();

    let mut handles = vec![];
    for chunk in courses.chunks(4) {
        let engine = Arc::clone(&engine);
        let student_id = student.id.clone();
        let chunk = chunk.to_vec();
        handles.push(std::thread::spawn(move || {
            for course in chunk {
                let _ = engine.register_course(&student_id, &course.id, &EnrollmentPolicy::default());
            }
        }));
    }
    for handle in handles {
        handle.join().expect("registration thread should not panic");
    }

    let registered = engine.registered_courses(&student.id).unwrap();
    assert!(!registered.is_empty());
    assert!(total_credits(&registered) <= credit_limit_for(7));
}
