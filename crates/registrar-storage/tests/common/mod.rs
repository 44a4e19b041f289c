//! Shared fixtures for storage integration tests.

#![allow(dead_code)]

use registrar_core::catalog::seed_catalog;
use registrar_core::models::*;
use registrar_core::traits::IRegistryStorage;
use registrar_storage::StorageEngine;

pub fn new_student(n: usize, semester: i64) -> NewStudent {
    NewStudent {
        name: format!("Student {n}"),
        email: format!("Student{n}@Example.edu"),
        student_number: format!("S-{n:04}"),
        password_hash: "$2b$04$not-a-real-hash".to_string(),
        semester: Semester::new(semester).unwrap(),
    }
}

/// Seeded in-memory engine plus the catalog keyed by code.
pub fn seeded_engine() -> StorageEngine {
    let engine = StorageEngine::open_in_memory().unwrap();
    engine.seed_courses(&seed_catalog()).unwrap();
    engine
}

pub fn course_by_code(engine: &impl IRegistryStorage, code: &str) -> Course {
    engine
        .list_courses()
        .unwrap()
        .into_iter()
        .find(|c| c.code == code)
        .unwrap_or_else(|| panic!("no course {code}"))
}
