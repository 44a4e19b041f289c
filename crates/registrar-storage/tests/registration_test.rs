//! Policy-gated registration, unregistration, and semester changes.

mod common;

use registrar_core::errors::{EnrollmentError, RegistrarError};
use registrar_core::models::{CourseId, StudentId};
use registrar_core::policy::{total_credits, EnrollmentPolicy};
use registrar_core::traits::IRegistryStorage;

const POLICY: EnrollmentPolicy = EnrollmentPolicy {
    revalidate_on_semester_change: false,
};

fn register(engine: &impl IRegistryStorage, student: &StudentId, codes: &[&str]) {
    for code in codes {
        let course = common::course_by_code(engine, code);
        engine.register_course(student, &course.id, &POLICY).unwrap();
    }
}

#[test]
fn registration_is_persisted_in_order() {
    let engine = common::seeded_engine();
    let student = engine.create_student(&common::new_student(1, 3)).unwrap();

    register(&engine, &student.id, &["CS151", "CS101", "EE201"]);

    let codes: Vec<String> = engine
        .registered_courses(&student.id)
        .unwrap()
        .into_iter()
        .map(|c| c.code)
        .collect();
    assert_eq!(codes, vec!["CS151", "CS101", "EE201"]);
}

#[test]
fn over_limit_registration_is_rejected_and_not_written() {
    let engine = common::seeded_engine();
    // Semester 3: limit 22.
    let student = engine.create_student(&common::new_student(1, 3)).unwrap();
    // 4 + 4 + 4 + 4 + 2 + 2 = 20
    register(
        &engine,
        &student.id,
        &["CS101", "EE201", "EE202", "ME302", "CS151", "CS152"],
    );

    let candidate = common::course_by_code(&engine, "CS102"); // 3 credits
    let err = engine
        .register_course(&student.id, &candidate.id, &POLICY)
        .unwrap_err();
    match err {
        RegistrarError::EnrollmentError(EnrollmentError::CreditLimitExceeded {
            limit,
            current_total,
            attempted,
            semester,
        }) => {
            assert_eq!((limit, current_total, attempted), (22, 20, 3));
            assert_eq!(semester.value(), 3);
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let registered = engine.registered_courses(&student.id).unwrap();
    assert_eq!(total_credits(&registered), 20);
}

#[test]
fn registration_up_to_the_exact_limit_is_accepted() {
    let engine = common::seeded_engine();
    let student = engine.create_student(&common::new_student(1, 3)).unwrap();
    // 4 + 4 + 4 + 2 + 2 + 2 = 18
    register(
        &engine,
        &student.id,
        &["CS101", "EE201", "EE202", "CS151", "CS152", "CS153"],
    );

    let candidate = common::course_by_code(&engine, "ME302"); // 4 credits
    let receipt = engine
        .register_course(&student.id, &candidate.id, &POLICY)
        .unwrap();
    assert_eq!(receipt.check.new_total, 22);
    assert_eq!(receipt.course.code, "ME302");
}

#[test]
fn registering_twice_is_rejected() {
    let engine = common::seeded_engine();
    let student = engine.create_student(&common::new_student(1, 1)).unwrap();
    register(&engine, &student.id, &["CS102"]);

    let course = common::course_by_code(&engine, "CS102");
    let err = engine
        .register_course(&student.id, &course.id, &POLICY)
        .unwrap_err();
    assert!(matches!(
        err,
        RegistrarError::EnrollmentError(EnrollmentError::AlreadyRegistered { .. })
    ));
}

#[test]
fn unknown_course_and_student_are_reported() {
    let engine = common::seeded_engine();
    let student = engine.create_student(&common::new_student(1, 1)).unwrap();

    let err = engine
        .register_course(&student.id, &CourseId::generate(), &POLICY)
        .unwrap_err();
    assert!(matches!(err, RegistrarError::CourseNotFound { .. }));

    let course = common::course_by_code(&engine, "CS102");
    let err = engine
        .register_course(&StudentId::generate(), &course.id, &POLICY)
        .unwrap_err();
    assert!(matches!(err, RegistrarError::StudentNotFound { .. }));
}

#[test]
fn unregister_removes_one_and_keeps_order() {
    let engine = common::seeded_engine();
    let student = engine.create_student(&common::new_student(1, 3)).unwrap();
    register(&engine, &student.id, &["CS101", "CS151"]);

    let first = common::course_by_code(&engine, "CS101");
    let second = common::course_by_code(&engine, "CS151");
    let remaining = engine.unregister_course(&student.id, &first.id).unwrap();
    assert_eq!(remaining, vec![second.id.clone()]);

    let stored = engine.get_student(&student.id).unwrap().unwrap();
    assert_eq!(stored.registered_courses, vec![second.id]);
}

#[test]
fn unregister_absent_course_is_idempotent() {
    let engine = common::seeded_engine();
    let student = engine.create_student(&common::new_student(1, 3)).unwrap();
    register(&engine, &student.id, &["CS101"]);

    let before = engine.get_student(&student.id).unwrap().unwrap();
    let remaining = engine
        .unregister_course(&student.id, &CourseId::generate())
        .unwrap();
    assert_eq!(remaining, before.registered_courses);

    // Removing the same course twice is fine too.
    let course = common::course_by_code(&engine, "CS101");
    engine.unregister_course(&student.id, &course.id).unwrap();
    assert!(engine.unregister_course(&student.id, &course.id).unwrap().is_empty());
}

#[test]
fn semester_change_keeps_registrations_and_can_go_negative() {
    let engine = common::seeded_engine();
    let student = engine.create_student(&common::new_student(1, 2)).unwrap();
    // 4 + 4 + 4 + 3 + 2 + 2 = 19
    register(
        &engine,
        &student.id,
        &["CS101", "EE201", "EE202", "CS102", "CS151", "CS152"],
    );

    let change = engine.update_semester(&student.id, 7, &POLICY).unwrap();
    assert_eq!(change.previous.value(), 2);
    assert_eq!(change.semester.value(), 7);
    assert_eq!(change.credit_limit, 18);
    assert_eq!(change.total_credits, 19);
    assert_eq!(change.remaining_credits, -1);

    let stored = engine.get_student(&student.id).unwrap().unwrap();
    assert_eq!(stored.semester.value(), 7);
    assert_eq!(stored.registered_courses.len(), 6);
}

#[test]
fn strict_policy_blocks_semester_change_over_limit() {
    let engine = common::seeded_engine();
    let student = engine.create_student(&common::new_student(1, 2)).unwrap();
    register(
        &engine,
        &student.id,
        &["CS101", "EE201", "EE202", "CS102", "CS151", "CS152"],
    );

    let strict = EnrollmentPolicy::new(true);
    let err = engine.update_semester(&student.id, 7, &strict).unwrap_err();
    assert!(matches!(
        err,
        RegistrarError::EnrollmentError(EnrollmentError::SemesterOverLimit { .. })
    ));
    let stored = engine.get_student(&student.id).unwrap().unwrap();
    assert_eq!(stored.semester.value(), 2, "rejected change must not be written");
}

#[test]
fn invalid_semester_is_rejected() {
    let engine = common::seeded_engine();
    let student = engine.create_student(&common::new_student(1, 2)).unwrap();

    for bad in [0, 9] {
        let err = engine.update_semester(&student.id, bad, &POLICY).unwrap_err();
        assert!(matches!(
            err,
            RegistrarError::EnrollmentError(EnrollmentError::InvalidSemester { .. })
        ));
    }
}
