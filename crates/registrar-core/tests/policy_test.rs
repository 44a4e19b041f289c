use proptest::prelude::*;

use registrar_core::errors::EnrollmentError;
use registrar_core::models::*;
use registrar_core::policy::*;

fn course(code: &str, credits: u32) -> Course {
    Course {
        id: CourseId::generate(),
        code: code.to_string(),
        name: format!("{code} course"),
        credits,
        course_type: CourseType::Theory,
        semester: Semester::FIRST,
    }
}

fn student(semester: i64, registered: &[Course]) -> Student {
    Student {
        id: StudentId::generate(),
        name: "Ada".to_string(),
        email: "ada@example.edu".to_string(),
        student_number: "S-001".to_string(),
        semester: Semester::new(semester).unwrap(),
        registered_courses: registered.iter().map(|c| c.id.clone()).collect(),
    }
}

/// Courses whose credits add up to `total`, in chunks of at most 4.
fn courses_totalling(total: u32) -> Vec<Course> {
    let mut left = total;
    let mut out = Vec::new();
    while left > 0 {
        let chunk = left.min(4);
        out.push(course(&format!("C{}", out.len()), chunk));
        left -= chunk;
    }
    out
}

// --- Credit limit table ---

#[test]
fn credit_limit_table_is_exact() {
    let expected = [(1, 20), (2, 20), (3, 22), (4, 22), (5, 24), (6, 24), (7, 18), (8, 18)];
    for (semester, limit) in expected {
        assert_eq!(credit_limit_for(semester), limit, "semester {semester}");
    }
}

#[test]
fn credit_limit_outside_range_is_default() {
    for semester in [i64::MIN, -1, 0, 9, 10, 100, i64::MAX] {
        assert_eq!(credit_limit_for(semester), 20);
    }
    assert_eq!(credit_limit_for_number(2.5), 20);
    assert_eq!(credit_limit_for_number(f64::INFINITY), 20);
}

// --- can_register ---

#[test]
fn over_limit_registration_is_rejected_with_details() {
    let registered = courses_totalling(20);
    let s = student(3, &registered);
    let candidate = course("NEW", 3);

    let err = can_register(&s, &candidate, &registered).unwrap_err();
    assert_eq!(
        err,
        EnrollmentError::CreditLimitExceeded {
            limit: 22,
            current_total: 20,
            attempted: 3,
            semester: Semester::new(3).unwrap(),
        }
    );
    let msg = err.to_string();
    assert!(msg.contains("Maximum 22 credits allowed for Semester 3"));
    assert!(msg.contains("Current: 20, Adding: 3"));
}

#[test]
fn registration_exactly_at_limit_is_accepted() {
    let registered = courses_totalling(18);
    let s = student(3, &registered);
    let candidate = course("NEW", 4);

    let check = can_register(&s, &candidate, &registered).unwrap();
    assert_eq!(check.limit, 22);
    assert_eq!(check.current_total, 18);
    assert_eq!(check.new_total, 22);
}

#[test]
fn duplicate_registration_is_rejected() {
    let registered = vec![course("CS101", 4)];
    let s = student(1, &registered);

    let err = can_register(&s, &registered[0], &registered).unwrap_err();
    assert!(matches!(err, EnrollmentError::AlreadyRegistered { .. }));
}

// --- unregister ---

#[test]
fn unregister_one_of_two_keeps_the_other() {
    let a = CourseId::generate();
    let b = CourseId::generate();
    let remaining = unregister(&[a.clone(), b.clone()], &a);
    assert_eq!(remaining, vec![b]);
}

#[test]
fn unregister_absent_id_is_noop() {
    let set = vec![CourseId::generate(), CourseId::generate(), CourseId::generate()];
    let remaining = unregister(&set, &CourseId::generate());
    assert_eq!(remaining, set);
}

#[test]
fn unregister_preserves_order_of_the_rest() {
    let set: Vec<CourseId> = (0..4).map(|_| CourseId::generate()).collect();
    let remaining = unregister(&set, &set[1]);
    assert_eq!(remaining, vec![set[0].clone(), set[2].clone(), set[3].clone()]);
}

// --- change_semester ---

#[test]
fn semester_change_does_not_revalidate_by_default() {
    let registered = courses_totalling(19);
    let s = student(2, &registered);

    let change = change_semester(&s, 7, &registered).unwrap();
    assert_eq!(change.previous.value(), 2);
    assert_eq!(change.semester.value(), 7);
    assert_eq!(change.credit_limit, 18);
    assert_eq!(change.total_credits, 19);
    assert_eq!(change.remaining_credits, -1);
}

#[test]
fn semester_change_rejects_out_of_range() {
    let s = student(2, &[]);
    for bad in [0, 9, -4] {
        let err = change_semester(&s, bad, &[]).unwrap_err();
        assert!(matches!(err, EnrollmentError::InvalidSemester { .. }));
    }
}

#[test]
fn strict_policy_rejects_semester_change_over_new_limit() {
    let registered = courses_totalling(19);
    let s = student(2, &registered);
    let policy = EnrollmentPolicy::new(true);

    let err = policy.change_semester(&s, 7, &registered).unwrap_err();
    assert_eq!(
        err,
        EnrollmentError::SemesterOverLimit {
            semester: Semester::new(7).unwrap(),
            limit: 18,
            total_credits: 19,
        }
    );
    // Moving to a roomier semester is still fine.
    assert!(policy.change_semester(&s, 5, &registered).is_ok());
}

#[test]
fn credit_summary_reports_remaining() {
    let registered = courses_totalling(10);
    let summary = credit_summary(Semester::new(5).unwrap(), &registered);
    assert_eq!(summary.credit_limit, 24);
    assert_eq!(summary.total_credits, 10);
    assert_eq!(summary.remaining_credits, 14);
}

// --- Properties ---

proptest! {
    #[test]
    fn prop_gated_additions_never_exceed_limit(
        semester in 1i64..=8,
        credits in proptest::collection::vec(1u32..=6, 0..40),
    ) {
        let mut s = student(semester, &[]);
        let mut registered: Vec<Course> = Vec::new();
        for (i, c) in credits.into_iter().enumerate() {
            let candidate = course(&format!("P{i}"), c);
            if can_register(&s, &candidate, &registered).is_ok() {
                s.registered_courses.push(candidate.id.clone());
                registered.push(candidate);
            }
            prop_assert!(total_credits(&registered) <= credit_limit_for(semester));
        }
    }

    #[test]
    fn prop_unregister_absent_is_identity(len in 0usize..10) {
        let set: Vec<CourseId> = (0..len).map(|_| CourseId::generate()).collect();
        prop_assert_eq!(unregister(&set, &CourseId::generate()), set);
    }

    #[test]
    fn prop_credit_limit_is_total(semester in any::<i64>()) {
        let limit = credit_limit_for(semester);
        prop_assert!([18, 20, 22, 24].contains(&limit));
    }
}
