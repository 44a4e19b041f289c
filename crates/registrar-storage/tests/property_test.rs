//! Property tests: stored registration sets respect the cap.

mod common;

use proptest::prelude::*;

use registrar_core::policy::{credit_limit_for, total_credits, EnrollmentPolicy};
use registrar_core::traits::IRegistryStorage;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_stored_total_never_exceeds_limit(
        semester in 1i64..=8,
        picks in proptest::collection::vec(0usize..15, 1..25),
    ) {
        let engine = common::seeded_engine();
        let student = engine.create_student(&common::new_student(1, semester)).unwrap();
        let courses = engine.list_courses().unwrap();

        for pick in picks {
            let _ = engine.register_course(&student.id, &courses[pick].id, &EnrollmentPolicy::default());
            let registered = engine.registered_courses(&student.id).unwrap();
            prop_assert!(total_credits(&registered) <= credit_limit_for(semester));
        }
    }
}
