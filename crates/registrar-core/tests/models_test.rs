use registrar_core::catalog::seed_catalog;
use registrar_core::constants::SEED_CATALOG_SIZE;
use registrar_core::models::*;

#[test]
fn semester_strict_constructor_bounds() {
    assert!(Semester::new(0).is_none());
    assert_eq!(Semester::new(1).unwrap().value(), 1);
    assert_eq!(Semester::new(8).unwrap().value(), 8);
    assert!(Semester::new(9).is_none());
}

#[test]
fn semester_form_input_is_clamped() {
    assert_eq!(Semester::from_form_input("").value(), 1);
    assert_eq!(Semester::from_form_input("abc").value(), 1);
    assert_eq!(Semester::from_form_input("0").value(), 1);
    assert_eq!(Semester::from_form_input("-5").value(), 1);
    assert_eq!(Semester::from_form_input(" 4 ").value(), 4);
    assert_eq!(Semester::from_form_input("42").value(), 8);
}

#[test]
fn semester_form_input_handles_non_finite_values() {
    assert_eq!(Semester::from_form_input("Infinity").value(), 8);
    assert_eq!(Semester::from_form_input("-Infinity").value(), 1);
    assert_eq!(Semester::from_form_input("NaN").value(), 1);
    assert_eq!(Semester::from_form_input("6.9").value(), 6);
}

#[test]
fn semester_serde_rejects_out_of_range() {
    assert!(serde_json::from_str::<Semester>("3").is_ok());
    assert!(serde_json::from_str::<Semester>("12").is_err());
    assert_eq!(serde_json::to_string(&Semester::LAST).unwrap(), "8");
}

#[test]
fn ids_parse_only_uuids() {
    let id = CourseId::generate();
    assert_eq!(CourseId::parse(id.as_str()).unwrap(), id);
    assert!(CourseId::parse("not-a-uuid").is_err());
    assert!(StudentId::parse("").is_err());
}

#[test]
fn course_type_round_trips_through_text() {
    assert_eq!("Lab".parse::<CourseType>().unwrap(), CourseType::Lab);
    assert_eq!(CourseType::Theory.to_string(), "Theory");
    assert!("Seminar".parse::<CourseType>().is_err());
}

#[test]
fn seed_catalog_has_fifteen_unique_codes() {
    let catalog = seed_catalog();
    assert_eq!(catalog.len(), SEED_CATALOG_SIZE);

    let mut codes: Vec<&str> = catalog.iter().map(|c| c.code.as_str()).collect();
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), SEED_CATALOG_SIZE);

    let labs = catalog.iter().filter(|c| c.course_type == CourseType::Lab).count();
    assert_eq!(labs, 5);
    assert!(catalog.iter().all(|c| c.credits > 0));
}

#[test]
fn email_normalization_lowercases_and_trims() {
    assert_eq!(NewStudent::normalize_email("  Ada@Example.EDU "), "ada@example.edu");
}
