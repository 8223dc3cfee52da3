//! Schema and record behaviour.

use super::*;
use rstest::{fixture, rstest};

#[fixture]
fn alice_fields() -> StudentFields {
    StudentFields {
        name: Some("Alice".to_owned()),
        email: Some("alice@example.com".to_owned()),
        course: Some("Math".to_owned()),
        gpa: Some(3.8),
    }
}

#[fixture]
fn alice(alice_fields: StudentFields) -> Student {
    let draft = StudentDraft::try_from(alice_fields).expect("fixture draft is valid");
    Student::new(StudentId::from_bytes([7; STUDENT_ID_BYTES]), draft)
}

#[rstest]
fn full_schema_accepts_complete_record(alice_fields: StudentFields) {
    let draft = StudentDraft::try_from(alice_fields).expect("valid draft");
    assert_eq!(draft.email().as_ref(), "alice@example.com");
    assert_eq!(draft.gpa().value(), 3.8);
}

#[rstest]
fn full_schema_reports_every_offending_field() {
    let err = StudentDraft::try_from(StudentFields {
        name: Some("  ".to_owned()),
        email: Some("not-an-email".to_owned()),
        course: None,
        gpa: Some(4.5),
    })
    .expect_err("invalid draft");

    assert_eq!(
        err.violations(),
        [
            FieldViolation {
                field: StudentField::Name,
                kind: ViolationKind::Empty,
            },
            FieldViolation {
                field: StudentField::Email,
                kind: ViolationKind::InvalidEmail,
            },
            FieldViolation {
                field: StudentField::Course,
                kind: ViolationKind::Missing,
            },
            FieldViolation {
                field: StudentField::Gpa,
                kind: ViolationKind::OutOfRange,
            },
        ]
    );
    assert_eq!(
        err.to_string(),
        "invalid student record: name, email, course, gpa"
    );
}

#[rstest]
#[case(4.01)]
#[case(5.0)]
#[case(100.0)]
fn full_schema_rejects_gpa_above_four(alice_fields: StudentFields, #[case] gpa: f64) {
    let fields = StudentFields {
        gpa: Some(gpa),
        ..alice_fields
    };
    let err = StudentDraft::try_from(fields).expect_err("gpa above bound");
    assert_eq!(err.field_names(), ["gpa"]);
}

#[rstest]
fn partial_schema_validates_only_supplied_fields() {
    let changeset = StudentChangeset::try_from(StudentFields {
        course: Some("Physics".to_owned()),
        ..StudentFields::default()
    })
    .expect("valid change-set");

    assert!(changeset.name.is_keep());
    assert_eq!(
        changeset.course.as_set().map(AsRef::as_ref),
        Some("Physics")
    );
    assert_eq!(changeset.changed_fields(), [StudentField::Course]);
}

#[rstest]
fn partial_schema_rejects_invalid_supplied_fields() {
    let err = StudentChangeset::try_from(StudentFields {
        email: Some("bad@".to_owned()),
        gpa: Some(-1.0),
        ..StudentFields::default()
    })
    .expect_err("invalid change-set");
    assert_eq!(err.field_names(), ["email", "gpa"]);
}

#[rstest]
fn with_changes_overwrites_exactly_the_supplied_fields(alice: Student) {
    let changeset = StudentChangeset {
        name: FieldUpdate::Set(StudentName::new("Alicia").expect("valid name")),
        gpa: FieldUpdate::Set(Gpa::new(3.9).expect("valid gpa")),
        ..StudentChangeset::default()
    };

    let updated = alice.clone().with_changes(&changeset);

    assert_eq!(updated.id(), alice.id());
    assert_eq!(updated.name().as_ref(), "Alicia");
    assert_eq!(updated.gpa().value(), 3.9);
    assert_eq!(updated.email(), alice.email());
    assert_eq!(updated.course(), alice.course());
}

#[rstest]
fn empty_changeset_leaves_record_untouched(alice: Student) {
    let changeset = StudentChangeset::default();
    assert!(changeset.is_empty());
    assert_eq!(alice.clone().with_changes(&changeset), alice);
}

#[rstest]
fn stored_values_are_rechecked() {
    let err = Student::try_from_stored(
        StudentId::from_bytes([1; STUDENT_ID_BYTES]),
        "Bob".to_owned(),
        "bob@example.com".to_owned(),
        "CS".to_owned(),
        5.0,
    )
    .expect_err("stored gpa violates schema");
    assert_eq!(err.field_names(), ["gpa"]);
}

#[rstest]
fn collection_preserves_order(alice: Student) {
    let bob = Student::try_from_stored(
        StudentId::from_bytes([2; STUDENT_ID_BYTES]),
        "Bob".to_owned(),
        "bob@example.com".to_owned(),
        "CS".to_owned(),
        3.0,
    )
    .expect("valid stored record");

    let collection = StudentCollection::new(vec![alice.clone(), bob.clone()]);
    assert_eq!(collection.len(), 2);
    assert_eq!(collection.into_students(), vec![alice, bob]);
}
