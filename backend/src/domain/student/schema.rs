//! Full and partial student record schemas.
//!
//! Both schemas start from the same raw [`StudentFields`]. The full schema
//! ([`StudentDraft`]) requires every field; the partial schema
//! ([`StudentChangeset`]) validates only what was supplied. Every violation is
//! collected so callers can report all offending fields at once.

use std::fmt;

use super::fields::{CourseName, EmailAddress, Gpa, StudentField, StudentName, ViolationKind};

/// Unvalidated student fields as received from a caller.
///
/// `None` covers both an absent field and an explicit `null`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentFields {
    pub name: Option<String>,
    pub email: Option<String>,
    pub course: Option<String>,
    pub gpa: Option<f64>,
}

/// A single field-level schema violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: StudentField,
    pub kind: ViolationKind,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = self.field;
        match self.kind {
            ViolationKind::Missing => write!(f, "{field} is required"),
            ViolationKind::Empty => write!(f, "{field} must not be empty"),
            ViolationKind::InvalidEmail => write!(f, "{field} must be a valid email address"),
            ViolationKind::NotFinite => write!(f, "{field} must be a finite number"),
            ViolationKind::OutOfRange => write!(
                f,
                "{field} must be between {} and {}",
                super::fields::GPA_MIN,
                super::fields::GPA_MAX
            ),
            ViolationKind::ReadOnly => write!(f, "{field} is assigned by the store"),
        }
    }
}

/// Schema validation failure carrying every offending field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid student record: {}", field_list(.violations))]
pub struct StudentSchemaError {
    violations: Vec<FieldViolation>,
}

fn field_list(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|violation| violation.field.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

impl StudentSchemaError {
    /// Build an error from a single violation.
    #[must_use]
    pub fn single(field: StudentField, kind: ViolationKind) -> Self {
        Self {
            violations: vec![FieldViolation { field, kind }],
        }
    }

    #[must_use]
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// Names of the offending fields, in payload order.
    #[must_use]
    pub fn field_names(&self) -> Vec<&'static str> {
        self.violations
            .iter()
            .map(|violation| violation.field.as_str())
            .collect()
    }

    /// Merge violations from another error.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        self.violations.extend(other.violations);
        self
    }
}

#[derive(Default)]
struct Violations(Vec<FieldViolation>);

impl Violations {
    fn required<R, T>(
        &mut self,
        field: StudentField,
        value: Option<R>,
        parse: impl FnOnce(R) -> Result<T, ViolationKind>,
    ) -> Option<T> {
        match value {
            Some(raw) => self.record(field, parse(raw)),
            None => {
                self.0.push(FieldViolation {
                    field,
                    kind: ViolationKind::Missing,
                });
                None
            }
        }
    }

    fn optional<R, T>(
        &mut self,
        field: StudentField,
        value: Option<R>,
        parse: impl FnOnce(R) -> Result<T, ViolationKind>,
    ) -> FieldUpdate<T> {
        value
            .and_then(|raw| self.record(field, parse(raw)))
            .into()
    }

    fn record<T>(&mut self, field: StudentField, result: Result<T, ViolationKind>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(kind) => {
                self.0.push(FieldViolation { field, kind });
                None
            }
        }
    }

    fn into_result(self) -> Result<(), StudentSchemaError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(StudentSchemaError { violations: self.0 })
        }
    }
}

/// A complete, validated student record that has not been persisted yet.
///
/// # Examples
/// ```
/// use warehouse::domain::{StudentDraft, StudentFields};
///
/// let draft = StudentDraft::try_from(StudentFields {
///     name: Some("Alice".into()),
///     email: Some("alice@example.com".into()),
///     course: Some("Math".into()),
///     gpa: Some(3.8),
/// })
/// .expect("valid record");
/// assert_eq!(draft.name().as_ref(), "Alice");
///
/// let err = StudentDraft::try_from(StudentFields {
///     gpa: Some(5.0),
///     ..StudentFields::default()
/// })
/// .expect_err("incomplete record");
/// assert_eq!(err.field_names(), ["name", "email", "course", "gpa"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StudentDraft {
    name: StudentName,
    email: EmailAddress,
    course: CourseName,
    gpa: Gpa,
}

impl StudentDraft {
    #[must_use]
    pub fn new(name: StudentName, email: EmailAddress, course: CourseName, gpa: Gpa) -> Self {
        Self {
            name,
            email,
            course,
            gpa,
        }
    }

    #[must_use]
    pub fn name(&self) -> &StudentName {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    #[must_use]
    pub fn course(&self) -> &CourseName {
        &self.course
    }

    #[must_use]
    pub fn gpa(&self) -> Gpa {
        self.gpa
    }

    pub(crate) fn into_parts(self) -> (StudentName, EmailAddress, CourseName, Gpa) {
        (self.name, self.email, self.course, self.gpa)
    }
}

impl TryFrom<StudentFields> for StudentDraft {
    type Error = StudentSchemaError;

    fn try_from(fields: StudentFields) -> Result<Self, Self::Error> {
        let mut violations = Violations::default();
        let name = violations.required(StudentField::Name, fields.name, StudentName::new);
        let email = violations.required(StudentField::Email, fields.email, EmailAddress::new);
        let course = violations.required(StudentField::Course, fields.course, CourseName::new);
        let gpa = violations.required(StudentField::Gpa, fields.gpa, Gpa::new);

        match (name, email, course, gpa) {
            (Some(name), Some(email), Some(course), Some(gpa)) => {
                Ok(Self::new(name, email, course, gpa))
            }
            _ => Err(StudentSchemaError {
                violations: violations.0,
            }),
        }
    }
}

/// Requested change for one field of a stored record.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate<T> {
    /// Leave the stored value untouched.
    Keep,
    /// Replace the stored value.
    Set(T),
}

impl<T> Default for FieldUpdate<T> {
    fn default() -> Self {
        Self::Keep
    }
}

impl<T> FieldUpdate<T> {
    #[must_use]
    pub fn is_keep(&self) -> bool {
        matches!(self, Self::Keep)
    }

    /// The replacement value, if one was requested.
    #[must_use]
    pub fn as_set(&self) -> Option<&T> {
        match self {
            Self::Keep => None,
            Self::Set(value) => Some(value),
        }
    }
}

impl<T: Clone> FieldUpdate<T> {
    /// Overwrite `current` when a replacement was requested.
    pub fn apply_to(&self, current: &mut T) {
        if let Self::Set(value) = self {
            current.clone_from(value);
        }
    }
}

impl<T> From<Option<T>> for FieldUpdate<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Keep, Self::Set)
    }
}

/// Validated partial update of a student record.
///
/// # Examples
/// ```
/// use warehouse::domain::{StudentChangeset, StudentFields};
///
/// let empty = StudentChangeset::try_from(StudentFields::default()).expect("empty is valid");
/// assert!(empty.is_empty());
///
/// let gpa_only = StudentChangeset::try_from(StudentFields {
///     gpa: Some(3.1),
///     ..StudentFields::default()
/// })
/// .expect("valid change");
/// assert!(!gpa_only.is_empty());
/// assert!(gpa_only.name.is_keep());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentChangeset {
    pub name: FieldUpdate<StudentName>,
    pub email: FieldUpdate<EmailAddress>,
    pub course: FieldUpdate<CourseName>,
    pub gpa: FieldUpdate<Gpa>,
}

impl StudentChangeset {
    /// True when no field change was requested.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_keep() && self.email.is_keep() && self.course.is_keep() && self.gpa.is_keep()
    }

    /// Names of the fields this change-set overwrites.
    #[must_use]
    pub fn changed_fields(&self) -> Vec<StudentField> {
        [
            (StudentField::Name, self.name.is_keep()),
            (StudentField::Email, self.email.is_keep()),
            (StudentField::Course, self.course.is_keep()),
            (StudentField::Gpa, self.gpa.is_keep()),
        ]
        .into_iter()
        .filter_map(|(field, keep)| (!keep).then_some(field))
        .collect()
    }
}

impl TryFrom<StudentFields> for StudentChangeset {
    type Error = StudentSchemaError;

    fn try_from(fields: StudentFields) -> Result<Self, Self::Error> {
        let mut violations = Violations::default();
        let changeset = Self {
            name: violations.optional(StudentField::Name, fields.name, StudentName::new),
            email: violations.optional(StudentField::Email, fields.email, EmailAddress::new),
            course: violations.optional(StudentField::Course, fields.course, CourseName::new),
            gpa: violations.optional(StudentField::Gpa, fields.gpa, Gpa::new),
        };
        violations.into_result()?;
        Ok(changeset)
    }
}
