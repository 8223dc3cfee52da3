//! Validated student field values.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

/// Lowest accepted grade point average.
pub const GPA_MIN: f64 = 0.0;
/// Highest accepted grade point average.
pub const GPA_MAX: f64 = 4.0;

/// Longest accepted email address, per RFC 5321 path limits.
const EMAIL_MAX_LEN: usize = 254;

/// Student record fields, as named in API payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StudentField {
    Id,
    Name,
    Email,
    Course,
    Gpa,
}

impl StudentField {
    /// Payload field name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Email => "email",
            Self::Course => "course",
            Self::Gpa => "gpa",
        }
    }
}

impl fmt::Display for StudentField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a single field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// Required field was absent or null.
    Missing,
    /// Text field was blank.
    Empty,
    /// Email address is not syntactically valid.
    InvalidEmail,
    /// GPA was NaN or infinite.
    NotFinite,
    /// GPA fell outside [`GPA_MIN`]..=[`GPA_MAX`].
    OutOfRange,
    /// Field is assigned by the store and must not be supplied.
    ReadOnly,
}

impl ViolationKind {
    /// Stable machine-readable code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::Empty => "empty",
            Self::InvalidEmail => "invalid_email",
            Self::NotFinite => "gpa_not_finite",
            Self::OutOfRange => "gpa_out_of_range",
            Self::ReadOnly => "read_only",
        }
    }
}

/// Non-empty student name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentName(String);

impl StudentName {
    pub fn new(value: impl Into<String>) -> Result<Self, ViolationKind> {
        non_empty(value.into()).map(Self)
    }
}

/// Non-empty course title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseName(String);

impl CourseName {
    pub fn new(value: impl Into<String>) -> Result<Self, ViolationKind> {
        non_empty(value.into()).map(Self)
    }
}

fn non_empty(value: String) -> Result<String, ViolationKind> {
    if value.trim().is_empty() {
        Err(ViolationKind::Empty)
    } else {
        Ok(value)
    }
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // Dotted domain of 1-63 character labels; dot placement in the local
        // part is checked separately.
        let pattern = r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$";
        Regex::new(pattern).unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Syntactically valid email address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn new(value: impl Into<String>) -> Result<Self, ViolationKind> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ViolationKind::Empty);
        }
        if value.len() > EMAIL_MAX_LEN || !email_regex().is_match(&value) {
            return Err(ViolationKind::InvalidEmail);
        }
        let Some((local, domain)) = value.rsplit_once('@') else {
            return Err(ViolationKind::InvalidEmail);
        };
        if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
            return Err(ViolationKind::InvalidEmail);
        }
        // Domains compare case-insensitively; the local part is kept as sent.
        Ok(Self(format!("{local}@{}", domain.to_ascii_lowercase())))
    }
}

/// Grade point average within [`GPA_MIN`]..=[`GPA_MAX`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Gpa(f64);

impl Gpa {
    pub fn new(value: f64) -> Result<Self, ViolationKind> {
        if !value.is_finite() {
            return Err(ViolationKind::NotFinite);
        }
        if !(GPA_MIN..=GPA_MAX).contains(&value) {
            return Err(ViolationKind::OutOfRange);
        }
        Ok(Self(value))
    }

    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

macro_rules! text_field_impls {
    ($($ty:ident),* $(,)?) => {
        $(
            impl AsRef<str> for $ty {
                fn as_ref(&self) -> &str {
                    self.0.as_str()
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_ref())
                }
            }

            impl From<$ty> for String {
                fn from(value: $ty) -> Self {
                    value.0
                }
            }
        )*
    };
}

text_field_impls!(StudentName, CourseName, EmailAddress);
