//! Student identifier codec.
//!
//! Callers see identifiers as 24 hexadecimal characters; the store keys
//! documents by the underlying 12 bytes.

use std::fmt;
use std::str::FromStr;

/// Number of bytes in a native store identifier.
pub const STUDENT_ID_BYTES: usize = 12;
/// Length of the textual identifier accepted by the API.
pub const STUDENT_ID_TEXT_LEN: usize = STUDENT_ID_BYTES * 2;

/// Reasons a textual identifier fails to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StudentIdError {
    #[error("student id must not be empty")]
    Empty,
    #[error("student id must be {STUDENT_ID_TEXT_LEN} characters, got {actual}")]
    WrongLength { actual: usize },
    #[error("student id must contain only hexadecimal characters")]
    NotHex,
}

/// Store-assigned identity of a persisted student.
///
/// # Examples
/// ```
/// use warehouse::domain::StudentId;
///
/// let id = StudentId::parse("65F0C0FFEE0000000000BEEF").expect("valid id");
/// assert_eq!(id.to_string(), "65f0c0ffee0000000000beef");
/// assert!(StudentId::parse("not-an-id").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StudentId([u8; STUDENT_ID_BYTES]);

impl StudentId {
    /// Decode the API representation.
    ///
    /// Upper-case hex is accepted; [`fmt::Display`] always renders lower case.
    pub fn parse(text: &str) -> Result<Self, StudentIdError> {
        if text.is_empty() {
            return Err(StudentIdError::Empty);
        }
        if text.len() != STUDENT_ID_TEXT_LEN {
            return Err(StudentIdError::WrongLength { actual: text.len() });
        }

        let mut bytes = [0_u8; STUDENT_ID_BYTES];
        hex::decode_to_slice(text, &mut bytes).map_err(|_| StudentIdError::NotHex)?;
        Ok(Self(bytes))
    }

    /// Wrap raw bytes produced by the store.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; STUDENT_ID_BYTES]) -> Self {
        Self(bytes)
    }

    /// Raw bytes for the store.
    #[must_use]
    pub const fn to_bytes(self) -> [u8; STUDENT_ID_BYTES] {
        self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl FromStr for StudentId {
    type Err = StudentIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
