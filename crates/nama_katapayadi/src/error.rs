//! Error types for Katapayadi sessions.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from a [`KatapayadiSession`](crate::KatapayadiSession).
///
/// The numeral engine itself never fails; only session input is checked.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum KatapayadiError {
    /// Input text is empty after trimming.
    EmptyInput,
    /// No session entry has this id.
    UnknownEntry(u64),
}

impl Display for KatapayadiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => f.write_str("empty input text"),
            Self::UnknownEntry(id) => write!(f, "no entry with id {id}"),
        }
    }
}

impl Error for KatapayadiError {}
