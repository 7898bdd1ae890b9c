//! Error types for chart input construction.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors raised while building chart inputs.
///
/// Analysis never fails: missing reference points degrade to `None` or an
/// empty result instead.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum NamaError {
    /// Longitude is not a finite number.
    InvalidLongitude(f64),
    /// Sign index outside [0, 11].
    InvalidSignIndex(u8),
    /// Body name not recognised.
    UnknownBody(String),
    /// Birth date, time, offset or location is invalid.
    InvalidBirthData(&'static str),
    /// Sunrise could not be computed.
    AstronomyUnavailable(&'static str),
}

impl Display for NamaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLongitude(lon) => write!(f, "invalid longitude: {lon}"),
            Self::InvalidSignIndex(idx) => write!(f, "sign index out of range: {idx}"),
            Self::UnknownBody(name) => write!(f, "unknown body: {name}"),
            Self::InvalidBirthData(msg) => write!(f, "invalid birth data: {msg}"),
            Self::AstronomyUnavailable(msg) => write!(f, "astronomy unavailable: {msg}"),
        }
    }
}

impl Error for NamaError {}
