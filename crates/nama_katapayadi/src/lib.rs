//! Katapayadi numerals for names.
//!
//! Text goes through two independent stages: optional Roman → Devanagari
//! transliteration ([`transliterate()`]) and the digit walk over Devanagari
//! ([`calculate()`]). A [`KatapayadiSession`] keeps the processed entries and
//! [`sign_chart`] lays them out next to a birth chart.

pub mod calculate;
pub mod dictionary;
pub mod error;
pub mod overlay;
pub mod session;
pub mod transliterate;

pub use calculate::{
    Calculation, DigitLog, DigitStatus, calculate, consonant_value, rashi_of,
    rashi_of_digits,
};
pub use error::KatapayadiError;
pub use overlay::{Marker, MarkerKind, SignChart, body_label, sign_chart};
pub use session::{InputMode, KatapayadiEntry, KatapayadiSession, contains_devanagari};
pub use transliterate::{Method, Risk, Transliteration, assess_risk, transliterate};
