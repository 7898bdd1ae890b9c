//! Panca Svara Dasa: five 12-year vowel periods starting from the name's
//! own vowel group.

use serde::Serialize;

use super::vowel::{first_vowel, vowel_group};

/// The five vowel groups in cycle order.
pub const DASA_SEQUENCE: [&str; 5] = ["a", "i", "u", "e", "o"];

/// Years in each period.
pub const DASA_YEARS: u32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DasaPeriod {
    pub vowel: &'static str,
    pub start_age: u32,
    pub end_age: u32,
    pub year_start: i32,
    pub year_end: i32,
}

/// The 60-year schedule for a name born in `birth_year`.
pub fn panca_svara_dasa(name: &str, birth_year: i32) -> [DasaPeriod; 5] {
    let start = vowel_group(first_vowel(name));
    std::array::from_fn(|i| {
        let start_age = i as u32 * DASA_YEARS;
        let end_age = start_age + DASA_YEARS;
        DasaPeriod {
            vowel: DASA_SEQUENCE[(start + i) % 5],
            start_age,
            end_age,
            year_start: birth_year + start_age as i32,
            year_end: birth_year + end_age as i32,
        }
    })
}
