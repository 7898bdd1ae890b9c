//! Katapayadi numeral calculation over Devanagari text.
//!
//! Each consonant carries a digit (ka-ṭa-pa-ya groups), vowels carry zero.
//! Digits are read right to left, so the collected sequence is reversed
//! before it is read as a number. Leading zeros of the reversed sequence
//! vanish in that reading.

use nama_base::sign_name;
use serde::Serialize;
use tracing::debug;

/// Vowel-suppression mark (virama).
pub const VIRAMA: char = '\u{094D}';

/// Vowel sign ृ. A consonant carrying it is counted as 2 and flagged.
pub const AMBIGUOUS_SIGN: char = '\u{0943}';

#[rustfmt::skip]
const CONSONANT_VALUES: &[(char, u8)] = &[
    ('क', 1), ('ख', 2), ('ग', 3), ('घ', 4), ('ङ', 5),
    ('च', 6), ('छ', 7), ('ज', 8), ('झ', 9), ('ञ', 0),
    ('ट', 1), ('ठ', 2), ('ड', 3), ('ढ', 4), ('ण', 5),
    ('त', 6), ('थ', 7), ('द', 8), ('ध', 9), ('न', 0),
    ('प', 1), ('फ', 2), ('ब', 3), ('भ', 4), ('म', 5),
    ('य', 1), ('र', 2), ('ल', 3), ('व', 4),
    ('श', 5), ('ष', 6), ('स', 7), ('ह', 8),
];

/// Conjuncts read as one consonant.
const CONJUNCT_VALUES: &[(&str, u8)] = &[("क्ष", 6), ("ज्ञ", 0)];

const VOWELS: &[char] = &[
    'अ', 'आ', 'इ', 'ई', 'उ', 'ऊ', 'ए', 'ऐ', 'ओ', 'औ', 'ऋ', 'ॠ', 'ऌ', 'ॡ',
];

/// Digit of a single consonant letter.
pub fn consonant_value(c: char) -> Option<u8> {
    CONSONANT_VALUES
        .iter()
        .find(|(k, _)| *k == c)
        .map(|(_, v)| *v)
}

/// Whether `token` is exactly one consonant letter (conjuncts excluded).
pub fn is_bare_consonant(token: &str) -> bool {
    let mut chars = token.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if consonant_value(c).is_some())
}

/// Digit of a consonant atom: a single letter or a listed conjunct.
fn atom_value(atom: &str) -> Option<u8> {
    if let Some((_, v)) = CONJUNCT_VALUES.iter().find(|(k, _)| *k == atom) {
        return Some(*v);
    }
    let mut chars = atom.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => consonant_value(c),
        _ => None,
    }
}

fn is_vowel_atom(atom: &str) -> bool {
    let mut chars = atom.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if VOWELS.contains(&c))
}

/// Consonant or independent vowel.
fn is_letter_atom(atom: &str) -> bool {
    atom_value(atom).is_some() || is_vowel_atom(atom)
}

/// Split into characters, keeping listed conjuncts whole.
fn atomize(text: &str) -> Vec<&str> {
    let mut atoms = Vec::new();
    let mut rest = text;
    while let Some(c) = rest.chars().next() {
        let len = CONJUNCT_VALUES
            .iter()
            .find(|(k, _)| rest.starts_with(*k))
            .map_or(c.len_utf8(), |(k, _)| k.len());
        let (atom, tail) = rest.split_at(len);
        atoms.push(atom);
        rest = tail;
    }
    atoms
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DigitStatus {
    Keep,
    /// Counted, but the reading is ambiguous.
    Warn,
    /// Word-final half consonant, not counted.
    Drop,
}

/// One step of the digit walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DigitLog {
    pub token: String,
    pub value: Option<u8>,
    pub status: DigitStatus,
}

impl DigitLog {
    fn new(token: impl Into<String>, value: Option<u8>, status: DigitStatus) -> Self {
        Self {
            token: token.into(),
            value,
            status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Calculation {
    pub devanagari: String,
    pub logs: Vec<DigitLog>,
    /// Counted digits, last letter first.
    pub reversed: Vec<u8>,
    /// `reversed` read as a decimal number, leading zeros gone. Exact at
    /// any length.
    pub numeral: String,
    /// `numeral` as an integer; `None` when it does not fit in a `u128`.
    pub sum: Option<u128>,
    /// 1 (Aries) through 12 (Pisces).
    pub rashi: u8,
}

impl Calculation {
    pub fn rashi_name(&self) -> &'static str {
        sign_name(self.rashi - 1)
    }
}

/// Rashi of a sum: `sum mod 12`, with 0 read as 12.
pub fn rashi_of(sum: u128) -> u8 {
    match (sum % 12) as u8 {
        0 => 12,
        r => r,
    }
}

/// Rashi of a digit sequence read as a decimal number, at any length.
pub fn rashi_of_digits(digits: &[u8]) -> u8 {
    let rem = digits
        .iter()
        .fold(0u8, |acc, &d| ((u16::from(acc) * 10 + u16::from(d)) % 12) as u8);
    match rem {
        0 => 12,
        r => r,
    }
}

/// Decimal numeral of a digit sequence, without leading zeros.
fn digits_to_numeral(digits: &[u8]) -> String {
    let numeral: String = digits
        .iter()
        .skip_while(|&&d| d == 0)
        .map(|&d| char::from(b'0' + d))
        .collect();
    if numeral.is_empty() { "0".to_string() } else { numeral }
}

/// Read digits as an integer, `None` past `u128::MAX`.
fn digits_to_number(digits: &[u8]) -> Option<u128> {
    digits.iter().try_fold(0u128, |n, &d| {
        n.checked_mul(10)?.checked_add(u128::from(d))
    })
}

/// Walk Devanagari text and derive its Katapayadi number and rashi.
///
/// Pure: the same text always gives the same result. Characters that are
/// neither letters nor recognised marks are skipped.
pub fn calculate(devanagari: &str) -> Calculation {
    let atoms = atomize(devanagari);
    let mut logs = Vec::new();
    let mut digits = Vec::new();

    let mut i = 0;
    while i < atoms.len() {
        let atom = atoms[i];
        if is_vowel_atom(atom) {
            logs.push(DigitLog::new(atom, Some(0), DigitStatus::Keep));
            digits.push(0);
            i += 1;
            continue;
        }
        let Some(value) = atom_value(atom) else {
            i += 1;
            continue;
        };

        let next = atoms.get(i + 1).and_then(|a| a.chars().next());
        match next {
            Some(AMBIGUOUS_SIGN) => {
                let token = format!("{atom}{AMBIGUOUS_SIGN}");
                logs.push(DigitLog::new(token, Some(2), DigitStatus::Warn));
                digits.push(2);
                i += 2;
            }
            Some(VIRAMA) => {
                let token = format!("{atom}{VIRAMA}");
                // A half consonant joined to a following letter still counts.
                if atoms.get(i + 2).is_some_and(|a| is_letter_atom(a)) {
                    logs.push(DigitLog::new(token, Some(value), DigitStatus::Keep));
                    digits.push(value);
                } else {
                    logs.push(DigitLog::new(token, None, DigitStatus::Drop));
                }
                i += 2;
            }
            _ => {
                logs.push(DigitLog::new(atom, Some(value), DigitStatus::Keep));
                digits.push(value);
                i += 1;
                // Attached vowel signs carry no value.
                while i < atoms.len() && !is_letter_atom(atoms[i]) {
                    i += 1;
                }
            }
        }
    }

    digits.reverse();
    let sum = digits_to_number(&digits);
    if sum.is_none() {
        debug!(digits = digits.len(), "katapayadi numeral exceeds u128");
    }
    Calculation {
        devanagari: devanagari.to_string(),
        logs,
        numeral: digits_to_numeral(&digits),
        rashi: rashi_of_digits(&digits),
        reversed: digits,
        sum,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rama() {
        let c = calculate("रम");
        assert_eq!(c.reversed, vec![5, 2]);
        assert_eq!(c.sum, Some(52));
        assert_eq!(c.rashi, 4);
        assert_eq!(c.rashi_name(), "Cancer");
    }

    #[test]
    fn final_virama_dropped() {
        let c = calculate("राम्");
        assert_eq!(c.sum, Some(2));
        assert_eq!(c.logs[1].status, DigitStatus::Drop);
        assert_eq!(c.logs[1].value, None);
    }

    #[test]
    fn internal_conjunct_kept() {
        // क्र: क counts, then र is read on its own.
        let c = calculate("क्रम");
        assert_eq!(c.reversed, vec![5, 2, 1]);
        assert_eq!(c.sum, Some(521));
    }

    #[test]
    fn ri_sign_warns() {
        // कृ → 2 (warn), ष्ण → 6, ण → 5.
        let c = calculate("कृष्ण");
        assert_eq!(c.logs[0].token, "कृ");
        assert_eq!(c.logs[0].status, DigitStatus::Warn);
        assert_eq!(c.reversed, vec![5, 6, 2]);
        assert_eq!(c.sum, Some(562));
        assert_eq!(c.rashi, 10);
    }

    #[test]
    fn atomic_conjuncts() {
        let c = calculate("क्षमा");
        assert_eq!(c.logs[0].token, "क्ष");
        assert_eq!(c.reversed, vec![5, 6]);
        assert_eq!(c.rashi, 8);
        assert_eq!(calculate("ज्ञ").sum, Some(0));
    }

    #[test]
    fn leading_zero_vanishes() {
        // न → 0 ends up first after reversal.
        let c = calculate("मन");
        assert_eq!(c.reversed, vec![0, 5]);
        assert_eq!(c.numeral, "5");
        assert_eq!(c.sum, Some(5));
    }

    #[test]
    fn vowels_count_zero() {
        let c = calculate("अम");
        assert_eq!(c.reversed, vec![5, 0]);
        assert_eq!(c.sum, Some(50));
    }

    #[test]
    fn empty_and_garbage() {
        let c = calculate("abc 123");
        assert!(c.logs.is_empty());
        assert_eq!(c.numeral, "0");
        assert_eq!(c.sum, Some(0));
        assert_eq!(c.rashi, 12);
    }

    #[test]
    fn long_numeral_stays_exact() {
        // Remainders of 11, 111, 1111, ... mod 12 cycle 11, 3, 7; 41 ones give 11.
        let c = calculate(&"क".repeat(41));
        assert_eq!(c.reversed.len(), 41);
        assert_eq!(c.numeral, "1".repeat(41));
        assert_eq!(c.sum, None);
        assert_eq!(c.rashi, 11);
        assert_eq!(c.rashi_name(), "Aquarius");
    }

    #[test]
    fn largest_u128_numeral_still_has_sum() {
        // 38 nines fit in a u128, 39 do not.
        assert!(calculate(&"झ".repeat(38)).sum.is_some());
        assert_eq!(calculate(&"झ".repeat(39)).sum, None);
    }

    #[test]
    fn digit_rashi_matches_integer_rashi() {
        for n in [0u128, 5, 12, 52, 521, 562, 272_105, u128::MAX] {
            let digits: Vec<u8> = n.to_string().bytes().map(|b| b - b'0').collect();
            assert_eq!(rashi_of_digits(&digits), rashi_of(n), "{n}");
        }
    }

    #[test]
    fn bare_consonant_check() {
        assert!(is_bare_consonant("क"));
        assert!(!is_bare_consonant("क्ष"));
        assert!(!is_bare_consonant("त्र"));
        assert!(!is_bare_consonant("ि"));
        assert!(!is_bare_consonant(""));
    }
}
