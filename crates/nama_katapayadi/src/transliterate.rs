//! Roman (IAST or loose English) to Devanagari.
//!
//! A dictionary hit wins outright. Otherwise the text is tokenized greedily
//! against [`PHONE_MAP`], longest key first, and a virama is inserted
//! between two bare consonants so no inherent vowel appears between them.

use serde::Serialize;
use tracing::debug;

use crate::calculate::{VIRAMA, is_bare_consonant};
use crate::dictionary;

/// Roman key → Devanagari token, ordered by key length (in characters),
/// longest first. An empty token is the inherent vowel.
#[rustfmt::skip]
pub const PHONE_MAP: &[(&str, &str)] = &[
    ("ksh", "क्ष"), ("tra", "त्र"), ("jny", "ज्ञ"),

    ("ai", "ै"), ("au", "ौ"), ("ṭh", "ठ"), ("ḍh", "ढ"),
    ("aa", "ा"), ("ee", "ी"), ("oo", "ू"),
    ("gy", "ज्ञ"), ("ng", "ं"), ("sh", "श"), ("ch", "च"),
    ("th", "थ"), ("ph", "फ"), ("gh", "घ"), ("jh", "झ"),
    ("dh", "ध"), ("bh", "भ"), ("kh", "ख"),

    ("ā", "ा"), ("ī", "ी"), ("ū", "ू"), ("ṛ", "ृ"), ("ṝ", "ॄ"),
    ("ḷ", "ॢ"), ("ḹ", "ॣ"), ("ṃ", "ं"), ("ḥ", "ः"),
    ("ṭ", "ट"), ("ḍ", "ड"), ("ṇ", "ण"), ("ṣ", "ष"), ("ś", "श"),
    ("ñ", "ञ"), ("ṅ", "ङ"),
    ("k", "क"), ("g", "ग"), ("j", "ज"), ("t", "त"), ("d", "द"),
    ("n", "न"), ("p", "प"), ("f", "फ"), ("b", "ब"), ("m", "म"),
    ("y", "य"), ("r", "र"), ("l", "ल"), ("v", "व"), ("w", "व"),
    ("s", "स"), ("h", "ह"), ("c", "च"),
    ("a", ""), ("i", "ि"), ("u", "ु"), ("e", "े"), ("o", "ो"),
];

/// Digraphs no dictionary resolves; their presence raises the risk.
const AMBIGUOUS_DIGRAPHS: [&str; 3] = ["ng", "ksh", "jny"];

/// How the Devanagari text was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Method {
    /// Typed in Devanagari, used as is.
    Direct,
    Dictionary,
    Heuristic,
}

impl Method {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Direct => "Direct",
            Self::Dictionary => "Dictionary",
            Self::Heuristic => "Heuristic",
        }
    }
}

/// Confidence in the Devanagari spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Risk {
    Low,
    Med,
    High,
}

impl Risk {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Med => "med",
            Self::High => "high",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transliteration {
    pub devanagari: String,
    pub method: Method,
}

/// Greedy tokenizer state.
#[derive(Default)]
struct Transliterator {
    out: String,
    after_bare_consonant: bool,
}

impl Transliterator {
    fn emit(&mut self, token: &str) {
        let bare = is_bare_consonant(token);
        if bare && self.after_bare_consonant {
            self.out.push(VIRAMA);
        }
        self.out.push_str(token);
        self.after_bare_consonant = bare;
    }

    fn finish(mut self) -> String {
        if self.after_bare_consonant {
            self.out.push(VIRAMA);
        }
        self.out
    }
}

/// Longest phone-map entry at the start of `rest`.
fn match_phone(rest: &str) -> Option<(&'static str, &'static str)> {
    PHONE_MAP
        .iter()
        .find(|(key, _)| rest.starts_with(*key))
        .copied()
}

/// Transliterate Roman text. Unrecognised characters are skipped.
pub fn transliterate(text: &str) -> Transliteration {
    if let Some(dev) = dictionary::lookup(text) {
        debug!(text, "transliterated from dictionary");
        return Transliteration {
            devanagari: dev.to_string(),
            method: Method::Dictionary,
        };
    }

    let lower = text.trim().to_lowercase();
    let mut state = Transliterator::default();
    let mut rest = lower.as_str();
    while let Some(c) = rest.chars().next() {
        match match_phone(rest) {
            Some((key, token)) => {
                state.emit(token);
                rest = &rest[key.len()..];
            }
            None => rest = &rest[c.len_utf8()..],
        }
    }

    let devanagari = state.finish();
    debug!(text, %devanagari, "transliterated heuristically");
    Transliteration {
        devanagari,
        method: Method::Heuristic,
    }
}

/// Risk of a spelling given the raw input and how it was produced.
pub fn assess_risk(raw: &str, method: Method) -> Risk {
    match method {
        Method::Direct | Method::Dictionary => Risk::Low,
        Method::Heuristic => {
            let lower = raw.to_lowercase();
            if AMBIGUOUS_DIGRAPHS.iter().any(|d| lower.contains(d)) {
                Risk::High
            } else {
                Risk::Med
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dev(text: &str) -> String {
        transliterate(text).devanagari
    }

    #[test]
    fn phone_map_longest_first() {
        for w in PHONE_MAP.windows(2) {
            assert!(w[0].0.chars().count() >= w[1].0.chars().count(), "{:?}", w);
        }
    }

    #[test]
    fn rama_heuristic() {
        let t = transliterate("rama");
        assert_eq!(t.devanagari, "रम");
        assert_eq!(t.method, Method::Heuristic);
    }

    #[test]
    fn virama_between_consonants() {
        assert_eq!(dev("krishna"), "क्रिश्न");
        assert_eq!(dev("shri"), "श्रि");
    }

    #[test]
    fn word_final_virama() {
        assert_eq!(dev("ram"), "रम्");
        assert_eq!(dev("ṭhakur"), "ठकुर्");
    }

    #[test]
    fn iast_input() {
        assert_eq!(dev("kṛṣṇa"), "कृष्ण");
        assert_eq!(dev("Sītā"), "सीता");
    }

    #[test]
    fn conjunct_tokens_are_not_bare() {
        // No virama is inserted before or after क्ष.
        assert_eq!(dev("lakshmi"), "लक्षमि");
        assert_eq!(dev("mksh"), "मक्ष");
    }

    #[test]
    fn nasal_mark_clears_consonant_run() {
        // No virama between ं and the consonant after it.
        assert_eq!(dev("singh"), "सिंह्");
        assert_eq!(dev("kngk"), "कंक्");
    }

    #[test]
    fn unknown_characters_skipped() {
        assert_eq!(dev("ra-ma1"), "रम");
        assert_eq!(dev("123"), "");
    }

    #[test]
    fn dictionary_short_circuits() {
        let t = transliterate("Microsoft");
        assert_eq!(t.method, Method::Dictionary);
        assert_eq!(t.devanagari, "माइक्रोसॉफ्ट्");
    }

    #[test]
    fn risk_levels() {
        assert_eq!(assess_risk("bjp", Method::Dictionary), Risk::Low);
        assert_eq!(assess_risk("rama", Method::Heuristic), Risk::Med);
        assert_eq!(assess_risk("Ganga", Method::Heuristic), Risk::High);
        assert_eq!(assess_risk("KSHITIJ", Method::Heuristic), Risk::High);
        assert_eq!(assess_risk("गंगा", Method::Direct), Risk::Low);
    }
}
