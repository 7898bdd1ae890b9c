//! Append-only log of processed texts for one user session.

use serde::Serialize;
use tracing::debug;

use crate::calculate::{Calculation, calculate};
use crate::error::KatapayadiError;
use crate::transliterate::{Method, Risk, assess_risk, transliterate};

/// How input text is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum InputMode {
    /// Already Devanagari.
    #[default]
    Devanagari,
    /// Roman script, transliterated first.
    Roman,
    /// Devanagari if the text holds any Devanagari character.
    Auto,
}

impl InputMode {
    /// Concrete mode for a text: `Auto` becomes one of the other two.
    pub fn resolve(self, text: &str) -> Self {
        match self {
            Self::Auto if contains_devanagari(text) => Self::Devanagari,
            Self::Auto => Self::Roman,
            mode => mode,
        }
    }
}

/// Whether any character falls in the Devanagari block.
pub fn contains_devanagari(text: &str) -> bool {
    text.chars().any(|c| ('\u{0900}'..='\u{097F}').contains(&c))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KatapayadiEntry {
    pub id: u64,
    /// Trimmed user input.
    pub original: String,
    pub method: Method,
    pub risk: Risk,
    pub calculation: Calculation,
}

impl KatapayadiEntry {
    pub fn devanagari(&self) -> &str {
        &self.calculation.devanagari
    }

    /// Integer value of the numeral, when it fits.
    pub fn sum(&self) -> Option<u128> {
        self.calculation.sum
    }

    pub fn numeral(&self) -> &str {
        &self.calculation.numeral
    }

    /// 1 (Aries) through 12 (Pisces).
    pub fn rashi(&self) -> u8 {
        self.calculation.rashi
    }
}

/// Entries in insertion order. Ids increase monotonically from 1.
#[derive(Debug, Clone, Serialize)]
pub struct KatapayadiSession {
    entries: Vec<KatapayadiEntry>,
    next_id: u64,
}

impl Default for KatapayadiSession {
    fn default() -> Self {
        Self::new()
    }
}

impl KatapayadiSession {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    /// Process one text and append the result.
    pub fn process(
        &mut self,
        text: &str,
        mode: InputMode,
    ) -> Result<&KatapayadiEntry, KatapayadiError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(KatapayadiError::EmptyInput);
        }

        let (devanagari, method) = match mode.resolve(text) {
            InputMode::Roman => {
                let t = transliterate(text);
                (t.devanagari, t.method)
            }
            _ => (text.to_string(), Method::Direct),
        };
        let entry = KatapayadiEntry {
            id: self.next_id,
            original: text.to_string(),
            method,
            risk: assess_risk(text, method),
            calculation: calculate(&devanagari),
        };
        debug!(
            id = entry.id,
            method = method.as_str(),
            numeral = entry.numeral(),
            rashi = entry.rashi(),
            "katapayadi entry added"
        );
        self.next_id += 1;
        self.entries.push(entry);
        Ok(&self.entries[self.entries.len() - 1])
    }

    pub fn entries(&self) -> &[KatapayadiEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&KatapayadiEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Look up an entry chosen by the user.
    pub fn select(&self, id: u64) -> Result<&KatapayadiEntry, KatapayadiError> {
        self.get(id).ok_or(KatapayadiError::UnknownEntry(id))
    }

    /// All entries, or only the selected one.
    pub fn filtered(&self, selected: Option<u64>) -> impl Iterator<Item = &KatapayadiEntry> {
        self.entries
            .iter()
            .filter(move |e| selected.is_none_or(|id| e.id == id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roman_entry() {
        let mut s = KatapayadiSession::new();
        let e = s.process("rama", InputMode::Roman).unwrap();
        assert_eq!(e.id, 1);
        assert_eq!(e.devanagari(), "रम");
        assert_eq!(e.method, Method::Heuristic);
        assert_eq!(e.risk, Risk::Med);
        assert_eq!(e.sum(), Some(52));
        assert_eq!(e.rashi(), 4);
    }

    #[test]
    fn devanagari_entry_is_direct() {
        let mut s = KatapayadiSession::new();
        let e = s.process(" राम ", InputMode::Devanagari).unwrap();
        assert_eq!(e.original, "राम");
        assert_eq!(e.method, Method::Direct);
        assert_eq!(e.risk, Risk::Low);
    }

    #[test]
    fn auto_mode_detects_script() {
        assert_eq!(InputMode::Auto.resolve("गंगा"), InputMode::Devanagari);
        assert_eq!(InputMode::Auto.resolve("ganga"), InputMode::Roman);
        assert_eq!(InputMode::Roman.resolve("गंगा"), InputMode::Roman);
    }

    #[test]
    fn empty_input_rejected() {
        let mut s = KatapayadiSession::new();
        assert_eq!(
            s.process("   ", InputMode::Auto).unwrap_err(),
            KatapayadiError::EmptyInput
        );
        assert!(s.is_empty());
    }

    #[test]
    fn ids_increase_and_filter() {
        let mut s = KatapayadiSession::new();
        s.process("rama", InputMode::Roman).unwrap();
        s.process("sita", InputMode::Roman).unwrap();
        s.process("ganga", InputMode::Roman).unwrap();
        let ids: Vec<u64> = s.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(s.filtered(None).count(), 3);
        let only: Vec<u64> = s.filtered(Some(2)).map(|e| e.id).collect();
        assert_eq!(only, vec![2]);
        assert_eq!(s.select(3).unwrap().risk, Risk::High);
        assert_eq!(s.select(9).unwrap_err(), KatapayadiError::UnknownEntry(9));
    }
}
