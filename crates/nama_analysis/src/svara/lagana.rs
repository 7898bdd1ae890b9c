//! Lagana: syllable count → sign nature → support from the Lagna.

use nama_base::{PlanetaryDataset, is_kendra, relative_house};
use serde::Serialize;

use super::vowel::is_vowel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LaganaNature {
    Fixed,
    Movable,
    Dual,
}

impl LaganaNature {
    /// 1 or 4 syllables → Fixed, 2 or 5 → Movable, anything else → Dual.
    pub fn from_count(count: u32) -> Self {
        match count {
            1 | 4 => Self::Fixed,
            2 | 5 => Self::Movable,
            _ => Self::Dual,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Fixed => "Fixed (Sthira)",
            Self::Movable => "Movable (Cara)",
            Self::Dual => "Dual (Dvisvabhava)",
        }
    }

    /// 0-based signs of this nature.
    pub const fn signs(self) -> [u8; 4] {
        match self {
            Self::Fixed => [1, 4, 7, 10],
            Self::Movable => [0, 3, 6, 9],
            Self::Dual => [2, 5, 8, 11],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lagana {
    pub syllable_count: u32,
    pub nature: LaganaNature,
    /// Houses from Lagna of the nature's signs, ascending.
    pub activated_houses: [u8; 4],
    /// How many of those houses are kendras.
    pub score: u8,
    pub prognosis: &'static str,
}

/// Count spoken syllables: vowel runs, plus one for a trailing consonant.
///
/// Only Roman letters and IAST vowels are considered. An empty name has no
/// syllables.
pub fn syllable_count(name: &str) -> u32 {
    if name.is_empty() {
        return 0;
    }
    let clean: Vec<char> = name
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_ascii_lowercase() || matches!(c, 'ā' | 'ī' | 'ū' | 'ṛ' | 'ṝ' | 'ḷ'))
        .collect();

    let mut count = 0;
    let mut in_vowel = false;
    for c in &clean {
        let v = is_vowel(*c);
        if v && !in_vowel {
            count += 1;
        }
        in_vowel = v;
    }
    if !clean.last().is_some_and(|c| is_vowel(*c)) {
        count += 1;
    }
    count
}

pub fn prognosis(score: u8) -> &'static str {
    match score {
        4 => "Excellent. Full support in birth country.",
        2.. => "Moderate support.",
        _ => "Low support. May seek success in foreign lands.",
    }
}

/// Evaluate a name's syllable support. `None` without a Lagna.
pub fn lagana(name: &str, dataset: &PlanetaryDataset) -> Option<Lagana> {
    let lagna = dataset.lagna()?;
    let syllable_count = syllable_count(name);
    let nature = LaganaNature::from_count(syllable_count);

    let mut activated_houses = nature
        .signs()
        .map(|s| relative_house(s, lagna.sign_index()));
    activated_houses.sort_unstable();
    let score = activated_houses.iter().filter(|h| is_kendra(**h)).count() as u8;

    Some(Lagana {
        syllable_count,
        nature,
        activated_houses,
        score,
        prognosis: prognosis(score),
    })
}
