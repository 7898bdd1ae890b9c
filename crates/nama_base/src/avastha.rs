//! Baladi Avastha (age state from position within sign) and its vowels.

use serde::Serialize;

use crate::util::degrees_in_sign;

/// Age-based state of a planet within its sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BaladiAvastha {
    Bala,
    Kumara,
    Yuva,
    Vriddha,
    Mrita,
}

/// All 5 states in odd-sign order.
pub const ALL_BALADI: [BaladiAvastha; 5] = [
    BaladiAvastha::Bala,
    BaladiAvastha::Kumara,
    BaladiAvastha::Yuva,
    BaladiAvastha::Vriddha,
    BaladiAvastha::Mrita,
];

impl BaladiAvastha {
    pub const fn index(self) -> u8 {
        match self {
            Self::Bala => 0,
            Self::Kumara => 1,
            Self::Yuva => 2,
            Self::Vriddha => 3,
            Self::Mrita => 4,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Bala => "Bala",
            Self::Kumara => "Kumara",
            Self::Yuva => "Yuva",
            Self::Vriddha => "Vriddha",
            Self::Mrita => "Mrita",
        }
    }

    /// Vowel pair that activates a planet in this state.
    pub const fn vowels(self) -> [&'static str; 2] {
        match self {
            Self::Bala => ["a", "ā"],
            Self::Kumara => ["i", "ī"],
            Self::Yuva => ["u", "ū"],
            Self::Vriddha => ["e", "ai"],
            Self::Mrita => ["o", "au"],
        }
    }

    /// Whether a name's first vowel activates this state.
    pub fn is_activated_by(self, vowel: &str) -> bool {
        self.vowels().contains(&vowel)
    }
}

/// Baladi state from degree position within sign and sign parity.
///
/// The sign is divided into five 6° bands. Odd signs (0-based index 0, 2,
/// 4, ...) run Bala→Mrita; even signs run Mrita→Bala.
pub fn baladi_avastha(sidereal_lon: f64, rashi_index: u8) -> BaladiAvastha {
    let band = ((degrees_in_sign(sidereal_lon) / 6.0).floor() as usize).min(4);
    if rashi_index % 2 == 0 {
        ALL_BALADI[band]
    } else {
        ALL_BALADI[4 - band]
    }
}
