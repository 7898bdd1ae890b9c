//! Hoda Chakra syllable→sign table and the per-graha sound groups.
//!
//! The literal entry list contains colliding keys ("ta", "na", "di", "tha").
//! The table keeps the sign of the last entry for a key while the key keeps
//! the position of its first entry; candidate order and scores downstream
//! depend on exactly that.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::Serialize;

use crate::graha::Graha;

#[rustfmt::skip]
const HODA_ENTRIES: &[(&str, u8)] = &[
    ("chu", 0), ("che", 0), ("cho", 0), ("la", 0), ("li", 0),
    ("lu", 1), ("le", 1), ("lo", 1), ("vi", 1), ("vu", 1), ("ve", 1), ("vo", 1),
    ("ka", 2), ("ki", 2), ("ku", 2), ("gh", 2), ("cha", 2), ("ke", 2), ("ko", 2),
    ("hi", 3), ("hu", 3), ("he", 3), ("ho", 3), ("da", 3), ("di", 3),
    ("ma", 4), ("mi", 4), ("mu", 4), ("me", 4), ("mo", 4), ("ta", 4),
    ("pa", 5), ("pi", 5), ("pu", 5), ("sha", 5), ("na", 5), ("tha", 5),
    ("ra", 6), ("ri", 6), ("ru", 6), ("re", 6), ("ro", 6), ("ta", 6),
    ("to", 7), ("na", 7), ("ni", 7), ("nu", 7), ("ne", 7), ("ya", 7), ("yi", 7),
    ("ye", 8), ("yo", 8), ("bha", 8), ("bhi", 8), ("bhu", 8), ("dha", 8),
    ("bho", 9), ("ja", 9), ("ji", 9), ("khi", 9), ("khu", 9), ("khe", 9),
    ("gu", 10), ("ge", 10), ("go", 10), ("sa", 10), ("si", 10), ("su", 10),
    ("di", 11), ("du", 11), ("tha", 11), ("jha", 11), ("de", 11), ("do", 11),
];

/// Syllable→sign lookup with stable key order.
#[derive(Debug)]
pub struct HodaTable {
    keys: Vec<&'static str>,
    signs: HashMap<&'static str, u8>,
}

impl HodaTable {
    fn from_entries(entries: &[(&'static str, u8)]) -> Self {
        let mut keys = Vec::with_capacity(entries.len());
        let mut signs = HashMap::with_capacity(entries.len());
        for &(key, sign) in entries {
            if signs.insert(key, sign).is_none() {
                keys.push(key);
            }
        }
        Self { keys, signs }
    }

    /// 0-based sign index of a syllable, if listed.
    pub fn sign_of(&self, syllable: &str) -> Option<u8> {
        self.signs.get(syllable).copied()
    }

    /// Distinct keys in first-insertion order.
    pub fn keys(&self) -> &[&'static str] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

static HODA_TABLE: LazyLock<HodaTable> = LazyLock::new(|| HodaTable::from_entries(HODA_ENTRIES));

/// The process-wide Hoda Chakra table.
pub fn hoda_table() -> &'static HodaTable {
    &HODA_TABLE
}

/// Sign of a syllable in the Hoda Chakra.
pub fn hoda_sign(syllable: &str) -> Option<u8> {
    HODA_TABLE.sign_of(syllable)
}

/// Bare vowels offered for the Sun. None of them is a table key.
const SUN_VOWELS: [&str; 5] = ["a", "i", "u", "e", "o"];

/// Leading-sound rule for a graha: a key qualifies when it starts with one
/// of `include` and none of `exclude`.
struct PrefixRule {
    include: &'static [&'static str],
    exclude: &'static [&'static str],
}

fn prefix_rule(graha: Graha) -> Option<PrefixRule> {
    let (include, exclude): (&'static [&str], &'static [&str]) = match graha {
        Graha::Surya => return None,
        Graha::Mangal => (&["k", "g", "ng"], &[]),
        Graha::Shukra => (&["c", "ch", "j", "jh"], &[]),
        Graha::Buddh => (&["t", "d", "n"], &["th", "dh"]),
        Graha::Guru => (&["t", "d", "n", "th", "dh"], &[]),
        Graha::Shani => (&["p", "ph", "b", "bh", "m"], &[]),
        Graha::Chandra => (&["y", "r", "l", "v", "s", "sh", "h"], &[]),
        Graha::Rahu => (&["p", "b", "m"], &[]),
        Graha::Ketu => (&["k", "g"], &[]),
    };
    Some(PrefixRule { include, exclude })
}

/// Candidate naming syllables for a graha, in table order.
///
/// The Sun's candidates are bare vowels and may be absent from the table;
/// callers skip syllables with no sign.
pub fn candidate_syllables(graha: Graha) -> Vec<&'static str> {
    let Some(rule) = prefix_rule(graha) else {
        return SUN_VOWELS.to_vec();
    };
    HODA_TABLE
        .keys()
        .iter()
        .copied()
        .filter(|k| rule.include.iter().any(|p| k.starts_with(p)))
        .filter(|k| !rule.exclude.iter().any(|p| k.starts_with(p)))
        .collect()
}

/// Phonetic group a graha rules, shown next to its strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SoundGroup {
    pub label: &'static str,
    pub sounds: &'static str,
}

pub const fn sound_group(graha: Graha) -> SoundGroup {
    let (label, sounds) = match graha {
        Graha::Surya => ("Vowels (Svara)", "a, ā, i, ī, u, ū, ṛ, ṝ, ḷ, e, ai, o, au"),
        Graha::Mangal => ("Guttural (Ka-varga)", "ka, kha, ga, gha, ṅa"),
        Graha::Shukra => ("Palatal (Ca-varga)", "ca, cha, ja, jha, ña"),
        Graha::Buddh => ("Cerebral (Ṭa-varga)", "ṭa, ṭha, ḍa, ḍha, ṇa"),
        Graha::Guru => ("Dental (Ta-varga)", "ta, tha, da, dha, na"),
        Graha::Shani => ("Labial (Pa-varga)", "pa, pha, ba, bha, ma"),
        Graha::Chandra => ("Semi-vowels & Sibilants", "ya, ra, la, va, śa, ṣa, sa, ha"),
        Graha::Rahu => ("Expansive/Foreign", "Reverse order of Saturn (approx)"),
        Graha::Ketu => ("Contractive", "Reverse order of Mars (approx)"),
    };
    SoundGroup { label, sounds }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graha::ALL_GRAHAS;

    #[test]
    fn duplicate_keys_take_last_sign() {
        assert_eq!(hoda_sign("ta"), Some(6));
        assert_eq!(hoda_sign("na"), Some(7));
        assert_eq!(hoda_sign("di"), Some(11));
        assert_eq!(hoda_sign("tha"), Some(11));
    }

    #[test]
    fn duplicate_keys_keep_first_position() {
        let keys = hoda_table().keys();
        let pos = |k: &str| keys.iter().position(|x| *x == k).unwrap();
        assert_eq!(pos("ta"), pos("mo") + 1);
        assert_eq!(pos("na"), pos("sha") + 1);
        assert_eq!(pos("di"), pos("da") + 1);
    }

    #[test]
    fn table_size() {
        assert_eq!(HODA_ENTRIES.len(), 74);
        assert_eq!(hoda_table().len(), 70);
    }

    #[test]
    fn unknown_syllable() {
        assert_eq!(hoda_sign("xa"), None);
        assert_eq!(hoda_sign("a"), None);
    }

    #[test]
    fn mercury_excludes_aspirates() {
        let keys = candidate_syllables(Graha::Buddh);
        assert!(keys.contains(&"da"));
        assert!(keys.contains(&"ta"));
        assert!(!keys.contains(&"tha"));
        assert!(!keys.contains(&"dha"));
        let jup = candidate_syllables(Graha::Guru);
        assert!(jup.contains(&"tha"));
        assert!(jup.contains(&"dha"));
    }

    #[test]
    fn mars_group_in_table_order() {
        assert_eq!(
            candidate_syllables(Graha::Mangal),
            vec!["ka", "ki", "ku", "gh", "ke", "ko", "khi", "khu", "khe", "gu", "ge", "go"]
        );
    }

    #[test]
    fn sun_candidates_are_bare_vowels() {
        let keys = candidate_syllables(Graha::Surya);
        assert_eq!(keys, vec!["a", "i", "u", "e", "o"]);
        assert!(keys.iter().all(|k| hoda_sign(k).is_none()));
    }

    #[test]
    fn every_graha_has_a_sound_group() {
        for g in ALL_GRAHAS {
            assert!(!sound_group(g).label.is_empty());
        }
        assert_eq!(sound_group(Graha::Mangal).label, "Guttural (Ka-varga)");
    }
}
