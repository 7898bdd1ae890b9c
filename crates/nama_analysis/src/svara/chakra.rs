//! Svara Chakra: place a name's first vowel on the wheel and read it from
//! the Moon (health) and the Lagna (purity).

use nama_base::{PlanetaryDataset, is_dusthana, is_kendra, is_trikona, relative_house, sign_name};
use serde::Serialize;

use super::vowel::{first_vowel, vowel_sign};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MoonStatus {
    Excellent,
    Good,
    Challenging,
    Neutral,
}

impl MoonStatus {
    pub fn from_house(house: u8) -> Self {
        if is_kendra(house) {
            Self::Excellent
        } else if is_trikona(house) {
            Self::Good
        } else if is_dusthana(house) {
            Self::Challenging
        } else {
            Self::Neutral
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent (Kendra)",
            Self::Good => "Good (Trikona)",
            Self::Challenging => "Challenging (Dusthana)",
            Self::Neutral => "Neutral",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoonPlacement {
    pub house: u8,
    pub status: MoonStatus,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LagnaPlacement {
    pub house: u8,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SvaraChakra {
    pub vowel: char,
    pub sign_index: u8,
    pub sign_name: &'static str,
    pub from_moon: MoonPlacement,
    pub from_lagna: LagnaPlacement,
}

/// Read a name on the Svara wheel. `None` without Moon or Lagna.
pub fn svara_chakra(name: &str, dataset: &PlanetaryDataset) -> Option<SvaraChakra> {
    let vowel = first_vowel(name);
    let sign = vowel_sign(vowel);
    let moon = dataset.moon()?;
    let lagna = dataset.lagna()?;

    let moon_house = relative_house(sign, moon.sign_index());
    let lagna_house = relative_house(sign, lagna.sign_index());

    Some(SvaraChakra {
        vowel,
        sign_index: sign,
        sign_name: sign_name(sign),
        from_moon: MoonPlacement {
            house: moon_house,
            status: MoonStatus::from_house(moon_house),
            description: format!(
                "Placed in {moon_house}th from Moon. Refers to Health & Sustenance (Rāyi)."
            ),
        },
        from_lagna: LagnaPlacement {
            house: lagna_house,
            description: format!(
                "Placed in {lagna_house}th from Lagna. Needs to be kept 'clean' (Viṣṇu sthāna)."
            ),
        },
    })
}
