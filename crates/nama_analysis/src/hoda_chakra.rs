//! Hoda Chakra filter: score a graha's candidate syllables by where their
//! signs fall from the Moon and from the Lagna.
//!
//! A syllable in a dusthana from the Moon is rejected outright (total −10)
//! whatever its Lagna placement.

use nama_base::{Graha, PlanetaryDataset, candidate_syllables, hoda_sign, relative_house, sign_name};
use serde::Serialize;

/// Total given to syllables in a dusthana from the Moon.
pub const MOON_DUSTHANA_SCORE: f64 = -10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HouseTier {
    Kendra,
    Kona,
    Neutral,
    Upachaya,
    Dusthana,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Tone {
    Good,
    Neutral,
    Bad,
}

/// Tiered reading of one house.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HouseEvaluation {
    pub house: u8,
    pub tier: HouseTier,
    pub score: f64,
    pub tone: Tone,
}

/// Kendra 2, Kona 1.5, 2nd/11th 1, 3rd 0.5, dusthana −2.
pub fn evaluate_house(house: u8) -> HouseEvaluation {
    let (tier, score, tone) = match house {
        1 | 4 | 7 | 10 => (HouseTier::Kendra, 2.0, Tone::Good),
        5 | 9 => (HouseTier::Kona, 1.5, Tone::Good),
        2 | 11 => (HouseTier::Neutral, 1.0, Tone::Neutral),
        3 => (HouseTier::Upachaya, 0.5, Tone::Neutral),
        6 | 8 | 12 => (HouseTier::Dusthana, -2.0, Tone::Bad),
        _ => (HouseTier::Neutral, 0.0, Tone::Neutral),
    };
    HouseEvaluation {
        house,
        tier,
        score,
        tone,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HodaCandidate {
    pub syllable: &'static str,
    pub sign_index: u8,
    pub sign_name: &'static str,
    pub from_moon: HouseEvaluation,
    pub from_lagna: HouseEvaluation,
    pub total_score: f64,
    pub is_recommended: bool,
}

/// Score a single syllable sign against Moon and Lagna signs.
pub fn score_syllable(
    syllable: &'static str,
    sign_index: u8,
    moon_sign: u8,
    lagna_sign: u8,
) -> HodaCandidate {
    let from_moon = evaluate_house(relative_house(sign_index, moon_sign));
    let from_lagna = evaluate_house(relative_house(sign_index, lagna_sign));
    let total_score = if from_moon.tone == Tone::Bad {
        MOON_DUSTHANA_SCORE
    } else {
        from_moon.score + from_lagna.score
    };
    HodaCandidate {
        syllable,
        sign_index,
        sign_name: sign_name(sign_index),
        from_moon,
        from_lagna,
        total_score,
        is_recommended: total_score > 0.0,
    }
}

/// Candidates for a graha, best first. Ties keep table order.
///
/// Empty when the dataset lacks a Moon or a Lagna. Syllables with no sign
/// in the table are skipped.
pub fn hoda_chakra(graha: Graha, dataset: &PlanetaryDataset) -> Vec<HodaCandidate> {
    let (Some(moon), Some(lagna)) = (dataset.moon(), dataset.lagna()) else {
        return Vec::new();
    };
    let mut results: Vec<HodaCandidate> = candidate_syllables(graha)
        .into_iter()
        .filter_map(|s| {
            hoda_sign(s).map(|sign| score_syllable(s, sign, moon.sign_index(), lagna.sign_index()))
        })
        .collect();
    results.sort_by(|a, b| b.total_score.total_cmp(&a.total_score));
    results
}
