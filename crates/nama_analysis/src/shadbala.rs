//! Approximate Shadbala ranking.
//!
//! Three additive terms, floored at zero:
//! 1. Dignity: exalted 60, debilitated 0, own sign 30, otherwise 15
//! 2. Kendradi (needs Lagna): kendra +20, trikona +10, dusthana −10
//! 3. Dig (needs Lagna): +20 in the graha's directional house
//!
//! The ranking order is part of the contract: the first entry is the
//! "human rule" pick that drives the Hoda Chakra, the last is the
//! "avatar rule" pick.

use nama_base::{
    Dignity, Graha, PlanetPosition, PlanetaryDataset, SoundGroup, dignity_in_sign, is_dusthana,
    is_kendra, is_trikona, relative_house, sound_group,
};
use serde::Serialize;

// ---------------------------------------------------------------------------
// Terms
// ---------------------------------------------------------------------------

/// Dignity term.
pub fn dignity_points(graha: Graha, sign_index: u8) -> i32 {
    match dignity_in_sign(graha, sign_index) {
        Dignity::Exalted => 60,
        Dignity::Debilitated => 0,
        Dignity::OwnSign => 30,
        Dignity::Neutral => 15,
    }
}

/// Kendradi term for a house counted from Lagna.
pub fn kendradi_points(house: u8) -> i32 {
    if is_kendra(house) {
        20
    } else if is_trikona(house) {
        10
    } else if is_dusthana(house) {
        -10
    } else {
        0
    }
}

/// House of directional strength: Sun/Mars 10, Moon/Venus 4, Saturn 7,
/// Mercury/Jupiter 1. Nodes have none.
pub const fn dig_bala_house(graha: Graha) -> Option<u8> {
    match graha {
        Graha::Surya | Graha::Mangal => Some(10),
        Graha::Chandra | Graha::Shukra => Some(4),
        Graha::Shani => Some(7),
        Graha::Buddh | Graha::Guru => Some(1),
        Graha::Rahu | Graha::Ketu => None,
    }
}

/// Dig term.
pub fn dig_points(graha: Graha, house: u8) -> i32 {
    if dig_bala_house(graha) == Some(house) { 20 } else { 0 }
}

/// Strength of one graha. House and Dig terms apply only with a Lagna.
pub fn strength_score(
    graha: Graha,
    position: &PlanetPosition,
    lagna: Option<&PlanetPosition>,
) -> u32 {
    let mut score = dignity_points(graha, position.sign_index());
    if let Some(lagna) = lagna {
        let house = relative_house(position.sign_index(), lagna.sign_index());
        score += kendradi_points(house) + dig_points(graha, house);
    }
    score.max(0) as u32
}

// ---------------------------------------------------------------------------
// Ranking
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StrengthScore {
    pub graha: Graha,
    pub score: u32,
    pub sound_group: SoundGroup,
}

/// Grahas ordered by descending strength, ties in dataset order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShadbalaRanking {
    pub scores: Vec<StrengthScore>,
}

impl ShadbalaRanking {
    /// Strongest graha ("human rule").
    pub fn strongest(&self) -> Option<&StrengthScore> {
        self.scores.first()
    }

    /// Weakest graha ("avatar rule").
    pub fn weakest(&self) -> Option<&StrengthScore> {
        self.scores.last()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

/// Score and rank every graha in the dataset.
pub fn rank_strength(dataset: &PlanetaryDataset) -> ShadbalaRanking {
    let lagna = dataset.lagna();
    let mut scores: Vec<StrengthScore> = dataset
        .grahas()
        .map(|(graha, position)| StrengthScore {
            graha,
            score: strength_score(graha, position, lagna),
            sound_group: sound_group(graha),
        })
        .collect();
    scores.sort_by(|a, b| b.score.cmp(&a.score));
    ShadbalaRanking { scores }
}
