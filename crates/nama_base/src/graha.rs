//! Vedic planet (graha) enum, chart bodies, and rashi lordship.
//!
//! The 9 grahas are the only bodies that carry dignity, sound groups and
//! strength. A chart additionally holds the Lagna and, when the ephemeris
//! provider emits it, the Pranapada point; both are mathematical points and
//! are excluded from every planet-only analysis.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

use crate::error::NamaError;
use crate::rashi::{ALL_RASHIS, Rashi};

/// The 9 Vedic grahas; the discriminant is the index into [`ALL_GRAHAS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum Graha {
    Surya = 0,
    Chandra,
    Mangal,
    Buddh,
    Guru,
    Shukra,
    Shani,
    Rahu,
    Ketu,
}

/// All 9 grahas in traditional order. The sign-lord table indexes into it.
pub const ALL_GRAHAS: [Graha; 9] = {
    use Graha::*;
    [Surya, Chandra, Mangal, Buddh, Guru, Shukra, Shani, Rahu, Ketu]
};

/// Sign lords by 0-based rashi index, as indices into [`ALL_GRAHAS`].
pub const SIGN_LORDS: [u8; 12] = [2, 5, 3, 1, 0, 3, 5, 2, 4, 6, 6, 4];

const SANSKRIT_NAMES: [&str; 9] = [
    "Surya", "Chandra", "Mangal", "Buddh", "Guru", "Shukra", "Shani", "Rahu", "Ketu",
];

const ENGLISH_NAMES: [&str; 9] = [
    "Sun", "Moon", "Mars", "Mercury", "Jupiter", "Venus", "Saturn", "Rahu", "Ketu",
];

impl Graha {
    pub const fn name(self) -> &'static str {
        SANSKRIT_NAMES[self as usize]
    }

    /// Name used in chart input and labels.
    pub const fn english_name(self) -> &'static str {
        ENGLISH_NAMES[self as usize]
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Lunar nodes (Rahu, Ketu).
    pub const fn is_node(self) -> bool {
        matches!(self, Self::Rahu | Self::Ketu)
    }
}

impl Display for Graha {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.english_name())
    }
}

impl FromStr for Graha {
    type Err = NamaError;

    /// Accepts English or Sanskrit names, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sun" | "surya" => Ok(Self::Surya),
            "moon" | "chandra" => Ok(Self::Chandra),
            "mars" | "mangal" => Ok(Self::Mangal),
            "mercury" | "buddh" => Ok(Self::Buddh),
            "jupiter" | "guru" => Ok(Self::Guru),
            "venus" | "shukra" => Ok(Self::Shukra),
            "saturn" | "shani" => Ok(Self::Shani),
            "rahu" => Ok(Self::Rahu),
            "ketu" => Ok(Self::Ketu),
            _ => Err(NamaError::UnknownBody(s.to_string())),
        }
    }
}

/// Any body that can appear in a planetary dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ChartBody {
    Graha(Graha),
    Lagna,
    Pranapada,
}

impl ChartBody {
    /// Display name: the graha's English name, or "Lagna"/"Pranapada".
    pub const fn name(self) -> &'static str {
        match self {
            Self::Graha(g) => g.english_name(),
            Self::Lagna => "Lagna",
            Self::Pranapada => "Pranapada",
        }
    }

    pub const fn graha(self) -> Option<Graha> {
        match self {
            Self::Graha(g) => Some(g),
            Self::Lagna | Self::Pranapada => None,
        }
    }

    /// Lagna and Pranapada are computed points, not physical bodies.
    pub const fn is_point(self) -> bool {
        matches!(self, Self::Lagna | Self::Pranapada)
    }
}

impl Display for ChartBody {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChartBody {
    type Err = NamaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lagna" | "ascendant" | "asc" => Ok(Self::Lagna),
            "pranapada" => Ok(Self::Pranapada),
            _ => s.parse::<Graha>().map(Self::Graha),
        }
    }
}

/// Sign lord. The nodes rule no sign here.
pub const fn rashi_lord(rashi: Rashi) -> Graha {
    ALL_GRAHAS[SIGN_LORDS[rashi.index() as usize] as usize]
}

/// Sign lord by 0-based index, `None` past Meena.
pub fn rashi_lord_by_index(rashi_index: u8) -> Option<Graha> {
    ALL_RASHIS.get(rashi_index as usize).map(|r| rashi_lord(*r))
}

/// Compute the n-th rashi from a given rashi (0-based indices, 1-based offset).
///
/// `nth_rashi_from(0, 1)` = 0 (same rashi), `nth_rashi_from(0, 2)` = 1 (next rashi).
pub fn nth_rashi_from(rashi_index: u8, offset: u8) -> u8 {
    ((rashi_index as u16 + offset as u16 - 1) % 12) as u8
}

/// House (1-12) of `target` counted from `source`, both 0-based rashi indices.
///
/// `relative_house(x, x)` is always 1. Inverse of [`nth_rashi_from`].
pub fn relative_house(target: u8, source: u8) -> u8 {
    ((target as i16 - source as i16 + 12).rem_euclid(12) + 1) as u8
}
