//! Reference tables and chart primitives for name analysis.
//!
//! This crate provides:
//! - Graha, Rashi and chart-body enums with lordship and dignity tables
//! - Planetary positions and the per-request [`PlanetaryDataset`]
//! - Birth instant/location ([`BirthData`]) built with chrono
//! - Relative-house arithmetic and house groupings
//! - The Hoda Chakra syllable table and Baladi Avastha vowels
//!
//! All tables are immutable process-wide data.

pub mod avastha;
pub mod birth;
pub mod chart;
pub mod dignity;
pub mod error;
pub mod graha;
pub mod hoda;
pub mod house;
pub mod rashi;
pub mod util;

pub use avastha::{ALL_BALADI, BaladiAvastha, baladi_avastha};
pub use birth::{BirthData, GeoLocation};
pub use chart::{ChartPoint, ChartPointKind, PlanetPosition, PlanetaryDataset, Varga};
pub use dignity::{
    Dignity, debilitation_sign, dignity_in_sign, exaltation_sign, is_debilitated, own_signs,
};
pub use error::NamaError;
pub use graha::{
    ALL_GRAHAS, ChartBody, Graha, SIGN_LORDS, nth_rashi_from, rashi_lord, rashi_lord_by_index,
    relative_house,
};
pub use hoda::{HodaTable, SoundGroup, candidate_syllables, hoda_sign, hoda_table, sound_group};
pub use house::{DUSTHANA_HOUSES, KENDRA_HOUSES, TRIKONA_HOUSES, is_dusthana, is_kendra, is_trikona};
pub use rashi::{
    ALL_RASHIS, Dms, Rashi, RashiInfo, deg_to_dms, rashi_from_longitude, sign_index, sign_name,
};
pub use util::{degrees_in_sign, navamsa_index, normalize_360};
