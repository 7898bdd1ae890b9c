//! Chart-based naming engines.
//!
//! Every engine borrows an immutable [`nama_base::PlanetaryDataset`] and
//! never fails: a missing reference point yields `None` or an empty list.
//!
//! - [`atmakaraka`] / [`ista_devata`]: soul planet and its 12th in D9
//! - [`shadbala`]: approximate strength ranking with sound groups
//! - [`hoda_chakra`]: syllable filter against Moon and Lagna
//! - [`special_lagna`]: AL, VL, HL, GL, with the [`sunrise`] seam
//! - [`svara`]: vowel wheel, Baladi activation, Svara Dasa, Lagana
//! - [`report`]: the full pipeline for one request

pub mod atmakaraka;
pub mod hoda_chakra;
pub mod ista_devata;
pub mod report;
pub mod shadbala;
pub mod special_lagna;
pub mod sunrise;
pub mod svara;

pub use atmakaraka::{Atmakaraka, atmakaraka, karaka_degree};
pub use hoda_chakra::{
    HodaCandidate, HouseEvaluation, HouseTier, MOON_DUSTHANA_SCORE, Tone, evaluate_house,
    hoda_chakra, score_syllable,
};
pub use ista_devata::{IstaDevata, IstaLord, IstaOccupant, ista_devata, ista_devata_for};
pub use report::{DEFAULT_NAME, HodaSelection, NamingReport, naming_report};
pub use shadbala::{ShadbalaRanking, StrengthScore, rank_strength, strength_score};
pub use special_lagna::{
    arudha_lagna, arudha_sign, chart_points, ghatika_lagna, hora_lagna, time_lagnas,
    varnada_lagna, varnada_point,
};
pub use sunrise::{ApproxSunrise, NoSunrise, SunriseSource, resolve_sunrise};
pub use svara::{SvaraReport, analyze_svara};
