//! Svara suite: four analyses keyed off a name's sounds.
//!
//! - [`svara_chakra`]: first vowel on the vowel wheel, read from Moon and Lagna
//! - [`baladi`]: grahas activated through their Baladi state
//! - [`panca_svara_dasa`]: the 60-year vowel period schedule
//! - [`lagana`]: syllable count support from the Lagna

pub mod baladi;
pub mod chakra;
pub mod dasa;
pub mod lagana;
pub mod vowel;

use nama_base::PlanetaryDataset;
use serde::Serialize;

pub use baladi::{BaladiRecommendation, BaladiReport, PlanetState, baladi};
pub use chakra::{LagnaPlacement, MoonPlacement, MoonStatus, SvaraChakra, svara_chakra};
pub use dasa::{DASA_SEQUENCE, DASA_YEARS, DasaPeriod, panca_svara_dasa};
pub use lagana::{Lagana, LaganaNature, lagana, syllable_count};
pub use vowel::{first_vowel, vowel_sign};

/// All four Svara analyses for one name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SvaraReport {
    pub chakra: Option<SvaraChakra>,
    pub baladi: BaladiReport,
    pub dasa: [DasaPeriod; 5],
    pub lagana: Option<Lagana>,
}

pub fn analyze_svara(name: &str, dataset: &PlanetaryDataset, birth_year: i32) -> SvaraReport {
    SvaraReport {
        chakra: svara_chakra(name, dataset),
        baladi: baladi(name, dataset),
        dasa: panca_svara_dasa(name, birth_year),
        lagana: lagana(name, dataset),
    }
}
