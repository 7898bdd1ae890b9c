//! Naming report: one request through every chart engine, in order.

use nama_base::{BirthData, ChartPoint, Graha, PlanetaryDataset};
use serde::Serialize;
use tracing::debug;

use crate::hoda_chakra::{HodaCandidate, hoda_chakra};
use crate::ista_devata::{IstaDevata, ista_devata};
use crate::shadbala::{ShadbalaRanking, rank_strength};
use crate::special_lagna::chart_points;
use crate::sunrise::SunriseSource;
use crate::svara::{SvaraReport, analyze_svara};

/// Name used when the caller supplies none.
pub const DEFAULT_NAME: &str = "Child";

/// Hoda Chakra candidates for one selected graha.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HodaSelection {
    pub graha: Graha,
    pub candidates: Vec<HodaCandidate>,
}

impl HodaSelection {
    /// Run the Hoda Chakra for a chosen graha.
    pub fn for_graha(graha: Graha, dataset: &PlanetaryDataset) -> Self {
        Self {
            graha,
            candidates: hoda_chakra(graha, dataset),
        }
    }

    /// Recommended candidates only.
    pub fn recommended(&self) -> impl Iterator<Item = &HodaCandidate> {
        self.candidates.iter().filter(|c| c.is_recommended)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamingReport {
    pub name: String,
    pub birth_year: i32,
    pub ista_devata: Option<IstaDevata>,
    pub shadbala: ShadbalaRanking,
    /// Hoda Chakra for the strongest graha.
    pub hoda: Option<HodaSelection>,
    pub svara: SvaraReport,
    pub chart_points: Vec<ChartPoint>,
}

impl NamingReport {
    /// Rerun the Hoda Chakra for another graha.
    pub fn reselect(&mut self, graha: Graha, dataset: &PlanetaryDataset) {
        self.hoda = Some(HodaSelection::for_graha(graha, dataset));
    }
}

/// Build the full report for a chart and a candidate name.
///
/// A blank name is analysed as [`DEFAULT_NAME`].
pub fn naming_report<S: SunriseSource + ?Sized>(
    dataset: &PlanetaryDataset,
    birth: &BirthData,
    name: &str,
    sunrise: &S,
) -> NamingReport {
    let name = match name.trim() {
        "" => DEFAULT_NAME,
        n => n,
    };
    let birth_year = birth.birth_year();

    let ista_devata = ista_devata(dataset);
    let shadbala = rank_strength(dataset);
    let hoda = shadbala
        .strongest()
        .map(|s| HodaSelection::for_graha(s.graha, dataset));
    if let Some(h) = &hoda {
        debug!(graha = h.graha.name(), candidates = h.candidates.len(), "hoda chakra for strongest graha");
    }
    let svara = analyze_svara(name, dataset, birth_year);
    let chart_points = chart_points(dataset, birth, sunrise);

    NamingReport {
        name: name.to_string(),
        birth_year,
        ista_devata,
        shadbala,
        hoda,
        svara,
        chart_points,
    }
}
