//! Atmakaraka: the graha with the highest degree within its sign.
//!
//! Ketu and the computed points (Lagna, Pranapada) are never candidates.
//! Rahu moves retrograde, so its degree is counted from the end of the
//! sign (`30 - deg`).

use nama_base::{Graha, PlanetPosition, PlanetaryDataset};
use serde::Serialize;
use tracing::debug;

/// The selected soul planet and the degree it won with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Atmakaraka {
    pub graha: Graha,
    /// Degree used for the comparison (inverted for Rahu).
    pub degree: f64,
    pub position: PlanetPosition,
}

/// Degree a graha competes with for Atmakaraka.
pub fn karaka_degree(graha: Graha, position: &PlanetPosition) -> f64 {
    let deg = position.degrees_in_sign();
    if graha == Graha::Rahu { 30.0 - deg } else { deg }
}

/// Find the Atmakaraka. Ties keep the first graha in dataset order.
///
/// Returns `None` when the dataset holds no candidate.
pub fn atmakaraka(dataset: &PlanetaryDataset) -> Option<Atmakaraka> {
    let mut best: Option<Atmakaraka> = None;
    for (graha, position) in dataset.grahas().filter(|(g, _)| *g != Graha::Ketu) {
        let degree = karaka_degree(graha, position);
        if best.is_none_or(|b| degree > b.degree) {
            best = Some(Atmakaraka {
                graha,
                degree,
                position: *position,
            });
        }
    }
    if let Some(ak) = &best {
        debug!(graha = ak.graha.name(), degree = ak.degree, "atmakaraka selected");
    }
    best
}
