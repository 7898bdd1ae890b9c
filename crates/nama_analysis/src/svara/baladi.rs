//! Baladi activation: which grahas a name's first vowel wakes up.

use nama_base::{BaladiAvastha, Graha, PlanetaryDataset, baladi_avastha};
use serde::Serialize;

use super::vowel::first_vowel;
use crate::atmakaraka::atmakaraka;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanetState {
    pub graha: Graha,
    pub degree: f64,
    pub sign_index: u8,
    pub state: BaladiAvastha,
    pub vowels: [&'static str; 2],
    pub is_activated: bool,
}

/// Vowels suggested to activate the Atmakaraka.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BaladiRecommendation {
    pub graha: Graha,
    pub state: BaladiAvastha,
    pub suggested_vowels: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BaladiReport {
    pub current_vowel: char,
    pub activated: Vec<Graha>,
    pub recommendation: Option<BaladiRecommendation>,
    pub states: Vec<PlanetState>,
}

/// States of every graha, nodes listed last.
pub fn planet_states(dataset: &PlanetaryDataset, vowel: char) -> Vec<PlanetState> {
    let mut buf = [0u8; 4];
    let vowel: &str = vowel.encode_utf8(&mut buf);
    let planets = dataset.grahas().filter(|(g, _)| !g.is_node());
    let nodes = dataset.grahas().filter(|(g, _)| g.is_node());
    planets
        .chain(nodes)
        .map(|(graha, p)| {
            let state = baladi_avastha(p.longitude(), p.sign_index());
            PlanetState {
                graha,
                degree: p.degrees_in_sign(),
                sign_index: p.sign_index(),
                state,
                vowels: state.vowels(),
                is_activated: state.is_activated_by(vowel),
            }
        })
        .collect()
}

pub fn baladi(name: &str, dataset: &PlanetaryDataset) -> BaladiReport {
    let current_vowel = first_vowel(name);
    let states = planet_states(dataset, current_vowel);
    let activated = states
        .iter()
        .filter(|s| s.is_activated)
        .map(|s| s.graha)
        .collect();

    let recommendation = atmakaraka(dataset).and_then(|ak| {
        states
            .iter()
            .find(|s| s.graha == ak.graha)
            .map(|s| BaladiRecommendation {
                graha: s.graha,
                state: s.state,
                suggested_vowels: s.vowels.join(", "),
            })
    });

    BaladiReport {
        current_vowel,
        activated,
        recommendation,
        states,
    }
}
