//! Ista Devata: the 12th sign from the Atmakaraka in the navamsa.

use nama_base::{ALL_GRAHAS, Graha, PlanetaryDataset, SIGN_LORDS, is_debilitated, sign_name};
use serde::Serialize;

use crate::atmakaraka::{Atmakaraka, atmakaraka};

/// A graha occupying the Ista sign in D9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IstaOccupant {
    pub graha: Graha,
    pub is_debilitated: bool,
    pub note: &'static str,
}

/// Lord of an empty Ista sign, reported in place of occupants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IstaLord {
    pub graha: Graha,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IstaDevata {
    pub atmakaraka: Atmakaraka,
    pub ista_sign_index: u8,
    pub ista_sign: &'static str,
    pub occupants: Vec<IstaOccupant>,
    /// Present only when `occupants` is empty.
    pub lord: Option<IstaLord>,
}

/// Analyse the Ista sign for a dataset.
///
/// Returns `None` when no Atmakaraka can be found.
pub fn ista_devata(dataset: &PlanetaryDataset) -> Option<IstaDevata> {
    let ak = atmakaraka(dataset)?;
    Some(ista_devata_for(dataset, ak))
}

/// Analyse the Ista sign for an already resolved Atmakaraka.
pub fn ista_devata_for(dataset: &PlanetaryDataset, ak: Atmakaraka) -> IstaDevata {
    let ista = (ak.position.d9_index() + 11) % 12;
    let ista_sign = sign_name(ista);

    let occupants: Vec<IstaOccupant> = dataset
        .grahas()
        .filter(|(_, p)| p.d9_index() == ista)
        .map(|(graha, _)| {
            let is_debilitated = is_debilitated(graha, ista);
            IstaOccupant {
                graha,
                is_debilitated,
                note: if is_debilitated {
                    "Debilitated (Requires 'picking up' name)"
                } else {
                    "Strong"
                },
            }
        })
        .collect();

    let lord = occupants.is_empty().then(|| IstaLord {
        graha: ALL_GRAHAS[SIGN_LORDS[ista as usize] as usize],
        note: format!("Lord of {ista_sign} (House is Empty)"),
    });

    IstaDevata {
        atmakaraka: ak,
        ista_sign_index: ista,
        ista_sign,
        occupants,
        lord,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nama_base::{ChartBody, PlanetPosition};

    fn graha(g: Graha, lon: f64, d9: u8) -> PlanetPosition {
        PlanetPosition::new(ChartBody::Graha(g), lon, d9, false).unwrap()
    }

    #[test]
    fn twelfth_from_ak_navamsa() {
        // AK Moon (28°) in D9 Aries → Ista sign Pisces.
        let ds = PlanetaryDataset::new(
            vec![
                graha(Graha::Chandra, 28.0, 0),
                graha(Graha::Shukra, 100.0, 11),
                graha(Graha::Buddh, 200.0, 11),
            ],
            24.0,
        );
        let r = ista_devata(&ds).unwrap();
        assert_eq!(r.atmakaraka.graha, Graha::Chandra);
        assert_eq!(r.ista_sign_index, 11);
        assert_eq!(r.ista_sign, "Pisces");
        assert_eq!(r.occupants.len(), 2);
        assert!(!r.occupants[0].is_debilitated);
        assert_eq!(r.occupants[0].note, "Strong");
        // Mercury falls in Pisces.
        assert!(r.occupants[1].is_debilitated);
        assert!(r.lord.is_none());
    }

    #[test]
    fn empty_sign_reports_lord() {
        let ds = PlanetaryDataset::new(
            vec![
                graha(Graha::Surya, 25.0, 5),
                PlanetPosition::new(ChartBody::Lagna, 10.0, 4, false).unwrap(),
            ],
            24.0,
        );
        let r = ista_devata(&ds).unwrap();
        assert_eq!(r.ista_sign_index, 4);
        assert!(r.occupants.is_empty());
        let lord = r.lord.unwrap();
        assert_eq!(lord.graha, Graha::Surya);
        assert_eq!(lord.note, "Lord of Leo (House is Empty)");
    }

    #[test]
    fn no_atmakaraka_no_result() {
        let ds = PlanetaryDataset::new(vec![graha(Graha::Ketu, 10.0, 0)], 24.0);
        assert!(ista_devata(&ds).is_none());
    }
}
