//! Planetary positions, the per-request dataset, and derived chart points.
//!
//! A [`PlanetaryDataset`] is built once per calculation request from the
//! ephemeris provider's output and then only borrowed by the analyzers.

use serde::Serialize;

use crate::error::NamaError;
use crate::graha::{ChartBody, Graha};
use crate::rashi::sign_index;
use crate::util::{degrees_in_sign, navamsa_index, normalize_360};

/// One body's sidereal placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanetPosition {
    body: ChartBody,
    sidereal_lon: f64,
    sign_index: u8,
    d9_index: u8,
    is_retrograde: bool,
}

impl PlanetPosition {
    /// Build a position with an upstream navamsa index.
    ///
    /// The longitude is normalized to [0, 360).
    pub fn new(
        body: ChartBody,
        sidereal_lon: f64,
        d9_index: u8,
        is_retrograde: bool,
    ) -> Result<Self, NamaError> {
        if !sidereal_lon.is_finite() {
            return Err(NamaError::InvalidLongitude(sidereal_lon));
        }
        if d9_index >= 12 {
            return Err(NamaError::InvalidSignIndex(d9_index));
        }
        let lon = normalize_360(sidereal_lon);
        Ok(Self {
            body,
            sidereal_lon: lon,
            sign_index: sign_index(lon),
            d9_index,
            is_retrograde,
        })
    }

    /// Build a position whose navamsa index is derived from the longitude.
    pub fn with_derived_navamsa(
        body: ChartBody,
        sidereal_lon: f64,
        is_retrograde: bool,
    ) -> Result<Self, NamaError> {
        if !sidereal_lon.is_finite() {
            return Err(NamaError::InvalidLongitude(sidereal_lon));
        }
        Self::new(body, sidereal_lon, navamsa_index(sidereal_lon), is_retrograde)
    }

    pub fn body(&self) -> ChartBody {
        self.body
    }

    pub fn graha(&self) -> Option<Graha> {
        self.body.graha()
    }

    pub fn name(&self) -> &'static str {
        self.body.name()
    }

    /// Sidereal longitude in [0, 360).
    pub fn longitude(&self) -> f64 {
        self.sidereal_lon
    }

    /// 0-based sign index, `floor(longitude / 30)`.
    pub fn sign_index(&self) -> u8 {
        self.sign_index
    }

    /// 0-based navamsa (D9) sign index.
    pub fn d9_index(&self) -> u8 {
        self.d9_index
    }

    pub fn is_retrograde(&self) -> bool {
        self.is_retrograde
    }

    pub fn is_lagna(&self) -> bool {
        self.body == ChartBody::Lagna
    }

    /// Degrees elapsed in the current sign, [0, 30).
    pub fn degrees_in_sign(&self) -> f64 {
        degrees_in_sign(self.sidereal_lon)
    }
}

/// Divisional frame for sign placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Varga {
    /// D1, the birth chart.
    Rasi,
    /// D9.
    Navamsa,
}

/// The immutable set of positions for one calculation request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanetaryDataset {
    positions: Vec<PlanetPosition>,
    ayanamsa_deg: f64,
}

impl PlanetaryDataset {
    /// Wrap positions in provider order. Order is significant: analyzers
    /// break ties by first occurrence.
    pub fn new(positions: Vec<PlanetPosition>, ayanamsa_deg: f64) -> Self {
        Self {
            positions,
            ayanamsa_deg,
        }
    }

    pub fn positions(&self) -> &[PlanetPosition] {
        &self.positions
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Sidereal offset the provider applied.
    pub fn ayanamsa_deg(&self) -> f64 {
        self.ayanamsa_deg
    }

    /// First position of the given body.
    pub fn find(&self, body: ChartBody) -> Option<&PlanetPosition> {
        self.positions.iter().find(|p| p.body == body)
    }

    pub fn graha(&self, graha: Graha) -> Option<&PlanetPosition> {
        self.find(ChartBody::Graha(graha))
    }

    pub fn lagna(&self) -> Option<&PlanetPosition> {
        self.find(ChartBody::Lagna)
    }

    pub fn moon(&self) -> Option<&PlanetPosition> {
        self.graha(Graha::Chandra)
    }

    pub fn sun(&self) -> Option<&PlanetPosition> {
        self.graha(Graha::Surya)
    }

    /// Positions of the 9 grahas, in dataset order.
    pub fn grahas(&self) -> impl Iterator<Item = (Graha, &PlanetPosition)> {
        self.positions
            .iter()
            .filter_map(|p| p.graha().map(|g| (g, p)))
    }

    /// Bodies grouped by sign (index 0 = Mesha) in the requested frame.
    pub fn placements(&self, varga: Varga) -> [Vec<ChartBody>; 12] {
        let mut boxes: [Vec<ChartBody>; 12] = Default::default();
        for p in &self.positions {
            let idx = match varga {
                Varga::Rasi => p.sign_index,
                Varga::Navamsa => p.d9_index,
            };
            boxes[idx as usize].push(p.body);
        }
        boxes
    }
}

/// Derived chart points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ChartPointKind {
    /// Arudha Lagna.
    Al,
    /// Varnada Lagna.
    Vl,
    /// Hora Lagna.
    Hl,
    /// Ghatika Lagna.
    Gl,
}

impl ChartPointKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Al => "AL",
            Self::Vl => "VL",
            Self::Hl => "HL",
            Self::Gl => "GL",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Al => "Arudha Lagna",
            Self::Vl => "Varnada Lagna",
            Self::Hl => "Hora Lagna",
            Self::Gl => "Ghatika Lagna",
        }
    }
}

/// A derived point: a sign, no longitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartPoint {
    pub kind: ChartPointKind,
    pub sign_index: u8,
}
