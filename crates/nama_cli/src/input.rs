//! JSON chart file: birth details plus sidereal positions.
//!
//! ```json
//! {
//!   "ayanamsa": 23.8,
//!   "birth": { "date": "1995-08-20", "time": "09:30", "tz_hours": 5.5,
//!              "latitude": 19.07, "longitude": 72.88 },
//!   "positions": [ { "name": "Lagna", "longitude": 155.0 },
//!                  { "name": "Sun", "longitude": 123.0, "d9": 4 } ]
//! }
//! ```

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

use chrono::{NaiveDate, NaiveTime};
use nama_base::{BirthData, ChartBody, GeoLocation, NamaError, PlanetPosition, PlanetaryDataset};
use serde::Deserialize;
use tracing::debug;

#[derive(Debug)]
pub enum InputError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Chart(NamaError),
    Time(String),
}

impl Display for InputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "cannot read chart file: {e}"),
            Self::Json(e) => write!(f, "malformed chart file: {e}"),
            Self::Chart(e) => write!(f, "invalid chart: {e}"),
            Self::Time(s) => write!(f, "invalid birth time: {s} (expected HH:MM or HH:MM:SS)"),
        }
    }
}

impl Error for InputError {}

impl From<std::io::Error> for InputError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for InputError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<NamaError> for InputError {
    fn from(e: NamaError) -> Self {
        Self::Chart(e)
    }
}

#[derive(Debug, Deserialize)]
struct ChartFile {
    ayanamsa: f64,
    birth: BirthInput,
    positions: Vec<PositionInput>,
}

#[derive(Debug, Deserialize)]
struct BirthInput {
    date: NaiveDate,
    time: String,
    tz_hours: f64,
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Deserialize)]
struct PositionInput {
    name: String,
    longitude: f64,
    #[serde(default)]
    d9: Option<u8>,
    #[serde(default)]
    retrograde: bool,
}

/// A parsed chart ready for the engines.
#[derive(Debug, Clone)]
pub struct Chart {
    pub dataset: PlanetaryDataset,
    pub birth: BirthData,
}

fn parse_time(s: &str) -> Result<NaiveTime, InputError> {
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .map_err(|_| InputError::Time(s.to_string()))
}

fn position(p: &PositionInput) -> Result<PlanetPosition, NamaError> {
    let body: ChartBody = p.name.parse()?;
    match p.d9 {
        Some(d9) => PlanetPosition::new(body, p.longitude, d9, p.retrograde),
        None => PlanetPosition::with_derived_navamsa(body, p.longitude, p.retrograde),
    }
}

/// Parse a chart document.
pub fn parse_chart(json: &str) -> Result<Chart, InputError> {
    let file: ChartFile = serde_json::from_str(json)?;
    let b = &file.birth;
    let birth = BirthData::from_local(
        b.date,
        parse_time(&b.time)?,
        b.tz_hours,
        GeoLocation::new(b.latitude, b.longitude)?,
    )?;
    let positions = file
        .positions
        .iter()
        .map(position)
        .collect::<Result<Vec<_>, _>>()?;
    debug!(bodies = positions.len(), instant = %birth.instant(), "chart parsed");
    Ok(Chart {
        dataset: PlanetaryDataset::new(positions, file.ayanamsa),
        birth,
    })
}

pub fn load_chart(path: &Path) -> Result<Chart, InputError> {
    let text = std::fs::read_to_string(path)?;
    parse_chart(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nama_base::Graha;

    const SAMPLE: &str = r#"{
        "ayanamsa": 23.8,
        "birth": { "date": "1995-08-20", "time": "09:30", "tz_hours": 5.5,
                   "latitude": 19.07, "longitude": 72.88 },
        "positions": [
            { "name": "Lagna", "longitude": 155.0 },
            { "name": "Sun", "longitude": 123.0, "d9": 4 },
            { "name": "chandra", "longitude": 31.0, "retrograde": false }
        ]
    }"#;

    #[test]
    fn parses_sample() {
        let chart = parse_chart(SAMPLE).unwrap();
        assert_eq!(chart.dataset.positions().len(), 3);
        assert_eq!(chart.dataset.sun().unwrap().d9_index(), 4);
        // 31° → navamsa 9 (Capricorn) from the standard rule.
        assert_eq!(chart.dataset.graha(Graha::Chandra).unwrap().d9_index(), 9);
        assert_eq!(chart.birth.birth_year(), 1995);
        // 09:30 IST = 04:00 UTC.
        assert_eq!(chart.birth.instant().format("%H:%M").to_string(), "04:00");
    }

    #[test]
    fn seconds_are_optional() {
        assert!(parse_time("09:30").is_ok());
        assert!(parse_time("09:30:15").is_ok());
        assert!(matches!(parse_time("9h30"), Err(InputError::Time(_))));
    }

    #[test]
    fn unknown_body_rejected() {
        let json = SAMPLE.replace("chandra", "Pluto");
        let err = parse_chart(&json).unwrap_err();
        assert!(matches!(err, InputError::Chart(NamaError::UnknownBody(_))));
    }

    #[test]
    fn malformed_json_rejected() {
        assert!(matches!(parse_chart("{"), Err(InputError::Json(_))));
    }
}
