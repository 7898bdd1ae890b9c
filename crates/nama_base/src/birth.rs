//! Birth instant and place.
//!
//! The time/location collaborator resolves a local birth date and time plus
//! a timezone offset; the instant is stored in UTC and the offset kept so
//! that "local" wall-clock times (midnight, 06:00) can be rebuilt.

use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Serialize, Serializer};

use crate::error::NamaError;

/// Geographic location on Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
}

impl GeoLocation {
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Result<Self, NamaError> {
        if !latitude_deg.is_finite() || !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(NamaError::InvalidBirthData("latitude must be within [-90, 90]"));
        }
        if !longitude_deg.is_finite() || !(-180.0..=180.0).contains(&longitude_deg) {
            return Err(NamaError::InvalidBirthData(
                "longitude must be within [-180, 180]",
            ));
        }
        Ok(Self {
            latitude_deg,
            longitude_deg,
        })
    }

    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }
}

/// Birth instant (UTC), the local offset in force, and the birth place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BirthData {
    instant: DateTime<Utc>,
    #[serde(serialize_with = "offset_seconds")]
    utc_offset: FixedOffset,
    location: GeoLocation,
}

impl BirthData {
    pub fn new(instant: DateTime<Utc>, utc_offset: FixedOffset, location: GeoLocation) -> Self {
        Self {
            instant,
            utc_offset,
            location,
        }
    }

    /// Build from local wall-clock date/time and an offset in hours east of UTC.
    ///
    /// UTC = local − offset.
    pub fn from_local(
        date: NaiveDate,
        time: NaiveTime,
        tz_hours: f64,
        location: GeoLocation,
    ) -> Result<Self, NamaError> {
        if !tz_hours.is_finite() || tz_hours.abs() > 14.0 {
            return Err(NamaError::InvalidBirthData(
                "timezone offset must be within ±14 hours",
            ));
        }
        let offset = FixedOffset::east_opt((tz_hours * 3600.0).round() as i32)
            .ok_or(NamaError::InvalidBirthData("timezone offset out of range"))?;
        Ok(Self {
            instant: local_to_utc(date.and_time(time), offset),
            utc_offset: offset,
            location,
        })
    }

    pub fn instant(&self) -> DateTime<Utc> {
        self.instant
    }

    pub fn utc_offset(&self) -> FixedOffset {
        self.utc_offset
    }

    pub fn location(&self) -> &GeoLocation {
        &self.location
    }

    /// Local calendar date of birth.
    pub fn local_date(&self) -> NaiveDate {
        self.instant.with_timezone(&self.utc_offset).date_naive()
    }

    /// Local calendar year of birth.
    pub fn birth_year(&self) -> i32 {
        self.local_date().year()
    }

    /// Local midnight at the start of the birth date, as UTC.
    pub fn local_midnight(&self) -> DateTime<Utc> {
        local_to_utc(self.local_date().and_time(NaiveTime::MIN), self.utc_offset)
    }

    /// Local 06:00 on the birth date, as UTC.
    pub fn local_six_am(&self) -> DateTime<Utc> {
        self.local_midnight() + Duration::hours(6)
    }

    /// Signed hours from `earlier` to the birth instant.
    pub fn hours_since(&self, earlier: DateTime<Utc>) -> f64 {
        (self.instant - earlier).num_milliseconds() as f64 / 3_600_000.0
    }
}

/// Offsets serialize as seconds east of UTC.
fn offset_seconds<S: Serializer>(offset: &FixedOffset, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_i32(offset.local_minus_utc())
}

fn local_to_utc(local: NaiveDateTime, offset: FixedOffset) -> DateTime<Utc> {
    let utc = local - Duration::seconds(offset.local_minus_utc() as i64);
    DateTime::from_naive_utc_and_offset(utc, Utc)
}
