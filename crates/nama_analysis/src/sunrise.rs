//! Sunrise lookup seam.
//!
//! Time-based lagnas count hours from sunrise. The astronomy behind the
//! lookup is pluggable through [`SunriseSource`]; the resolver turns every
//! outcome into a concrete instant so callers never fail:
//!
//! - `Ok(Some(t))` → `t`
//! - `Ok(None)` (no rise that day) → local midnight + 6h
//! - `Err(_)` → 06:00 local on the birth date, logged as a warning

use std::f64::consts::{PI, TAU};

use chrono::{DateTime, Duration, Utc};
use nama_base::{BirthData, GeoLocation, NamaError, normalize_360};
use tracing::warn;

/// Source of sunrise instants.
pub trait SunriseSource {
    /// First sunrise on the local day starting at `local_midnight`.
    fn sunrise(
        &self,
        local_midnight: DateTime<Utc>,
        location: &GeoLocation,
    ) -> Result<Option<DateTime<Utc>>, NamaError>;
}

/// A source with no astronomy available. Every lookup falls back.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSunrise;

impl SunriseSource for NoSunrise {
    fn sunrise(
        &self,
        _local_midnight: DateTime<Utc>,
        _location: &GeoLocation,
    ) -> Result<Option<DateTime<Utc>>, NamaError> {
        Err(NamaError::AstronomyUnavailable("no sunrise source configured"))
    }
}

/// Resolve the sunrise for a birth, applying the fallbacks.
pub fn resolve_sunrise<S: SunriseSource + ?Sized>(source: &S, birth: &BirthData) -> DateTime<Utc> {
    let midnight = birth.local_midnight();
    match source.sunrise(midnight, birth.location()) {
        Ok(Some(t)) => t,
        Ok(None) => midnight + Duration::hours(6),
        Err(e) => {
            warn!(error = %e, "sunrise lookup failed, using 06:00 local");
            birth.local_six_am()
        }
    }
}

// ---------------------------------------------------------------------------
// Low-precision solar sunrise
// ---------------------------------------------------------------------------

/// Maximum iterations for the rise refinement loop.
const MAX_ITERATIONS: usize = 5;

/// Convergence threshold in days (~0.86 seconds).
const CONVERGENCE_DAYS: f64 = 1.0e-5;

/// Standard altitude of the Sun's upper limb at rise, refraction included.
const SUNRISE_ALTITUDE_DEG: f64 = -0.8333;

/// JD of the Unix epoch.
const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// JD of J2000.0.
const J2000_JD: f64 = 2_451_545.0;

/// Sidereal rotation rate in rad/day.
const SIDEREAL_RATE: f64 = TAU * 1.002_737_909_350_795;

/// Sunrise from a mean-Sun model with equation of centre.
///
/// Accuracy is about a minute at mid latitudes, enough to place the hora
/// and ghatika lagnas. Returns `Ok(None)` during polar day or night.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApproxSunrise;

impl SunriseSource for ApproxSunrise {
    fn sunrise(
        &self,
        local_midnight: DateTime<Utc>,
        location: &GeoLocation,
    ) -> Result<Option<DateTime<Utc>>, NamaError> {
        let phi = location.latitude_rad();
        let lon_rad = location.longitude_deg.to_radians();
        let h0 = SUNRISE_ALTITUDE_DEG.to_radians();

        // Start from local clock noon and walk to the meridian transit.
        let jd_noon = datetime_to_jd(local_midnight) + 0.5;
        let (ra, dec) = sun_ra_dec(jd_noon);
        let Some(h_rise) = rise_hour_angle(phi, dec, h0) else {
            return Ok(None);
        };
        let ha_noon = wrap_pi(local_sidereal_rad(jd_noon, lon_rad) - ra);
        let jd_transit = jd_noon - ha_noon / SIDEREAL_RATE;
        let mut jd_event = jd_transit - h_rise / SIDEREAL_RATE;

        for _ in 0..MAX_ITERATIONS {
            let (ra_i, dec_i) = sun_ra_dec(jd_event);
            let Some(h_target) = rise_hour_angle(phi, dec_i, h0) else {
                return Ok(None);
            };
            let ha_actual = wrap_pi(local_sidereal_rad(jd_event, lon_rad) - ra_i);
            let correction = wrap_pi(-h_target - ha_actual) / SIDEREAL_RATE;
            jd_event += correction;
            if correction.abs() < CONVERGENCE_DAYS {
                break;
            }
        }

        jd_to_datetime(jd_event)
            .map(Some)
            .ok_or(NamaError::AstronomyUnavailable("sunrise instant out of range"))
    }
}

fn datetime_to_jd(t: DateTime<Utc>) -> f64 {
    t.timestamp_millis() as f64 / 86_400_000.0 + UNIX_EPOCH_JD
}

fn jd_to_datetime(jd: f64) -> Option<DateTime<Utc>> {
    let millis = ((jd - UNIX_EPOCH_JD) * 86_400_000.0).round();
    if !millis.is_finite() {
        return None;
    }
    DateTime::from_timestamp_millis(millis as i64)
}

/// Apparent solar right ascension and declination (radians).
fn sun_ra_dec(jd: f64) -> (f64, f64) {
    let n = jd - J2000_JD;
    let mean_lon = normalize_360(280.460 + 0.985_647_4 * n);
    let mean_anomaly = normalize_360(357.528 + 0.985_600_3 * n).to_radians();
    let ecl_lon = (mean_lon
        + 1.915 * mean_anomaly.sin()
        + 0.020 * (2.0 * mean_anomaly).sin())
    .to_radians();
    let obliquity = (23.439 - 0.000_000_4 * n).to_radians();
    let ra = (obliquity.cos() * ecl_lon.sin())
        .atan2(ecl_lon.cos())
        .rem_euclid(TAU);
    let dec = (obliquity.sin() * ecl_lon.sin()).asin();
    (ra, dec)
}

fn local_sidereal_rad(jd: f64, lon_rad: f64) -> f64 {
    let gmst_deg = normalize_360(280.460_618_37 + 360.985_647_366_29 * (jd - J2000_JD));
    (gmst_deg.to_radians() + lon_rad).rem_euclid(TAU)
}

/// Hour angle at which the Sun reaches `h0`, or `None` if it never does.
fn rise_hour_angle(phi: f64, dec: f64, h0: f64) -> Option<f64> {
    let cos_h = (h0.sin() - phi.sin() * dec.sin()) / (phi.cos() * dec.cos());
    (-1.0..=1.0).contains(&cos_h).then(|| cos_h.acos())
}

fn wrap_pi(angle: f64) -> f64 {
    let a = angle.rem_euclid(TAU);
    if a > PI { a - TAU } else { a }
}
