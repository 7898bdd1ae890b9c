//! Special lagnas used for the chart overlay: Arudha, Varnada, Hora and
//! Ghatika.
//!
//! All four are reported as a sign only ([`ChartPoint`]). Hora and Ghatika
//! advance from the Sun at 30° and 75° per hour since sunrise; Varnada
//! combines Lagna with an unwrapped Hora Lagna by sign parity.

use chrono::{DateTime, Utc};
use nama_base::{
    BirthData, ChartPoint, ChartPointKind, PlanetaryDataset, normalize_360, rashi_lord_by_index,
    sign_index,
};
use tracing::debug;

use crate::sunrise::{SunriseSource, resolve_sunrise};

/// Hora Lagna advance in degrees per hour.
pub const HORA_DEG_PER_HOUR: f64 = 30.0;

/// Ghatika Lagna advance in degrees per hour (one sign per 24 minutes).
pub const GHATIKA_DEG_PER_HOUR: f64 = 75.0;

// ---------------------------------------------------------------------------
// Pure formulas
// ---------------------------------------------------------------------------

/// Arudha sign from the Lagna sign and its lord's sign (0-based).
///
/// The lord's distance from Lagna is projected forward from the lord. A
/// result in the 1st or 7th from Lagna moves 10 signs further, once.
pub fn arudha_sign(lagna_sign: u8, lord_sign: u8) -> u8 {
    let dist = (lord_sign + 12 - lagna_sign) % 12;
    let al = (lord_sign + dist) % 12;
    let rel = (al + 12 - lagna_sign) % 12;
    if rel == 0 || rel == 6 {
        debug!(al, "arudha in 1st/7th from lagna, moving 10 signs");
        (al + 10) % 12
    } else {
        al
    }
}

/// Hora Lagna longitude: `sun_lon + hours * 30`.
pub fn hora_lagna(sun_lon: f64, hours: f64) -> f64 {
    normalize_360(sun_lon + hours * HORA_DEG_PER_HOUR)
}

/// Ghatika Lagna longitude: `sun_lon + hours * 75`.
pub fn ghatika_lagna(sun_lon: f64, hours: f64) -> f64 {
    normalize_360(sun_lon + hours * GHATIKA_DEG_PER_HOUR)
}

/// Whether a longitude falls in an odd sign (Mesha, Mithuna, ...).
fn in_odd_sign(lon: f64) -> bool {
    sign_index(lon) % 2 == 0
}

/// Varnada Lagna longitude from Lagna and Hora Lagna.
///
/// Each longitude counts forward in odd signs and backward (`360 - lon`)
/// in even signs. Equal parity adds the two, unequal parity takes the
/// absolute difference. For an even Lagna the result is mirrored.
pub fn varnada_lagna(lagna_lon: f64, hora_lagna_lon: f64) -> f64 {
    let lagna_odd = in_odd_sign(lagna_lon);
    let hora_odd = in_odd_sign(hora_lagna_lon);

    let effective = |lon: f64, odd: bool| if odd { lon } else { 360.0 - lon };
    let l = effective(lagna_lon, lagna_odd);
    let h = effective(hora_lagna_lon, hora_odd);

    let res = normalize_360(if lagna_odd == hora_odd { l + h } else { (l - h).abs() });
    if lagna_odd { res } else { normalize_360(360.0 - res) }
}

// ---------------------------------------------------------------------------
// Dataset-level points
// ---------------------------------------------------------------------------

/// Arudha Lagna. `None` without a Lagna or without its lord in the dataset.
pub fn arudha_lagna(dataset: &PlanetaryDataset) -> Option<ChartPoint> {
    let lagna = dataset.lagna()?;
    let lord = rashi_lord_by_index(lagna.sign_index())?;
    let lord_pos = dataset.graha(lord)?;
    Some(ChartPoint {
        kind: ChartPointKind::Al,
        sign_index: arudha_sign(lagna.sign_index(), lord_pos.sign_index()),
    })
}

/// Varnada Lagna. Needs Sun and Lagna.
///
/// The Hora Lagna here uses signed hours: a birth before sunrise moves it
/// backwards from the Sun.
pub fn varnada_point(
    dataset: &PlanetaryDataset,
    birth: &BirthData,
    sunrise: DateTime<Utc>,
) -> Option<ChartPoint> {
    let sun = dataset.sun()?;
    let lagna = dataset.lagna()?;
    let hl = hora_lagna(sun.longitude(), birth.hours_since(sunrise));
    let vl = varnada_lagna(lagna.longitude(), hl);
    Some(ChartPoint {
        kind: ChartPointKind::Vl,
        sign_index: sign_index(vl),
    })
}

/// Hora and Ghatika Lagnas, in that order. Empty without a Sun.
///
/// A birth before sunrise counts from the previous day's rise (+24h).
pub fn time_lagnas(
    dataset: &PlanetaryDataset,
    birth: &BirthData,
    sunrise: DateTime<Utc>,
) -> Vec<ChartPoint> {
    let Some(sun) = dataset.sun() else {
        return Vec::new();
    };
    let mut hours = birth.hours_since(sunrise);
    if hours < 0.0 {
        hours += 24.0;
    }
    vec![
        ChartPoint {
            kind: ChartPointKind::Hl,
            sign_index: sign_index(hora_lagna(sun.longitude(), hours)),
        },
        ChartPoint {
            kind: ChartPointKind::Gl,
            sign_index: sign_index(ghatika_lagna(sun.longitude(), hours)),
        },
    ]
}

/// AL, VL, HL and GL for a chart, skipping any that cannot be derived.
///
/// The sunrise is resolved once and shared by the time-based points.
pub fn chart_points<S: SunriseSource + ?Sized>(
    dataset: &PlanetaryDataset,
    birth: &BirthData,
    source: &S,
) -> Vec<ChartPoint> {
    let sunrise = resolve_sunrise(source, birth);
    let mut points = Vec::with_capacity(4);
    points.extend(arudha_lagna(dataset));
    points.extend(varnada_point(dataset, birth, sunrise));
    points.extend(time_lagnas(dataset, birth, sunrise));
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use nama_base::{ChartBody, GeoLocation, Graha, PlanetPosition};

    use crate::sunrise::NoSunrise;

    fn pos(body: ChartBody, lon: f64) -> PlanetPosition {
        PlanetPosition::with_derived_navamsa(body, lon, false).unwrap()
    }

    fn birth_at(h: u32, m: u32) -> BirthData {
        BirthData::from_local(
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            NaiveTime::from_hms_opt(h, m, 0).unwrap(),
            0.0,
            GeoLocation::new(0.0, 0.0).unwrap(),
        )
        .unwrap()
    }

    // --- Arudha ---

    #[test]
    fn arudha_seventh_exception() {
        // Lagna Aries, Mars in Cancer → Libra, 7th → Leo.
        assert_eq!(arudha_sign(0, 3), 4);
    }

    #[test]
    fn arudha_first_exception() {
        // Lord in Lagna → AL in Lagna → 10th from it.
        assert_eq!(arudha_sign(5, 5), 3);
    }

    #[test]
    fn arudha_plain_projection() {
        // Lagna Aries, Mars in Gemini → Leo.
        assert_eq!(arudha_sign(0, 2), 4);
    }

    #[test]
    fn arudha_needs_lord() {
        let ds = PlanetaryDataset::new(vec![pos(ChartBody::Lagna, 10.0)], 24.0);
        assert!(arudha_lagna(&ds).is_none());
        let ds = PlanetaryDataset::new(
            vec![
                pos(ChartBody::Lagna, 10.0),
                pos(ChartBody::Graha(Graha::Mangal), 100.0),
            ],
            24.0,
        );
        assert_eq!(arudha_lagna(&ds).map(|p| p.sign_index), Some(4));
    }

    // --- Hora / Ghatika ---

    #[test]
    fn hora_lagna_advances_a_sign_per_hour() {
        assert!((hora_lagna(45.0, 2.0) - 105.0).abs() < 1e-10);
        assert!((hora_lagna(350.0, 1.0) - 20.0).abs() < 1e-10);
    }

    #[test]
    fn ghatika_lagna_rate() {
        assert!((ghatika_lagna(0.0, 2.0) - 150.0).abs() < 1e-10);
    }

    #[test]
    fn time_lagnas_wrap_before_sunrise() {
        let ds = PlanetaryDataset::new(vec![pos(ChartBody::Graha(Graha::Surya), 0.0)], 24.0);
        let b = birth_at(5, 0);
        let sunrise = b.local_six_am();
        // -1h → 23h: HL 690 → 330 (Pisces), GL 1725 → 285 (Capricorn).
        let pts = time_lagnas(&ds, &b, sunrise);
        assert_eq!(pts[0].kind, ChartPointKind::Hl);
        assert_eq!(pts[0].sign_index, 11);
        assert_eq!(pts[1].kind, ChartPointKind::Gl);
        assert_eq!(pts[1].sign_index, 9);
    }

    #[test]
    fn time_lagnas_need_sun() {
        let ds = PlanetaryDataset::new(vec![pos(ChartBody::Lagna, 0.0)], 24.0);
        let b = birth_at(9, 0);
        assert!(time_lagnas(&ds, &b, b.local_six_am()).is_empty());
    }

    // --- Varnada ---

    #[test]
    fn varnada_both_odd_adds() {
        // Aries 10 + Gemini 70 = 80.
        assert!((varnada_lagna(10.0, 70.0) - 80.0).abs() < 1e-10);
    }

    #[test]
    fn varnada_mixed_parity_difference() {
        // Lagna Aries 10 (odd), HL Taurus 40 (even → 320): |10 - 320| = 310.
        assert!((varnada_lagna(10.0, 40.0) - 310.0).abs() < 1e-10);
    }

    #[test]
    fn varnada_even_lagna_mirrors() {
        // Lagna Taurus 40 → 320, HL Cancer 100 → 260; sum 580 → 220; mirror → 140.
        assert!((varnada_lagna(40.0, 100.0) - 140.0).abs() < 1e-10);
    }

    #[test]
    fn varnada_uses_signed_hours() {
        let ds = PlanetaryDataset::new(
            vec![
                pos(ChartBody::Graha(Graha::Surya), 10.0),
                pos(ChartBody::Lagna, 10.0),
            ],
            24.0,
        );
        // Two hours before sunrise: HL = 10 - 60 = 310 (Aquarius, odd).
        // 10 + 310 = 320 → Aquarius.
        let b = birth_at(4, 0);
        let vl = varnada_point(&ds, &b, b.local_six_am()).unwrap();
        assert_eq!(vl.sign_index, 10);
    }

    // --- All points ---

    #[test]
    fn chart_points_with_fallback_sunrise() {
        let ds = PlanetaryDataset::new(
            vec![
                pos(ChartBody::Graha(Graha::Surya), 10.0),
                pos(ChartBody::Graha(Graha::Mangal), 100.0),
                pos(ChartBody::Lagna, 10.0),
            ],
            24.0,
        );
        let b = birth_at(8, 0);
        let pts = chart_points(&ds, &b, &NoSunrise);
        let kinds: Vec<ChartPointKind> = pts.iter().map(|p| p.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ChartPointKind::Al,
                ChartPointKind::Vl,
                ChartPointKind::Hl,
                ChartPointKind::Gl
            ]
        );
        // 2h after 06:00: HL = 70 (Gemini), GL = 160 (Virgo).
        assert_eq!(pts[2].sign_index, 2);
        assert_eq!(pts[3].sign_index, 5);
        assert_eq!(pts[0].sign_index, 4);
    }
}
