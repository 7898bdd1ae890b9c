//! Signs of the sidereal zodiac and longitude → sign conversion.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each,
//! starting from Mesha (Aries) at 0 deg. Sign parity follows the 1-based
//! convention: Mesha (index 0) is an odd sign, Vrishabha (index 1) even.

use serde::Serialize;

use crate::util::normalize_360;

/// The 12 rashis; the discriminant is the 0-based sign index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum Rashi {
    Mesha = 0,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = {
    use Rashi::*;
    [Mesha, Vrishabha, Mithuna, Karka, Simha, Kanya, Tula, Vrischika, Dhanu, Makara, Kumbha, Meena]
};

const SANSKRIT_NAMES: [&str; 12] = [
    "Mesha", "Vrishabha", "Mithuna", "Karka", "Simha", "Kanya", "Tula", "Vrischika", "Dhanu",
    "Makara", "Kumbha", "Meena",
];

const WESTERN_NAMES: [&str; 12] = [
    "Aries", "Taurus", "Gemini", "Cancer", "Leo", "Virgo", "Libra", "Scorpio", "Sagittarius",
    "Capricorn", "Aquarius", "Pisces",
];

impl Rashi {
    pub const fn name(self) -> &'static str {
        SANSKRIT_NAMES[self as usize]
    }

    pub const fn western_name(self) -> &'static str {
        WESTERN_NAMES[self as usize]
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Rashi for a 0-based index, wrapping modulo 12.
    pub const fn from_index(index: u8) -> Self {
        ALL_RASHIS[(index % 12) as usize]
    }

    /// Odd signs are Mesha, Mithuna, Simha, ... (even 0-based index).
    pub const fn is_odd(self) -> bool {
        self.index() % 2 == 0
    }
}

/// Western name for a 0-based sign index, wrapping modulo 12.
pub const fn sign_name(index: u8) -> &'static str {
    Rashi::from_index(index).western_name()
}

/// Degrees-minutes-seconds representation of an angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dms {
    /// Whole degrees (0..29 within a rashi, or 0..359 standalone).
    pub degrees: u16,
    /// Arc-minutes (0..59).
    pub minutes: u8,
    /// Arc-seconds (0.0..60.0), may include fractional part.
    pub seconds: f64,
}

/// Full rashi position result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RashiInfo {
    pub rashi: Rashi,
    /// 0-based rashi index (0 = Mesha).
    pub rashi_index: u8,
    /// Position within the rashi as DMS.
    pub dms: Dms,
    /// Decimal degrees within the rashi [0.0, 30.0).
    pub degrees_in_rashi: f64,
}

/// Convert decimal degrees to degrees-minutes-seconds.
///
/// Handles negative input by taking absolute value.
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let total_degrees = d.floor() as u16;
    let remainder = (d - total_degrees as f64) * 60.0;
    let minutes = remainder.floor() as u8;
    let seconds = (remainder - minutes as f64) * 60.0;
    Dms {
        degrees: total_degrees,
        minutes,
        seconds,
    }
}

/// 0-based sign index of a sidereal longitude: `floor(lon / 30)`.
pub fn sign_index(sidereal_lon_deg: f64) -> u8 {
    // Clamp to 11 in case of floating point edge (exactly 360.0)
    ((normalize_360(sidereal_lon_deg) / 30.0).floor() as u8).min(11)
}

/// Determine rashi from sidereal ecliptic longitude.
///
/// Each rashi spans exactly 30 degrees: Mesha = [0, 30), Vrishabha = [30, 60), etc.
pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> RashiInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let rashi_idx = sign_index(lon);
    let degrees_in_rashi = lon - (rashi_idx as f64) * 30.0;

    RashiInfo {
        rashi: ALL_RASHIS[rashi_idx as usize],
        rashi_index: rashi_idx,
        dms: deg_to_dms(degrees_in_rashi),
        degrees_in_rashi,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rashi_indices_sequential() {
        for (i, r) in ALL_RASHIS.iter().enumerate() {
            assert_eq!(r.index() as usize, i);
            assert_eq!(Rashi::from_index(i as u8), *r);
        }
    }

    #[test]
    fn parity_follows_one_based_numbering() {
        assert!(Rashi::Mesha.is_odd());
        assert!(!Rashi::Vrishabha.is_odd());
        assert!(Rashi::Mithuna.is_odd());
        assert!(!Rashi::Meena.is_odd());
    }

    #[test]
    fn sign_name_wraps() {
        assert_eq!(sign_name(3), "Cancer");
        assert_eq!(sign_name(12), "Aries");
    }

    #[test]
    fn deg_to_dms_known() {
        // 23.853 deg = 23 deg 51' 10.8"
        let d = deg_to_dms(23.853);
        assert_eq!(d.degrees, 23);
        assert_eq!(d.minutes, 51);
        assert!((d.seconds - 10.8).abs() < 0.01);
    }

    #[test]
    fn rashi_all_boundaries() {
        for i in 0..12u8 {
            let lon = i as f64 * 30.0;
            let info = rashi_from_longitude(lon);
            assert_eq!(info.rashi_index, i, "boundary at {lon} deg");
        }
    }

    #[test]
    fn rashi_mid_sign() {
        let info = rashi_from_longitude(45.5);
        assert_eq!(info.rashi, Rashi::Vrishabha);
        assert!((info.degrees_in_rashi - 15.5).abs() < 1e-10);
        assert_eq!(info.dms.minutes, 30);
    }

    #[test]
    fn rashi_negative_wraps() {
        let info = rashi_from_longitude(-10.0);
        assert_eq!(info.rashi, Rashi::Meena);
        assert!((info.degrees_in_rashi - 20.0).abs() < 1e-10);
    }

    #[test]
    fn sign_index_just_below_360() {
        assert_eq!(sign_index(359.999_999), 11);
    }
}
