//! Shared angle helpers.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // A tiny negative input rounds up to exactly 360.
    if r >= 360.0 { 0.0 } else { r }
}

/// Degrees elapsed within the current 30-degree sign, in [0, 30).
pub fn degrees_in_sign(deg: f64) -> f64 {
    normalize_360(deg) % 30.0
}

/// Navamsa (D9) sign index for a sidereal longitude.
///
/// Each sign holds nine 3°20' padas; counting padas continuously from
/// 0° Mesha and wrapping every 12 gives the navamsa sign.
pub fn navamsa_index(deg: f64) -> u8 {
    let pada = (normalize_360(deg) / (30.0 / 9.0)).floor() as u32;
    (pada % 12) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_zero() {
        assert!((normalize_360(0.0) - 0.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_360_wraps() {
        assert!((normalize_360(360.0) - 0.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_negative() {
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_large_negative() {
        assert!((normalize_360(-370.0) - 350.0).abs() < 1e-10);
    }

    #[test]
    fn normalize_tiny_negative_stays_below_360() {
        let r = normalize_360(-1e-14);
        assert!((0.0..360.0).contains(&r), "{r}");
        assert_eq!(r, 0.0);
    }

    #[test]
    fn degrees_in_sign_mid() {
        assert!((degrees_in_sign(95.25) - 5.25).abs() < 1e-10);
    }

    #[test]
    fn navamsa_first_pada_of_mesha_is_mesha() {
        assert_eq!(navamsa_index(1.0), 0);
    }

    #[test]
    fn navamsa_last_pada_of_mesha_is_dhanu() {
        assert_eq!(navamsa_index(29.0), 8);
    }

    #[test]
    fn navamsa_first_pada_of_vrishabha_is_makara() {
        assert_eq!(navamsa_index(31.0), 9);
    }
}
