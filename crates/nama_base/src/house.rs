//! House (bhava) groupings used by the strength and sound filters.

/// Angular houses.
pub const KENDRA_HOUSES: [u8; 4] = [1, 4, 7, 10];

/// Trinal houses (the 1st is counted as a kendra).
pub const TRIKONA_HOUSES: [u8; 2] = [5, 9];

/// Difficult houses.
pub const DUSTHANA_HOUSES: [u8; 3] = [6, 8, 12];

pub fn is_kendra(house: u8) -> bool {
    KENDRA_HOUSES.contains(&house)
}

pub fn is_trikona(house: u8) -> bool {
    TRIKONA_HOUSES.contains(&house)
}

pub fn is_dusthana(house: u8) -> bool {
    DUSTHANA_HOUSES.contains(&house)
}
