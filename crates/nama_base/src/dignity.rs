//! Sign-level dignity tables.
//!
//! Signs here are 1-based (Mesha = 1, Meena = 12), matching the way the
//! tables are quoted in the classical texts. Nodes use the Taurus/Scorpio
//! exaltation school and are given co-lordship of Aquarius and Scorpio.

use serde::Serialize;

use crate::graha::Graha;

/// Exaltation sign (1-based) of a graha.
pub const fn exaltation_sign(graha: Graha) -> u8 {
    match graha {
        Graha::Surya => 1,
        Graha::Chandra => 2,
        Graha::Mangal => 10,
        Graha::Buddh => 6,
        Graha::Guru => 4,
        Graha::Shukra => 12,
        Graha::Shani => 7,
        Graha::Rahu => 2,
        Graha::Ketu => 8,
    }
}

/// Debilitation sign (1-based) of a graha.
pub const fn debilitation_sign(graha: Graha) -> u8 {
    match graha {
        Graha::Surya => 7,
        Graha::Chandra => 8,
        Graha::Mangal => 4,
        Graha::Buddh => 12,
        Graha::Guru => 10,
        Graha::Shukra => 6,
        Graha::Shani => 1,
        Graha::Rahu => 8,
        Graha::Ketu => 2,
    }
}

/// Own signs (1-based) of a graha.
pub const fn own_signs(graha: Graha) -> &'static [u8] {
    match graha {
        Graha::Surya => &[5],
        Graha::Chandra => &[4],
        Graha::Mangal => &[1, 8],
        Graha::Buddh => &[3, 6],
        Graha::Guru => &[9, 12],
        Graha::Shukra => &[2, 7],
        Graha::Shani => &[10, 11],
        Graha::Rahu => &[11],
        Graha::Ketu => &[8],
    }
}

/// Sign dignity, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Dignity {
    Exalted,
    Debilitated,
    OwnSign,
    /// Any other sign (friend, neutral or enemy are not distinguished).
    Neutral,
}

/// Dignity of a graha placed in a 0-based sign index.
///
/// Exaltation is checked before debilitation, which is checked before own
/// sign.
pub fn dignity_in_sign(graha: Graha, sign_index: u8) -> Dignity {
    let sign = sign_index + 1;
    if exaltation_sign(graha) == sign {
        Dignity::Exalted
    } else if debilitation_sign(graha) == sign {
        Dignity::Debilitated
    } else if own_signs(graha).contains(&sign) {
        Dignity::OwnSign
    } else {
        Dignity::Neutral
    }
}

/// Whether a graha is debilitated in a 0-based sign index.
pub fn is_debilitated(graha: Graha, sign_index: u8) -> bool {
    debilitation_sign(graha) == sign_index + 1
}
