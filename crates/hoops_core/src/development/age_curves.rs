//! Age tables for season-over-season development.

use rand::Rng;

use crate::models::{Attribute, RatingGroup};
use crate::sampling::clamped_gaussian;

/// Shared change applied to every attribute for a season.
pub fn base_change(age: u8) -> f64 {
    match age {
        0..=21 => 2.0,
        22..=25 => 1.0,
        26..=27 => 0.0,
        28..=29 => -1.0,
        30..=31 => -2.0,
        32..=34 => -3.0,
        35..=40 => -4.0,
        41..=43 => -5.0,
        _ => -6.0,
    }
}

/// Season-level noise on top of [`base_change`]. Young players can jump.
pub fn base_noise<R: Rng + ?Sized>(age: u8, rng: &mut R) -> f64 {
    match age {
        0..=23 => clamped_gaussian(rng, 0.0, 5.0, -4.0, 20.0),
        24..=25 => clamped_gaussian(rng, 0.0, 5.0, -4.0, 10.0),
        _ => clamped_gaussian(rng, 0.0, 3.0, -2.0, 4.0),
    }
}

pub fn attribute_modifier(attr: Attribute, age: u8) -> f64 {
    use Attribute::*;
    match attr.group() {
        RatingGroup::Athleticism => match attr {
            Speed | Agility | Vertical => match age {
                0..=24 => 1.0,
                25..=27 => 0.0,
                28..=30 => -2.0,
                31..=35 => -3.0,
                36..=40 => -4.0,
                _ => -8.0,
            },
            Stamina => match age {
                0..=23 => 1.0,
                24..=30 => 0.0,
                31..=35 => -2.0,
                36..=40 => -4.0,
                _ => -8.0,
            },
            Strength => match age {
                0..=25 => 1.0,
                26..=32 => 2.0,
                33..=36 => 1.0,
                _ => 0.0,
            },
            Hustle => match age {
                0..=25 => 0.0,
                26..=32 => 1.0,
                33..=36 => 0.5,
                _ => 0.0,
            },
            OverallDurability => match age {
                0..=28 => 0.0,
                29..=34 => -1.0,
                _ => -2.0,
            },
            _ => 0.0,
        },
        RatingGroup::OutsideScoring | RatingGroup::InsideScoring | RatingGroup::Defense => {
            match age {
                0..=22 => 0.0,
                23..=27 => 1.0,
                28..=32 => 2.0,
                33..=36 => 1.0,
                _ => -1.0,
            }
        }
        RatingGroup::Playmaking => match age {
            0..=22 => 0.0,
            23..=27 => 1.0,
            28..=36 => 2.0,
            _ => 1.0,
        },
        RatingGroup::Rebounding => match age {
            0..=22 => 0.0,
            23..=27 => 1.0,
            28..=32 => 1.5,
            33..=36 => 1.0,
            _ => -1.0,
        },
    }
}

/// Bounds on one season's change for an attribute.
pub fn change_window(attr: Attribute) -> (f64, f64) {
    use Attribute::*;
    match attr.group() {
        RatingGroup::Athleticism => match attr {
            Speed | Agility | Vertical => (-12.0, 2.0),
            Strength => (-4.0, 4.0),
            _ => (-6.0, 4.0),
        },
        RatingGroup::OutsideScoring | RatingGroup::InsideScoring => (-3.0, 13.0),
        RatingGroup::Playmaking => (-2.0, 7.0),
        RatingGroup::Defense => (-4.0, 8.0),
        RatingGroup::Rebounding => (-3.0, 7.0),
    }
}

pub fn intangibles_modifier(age: u8) -> f64 {
    match age {
        0..=22 => 0.0,
        23..=26 => 1.0,
        27..=30 => 2.0,
        31..=34 => 3.0,
        35..=38 => 4.0,
        _ => 2.0,
    }
}

pub const INTANGIBLES_WINDOW: (f64, f64) = (-3.0, 6.0);
