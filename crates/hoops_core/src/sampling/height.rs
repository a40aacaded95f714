//! Empirical height distribution
//!
//! Inverse-transform sampling over a cumulative table of whole-inch heights,
//! plus the inch -> 0..100 height rating mapping.

use rand::Rng;

/// Cumulative probability cutoff paired with the height (inches) it selects.
const HEIGHT_CDF: [(f64, u8); 54] = [
    (0.000000000051653, 54),
    (0.000000000258264, 55),
    (0.000000001084711, 56),
    (0.000000004390496, 57),
    (0.000000017561983, 58),
    (0.000000069214876, 59),
    (0.000000275826446, 60),
    (0.000001308884298, 61),
    (0.00001163946281, 62),
    (0.000063292355372, 63),
    (0.000218251033058, 64),
    (0.000476515495868, 65),
    (0.000838085743802, 66),
    (0.00130296177686, 67),
    (0.002066115702479, 68),
    (0.004132231404959, 69),
    (0.008780991735537, 70),
    (0.012913223140496, 71),
    (0.041838842975207, 72),
    (0.083161157024793, 73),
    (0.12654958677686, 74),
    (0.196797520661157, 75),
    (0.267045454545455, 76),
    (0.337809917355372, 77),
    (0.419421487603306, 78),
    (0.521694214876033, 79),
    (0.62396694214876, 80),
    (0.739669421487603, 81),
    (0.832128099173554, 82),
    (0.915805785123967, 83),
    (0.967458677685951, 84),
    (0.984504132231405, 85),
    (0.991735537190083, 86),
    (0.995351239669422, 87),
    (0.997417355371901, 88),
    (0.998243801652893, 89),
    (0.999018595041323, 90),
    (0.99974173553719, 91),
    (0.999870867097108, 92),
    (0.999917354700413, 93),
    (0.999950929080579, 94),
    (0.99997675552686, 95),
    (0.999988377427686, 96),
    (0.99999612536157, 97),
    (0.999999456973141, 98),
    (0.999999818543389, 99),
    (0.999999934762397, 100),
    (0.999999979958678, 101),
    (0.999999991580579, 102),
    (0.999999997572314, 103),
    (0.999999999225207, 104),
    (0.99999999963843, 105),
    (0.999999999845042, 106),
    (0.999999999948347, 107),
];

/// Returned when the roll lands above the last cutoff.
pub const MAX_HEIGHT_INCHES: u8 = 108;
pub const MIN_HEIGHT_INCHES: u8 = 54;

/// Heights mapped onto the rating scale: 66" is 0, 93" is 100.
const RATING_FLOOR_INCHES: f64 = 66.0;
const RATING_CEIL_INCHES: f64 = 93.0;

pub const CM_PER_INCH: f64 = 2.54;

#[derive(Debug)]
pub struct HeightSampler;

impl HeightSampler {
    /// Draws a height in whole inches.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> u8 {
        Self::height_for_roll(rng.gen::<f64>())
    }

    /// First height whose cutoff strictly exceeds `r`, else the tail value.
    pub fn height_for_roll(r: f64) -> u8 {
        HEIGHT_CDF
            .iter()
            .find(|(cutoff, _)| r < *cutoff)
            .map(|(_, inches)| *inches)
            .unwrap_or(MAX_HEIGHT_INCHES)
    }

    pub fn height_to_rating(inches: f64) -> u8 {
        let raw = 100.0 * (inches - RATING_FLOOR_INCHES) / (RATING_CEIL_INCHES - RATING_FLOOR_INCHES);
        raw.round().clamp(0.0, 100.0) as u8
    }

    /// Centimetres covered by one point of height rating.
    pub fn rating_step_cm() -> f64 {
        (RATING_CEIL_INCHES - RATING_FLOOR_INCHES) * CM_PER_INCH / 100.0
    }

    pub fn inches_to_cm(inches: f64) -> u16 {
        (inches * CM_PER_INCH).max(0.0) as u16
    }
}
