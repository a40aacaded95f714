//! Final ratings from baselines, archetype and group multipliers, plus noise.

use rand::Rng;

use crate::models::{ratings::DEFAULT_INTANGIBLES, Archetype, Attribute, RatingFactors, RatingPresets};
use crate::player::TypeFactors;
use crate::sampling::{gaussian, to_rating};

#[derive(Debug)]
pub struct RatingRandomizer;

impl RatingRandomizer {
    /// One pass over the descriptor table: every attribute is drawn once,
    /// in table order, followed by Intangibles.
    pub fn randomize<R: Rng + ?Sized>(
        archetype: Archetype,
        factors: &RatingFactors,
        noise_std: f64,
        rng: &mut R,
    ) -> RatingPresets {
        let mut ratings = RatingPresets::zeroed();

        for attr in Attribute::ALL {
            let noisy = gaussian(rng, attr.baseline(), noise_std);
            let scaled =
                noisy * TypeFactors::factor(archetype, attr) * factors.for_group(attr.group());
            ratings.set(attr, to_rating(scaled));
        }

        let noisy = gaussian(rng, DEFAULT_INTANGIBLES, noise_std);
        ratings.intangibles =
            to_rating(noisy * TypeFactors::intangibles(archetype) * factors.intangibles);

        ratings
    }
}
