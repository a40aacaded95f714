//! Overall and Potential formulas

use rand::Rng;

use crate::config::GenerationConfig;
use crate::models::{Attribute, RatingGroup, RatingPresets};
use crate::sampling::{gaussian, to_rating};

/// Group weights for Overall. Intangibles takes the remaining 0.08.
const OVERALL_WEIGHTS: [(RatingGroup, f64); 6] = [
    (RatingGroup::OutsideScoring, 0.22),
    (RatingGroup::Athleticism, 0.18),
    (RatingGroup::InsideScoring, 0.14),
    (RatingGroup::Playmaking, 0.16),
    (RatingGroup::Defense, 0.16),
    (RatingGroup::Rebounding, 0.06),
];
const INTANGIBLES_WEIGHT: f64 = 0.08;

const INSIDE_ATTRS: [Attribute; 5] = [
    Attribute::CloseShot,
    Attribute::Layup,
    Attribute::StandingDunk,
    Attribute::DrivingDunk,
    Attribute::PostHook,
];

const DEFENSIVE_IQ_ATTRS: [Attribute; 3] =
    [Attribute::HelpDefenseIq, Attribute::PassPerception, Attribute::DefensiveConsistency];

#[derive(Debug)]
pub struct RatingCalculator;

impl RatingCalculator {
    pub fn overall(ratings: &RatingPresets) -> u8 {
        let weighted: f64 = OVERALL_WEIGHTS
            .iter()
            .map(|(group, w)| ratings.group_average(*group) * w)
            .sum::<f64>()
            + ratings.intangibles as f64 * INTANGIBLES_WEIGHT;
        to_rating(weighted)
    }

    /// Potential at creation. Veterans are already at their ceiling.
    pub fn potential<R: Rng + ?Sized>(
        age: u8,
        overall: u8,
        config: &GenerationConfig,
        rng: &mut R,
    ) -> u8 {
        if age >= config.potential_veteran_age {
            return overall;
        }
        let estimate = config.potential_intercept - config.potential_age_coef * age as f64
            + config.potential_overall_coef * overall as f64
            + gaussian(rng, 0.0, config.potential_noise_std);
        to_rating(estimate)
    }

    /// Scoring close to the rim, as the possession engine sees it.
    pub fn inside_scoring(ratings: &RatingPresets) -> f64 {
        ratings.mean_of(&INSIDE_ATTRS)
    }

    pub fn defensive_iq(ratings: &RatingPresets) -> f64 {
        ratings.mean_of(&DEFENSIVE_IQ_ATTRS)
    }
}
