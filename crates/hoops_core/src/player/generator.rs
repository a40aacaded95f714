//! Player generation pipeline
//!
//! height -> archetype -> group factors -> ratings -> body -> Overall/Potential

use rand::Rng;
use tracing::{debug, trace};

use super::{ArchetypeSelector, DefaultLabels, LabelSource, RatingCalculator, RatingRandomizer};
use crate::config::GenerationConfig;
use crate::models::{Archetype, Attribute, Player, PlayerId, RatingFactors};
use crate::sampling::{clamped_gaussian, int_inclusive, unit, HeightSampler};

const KG_PER_LB: f64 = 0.45359237;

/// Height drawn for one generation attempt.
#[derive(Debug, Clone, Copy)]
struct BodyDraw {
    inches: f64,
    height_rating: u8,
}

pub struct PlayerGenerator<'a> {
    config: &'a GenerationConfig,
    labels: &'a dyn LabelSource,
}

impl<'a> PlayerGenerator<'a> {
    pub fn new(config: &'a GenerationConfig, labels: &'a dyn LabelSource) -> Self {
        Self { config, labels }
    }

    pub fn config(&self) -> &GenerationConfig {
        self.config
    }

    /// Builds a player of the given age. With a filter, height and archetype
    /// are re-rolled until they agree; after `archetype_max_attempts` rolls
    /// the filter archetype is assigned to the last height drawn.
    pub fn generate<R: Rng>(&self, age: u8, filter: Option<Archetype>, rng: &mut R) -> Player {
        let season = self.config.initial_season;
        self.generate_for(age, filter, season, &self.config.initial_team, rng)
    }

    /// Same as [`generate`](Self::generate), with the first snapshot tagged
    /// for `season_year` and `team`.
    pub fn generate_for<R: Rng>(
        &self,
        age: u8,
        filter: Option<Archetype>,
        season_year: i32,
        team: &str,
        rng: &mut R,
    ) -> Player {
        let (body, archetype) = self.draw_body_and_archetype(filter, rng);
        let (country, name) = super::labels::label_pair(self.labels, rng);
        let factors = self.draw_factors(rng);

        let mut ratings =
            RatingRandomizer::randomize(archetype, &factors, self.config.rating_noise_std, rng);
        ratings.set(Attribute::HeightRating, body.height_rating);

        let weight_kg = self.draw_weight_kg(ratings.get(Attribute::Strength), body.height_rating, rng);
        let height_cm = HeightSampler::inches_to_cm(body.inches);

        let overall = RatingCalculator::overall(&ratings);
        let potential = RatingCalculator::potential(age, overall, self.config, rng);

        let mut player = Player::new(
            PlayerId::from_rng(rng),
            name,
            country,
            archetype,
            height_cm,
            weight_kg,
            factors,
            age,
            ratings,
            potential,
        );
        player.reconcile_potential();
        player.record_snapshot(season_year, team);

        debug!(
            player = %player.name,
            archetype = %archetype,
            height_cm,
            overall,
            potential,
            position = %player.position(),
            "generated player"
        );

        player
    }

    fn draw_body_and_archetype<R: Rng>(
        &self,
        filter: Option<Archetype>,
        rng: &mut R,
    ) -> (BodyDraw, Archetype) {
        let attempts = self.config.archetype_max_attempts.max(1);
        let mut body = self.draw_body(rng);

        for attempt in 1..=attempts {
            if attempt > 1 {
                body = self.draw_body(rng);
            }
            let archetype = ArchetypeSelector::select(body.height_rating, rng);
            match filter {
                Some(wanted) if wanted != archetype => {
                    trace!(attempt, ?archetype, ?wanted, "archetype re-roll");
                }
                _ => return (body, archetype),
            }
        }

        // Only reachable with a filter.
        let forced = filter.unwrap_or(Archetype::Wing);
        debug!(attempts, archetype = %forced, "archetype filter forced");
        (body, forced)
    }

    fn draw_body<R: Rng>(&self, rng: &mut R) -> BodyDraw {
        let inches = HeightSampler::sample(rng) as f64 + unit(rng) - 0.5;
        let jitter = self.config.wingspan_jitter_inches;
        let adjusted = inches + int_inclusive(rng, -jitter, jitter) as f64;
        BodyDraw { inches, height_rating: HeightSampler::height_to_rating(adjusted) }
    }

    fn draw_factors<R: Rng>(&self, rng: &mut R) -> RatingFactors {
        let c = self.config;
        let [outside_scoring, athleticism, inside_scoring, playmaking, defense, rebounding, intangibles] =
            [(); 7].map(|_| {
                clamped_gaussian(
                    rng,
                    c.group_factor_mean,
                    c.group_factor_std,
                    c.group_factor_min,
                    c.group_factor_max,
                )
            });
        RatingFactors {
            outside_scoring,
            athleticism,
            inside_scoring,
            playmaking,
            defense,
            rebounding,
            intangibles,
        }
    }

    fn draw_weight_kg<R: Rng>(&self, strength: u8, height_rating: u8, rng: &mut R) -> u16 {
        let jitter = self.config.weight_jitter_lb;
        let lb = self.config.weight_strength_coef * strength as f64
            + height_rating as f64
            + self.config.weight_base_lb
            + int_inclusive(rng, -jitter, jitter) as f64;
        (lb * KG_PER_LB).round().max(0.0) as u16
    }
}

/// Generates one player with default tables and labels.
pub fn generate_player<R: Rng>(age: u8, filter: Option<Archetype>, rng: &mut R) -> Player {
    let config = GenerationConfig::default();
    PlayerGenerator::new(&config, &DefaultLabels).generate(age, filter, rng)
}
