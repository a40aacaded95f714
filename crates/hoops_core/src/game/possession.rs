//! Possession resolution
//!
//! One possession runs a fixed cascade: turnover, steal, shooting foul,
//! block, shot, then rebound on a miss. Each step is a single Bernoulli
//! trial whose probability comes from the shooter/defender ratings and is
//! clamped to the window configured for that step.

use rand::Rng;
use tracing::trace;

use super::events::GameEventKind;
use super::stats::StatsTracker;
use crate::config::GameConfig;
use crate::error::StatsError;
use crate::models::{Attribute, Player, ShotType};
use crate::player::RatingCalculator;
use crate::sampling::{chance, gaussian, weighted_index};

/// Height span (cm) over which the inside/three tilt ramps in.
const TILT_FLOOR_CM: f64 = 170.0;
const TILT_SPAN_CM: f64 = 50.0;

/// Result of one resolved possession.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PossessionOutcome {
    pub points: u32,
    pub events: Vec<GameEventKind>,
}

pub struct PossessionEngine<'a> {
    config: &'a GameConfig,
}

impl<'a> PossessionEngine<'a> {
    pub fn new(config: &'a GameConfig) -> Self {
        Self { config }
    }

    /// Shooter index, weighted by shot-making profile.
    pub fn pick_shooter<R: Rng + ?Sized>(&self, offense: &[Player], rng: &mut R) -> usize {
        let w = &self.config.shooter_weights;
        let weights: Vec<f64> = offense
            .iter()
            .map(|p| {
                RatingCalculator::inside_scoring(&p.ratings) * w.inside
                    + p.ratings.get(Attribute::MidRangeShot) as f64 * w.mid_range
                    + p.ratings.get(Attribute::ThreePointShot) as f64 * w.three_point
            })
            .collect();
        weighted_index(rng, &weights).unwrap_or(0)
    }

    /// Uniform pick among defenders within one court slot of the shooter,
    /// or the whole defense when nobody matches.
    pub fn pick_defender<R: Rng + ?Sized>(
        &self,
        shooter: &Player,
        defense: &[Player],
        rng: &mut R,
    ) -> usize {
        let position = shooter.position();
        let candidates: Vec<usize> = defense
            .iter()
            .enumerate()
            .filter(|(_, d)| d.position().can_guard(position))
            .map(|(i, _)| i)
            .collect();

        if candidates.is_empty() {
            rng.gen_range(0..defense.len())
        } else {
            candidates[rng.gen_range(0..candidates.len())]
        }
    }

    pub fn possession_seconds<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        let c = self.config;
        let raw = gaussian(rng, c.possession_mean_seconds, c.possession_std_seconds).round();
        raw.clamp(c.possession_min_seconds as f64, c.possession_max_seconds as f64) as u32
    }

    /// Shot family weights before the roll: ratings, position tendencies
    /// and a height tilt toward the rim.
    pub fn action_weights(&self, shooter: &Player) -> [f64; 3] {
        let (inside_mult, mid_mult, three_mult) = shooter.position().shot_tendencies();
        let tilt = ((shooter.effective_height_cm() - TILT_FLOOR_CM) / TILT_SPAN_CM).clamp(0.0, 1.0);

        let inside = RatingCalculator::inside_scoring(&shooter.ratings)
            * inside_mult
            * (1.0 + tilt * self.config.height_tilt);
        let mid = shooter.ratings.get(Attribute::MidRangeShot) as f64 * mid_mult;
        let three = shooter.ratings.get(Attribute::ThreePointShot) as f64
            * three_mult
            * (1.0 - tilt * self.config.height_tilt);

        [inside.max(0.0), mid.max(0.0), three.max(0.0)]
    }

    pub fn choose_action<R: Rng + ?Sized>(&self, shooter: &Player, rng: &mut R) -> ShotType {
        let weights = self.action_weights(shooter);
        let idx = weighted_index(rng, &weights).unwrap_or(0);
        ShotType::ALL[idx]
    }

    pub fn turnover_chance(&self, shooter: &Player) -> f64 {
        let c = self.config;
        c.turnover_bounds.clamp(c.turnover_base + (50.0 - shooter.overall() as f64) / c.turnover_divisor)
    }

    pub fn steal_chance(&self, defender: &Player) -> f64 {
        let c = self.config;
        let iq = RatingCalculator::defensive_iq(&defender.ratings);
        let speed = defender.ratings.get(Attribute::Speed) as f64;
        c.steal_bounds.clamp(
            c.steal_base + (iq - 50.0) / c.steal_iq_divisor + (speed - 50.0) / c.steal_speed_divisor,
        )
    }

    pub fn block_chance(&self, defender: &Player) -> f64 {
        let c = self.config;
        c.block_bounds.clamp(defensive_pressure(defender) / c.block_divisor)
    }

    pub fn free_throw_chance(&self, shooter: &Player) -> f64 {
        let ft = shooter.ratings.get(Attribute::FreeThrow) as f64;
        self.config.free_throw_bounds.clamp(ft / 100.0)
    }

    pub fn shot_chance(&self, shooter: &Player, defender: &Player, shot: ShotType) -> f64 {
        let c = self.config;
        let stat = match shot {
            ShotType::Inside => RatingCalculator::inside_scoring(&shooter.ratings),
            ShotType::MidRange => shooter.ratings.get(Attribute::MidRangeShot) as f64,
            ShotType::ThreePoint => shooter.ratings.get(Attribute::ThreePointShot) as f64,
        };
        let raw = stat / 100.0 - defensive_pressure(defender) / c.shot_defense_divisor;
        c.shot_bounds.get(shot).clamp(raw)
    }

    pub fn offensive_rebound_chance(&self, shooter: &Player, defender: &Player) -> f64 {
        let c = self.config;
        let board = shooter.ratings.get(Attribute::OffensiveRebound) as f64 / c.rebound_divisor;
        let height_diff = (shooter.effective_height_cm() - defender.effective_height_cm()) / c.rebound_height_divisor;
        let height_term = height_diff.clamp(-c.rebound_height_cap, c.rebound_height_cap);
        c.rebound_bounds.clamp(board + shooter.position().rebound_bonus() + height_term)
    }

    /// Resolves the cascade for a chosen shooter, defender and action.
    /// Every counter lands in `stats`; the returned points belong to the
    /// offense.
    pub fn resolve<R: Rng + ?Sized>(
        &self,
        offense: &[Player],
        defense: &[Player],
        shooter_idx: usize,
        defender_idx: usize,
        shot: ShotType,
        stats: &mut StatsTracker,
        rng: &mut R,
    ) -> Result<PossessionOutcome, StatsError> {
        let shooter = &offense[shooter_idx];
        let defender = &defense[defender_idx];
        let mut outcome = PossessionOutcome::default();

        if chance(rng, self.turnover_chance(shooter)) {
            stats.add_turnover(shooter.id)?;
            outcome.events.push(GameEventKind::Turnover { player: shooter.id });
            return Ok(outcome);
        }

        if chance(rng, self.steal_chance(defender)) {
            stats.add_steal(defender.id)?;
            outcome.events.push(GameEventKind::Steal { defender: defender.id, victim: shooter.id });
            return Ok(outcome);
        }

        if chance(rng, self.config.foul_chance) {
            stats.add_foul(defender.id)?;
            let attempts = shot.free_throws_on_foul();
            let p = self.free_throw_chance(shooter);
            let mut made = 0;
            for _ in 0..attempts {
                let hit = chance(rng, p);
                stats.add_free_throw(shooter.id, hit)?;
                if hit {
                    made += 1;
                }
            }
            stats.add_points(shooter.id, made)?;
            outcome.points = made;
            outcome.events.push(GameEventKind::FouledOnShot {
                shooter: shooter.id,
                defender: defender.id,
                shot,
                made,
                attempts,
            });
            return Ok(outcome);
        }

        if shot != ShotType::ThreePoint && chance(rng, self.block_chance(defender)) {
            stats.add_block(defender.id)?;
            outcome.events.push(GameEventKind::Blocked { shooter: shooter.id, defender: defender.id, shot });
            return Ok(outcome);
        }

        if chance(rng, self.shot_chance(shooter, defender, shot)) {
            let points = shot.points();
            stats.add_field_goal(shooter.id, shot, true)?;
            stats.add_points(shooter.id, points)?;

            let assist = if offense.len() > 1 && chance(rng, self.config.assist_chance.get(shot)) {
                let mut idx = rng.gen_range(0..offense.len() - 1);
                if idx >= shooter_idx {
                    idx += 1;
                }
                stats.add_assist(offense[idx].id)?;
                Some(offense[idx].id)
            } else {
                None
            };

            outcome.points = points;
            outcome.events.push(GameEventKind::ShotMade { shooter: shooter.id, shot, points, assist });
            return Ok(outcome);
        }

        stats.add_field_goal(shooter.id, shot, false)?;
        outcome.events.push(GameEventKind::ShotMissed { shooter: shooter.id, shot });

        if chance(rng, self.offensive_rebound_chance(shooter, defender)) {
            stats.add_rebound(shooter.id, true)?;
            outcome.events.push(GameEventKind::Rebound { player: shooter.id, offensive: true });
            return Ok(outcome);
        }

        let frontcourt: Vec<&Player> = defense.iter().filter(|p| p.position().is_frontcourt()).collect();
        let take_frontcourt = chance(rng, self.config.frontcourt_rebound_share);
        let rebounder = if take_frontcourt && !frontcourt.is_empty() {
            frontcourt[rng.gen_range(0..frontcourt.len())]
        } else {
            defender
        };
        stats.add_rebound(rebounder.id, false)?;
        outcome.events.push(GameEventKind::Rebound { player: rebounder.id, offensive: false });

        trace!(shooter = %shooter.name, ?shot, "possession ended on a miss");
        Ok(outcome)
    }
}

/// Defensive IQ plus speed, the defender's pressure on a shot.
fn defensive_pressure(defender: &Player) -> f64 {
    RatingCalculator::defensive_iq(&defender.ratings) + defender.ratings.get(Attribute::Speed) as f64
}
