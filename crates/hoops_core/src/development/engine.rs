//! One development season for a player.

use rand::Rng;
use tracing::debug;

use super::age_curves::{
    attribute_modifier, base_change, base_noise, change_window, intangibles_modifier,
    INTANGIBLES_WINDOW,
};
use crate::config::DevelopmentConfig;
use crate::models::{Attribute, Player};
use crate::sampling::{gaussian, int_inclusive, unit};

/// Summary of what one season did to a player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeasonReport {
    pub age_before: u8,
    pub overall_before: u8,
    pub overall_after: u8,
    pub potential_after: u8,
    pub grew_taller: bool,
}

pub struct DevelopmentEngine<'a> {
    config: &'a DevelopmentConfig,
}

impl<'a> DevelopmentEngine<'a> {
    pub fn new(config: &'a DevelopmentConfig) -> Self {
        Self { config }
    }

    /// Advances `player` by one season and appends a history snapshot
    /// tagged with `season_year` and `team`.
    pub fn develop_season<R: Rng + ?Sized>(
        &self,
        player: &mut Player,
        season_year: i32,
        team: &str,
        rng: &mut R,
    ) -> SeasonReport {
        let cfg = self.config;
        let age = player.age;
        let overall_before = player.overall();

        let grew_taller = self.try_grow(player, rng);

        let base = base_change(age) + base_noise(age, rng);
        let bonus_mean = if age <= cfg.potential_bonus_max_age {
            (player.potential as f64 - overall_before as f64) * cfg.potential_bonus_scale
        } else {
            0.0
        };

        for attr in Attribute::ALL {
            if attr == Attribute::HeightRating {
                continue;
            }
            let raw = base + attribute_modifier(attr, age) + self.bonus(age, bonus_mean, rng);
            let change = self.bounded_change(raw, change_window(attr), rng);
            let current = player.ratings.get(attr);
            player.ratings.set(attr, apply_change(current, change));
        }

        let raw = base + intangibles_modifier(age) + self.bonus(age, bonus_mean, rng);
        let change = self.bounded_change(raw, INTANGIBLES_WINDOW, rng);
        player.ratings.intangibles = apply_change(player.ratings.intangibles, change);

        self.adjust_potential(player, rng);
        player.reconcile_potential();

        player.age = age.saturating_add(1);
        player.record_snapshot(season_year, team);

        let report = SeasonReport {
            age_before: age,
            overall_before,
            overall_after: player.overall(),
            potential_after: player.potential,
            grew_taller,
        };
        debug!(
            player = %player.name,
            age,
            season_year,
            overall_before,
            overall_after = report.overall_after,
            potential = report.potential_after,
            "developed season"
        );
        report
    }

    /// Runs seasons until the player reaches `target_age`. Seasons are
    /// numbered upward from `first_season`.
    pub fn develop_to_age<R: Rng + ?Sized>(
        &self,
        player: &mut Player,
        target_age: u8,
        first_season: i32,
        team: &str,
        rng: &mut R,
    ) -> Vec<SeasonReport> {
        let mut reports = Vec::new();
        let mut season = first_season;
        while player.age < target_age {
            reports.push(self.develop_season(player, season, team, rng));
            season += 1;
        }
        reports
    }

    /// Late growth spurt. Rolls 1..=1000 and needs to clear the threshold for
    /// the player's age band.
    fn try_grow<R: Rng + ?Sized>(&self, player: &mut Player, rng: &mut R) -> bool {
        let cfg = self.config;
        let height = player.height_rating();
        if player.age > cfg.height_growth_max_age || height >= 100 {
            return false;
        }

        let chance = if player.age <= cfg.height_growth_young_age {
            cfg.height_growth_chance_young
        } else {
            cfg.height_growth_chance
        };
        let threshold = 1000 - (chance * 1000.0).round() as i32;
        let roll = int_inclusive(rng, 1, 1000);
        if roll > threshold {
            player.ratings.set(Attribute::HeightRating, height + 1);
            true
        } else {
            false
        }
    }

    fn bonus<R: Rng + ?Sized>(&self, age: u8, bonus_mean: f64, rng: &mut R) -> f64 {
        if age <= self.config.potential_bonus_max_age {
            gaussian(rng, bonus_mean, self.config.potential_bonus_std)
        } else {
            0.0
        }
    }

    fn bounded_change<R: Rng + ?Sized>(&self, raw: f64, window: (f64, f64), rng: &mut R) -> f64 {
        let scaled = raw * (self.config.change_scale_min + unit(rng));
        scaled.clamp(window.0, window.1)
    }

    fn adjust_potential<R: Rng + ?Sized>(&self, player: &mut Player, rng: &mut R) {
        let cfg = self.config;
        let age = player.age;
        let overall = player.overall() as i32;
        let potential = player.potential as i32;

        let adjusted = if age < cfg.potential_jitter_below_age {
            potential + int_inclusive(rng, -cfg.potential_jitter, cfg.potential_jitter)
        } else if age > cfg.potential_decay_after_age && potential > overall {
            let years = (age - cfg.potential_decay_after_age) as f64;
            let decay = (years * cfg.potential_decay_per_year).min(cfg.potential_decay_cap);
            overall + ((potential - overall) as f64 * (1.0 - decay)).round() as i32
        } else {
            potential
        };

        player.potential = adjusted.clamp(0, 100) as u8;
    }
}

fn apply_change(current: u8, change: f64) -> u8 {
    (current as f64 + change).round().clamp(0.0, 100.0) as u8
}
