//! # Simulation Configuration
//!
//! All tuning constants for generation, development and the possession
//! engine, grouped per subsystem. Every struct deserializes with defaults
//! for missing fields, so a JSON file only needs the values it overrides.
//!
//! ```rust
//! use hoops_core::config::SimConfig;
//!
//! let config = SimConfig::default();
//! let fast = SimConfig::high_scoring();
//! assert!(config.validate().is_ok() && fast.validate().is_ok());
//! ```

mod development_config;
mod game_config;
mod generation_config;
mod roster_config;

pub use development_config::DevelopmentConfig;
pub use game_config::{GameConfig, ProbabilityBounds, ShotTable};
pub use generation_config::GenerationConfig;
pub use roster_config::RosterConfig;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SimConfig {
    pub generation: GenerationConfig,
    pub roster: RosterConfig,
    pub development: DevelopmentConfig,
    pub game: GameConfig,
}

impl SimConfig {
    pub fn high_scoring() -> Self {
        Self { game: GameConfig::high_scoring(), ..Self::default() }
    }

    pub fn defensive() -> Self {
        Self { game: GameConfig::defensive(), ..Self::default() }
    }

    pub fn from_json(json: &str) -> crate::error::Result<Self> {
        let cfg: SimConfig = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let g = &self.generation;
        range("generation.group_factor", g.group_factor_min, g.group_factor_max)?;
        non_negative("generation.rating_noise_std", g.rating_noise_std)?;
        non_negative("generation.group_factor_std", g.group_factor_std)?;
        if g.archetype_max_attempts == 0 {
            return Err(ConfigError::InvalidValue {
                field: "generation.archetype_max_attempts",
                reason: "must be at least 1".to_string(),
            });
        }

        let r = &self.roster;
        range("roster.size", r.size_min as f64, r.size_max as f64)?;
        range("roster.guards", r.guards_min as f64, r.guards_max as f64)?;
        range("roster.wings", r.wings_min as f64, r.wings_max as f64)?;
        range("roster.start_age", r.start_age_min as f64, r.start_age_max as f64)?;
        range("roster.final_age", r.final_age_min as f64, r.final_age_max as f64)?;
        probability("roster.big_slot_wing_chance", r.big_slot_wing_chance)?;
        if r.guards_max + r.wings_max > r.size_min {
            return Err(ConfigError::InvalidValue {
                field: "roster.size_min",
                reason: format!(
                    "{} cannot hold {} guards and {} wings",
                    r.size_min, r.guards_max, r.wings_max
                ),
            });
        }

        let d = &self.development;
        probability("development.height_growth_chance", d.height_growth_chance)?;
        probability("development.height_growth_chance_young", d.height_growth_chance_young)?;
        probability("development.potential_decay_cap", d.potential_decay_cap)?;

        let gm = &self.game;
        if gm.quarter_seconds == 0 || gm.possession_block_seconds == 0 {
            return Err(ConfigError::InvalidValue {
                field: "game.quarter_seconds",
                reason: "clock intervals must be positive".to_string(),
            });
        }
        range(
            "game.possession_seconds",
            gm.possession_min_seconds as f64,
            gm.possession_max_seconds as f64,
        )?;
        if gm.possession_min_seconds == 0 {
            return Err(ConfigError::InvalidValue {
                field: "game.possession_min_seconds",
                reason: "possessions must consume time".to_string(),
            });
        }
        if gm.lineup_size < 2 {
            return Err(ConfigError::InvalidValue {
                field: "game.lineup_size",
                reason: "a lineup needs at least two players".to_string(),
            });
        }
        for (field, b) in [
            ("game.turnover_bounds", gm.turnover_bounds),
            ("game.steal_bounds", gm.steal_bounds),
            ("game.free_throw_bounds", gm.free_throw_bounds),
            ("game.block_bounds", gm.block_bounds),
            ("game.rebound_bounds", gm.rebound_bounds),
            ("game.shot_bounds.inside", gm.shot_bounds.inside),
            ("game.shot_bounds.mid_range", gm.shot_bounds.mid_range),
            ("game.shot_bounds.three_point", gm.shot_bounds.three_point),
        ] {
            bounds(field, b)?;
        }
        probability("game.foul_chance", gm.foul_chance)?;
        probability("game.frontcourt_rebound_share", gm.frontcourt_rebound_share)?;
        probability("game.assist_chance.inside", gm.assist_chance.inside)?;
        probability("game.assist_chance.mid_range", gm.assist_chance.mid_range)?;
        probability("game.assist_chance.three_point", gm.assist_chance.three_point)?;

        Ok(())
    }
}

fn range(field: &'static str, min: f64, max: f64) -> Result<(), ConfigError> {
    if min > max {
        Err(ConfigError::InvalidRange { field, min, max })
    } else {
        Ok(())
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value < 0.0 || value.is_nan() {
        Err(ConfigError::InvalidValue { field, reason: format!("{} is negative", value) })
    } else {
        Ok(())
    }
}

fn probability(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidProbability { field, value })
    }
}

fn bounds(field: &'static str, b: ProbabilityBounds) -> Result<(), ConfigError> {
    probability(field, b.min)?;
    probability(field, b.max)?;
    range(field, b.min, b.max)
}
