//! Possession engine parameters

use serde::{Deserialize, Serialize};

use crate::models::ShotType;

/// Inclusive probability window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityBounds {
    pub min: f64,
    pub max: f64,
}

impl ProbabilityBounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn clamp(&self, p: f64) -> f64 {
        p.clamp(self.min, self.max)
    }
}

/// Per shot family values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShotTable<T> {
    pub inside: T,
    pub mid_range: T,
    pub three_point: T,
}

impl<T: Copy> ShotTable<T> {
    pub fn get(&self, shot: ShotType) -> T {
        match shot {
            ShotType::Inside => self.inside,
            ShotType::MidRange => self.mid_range,
            ShotType::ThreePoint => self.three_point,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Clock ===
    /// Regulation length in seconds (default: 2880)
    pub game_seconds: u32,
    /// Quarter length in seconds (default: 720)
    pub quarter_seconds: u32,
    /// Offense flips every block of this many elapsed seconds (default: 24)
    pub possession_block_seconds: u32,
    /// Possession length ~ N(15, 4) clamped to [6, 24]
    pub possession_mean_seconds: f64,
    pub possession_std_seconds: f64,
    pub possession_min_seconds: u32,
    pub possession_max_seconds: u32,

    // === Lineups ===
    /// Players per side picked by `setup_teams` (default: 5)
    pub lineup_size: usize,

    // === Shooter selection ===
    /// weight = inside * a + mid * b + three * c (default: 0.4 / 0.3 / 0.3)
    pub shooter_weights: ShotTable<f64>,

    // === Action choice ===
    /// Inside tilt per unit of height factor (default: 0.1)
    pub height_tilt: f64,

    // === Turnover ===
    /// p = base + (50 - overall) / divisor (default: 0.14, 1000)
    pub turnover_base: f64,
    pub turnover_divisor: f64,
    pub turnover_bounds: ProbabilityBounds,

    // === Steal ===
    /// p = base + (def_iq - 50) / iq_div + (speed - 50) / speed_div
    pub steal_base: f64,
    pub steal_iq_divisor: f64,
    pub steal_speed_divisor: f64,
    pub steal_bounds: ProbabilityBounds,

    // === Foul ===
    pub foul_chance: f64,
    pub free_throw_bounds: ProbabilityBounds,

    // === Block ===
    /// p = (def_iq + speed) / divisor (default: 2000)
    pub block_divisor: f64,
    pub block_bounds: ProbabilityBounds,

    // === Shot ===
    /// Defensive pressure: (def_iq + speed) / divisor (default: 5000)
    pub shot_defense_divisor: f64,
    pub shot_bounds: ShotTable<ProbabilityBounds>,
    pub assist_chance: ShotTable<f64>,

    // === Rebound ===
    /// p = off_reb / divisor + position bonus + height term
    pub rebound_divisor: f64,
    pub rebound_height_divisor: f64,
    pub rebound_height_cap: f64,
    pub rebound_bounds: ProbabilityBounds,
    /// Share of defensive boards taken by a frontcourt defender (default: 0.75)
    pub frontcourt_rebound_share: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            game_seconds: 2880,
            quarter_seconds: 720,
            possession_block_seconds: 24,
            possession_mean_seconds: 15.0,
            possession_std_seconds: 4.0,
            possession_min_seconds: 6,
            possession_max_seconds: 24,

            lineup_size: 5,

            shooter_weights: ShotTable { inside: 0.4, mid_range: 0.3, three_point: 0.3 },

            height_tilt: 0.1,

            turnover_base: 0.14,
            turnover_divisor: 1000.0,
            turnover_bounds: ProbabilityBounds::new(0.05, 0.25),

            steal_base: 0.017,
            steal_iq_divisor: 1000.0,
            steal_speed_divisor: 2000.0,
            steal_bounds: ProbabilityBounds::new(0.005, 0.10),

            foul_chance: 0.14,
            free_throw_bounds: ProbabilityBounds::new(0.50, 0.95),

            block_divisor: 2000.0,
            block_bounds: ProbabilityBounds::new(0.02, 0.12),

            shot_defense_divisor: 5000.0,
            shot_bounds: ShotTable {
                inside: ProbabilityBounds::new(0.45, 0.65),
                mid_range: ProbabilityBounds::new(0.33, 0.50),
                three_point: ProbabilityBounds::new(0.28, 0.42),
            },
            assist_chance: ShotTable { inside: 0.60, mid_range: 0.40, three_point: 0.85 },

            rebound_divisor: 150.0,
            rebound_height_divisor: 200.0,
            rebound_height_cap: 0.05,
            rebound_bounds: ProbabilityBounds::new(0.10, 0.50),
            frontcourt_rebound_share: 0.75,
        }
    }
}

impl GameConfig {
    /// Looser shot windows and fewer giveaways.
    pub fn high_scoring() -> Self {
        let mut cfg = Self::default();
        cfg.turnover_base = 0.11;
        cfg.turnover_bounds = ProbabilityBounds::new(0.04, 0.20);
        cfg.shot_bounds = ShotTable {
            inside: ProbabilityBounds::new(0.50, 0.70),
            mid_range: ProbabilityBounds::new(0.38, 0.55),
            three_point: ProbabilityBounds::new(0.33, 0.46),
        };
        cfg.possession_mean_seconds = 13.0;
        cfg
    }

    /// More pressure on the ball and longer possessions.
    pub fn defensive() -> Self {
        let mut cfg = Self::default();
        cfg.turnover_base = 0.16;
        cfg.steal_base = 0.025;
        cfg.block_bounds = ProbabilityBounds::new(0.03, 0.15);
        cfg.shot_defense_divisor = 3500.0;
        cfg.possession_mean_seconds = 17.0;
        cfg
    }
}
