//! Season-over-season development parameters
//!
//! Age tables live in `development::age_curves`; the knobs here scale them.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DevelopmentConfig {
    // === Height growth ===
    /// Last age with any growth chance (default: 21)
    pub height_growth_max_age: u8,
    /// Ages at or below this use the higher chance (default: 20)
    pub height_growth_young_age: u8,
    /// Growth chance per season (default: 0.001)
    pub height_growth_chance: f64,
    /// Growth chance for the younger band (default: 0.01)
    pub height_growth_chance_young: f64,

    // === Potential pull ===
    /// bonus mean = (Potential - Overall) * scale (default: 0.1)
    pub potential_bonus_scale: f64,
    pub potential_bonus_std: f64,
    /// Last age that receives the bonus (default: 30)
    pub potential_bonus_max_age: u8,

    // === Scaling ===
    /// Change is scaled by U[min, min + 1) (default: 0.4)
    pub change_scale_min: f64,

    // === Potential drift ===
    /// Ages below this drift by +-jitter (default: 29, 2)
    pub potential_jitter_below_age: u8,
    pub potential_jitter: i32,
    /// Ages above this decay the gap to Overall (default: 34)
    pub potential_decay_after_age: u8,
    pub potential_decay_per_year: f64,
    pub potential_decay_cap: f64,
}

impl Default for DevelopmentConfig {
    fn default() -> Self {
        Self {
            height_growth_max_age: 21,
            height_growth_young_age: 20,
            height_growth_chance: 0.001,
            height_growth_chance_young: 0.01,

            potential_bonus_scale: 0.1,
            potential_bonus_std: 1.0,
            potential_bonus_max_age: 30,

            change_scale_min: 0.4,

            potential_jitter_below_age: 29,
            potential_jitter: 2,
            potential_decay_after_age: 34,
            potential_decay_per_year: 0.1,
            potential_decay_cap: 0.5,
        }
    }
}
