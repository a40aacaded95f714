//! Player generation parameters

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    // === Ratings ===
    /// Gaussian noise around each baseline (default: 3.0)
    pub rating_noise_std: f64,
    /// Group factor distribution (default: N(1.0, 0.2) clamped to [0.5, 1.3])
    pub group_factor_mean: f64,
    pub group_factor_std: f64,
    pub group_factor_min: f64,
    pub group_factor_max: f64,

    // === Body ===
    /// Extra inches added after the uniform jitter (default: [-1, 1])
    pub wingspan_jitter_inches: i32,
    /// weight_lb = strength * k + height_rating + base + jitter
    pub weight_strength_coef: f64,
    pub weight_base_lb: f64,
    pub weight_jitter_lb: i32,

    // === Potential at creation ===
    /// Age from which Potential equals Overall (default: 29)
    pub potential_veteran_age: u8,
    pub potential_intercept: f64,
    pub potential_age_coef: f64,
    pub potential_overall_coef: f64,
    pub potential_noise_std: f64,

    // === Archetype filter ===
    /// Re-rolls before the filter archetype is assigned directly (default: 1000)
    pub archetype_max_attempts: u32,

    // === First snapshot ===
    pub initial_season: i32,
    pub initial_team: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            rating_noise_std: 3.0,
            group_factor_mean: 1.0,
            group_factor_std: 0.2,
            group_factor_min: 0.5,
            group_factor_max: 1.3,

            wingspan_jitter_inches: 1,
            weight_strength_coef: 0.5,
            weight_base_lb: 155.0,
            weight_jitter_lb: 20,

            potential_veteran_age: 29,
            potential_intercept: 72.0,
            potential_age_coef: 2.3,
            potential_overall_coef: 0.8,
            potential_noise_std: 3.0,

            archetype_max_attempts: 1000,

            initial_season: 2025,
            initial_team: "Unassigned".to_string(),
        }
    }
}
