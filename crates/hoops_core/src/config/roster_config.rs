//! Roster and league composition

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    /// Total roster size range (default: 12-15)
    pub size_min: u32,
    pub size_max: u32,
    /// Point archetypes per roster (default: 5-6)
    pub guards_min: u32,
    pub guards_max: u32,
    /// Wing archetypes per roster (default: 4-5)
    pub wings_min: u32,
    pub wings_max: u32,
    /// Chance a remaining big slot is filled by a Wing (default: 0.15)
    pub big_slot_wing_chance: f64,

    /// Age a player is generated at before development (default: 19-22)
    pub start_age_min: u8,
    pub start_age_max: u8,
    /// Age a player is developed toward (default: 19-38)
    pub final_age_min: u8,
    pub final_age_max: u8,

    /// Season the league starts in; development years count back from it
    pub initial_season: i32,
    /// Teams per league (default: 30)
    pub league_size: usize,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            size_min: 12,
            size_max: 15,
            guards_min: 5,
            guards_max: 6,
            wings_min: 4,
            wings_max: 5,
            big_slot_wing_chance: 0.15,

            start_age_min: 19,
            start_age_max: 22,
            final_age_min: 19,
            final_age_max: 38,

            initial_season: 2025,
            league_size: 30,
        }
    }
}
