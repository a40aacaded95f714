//! # hoops_core - Deterministic Basketball League Simulation Engine
//!
//! Generates players with plausible bodies and skills, ages them season by
//! season, and plays full games as a sequence of probabilistic possessions
//! that fill per-player box scores.
//!
//! ## Features
//! - 100% deterministic simulation (same seed = same league, same games)
//! - Archetype-driven player generation from an empirical height distribution
//! - Age-curve development with Potential converging on Overall
//! - Possession cascade with turnovers, steals, fouls, blocks and rebounds
//! - JSON-serializable players, rosters and game results

// Config structs are filled field by field in presets
#![allow(clippy::field_reassign_with_default)]
// Possession resolution needs both lineups, both indices and the tracker
#![allow(clippy::too_many_arguments)]

pub mod config;
pub mod development;
pub mod error;
pub mod game;
pub mod league;
pub mod models;
pub mod player;
pub mod sampling;

pub use config::SimConfig;
pub use development::{DevelopmentEngine, SeasonReport};
pub use error::{ConfigError, CoreError, GameError, Result, StatsError};
pub use game::{GameResult, GameScore, GameSimulator, SeriesSummary, StatsTracker};
pub use league::{LeagueGenerator, TeamRosterGenerator};
pub use models::{
    Archetype, Attribute, Player, PlayerId, PlayerRatingHistory, PlayerStats, Position,
    RatingGroup, RatingPresets, Team,
};
pub use player::{DefaultLabels, LabelSource, PlayerGenerator};
