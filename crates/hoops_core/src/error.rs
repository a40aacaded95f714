use thiserror::Error;

use crate::models::PlayerId;

/// Box score lookups against a player that was never registered.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    #[error("player {0} is not registered with the stats tracker")]
    UnregisteredPlayer(PlayerId),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("invalid range for {field}: {min} > {max}")]
    InvalidRange { field: &'static str, min: f64, max: f64 },

    #[error("probability out of [0, 1] for {field}: {value}")]
    InvalidProbability { field: &'static str, value: f64 },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

#[derive(Error, Debug)]
pub enum GameError {
    #[error("teams have not been set up")]
    TeamsNotReady,

    #[error("lineup too small: expected at least {expected}, found {found}")]
    LineupTooSmall { expected: usize, found: usize },

    #[error(transparent)]
    Stats(#[from] StatsError),

    #[error("invalid game config: {0}")]
    Config(#[from] ConfigError),
}

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Game error: {0}")]
    Game(#[from] GameError),

    #[error("Stats error: {0}")]
    Stats(#[from] StatsError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;
