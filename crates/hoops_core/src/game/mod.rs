//! In-game simulation: clock, possession cascade and box scores.

pub mod clock;
pub mod events;
pub mod possession;
pub mod simulator;
pub mod stats;

#[cfg(test)]
mod tests;

pub use clock::GameClock;
pub use events::{GameEvent, GameEventKind, Side};
pub use possession::{PossessionEngine, PossessionOutcome};
pub use simulator::{GameResult, GameScore, GameSimulator, SeriesSummary, MIN_LINEUP};
pub use stats::StatsTracker;
