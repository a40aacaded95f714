//! Roster and league generation

#[allow(clippy::module_inception)]
pub mod league;
pub mod roster;

pub use league::LeagueGenerator;
pub use roster::{RosterPlan, TeamRosterGenerator};
