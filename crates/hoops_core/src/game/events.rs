//! Play-by-play events emitted by the possession engine.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{PlayerId, ShotType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn other(&self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Side::A => write!(f, "Team A"),
            Side::B => write!(f, "Team B"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEventKind {
    QuarterStart { quarter: u8 },
    Turnover { player: PlayerId },
    Steal { defender: PlayerId, victim: PlayerId },
    FouledOnShot { shooter: PlayerId, defender: PlayerId, shot: ShotType, made: u32, attempts: u32 },
    Blocked { shooter: PlayerId, defender: PlayerId, shot: ShotType },
    ShotMade { shooter: PlayerId, shot: ShotType, points: u32, assist: Option<PlayerId> },
    ShotMissed { shooter: PlayerId, shot: ShotType },
    Rebound { player: PlayerId, offensive: bool },
}

/// One play with the clock and score after it resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameEvent {
    pub elapsed: u32,
    pub quarter: u8,
    pub offense: Side,
    pub kind: GameEventKind,
    pub score_a: u32,
    pub score_b: u32,
    /// Human-readable line.
    pub text: String,
}

/// Renders an event kind with player names looked up through `name_of`.
pub fn narrate(kind: &GameEventKind, offense: Side, name_of: &dyn Fn(PlayerId) -> String) -> String {
    match kind {
        GameEventKind::QuarterStart { quarter } => format!("--- Start of Quarter {} ---", quarter),
        GameEventKind::Turnover { player } => format!("{} - {} turns it over", offense, name_of(*player)),
        GameEventKind::Steal { defender, victim } => {
            format!("{} - {} loses the ball, stolen by {}", offense, name_of(*victim), name_of(*defender))
        }
        GameEventKind::FouledOnShot { shooter, defender, shot, made, attempts } => format!(
            "{} - {} fouled by {} on a {}. Free throws: {}/{}",
            offense,
            name_of(*shooter),
            name_of(*defender),
            shot.label(),
            made,
            attempts
        ),
        GameEventKind::Blocked { shooter, defender, shot } => format!(
            "{} - {}'s {} blocked by {}",
            offense,
            name_of(*shooter),
            shot.label(),
            name_of(*defender)
        ),
        GameEventKind::ShotMade { shooter, shot, points, assist } => {
            let base = format!("{} - {} hits a {} for {}", offense, name_of(*shooter), shot.label(), points);
            match assist {
                Some(a) => format!("{} (assist: {})", base, name_of(*a)),
                None => base,
            }
        }
        GameEventKind::ShotMissed { shooter, shot } => {
            format!("{} - {} misses a {}", offense, name_of(*shooter), shot.label())
        }
        GameEventKind::Rebound { player, offensive: true } => {
            format!("{} - offensive rebound by {}", offense, name_of(*player))
        }
        GameEventKind::Rebound { player, offensive: false } => {
            format!("{} - defensive rebound by {}", offense.other(), name_of(*player))
        }
    }
}
