use serde::{Deserialize, Serialize};

use super::{Attribute, Player};
use crate::player::RatingCalculator;

pub const MIN_ROSTER_SIZE: usize = 12;
pub const MAX_ROSTER_SIZE: usize = 15;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub players: Vec<Player>, // 12-15 players
}

/// Roster-wide rating means, as printed before a game.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TeamAverages {
    pub overall: f64,
    pub three: f64,
    pub mid: f64,
    pub inside: f64,
}

impl Team {
    pub fn new(name: impl Into<String>, players: Vec<Player>) -> Self {
        Self { name: name.into(), players }
    }

    pub fn validate(&self) -> Result<(), String> {
        let n = self.players.len();
        if !(MIN_ROSTER_SIZE..=MAX_ROSTER_SIZE).contains(&n) {
            return Err(format!(
                "Team {} has {} players, expected {}-{}",
                self.name, n, MIN_ROSTER_SIZE, MAX_ROSTER_SIZE
            ));
        }

        let mut ids: Vec<_> = self.players.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        if ids.len() != n {
            return Err(format!("Team {} has duplicate players", self.name));
        }

        Ok(())
    }

    /// The `count` best players by Overall; ties keep roster order.
    pub fn starters(&self, count: usize) -> Vec<Player> {
        let mut ranked: Vec<&Player> = self.players.iter().collect();
        ranked.sort_by(|a, b| b.overall().cmp(&a.overall()));
        ranked.into_iter().take(count).cloned().collect()
    }

    pub fn averages(&self) -> TeamAverages {
        averages_of(&self.players)
    }
}

pub fn averages_of(players: &[Player]) -> TeamAverages {
    if players.is_empty() {
        return TeamAverages { overall: 0.0, three: 0.0, mid: 0.0, inside: 0.0 };
    }
    let n = players.len() as f64;
    let mean = |f: &dyn Fn(&Player) -> f64| players.iter().map(f).sum::<f64>() / n;
    TeamAverages {
        overall: mean(&|p| p.overall() as f64),
        three: mean(&|p| p.ratings.get(Attribute::ThreePointShot) as f64),
        mid: mean(&|p| p.ratings.get(Attribute::MidRangeShot) as f64),
        inside: mean(&|p| RatingCalculator::inside_scoring(&p.ratings)),
    }
}

/// Naive pre-game line: 110 each, shifted by 1.5 points per Overall point of
/// difference.
pub fn predict_score(avg_a: f64, avg_b: f64) -> (i32, i32) {
    let margin = ((avg_a - avg_b) * 1.5).round() as i32;
    (110 + margin, 110 - margin)
}
