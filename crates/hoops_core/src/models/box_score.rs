use serde::{Deserialize, Serialize};

use super::PlayerId;

/// Shot family chosen for a possession.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShotType {
    Inside,
    MidRange,
    ThreePoint,
}

impl ShotType {
    pub const ALL: [ShotType; 3] = [ShotType::Inside, ShotType::MidRange, ShotType::ThreePoint];

    pub fn points(&self) -> u32 {
        match self {
            ShotType::ThreePoint => 3,
            _ => 2,
        }
    }

    pub fn free_throws_on_foul(&self) -> u32 {
        match self {
            ShotType::ThreePoint => 3,
            _ => 2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ShotType::Inside => "inside shot",
            ShotType::MidRange => "mid-range jumper",
            ShotType::ThreePoint => "three-pointer",
        }
    }
}

/// Per-player counters for one game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub points: u32,
    pub inside_made: u32,
    pub inside_attempted: u32,
    pub mid_made: u32,
    pub mid_attempted: u32,
    pub three_made: u32,
    pub three_attempted: u32,
    pub free_throws_made: u32,
    pub free_throws_attempted: u32,
    pub assists: u32,
    pub offensive_rebounds: u32,
    pub defensive_rebounds: u32,
    pub blocks: u32,
    pub steals: u32,
    pub turnovers: u32,
    pub fouls: u32,
}

impl PlayerStats {
    pub fn field_goals_made(&self) -> u32 {
        self.inside_made + self.mid_made + self.three_made
    }

    pub fn field_goals_attempted(&self) -> u32 {
        self.inside_attempted + self.mid_attempted + self.three_attempted
    }

    pub fn two_made(&self) -> u32 {
        self.field_goals_made() - self.three_made
    }

    pub fn rebounds(&self) -> u32 {
        self.offensive_rebounds + self.defensive_rebounds
    }

    pub fn field_goal_pct(&self) -> f64 {
        pct(self.field_goals_made(), self.field_goals_attempted())
    }

    pub fn is_empty(&self) -> bool {
        *self == PlayerStats::default()
    }

    pub(crate) fn record_attempt(&mut self, shot: ShotType, made: bool) {
        let (m, a) = match shot {
            ShotType::Inside => (&mut self.inside_made, &mut self.inside_attempted),
            ShotType::MidRange => (&mut self.mid_made, &mut self.mid_attempted),
            ShotType::ThreePoint => (&mut self.three_made, &mut self.three_attempted),
        };
        *a += 1;
        if made {
            *m += 1;
        }
    }

    pub fn accumulate(&mut self, other: &PlayerStats) {
        self.points += other.points;
        self.inside_made += other.inside_made;
        self.inside_attempted += other.inside_attempted;
        self.mid_made += other.mid_made;
        self.mid_attempted += other.mid_attempted;
        self.three_made += other.three_made;
        self.three_attempted += other.three_attempted;
        self.free_throws_made += other.free_throws_made;
        self.free_throws_attempted += other.free_throws_attempted;
        self.assists += other.assists;
        self.offensive_rebounds += other.offensive_rebounds;
        self.defensive_rebounds += other.defensive_rebounds;
        self.blocks += other.blocks;
        self.steals += other.steals;
        self.turnovers += other.turnovers;
        self.fouls += other.fouls;
    }
}

/// Box score line keyed by player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxScoreLine {
    pub player_id: PlayerId,
    pub name: String,
    pub stats: PlayerStats,
}

pub fn pct(made: u32, attempted: u32) -> f64 {
    if attempted == 0 {
        0.0
    } else {
        made as f64 / attempted as f64
    }
}
