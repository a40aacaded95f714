//! Per-game box score aggregation keyed by player identity.

use std::collections::HashMap;

use crate::error::StatsError;
use crate::models::{BoxScoreLine, Player, PlayerId, PlayerStats, ShotType};

type StatsResult = Result<(), StatsError>;

/// Mutable counters for every player registered for the current game.
///
/// Every `add_*` is a single map lookup and fails with
/// [`StatsError::UnregisteredPlayer`] for unknown players.
#[derive(Debug, Default, Clone)]
pub struct StatsTracker {
    stats: HashMap<PlayerId, PlayerStats>,
}

impl StatsTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops every entry and registers both rosters with zeroed counters.
    pub fn initialize(&mut self, team_a: &[Player], team_b: &[Player]) {
        self.stats.clear();
        for player in team_a.iter().chain(team_b) {
            self.stats.insert(player.id, PlayerStats::default());
        }
    }

    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    pub fn contains(&self, id: PlayerId) -> bool {
        self.stats.contains_key(&id)
    }

    pub fn get(&self, id: PlayerId) -> Result<&PlayerStats, StatsError> {
        self.stats.get(&id).ok_or(StatsError::UnregisteredPlayer(id))
    }

    fn entry(&mut self, id: PlayerId) -> Result<&mut PlayerStats, StatsError> {
        self.stats.get_mut(&id).ok_or(StatsError::UnregisteredPlayer(id))
    }

    pub fn add_points(&mut self, id: PlayerId, points: u32) -> StatsResult {
        self.entry(id)?.points += points;
        Ok(())
    }

    pub fn add_field_goal(&mut self, id: PlayerId, shot: ShotType, made: bool) -> StatsResult {
        self.entry(id)?.record_attempt(shot, made);
        Ok(())
    }

    pub fn add_free_throw(&mut self, id: PlayerId, made: bool) -> StatsResult {
        let s = self.entry(id)?;
        s.free_throws_attempted += 1;
        if made {
            s.free_throws_made += 1;
        }
        Ok(())
    }

    pub fn add_assist(&mut self, id: PlayerId) -> StatsResult {
        self.entry(id)?.assists += 1;
        Ok(())
    }

    pub fn add_rebound(&mut self, id: PlayerId, offensive: bool) -> StatsResult {
        let s = self.entry(id)?;
        if offensive {
            s.offensive_rebounds += 1;
        } else {
            s.defensive_rebounds += 1;
        }
        Ok(())
    }

    pub fn add_block(&mut self, id: PlayerId) -> StatsResult {
        self.entry(id)?.blocks += 1;
        Ok(())
    }

    pub fn add_steal(&mut self, id: PlayerId) -> StatsResult {
        self.entry(id)?.steals += 1;
        Ok(())
    }

    pub fn add_turnover(&mut self, id: PlayerId) -> StatsResult {
        self.entry(id)?.turnovers += 1;
        Ok(())
    }

    pub fn add_foul(&mut self, id: PlayerId) -> StatsResult {
        self.entry(id)?.fouls += 1;
        Ok(())
    }

    /// Box score lines for `players`, in roster order.
    pub fn lines(&self, players: &[Player]) -> Result<Vec<BoxScoreLine>, StatsError> {
        players
            .iter()
            .map(|p| {
                Ok(BoxScoreLine { player_id: p.id, name: p.name.clone(), stats: *self.get(p.id)? })
            })
            .collect()
    }

    /// Sums the lines of `players`.
    pub fn team_totals(&self, players: &[Player]) -> Result<PlayerStats, StatsError> {
        let mut total = PlayerStats::default();
        for p in players {
            total.accumulate(self.get(p.id)?);
        }
        Ok(total)
    }
}
