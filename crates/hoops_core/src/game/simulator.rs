//! Full-game driver around the possession engine.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::clock::GameClock;
use super::events::{narrate, GameEvent, GameEventKind, Side};
use super::possession::PossessionEngine;
use super::stats::StatsTracker;
use crate::config::SimConfig;
use crate::error::GameError;
use crate::league::TeamRosterGenerator;
use crate::models::{BoxScoreLine, Player, PlayerId, PlayerStats, Team};
use crate::player::DefaultLabels;

/// Smallest lineup the engine can run: a shooter plus an assist candidate.
pub const MIN_LINEUP: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameScore {
    pub team_a: u32,
    pub team_b: u32,
}

impl GameScore {
    pub fn winner(&self) -> Option<Side> {
        match self.team_a.cmp(&self.team_b) {
            std::cmp::Ordering::Greater => Some(Side::A),
            std::cmp::Ordering::Less => Some(Side::B),
            std::cmp::Ordering::Equal => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameResult {
    pub score: GameScore,
    pub elapsed: u32,
    pub quarters: u8,
    pub possessions: u32,
    pub box_a: Vec<BoxScoreLine>,
    pub box_b: Vec<BoxScoreLine>,
    pub totals_a: PlayerStats,
    pub totals_b: PlayerStats,
    /// Empty unless the game ran in verbose mode.
    pub events: Vec<GameEvent>,
}

/// Aggregate over several games between the same lineups.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub games: u32,
    pub wins_a: u32,
    pub wins_b: u32,
    pub ties: u32,
    pub points_a: u64,
    pub points_b: u64,
    pub scores: Vec<GameScore>,
}

impl SeriesSummary {
    pub fn record(&mut self, score: GameScore) {
        self.games += 1;
        self.points_a += score.team_a as u64;
        self.points_b += score.team_b as u64;
        match score.winner() {
            Some(Side::A) => self.wins_a += 1,
            Some(Side::B) => self.wins_b += 1,
            None => self.ties += 1,
        }
        self.scores.push(score);
    }

    pub fn average_a(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.points_a as f64 / self.games as f64
        }
    }

    pub fn average_b(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.points_b as f64 / self.games as f64
        }
    }
}

pub struct GameSimulator {
    config: SimConfig,
    rosters: Option<(Team, Team)>,
    team_a: Vec<Player>,
    team_b: Vec<Player>,
    stats: StatsTracker,
    clock: GameClock,
    score_a: u32,
    score_b: u32,
}

impl GameSimulator {
    /// Rejects configs whose windows would make the engine clamp with
    /// `min > max` mid-game.
    pub fn new(config: SimConfig) -> Result<Self, GameError> {
        config.validate()?;
        let clock = GameClock::new(&config.game);
        Ok(Self {
            config,
            rosters: None,
            team_a: Vec::new(),
            team_b: Vec::new(),
            stats: StatsTracker::new(),
            clock,
            score_a: 0,
            score_b: 0,
        })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Generates two full rosters and puts the best `lineup_size` players of
    /// each on the floor.
    pub fn setup_teams<R: Rng>(&mut self, rng: &mut R) -> Result<(), GameError> {
        let generator = TeamRosterGenerator::new(&self.config, &DefaultLabels);
        let team_a = Team::new("Team A", generator.generate_roster("Team A", rng));
        let team_b = Team::new("Team B", generator.generate_roster("Team B", rng));

        let size = self.config.game.lineup_size;
        let (lineup_a, lineup_b) = (team_a.starters(size), team_b.starters(size));
        self.rosters = Some((team_a, team_b));
        self.set_lineups(lineup_a, lineup_b)
    }

    /// Puts caller-chosen players on the floor.
    pub fn set_lineups(&mut self, team_a: Vec<Player>, team_b: Vec<Player>) -> Result<(), GameError> {
        for lineup in [&team_a, &team_b] {
            if lineup.len() < MIN_LINEUP {
                return Err(GameError::LineupTooSmall { expected: MIN_LINEUP, found: lineup.len() });
            }
        }
        self.team_a = team_a;
        self.team_b = team_b;
        self.reset_for_simulation();
        Ok(())
    }

    /// Zeroes the scores and re-registers the current lineups with fresh
    /// counters. Lineups are kept.
    pub fn reset_for_simulation(&mut self) {
        self.score_a = 0;
        self.score_b = 0;
        self.clock.reset();
        self.stats.initialize(&self.team_a, &self.team_b);
    }

    pub fn lineups(&self) -> (&[Player], &[Player]) {
        (&self.team_a, &self.team_b)
    }

    /// Full rosters from the last `setup_teams` call.
    pub fn rosters(&self) -> Option<&(Team, Team)> {
        self.rosters.as_ref()
    }

    pub fn stats(&self) -> &StatsTracker {
        &self.stats
    }

    pub fn score(&self) -> GameScore {
        GameScore { team_a: self.score_a, team_b: self.score_b }
    }

    /// Plays regulation. The possession that crosses the final buzzer is
    /// still resolved, so the clock stops within one possession of the end.
    pub fn simulate<R: Rng>(&mut self, verbose: bool, rng: &mut R) -> Result<GameResult, GameError> {
        if self.team_a.is_empty() || self.team_b.is_empty() {
            return Err(GameError::TeamsNotReady);
        }

        self.clock.reset();
        let engine = PossessionEngine::new(&self.config.game);
        let mut events = Vec::new();
        let mut possessions = 0u32;

        while !self.clock.is_over() {
            let side = if self.clock.team_a_has_ball() { Side::A } else { Side::B };
            let (offense, defense) = match side {
                Side::A => (&self.team_a, &self.team_b),
                Side::B => (&self.team_b, &self.team_a),
            };

            let shooter = engine.pick_shooter(offense, rng);
            let defender = engine.pick_defender(&offense[shooter], defense, rng);

            let seconds = engine.possession_seconds(rng);
            if let Some(quarter) = self.clock.advance(seconds) {
                if verbose {
                    let kind = GameEventKind::QuarterStart { quarter };
                    events.push(self.event(side, kind));
                }
            }

            let shot = engine.choose_action(&offense[shooter], rng);
            let outcome = engine.resolve(offense, defense, shooter, defender, shot, &mut self.stats, rng)?;
            possessions += 1;

            match side {
                Side::A => self.score_a += outcome.points,
                Side::B => self.score_b += outcome.points,
            }

            if verbose {
                for kind in outcome.events {
                    events.push(self.event(side, kind));
                }
            }
        }

        let result = GameResult {
            score: self.score(),
            elapsed: self.clock.elapsed,
            quarters: self.clock.quarter,
            possessions,
            box_a: self.stats.lines(&self.team_a)?,
            box_b: self.stats.lines(&self.team_b)?,
            totals_a: self.stats.team_totals(&self.team_a)?,
            totals_b: self.stats.team_totals(&self.team_b)?,
            events,
        };

        info!(
            score_a = result.score.team_a,
            score_b = result.score.team_b,
            possessions,
            elapsed = result.elapsed,
            "game finished"
        );
        Ok(result)
    }

    /// Resets and plays `games` games between the current lineups.
    pub fn simulate_series<R: Rng>(&mut self, games: u32, rng: &mut R) -> Result<SeriesSummary, GameError> {
        let mut summary = SeriesSummary::default();
        for game in 0..games {
            self.reset_for_simulation();
            let result = self.simulate(false, rng)?;
            debug!(game, a = result.score.team_a, b = result.score.team_b, "series game");
            summary.record(result.score);
        }
        Ok(summary)
    }

    fn event(&self, offense: Side, kind: GameEventKind) -> GameEvent {
        let name_of = |id: PlayerId| self.name_of(id);
        let text = format!("[{}] {}", self.clock.label(), narrate(&kind, offense, &name_of));
        GameEvent {
            elapsed: self.clock.elapsed,
            quarter: self.clock.quarter,
            offense,
            kind,
            score_a: self.score_a,
            score_b: self.score_b,
            text,
        }
    }

    fn name_of(&self, id: PlayerId) -> String {
        self.team_a
            .iter()
            .chain(&self.team_b)
            .find(|p| p.id == id)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| id.to_string())
    }
}
