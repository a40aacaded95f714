//! Whole-league generation
//!
//! Teams are independent, so they are built in parallel. Each team gets its
//! own generator seeded from the master source before the parallel section,
//! which keeps the league identical for a given seed on any thread count.

use rand::Rng;
use rayon::prelude::*;
use tracing::info;

use super::TeamRosterGenerator;
use crate::config::SimConfig;
use crate::models::Team;
use crate::player::LabelSource;
use crate::sampling::streams::split_streams;

pub struct LeagueGenerator<'a> {
    config: &'a SimConfig,
    labels: &'a dyn LabelSource,
}

impl<'a> LeagueGenerator<'a> {
    pub fn new(config: &'a SimConfig, labels: &'a dyn LabelSource) -> Self {
        Self { config, labels }
    }

    /// Generates `config.roster.league_size` teams with placeholder names.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<Team> {
        let names: Vec<String> =
            (1..=self.config.roster.league_size).map(|i| format!("Team {:02}", i)).collect();
        self.generate_named(&names, rng)
    }

    /// One team per name, in the given order.
    pub fn generate_named<R: Rng>(&self, names: &[String], rng: &mut R) -> Vec<Team> {
        let streams = split_streams(rng, names.len());
        let rosters = TeamRosterGenerator::new(self.config, self.labels);

        let teams: Vec<Team> = names
            .par_iter()
            .zip(streams.into_par_iter())
            .map(|(name, mut stream)| Team::new(name.clone(), rosters.generate_roster(name, &mut stream)))
            .collect();

        info!(teams = teams.len(), "league generated");
        teams
    }
}
