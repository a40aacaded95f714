//! Team rosters with positional quotas and developed careers.

use rand::Rng;
use tracing::{debug, info};

use crate::config::SimConfig;
use crate::development::DevelopmentEngine;
use crate::models::{Archetype, Player};
use crate::player::{LabelSource, PlayerGenerator};
use crate::sampling::{chance, int_inclusive};

/// Archetype counts drawn for one roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterPlan {
    pub total: u32,
    pub guards: u32,
    pub wings: u32,
    pub bigs: u32,
}

pub struct TeamRosterGenerator<'a> {
    config: &'a SimConfig,
    labels: &'a dyn LabelSource,
}

impl<'a> TeamRosterGenerator<'a> {
    pub fn new(config: &'a SimConfig, labels: &'a dyn LabelSource) -> Self {
        Self { config, labels }
    }

    pub fn plan<R: Rng>(&self, rng: &mut R) -> RosterPlan {
        let r = &self.config.roster;
        let total = int_inclusive(rng, r.size_min as i32, r.size_max as i32) as u32;
        let guards = int_inclusive(rng, r.guards_min as i32, r.guards_max as i32) as u32;
        let wings = int_inclusive(rng, r.wings_min as i32, r.wings_max as i32) as u32;
        let bigs = total.saturating_sub(guards + wings);
        RosterPlan { total: guards + wings + bigs, guards, wings, bigs }
    }

    /// Builds a full roster. Each player is generated young and developed
    /// season by season up to an age drawn for them, ending in the
    /// configured initial season.
    pub fn generate_roster<R: Rng>(&self, team: &str, rng: &mut R) -> Vec<Player> {
        let plan = self.plan(rng);
        let mut archetypes = Vec::with_capacity(plan.total as usize);
        archetypes.extend(std::iter::repeat(Archetype::Point).take(plan.guards as usize));
        archetypes.extend(std::iter::repeat(Archetype::Wing).take(plan.wings as usize));
        for _ in 0..plan.bigs {
            let archetype = if chance(rng, self.config.roster.big_slot_wing_chance) {
                Archetype::Wing
            } else {
                Archetype::Big
            };
            archetypes.push(archetype);
        }

        let players: Vec<Player> =
            archetypes.into_iter().map(|archetype| self.career_player(team, archetype, rng)).collect();

        info!(team, players = players.len(), guards = plan.guards, wings = plan.wings, "roster generated");
        players
    }

    fn career_player<R: Rng>(&self, team: &str, archetype: Archetype, rng: &mut R) -> Player {
        let r = &self.config.roster;
        let final_age = int_inclusive(rng, r.final_age_min as i32, r.final_age_max as i32) as u8;
        let start_age = int_inclusive(rng, r.start_age_min as i32, r.start_age_max as i32) as u8;
        let generation_age = start_age.min(final_age);

        let years = (final_age - generation_age) as i32;
        let draft_year = r.initial_season - years;

        let generator = PlayerGenerator::new(&self.config.generation, self.labels);
        let mut player = generator.generate_for(generation_age, Some(archetype), draft_year, team, rng);

        let engine = DevelopmentEngine::new(&self.config.development);
        engine.develop_to_age(&mut player, final_age, draft_year + 1, team, rng);

        debug!(team, player = %player.name, draft_year, years, "career developed");
        player
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Team, MAX_ROSTER_SIZE, MIN_ROSTER_SIZE};
    use crate::player::DefaultLabels;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_roster_sizes_and_quotas() {
        let config = SimConfig::default();
        let generator = TeamRosterGenerator::new(&config, &DefaultLabels);
        let mut rng = ChaCha8Rng::seed_from_u64(21);

        for i in 0..20 {
            let plan = generator.plan(&mut rng);
            assert!((12..=15).contains(&plan.total), "plan {:?}", plan);
            assert!((5..=6).contains(&plan.guards));
            assert!((4..=5).contains(&plan.wings));
            assert_eq!(plan.guards + plan.wings + plan.bigs, plan.total);

            let roster = generator.generate_roster(&format!("Team {}", i), &mut rng);
            assert!((MIN_ROSTER_SIZE..=MAX_ROSTER_SIZE).contains(&roster.len()));
            let points = roster.iter().filter(|p| p.archetype == Archetype::Point).count();
            assert!((5..=6).contains(&points), "{} point archetypes", points);

            let team = Team::new(format!("Team {}", i), roster);
            assert!(team.validate().is_ok());
        }
    }

    #[test]
    fn test_careers_end_in_initial_season() {
        let config = SimConfig::default();
        let generator = TeamRosterGenerator::new(&config, &DefaultLabels);
        let mut rng = ChaCha8Rng::seed_from_u64(22);

        for player in generator.generate_roster("Harbor City", &mut rng) {
            assert!((19..=38).contains(&player.age), "age {}", player.age);
            let history = player.history();
            assert_eq!(history.last().unwrap().season_year, 2025);
            assert_eq!(history.len(), player.age as usize - history[0].age as usize + 1);
            assert!(history.windows(2).all(|w| w[0].season_year + 1 == w[1].season_year));
            assert!(history.iter().all(|h| h.team == "Harbor City"));
            assert!(player.potential >= player.overall());
        }
    }
}
