//! Game engine tests

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::*;
use crate::config::{GameConfig, ProbabilityBounds, ShotTable, SimConfig};
use crate::error::GameError;
use crate::models::{Archetype, Attribute, Player, Position, ShotType};
use crate::player::generate_player;

fn lineup(rng: &mut ChaCha8Rng) -> Vec<Player> {
    [Archetype::Point, Archetype::Wing, Archetype::Wing, Archetype::Big, Archetype::Big]
        .into_iter()
        .map(|a| generate_player(26, Some(a), rng))
        .collect()
}

fn ready_simulator(seed: u64) -> (GameSimulator, ChaCha8Rng) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut sim = GameSimulator::new(SimConfig::default()).unwrap();
    let (a, b) = (lineup(&mut rng), lineup(&mut rng));
    sim.set_lineups(a, b).unwrap();
    (sim, rng)
}

#[test]
fn test_game_ends_within_one_possession_of_regulation() {
    for seed in 0..20 {
        let (mut sim, mut rng) = ready_simulator(seed);
        let result = sim.simulate(false, &mut rng).unwrap();
        assert!(result.elapsed >= 2880, "ended early at {}", result.elapsed);
        assert!(result.elapsed < 2880 + 24, "ran long to {}", result.elapsed);
        assert_eq!(result.quarters, 4);
        assert!(result.possessions > 100, "only {} possessions", result.possessions);
    }
}

#[test]
fn test_score_matches_recorded_points() {
    for seed in 100..120 {
        let (mut sim, mut rng) = ready_simulator(seed);
        let result = sim.simulate(false, &mut rng).unwrap();

        assert_eq!(result.totals_a.points, result.score.team_a);
        assert_eq!(result.totals_b.points, result.score.team_b);

        for totals in [result.totals_a, result.totals_b] {
            let from_shots = 2 * totals.two_made() + 3 * totals.three_made + totals.free_throws_made;
            assert_eq!(totals.points, from_shots);
            assert!(totals.assists <= totals.field_goals_made());
            assert!(totals.free_throws_made <= totals.free_throws_attempted);
        }
    }
}

#[test]
fn test_scores_look_like_basketball() {
    let (mut sim, mut rng) = ready_simulator(7);
    let summary = sim.simulate_series(30, &mut rng).unwrap();
    let avg = (summary.average_a() + summary.average_b()) / 2.0;
    println!("average points per team: {:.1}", avg);
    assert!((50.0..160.0).contains(&avg), "average {}", avg);
    assert_eq!(summary.wins_a + summary.wins_b + summary.ties, 30);
    assert_eq!(summary.scores.len(), 30);
}

#[test]
fn test_reset_zeroes_every_counter() {
    let (mut sim, mut rng) = ready_simulator(9);
    sim.simulate(false, &mut rng).unwrap();
    assert!(sim.score().team_a + sim.score().team_b > 0);

    sim.reset_for_simulation();
    let (a, b) = sim.lineups();
    assert_eq!(sim.stats().len(), a.len() + b.len());
    for p in a.iter().chain(b) {
        assert!(sim.stats().get(p.id).unwrap().is_empty(), "{} kept stats", p.name);
    }
    assert_eq!(sim.score(), GameScore { team_a: 0, team_b: 0 });
}

#[test]
fn test_new_lineups_drop_stale_entries() {
    let (mut sim, mut rng) = ready_simulator(10);
    let old: Vec<_> = sim.lineups().0.iter().map(|p| p.id).collect();
    sim.simulate(false, &mut rng).unwrap();

    let (a, b) = (lineup(&mut rng), lineup(&mut rng));
    sim.set_lineups(a, b).unwrap();
    assert_eq!(sim.stats().len(), 10);
    assert!(old.iter().all(|id| !sim.stats().contains(*id)));
}

#[test]
fn test_errors_before_setup_and_for_tiny_lineups() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let mut sim = GameSimulator::new(SimConfig::default()).unwrap();
    assert!(matches!(sim.simulate(false, &mut rng), Err(GameError::TeamsNotReady)));

    let one = vec![generate_player(25, None, &mut rng)];
    let err = sim.set_lineups(one, lineup(&mut rng)).unwrap_err();
    assert!(matches!(err, GameError::LineupTooSmall { expected: 2, found: 1 }));
}

#[test]
fn test_setup_teams_starts_best_five() {
    let mut rng = ChaCha8Rng::seed_from_u64(12);
    let mut sim = GameSimulator::new(SimConfig::default()).unwrap();
    sim.setup_teams(&mut rng).unwrap();

    let (team_a, _) = sim.rosters().unwrap();
    let (lineup_a, lineup_b) = sim.lineups();
    assert_eq!(lineup_a.len(), 5);
    assert_eq!(lineup_b.len(), 5);

    let worst_starter = lineup_a.iter().map(|p| p.overall()).min().unwrap();
    let bench_best = team_a
        .players
        .iter()
        .filter(|p| lineup_a.iter().all(|s| s.id != p.id))
        .map(|p| p.overall())
        .max()
        .unwrap();
    assert!(worst_starter >= bench_best);

    let result = sim.simulate(false, &mut rng).unwrap();
    assert_eq!(result.box_a.len(), 5);
}

#[test]
fn test_verbose_game_narrates() {
    let (mut sim, mut rng) = ready_simulator(13);
    let result = sim.simulate(true, &mut rng).unwrap();

    let quarters: Vec<u8> = result
        .events
        .iter()
        .filter_map(|e| match e.kind {
            GameEventKind::QuarterStart { quarter } => Some(quarter),
            _ => None,
        })
        .collect();
    assert_eq!(quarters, vec![2, 3, 4]);

    let last = result.events.last().unwrap();
    assert_eq!((last.score_a, last.score_b), (result.score.team_a, result.score.team_b));
    assert!(result.events.iter().all(|e| e.text.starts_with("[Q")));

    let (mut quiet, mut rng) = ready_simulator(13);
    assert!(quiet.simulate(false, &mut rng).unwrap().events.is_empty());
}

#[test]
fn test_same_seed_same_game() {
    let run = |seed| {
        let (mut sim, mut rng) = ready_simulator(seed);
        serde_json::to_string(&sim.simulate(true, &mut rng).unwrap()).unwrap()
    };
    assert_eq!(run(21), run(21));
    assert_ne!(run(21), run(22));
}

#[test]
fn test_probabilities_stay_in_their_windows() {
    let config = SimConfig::default();
    let engine = PossessionEngine::new(&config.game);
    let mut rng = ChaCha8Rng::seed_from_u64(14);

    for _ in 0..100 {
        let s = generate_player(24, None, &mut rng);
        let d = generate_player(24, None, &mut rng);
        assert!((0.05..=0.25).contains(&engine.turnover_chance(&s)));
        assert!((0.005..=0.10).contains(&engine.steal_chance(&d)));
        assert!((0.02..=0.12).contains(&engine.block_chance(&d)));
        assert!((0.50..=0.95).contains(&engine.free_throw_chance(&s)));
        assert!((0.28..=0.42).contains(&engine.shot_chance(&s, &d, ShotType::ThreePoint)));
        assert!((0.33..=0.50).contains(&engine.shot_chance(&s, &d, ShotType::MidRange)));
        assert!((0.45..=0.65).contains(&engine.shot_chance(&s, &d, ShotType::Inside)));
        assert!((0.10..=0.50).contains(&engine.offensive_rebound_chance(&s, &d)));
        let secs = engine.possession_seconds(&mut rng);
        assert!((6..=24).contains(&secs));
    }
}

#[test]
fn test_defender_matches_position_when_possible() {
    let config = SimConfig::default();
    let engine = PossessionEngine::new(&config.game);
    let mut rng = ChaCha8Rng::seed_from_u64(15);

    for _ in 0..50 {
        let offense = lineup(&mut rng);
        let defense = lineup(&mut rng);
        let shooter = &offense[engine.pick_shooter(&offense, &mut rng)];
        let any_match = defense.iter().any(|d| d.position().can_guard(shooter.position()));
        let defender = &defense[engine.pick_defender(shooter, &defense, &mut rng)];
        if any_match {
            assert!(defender.position().can_guard(shooter.position()));
        }
    }
}

#[test]
fn test_tall_shooters_lean_inside() {
    let config = SimConfig::default();
    let engine = PossessionEngine::new(&config.game);
    let mut rng = ChaCha8Rng::seed_from_u64(16);

    let mut player = generate_player(25, Some(Archetype::Wing), &mut rng);
    player.height_cm = 170;
    let short = engine.action_weights(&player);
    player.height_cm = 225;
    let tall = engine.action_weights(&player);

    assert!(tall[0] > short[0]);
    assert!((tall[1] - short[1]).abs() < 1e-12);
    assert!(tall[2] < short[2]);
    assert!(tall.iter().all(|w| *w >= 0.0));
}

/// Every attribute at 40 plus the given overrides.
fn shaped(rng: &mut ChaCha8Rng, overrides: &[(Attribute, u8)]) -> Player {
    let mut player = generate_player(26, None, rng);
    for attr in Attribute::ALL {
        player.ratings.set(attr, 40);
    }
    player.ratings.intangibles = 40;
    for (attr, value) in overrides {
        player.ratings.set(*attr, *value);
    }
    player
}

fn point_guard(rng: &mut ChaCha8Rng) -> Player {
    shaped(
        rng,
        &[
            (Attribute::BallHandle, 90),
            (Attribute::PassAccuracy, 90),
            (Attribute::PassVision, 85),
            (Attribute::HeightRating, 10),
        ],
    )
}

fn center(rng: &mut ChaCha8Rng) -> Player {
    shaped(
        rng,
        &[
            (Attribute::HeightRating, 95),
            (Attribute::Block, 80),
            (Attribute::InteriorDefense, 75),
            (Attribute::BallHandle, 20),
        ],
    )
}

/// Every gate shut: no turnover, steal, foul or block, and shots always miss
/// with no offensive rebound.
fn quiet_config() -> GameConfig {
    let never = ProbabilityBounds::new(0.0, 0.0);
    GameConfig {
        turnover_bounds: never,
        steal_bounds: never,
        foul_chance: 0.0,
        block_bounds: never,
        shot_bounds: ShotTable { inside: never, mid_range: never, three_point: never },
        rebound_bounds: never,
        ..GameConfig::default()
    }
}

fn tracker_for(offense: &[Player], defense: &[Player]) -> StatsTracker {
    let mut stats = StatsTracker::new();
    stats.initialize(offense, defense);
    stats
}

#[test]
fn test_steal_credits_only_the_defender() {
    let config = GameConfig { steal_bounds: ProbabilityBounds::new(1.0, 1.0), ..quiet_config() };
    let engine = PossessionEngine::new(&config);
    let mut rng = ChaCha8Rng::seed_from_u64(40);
    let (offense, defense) = (lineup(&mut rng), lineup(&mut rng));
    let mut stats = tracker_for(&offense, &defense);

    let outcome = engine.resolve(&offense, &defense, 0, 1, ShotType::Inside, &mut stats, &mut rng).unwrap();

    assert_eq!(outcome.points, 0);
    assert!(matches!(outcome.events[..], [GameEventKind::Steal { .. }]));
    assert_eq!(stats.get(defense[1].id).unwrap().steals, 1);
    let shooter = stats.get(offense[0].id).unwrap();
    assert_eq!(shooter.turnovers, 0);
    assert!(shooter.is_empty());
}

#[test]
fn test_block_credits_only_the_defender() {
    let config = GameConfig { block_bounds: ProbabilityBounds::new(1.0, 1.0), ..quiet_config() };
    let engine = PossessionEngine::new(&config);
    let mut rng = ChaCha8Rng::seed_from_u64(41);
    let (offense, defense) = (lineup(&mut rng), lineup(&mut rng));

    for shot in [ShotType::Inside, ShotType::MidRange] {
        let mut stats = tracker_for(&offense, &defense);
        let outcome = engine.resolve(&offense, &defense, 2, 3, shot, &mut stats, &mut rng).unwrap();
        assert!(matches!(outcome.events[..], [GameEventKind::Blocked { .. }]));
        assert_eq!(stats.get(defense[3].id).unwrap().blocks, 1);
        assert_eq!(stats.get(offense[2].id).unwrap().field_goals_attempted(), 0);
    }
}

#[test]
fn test_threes_are_never_blocked() {
    let config = GameConfig { block_bounds: ProbabilityBounds::new(1.0, 1.0), ..quiet_config() };
    let engine = PossessionEngine::new(&config);
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let (offense, defense) = (lineup(&mut rng), lineup(&mut rng));
    let mut stats = tracker_for(&offense, &defense);

    for _ in 0..50 {
        let outcome = engine.resolve(&offense, &defense, 1, 1, ShotType::ThreePoint, &mut stats, &mut rng).unwrap();
        assert!(outcome.events.iter().all(|e| !matches!(e, GameEventKind::Blocked { .. })));
    }
    assert_eq!(stats.get(defense[1].id).unwrap().blocks, 0);
    assert_eq!(stats.get(offense[1].id).unwrap().three_attempted, 50);
}

#[test]
fn test_shooting_fouls_award_free_throws_by_shot() {
    let config = GameConfig { foul_chance: 1.0, ..quiet_config() };
    let engine = PossessionEngine::new(&config);
    let mut rng = ChaCha8Rng::seed_from_u64(43);
    let (offense, defense) = (lineup(&mut rng), lineup(&mut rng));

    for (shot, expected) in [(ShotType::Inside, 2), (ShotType::MidRange, 2), (ShotType::ThreePoint, 3)] {
        let mut stats = tracker_for(&offense, &defense);
        let outcome = engine.resolve(&offense, &defense, 0, 0, shot, &mut stats, &mut rng).unwrap();

        match outcome.events[..] {
            [GameEventKind::FouledOnShot { attempts, made, .. }] => {
                assert_eq!(attempts, expected, "{:?}", shot);
                assert_eq!(made, outcome.points);
            }
            ref other => panic!("expected a shooting foul, got {:?}", other),
        }
        let shooter = stats.get(offense[0].id).unwrap();
        assert_eq!(shooter.free_throws_attempted, expected);
        assert_eq!(shooter.points, shooter.free_throws_made);
        assert_eq!(shooter.field_goals_attempted(), 0);
        assert_eq!(stats.get(defense[0].id).unwrap().fouls, 1);
    }
}

#[test]
fn test_assist_never_goes_to_the_shooter() {
    let always = ProbabilityBounds::new(1.0, 1.0);
    let config = GameConfig {
        shot_bounds: ShotTable { inside: always, mid_range: always, three_point: always },
        assist_chance: ShotTable { inside: 1.0, mid_range: 1.0, three_point: 1.0 },
        ..quiet_config()
    };
    let engine = PossessionEngine::new(&config);
    let mut rng = ChaCha8Rng::seed_from_u64(44);
    let (offense, defense) = (lineup(&mut rng), lineup(&mut rng));
    let mut stats = tracker_for(&offense, &defense);

    for round in 0..200 {
        let shooter = round % offense.len();
        let shot = ShotType::ALL[round % 3];
        let outcome = engine.resolve(&offense, &defense, shooter, 0, shot, &mut stats, &mut rng).unwrap();
        match outcome.events[..] {
            [GameEventKind::ShotMade { shooter: id, assist: Some(helper), .. }] => {
                assert_eq!(id, offense[shooter].id);
                assert_ne!(helper, id);
                assert!(offense.iter().any(|p| p.id == helper));
            }
            ref other => panic!("expected an assisted make, got {:?}", other),
        }
    }

    let (assists, made) = offense.iter().fold((0, 0), |(a, m), p| {
        let s = stats.get(p.id).unwrap();
        (a + s.assists, m + s.field_goals_made())
    });
    assert_eq!((assists, made), (200, 200));
}

#[test]
fn test_defensive_rebound_falls_back_to_matched_defender() {
    let config = GameConfig { frontcourt_rebound_share: 1.0, ..quiet_config() };
    let engine = PossessionEngine::new(&config);
    let mut rng = ChaCha8Rng::seed_from_u64(45);
    let offense = lineup(&mut rng);
    let guards: Vec<Player> = (0..5).map(|_| point_guard(&mut rng)).collect();
    assert!(guards.iter().all(|p| !p.position().is_frontcourt()));

    for _ in 0..30 {
        let mut stats = tracker_for(&offense, &guards);
        let outcome = engine.resolve(&offense, &guards, 0, 2, ShotType::MidRange, &mut stats, &mut rng).unwrap();
        assert_eq!(
            outcome.events.last(),
            Some(&GameEventKind::Rebound { player: guards[2].id, offensive: false })
        );
        assert_eq!(stats.get(guards[2].id).unwrap().defensive_rebounds, 1);
    }
}

#[test]
fn test_defensive_rebound_goes_to_frontcourt_when_present() {
    let config = GameConfig { frontcourt_rebound_share: 1.0, ..quiet_config() };
    let engine = PossessionEngine::new(&config);
    let mut rng = ChaCha8Rng::seed_from_u64(46);
    let offense = lineup(&mut rng);
    let mut defense: Vec<Player> = (0..4).map(|_| point_guard(&mut rng)).collect();
    defense.push(center(&mut rng));
    assert_eq!(defense[4].position(), Position::Center);

    for _ in 0..30 {
        let mut stats = tracker_for(&offense, &defense);
        let outcome = engine.resolve(&offense, &defense, 0, 0, ShotType::Inside, &mut stats, &mut rng).unwrap();
        assert_eq!(
            outcome.events.last(),
            Some(&GameEventKind::Rebound { player: defense[4].id, offensive: false })
        );
    }
}

#[test]
fn test_simulator_rejects_inverted_windows() {
    let mut config = SimConfig::default();
    config.game.possession_min_seconds = 30;
    assert!(matches!(GameSimulator::new(config), Err(GameError::Config(_))));

    let mut config = SimConfig::default();
    config.game.shot_bounds.inside = ProbabilityBounds::new(0.7, 0.4);
    assert!(matches!(GameSimulator::new(config), Err(GameError::Config(_))));
}
