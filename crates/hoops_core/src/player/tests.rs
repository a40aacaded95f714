//! Generator-level tests

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::*;
use crate::config::GenerationConfig;
use crate::models::{Archetype, Attribute};

#[test]
fn test_generated_player_is_consistent() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let player = generate_player(20, None, &mut rng);

    assert_eq!(player.age, 20);
    assert!(player.overall() <= 100);
    assert!(player.potential >= player.overall(), "potential below overall: {}", player);
    assert!((130..=280).contains(&player.height_cm), "height {}", player.height_cm);
    assert!(player.weight_kg > 50, "weight {}", player.weight_kg);
    assert!(!player.name.is_empty() && !player.country.is_empty());

    let history = player.history();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].season_year, 2025);
    assert_eq!(history[0].overall, player.overall());
    assert_eq!(history[0].total_attributes, player.total_attributes());
}

#[test]
fn test_filter_is_honored() {
    let mut rng = ChaCha8Rng::seed_from_u64(77);
    for archetype in Archetype::ALL {
        for _ in 0..20 {
            let p = generate_player(21, Some(archetype), &mut rng);
            assert_eq!(p.archetype, archetype);
        }
    }
}

#[test]
fn test_forced_archetype_after_attempt_cap() {
    let config = GenerationConfig { archetype_max_attempts: 1, ..GenerationConfig::default() };
    let generator = PlayerGenerator::new(&config, &DefaultLabels);
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    for _ in 0..30 {
        let p = generator.generate(22, Some(Archetype::Point), &mut rng);
        assert_eq!(p.archetype, Archetype::Point);
    }
}

#[test]
fn test_archetypes_shape_ratings() {
    let mut rng = ChaCha8Rng::seed_from_u64(404);
    let n = 200;
    let mean = |arch, attr, rng: &mut ChaCha8Rng| {
        (0..n).map(|_| generate_player(24, Some(arch), rng).ratings.get(attr) as f64).sum::<f64>()
            / n as f64
    };

    let point_handle = mean(Archetype::Point, Attribute::BallHandle, &mut rng);
    let big_handle = mean(Archetype::Big, Attribute::BallHandle, &mut rng);
    let big_post = mean(Archetype::Big, Attribute::PostControl, &mut rng);
    let point_post = mean(Archetype::Point, Attribute::PostControl, &mut rng);

    println!("handle P {:.1} B {:.1}, post B {:.1} P {:.1}", point_handle, big_handle, big_post, point_post);
    assert!(point_handle > big_handle + 10.0);
    assert!(big_post > point_post + 5.0);
}

#[test]
fn test_bigs_are_taller() {
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let avg_height = |arch, rng: &mut ChaCha8Rng| {
        (0..100).map(|_| generate_player(23, Some(arch), rng).height_cm as f64).sum::<f64>() / 100.0
    };
    let points = avg_height(Archetype::Point, &mut rng);
    let bigs = avg_height(Archetype::Big, &mut rng);
    assert!(bigs > points + 5.0, "bigs {:.1}cm vs points {:.1}cm", bigs, points);
}

#[test]
fn test_same_seed_same_player() {
    let a = generate_player(19, None, &mut ChaCha8Rng::seed_from_u64(123));
    let b = generate_player(19, None, &mut ChaCha8Rng::seed_from_u64(123));
    assert_eq!(a.id, b.id);
    assert_eq!(a.ratings, b.ratings);
    assert_eq!(a.potential, b.potential);
    assert_eq!(a.name, b.name);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_generated_ratings_in_range(seed in any::<u64>(), age in 19u8..40) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let p = generate_player(age, None, &mut rng);
        for attr in Attribute::ALL {
            prop_assert!(p.ratings.get(attr) <= 100);
        }
        prop_assert!(p.ratings.intangibles <= 100);
        prop_assert!(p.overall() <= 100);
        prop_assert!(p.potential >= p.overall());
        prop_assert!(p.potential <= 100);
    }
}
