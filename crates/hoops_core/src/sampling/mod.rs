//! Random sampling helpers shared by generation, development and the game
//! engine.
//!
//! Every helper draws from a caller-supplied source so a single seeded
//! generator can drive a whole run.

pub mod height;
pub mod streams;

use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

pub use height::HeightSampler;
pub use streams::derive_stream_seed;

/// Gaussian draw with the given mean and standard deviation.
pub fn gaussian<R: Rng + ?Sized>(rng: &mut R, mean: f64, std_dev: f64) -> f64 {
    let z: f64 = StandardNormal.sample(rng);
    mean + std_dev * z
}

/// Gaussian draw clamped to `[min, max]`.
pub fn clamped_gaussian<R: Rng + ?Sized>(
    rng: &mut R,
    mean: f64,
    std_dev: f64,
    min: f64,
    max: f64,
) -> f64 {
    gaussian(rng, mean, std_dev).clamp(min, max)
}

/// Uniform draw in `[0, 1)`.
pub fn unit<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.gen::<f64>()
}

/// Bernoulli trial. Probabilities outside `[0, 1]` saturate.
pub fn chance<R: Rng + ?Sized>(rng: &mut R, p: f64) -> bool {
    rng.gen::<f64>() < p
}

/// Uniform integer in `[min, max]`.
pub fn int_inclusive<R: Rng + ?Sized>(rng: &mut R, min: i32, max: i32) -> i32 {
    if min >= max {
        return min;
    }
    rng.gen_range(min..=max)
}

/// Picks an index with probability proportional to its weight.
///
/// Negative weights count as zero. When every weight is zero the pick is
/// uniform. Returns `None` only for an empty slice.
pub fn weighted_index<R: Rng + ?Sized>(rng: &mut R, weights: &[f64]) -> Option<usize> {
    if weights.is_empty() {
        return None;
    }

    let total: f64 = weights.iter().map(|w| w.max(0.0)).sum();
    if total <= 0.0 {
        return Some(rng.gen_range(0..weights.len()));
    }

    let roll = rng.gen::<f64>() * total;
    let mut cumulative = 0.0;
    for (i, w) in weights.iter().enumerate() {
        cumulative += w.max(0.0);
        if roll < cumulative {
            return Some(i);
        }
    }

    // Float rounding can leave roll == total; take the last positive weight.
    weights.iter().rposition(|w| *w > 0.0)
}

/// Uniform pick from a slice.
pub fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        None
    } else {
        Some(&items[rng.gen_range(0..items.len())])
    }
}

/// Rounds half away from zero and clamps into a rating.
pub fn to_rating(value: f64) -> u8 {
    value.clamp(0.0, 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_weighted_index_skips_zero_weights() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..1_000 {
            let idx = weighted_index(&mut rng, &[0.0, 3.0, 0.0, -2.0]).unwrap();
            assert_eq!(idx, 1);
        }
    }

    #[test]
    fn test_weighted_index_all_zero_is_uniform() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut seen = [0u32; 3];
        for _ in 0..3_000 {
            seen[weighted_index(&mut rng, &[0.0, 0.0, 0.0]).unwrap()] += 1;
        }
        assert!(seen.iter().all(|&n| n > 800), "uniform fallback skewed: {:?}", seen);
        assert_eq!(weighted_index(&mut rng, &[]), None);
    }

    #[test]
    fn test_gaussian_moments() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let n = 20_000;
        let samples: Vec<f64> = (0..n).map(|_| gaussian(&mut rng, 15.0, 4.0)).collect();
        let mean = samples.iter().sum::<f64>() / n as f64;
        let var = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n as f64;

        assert!((mean - 15.0).abs() < 0.15, "mean {}", mean);
        assert!((var.sqrt() - 4.0).abs() < 0.15, "std {}", var.sqrt());
    }

    #[test]
    fn test_chance_saturates() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        assert!((0..100).all(|_| chance(&mut rng, 1.5)));
        assert!((0..100).all(|_| !chance(&mut rng, 0.0)));
        assert!((0..100).all(|_| !chance(&mut rng, -0.2)));
    }

    #[test]
    fn test_to_rating_clamps() {
        assert_eq!(to_rating(-4.0), 0);
        assert_eq!(to_rating(100.7), 100);
        assert_eq!(to_rating(49.5), 50);
        assert_eq!(to_rating(49.49), 49);
    }
}
