//! Height rating -> body-type variant

use rand::Rng;

use crate::models::Archetype;

/// Height ratings at or above this lean Big.
pub const TALL_THRESHOLD: u8 = 59;
/// Height ratings at or below this lean Point.
pub const SHORT_THRESHOLD: u8 = 33;

#[derive(Debug)]
pub struct ArchetypeSelector;

impl ArchetypeSelector {
    pub fn select<R: Rng + ?Sized>(height_rating: u8, rng: &mut R) -> Archetype {
        Self::select_with_roll(height_rating, rng.gen::<f64>())
    }

    /// Deterministic core of [`select`](Self::select) for a roll in `[0, 1)`.
    pub fn select_with_roll(height_rating: u8, roll: f64) -> Archetype {
        if height_rating >= TALL_THRESHOLD {
            match roll {
                r if r < 0.01 => Archetype::Point,
                r if r < 0.05 => Archetype::Wing,
                _ => Archetype::Big,
            }
        } else if height_rating <= SHORT_THRESHOLD {
            match roll {
                r if r < 0.10 => Archetype::Wing,
                _ => Archetype::Point,
            }
        } else {
            match roll {
                r if r < 0.03 => Archetype::Point,
                r if r < 0.30 => Archetype::Big,
                _ => Archetype::Wing,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tall_band() {
        assert_eq!(ArchetypeSelector::select_with_roll(80, 0.5), Archetype::Big);
        assert_eq!(ArchetypeSelector::select_with_roll(59, 0.005), Archetype::Point);
        assert_eq!(ArchetypeSelector::select_with_roll(59, 0.02), Archetype::Wing);
    }

    #[test]
    fn test_short_band() {
        assert_eq!(ArchetypeSelector::select_with_roll(33, 0.09), Archetype::Wing);
        assert_eq!(ArchetypeSelector::select_with_roll(10, 0.10), Archetype::Point);
    }

    #[test]
    fn test_middle_band() {
        assert_eq!(ArchetypeSelector::select_with_roll(45, 0.01), Archetype::Point);
        assert_eq!(ArchetypeSelector::select_with_roll(45, 0.29), Archetype::Big);
        assert_eq!(ArchetypeSelector::select_with_roll(58, 0.30), Archetype::Wing);
    }
}
