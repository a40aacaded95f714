//! Player generation
//!
//! Height sampling feeds archetype selection; the archetype and per-player
//! group factors shape the randomized ratings, from which position, Overall
//! and Potential are derived.

pub mod archetype_selector;
pub mod generator;
pub mod labels;
pub mod position_calculator;
pub mod rating_calculator;
pub mod rating_randomizer;
pub mod type_factors;

#[cfg(test)]
mod tests;

pub use archetype_selector::ArchetypeSelector;
pub use generator::{generate_player, PlayerGenerator};
pub use labels::{DefaultLabels, LabelSource};
pub use position_calculator::PositionCalculator;
pub use rating_calculator::RatingCalculator;
pub use rating_randomizer::RatingRandomizer;
pub use type_factors::TypeFactors;
