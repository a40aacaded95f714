//! Season-over-season player development
//!
//! Young players grow toward their Potential, veterans lose athleticism
//! first and skills later, and Potential converges on Overall with age.

pub mod age_curves;
pub mod engine;

pub use engine::{DevelopmentEngine, SeasonReport};
