use serde::{Deserialize, Serialize};
use std::fmt;

/// Body-type variant fixed at creation. Biases generation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Archetype {
    Point,
    Wing,
    Big,
}

impl Archetype {
    pub const ALL: [Archetype; 3] = [Archetype::Point, Archetype::Wing, Archetype::Big];

    pub fn name(&self) -> &'static str {
        match self {
            Archetype::Point => "Point",
            Archetype::Wing => "Wing",
            Archetype::Big => "Big",
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
