//! Grouped rating schema
//!
//! Six fixed skill groups plus the scalar Intangibles. Every attribute lives
//! in `[0, 100]`. Iteration goes through [`Attribute::ALL`], a static
//! descriptor table, so each attribute is visited exactly once.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RatingGroup {
    OutsideScoring,
    Athleticism,
    InsideScoring,
    Playmaking,
    Defense,
    Rebounding,
}

impl RatingGroup {
    pub const ALL: [RatingGroup; 6] = [
        RatingGroup::OutsideScoring,
        RatingGroup::Athleticism,
        RatingGroup::InsideScoring,
        RatingGroup::Playmaking,
        RatingGroup::Defense,
        RatingGroup::Rebounding,
    ];
}

/// Every grouped attribute. Intangibles is a scalar and not listed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attribute {
    // OutsideScoring
    CloseShot,
    MidRangeShot,
    ThreePointShot,
    FreeThrow,
    ShotIq,
    OffensiveConsistency,
    // Athleticism
    HeightRating,
    Speed,
    Agility,
    Strength,
    Vertical,
    Stamina,
    Hustle,
    OverallDurability,
    // InsideScoring
    Layup,
    StandingDunk,
    DrivingDunk,
    PostHook,
    PostFade,
    PostControl,
    DrawFoul,
    Hands,
    // Playmaking
    PassAccuracy,
    BallHandle,
    SpeedWithBall,
    PassIq,
    PassVision,
    // Defense
    InteriorDefense,
    PerimeterDefense,
    Steal,
    Block,
    HelpDefenseIq,
    PassPerception,
    DefensiveConsistency,
    // Rebounding
    OffensiveRebound,
    DefensiveRebound,
}

impl Attribute {
    pub const COUNT: usize = 36;

    /// Descriptor table, grouped and in schema order.
    pub const ALL: [Attribute; Attribute::COUNT] = [
        Attribute::CloseShot,
        Attribute::MidRangeShot,
        Attribute::ThreePointShot,
        Attribute::FreeThrow,
        Attribute::ShotIq,
        Attribute::OffensiveConsistency,
        Attribute::HeightRating,
        Attribute::Speed,
        Attribute::Agility,
        Attribute::Strength,
        Attribute::Vertical,
        Attribute::Stamina,
        Attribute::Hustle,
        Attribute::OverallDurability,
        Attribute::Layup,
        Attribute::StandingDunk,
        Attribute::DrivingDunk,
        Attribute::PostHook,
        Attribute::PostFade,
        Attribute::PostControl,
        Attribute::DrawFoul,
        Attribute::Hands,
        Attribute::PassAccuracy,
        Attribute::BallHandle,
        Attribute::SpeedWithBall,
        Attribute::PassIq,
        Attribute::PassVision,
        Attribute::InteriorDefense,
        Attribute::PerimeterDefense,
        Attribute::Steal,
        Attribute::Block,
        Attribute::HelpDefenseIq,
        Attribute::PassPerception,
        Attribute::DefensiveConsistency,
        Attribute::OffensiveRebound,
        Attribute::DefensiveRebound,
    ];

    pub fn group(&self) -> RatingGroup {
        use Attribute::*;
        match self {
            CloseShot | MidRangeShot | ThreePointShot | FreeThrow | ShotIq
            | OffensiveConsistency => RatingGroup::OutsideScoring,
            HeightRating | Speed | Agility | Strength | Vertical | Stamina | Hustle
            | OverallDurability => RatingGroup::Athleticism,
            Layup | StandingDunk | DrivingDunk | PostHook | PostFade | PostControl | DrawFoul
            | Hands => RatingGroup::InsideScoring,
            PassAccuracy | BallHandle | SpeedWithBall | PassIq | PassVision => {
                RatingGroup::Playmaking
            }
            InteriorDefense | PerimeterDefense | Steal | Block | HelpDefenseIq
            | PassPerception | DefensiveConsistency => RatingGroup::Defense,
            OffensiveRebound | DefensiveRebound => RatingGroup::Rebounding,
        }
    }

    /// Generation baseline before archetype and group scaling.
    pub fn baseline(&self) -> f64 {
        use Attribute::*;
        match self {
            CloseShot | MidRangeShot => 40.0,
            ThreePointShot => 35.0,
            FreeThrow => 60.0,
            ShotIq | OffensiveConsistency => 50.0,

            HeightRating => 50.0,
            Speed | Vertical => 46.0,
            Agility => 45.0,
            Strength => 43.0,
            Stamina | Hustle | OverallDurability => 50.0,

            Layup => 40.0,
            StandingDunk | DrivingDunk | PostHook | PostFade | PostControl => 30.0,
            DrawFoul => 35.0,
            Hands => 50.0,

            PassAccuracy | BallHandle | SpeedWithBall | PassIq | PassVision => 40.0,

            InteriorDefense | PerimeterDefense => 35.0,
            Steal | Block => 30.0,
            HelpDefenseIq | PassPerception => 35.0,
            DefensiveConsistency => 40.0,

            OffensiveRebound | DefensiveRebound => 35.0,
        }
    }

    pub fn name(&self) -> &'static str {
        use Attribute::*;
        match self {
            CloseShot => "CloseShot",
            MidRangeShot => "MidRangeShot",
            ThreePointShot => "ThreePointShot",
            FreeThrow => "FreeThrow",
            ShotIq => "ShotIQ",
            OffensiveConsistency => "OffensiveConsistency",
            HeightRating => "HeightRating",
            Speed => "Speed",
            Agility => "Agility",
            Strength => "Strength",
            Vertical => "Vertical",
            Stamina => "Stamina",
            Hustle => "Hustle",
            OverallDurability => "OverallDurability",
            Layup => "Layup",
            StandingDunk => "StandingDunk",
            DrivingDunk => "DrivingDunk",
            PostHook => "PostHook",
            PostFade => "PostFade",
            PostControl => "PostControl",
            DrawFoul => "DrawFoul",
            Hands => "Hands",
            PassAccuracy => "PassAccuracy",
            BallHandle => "BallHandle",
            SpeedWithBall => "SpeedWithBall",
            PassIq => "PassIQ",
            PassVision => "PassVision",
            InteriorDefense => "InteriorDefense",
            PerimeterDefense => "PerimeterDefense",
            Steal => "Steal",
            Block => "Block",
            HelpDefenseIq => "HelpDefenseIQ",
            PassPerception => "PassPerception",
            DefensiveConsistency => "DefensiveConsistency",
            OffensiveRebound => "OffensiveRebound",
            DefensiveRebound => "DefensiveRebound",
        }
    }

    pub fn in_group(group: RatingGroup) -> impl Iterator<Item = Attribute> {
        Attribute::ALL.into_iter().filter(move |a| a.group() == group)
    }
}

pub const DEFAULT_INTANGIBLES: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OutsideScoring {
    pub close_shot: u8,
    pub mid_range_shot: u8,
    pub three_point_shot: u8,
    pub free_throw: u8,
    pub shot_iq: u8,
    pub offensive_consistency: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Athleticism {
    pub height_rating: u8,
    pub speed: u8,
    pub agility: u8,
    pub strength: u8,
    pub vertical: u8,
    pub stamina: u8,
    pub hustle: u8,
    pub overall_durability: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InsideScoring {
    pub layup: u8,
    pub standing_dunk: u8,
    pub driving_dunk: u8,
    pub post_hook: u8,
    pub post_fade: u8,
    pub post_control: u8,
    pub draw_foul: u8,
    pub hands: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Playmaking {
    pub pass_accuracy: u8,
    pub ball_handle: u8,
    pub speed_with_ball: u8,
    pub pass_iq: u8,
    pub pass_vision: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Defense {
    pub interior_defense: u8,
    pub perimeter_defense: u8,
    pub steal: u8,
    pub block: u8,
    pub help_defense_iq: u8,
    pub pass_perception: u8,
    pub defensive_consistency: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rebounding {
    pub offensive_rebound: u8,
    pub defensive_rebound: u8,
}

/// Full rating state of a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingPresets {
    pub outside_scoring: OutsideScoring,
    pub athleticism: Athleticism,
    pub inside_scoring: InsideScoring,
    pub playmaking: Playmaking,
    pub defense: Defense,
    pub rebounding: Rebounding,
    pub intangibles: u8,
}

impl Default for RatingPresets {
    /// The generation baselines.
    fn default() -> Self {
        let mut presets = Self::zeroed();
        for attr in Attribute::ALL {
            presets.set(attr, attr.baseline().round() as u8);
        }
        presets.intangibles = DEFAULT_INTANGIBLES as u8;
        presets
    }
}

impl RatingPresets {
    pub fn zeroed() -> Self {
        Self {
            outside_scoring: OutsideScoring::default(),
            athleticism: Athleticism::default(),
            inside_scoring: InsideScoring::default(),
            playmaking: Playmaking::default(),
            defense: Defense::default(),
            rebounding: Rebounding::default(),
            intangibles: 0,
        }
    }

    pub fn get(&self, attr: Attribute) -> u8 {
        use Attribute::*;
        let (os, ath, ins) = (&self.outside_scoring, &self.athleticism, &self.inside_scoring);
        let (ply, def, reb) = (&self.playmaking, &self.defense, &self.rebounding);
        match attr {
            CloseShot => os.close_shot,
            MidRangeShot => os.mid_range_shot,
            ThreePointShot => os.three_point_shot,
            FreeThrow => os.free_throw,
            ShotIq => os.shot_iq,
            OffensiveConsistency => os.offensive_consistency,
            HeightRating => ath.height_rating,
            Speed => ath.speed,
            Agility => ath.agility,
            Strength => ath.strength,
            Vertical => ath.vertical,
            Stamina => ath.stamina,
            Hustle => ath.hustle,
            OverallDurability => ath.overall_durability,
            Layup => ins.layup,
            StandingDunk => ins.standing_dunk,
            DrivingDunk => ins.driving_dunk,
            PostHook => ins.post_hook,
            PostFade => ins.post_fade,
            PostControl => ins.post_control,
            DrawFoul => ins.draw_foul,
            Hands => ins.hands,
            PassAccuracy => ply.pass_accuracy,
            BallHandle => ply.ball_handle,
            SpeedWithBall => ply.speed_with_ball,
            PassIq => ply.pass_iq,
            PassVision => ply.pass_vision,
            InteriorDefense => def.interior_defense,
            PerimeterDefense => def.perimeter_defense,
            Steal => def.steal,
            Block => def.block,
            HelpDefenseIq => def.help_defense_iq,
            PassPerception => def.pass_perception,
            DefensiveConsistency => def.defensive_consistency,
            OffensiveRebound => reb.offensive_rebound,
            DefensiveRebound => reb.defensive_rebound,
        }
    }

    /// Stores `value`, capped at 100.
    pub fn set(&mut self, attr: Attribute, value: u8) {
        *self.slot_mut(attr) = value.min(100);
    }

    fn slot_mut(&mut self, attr: Attribute) -> &mut u8 {
        use Attribute::*;
        match attr {
            CloseShot => &mut self.outside_scoring.close_shot,
            MidRangeShot => &mut self.outside_scoring.mid_range_shot,
            ThreePointShot => &mut self.outside_scoring.three_point_shot,
            FreeThrow => &mut self.outside_scoring.free_throw,
            ShotIq => &mut self.outside_scoring.shot_iq,
            OffensiveConsistency => &mut self.outside_scoring.offensive_consistency,
            HeightRating => &mut self.athleticism.height_rating,
            Speed => &mut self.athleticism.speed,
            Agility => &mut self.athleticism.agility,
            Strength => &mut self.athleticism.strength,
            Vertical => &mut self.athleticism.vertical,
            Stamina => &mut self.athleticism.stamina,
            Hustle => &mut self.athleticism.hustle,
            OverallDurability => &mut self.athleticism.overall_durability,
            Layup => &mut self.inside_scoring.layup,
            StandingDunk => &mut self.inside_scoring.standing_dunk,
            DrivingDunk => &mut self.inside_scoring.driving_dunk,
            PostHook => &mut self.inside_scoring.post_hook,
            PostFade => &mut self.inside_scoring.post_fade,
            PostControl => &mut self.inside_scoring.post_control,
            DrawFoul => &mut self.inside_scoring.draw_foul,
            Hands => &mut self.inside_scoring.hands,
            PassAccuracy => &mut self.playmaking.pass_accuracy,
            BallHandle => &mut self.playmaking.ball_handle,
            SpeedWithBall => &mut self.playmaking.speed_with_ball,
            PassIq => &mut self.playmaking.pass_iq,
            PassVision => &mut self.playmaking.pass_vision,
            InteriorDefense => &mut self.defense.interior_defense,
            PerimeterDefense => &mut self.defense.perimeter_defense,
            Steal => &mut self.defense.steal,
            Block => &mut self.defense.block,
            HelpDefenseIq => &mut self.defense.help_defense_iq,
            PassPerception => &mut self.defense.pass_perception,
            DefensiveConsistency => &mut self.defense.defensive_consistency,
            OffensiveRebound => &mut self.rebounding.offensive_rebound,
            DefensiveRebound => &mut self.rebounding.defensive_rebound,
        }
    }

    /// Mean of a group. Athleticism leaves HeightRating out.
    pub fn group_average(&self, group: RatingGroup) -> f64 {
        let (sum, count) = Attribute::in_group(group)
            .filter(|a| *a != Attribute::HeightRating)
            .fold((0u32, 0u32), |(s, n), a| (s + self.get(a) as u32, n + 1));
        if count == 0 {
            0.0
        } else {
            sum as f64 / count as f64
        }
    }

    /// Sum of every attribute and Intangibles.
    pub fn total(&self) -> u32 {
        Attribute::ALL.iter().map(|a| self.get(*a) as u32).sum::<u32>() + self.intangibles as u32
    }

    pub fn mean_of(&self, attrs: &[Attribute]) -> f64 {
        if attrs.is_empty() {
            return 0.0;
        }
        attrs.iter().map(|a| self.get(*a) as f64).sum::<f64>() / attrs.len() as f64
    }
}

/// One global multiplier per group, drawn once per player.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingFactors {
    pub outside_scoring: f64,
    pub athleticism: f64,
    pub inside_scoring: f64,
    pub playmaking: f64,
    pub defense: f64,
    pub rebounding: f64,
    pub intangibles: f64,
}

impl Default for RatingFactors {
    fn default() -> Self {
        Self::uniform(1.0)
    }
}

impl RatingFactors {
    pub fn uniform(value: f64) -> Self {
        Self {
            outside_scoring: value,
            athleticism: value,
            inside_scoring: value,
            playmaking: value,
            defense: value,
            rebounding: value,
            intangibles: value,
        }
    }

    pub fn for_group(&self, group: RatingGroup) -> f64 {
        match group {
            RatingGroup::OutsideScoring => self.outside_scoring,
            RatingGroup::Athleticism => self.athleticism,
            RatingGroup::InsideScoring => self.inside_scoring,
            RatingGroup::Playmaking => self.playmaking,
            RatingGroup::Defense => self.defense,
            RatingGroup::Rebounding => self.rebounding,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_table_is_exhaustive() {
        let mut names: Vec<&str> = Attribute::ALL.iter().map(|a| a.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Attribute::COUNT);

        let sizes: Vec<usize> =
            RatingGroup::ALL.iter().map(|g| Attribute::in_group(*g).count()).collect();
        assert_eq!(sizes, vec![6, 8, 8, 5, 7, 2]);
    }

    #[test]
    fn test_get_set_touch_only_their_slot() {
        for attr in Attribute::ALL {
            let mut r = RatingPresets::zeroed();
            r.set(attr, 77);
            assert_eq!(r.get(attr), 77, "{} not stored", attr.name());
            assert_eq!(r.total(), 77, "{} leaked into another slot", attr.name());
        }
    }

    #[test]
    fn test_set_caps_at_100() {
        let mut r = RatingPresets::zeroed();
        r.set(Attribute::Block, 250);
        assert_eq!(r.get(Attribute::Block), 100);
    }

    #[test]
    fn test_defaults_match_baselines() {
        let r = RatingPresets::default();
        assert_eq!(r.get(Attribute::FreeThrow), 60);
        assert_eq!(r.get(Attribute::Strength), 43);
        assert_eq!(r.get(Attribute::DefensiveConsistency), 40);
        assert_eq!(r.intangibles, 30);
    }

    #[test]
    fn test_athleticism_average_skips_height() {
        let mut r = RatingPresets::zeroed();
        r.set(Attribute::HeightRating, 100);
        r.set(Attribute::Speed, 70);
        assert!((r.group_average(RatingGroup::Athleticism) - 10.0).abs() < 1e-9);
    }
}
