use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// the mode a traveler is physically using while moving along an edge.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum TraverseMode {
    Walk,
    Bicycle,
    Scooter,
    Car,
}

impl TraverseMode {
    pub const ALL: [TraverseMode; 4] = [
        TraverseMode::Walk,
        TraverseMode::Bicycle,
        TraverseMode::Scooter,
        TraverseMode::Car,
    ];

    /// bicycles and scooters share the cycling infrastructure and cost model.
    pub fn is_cycling_ish(&self) -> bool {
        matches!(self, TraverseMode::Bicycle | TraverseMode::Scooter)
    }

    pub fn is_driving(&self) -> bool {
        matches!(self, TraverseMode::Car)
    }

    pub fn is_in_car(&self) -> bool {
        self.is_driving()
    }

    pub fn is_walking(&self) -> bool {
        matches!(self, TraverseMode::Walk)
    }

    /// position of this mode in a [`super::TraverseModeSet`] bit mask.
    pub(crate) fn mask(&self) -> u8 {
        match self {
            TraverseMode::Walk => 1,
            TraverseMode::Bicycle => 1 << 1,
            TraverseMode::Scooter => 1 << 2,
            TraverseMode::Car => 1 << 3,
        }
    }
}

impl Display for TraverseMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TraverseMode::Walk => "walk",
            TraverseMode::Bicycle => "bicycle",
            TraverseMode::Scooter => "scooter",
            TraverseMode::Car => "car",
        };
        write!(f, "{s}")
    }
}
