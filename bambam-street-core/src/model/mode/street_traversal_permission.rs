use super::{TraverseMode, TraverseModeSet};
use serde::{Deserialize, Serialize};

/// which classes of traveler may use a street. scooters are governed by
/// the bicycle permission.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum StreetTraversalPermission {
    None,
    Pedestrian,
    Bicycle,
    PedestrianAndBicycle,
    Car,
    PedestrianAndCar,
    BicycleAndCar,
    #[default]
    All,
}

const PEDESTRIAN: u8 = 1;
const BICYCLE: u8 = 2;
const CAR: u8 = 4;

impl StreetTraversalPermission {
    pub fn code(&self) -> u8 {
        match self {
            StreetTraversalPermission::None => 0,
            StreetTraversalPermission::Pedestrian => PEDESTRIAN,
            StreetTraversalPermission::Bicycle => BICYCLE,
            StreetTraversalPermission::PedestrianAndBicycle => PEDESTRIAN | BICYCLE,
            StreetTraversalPermission::Car => CAR,
            StreetTraversalPermission::PedestrianAndCar => PEDESTRIAN | CAR,
            StreetTraversalPermission::BicycleAndCar => BICYCLE | CAR,
            StreetTraversalPermission::All => PEDESTRIAN | BICYCLE | CAR,
        }
    }

    pub fn from_code(code: u8) -> StreetTraversalPermission {
        match code & (PEDESTRIAN | BICYCLE | CAR) {
            0 => StreetTraversalPermission::None,
            PEDESTRIAN => StreetTraversalPermission::Pedestrian,
            BICYCLE => StreetTraversalPermission::Bicycle,
            3 => StreetTraversalPermission::PedestrianAndBicycle,
            CAR => StreetTraversalPermission::Car,
            5 => StreetTraversalPermission::PedestrianAndCar,
            6 => StreetTraversalPermission::BicycleAndCar,
            _ => StreetTraversalPermission::All,
        }
    }

    pub fn allows(&self, mode: TraverseMode) -> bool {
        let bit = match mode {
            TraverseMode::Walk => PEDESTRIAN,
            TraverseMode::Bicycle | TraverseMode::Scooter => BICYCLE,
            TraverseMode::Car => CAR,
        };
        self.code() & bit != 0
    }

    /// true if at least one mode in the set is allowed.
    pub fn allows_any(&self, modes: TraverseModeSet) -> bool {
        modes.modes().into_iter().any(|m| self.allows(m))
    }

    pub fn allows_nothing(&self) -> bool {
        *self == StreetTraversalPermission::None
    }

    pub fn add(&self, other: StreetTraversalPermission) -> StreetTraversalPermission {
        Self::from_code(self.code() | other.code())
    }

    pub fn remove(&self, other: StreetTraversalPermission) -> StreetTraversalPermission {
        Self::from_code(self.code() & !other.code())
    }

    pub fn intersection(&self, other: StreetTraversalPermission) -> StreetTraversalPermission {
        Self::from_code(self.code() & other.code())
    }
}
