use crate::model::mode::TraverseMode;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// the physical kind of a rental vehicle.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum RentalFormFactor {
    Bicycle,
    CargoBicycle,
    Car,
    Moped,
    Scooter,
    ScooterStanding,
    ScooterSeated,
    Other,
}

impl RentalFormFactor {
    /// the traverse mode used while riding a vehicle of this form factor.
    pub fn traverse_mode(&self) -> TraverseMode {
        match self {
            RentalFormFactor::Bicycle | RentalFormFactor::CargoBicycle | RentalFormFactor::Other => {
                TraverseMode::Bicycle
            }
            RentalFormFactor::Car => TraverseMode::Car,
            RentalFormFactor::Moped
            | RentalFormFactor::Scooter
            | RentalFormFactor::ScooterStanding
            | RentalFormFactor::ScooterSeated => TraverseMode::Scooter,
        }
    }
}

impl Display for RentalFormFactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RentalFormFactor::Bicycle => "bicycle",
            RentalFormFactor::CargoBicycle => "cargo_bicycle",
            RentalFormFactor::Car => "car",
            RentalFormFactor::Moped => "moped",
            RentalFormFactor::Scooter => "scooter",
            RentalFormFactor::ScooterStanding => "scooter_standing",
            RentalFormFactor::ScooterSeated => "scooter_seated",
            RentalFormFactor::Other => "other",
        };
        write!(f, "{s}")
    }
}
