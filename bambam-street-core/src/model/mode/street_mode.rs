use super::TraverseMode;
use crate::model::rental::RentalFormFactor;
use serde::{Deserialize, Serialize};

/// the street mode requested by the traveler for a search. a single request
/// mode may imply several traverse modes over the course of a path, for
/// example walking to a rental bicycle and riding it.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum StreetMode {
    #[default]
    Walk,
    Bike,
    BikeToPark,
    BikeRental,
    ScooterRental,
    Car,
    CarToPark,
    CarRental,
}

impl StreetMode {
    pub fn includes_walking(&self) -> bool {
        // every mode can at least walk to and from a vehicle
        true
    }

    pub fn includes_biking(&self) -> bool {
        matches!(
            self,
            StreetMode::Bike | StreetMode::BikeToPark | StreetMode::BikeRental
        )
    }

    pub fn includes_scooter(&self) -> bool {
        matches!(self, StreetMode::ScooterRental)
    }

    pub fn includes_driving(&self) -> bool {
        matches!(
            self,
            StreetMode::Car | StreetMode::CarToPark | StreetMode::CarRental
        )
    }

    pub fn includes_renting(&self) -> bool {
        matches!(
            self,
            StreetMode::BikeRental | StreetMode::ScooterRental | StreetMode::CarRental
        )
    }

    pub fn includes_parking(&self) -> bool {
        matches!(self, StreetMode::BikeToPark | StreetMode::CarToPark)
    }

    /// the vehicle a rental request is looking for.
    pub fn rental_form_factor(&self) -> Option<RentalFormFactor> {
        match self {
            StreetMode::BikeRental => Some(RentalFormFactor::Bicycle),
            StreetMode::ScooterRental => Some(RentalFormFactor::Scooter),
            StreetMode::CarRental => Some(RentalFormFactor::Car),
            _ => None,
        }
    }

    /// the traverse mode a search in this mode begins with when it is not
    /// renting and not yet parked.
    pub fn base_traverse_mode(&self) -> TraverseMode {
        match self {
            StreetMode::Car | StreetMode::CarToPark => TraverseMode::Car,
            StreetMode::Bike | StreetMode::BikeToPark => TraverseMode::Bicycle,
            _ => TraverseMode::Walk,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_predicates() {
        assert!(StreetMode::ScooterRental.includes_renting());
        assert!(StreetMode::ScooterRental.includes_scooter());
        assert!(!StreetMode::ScooterRental.includes_biking());
        assert!(StreetMode::BikeToPark.includes_parking());
        assert!(StreetMode::BikeToPark.includes_biking());
        assert!(StreetMode::CarRental.includes_driving());
        assert!(!StreetMode::Walk.includes_renting());
        assert_eq!(
            StreetMode::ScooterRental.rental_form_factor(),
            Some(RentalFormFactor::Scooter)
        );
        assert_eq!(StreetMode::CarToPark.base_traverse_mode(), TraverseMode::Car);
        assert_eq!(StreetMode::BikeRental.base_traverse_mode(), TraverseMode::Walk);
    }
}
