use serde::{Deserialize, Serialize};

/// progress of a traveler through a vehicle rental.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum VehicleRentalState {
    #[default]
    BeforeRenting,
    RentingFromStation,
    RentingFloating,
    HaveRented,
}

impl VehicleRentalState {
    pub fn is_renting(&self) -> bool {
        matches!(
            self,
            VehicleRentalState::RentingFromStation | VehicleRentalState::RentingFloating
        )
    }
}
