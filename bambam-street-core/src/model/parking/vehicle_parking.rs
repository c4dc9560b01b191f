use crate::model::mode::TraverseMode;
use serde::{Deserialize, Serialize};

/// number of free spaces per vehicle class.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct VehicleParkingSpaces {
    pub bicycle_spaces: u32,
    pub car_spaces: u32,
    pub wheelchair_accessible_car_spaces: u32,
}

/// a park-and-ride facility for bicycles and/or cars.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct VehicleParking {
    pub id: String,
    pub name: String,
    pub bicycle_places: bool,
    pub car_places: bool,
    pub wheelchair_accessible_car_places: bool,
    /// realtime free spaces, when the operator publishes them
    #[serde(default)]
    pub availability: Option<VehicleParkingSpaces>,
}

impl VehicleParking {
    /// whether a vehicle of the given mode can be parked here. realtime counts are
    /// only consulted when `use_availability` is set and the facility publishes them.
    pub fn has_spaces_available(
        &self,
        mode: TraverseMode,
        wheelchair: bool,
        use_availability: bool,
    ) -> bool {
        let realtime = self.availability.filter(|_| use_availability);
        match (mode, realtime) {
            (TraverseMode::Bicycle, Some(a)) => a.bicycle_spaces > 0,
            (TraverseMode::Bicycle, None) => self.bicycle_places,
            (TraverseMode::Car, Some(a)) if wheelchair => a.wheelchair_accessible_car_spaces > 0,
            (TraverseMode::Car, None) if wheelchair => self.wheelchair_accessible_car_places,
            (TraverseMode::Car, Some(a)) => a.car_spaces > 0,
            (TraverseMode::Car, None) => self.car_places,
            _ => false,
        }
    }
}
