use super::{VehicleParkingPreferences, VehicleRentalPreferences};
use serde::{Deserialize, Serialize};

/// driving speed comes from each street, so only the reluctance is configured here.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct CarPreferences {
    pub reluctance: f64,
    pub rental: VehicleRentalPreferences,
    pub parking: VehicleParkingPreferences,
}

impl Default for CarPreferences {
    fn default() -> Self {
        CarPreferences {
            reluctance: 2.0,
            rental: VehicleRentalPreferences::default(),
            parking: VehicleParkingPreferences::default(),
        }
    }
}
