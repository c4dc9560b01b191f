use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct VehicleParkingPreferences {
    /// seconds spent parking or unparking
    pub time: f64,
    pub cost: f64,
    /// honour realtime space counts
    pub use_availability_information: bool,
}

impl Default for VehicleParkingPreferences {
    fn default() -> Self {
        VehicleParkingPreferences {
            time: 60.0,
            cost: 120.0,
            use_availability_information: false,
        }
    }
}
