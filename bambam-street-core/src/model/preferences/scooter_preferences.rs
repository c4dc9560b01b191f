use super::{TimeSlopeSafetyTriangle, VehicleRentalPreferences, VehicleRoutingOptimizeType};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ScooterPreferences {
    /// meters per second
    pub speed: f64,
    pub reluctance: f64,
    pub optimize_type: VehicleRoutingOptimizeType,
    pub optimize_triangle: TimeSlopeSafetyTriangle,
    pub rental: VehicleRentalPreferences,
}

impl Default for ScooterPreferences {
    fn default() -> Self {
        ScooterPreferences {
            speed: 5.0,
            reluctance: 2.0,
            optimize_type: VehicleRoutingOptimizeType::default(),
            optimize_triangle: TimeSlopeSafetyTriangle::default(),
            rental: VehicleRentalPreferences::default(),
        }
    }
}
