use super::{
    TimeSlopeSafetyTriangle, VehicleParkingPreferences, VehicleRentalPreferences,
    VehicleRoutingOptimizeType,
};
use serde::{Deserialize, Serialize};

/// applies while a cyclist pushes the bicycle.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct BikeWalkingPreferences {
    /// meters per second
    pub speed: f64,
    pub reluctance: f64,
    /// seconds spent getting on or off the bicycle
    pub mount_dismount_time: f64,
    pub mount_dismount_cost: f64,
    /// multiplier for carrying the bicycle on stairs
    pub stairs_reluctance: f64,
}

impl Default for BikeWalkingPreferences {
    fn default() -> Self {
        BikeWalkingPreferences {
            speed: 1.33,
            reluctance: 5.0,
            mount_dismount_time: 0.0,
            mount_dismount_cost: 0.0,
            stairs_reluctance: 10.0,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct BikePreferences {
    /// riding speed in meters per second
    pub speed: f64,
    pub reluctance: f64,
    pub optimize_type: VehicleRoutingOptimizeType,
    /// only used with [`VehicleRoutingOptimizeType::Triangle`]
    pub optimize_triangle: TimeSlopeSafetyTriangle,
    pub walking: BikeWalkingPreferences,
    pub rental: VehicleRentalPreferences,
    pub parking: VehicleParkingPreferences,
}

impl Default for BikePreferences {
    fn default() -> Self {
        BikePreferences {
            speed: 5.0,
            reluctance: 2.0,
            optimize_type: VehicleRoutingOptimizeType::default(),
            optimize_triangle: TimeSlopeSafetyTriangle::default(),
            walking: BikeWalkingPreferences::default(),
            rental: VehicleRentalPreferences::default(),
            parking: VehicleParkingPreferences::default(),
        }
    }
}
