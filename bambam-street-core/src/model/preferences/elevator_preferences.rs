use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ElevatorPreferences {
    /// cost of waiting for and entering an elevator
    pub board_cost: f64,
    /// seconds spent waiting for and entering an elevator
    pub board_time: f64,
    /// cost per level travelled when no travel time is known
    pub hop_cost: f64,
    /// seconds per level travelled when no travel time is known
    pub hop_time: f64,
    /// multiplier for a known elevator travel time
    pub reluctance: f64,
}

impl Default for ElevatorPreferences {
    fn default() -> Self {
        ElevatorPreferences {
            board_cost: 90.0,
            board_time: 90.0,
            hop_cost: 20.0,
            hop_time: 20.0,
            reluctance: 2.0,
        }
    }
}
