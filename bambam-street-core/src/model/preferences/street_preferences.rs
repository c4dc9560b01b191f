use super::ElevatorPreferences;
use serde::{Deserialize, Serialize};

/// side of the road traffic drives on.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DrivingDirection {
    #[default]
    Right,
    Left,
}

/// cost model for turning at intersections.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum IntersectionTraversalModel {
    /// angle and traffic-light based
    #[default]
    Simple,
    /// the same number of seconds at every intersection
    Constant { seconds: f64 },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct StreetPreferences {
    /// multiplier applied to turn durations to produce weight
    pub turn_reluctance: f64,
    pub driving_direction: DrivingDirection,
    pub intersection_traversal_model: IntersectionTraversalModel,
    pub elevator: ElevatorPreferences,
}

impl Default for StreetPreferences {
    fn default() -> Self {
        StreetPreferences {
            turn_reluctance: 1.0,
            driving_direction: DrivingDirection::default(),
            intersection_traversal_model: IntersectionTraversalModel::default(),
            elevator: ElevatorPreferences::default(),
        }
    }
}
