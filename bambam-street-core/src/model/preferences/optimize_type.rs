use serde::{Deserialize, Serialize};

/// how bicycle and scooter traversal weighs an edge.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum VehicleRoutingOptimizeType {
    /// travel time only, slope-adjusted
    ShortestDuration,
    /// slope-adjusted safety distance
    #[default]
    SafeStreets,
    /// raw safety factor times length, with a bonus for dedicated infrastructure
    SafestStreets,
    /// energy spent climbing
    FlatStreets,
    /// weighted blend of time, slope and safety
    Triangle,
}
