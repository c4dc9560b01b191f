use serde::{Deserialize, Serialize};

/// a way into a parking facility, attached to the street graph.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct VehicleParkingEntrance {
    pub id: String,
    /// id of the parking facility this entrance belongs to
    pub parking_id: String,
    pub walk_accessible: bool,
    pub car_accessible: bool,
}
