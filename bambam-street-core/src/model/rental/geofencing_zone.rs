use serde::{Deserialize, Serialize};

/// an operator-defined area with rules for vehicles of one rental network.
/// the polygon itself is only needed while attaching the zone to a graph,
/// so it is not carried here.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GeofencingZone {
    pub id: String,
    pub network: String,
    /// vehicles of this network may not be dropped off inside the zone
    pub drop_off_banned: bool,
    /// vehicles of this network may not be ridden through the zone
    pub traversal_banned: bool,
}

impl GeofencingZone {
    pub fn new(
        id: &str,
        network: &str,
        drop_off_banned: bool,
        traversal_banned: bool,
    ) -> GeofencingZone {
        GeofencingZone {
            id: id.to_string(),
            network: network.to_string(),
            drop_off_banned,
            traversal_banned,
        }
    }

    pub fn has_restriction(&self) -> bool {
        self.drop_off_banned || self.traversal_banned
    }
}
