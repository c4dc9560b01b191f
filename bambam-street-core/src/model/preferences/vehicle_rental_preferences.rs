use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct VehicleRentalPreferences {
    /// seconds spent unlocking a vehicle
    pub pickup_time: f64,
    pub pickup_cost: f64,
    /// seconds spent returning a vehicle
    pub drop_off_time: f64,
    pub drop_off_cost: f64,
    /// honour realtime vehicle and dock counts
    pub use_availability_information: bool,
    /// a station rental may be kept to the destination when the station permits it
    pub allow_arriving_in_rented_vehicle_at_destination: bool,
    /// if non-empty, only these networks are used
    pub allowed_networks: BTreeSet<String>,
    pub banned_networks: BTreeSet<String>,
}

impl VehicleRentalPreferences {
    pub fn allows_network(&self, network: &str) -> bool {
        let allowed = self.allowed_networks.is_empty() || self.allowed_networks.contains(network);
        allowed && !self.banned_networks.contains(network)
    }
}

impl Default for VehicleRentalPreferences {
    fn default() -> Self {
        VehicleRentalPreferences {
            pickup_time: 60.0,
            pickup_cost: 120.0,
            drop_off_time: 30.0,
            drop_off_cost: 30.0,
            use_availability_information: false,
            allow_arriving_in_rented_vehicle_at_destination: false,
            allowed_networks: BTreeSet::new(),
            banned_networks: BTreeSet::new(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_allows_network() {
        let mut prefs = VehicleRentalPreferences::default();
        assert!(prefs.allows_network("tier"));
        prefs.banned_networks.insert("tier".to_string());
        assert!(!prefs.allows_network("tier"));
        prefs.banned_networks.clear();
        prefs.allowed_networks.insert("bird".to_string());
        assert!(!prefs.allows_network("tier"));
        assert!(prefs.allows_network("bird"));
    }
}
