use super::{GeofencingZone, RentalStatus};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// a single rental rule attached to a vertex.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RentalRestriction {
    /// marks the edge of a network's operating area. vehicles of that network
    /// cannot be ridden across it.
    BusinessAreaBorder { network: String },
    GeofencingZone(GeofencingZone),
}

impl RentalRestriction {
    pub fn business_area_border(network: &str) -> RentalRestriction {
        RentalRestriction::BusinessAreaBorder {
            network: network.to_string(),
        }
    }

    pub fn network(&self) -> &str {
        match self {
            RentalRestriction::BusinessAreaBorder { network } => network,
            RentalRestriction::GeofencingZone(zone) => &zone.network,
        }
    }

    /// true if the state is renting a vehicle of this restriction's network
    fn applies_to(&self, state: &dyn RentalStatus) -> bool {
        state.is_renting_vehicle() && state.rental_network() == Some(self.network())
    }

    pub fn traversal_banned(&self, state: &dyn RentalStatus) -> bool {
        match self {
            RentalRestriction::BusinessAreaBorder { .. } => self.applies_to(state),
            RentalRestriction::GeofencingZone(zone) => {
                zone.traversal_banned && self.applies_to(state)
            }
        }
    }

    pub fn drop_off_banned(&self, state: &dyn RentalStatus) -> bool {
        match self {
            RentalRestriction::BusinessAreaBorder { .. } => false,
            RentalRestriction::GeofencingZone(zone) => {
                zone.drop_off_banned && self.applies_to(state)
            }
        }
    }

    pub fn no_drop_off_networks(&self) -> BTreeSet<String> {
        match self {
            RentalRestriction::GeofencingZone(zone) if zone.drop_off_banned => {
                BTreeSet::from([zone.network.clone()])
            }
            _ => BTreeSet::new(),
        }
    }
}

impl From<GeofencingZone> for RentalRestriction {
    fn from(value: GeofencingZone) -> Self {
        RentalRestriction::GeofencingZone(value)
    }
}
