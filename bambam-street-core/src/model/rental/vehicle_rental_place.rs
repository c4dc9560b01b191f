use super::RentalFormFactor;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// a docking station of a rental network.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct VehicleRentalStation {
    pub id: String,
    pub name: String,
    pub network: String,
    /// realtime count of vehicles available for pickup per form factor
    #[serde(default)]
    pub vehicles_available: BTreeMap<RentalFormFactor, u32>,
    /// realtime count of free docks per form factor
    #[serde(default)]
    pub spaces_available: BTreeMap<RentalFormFactor, u32>,
    /// form factors this station handles at all
    pub form_factors: BTreeSet<RentalFormFactor>,
    pub allow_pickup: bool,
    pub allow_drop_off: bool,
    /// vehicles may be returned even when no dock is free
    #[serde(default)]
    pub overloading_allowed: bool,
    /// a vehicle rented here may be kept when arriving at the destination
    #[serde(default)]
    pub arriving_in_rental_vehicle_at_destination_allowed: bool,
}

/// a free-floating rental vehicle parked on the street.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct VehicleRentalVehicle {
    pub id: String,
    pub network: String,
    pub form_factor: RentalFormFactor,
    #[serde(default)]
    pub is_reserved: bool,
    #[serde(default)]
    pub is_disabled: bool,
}

/// a place where a rental vehicle can be picked up or dropped off.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum VehicleRentalPlace {
    Station(VehicleRentalStation),
    FreeFloating(VehicleRentalVehicle),
}

impl VehicleRentalPlace {
    pub fn id(&self) -> &str {
        match self {
            VehicleRentalPlace::Station(s) => &s.id,
            VehicleRentalPlace::FreeFloating(v) => &v.id,
        }
    }

    pub fn network(&self) -> &str {
        match self {
            VehicleRentalPlace::Station(s) => &s.network,
            VehicleRentalPlace::FreeFloating(v) => &v.network,
        }
    }

    pub fn is_floating_vehicle(&self) -> bool {
        matches!(self, VehicleRentalPlace::FreeFloating(_))
    }

    pub fn allow_pickup_now(&self) -> bool {
        match self {
            VehicleRentalPlace::Station(s) => s.allow_pickup,
            VehicleRentalPlace::FreeFloating(v) => !v.is_reserved && !v.is_disabled,
        }
    }

    pub fn allow_drop_off_now(&self) -> bool {
        match self {
            VehicleRentalPlace::Station(s) => s.allow_drop_off,
            VehicleRentalPlace::FreeFloating(_) => false,
        }
    }

    pub fn overloading_allowed(&self) -> bool {
        match self {
            VehicleRentalPlace::Station(s) => s.overloading_allowed,
            VehicleRentalPlace::FreeFloating(_) => false,
        }
    }

    pub fn is_arriving_in_rental_vehicle_at_destination_allowed(&self) -> bool {
        match self {
            VehicleRentalPlace::Station(s) => s.arriving_in_rental_vehicle_at_destination_allowed,
            VehicleRentalPlace::FreeFloating(_) => false,
        }
    }

    /// form factors that can be picked up here. with `realtime` only those
    /// with at least one vehicle on hand are returned.
    pub fn available_pickup_form_factors(&self, realtime: bool) -> BTreeSet<RentalFormFactor> {
        match self {
            VehicleRentalPlace::Station(s) if realtime => s
                .vehicles_available
                .iter()
                .filter(|(_, count)| **count > 0)
                .map(|(ff, _)| *ff)
                .collect(),
            VehicleRentalPlace::Station(s) => s.form_factors.clone(),
            VehicleRentalPlace::FreeFloating(v) => BTreeSet::from([v.form_factor]),
        }
    }

    /// form factors that can be dropped off here. with `realtime` only those
    /// with a free dock are returned, unless the station accepts overloading.
    pub fn available_drop_off_form_factors(&self, realtime: bool) -> BTreeSet<RentalFormFactor> {
        match self {
            VehicleRentalPlace::Station(s) if realtime && !s.overloading_allowed => s
                .spaces_available
                .iter()
                .filter(|(_, count)| **count > 0)
                .map(|(ff, _)| *ff)
                .collect(),
            VehicleRentalPlace::Station(s) => s.form_factors.clone(),
            VehicleRentalPlace::FreeFloating(_) => BTreeSet::new(),
        }
    }
}
