use crate::model::graph::{EdgeId, Graph};
use crate::model::restriction::{TurnRestriction, TurnRestrictionType};
use bambam_street_core::model::cost::StreetElevationExtension;
use bambam_street_core::model::mode::{StreetTraversalPermission, TraverseMode};
use bambam_street_core::model::preferences::RoutingPreferences;
use bambam_street_core::util::geo_utils;
use chrono::{DateTime, Utc};
use geo::LineString;
use uom::si::f64::Length;
use uom::si::length::meter;

/// boolean attributes of a street.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StreetEdgeFlags {
    pub stairs: bool,
    /// the reverse direction of a two-way street
    pub back: bool,
    pub wheelchair_accessible: bool,
    /// ignore the elevation profile, for bridges and tunnels
    pub slope_override: bool,
    pub roundabout: bool,
    pub walk_no_thru_traffic: bool,
    pub bicycle_no_thru_traffic: bool,
    pub motor_vehicle_no_thru_traffic: bool,
}

/// a directed street segment. built with [`super::StreetEdgeBuilder`].
#[derive(Clone, Debug)]
pub struct StreetEdge {
    pub(crate) name: String,
    pub(crate) geometry: LineString<f64>,
    pub(crate) length_mm: i64,
    pub(crate) permission: StreetTraversalPermission,
    /// meters per second
    pub(crate) car_speed: f64,
    pub(crate) walk_safety_factor: f64,
    pub(crate) bicycle_safety_factor: f64,
    pub(crate) flags: StreetEdgeFlags,
    /// encoded azimuth at the start of the geometry
    pub(crate) in_angle: i8,
    /// encoded azimuth at the end of the geometry
    pub(crate) out_angle: i8,
    pub(crate) elevation: Option<StreetElevationExtension>,
    /// set on temporary pieces of a split permanent edge
    pub(crate) parent: Option<EdgeId>,
    pub(crate) turn_restrictions: Vec<TurnRestriction>,
}

impl StreetEdge {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn geometry(&self) -> &LineString<f64> {
        &self.geometry
    }

    pub fn parent(&self) -> Option<EdgeId> {
        self.parent
    }

    pub fn turn_restrictions(&self) -> &[TurnRestriction] {
        &self.turn_restrictions
    }

    pub fn permission(&self) -> StreetTraversalPermission {
        self.permission
    }

    pub fn flags(&self) -> StreetEdgeFlags {
        self.flags
    }

    pub fn length_millimeters(&self) -> i64 {
        self.length_mm
    }

    pub fn distance_meters(&self) -> f64 {
        self.length_mm as f64 / 1000.0
    }

    pub fn distance(&self) -> Length {
        Length::new::<meter>(self.distance_meters())
    }

    pub fn car_speed(&self) -> f64 {
        self.car_speed
    }

    pub fn walk_safety_factor(&self) -> f64 {
        self.walk_safety_factor
    }

    pub fn bicycle_safety_factor(&self) -> f64 {
        self.bicycle_safety_factor
    }

    pub fn is_stairs(&self) -> bool {
        self.flags.stairs
    }

    pub fn is_back(&self) -> bool {
        self.flags.back
    }

    pub fn is_wheelchair_accessible(&self) -> bool {
        self.flags.wheelchair_accessible
    }

    pub fn is_roundabout(&self) -> bool {
        self.flags.roundabout
    }

    /// degrees within [-180, 180) at the start of the street
    pub fn in_angle(&self) -> i32 {
        geo_utils::brads_to_degrees(self.in_angle)
    }

    /// degrees within [-180, 180) at the end of the street
    pub fn out_angle(&self) -> i32 {
        geo_utils::brads_to_degrees(self.out_angle)
    }

    /// the elevation extension, unless slopes are overridden for this street.
    pub fn elevation(&self) -> Option<&StreetElevationExtension> {
        if self.flags.slope_override {
            None
        } else {
            self.elevation.as_ref()
        }
    }

    pub(crate) fn raw_elevation(&self) -> Option<&StreetElevationExtension> {
        self.elevation.as_ref()
    }

    pub fn effective_bike_distance(&self) -> f64 {
        self.elevation()
            .map(|e| e.effective_bike_distance())
            .unwrap_or_else(|| self.distance_meters())
    }

    pub fn effective_bike_work_distance(&self) -> f64 {
        self.elevation()
            .map(|e| e.effective_bike_work_distance())
            .unwrap_or_else(|| self.distance_meters())
    }

    pub fn effective_bicycle_safety_distance(&self) -> f64 {
        self.elevation()
            .map(|e| e.effective_bicycle_safety_distance())
            .unwrap_or_else(|| self.bicycle_safety_factor * self.distance_meters())
    }

    pub fn effective_walk_distance(&self) -> f64 {
        self.elevation()
            .map(|e| e.effective_walk_distance())
            .unwrap_or_else(|| self.distance_meters())
    }

    pub fn effective_walk_safety_distance(&self) -> f64 {
        self.elevation()
            .map(|e| e.effective_walk_safety_distance())
            .unwrap_or_else(|| self.walk_safety_factor * self.distance_meters())
    }

    pub fn distance_with_elevation(&self) -> f64 {
        self.elevation()
            .map(|e| e.distance_with_elevation())
            .unwrap_or_else(|| self.distance_meters())
    }

    pub fn max_slope(&self) -> f64 {
        self.elevation().map(|e| e.max_slope()).unwrap_or(0.0)
    }

    pub fn can_traverse(&self, mode: TraverseMode) -> bool {
        self.permission.allows(mode)
    }

    pub fn is_no_thru_traffic(&self, mode: TraverseMode) -> bool {
        match mode {
            TraverseMode::Walk => self.flags.walk_no_thru_traffic,
            TraverseMode::Bicycle | TraverseMode::Scooter => self.flags.bicycle_no_thru_traffic,
            TraverseMode::Car => self.flags.motor_vehicle_no_thru_traffic,
        }
    }

    /// meters per second on this street. stairs slow every mode down by the
    /// stairs time factor.
    pub fn calculate_speed(
        &self,
        preferences: &RoutingPreferences,
        mode: TraverseMode,
        walking_bike: bool,
    ) -> f64 {
        let speed = match mode {
            TraverseMode::Walk if walking_bike => preferences.bike.walking.speed,
            TraverseMode::Walk => preferences.walk.speed,
            TraverseMode::Bicycle => preferences.bike.speed,
            TraverseMode::Scooter => preferences.scooter.speed,
            TraverseMode::Car => self.car_speed,
        };
        if self.is_stairs() {
            speed / preferences.walk.stairs_time_factor
        } else {
            speed
        }
    }

    /// true if no active turn restriction of this street forbids continuing onto `target`.
    pub fn can_turn_onto(
        &self,
        graph: &Graph,
        target: EdgeId,
        mode: TraverseMode,
        time: &DateTime<Utc>,
    ) -> bool {
        self.turn_restrictions
            .iter()
            .filter(|r| r.applies(mode, time))
            .all(|r| {
                let equivalent = graph.is_equivalent(target, r.to);
                match r.restriction_type {
                    TurnRestrictionType::OnlyTurn => equivalent,
                    TurnRestrictionType::NoTurn => !equivalent,
                }
            })
    }
}
