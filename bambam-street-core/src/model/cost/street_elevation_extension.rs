use super::{slope_costs, ElevationError, ElevationProfile};
use serde::{Deserialize, Serialize};

/// slope-adjusted distances of a street, precomputed once when the
/// elevation profile is attached.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StreetElevationExtension {
    profile: ElevationProfile,
    distance_meters: f64,
    effective_bicycle_safety_distance: f64,
    effective_bike_distance: f64,
    effective_bike_work_distance: f64,
    effective_walk_distance: f64,
    effective_walk_safety_distance: f64,
    distance_with_elevation: f64,
    max_slope: f64,
    flattened: bool,
}

impl StreetElevationExtension {
    /// # Arguments
    ///
    /// * `distance_meters` - flat length of the street
    /// * `bicycle_safety_factor` - street bicycle safety multiplier
    /// * `walk_safety_factor` - street walk safety multiplier
    /// * `profile` - elevation samples along the street
    /// * `slope_limit` - treat slopes over 35% as bad data (the street allows cars)
    ///
    /// # Returns
    ///
    /// the extension, or an error if the profile has no horizontal extent
    pub fn new(
        distance_meters: f64,
        bicycle_safety_factor: f64,
        walk_safety_factor: f64,
        profile: ElevationProfile,
        slope_limit: bool,
    ) -> Result<StreetElevationExtension, ElevationError> {
        if profile.flat_length() < 1e-3 {
            return Err(ElevationError::DegenerateProfile(format!(
                "flat length {} of profile is too short",
                profile.flat_length()
            )));
        }
        let costs = slope_costs(&profile, slope_limit);
        let distance_with_elevation = distance_meters * costs.length_multiplier;
        let effective_walk_distance = distance_meters * costs.effective_walk_factor;
        Ok(StreetElevationExtension {
            distance_meters,
            effective_bicycle_safety_distance: bicycle_safety_factor * distance_with_elevation
                + costs.slope_safety_cost,
            effective_bike_distance: distance_meters * costs.slope_speed_factor,
            effective_bike_work_distance: distance_meters * costs.slope_work_factor,
            effective_walk_distance,
            effective_walk_safety_distance: walk_safety_factor * effective_walk_distance,
            distance_with_elevation,
            max_slope: costs.max_slope,
            flattened: costs.flattened,
            profile,
        })
    }

    pub fn profile(&self) -> &ElevationProfile {
        &self.profile
    }

    pub fn distance_meters(&self) -> f64 {
        self.distance_meters
    }

    pub fn effective_bicycle_safety_distance(&self) -> f64 {
        self.effective_bicycle_safety_distance
    }

    pub fn effective_bike_distance(&self) -> f64 {
        self.effective_bike_distance
    }

    pub fn effective_bike_work_distance(&self) -> f64 {
        self.effective_bike_work_distance
    }

    pub fn effective_walk_distance(&self) -> f64 {
        self.effective_walk_distance
    }

    pub fn effective_walk_safety_distance(&self) -> f64 {
        self.effective_walk_safety_distance
    }

    pub fn distance_with_elevation(&self) -> f64 {
        self.distance_with_elevation
    }

    pub fn max_slope(&self) -> f64 {
        self.max_slope
    }

    pub fn flattened(&self) -> bool {
        self.flattened
    }
}
