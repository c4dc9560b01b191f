mod elevation_error;
mod elevation_profile;
mod slope_costs;
mod street_elevation_extension;
mod wheelchair_cost;

pub use elevation_error::ElevationError;
pub use elevation_profile::ElevationProfile;
pub use slope_costs::{slope_costs, slope_speed_coefficient, SlopeCosts};
pub use street_elevation_extension::StreetElevationExtension;
pub use wheelchair_cost::wheelchair_reluctance;
