mod bike_preferences;
mod car_preferences;
mod elevator_preferences;
mod optimize_type;
mod preferences_error;
mod routing_preferences;
mod scooter_preferences;
mod street_preferences;
mod time_slope_safety_triangle;
mod vehicle_parking_preferences;
mod vehicle_rental_preferences;
mod walk_preferences;
mod wheelchair_preferences;

pub use bike_preferences::{BikePreferences, BikeWalkingPreferences};
pub use car_preferences::CarPreferences;
pub use elevator_preferences::ElevatorPreferences;
pub use optimize_type::VehicleRoutingOptimizeType;
pub use preferences_error::PreferencesError;
pub use routing_preferences::RoutingPreferences;
pub use scooter_preferences::ScooterPreferences;
pub use street_preferences::{DrivingDirection, IntersectionTraversalModel, StreetPreferences};
pub use time_slope_safety_triangle::TimeSlopeSafetyTriangle;
pub use vehicle_parking_preferences::VehicleParkingPreferences;
pub use vehicle_rental_preferences::VehicleRentalPreferences;
pub use walk_preferences::WalkPreferences;
pub use wheelchair_preferences::WheelchairPreferences;
