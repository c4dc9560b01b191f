mod geofencing_zone;
mod rental_form_factor;
mod rental_restriction;
mod rental_restriction_extension;
mod rental_status;
mod vehicle_rental_place;
mod vehicle_rental_state;

pub use geofencing_zone::GeofencingZone;
pub use rental_form_factor::RentalFormFactor;
pub use rental_restriction::RentalRestriction;
pub use rental_restriction_extension::RentalRestrictionExtension;
pub use rental_status::RentalStatus;
pub use vehicle_rental_place::{VehicleRentalPlace, VehicleRentalStation, VehicleRentalVehicle};
pub use vehicle_rental_state::VehicleRentalState;
