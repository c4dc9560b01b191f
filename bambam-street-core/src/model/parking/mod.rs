mod vehicle_parking;
mod vehicle_parking_entrance;

pub use vehicle_parking::{VehicleParking, VehicleParkingSpaces};
pub use vehicle_parking_entrance::VehicleParkingEntrance;
