mod area_edge;
mod elevator_edge;
mod escalator_edge;
mod free_edge;
mod pathway_edge;
mod street_edge;
mod street_edge_builder;
mod street_edge_traversal;
mod street_transit_stop_link;
mod street_vehicle_parking_link;
mod street_vehicle_rental_link;
mod traversable;
mod traversal_error;
mod vehicle_parking_edge;
mod vehicle_rental_edge;

#[cfg(test)]
mod test_util;

pub use area_edge::AreaEdge;
pub use elevator_edge::{ElevatorAlightEdge, ElevatorBoardEdge, ElevatorHopEdge};
pub use escalator_edge::EscalatorEdge;
pub use free_edge::FreeEdge;
pub use pathway_edge::PathwayEdge;
pub use street_edge::StreetEdge;
pub use street_edge_builder::StreetEdgeBuilder;
pub use street_transit_stop_link::StreetTransitStopLink;
pub use street_vehicle_parking_link::StreetVehicleParkingLink;
pub use street_vehicle_rental_link::StreetVehicleRentalLink;
pub use traversable::{EdgeContext, Traversable};
pub use traversal_error::TraversalError;
pub use vehicle_parking_edge::VehicleParkingEdge;
pub use vehicle_rental_edge::VehicleRentalEdge;
