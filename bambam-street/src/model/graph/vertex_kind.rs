use bambam_street_core::model::{
    accessibility::Accessibility, mode::StreetTraversalPermission,
    parking::VehicleParkingEntrance, rental::VehicleRentalPlace,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// a transit stop that street traffic can link into.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TransitStopVertex {
    pub stop_id: String,
    pub wheelchair_accessibility: Accessibility,
    /// seconds needed to get from the street onto the platform
    pub street_to_stop_time: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum VertexKind {
    /// a street intersection
    Intersection {
        highway_traffic_light: bool,
        crosswalk_traffic_light: bool,
        /// traffic passes without slowing, regardless of geometry
        free_flowing: bool,
    },
    /// created by a permanent edge split
    Splitter,
    /// created by a request-scoped edge split
    TemporarySplitter,
    /// origin or destination of a request
    TemporaryLocation { is_end: bool },
    /// a gate, bollard or similar that restricts who may pass
    Barrier { permission: StreetTraversalPermission },
    TransitStop(TransitStopVertex),
    VehicleRentalPlace(Arc<VehicleRentalPlace>),
    VehicleParkingEntrance(VehicleParkingEntrance),
    /// inside an elevator car, shared by every level it serves
    ElevatorOnboard,
    /// an elevator door on one level
    ElevatorOffboard,
}

impl VertexKind {
    pub fn intersection() -> VertexKind {
        VertexKind::Intersection {
            highway_traffic_light: false,
            crosswalk_traffic_light: false,
            free_flowing: false,
        }
    }

    pub fn is_temporary(&self) -> bool {
        matches!(
            self,
            VertexKind::TemporarySplitter | VertexKind::TemporaryLocation { .. }
        )
    }
}
