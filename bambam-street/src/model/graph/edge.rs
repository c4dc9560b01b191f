use super::{EdgeId, VertexId};
use crate::model::edge::{
    AreaEdge, ElevatorAlightEdge, ElevatorBoardEdge, ElevatorHopEdge, EscalatorEdge, FreeEdge,
    PathwayEdge, StreetEdge, StreetTransitStopLink, StreetVehicleParkingLink,
    StreetVehicleRentalLink, VehicleParkingEdge, VehicleRentalEdge,
};

/// the closed catalogue of edge variants.
#[derive(Clone, Debug)]
pub enum EdgeKind {
    Street(StreetEdge),
    Area(AreaEdge),
    Pathway(PathwayEdge),
    ElevatorBoard(ElevatorBoardEdge),
    ElevatorHop(ElevatorHopEdge),
    ElevatorAlight(ElevatorAlightEdge),
    Escalator(EscalatorEdge),
    StreetTransitStopLink(StreetTransitStopLink),
    StreetVehicleParkingLink(StreetVehicleParkingLink),
    VehicleParking(VehicleParkingEdge),
    StreetVehicleRentalLink(StreetVehicleRentalLink),
    VehicleRental(VehicleRentalEdge),
    Free(FreeEdge),
}

/// a directed connection between two vertices.
#[derive(Clone, Debug)]
pub struct Edge {
    pub id: EdgeId,
    pub from: VertexId,
    pub to: VertexId,
    pub kind: EdgeKind,
}

impl Edge {
    /// the street part of street and area edges.
    pub fn street(&self) -> Option<&StreetEdge> {
        match &self.kind {
            EdgeKind::Street(s) => Some(s),
            EdgeKind::Area(a) => Some(&a.street),
            _ => None,
        }
    }

    pub(crate) fn street_mut(&mut self) -> Option<&mut StreetEdge> {
        match &mut self.kind {
            EdgeKind::Street(s) => Some(s),
            EdgeKind::Area(a) => Some(&mut a.street),
            _ => None,
        }
    }

    /// the permanent edge a temporary partial street edge was cut from.
    pub fn parent(&self) -> Option<EdgeId> {
        self.street().and_then(|s| s.parent())
    }

    pub fn name(&self) -> &str {
        match &self.kind {
            EdgeKind::Street(s) => s.name(),
            EdgeKind::Area(a) => &a.area_name,
            EdgeKind::Pathway(p) => &p.name,
            _ => "",
        }
    }

    pub(crate) fn is_transit_stop_link(&self) -> bool {
        matches!(self.kind, EdgeKind::StreetTransitStopLink(_))
    }

    pub(crate) fn is_vehicle_parking_link(&self) -> bool {
        matches!(self.kind, EdgeKind::StreetVehicleParkingLink(_))
    }

    pub(crate) fn is_vehicle_rental_link(&self) -> bool {
        matches!(self.kind, EdgeKind::StreetVehicleRentalLink(_))
    }
}
