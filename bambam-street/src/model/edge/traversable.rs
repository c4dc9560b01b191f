use super::TraversalError;
use crate::model::graph::{Edge, EdgeKind, Graph, GraphError, Vertex};
use crate::model::state::State;
use std::sync::Arc;

/// everything an edge may read while being traversed.
#[derive(Clone, Copy, Debug)]
pub struct EdgeContext<'a> {
    pub graph: &'a Graph,
    pub edge: &'a Edge,
    pub from: &'a Vertex,
    pub to: &'a Vertex,
}

impl<'a> EdgeContext<'a> {
    pub fn new(graph: &'a Graph, edge: &'a Edge) -> Result<EdgeContext<'a>, GraphError> {
        Ok(EdgeContext {
            graph,
            edge,
            from: graph.vertex(edge.from)?,
            to: graph.vertex(edge.to)?,
        })
    }

    /// the edge the state arrived by, if any.
    pub fn back_edge(&self, s0: &State) -> Result<Option<&'a Edge>, GraphError> {
        s0.back_edge().map(|id| self.graph.edge(id)).transpose()
    }
}

/// the transition function of an edge variant.
pub trait Traversable {
    /// # Arguments
    ///
    /// * `ctx` - the graph, the edge and its endpoints
    /// * `s0` - a state at the entry vertex of the edge for the search direction
    ///
    /// # Returns
    ///
    /// the successor states. empty if the edge cannot be used from `s0`; more than
    /// one when the traveler may continue in different situations.
    fn traverse(&self, ctx: &EdgeContext, s0: &Arc<State>) -> Result<Vec<State>, TraversalError>;
}

impl Traversable for EdgeKind {
    fn traverse(&self, ctx: &EdgeContext, s0: &Arc<State>) -> Result<Vec<State>, TraversalError> {
        match self {
            EdgeKind::Street(e) => e.traverse(ctx, s0),
            EdgeKind::Area(e) => e.traverse(ctx, s0),
            EdgeKind::Pathway(e) => e.traverse(ctx, s0),
            EdgeKind::ElevatorBoard(e) => e.traverse(ctx, s0),
            EdgeKind::ElevatorHop(e) => e.traverse(ctx, s0),
            EdgeKind::ElevatorAlight(e) => e.traverse(ctx, s0),
            EdgeKind::Escalator(e) => e.traverse(ctx, s0),
            EdgeKind::StreetTransitStopLink(e) => e.traverse(ctx, s0),
            EdgeKind::StreetVehicleParkingLink(e) => e.traverse(ctx, s0),
            EdgeKind::VehicleParking(e) => e.traverse(ctx, s0),
            EdgeKind::StreetVehicleRentalLink(e) => e.traverse(ctx, s0),
            EdgeKind::VehicleRental(e) => e.traverse(ctx, s0),
            EdgeKind::Free(e) => e.traverse(ctx, s0),
        }
    }
}
