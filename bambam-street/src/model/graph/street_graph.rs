use super::{Edge, EdgeId, EdgeKind, GraphError, Vertex, VertexId, VertexKind};
use crate::model::edge::{EdgeContext, StreetEdge, Traversable, TraversalError};
use crate::model::restriction::TurnRestriction;
use crate::model::state::State;
use bambam_street_core::model::rental::RentalRestrictionExtension;
use geo::Coord;
use std::sync::Arc;

/// arena of vertices and edges. handles stay valid for the lifetime of the
/// element they point to; removed slots are never reused.
///
/// mutation requires `&mut Graph`, so a graph shared across threads by
/// reference is frozen and safe to traverse concurrently.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    vertices: Vec<Option<Vertex>>,
    edges: Vec<Option<Edge>>,
}

impl Graph {
    pub fn new() -> Graph {
        Graph::default()
    }

    pub fn add_vertex(&mut self, label: &str, coordinate: Coord<f64>, kind: VertexKind) -> VertexId {
        let id = VertexId(self.vertices.len());
        self.vertices
            .push(Some(Vertex::new(id, label, coordinate, kind)));
        id
    }

    pub fn vertex(&self, id: VertexId) -> Result<&Vertex, GraphError> {
        self.vertices
            .get(id.0)
            .and_then(|v| v.as_ref())
            .ok_or(GraphError::VertexNotFound(id))
    }

    pub fn vertex_mut(&mut self, id: VertexId) -> Result<&mut Vertex, GraphError> {
        self.vertices
            .get_mut(id.0)
            .and_then(|v| v.as_mut())
            .ok_or(GraphError::VertexNotFound(id))
    }

    pub fn edge(&self, id: EdgeId) -> Result<&Edge, GraphError> {
        self.edges
            .get(id.0)
            .and_then(|e| e.as_ref())
            .ok_or(GraphError::EdgeNotFound(id))
    }

    pub fn edge_mut(&mut self, id: EdgeId) -> Result<&mut Edge, GraphError> {
        self.edges
            .get_mut(id.0)
            .and_then(|e| e.as_mut())
            .ok_or(GraphError::EdgeNotFound(id))
    }

    pub fn street_edge(&self, id: EdgeId) -> Result<&StreetEdge, GraphError> {
        self.edge(id)?.street().ok_or(GraphError::NotAStreetEdge(id))
    }

    pub(crate) fn street_edge_mut(&mut self, id: EdgeId) -> Result<&mut StreetEdge, GraphError> {
        self.edge_mut(id)?
            .street_mut()
            .ok_or(GraphError::NotAStreetEdge(id))
    }

    pub fn contains_edge(&self, id: EdgeId) -> bool {
        self.edge(id).is_ok()
    }

    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.vertex(id).is_ok()
    }

    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.iter().flatten()
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter().flatten()
    }

    pub fn n_vertices(&self) -> usize {
        self.vertices().count()
    }

    pub fn n_edges(&self) -> usize {
        self.edges().count()
    }

    /// adds an edge and wires it into the outgoing list of `from` and the
    /// incoming list of `to`. this is the only way edges enter the graph.
    pub fn build_and_connect(
        &mut self,
        from: VertexId,
        to: VertexId,
        kind: EdgeKind,
    ) -> Result<EdgeId, GraphError> {
        self.vertex(from)?;
        self.vertex(to)?;
        let id = EdgeId(self.edges.len());
        self.edges.push(Some(Edge { id, from, to, kind }));
        self.vertex_mut(from)?.outgoing.push(id);
        self.vertex_mut(to)?.incoming.push(id);
        Ok(id)
    }

    /// detaches an edge from both endpoints and drops every turn restriction
    /// that leads onto it. the edge's own restrictions leave with it.
    pub fn remove_edge(&mut self, id: EdgeId) -> Result<Edge, GraphError> {
        let (from, to) = {
            let edge = self.edge(id)?;
            (edge.from, edge.to)
        };
        let incoming_to_from = self.vertex(from)?.incoming.clone();
        for upstream in incoming_to_from {
            if let Some(street) = self.edge_mut(upstream)?.street_mut() {
                street.turn_restrictions.retain(|r| r.to != id);
            }
        }
        self.vertex_mut(from)?.outgoing.retain(|e| *e != id);
        self.vertex_mut(to)?.incoming.retain(|e| *e != id);
        let removed = self
            .edges
            .get_mut(id.0)
            .and_then(|e| e.take())
            .ok_or(GraphError::EdgeNotFound(id))?;
        log::debug!("removed edge {id} from {from} to {to}");
        Ok(removed)
    }

    /// removes a vertex that no longer has any edges. returns false if it is still connected.
    pub fn remove_vertex_if_unconnected(&mut self, id: VertexId) -> Result<bool, GraphError> {
        if self.vertex(id)?.degree() > 0 {
            return Ok(false);
        }
        if let Some(slot) = self.vertices.get_mut(id.0) {
            *slot = None;
        }
        Ok(true)
    }

    /// attaches a turn restriction to its `from` edge. both edges must be street
    /// edges meeting at a common vertex.
    pub fn add_turn_restriction(&mut self, restriction: TurnRestriction) -> Result<(), GraphError> {
        let from = self.edge(restriction.from)?;
        let to = self.edge(restriction.to)?;
        if from.street().is_none() {
            return Err(GraphError::NotAStreetEdge(restriction.from));
        }
        if to.street().is_none() {
            return Err(GraphError::NotAStreetEdge(restriction.to));
        }
        if from.to != to.from {
            return Err(GraphError::InvalidEdge(format!(
                "turn restriction from {} to {} does not share a vertex",
                restriction.from, restriction.to
            )));
        }
        self.street_edge_mut(restriction.from)?
            .turn_restrictions
            .push(restriction);
        Ok(())
    }

    /// removes one copy of the restriction, so each add is undone by one remove.
    /// returns true if the restriction was present.
    pub fn remove_turn_restriction(&mut self, restriction: &TurnRestriction) -> Result<bool, GraphError> {
        let street = self.street_edge_mut(restriction.from)?;
        match street.turn_restrictions.iter().position(|r| r == restriction) {
            Some(index) => {
                street.turn_restrictions.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn turn_restrictions(&self, edge: EdgeId) -> Result<&[TurnRestriction], GraphError> {
        Ok(self.street_edge(edge)?.turn_restrictions())
    }

    /// rental rules of an edge live on its from-vertex.
    pub fn add_rental_restriction(
        &mut self,
        edge: EdgeId,
        extension: &RentalRestrictionExtension,
    ) -> Result<(), GraphError> {
        let from = self.edge(edge)?.from;
        self.vertex_mut(from)?.add_rental_restriction(extension);
        Ok(())
    }

    pub fn remove_rental_restriction(
        &mut self,
        edge: EdgeId,
        extension: &RentalRestrictionExtension,
    ) -> Result<(), GraphError> {
        let (from, to) = {
            let e = self.edge(edge)?;
            (e.from, e.to)
        };
        self.vertex_mut(from)?.remove_rental_restriction(extension);
        self.vertex_mut(to)?.remove_rental_restriction(extension);
        Ok(())
    }

    /// true if `candidate` is `reference` or a temporary piece of it.
    pub fn is_equivalent(&self, candidate: EdgeId, reference: EdgeId) -> bool {
        candidate == reference
            || self
                .edge(candidate)
                .map(|e| e.parent() == Some(reference))
                .unwrap_or(false)
    }

    /// true if both are street edges running between the same vertices in opposite directions.
    pub fn is_reverse_of(&self, a: &Edge, b: &Edge) -> bool {
        a.street().is_some() && b.street().is_some() && a.from == b.to && a.to == b.from
    }

    /// expands one search state across an edge. an empty result means the
    /// traversal is not possible; several results are alternative successors.
    pub fn traverse(&self, edge: EdgeId, s0: &Arc<State>) -> Result<Vec<Arc<State>>, TraversalError> {
        let edge = self.edge(edge)?;
        let expected = if s0.request().arrive_by {
            edge.to
        } else {
            edge.from
        };
        if s0.vertex() != expected {
            return Err(TraversalError::StateNotAtEdge {
                edge: edge.id,
                vertex: s0.vertex(),
            });
        }
        let ctx = EdgeContext::new(self, edge)?;
        let states = edge.kind.traverse(&ctx, s0)?;
        Ok(states.into_iter().map(Arc::new).collect())
    }
}
