use crate::model::graph::{EdgeId, Graph, GraphError, VertexId};
use crate::model::restriction::TurnRestriction;

/// request-scoped additions to a graph that are removed together once the
/// search is over: temporary edges, the turn restrictions synthesized for them
/// on permanent edges and the temporary vertices they connect.
#[derive(Clone, Debug, Default)]
pub struct DisposableEdgeCollection {
    edges: Vec<EdgeId>,
    vertices: Vec<VertexId>,
    turn_restrictions: Vec<TurnRestriction>,
}

impl DisposableEdgeCollection {
    pub fn new() -> DisposableEdgeCollection {
        DisposableEdgeCollection::default()
    }

    pub fn add_edge(&mut self, edge: EdgeId) {
        if !self.edges.contains(&edge) {
            self.edges.push(edge);
        }
    }

    /// the vertex is removed on dispose once it has no edges left.
    pub fn add_vertex(&mut self, vertex: VertexId) {
        if !self.vertices.contains(&vertex) {
            self.vertices.push(vertex);
        }
    }

    pub(crate) fn add_turn_restriction(&mut self, restriction: TurnRestriction) {
        self.turn_restrictions.push(restriction);
    }

    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    pub fn turn_restrictions(&self) -> &[TurnRestriction] {
        &self.turn_restrictions
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty() && self.vertices.is_empty() && self.turn_restrictions.is_empty()
    }

    /// removes everything this collection added, leaving the permanent graph as
    /// it was before the temporary splits.
    pub fn dispose(self, graph: &mut Graph) -> Result<(), GraphError> {
        for restriction in self.turn_restrictions.iter() {
            match graph.remove_turn_restriction(restriction) {
                Ok(_) => {}
                // the restricted edge was itself temporary and is already gone
                Err(GraphError::EdgeNotFound(_)) => {}
                Err(e) => return Err(e),
            }
        }
        for edge in self.edges.iter() {
            graph.remove_edge(*edge)?;
        }
        for vertex in self.vertices.iter() {
            if !graph.remove_vertex_if_unconnected(*vertex)? {
                log::warn!("temporary vertex {vertex} is still connected after dispose");
            }
        }
        log::debug!(
            "disposed {} temporary edges, {} vertices and {} turn restrictions",
            self.edges.len(),
            self.vertices.len(),
            self.turn_restrictions.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::graph::VertexKind;
    use geo::Coord;

    #[test]
    fn test_vertices_recorded_once() {
        let mut graph = Graph::new();
        let v = graph.add_vertex("origin", Coord { x: 0.0, y: 0.0 }, VertexKind::TemporarySplitter);
        let mut collection = DisposableEdgeCollection::new();
        assert!(collection.is_empty());
        collection.add_vertex(v);
        collection.add_vertex(v);
        assert_eq!(collection.vertices(), &[v]);
        collection
            .dispose(&mut graph)
            .expect("test invariant failed: dispose");
        assert_eq!(graph.n_vertices(), 0);
    }
}
