use crate::model::graph::{EdgeId, EdgeKind, Graph, VertexId, VertexKind};
use crate::model::state::{State, StreetSearchRequest};
use bambam_street_core::model::mode::StreetMode;
use bambam_street_core::model::preferences::RoutingPreferences;
use geo::Coord;
use std::sync::Arc;

pub fn coord(x: f64, y: f64) -> Coord<f64> {
    Coord { x, y }
}

/// two intersections 0.001 degrees apart along the equator.
pub fn mock_vertices(graph: &mut Graph) -> (VertexId, VertexId) {
    let a = graph.add_vertex("a", coord(0.0, 0.0), VertexKind::intersection());
    let b = graph.add_vertex("b", coord(0.001, 0.0), VertexKind::intersection());
    (a, b)
}

/// a graph holding a single edge of the given kind between two intersections.
pub fn mock_graph(kind: EdgeKind) -> (Graph, EdgeId) {
    let mut graph = Graph::new();
    let (a, b) = mock_vertices(&mut graph);
    let edge = graph
        .build_and_connect(a, b, kind)
        .expect("test invariant failed: edge builds");
    (graph, edge)
}

pub fn mock_request(mode: StreetMode, arrive_by: bool) -> Arc<StreetSearchRequest> {
    mock_request_with(mode, arrive_by, RoutingPreferences::default())
}

pub fn mock_request_with(
    mode: StreetMode,
    arrive_by: bool,
    preferences: RoutingPreferences,
) -> Arc<StreetSearchRequest> {
    Arc::new(StreetSearchRequest::new(mode, preferences).with_arrive_by(arrive_by))
}

/// the single origin of a request at the entry vertex of `edge`.
pub fn mock_state(graph: &Graph, edge: EdgeId, request: Arc<StreetSearchRequest>) -> Arc<State> {
    let e = graph.edge(edge).expect("test invariant failed: edge exists");
    let vertex = if request.arrive_by { e.to } else { e.from };
    Arc::new(State::new(graph, vertex, request).expect("test invariant failed: state"))
}

/// every origin of a request at the entry vertex of `edge`.
pub fn mock_states(
    graph: &Graph,
    edge: EdgeId,
    request: Arc<StreetSearchRequest>,
) -> Vec<Arc<State>> {
    let e = graph.edge(edge).expect("test invariant failed: edge exists");
    let vertex = if request.arrive_by { e.to } else { e.from };
    State::initial_states(graph, vertex, request).expect("test invariant failed: states")
}

pub fn traverse(graph: &Graph, edge: EdgeId, s0: &Arc<State>) -> Vec<Arc<State>> {
    graph
        .traverse(edge, s0)
        .expect("test invariant failed: traversal succeeds")
}
