mod edge;
mod edge_id;
mod geofencing;
mod graph_error;
mod street_graph;
mod vertex;
mod vertex_id;
mod vertex_kind;

pub use edge::{Edge, EdgeKind};
pub use edge_id::EdgeId;
pub use graph_error::GraphError;
pub use street_graph::Graph;
pub use vertex::Vertex;
pub use vertex_id::VertexId;
pub use vertex_kind::{TransitStopVertex, VertexKind};
