use crate::model::graph::{EdgeId, GraphError, VertexId};

/// faults discovered while traversing. a traversal that is merely impossible
/// is not an error and yields no states instead.
#[derive(thiserror::Error, Debug)]
pub enum TraversalError {
    #[error(transparent)]
    Graph(#[from] GraphError),
    #[error("state at {vertex} cannot traverse edge {edge}")]
    StateNotAtEdge { edge: EdgeId, vertex: VertexId },
    #[error("invalid path: {0}")]
    InvalidPath(String),
}
