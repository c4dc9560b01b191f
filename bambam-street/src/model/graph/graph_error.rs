use super::{EdgeId, VertexId};

#[derive(thiserror::Error, Debug)]
pub enum GraphError {
    #[error("vertex {0} does not exist")]
    VertexNotFound(VertexId),
    #[error("edge {0} does not exist")]
    EdgeNotFound(EdgeId),
    #[error("edge {0} is not a street edge")]
    NotAStreetEdge(EdgeId),
    #[error("invalid edge: {0}")]
    InvalidEdge(String),
    #[error("invalid vertex: {0}")]
    InvalidVertex(String),
}
