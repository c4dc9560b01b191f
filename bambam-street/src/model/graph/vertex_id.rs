use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// stable handle to a vertex in a [`super::Graph`]. handles of removed
/// vertices are never reused.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub usize);

impl Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "VertexId({})", self.0)
    }
}
