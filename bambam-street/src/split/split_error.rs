use crate::model::graph::GraphError;

#[derive(thiserror::Error, Debug)]
pub enum SplitError {
    #[error(transparent)]
    Graph(#[from] GraphError),
    #[error("failure cutting edge geometry: {0}")]
    Geometry(String),
    #[error("invalid split: {0}")]
    InvalidSplit(String),
}
