mod disposable_edge_collection;
mod linking_direction;
mod split_error;
mod split_street_edge;
mod street_edge_splitter;

pub use disposable_edge_collection::DisposableEdgeCollection;
pub use linking_direction::LinkingDirection;
pub use split_error::SplitError;
pub use split_street_edge::SplitStreetEdge;
pub use street_edge_splitter::{create_partial_edge, split_destructively, split_non_destructively};
