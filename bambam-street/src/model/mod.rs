pub mod edge;
pub mod graph;
pub mod intersection;
pub mod restriction;
pub mod state;
