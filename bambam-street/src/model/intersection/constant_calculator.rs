use super::IntersectionTraversalCalculator;
use crate::model::edge::StreetEdge;
use crate::model::graph::Vertex;
use bambam_street_core::model::mode::TraverseMode;

/// charges the same duration for every turn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConstantIntersectionTraversalCalculator {
    seconds: f64,
}

impl ConstantIntersectionTraversalCalculator {
    pub fn new(seconds: f64) -> ConstantIntersectionTraversalCalculator {
        ConstantIntersectionTraversalCalculator { seconds }
    }
}

impl IntersectionTraversalCalculator for ConstantIntersectionTraversalCalculator {
    fn compute_traversal_duration(
        &self,
        _vertex: &Vertex,
        _from: &StreetEdge,
        _to: &StreetEdge,
        _mode: TraverseMode,
        _from_speed: f64,
        _to_speed: f64,
    ) -> f64 {
        self.seconds
    }
}
