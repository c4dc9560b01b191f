use super::{ConstantIntersectionTraversalCalculator, SimpleIntersectionTraversalCalculator};
use crate::model::edge::StreetEdge;
use crate::model::graph::Vertex;
use bambam_street_core::model::mode::TraverseMode;
use bambam_street_core::model::preferences::{IntersectionTraversalModel, StreetPreferences};
use std::fmt::Debug;
use std::sync::Arc;

/// seconds lost when moving from one street onto the next at an intersection.
pub trait IntersectionTraversalCalculator: Debug + Send + Sync {
    /// # Arguments
    ///
    /// * `vertex` - the intersection between the two streets
    /// * `from` - street arriving at the intersection
    /// * `to` - street leaving the intersection
    /// * `mode` - mode used while turning
    /// * `from_speed` - speed on `from` in meters per second
    /// * `to_speed` - speed on `to` in meters per second
    ///
    /// # Returns
    ///
    /// the duration of the turn in seconds
    fn compute_traversal_duration(
        &self,
        vertex: &Vertex,
        from: &StreetEdge,
        to: &StreetEdge,
        mode: TraverseMode,
        from_speed: f64,
        to_speed: f64,
    ) -> f64;
}

/// the calculator configured in the street preferences.
pub fn from_preferences(preferences: &StreetPreferences) -> Arc<dyn IntersectionTraversalCalculator> {
    match preferences.intersection_traversal_model {
        IntersectionTraversalModel::Simple => Arc::new(SimpleIntersectionTraversalCalculator::new(
            preferences.driving_direction,
        )),
        IntersectionTraversalModel::Constant { seconds } => {
            Arc::new(ConstantIntersectionTraversalCalculator::new(seconds))
        }
    }
}
