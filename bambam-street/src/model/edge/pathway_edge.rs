use super::{EdgeContext, Traversable, TraversalError};
use crate::model::state::State;
use bambam_street_core::model::mode::{StreetTraversalPermission, TraverseMode};
use std::sync::Arc;

/// a walkway inside or between transit stations, such as a corridor, stairs or a
/// fare gate.
#[derive(Clone, Debug, PartialEq)]
pub struct PathwayEdge {
    pub name: String,
    /// meters, 0 when unknown
    pub distance: f64,
    /// seconds, 0 when unknown
    pub traversal_time: f64,
    pub wheelchair_accessible: bool,
    pub permission: StreetTraversalPermission,
}

impl PathwayEdge {
    pub fn new(name: &str, distance: f64, traversal_time: f64) -> PathwayEdge {
        PathwayEdge {
            name: name.to_string(),
            distance,
            traversal_time,
            wheelchair_accessible: true,
            permission: StreetTraversalPermission::Pedestrian,
        }
    }

    pub fn with_wheelchair_accessible(mut self, accessible: bool) -> PathwayEdge {
        self.wheelchair_accessible = accessible;
        self
    }

    pub fn with_permission(mut self, permission: StreetTraversalPermission) -> PathwayEdge {
        self.permission = permission;
        self
    }
}

impl Traversable for PathwayEdge {
    fn traverse(&self, ctx: &EdgeContext, s0: &Arc<State>) -> Result<Vec<State>, TraversalError> {
        let request = s0.request();
        if s0.current_mode().is_driving()
            || !self.permission.allows(TraverseMode::Walk)
            || (request.wheelchair && !self.wheelchair_accessible)
        {
            return Ok(vec![]);
        }
        let preferences = request.preferences();
        // explicit durations win; missing data adds nothing
        let time = if self.traversal_time > 0.0 {
            self.traversal_time
        } else if self.distance > 0.0 {
            self.distance / preferences.walk.speed
        } else {
            0.0
        };

        let mut editor = s0.edit(ctx.edge);
        editor.set_back_mode(Some(TraverseMode::Walk));
        if time > 0.0 {
            editor.increment_time_in_seconds(time);
            editor.increment_weight(time * preferences.walk.reluctance);
        }
        if self.distance > 0.0 {
            editor.increment_walk_distance(self.distance);
        }
        Ok(editor.make_state().into_iter().collect())
    }
}
