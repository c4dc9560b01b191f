use super::{EdgeContext, Traversable, TraversalError};
use crate::model::state::State;
use bambam_street_core::model::mode::TraverseMode;
use std::sync::Arc;

/// meters per second, roughly a standard escalator
const HORIZONTAL_SPEED: f64 = 0.45;

#[derive(Clone, Debug, PartialEq)]
pub struct EscalatorEdge {
    /// meters
    pub length: f64,
    /// seconds, overrides the length when present
    pub duration: Option<f64>,
}

impl EscalatorEdge {
    pub fn new(length: f64, duration: Option<f64>) -> EscalatorEdge {
        EscalatorEdge { length, duration }
    }
}

impl Traversable for EscalatorEdge {
    fn traverse(&self, ctx: &EdgeContext, s0: &Arc<State>) -> Result<Vec<State>, TraversalError> {
        let request = s0.request();
        if !s0.current_mode().is_walking() || request.wheelchair {
            return Ok(vec![]);
        }
        let time = self
            .duration
            .unwrap_or_else(|| self.length / HORIZONTAL_SPEED);
        let mut editor = s0.edit(ctx.edge);
        editor.set_back_mode(Some(TraverseMode::Walk));
        editor.increment_weight(request.preferences().walk.escalator_reluctance * time);
        editor.increment_time_in_seconds(time);
        Ok(editor.make_state().into_iter().collect())
    }
}
