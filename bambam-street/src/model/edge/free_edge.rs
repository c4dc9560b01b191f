use super::{EdgeContext, Traversable, TraversalError};
use crate::model::state::State;
use std::sync::Arc;

/// joins two vertices at the same place, such as a temporary vertex and the
/// splitter it was linked to. costs a nominal weight and no time.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FreeEdge;

impl Traversable for FreeEdge {
    fn traverse(&self, ctx: &EdgeContext, s0: &Arc<State>) -> Result<Vec<State>, TraversalError> {
        let mut editor = s0.edit(ctx.edge);
        editor.set_back_mode(None);
        editor.increment_weight(1.0);
        Ok(editor.make_state().into_iter().collect())
    }
}
