use super::{EdgeContext, StreetEdge, Traversable, TraversalError};
use crate::model::state::State;
use std::sync::Arc;

/// a walkable line across an open area such as a plaza or a parking lot. it is
/// costed like any other street.
#[derive(Clone, Debug)]
pub struct AreaEdge {
    pub street: StreetEdge,
    pub area_name: String,
}

impl Traversable for AreaEdge {
    fn traverse(&self, ctx: &EdgeContext, s0: &Arc<State>) -> Result<Vec<State>, TraversalError> {
        self.street.traverse(ctx, s0)
    }
}
