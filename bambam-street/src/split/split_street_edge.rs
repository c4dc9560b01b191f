use crate::model::graph::EdgeId;

/// the pieces of a split street. `head` runs from the original from-vertex to
/// the splitter, `tail` from the splitter to the original to-vertex. a temporary
/// split may create only one of them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SplitStreetEdge {
    pub head: Option<EdgeId>,
    pub tail: Option<EdgeId>,
}
