use serde::{Deserialize, Serialize};

/// which pieces a temporary split creates.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LinkingDirection {
    /// only the head, into the splitter
    Outgoing,
    /// only the tail, out of the splitter
    Incoming,
    Bidirectional,
}

impl LinkingDirection {
    pub fn creates_head(&self) -> bool {
        matches!(self, LinkingDirection::Outgoing | LinkingDirection::Bidirectional)
    }

    pub fn creates_tail(&self) -> bool {
        matches!(self, LinkingDirection::Incoming | LinkingDirection::Bidirectional)
    }
}
