use super::TraverseMode;
use serde::{Deserialize, Serialize};

/// compact set of [`TraverseMode`] values, used by turn restrictions
/// to declare which modes they apply to.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[serde(from = "Vec<TraverseMode>", into = "Vec<TraverseMode>")]
pub struct TraverseModeSet {
    mask: u8,
}

impl TraverseModeSet {
    pub fn empty() -> TraverseModeSet {
        TraverseModeSet { mask: 0 }
    }

    pub fn all() -> TraverseModeSet {
        TraverseModeSet::of(&TraverseMode::ALL)
    }

    pub fn of(modes: &[TraverseMode]) -> TraverseModeSet {
        let mask = modes.iter().fold(0, |acc, m| acc | m.mask());
        TraverseModeSet { mask }
    }

    pub fn contains(&self, mode: TraverseMode) -> bool {
        self.mask & mode.mask() != 0
    }

    pub fn insert(&mut self, mode: TraverseMode) {
        self.mask |= mode.mask();
    }

    pub fn is_empty(&self) -> bool {
        self.mask == 0
    }

    pub fn modes(&self) -> Vec<TraverseMode> {
        TraverseMode::ALL
            .into_iter()
            .filter(|m| self.contains(*m))
            .collect()
    }
}

impl From<Vec<TraverseMode>> for TraverseModeSet {
    fn from(value: Vec<TraverseMode>) -> Self {
        TraverseModeSet::of(&value)
    }
}

impl From<TraverseModeSet> for Vec<TraverseMode> {
    fn from(value: TraverseModeSet) -> Self {
        value.modes()
    }
}
