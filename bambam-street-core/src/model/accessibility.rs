use serde::{Deserialize, Serialize};

/// wheelchair accessibility of a stop, trip or elevator as recorded in the source data.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Accessibility {
    Possible,
    NotPossible,
    #[default]
    NoInformation,
}

/// how a wheelchair user treats a class of features (stops, trips, elevators)
/// with unknown or negative accessibility.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct AccessibilityPreferences {
    /// if true, anything not explicitly accessible is rejected outright
    pub only_consider_accessible: bool,
    /// extra cost for features with no accessibility information
    pub unknown_cost: f64,
    /// extra cost for features known to be inaccessible
    pub inaccessible_cost: f64,
}

/// outcome of applying [`AccessibilityPreferences`] to a feature.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AccessibilityCost {
    Rejected,
    Cost(f64),
}

impl AccessibilityPreferences {
    pub fn only_accessible() -> AccessibilityPreferences {
        AccessibilityPreferences {
            only_consider_accessible: true,
            unknown_cost: 0.0,
            inaccessible_cost: 0.0,
        }
    }

    pub fn with_costs(unknown_cost: f64, inaccessible_cost: f64) -> AccessibilityPreferences {
        AccessibilityPreferences {
            only_consider_accessible: false,
            unknown_cost,
            inaccessible_cost,
        }
    }

    pub fn evaluate(&self, accessibility: Accessibility) -> AccessibilityCost {
        match (self.only_consider_accessible, accessibility) {
            (_, Accessibility::Possible) => AccessibilityCost::Cost(0.0),
            (true, _) => AccessibilityCost::Rejected,
            (false, Accessibility::NoInformation) => AccessibilityCost::Cost(self.unknown_cost),
            (false, Accessibility::NotPossible) => AccessibilityCost::Cost(self.inaccessible_cost),
        }
    }
}
