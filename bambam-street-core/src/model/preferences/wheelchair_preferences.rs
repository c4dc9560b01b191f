use crate::model::accessibility::AccessibilityPreferences;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct WheelchairPreferences {
    pub trip: AccessibilityPreferences,
    pub stop: AccessibilityPreferences,
    pub elevator: AccessibilityPreferences,
    /// multiplier for streets that are not marked wheelchair accessible
    pub inaccessible_street_reluctance: f64,
    /// steepest slope (rise over run) a wheelchair user accepts without penalty
    pub max_slope: f64,
    /// penalty per percentage point of slope above `max_slope`
    pub slope_exceeded_reluctance: f64,
    pub stairs_reluctance: f64,
}

impl Default for WheelchairPreferences {
    fn default() -> Self {
        WheelchairPreferences {
            trip: AccessibilityPreferences::only_accessible(),
            stop: AccessibilityPreferences::only_accessible(),
            elevator: AccessibilityPreferences::with_costs(20.0, 3600.0),
            inaccessible_street_reluctance: 25.0,
            max_slope: 0.083,
            slope_exceeded_reluctance: 1.0,
            stairs_reluctance: 100.0,
        }
    }
}
