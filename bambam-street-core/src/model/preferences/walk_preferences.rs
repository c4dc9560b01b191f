use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct WalkPreferences {
    /// walking speed in meters per second
    pub speed: f64,
    /// multiplier applied to walking time to produce weight
    pub reluctance: f64,
    /// extra multiplier on top of `reluctance` for stairs
    pub stairs_reluctance: f64,
    /// stairs are this many times slower than flat walking
    pub stairs_time_factor: f64,
    /// 0 ignores street safety entirely, 1 weighs walking by safety only
    pub safety_factor: f64,
    /// multiplier applied to escalator time to produce weight
    pub escalator_reluctance: f64,
}

impl Default for WalkPreferences {
    fn default() -> Self {
        WalkPreferences {
            speed: 1.33,
            reluctance: 2.0,
            stairs_reluctance: 2.0,
            stairs_time_factor: 3.0,
            safety_factor: 1.0,
            escalator_reluctance: 1.5,
        }
    }
}
