use serde::{Deserialize, Serialize};

/// blend of the time, slope and safety components used by
/// [`super::VehicleRoutingOptimizeType::Triangle`]. the three values always sum to 1.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(from = "TriangleInput")]
pub struct TimeSlopeSafetyTriangle {
    pub time: f64,
    pub slope: f64,
    pub safety: f64,
}

#[derive(Deserialize)]
struct TriangleInput {
    #[serde(default)]
    time: f64,
    #[serde(default)]
    slope: f64,
    #[serde(default)]
    safety: f64,
}

impl From<TriangleInput> for TimeSlopeSafetyTriangle {
    fn from(value: TriangleInput) -> Self {
        TimeSlopeSafetyTriangle::new(value.time, value.slope, value.safety)
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl TimeSlopeSafetyTriangle {
    /// normalizes the inputs to sum to one. negative values count as zero,
    /// and safety absorbs the rounding remainder. all zeros means safety only.
    pub fn new(time: f64, slope: f64, safety: f64) -> TimeSlopeSafetyTriangle {
        let (time, slope, safety) = (time.max(0.0), slope.max(0.0), safety.max(0.0));
        let total = time + slope + safety;
        if total <= 0.0 || !total.is_finite() {
            return TimeSlopeSafetyTriangle {
                time: 0.0,
                slope: 0.0,
                safety: 1.0,
            };
        }
        let time = round2(time / total);
        let slope = round2(slope / total);
        let safety = round2(1.0 - (time + slope));
        TimeSlopeSafetyTriangle {
            time,
            slope,
            safety,
        }
    }
}

impl Default for TimeSlopeSafetyTriangle {
    fn default() -> Self {
        TimeSlopeSafetyTriangle::new(1.0, 1.0, 1.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_normalize() {
        let t = TimeSlopeSafetyTriangle::new(1.0, 1.0, 1.0);
        assert_eq!((t.time, t.slope, t.safety), (0.33, 0.33, 0.34));
        let t = TimeSlopeSafetyTriangle::new(2.0, 0.0, 2.0);
        assert_eq!((t.time, t.slope, t.safety), (0.5, 0.0, 0.5));
        let t = TimeSlopeSafetyTriangle::new(0.0, 0.0, 0.0);
        assert_eq!((t.time, t.slope, t.safety), (0.0, 0.0, 1.0));
        let t = TimeSlopeSafetyTriangle::new(-1.0, 3.0, 0.0);
        assert_eq!((t.time, t.slope, t.safety), (0.0, 1.0, 0.0));
    }
}
