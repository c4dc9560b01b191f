use super::ElevationProfile;
use serde::{Deserialize, Serialize};

/// slopes steeper than this are treated as data errors when limiting is enabled
const MAX_BICYCLE_SLOPE: f64 = 0.35;
/// slopes steeper than this are always treated as data errors
const MAX_SLOPE: f64 = 1.0;
const ENERGY_PER_METER_ON_FLAT: f64 = 1.0;
const ENERGY_SLOPE_FACTOR: f64 = 4000.0;
/// walking on steep terrain is never modeled as more than this many times slower
const MAX_WALK_FACTOR: f64 = 3.0;

/// per-meter multipliers derived from an elevation profile.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct SlopeCosts {
    /// multiplies flat length into speed-equivalent length for cycling
    pub slope_speed_factor: f64,
    /// multiplies flat length into climbing-work-equivalent length
    pub slope_work_factor: f64,
    /// absolute safety penalty in meters for fast descents
    pub slope_safety_cost: f64,
    pub max_slope: f64,
    /// true length over flat length
    pub length_multiplier: f64,
    /// true if some segment was too steep to trust and was treated as flat
    pub flattened: bool,
    /// multiplies flat length into walking-effort-equivalent length
    pub effective_walk_factor: f64,
}

impl SlopeCosts {
    pub fn neutral() -> SlopeCosts {
        SlopeCosts {
            slope_speed_factor: 1.0,
            slope_work_factor: 1.0,
            slope_safety_cost: 0.0,
            max_slope: 0.0,
            length_multiplier: 1.0,
            flattened: false,
            effective_walk_factor: 1.0,
        }
    }
}

/// computes slope costs along a profile. profiles with less than a millimeter of
/// horizontal extent produce neutral costs.
pub fn slope_costs(profile: &ElevationProfile, slope_limit: bool) -> SlopeCosts {
    let flat_length = profile.flat_length();
    if flat_length < 1e-3 {
        return SlopeCosts::neutral();
    }
    let mut costs = SlopeCosts {
        slope_speed_factor: 0.0,
        slope_work_factor: 0.0,
        length_multiplier: profile.true_length() / flat_length,
        effective_walk_factor: 0.0,
        ..SlopeCosts::neutral()
    };
    for w in profile.points().windows(2) {
        let run = w[1].x - w[0].x;
        let rise = w[1].y - w[0].y;
        if run == 0.0 {
            continue;
        }
        let mut slope = rise / run;
        if (slope_limit && slope.abs() > MAX_BICYCLE_SLOPE) || slope.abs() > MAX_SLOPE {
            slope = 0.0;
            costs.flattened = true;
        }
        costs.max_slope = costs.max_slope.max(slope.abs());

        let hypotenuse = run.hypot(rise);
        let energy =
            hypotenuse * (ENERGY_PER_METER_ON_FLAT + ENERGY_SLOPE_FACTOR * slope.max(0.0).powi(3));
        costs.slope_work_factor += energy;

        let speed_coefficient = slope_speed_coefficient(slope, w[0].y);
        costs.slope_speed_factor += hypotenuse / speed_coefficient;
        let safety_cost = hypotenuse * (speed_coefficient - 1.0) * 0.25;
        if safety_cost > 0.0 {
            costs.slope_safety_cost += safety_cost;
        }
        costs.effective_walk_factor += run * walk_factor(slope);
    }
    costs.slope_speed_factor /= flat_length;
    costs.slope_work_factor /= flat_length;
    costs.effective_walk_factor /= flat_length;
    costs
}

/// Tobler's hiking function relative to walking on flat ground.
fn walk_factor(slope: f64) -> f64 {
    let factor = (3.5 * ((slope + 0.05).abs() - 0.05)).exp();
    factor.min(MAX_WALK_FACTOR)
}

const SPLINE_DEGREE: usize = 2;

const ALTITUDE_KNOTS: [f64; 7] = [0.0, 0.0, 0.0, 2798.7785324442748, 5000.0, 5000.0, 5000.0];

const SLOPE_KNOTS: [f64; 10] = [
    -0.35,
    -0.35,
    -0.35,
    -0.072695627831828688,
    -0.0024945814335295903,
    0.053500304527448035,
    0.12191105175593375,
    0.35,
    0.35,
    0.35,
];

const SPLINE_COEFFICIENTS: [f64; 28] = [
    4.3843513168660255,
    3.6904323727375652,
    1.6791850199667697,
    0.55077866957024113,
    0.17977766419113900,
    0.080906832222762959,
    0.060239305785343762,
    4.6782343053423814,
    3.9250580214736304,
    1.7924585866601270,
    0.53426170441723031,
    0.18787442260720733,
    0.074706427576152687,
    0.062201805553147201,
    5.3131908923568787,
    4.4703901299120750,
    2.0085381385545351,
    0.54611063530784010,
    0.18034042959223889,
    0.081456939988273691,
    0.059806795955995307,
    5.6384893192212662,
    4.7732222200176633,
    2.1021485412233019,
    0.57862890496126462,
    0.16358571778476885,
    0.094846184210137130,
    0.055464612133430242,
];

/// relative cycling speed on a slope at a given altitude, from a quadratic
/// tensor-product spline fitted to observed riding speeds. 1.0 is roughly flat.
pub fn slope_speed_coefficient(slope: f64, altitude: f64) -> f64 {
    let (lx, wx) = spline_basis(&ALTITUDE_KNOTS, altitude);
    let (ly, wy) = spline_basis(&SLOPE_KNOTS, slope);
    let stride = SLOPE_KNOTS.len() - SPLINE_DEGREE - 1;
    let mut result = 0.0;
    for (i, wxi) in wx.iter().enumerate() {
        for (j, wyj) in wy.iter().enumerate() {
            let idx = lx * stride + ly + i * stride + j;
            result += SPLINE_COEFFICIENTS[idx] * wxi * wyj;
        }
    }
    result
}

/// finds the knot interval containing `x` (clamped to the spline domain) and the
/// non-zero B-spline basis values on it. returns the offset of the first active
/// coefficient.
fn spline_basis(knots: &[f64], x: f64) -> (usize, [f64; SPLINE_DEGREE + 1]) {
    let n = knots.len();
    let k = SPLINE_DEGREE;
    // one-based knot access keeps the recurrence readable
    let t = |i: usize| knots[i - 1];
    let x = x.clamp(t(k + 1), t(n - k));
    let mut l = k + 1;
    while x >= t(l + 1) && l != n - k - 1 {
        l += 1;
    }
    let mut h = [0.0; SPLINE_DEGREE + 1];
    let mut hh = [0.0; SPLINE_DEGREE + 1];
    h[0] = 1.0;
    for j in 1..=k {
        hh[..j].copy_from_slice(&h[..j]);
        h[0] = 0.0;
        for i in 1..=j {
            let li = l + i;
            let lj = li - j;
            let f = hh[i - 1] / (t(li) - t(lj));
            h[i - 1] += f * (t(li) - x);
            h[i] = f * (x - t(lj));
        }
    }
    (l - k - 1, h)
}
