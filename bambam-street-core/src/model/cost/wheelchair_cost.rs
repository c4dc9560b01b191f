use crate::model::preferences::RoutingPreferences;

/// reluctance of a wheelchair user on a street. streets steeper than the
/// configured maximum are penalized in proportion to the excess slope rather
/// than excluded, so the penalty never jumps.
pub fn wheelchair_reluctance(
    preferences: &RoutingPreferences,
    max_slope: f64,
    wheelchair_accessible: bool,
    stairs: bool,
) -> f64 {
    let wheelchair = &preferences.wheelchair;
    let mut reluctance = if wheelchair_accessible {
        1.0
    } else {
        wheelchair.inaccessible_street_reluctance
    } * preferences.walk.reluctance;
    if stairs {
        reluctance *= wheelchair.stairs_reluctance;
    }
    let excess = max_slope.abs() - wheelchair.max_slope;
    if excess > 0.0 {
        // the excess is in rise-over-run, the reluctance is per percentage point
        reluctance *= 1.0 + excess * 100.0 * wheelchair.slope_exceeded_reluctance;
    }
    reluctance
}
