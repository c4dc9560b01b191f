use super::GeometryError;
use geo::{Bearing, Coord, Distance, Haversine, Length, LineString, Point};
use GeometryError as E;

/// the first and last azimuths of an edge are measured over at least this
/// many meters so that tiny digitizing jitter near intersections is ignored.
const MIN_ANGLE_DISTANCE_METERS: f64 = 10.0;

/// Haversine length of a line string, in whole millimeters.
pub fn length_millimeters(line: &LineString<f64>) -> i64 {
    (Haversine.length(line) * 1000.0).round() as i64
}

pub fn distance_meters(a: Coord<f64>, b: Coord<f64>) -> f64 {
    Haversine.distance(Point::from(a), Point::from(b))
}

/// compass azimuth from `a` to `b` in degrees within (-180, 180], clockwise from north.
pub fn azimuth_degrees(a: Coord<f64>, b: Coord<f64>) -> f64 {
    let bearing = Haversine.bearing(Point::from(a), Point::from(b));
    if bearing > 180.0 {
        bearing - 360.0
    } else {
        bearing
    }
}

/// azimuth of the start of a line, measured to the first point at least ten
/// meters away (or the last point, for short lines).
pub fn first_azimuth(line: &LineString<f64>) -> Option<f64> {
    let first = *line.0.first()?;
    let target = line
        .0
        .iter()
        .skip(1)
        .find(|c| distance_meters(first, **c) >= MIN_ANGLE_DISTANCE_METERS)
        .or_else(|| line.0.last())?;
    Some(azimuth_degrees(first, *target))
}

/// azimuth of the end of a line, measured from the last point at least ten
/// meters before its end (or the first point, for short lines).
pub fn last_azimuth(line: &LineString<f64>) -> Option<f64> {
    let last = *line.0.last()?;
    let source = line
        .0
        .iter()
        .rev()
        .skip(1)
        .find(|c| distance_meters(**c, last) >= MIN_ANGLE_DISTANCE_METERS)
        .or_else(|| line.0.first())?;
    Some(azimuth_degrees(*source, last))
}

/// packs an azimuth into one byte of binary radians. the encoding is rotated
/// half a turn, so decoding yields degrees clockwise from south.
pub fn azimuth_to_brads(azimuth_degrees: f64) -> i8 {
    let brads = (azimuth_degrees.to_radians() * 128.0 / std::f64::consts::PI).round() as i64 + 128;
    brads as i8
}

/// decodes a byte from [`azimuth_to_brads`] into integer degrees within [-180, 180).
pub fn brads_to_degrees(brads: i8) -> i32 {
    (brads as f64 * 180.0 / 128.0).round() as i32
}

/// result of cutting a line string at the point nearest to a coordinate.
#[derive(Clone, Debug, PartialEq)]
pub struct LineSplit {
    pub head: LineString<f64>,
    pub tail: LineString<f64>,
    /// the cut point, on the line
    pub point: Coord<f64>,
    /// share of the total length that falls into the head, within [0, 1]
    pub fraction: f64,
}

/// splits a line at the location closest to `coord`, measured in planar
/// longitude/latitude space.
pub fn split_at_closest_point(
    line: &LineString<f64>,
    coord: Coord<f64>,
) -> Result<LineSplit, GeometryError> {
    if line.0.len() < 2 {
        return Err(E::TooFewPoints(format!(
            "cannot split a line with {} points",
            line.0.len()
        )));
    }
    if !coord.x.is_finite() || !coord.y.is_finite() {
        return Err(E::InvalidCoordinate(format!("({}, {})", coord.x, coord.y)));
    }
    let mut best: Option<(usize, Coord<f64>, f64)> = None;
    for (idx, w) in line.0.windows(2).enumerate() {
        let projected = project_onto_segment(w[0], w[1], coord);
        let d = (projected.x - coord.x).hypot(projected.y - coord.y);
        if best.map(|(_, _, best_d)| d < best_d).unwrap_or(true) {
            best = Some((idx, projected, d));
        }
    }
    let (idx, point, _) = best.ok_or_else(|| E::TooFewPoints(String::from("no segments")))?;

    let mut head: Vec<Coord<f64>> = line.0[..=idx].to_vec();
    if head.last() != Some(&point) {
        head.push(point);
    }
    let mut tail: Vec<Coord<f64>> = vec![point];
    tail.extend(line.0[idx + 1..].iter().filter(|c| **c != point));
    if head.len() < 2 {
        head.push(point);
    }
    if tail.len() < 2 {
        tail.push(point);
    }
    let head = LineString::new(head);
    let tail = LineString::new(tail);

    let total = Haversine.length(line);
    let fraction = if total > 0.0 {
        (Haversine.length(&head) / total).clamp(0.0, 1.0)
    } else {
        0.0
    };
    Ok(LineSplit {
        head,
        tail,
        point,
        fraction,
    })
}

/// the portion of a line between the points closest to `start` and `end`.
/// if `end` lies before `start` along the line, the result is degenerate
/// (a line from the start point to itself).
pub fn interior_line(
    line: &LineString<f64>,
    start: Coord<f64>,
    end: Coord<f64>,
) -> Result<LineString<f64>, GeometryError> {
    let after_start = split_at_closest_point(line, start)?;
    let start_fraction = after_start.fraction;
    let end_fraction = split_at_closest_point(line, end)?.fraction;
    if end_fraction < start_fraction {
        return Ok(LineString::new(vec![after_start.point, after_start.point]));
    }
    let before_end = split_at_closest_point(&after_start.tail, end)?;
    Ok(before_end.head)
}

fn project_onto_segment(a: Coord<f64>, b: Coord<f64>, p: Coord<f64>) -> Coord<f64> {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len2 = dx * dx + dy * dy;
    if len2 == 0.0 {
        return a;
    }
    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / len2).clamp(0.0, 1.0);
    Coord {
        x: a.x + t * dx,
        y: a.y + t * dy,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use geo::line_string;

    #[test]
    fn test_brads_round_trip_cardinal_directions() {
        // decoded angles are clockwise from south
        assert_eq!(brads_to_degrees(azimuth_to_brads(180.0)), 0);
        assert_eq!(brads_to_degrees(azimuth_to_brads(-90.0)), 90);
        assert_eq!(brads_to_degrees(azimuth_to_brads(90.0)), -90);
        assert_eq!(brads_to_degrees(azimuth_to_brads(0.0)), -180);
    }

    #[test]
    fn test_azimuths() {
        let line = line_string![(x: 0.0, y: 0.0), (x: 0.0, y: 0.001), (x: 0.001, y: 0.001)];
        let first = first_azimuth(&line).expect("test invariant failed: azimuth");
        let last = last_azimuth(&line).expect("test invariant failed: azimuth");
        assert!(first.abs() < 1e-6, "north, found {first}");
        assert!((last - 90.0).abs() < 1e-3, "east, found {last}");
    }

    #[test]
    fn test_split_at_closest_point() {
        let line = line_string![(x: 0.0, y: 0.0), (x: 0.002, y: 0.0)];
        let split = split_at_closest_point(&line, Coord { x: 0.0005, y: 0.0001 })
            .expect("test invariant failed: split");
        assert!((split.point.x - 0.0005).abs() < 1e-12);
        assert_eq!(split.point.y, 0.0);
        assert_eq!(split.head.0.len(), 2);
        assert_eq!(split.tail.0.len(), 2);
        assert!((split.fraction - 0.25).abs() < 1e-6);
        let total = length_millimeters(&line);
        let parts = length_millimeters(&split.head) + length_millimeters(&split.tail);
        assert!((total - parts).abs() <= 1);
    }

    #[test]
    fn test_split_at_interior_vertex() {
        let line = line_string![(x: 0.0, y: 0.0), (x: 0.001, y: 0.0), (x: 0.002, y: 0.0)];
        let split = split_at_closest_point(&line, Coord { x: 0.001, y: 0.0 })
            .expect("test invariant failed: split");
        assert_eq!(split.head.0, vec![Coord { x: 0.0, y: 0.0 }, Coord { x: 0.001, y: 0.0 }]);
        assert_eq!(split.tail.0, vec![Coord { x: 0.001, y: 0.0 }, Coord { x: 0.002, y: 0.0 }]);
    }

    #[test]
    fn test_split_errors() {
        let line = LineString::new(vec![Coord { x: 0.0, y: 0.0 }]);
        assert!(split_at_closest_point(&line, Coord { x: 0.0, y: 0.0 }).is_err());
    }

    #[test]
    fn test_interior_line() {
        let line = line_string![(x: 0.0, y: 0.0), (x: 0.004, y: 0.0)];
        let interior = interior_line(&line, Coord { x: 0.001, y: 0.0 }, Coord { x: 0.003, y: 0.0 })
            .expect("test invariant failed: interior");
        assert_eq!(interior.0.len(), 2);
        assert!((interior.0[0].x - 0.001).abs() < 1e-12);
        assert!((interior.0[1].x - 0.003).abs() < 1e-12);
    }
}
