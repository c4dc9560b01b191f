use super::ElevationError;
use geo::Coord;
use serde::{Deserialize, Serialize};
use ElevationError as E;

/// elevation samples along an edge. `x` is the distance in meters from the
/// start of the edge and `y` is the elevation in meters.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ElevationProfile {
    points: Vec<Coord<f64>>,
}

impl ElevationProfile {
    /// validates that the profile has at least two finite samples ordered by distance.
    pub fn new(points: Vec<Coord<f64>>) -> Result<ElevationProfile, ElevationError> {
        if points.len() < 2 {
            return Err(E::InvalidProfile(format!(
                "at least two samples are required, found {}",
                points.len()
            )));
        }
        if let Some(bad) = points.iter().find(|c| !c.x.is_finite() || !c.y.is_finite()) {
            return Err(E::InvalidProfile(format!(
                "non-finite sample ({}, {})",
                bad.x, bad.y
            )));
        }
        if points.windows(2).any(|w| w[1].x < w[0].x) {
            return Err(E::InvalidProfile(String::from(
                "samples must be ordered by distance along the edge",
            )));
        }
        Ok(ElevationProfile { points })
    }

    pub fn points(&self) -> &[Coord<f64>] {
        &self.points
    }

    /// horizontal extent of the profile in meters.
    pub fn flat_length(&self) -> f64 {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => last.x - first.x,
            _ => 0.0,
        }
    }

    /// length following the terrain, in meters.
    pub fn true_length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| (w[1].x - w[0].x).hypot(w[1].y - w[0].y))
            .sum()
    }

    /// the part of this profile between `start` and `end` meters, shifted so that
    /// it begins at zero. end points are interpolated when they fall between samples.
    pub fn partial(&self, start: f64, end: f64) -> Result<ElevationProfile, ElevationError> {
        if start.is_nan() || end.is_nan() || start >= end {
            return Err(E::DegenerateProfile(format!(
                "cannot take partial profile from {start} to {end}"
            )));
        }
        let mut result: Vec<Coord<f64>> = vec![];
        for w in self.points.windows(2) {
            let (a, b) = (w[0], w[1]);
            if a.x <= start && start < b.x {
                result.push(Coord {
                    x: start,
                    y: interpolate(a, b, start),
                });
            }
            if start < b.x && b.x < end {
                result.push(b);
            }
            if a.x < end && end <= b.x {
                result.push(Coord {
                    x: end,
                    y: interpolate(a, b, end),
                });
                break;
            }
        }
        let shifted = result
            .into_iter()
            .map(|c| Coord {
                x: c.x - start,
                y: c.y,
            })
            .collect();
        ElevationProfile::new(shifted)
    }
}

fn interpolate(a: Coord<f64>, b: Coord<f64>, x: f64) -> f64 {
    let run = b.x - a.x;
    if run == 0.0 {
        a.y
    } else {
        a.y + (b.y - a.y) * (x - a.x) / run
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn profile() -> ElevationProfile {
        ElevationProfile::new(vec![
            Coord { x: 0.0, y: 10.0 },
            Coord { x: 50.0, y: 15.0 },
            Coord { x: 100.0, y: 10.0 },
        ])
        .expect("test invariant failed: profile is valid")
    }

    #[test]
    fn test_rejects_bad_profiles() {
        assert!(ElevationProfile::new(vec![Coord { x: 0.0, y: 0.0 }]).is_err());
        assert!(ElevationProfile::new(vec![Coord { x: 5.0, y: 0.0 }, Coord { x: 1.0, y: 0.0 }]).is_err());
        assert!(ElevationProfile::new(vec![Coord { x: 0.0, y: f64::NAN }, Coord { x: 1.0, y: 0.0 }]).is_err());
    }

    #[test]
    fn test_partial() {
        let partial = profile()
            .partial(25.0, 75.0)
            .expect("test invariant failed: partial profile");
        assert_eq!(
            partial.points(),
            &[
                Coord { x: 0.0, y: 12.5 },
                Coord { x: 25.0, y: 15.0 },
                Coord { x: 50.0, y: 12.5 }
            ]
        );
        assert_eq!(partial.flat_length(), 50.0);
    }

    #[test]
    fn test_partial_on_sample_boundary() {
        let partial = profile()
            .partial(0.0, 50.0)
            .expect("test invariant failed: partial profile");
        assert_eq!(
            partial.points(),
            &[Coord { x: 0.0, y: 10.0 }, Coord { x: 50.0, y: 15.0 }]
        );
        assert!(profile().partial(30.0, 30.0).is_err());
    }
}
