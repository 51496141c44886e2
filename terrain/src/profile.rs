use crate::{
    constants::DEFAULT_GRANULARITY_M, great_circle_distance, lookup::checked_lookup, Coordinate,
    ElevationLookup, GeodesicInterpolator, Path, TerrainError, C,
};
use itertools::Itertools;
use log::debug;
use serde::Serialize;

/// Terrain elevation at a single coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ElevationSample {
    pub coordinate: Coordinate,
    pub elevation_m: C,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    /// Cumulative great circle distance from `start` for each
    /// following vector.
    pub distances_m: Vec<C>,

    /// Location of step along the great circle route from `start` to
    /// `end`.
    pub great_circle: Vec<Coordinate>,

    /// Elevation at each step along the great circle route from
    /// `start` to `end`.
    pub terrain_elev_m: Vec<C>,
}

impl Profile {
    pub fn builder() -> ProfileBuilder {
        ProfileBuilder {
            start: None,
            end: None,
            granularity_m: DEFAULT_GRANULARITY_M,
            start_alt_m: None,
            end_alt_m: None,
        }
    }

    /// Total path distance in meters.
    pub fn distance_m(&self) -> C {
        self.distances_m.last().copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.great_circle.len()
    }

    pub fn is_empty(&self) -> bool {
        self.great_circle.is_empty()
    }

    /// `(cumulative_distance_m, elevation_m)` pairs, the x and y axes
    /// of an elevation plot.
    pub fn series(&self) -> impl Iterator<Item = (C, C)> + '_ {
        self.distances_m
            .iter()
            .copied()
            .zip(self.terrain_elev_m.iter().copied())
    }

    pub fn samples(&self) -> impl Iterator<Item = ElevationSample> + '_ {
        self.great_circle
            .iter()
            .zip(self.terrain_elev_m.iter())
            .map(|(&coordinate, &elevation_m)| ElevationSample {
                coordinate,
                elevation_m,
            })
    }
}

/// Merges a path with its elevations.
///
/// `elevations` must be aligned to `path`, one per point.
pub fn assemble(path: Path, elevations: Vec<C>) -> Result<Profile, TerrainError> {
    if path.len() != elevations.len() {
        return Err(TerrainError::MismatchedLength {
            path: path.len(),
            elevations: elevations.len(),
        });
    }

    let great_circle = path.into_points();
    let distances_m = std::iter::once(0.0)
        .chain(
            great_circle
                .iter()
                .tuple_windows()
                .scan(0.0, |total, (&a, &b)| {
                    *total += great_circle_distance(a, b);
                    Some(*total)
                }),
        )
        .collect();

    Ok(Profile {
        distances_m,
        great_circle,
        terrain_elev_m: elevations,
    })
}

pub struct ProfileBuilder {
    start: Option<Coordinate>,

    end: Option<Coordinate>,

    /// Maximum distance between points.
    granularity_m: C,

    /// Starting altitude above ground (meters).
    start_alt_m: Option<C>,

    /// Ending altitude above ground (meters).
    end_alt_m: Option<C>,
}

impl ProfileBuilder {
    #[must_use]
    pub fn start(mut self, coord: Coordinate) -> Self {
        self.start = Some(coord);
        self
    }

    #[must_use]
    pub fn start_alt(mut self, meters: C) -> Self {
        self.start_alt_m = Some(meters);
        self
    }

    /// Maximum distance between points (meters, defaults to 100).
    #[must_use]
    pub fn granularity(mut self, meters: C) -> Self {
        self.granularity_m = meters;
        self
    }

    #[must_use]
    pub fn end(mut self, coord: Coordinate) -> Self {
        self.end = Some(coord);
        self
    }

    #[must_use]
    pub fn end_alt(mut self, meters: C) -> Self {
        self.end_alt_m = Some(meters);
        self
    }

    /// Interpolates the path, fetches its elevations, and assembles
    /// the result.
    pub fn build<L>(&self, lookup: &L) -> Result<Profile, TerrainError>
    where
        L: ElevationLookup + ?Sized,
    {
        let start = self.start.ok_or(TerrainError::Builder("start"))?;
        let end = self.end.ok_or(TerrainError::Builder("end"))?;

        let (path, path_runtime) = {
            let now = std::time::Instant::now();
            let path = GeodesicInterpolator::new(self.granularity_m)?.interpolate(start, end)?;
            (path, now.elapsed())
        };

        let (mut terrain, terrain_runtime) = {
            let now = std::time::Instant::now();
            let terrain = checked_lookup(lookup, &path)?;
            (terrain, now.elapsed())
        };

        // Add optional height above ground for start point.
        if let (Some(elev), Some(start_alt_m)) = (terrain.first_mut(), self.start_alt_m) {
            *elev += start_alt_m;
        };

        // Add optional height above ground for end point.
        if let (Some(elev), Some(end_alt_m)) = (terrain.last_mut(), self.end_alt_m) {
            *elev += end_alt_m;
        };

        debug!(
            "profile; len: {}, path_exec: {:?}, terrain_exec: {:?}",
            path.len(),
            path_runtime,
            terrain_runtime
        );

        assemble(path, terrain)
    }
}

#[cfg(test)]
mod tests {
    use super::{assemble, Profile};
    use crate::{interpolate, Coordinate, LookupError, Path, TerrainError, C};
    use approx::assert_abs_diff_eq;

    fn coord(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).unwrap()
    }

    fn flat(coords: &[Coordinate]) -> Result<Vec<C>, LookupError> {
        Ok(vec![400.0; coords.len()])
    }

    #[test]
    fn test_mismatched_length() {
        let points = (0..5_i32).map(|i| coord(0.0, f64::from(i))).collect();
        let path = Path::from_points(points).unwrap();
        let err = assemble(path, vec![0.0; 4]).unwrap_err();
        assert!(matches!(
            err,
            TerrainError::MismatchedLength {
                path: 5,
                elevations: 4
            }
        ));
    }

    #[test]
    fn test_cumulative_distance() {
        let start = coord(47.502136, 9.235879);
        let end = coord(47.495, 9.25);
        let path = interpolate(start, end, 100.0).unwrap();
        let step = path.step_size_m();
        let elevations: Vec<f64> = (0..path.len()).map(|i| i as f64).collect();
        let profile = assemble(path, elevations).unwrap();
        assert_eq!(profile.distances_m[0], 0.0);
        for (i, d) in profile.distances_m.iter().enumerate() {
            assert_abs_diff_eq!(*d, step * i as f64, epsilon = 1e-3);
        }
        assert_abs_diff_eq!(
            profile.distance_m(),
            crate::great_circle_distance(start, end),
            epsilon = 1.0
        );
    }

    #[test]
    fn test_single_point() {
        let start = coord(1.0, 2.0);
        let path = interpolate(start, start, 100.0).unwrap();
        let profile = assemble(path, vec![12.0]).unwrap();
        assert_eq!(profile.series().collect::<Vec<_>>(), vec![(0.0, 12.0)]);
        assert_eq!(profile.distance_m(), 0.0);
    }

    #[test]
    fn test_builder_adds_antenna_heights() {
        let profile = Profile::builder()
            .start(coord(44.283, -71.308))
            .start_alt(10.0)
            .granularity(90.0)
            .end(coord(44.256, -71.297))
            .end_alt(2.0)
            .build(&flat)
            .unwrap();
        assert_eq!(profile.terrain_elev_m.first(), Some(&410.0));
        assert_eq!(profile.terrain_elev_m.last(), Some(&402.0));
        assert!(profile.terrain_elev_m[1..profile.len() - 1]
            .iter()
            .all(|elev| *elev == 400.0));
        let samples = profile.samples().collect::<Vec<_>>();
        assert_eq!(samples.len(), profile.len());
        assert_eq!(samples[0].coordinate, coord(44.283, -71.308));
    }

    #[test]
    fn test_builder_missing_fields() {
        let err = Profile::builder()
            .end(coord(0.0, 0.0))
            .build(&flat)
            .unwrap_err();
        assert!(matches!(err, TerrainError::Builder("start")));
    }

    #[test]
    fn test_builder_propagates_lookup_failure() {
        let down = |_: &[Coordinate]| -> Result<Vec<C>, LookupError> {
            Err(LookupError::Service("503".to_string()))
        };
        let err = Profile::builder()
            .start(coord(0.0, 0.0))
            .end(coord(0.0, 0.01))
            .build(&down)
            .unwrap_err();
        assert!(matches!(err, TerrainError::Lookup(LookupError::Service(_))));
    }
}
