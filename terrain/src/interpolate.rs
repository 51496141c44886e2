use crate::{
    constants::{ANTIPODAL_TOLERANCE, DEFAULT_GRANULARITY_M},
    math::HaversineIter,
    Coordinate, TerrainError, C,
};
use geo::{algorithm::HaversineDistance, geometry::Point};
use log::debug;
use std::{f64::consts::PI, ops::Deref};

/// Returns the great circle distance between `a` and `b` in meters,
/// on a spherical earth of radius
/// [`MEAN_EARTH_RADIUS`](crate::constants::MEAN_EARTH_RADIUS).
pub fn great_circle_distance(a: Coordinate, b: Coordinate) -> C {
    Point::from(a).haversine_distance(&Point::from(b))
}

/// An ordered sequence of coordinates along a great circle.
///
/// The first point is the start and the last is the end. All
/// consecutive points are the same distance apart. A path between
/// coincident points holds exactly one point.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    points: Vec<Coordinate>,
    step_size_m: C,
}

impl Path {
    /// Wraps an already computed point sequence.
    pub fn from_points(points: Vec<Coordinate>) -> Result<Self, TerrainError> {
        if points.is_empty() {
            return Err(TerrainError::DegenerateGeometry("path has no points"));
        }
        let step_size_m = match points.as_slice() {
            [a, b, ..] => great_circle_distance(*a, *b),
            _ => 0.0,
        };
        Ok(Self {
            points,
            step_size_m,
        })
    }

    /// Distance between consecutive points in meters, 0 for a
    /// single-point path.
    pub fn step_size_m(&self) -> C {
        self.step_size_m
    }

    pub fn start(&self) -> Coordinate {
        self.points[0]
    }

    pub fn end(&self) -> Coordinate {
        self.points[self.points.len() - 1]
    }

    pub fn into_points(self) -> Vec<Coordinate> {
        self.points
    }
}

impl Deref for Path {
    type Target = [Coordinate];

    fn deref(&self) -> &[Coordinate] {
        &self.points
    }
}

/// Splits great circle routes into equally spaced coordinates.
///
/// Uses a spherical earth model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeodesicInterpolator {
    granularity_m: C,
}

impl Default for GeodesicInterpolator {
    fn default() -> Self {
        Self {
            granularity_m: DEFAULT_GRANULARITY_M,
        }
    }
}

impl GeodesicInterpolator {
    /// Returns an interpolator that places points no more than
    /// `granularity_m` meters apart.
    pub fn new(granularity_m: C) -> Result<Self, TerrainError> {
        validate_granularity(granularity_m)?;
        Ok(Self { granularity_m })
    }

    pub fn granularity_m(&self) -> C {
        self.granularity_m
    }

    /// Returns the path from `start` to `end`.
    ///
    /// The number of points is `ceil(distance / granularity) + 1`, or 1
    /// when `start == end`.
    ///
    /// # Errors
    ///
    /// - [`TerrainError::InvalidCoordinate`] if either end is out of range.
    /// - [`TerrainError::InvalidGranularity`] if granularity is not positive.
    /// - [`TerrainError::DegenerateGeometry`] if the points are antipodal,
    ///   as the great circle between them is not unique.
    pub fn interpolate(&self, start: Coordinate, end: Coordinate) -> Result<Path, TerrainError> {
        start.validate()?;
        end.validate()?;
        validate_granularity(self.granularity_m)?;

        let iter = HaversineIter::new(Point::from(start), self.granularity_m, Point::from(end));
        if PI - iter.angular_distance() < ANTIPODAL_TOLERANCE {
            return Err(TerrainError::DegenerateGeometry(
                "antipodal points have no unique great circle",
            ));
        }

        let step_size_m = iter.step_size_m();
        let points: Vec<Coordinate> = iter.map(Coordinate::from_point_unchecked).collect();
        debug!(
            "interpolate; start: {start:?}, end: {end:?}, len: {}, step_size_m: {step_size_m}",
            points.len()
        );

        Ok(Path {
            points,
            step_size_m,
        })
    }
}

/// Interpolates with a one-off [`GeodesicInterpolator`].
pub fn interpolate(
    start: Coordinate,
    end: Coordinate,
    granularity_m: C,
) -> Result<Path, TerrainError> {
    GeodesicInterpolator::new(granularity_m)?.interpolate(start, end)
}

fn validate_granularity(granularity_m: C) -> Result<(), TerrainError> {
    if granularity_m > 0.0 && granularity_m.is_finite() {
        Ok(())
    } else {
        Err(TerrainError::InvalidGranularity(granularity_m))
    }
}
