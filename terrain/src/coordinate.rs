use crate::{TerrainError, C};
use geo::geometry::{Coord, Point};
use serde::Serialize;

/// A validated geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    latitude: C,
    longitude: C,
}

impl Coordinate {
    /// Returns a new coordinate if `latitude` is in [-90, 90] and
    /// `longitude` is in [-180, 180].
    pub fn new(latitude: C, longitude: C) -> Result<Self, TerrainError> {
        let coord = Self {
            latitude,
            longitude,
        };
        coord.validate()?;
        Ok(coord)
    }

    pub fn lat(&self) -> C {
        self.latitude
    }

    pub fn lon(&self) -> C {
        self.longitude
    }

    /// Checks range invariants. NaN is never in range.
    pub fn validate(&self) -> Result<(), TerrainError> {
        if (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude) {
            Ok(())
        } else {
            Err(TerrainError::InvalidCoordinate {
                lat: self.latitude,
                lon: self.longitude,
            })
        }
    }

    /// Wraps a point produced by our own great circle math, which
    /// always lands in range.
    pub(crate) fn from_point_unchecked(point: Point<C>) -> Self {
        Self {
            latitude: point.y(),
            longitude: point.x(),
        }
    }
}

impl From<Coordinate> for Point<C> {
    fn from(coord: Coordinate) -> Self {
        Point::new(coord.longitude, coord.latitude)
    }
}

impl From<Coordinate> for Coord<C> {
    fn from(coord: Coordinate) -> Self {
        Coord {
            x: coord.longitude,
            y: coord.latitude,
        }
    }
}

impl TryFrom<Coord<C>> for Coordinate {
    type Error = TerrainError;

    fn try_from(Coord { x, y }: Coord<C>) -> Result<Self, TerrainError> {
        Self::new(y, x)
    }
}
