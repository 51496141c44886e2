use crate::{
    constants::DEFAULT_GRANULARITY_M, Coordinate, GeodesicInterpolator, Path, TerrainError, C,
};
use serde::{Deserialize, Serialize};

fn default_granularity() -> C {
    DEFAULT_GRANULARITY_M
}

/// Endpoints and spacing for a terrain path.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PathConfig {
    pub latitude_point_a: C,
    pub longitude_point_a: C,
    pub latitude_point_b: C,
    pub longitude_point_b: C,
    #[serde(default = "default_granularity")]
    pub granularity_meters: C,
}

impl PathConfig {
    /// Returns validated `(a, b)` endpoints.
    pub fn endpoints(&self) -> Result<(Coordinate, Coordinate), TerrainError> {
        Ok((
            Coordinate::new(self.latitude_point_a, self.longitude_point_a)?,
            Coordinate::new(self.latitude_point_b, self.longitude_point_b)?,
        ))
    }

    pub fn interpolator(&self) -> Result<GeodesicInterpolator, TerrainError> {
        GeodesicInterpolator::new(self.granularity_meters)
    }

    pub fn interpolate(&self) -> Result<Path, TerrainError> {
        let (a, b) = self.endpoints()?;
        self.interpolator()?.interpolate(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::PathConfig;
    use crate::TerrainError;

    #[test]
    fn test_granularity_defaults_to_100m() {
        let config: PathConfig = serde_json::from_str(
            r#"{
                "latitude_point_a": 47.502136,
                "longitude_point_a": 9.235879,
                "latitude_point_b": 47.495,
                "longitude_point_b": 9.25
            }"#,
        )
        .unwrap();
        assert_eq!(config.granularity_meters, 100.0);
        let path = config.interpolate().unwrap();
        assert!(path.len() > 2);
    }

    #[test]
    fn test_invalid_endpoint() {
        let config = PathConfig {
            latitude_point_a: 91.0,
            longitude_point_a: 0.0,
            latitude_point_b: 0.0,
            longitude_point_b: 0.0,
            granularity_meters: 100.0,
        };
        assert!(matches!(
            config.interpolate(),
            Err(TerrainError::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn test_invalid_granularity() {
        let config = PathConfig {
            latitude_point_a: 0.0,
            longitude_point_a: 0.0,
            latitude_point_b: 0.0,
            longitude_point_b: 1.0,
            granularity_meters: 0.0,
        };
        assert!(matches!(
            config.interpolate(),
            Err(TerrainError::InvalidGranularity(_))
        ));
    }
}
