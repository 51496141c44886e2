use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TerrainError {
    #[error("missing required parameter '{0}'")]
    Builder(&'static str),

    #[error("invalid coordinate, lat: {lat}, lon: {lon}")]
    InvalidCoordinate { lat: f64, lon: f64 },

    #[error("invalid granularity {0}, must be a positive number of meters")]
    InvalidGranularity(f64),

    #[error("degenerate geometry, {0}")]
    DegenerateGeometry(&'static str),

    #[error("path has {path} points but {elevations} elevations were provided")]
    MismatchedLength { path: usize, elevations: usize },

    #[error("elevation lookup failed, {0}")]
    Lookup(#[from] LookupError),
}

/// Failures surfaced by an [`ElevationLookup`](crate::ElevationLookup)
/// implementation.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("no coordinates to look up")]
    EmptyRequest,

    #[error("elevation service error, {0}")]
    Service(String),

    #[error("rate limited by elevation service")]
    RateLimited { retry_after: Option<Duration> },

    #[error("expected {expected} elevations, received {received}")]
    PartialData { expected: usize, received: usize },
}
