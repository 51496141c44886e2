use terrain::TerrainError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RfError {
    #[error("missing required parameter '{0}'")]
    Builder(&'static str),

    #[error("invalid parameter '{name}': {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("degenerate geometry, {0}")]
    DegenerateGeometry(&'static str),

    #[error("invalid configuration, {0}")]
    Config(#[from] serde_json::Error),

    #[error("{0}")]
    Terrain(#[from] TerrainError),
}

/// Returns `value` if it is finite and strictly positive.
pub(crate) fn positive(name: &'static str, value: f64) -> Result<f64, RfError> {
    if value > 0.0 && value.is_finite() {
        Ok(value)
    } else {
        Err(RfError::InvalidParameter { name, value })
    }
}

/// Returns `value` if it is finite and not negative.
pub(crate) fn non_negative(name: &'static str, value: f64) -> Result<f64, RfError> {
    if value >= 0.0 && value.is_finite() {
        Ok(value)
    } else {
        Err(RfError::InvalidParameter { name, value })
    }
}

/// Returns `value` if it is finite, of either sign.
pub(crate) fn finite(name: &'static str, value: f64) -> Result<f64, RfError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(RfError::InvalidParameter { name, value })
    }
}
