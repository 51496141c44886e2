use crate::{FresnelZone, FresnelZoneConfig, KnifeEdge, KnifeEdgeConfig, RfError};
use serde::{Deserialize, Serialize};
use std::io::Read;
use terrain::PathConfig;

/// All recognized options, as loaded from JSON.
///
/// ```json
/// {
///   "path": {
///     "latitude_point_a": 47.502136,
///     "longitude_point_a": 9.235879,
///     "latitude_point_b": 47.495,
///     "longitude_point_b": 9.25,
///     "granularity_meters": 100
///   },
///   "fresnel": { "wavelength_meter": 0.3, "distance_meter": 10000 },
///   "knife_edge": {
///     "distance_receiver_obstruction": 1000,
///     "distance_transmitter_obstruction": 1000,
///     "height_obstruction": 20,
///     "wavelength_meter": 0.7
///   }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LinkConfig {
    pub path: PathConfig,

    #[serde(default)]
    pub fresnel: Option<FresnelZoneConfig>,

    #[serde(default)]
    pub knife_edge: Option<KnifeEdgeConfig>,
}

impl LinkConfig {
    pub fn from_json(json: &str) -> Result<Self, RfError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, RfError> {
        let config: Self = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks every section, failing on the first invalid one.
    pub fn validate(&self) -> Result<(), RfError> {
        self.path.endpoints()?;
        self.path.interpolator()?;
        self.fresnel_zone().transpose()?;
        self.knife_edge().transpose()?;
        Ok(())
    }

    pub fn fresnel_zone(&self) -> Option<Result<FresnelZone, RfError>> {
        self.fresnel.map(FresnelZone::new)
    }

    pub fn knife_edge(&self) -> Option<Result<KnifeEdge, RfError>> {
        self.knife_edge.map(KnifeEdge::new)
    }
}
