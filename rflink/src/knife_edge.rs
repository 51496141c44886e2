//! Single knife-edge diffraction.
//!
//! # References
//!
//! 1. [ITU-R P.526-15, §4.1](https://www.itu.int/rec/R-REC-P.526-15-201910-I/en)

use crate::{
    error::{finite, positive},
    RfError,
};
use serde::{Deserialize, Serialize};

/// Below this value of v the approximation in [`diffraction_loss_db`]
/// is 0 dB.
pub const V_NO_LOSS: f64 = -0.78;

/// A single obstruction between transmitter and receiver.
///
/// Both distances are positive and sum to the link length.
/// `height_obstruction` is measured from the line of sight, positive
/// when the obstruction pokes above it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ObstructionGeometry {
    pub distance_receiver_obstruction: f64,
    pub distance_transmitter_obstruction: f64,
    pub height_obstruction: f64,
}

impl ObstructionGeometry {
    pub fn new(
        distance_receiver_obstruction: f64,
        distance_transmitter_obstruction: f64,
        height_obstruction: f64,
    ) -> Result<Self, RfError> {
        let geometry = Self {
            distance_receiver_obstruction,
            distance_transmitter_obstruction,
            height_obstruction,
        };
        geometry.validate()?;
        Ok(geometry)
    }

    /// Zero distances put the obstruction on an endpoint, where v is
    /// undefined.
    pub fn validate(&self) -> Result<(), RfError> {
        positive(
            "distance_receiver_obstruction",
            self.distance_receiver_obstruction,
        )?;
        positive(
            "distance_transmitter_obstruction",
            self.distance_transmitter_obstruction,
        )?;
        finite("height_obstruction", self.height_obstruction)?;
        Ok(())
    }

    /// Transmitter to receiver distance in meters.
    pub fn total_distance_m(&self) -> f64 {
        self.distance_receiver_obstruction + self.distance_transmitter_obstruction
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DiffractionResult {
    /// Fresnel-Kirchhoff diffraction parameter. Negative when the
    /// obstruction is below the line of sight.
    pub v: f64,

    /// Diffraction loss in dB, never negative.
    pub loss_db: f64,
}

/// Recognized options for a knife-edge calculation.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct KnifeEdgeConfig {
    pub distance_receiver_obstruction: f64,
    pub distance_transmitter_obstruction: f64,
    pub height_obstruction: f64,
    pub wavelength_meter: f64,
}

/// A validated knife-edge diffraction problem.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KnifeEdge {
    geometry: ObstructionGeometry,
    wavelength_m: f64,
}

impl KnifeEdge {
    pub fn new(config: KnifeEdgeConfig) -> Result<Self, RfError> {
        let geometry = ObstructionGeometry::new(
            config.distance_receiver_obstruction,
            config.distance_transmitter_obstruction,
            config.height_obstruction,
        )?;
        Self::from_geometry(geometry, config.wavelength_meter)
    }

    pub fn from_geometry(
        geometry: ObstructionGeometry,
        wavelength_m: f64,
    ) -> Result<Self, RfError> {
        geometry.validate()?;
        Ok(Self {
            geometry,
            wavelength_m: positive("wavelength_meter", wavelength_m)?,
        })
    }

    pub fn geometry(&self) -> &ObstructionGeometry {
        &self.geometry
    }

    pub fn loss(&self) -> Result<DiffractionResult, RfError> {
        let v = diffraction_parameter(&self.geometry, self.wavelength_m)?;
        Ok(DiffractionResult {
            v,
            loss_db: diffraction_loss_db(v),
        })
    }
}

/// Computes v and the resulting loss for one obstruction.
///
/// # Errors
///
/// [`RfError::InvalidParameter`] if the wavelength is not positive or
/// either distance is not positive.
pub fn loss(
    distance_rx_obstruction: f64,
    distance_tx_obstruction: f64,
    height_obstruction: f64,
    wavelength_m: f64,
) -> Result<DiffractionResult, RfError> {
    KnifeEdge::new(KnifeEdgeConfig {
        distance_receiver_obstruction: distance_rx_obstruction,
        distance_transmitter_obstruction: distance_tx_obstruction,
        height_obstruction,
        wavelength_meter: wavelength_m,
    })?
    .loss()
}

/// Fresnel-Kirchhoff diffraction parameter,
/// `v = h * sqrt(2 (d1 + d2) / (λ d1 d2))`.
pub fn diffraction_parameter(
    geometry: &ObstructionGeometry,
    wavelength_m: f64,
) -> Result<f64, RfError> {
    geometry.validate()?;
    let wavelength_m = positive("wavelength_meter", wavelength_m)?;
    Ok(unchecked_parameter(
        geometry.height_obstruction,
        geometry.distance_transmitter_obstruction,
        geometry.distance_receiver_obstruction,
        wavelength_m,
    ))
}

pub(crate) fn unchecked_parameter(h_m: f64, d1_m: f64, d2_m: f64, wavelength_m: f64) -> f64 {
    h_m * (2.0 * (d1_m + d2_m) / (wavelength_m * d1_m * d2_m)).sqrt()
}

/// Knife-edge loss J(v) in dB.
///
/// `J(v) = 6.9 + 20 log10(sqrt((v - 0.1)² + 1) + v - 0.1)` for
/// `v > -0.78`, 0 otherwise. Non-decreasing in v.
pub fn diffraction_loss_db(v: f64) -> f64 {
    if v <= V_NO_LOSS {
        0.0
    } else {
        let t = v - 0.1;
        (6.9 + 20.0 * ((t * t + 1.0).sqrt() + t).log10()).max(0.0)
    }
}
