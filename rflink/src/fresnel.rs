use crate::{
    error::{non_negative, positive},
    RfError,
};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Speed of light in m/s
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// Fraction of the first Fresnel zone that must be unobstructed for
/// a link to behave like free space.
pub const CLEARANCE_FRACTION: f64 = 0.6;

/// Converts a frequency to its free-space wavelength in meters.
pub fn freq_to_wavelen(f_hz: f64) -> Result<f64, RfError> {
    Ok(SPEED_OF_LIGHT / positive("freq_hz", f_hz)?)
}

/// Returns the first Fresnel zone radius, in meters, at a point `d1_m`
/// from the transmitter and `d2_m` from the receiver.
///
/// # Errors
///
/// [`RfError::InvalidParameter`] if the wavelength is not positive or
/// either distance is negative.
pub fn radius(wavelength_m: f64, d1_m: f64, d2_m: f64) -> Result<f64, RfError> {
    radius_nth(1, wavelength_m, d1_m, d2_m)
}

/// Returns the radius of the `zone`th Fresnel zone.
pub fn radius_nth(zone: u8, wavelength_m: f64, d1_m: f64, d2_m: f64) -> Result<f64, RfError> {
    if zone == 0 {
        return Err(RfError::InvalidParameter {
            name: "zone",
            value: 0.0,
        });
    }
    let wavelength_m = positive("wavelength_meter", wavelength_m)?;
    let d1_m = non_negative("distance_tx_meter", d1_m)?;
    let d2_m = non_negative("distance_rx_meter", d2_m)?;
    Ok(fresnel(f64::from(zone), wavelength_m, d1_m, d2_m))
}

/// Unchecked radius. Zero at either endpoint.
pub(crate) fn fresnel(zone: f64, wavelength_m: f64, d1_m: f64, d2_m: f64) -> f64 {
    if d1_m == 0.0 || d2_m == 0.0 {
        0.0
    } else {
        (zone * wavelength_m * d1_m * d2_m / (d1_m + d2_m)).sqrt()
    }
}

/// Recognized options for a Fresnel zone over a whole link.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FresnelZoneConfig {
    pub wavelength_meter: f64,
    pub distance_meter: f64,
}

/// Represents the nth fresnel zone of a radio link.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FresnelZone {
    /// Which fresnel zone we're interested in.
    zone: u8,
    wavelength_m: f64,
    distance_m: f64,
}

impl FresnelZone {
    /// Returns the first Fresnel zone for the link described by
    /// `config`.
    pub fn new(config: FresnelZoneConfig) -> Result<Self, RfError> {
        Ok(Self {
            zone: 1,
            wavelength_m: positive("wavelength_meter", config.wavelength_meter)?,
            distance_m: non_negative("distance_meter", config.distance_meter)?,
        })
    }

    /// Selects a higher order zone.
    pub fn with_zone(mut self, zone: u8) -> Result<Self, RfError> {
        if zone == 0 {
            return Err(RfError::InvalidParameter {
                name: "zone",
                value: 0.0,
            });
        }
        self.zone = zone;
        Ok(self)
    }

    pub fn wavelength_m(&self) -> f64 {
        self.wavelength_m
    }

    pub fn distance_m(&self) -> f64 {
        self.distance_m
    }

    /// Zone radius at `d_tx_m` meters from the transmitter.
    pub fn radius_at(&self, d_tx_m: f64) -> Result<f64, RfError> {
        let d_tx_m = non_negative("distance_tx_meter", d_tx_m)?;
        if d_tx_m > self.distance_m {
            return Err(RfError::InvalidParameter {
                name: "distance_tx_meter",
                value: d_tx_m,
            });
        }
        radius_nth(
            self.zone,
            self.wavelength_m,
            d_tx_m,
            self.distance_m - d_tx_m,
        )
    }

    /// Radius which should be kept free of obstructions at the link
    /// midpoint, 60% of the first zone.
    pub fn clearance_radius(&self) -> Result<f64, RfError> {
        let half = self.distance_m / 2.0;
        Ok(CLEARANCE_FRACTION * radius(self.wavelength_m, half, half)?)
    }

    /// Returns a new FresnelZoneIter of length `len`.
    pub fn iter(&self, len: usize) -> FresnelZoneIter {
        FresnelZoneIter {
            zone: f64::from(self.zone),
            wavelength_m: self.wavelength_m,
            distance_m: self.distance_m,
            range: 0..len,
        }
    }
}

/// Yields zone radii at evenly spaced points from transmitter to
/// receiver, both ends included.
#[derive(Debug)]
pub struct FresnelZoneIter {
    /// Which fresnel zone we're interested in.
    zone: f64,
    wavelength_m: f64,
    distance_m: f64,
    range: Range<usize>,
}

impl Iterator for FresnelZoneIter {
    type Item = f64;

    #[inline]
    fn next(&mut self) -> Option<f64> {
        let last = self.range.end.saturating_sub(1);
        self.range.next().map(|n| {
            if last == 0 {
                return 0.0;
            }
            #[allow(clippy::cast_precision_loss)]
            let d1 = self.distance_m * (n as f64 / last as f64);
            let d2 = (self.distance_m - d1).max(0.0);
            fresnel(self.zone, self.wavelength_m, d1, d2)
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl ExactSizeIterator for FresnelZoneIter {}

#[cfg(test)]
mod tests {
    use super::{freq_to_wavelen, radius, radius_nth, FresnelZone, FresnelZoneConfig};
    use crate::RfError;
    use approx::assert_relative_eq;

    fn zone(f_hz: f64, distance_m: f64) -> FresnelZone {
        FresnelZone::new(FresnelZoneConfig {
            wavelength_meter: freq_to_wavelen(f_hz).unwrap(),
            distance_meter: distance_m,
        })
        .unwrap()
    }

    #[test]
    fn test_reference_radius() {
        // 1 GHz, 5 km legs.
        assert_relative_eq!(
            radius(0.3, 5000.0, 5000.0).unwrap(),
            27.386_127_875_258_307,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_zero_at_endpoints() {
        for wavelength in [0.01, 0.3, 12.0] {
            for d in [0.0, 1.0, 5000.0] {
                assert_eq!(radius(wavelength, d, 0.0).unwrap(), 0.0);
                assert_eq!(radius(wavelength, 0.0, d).unwrap(), 0.0);
            }
        }
    }

    #[test]
    fn test_invalid_parameters() {
        for (wavelength, d1, d2) in [
            (0.0, 1.0, 1.0),
            (-0.3, 1.0, 1.0),
            (f64::NAN, 1.0, 1.0),
            (0.3, -1.0, 1.0),
            (0.3, 1.0, -1.0),
        ] {
            assert!(matches!(
                radius(wavelength, d1, d2),
                Err(RfError::InvalidParameter { .. })
            ));
        }
        assert!(radius_nth(0, 0.3, 1.0, 1.0).is_err());
        assert!(freq_to_wavelen(0.0).is_err());
    }

    #[test]
    fn test_zero_len_fresnel_zone_iter() {
        let mut iter = zone(1.0, 10e3).iter(0);
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_single_point_fresnel_zone_iter() {
        let radii = zone(900e6, 1e3).iter(1).collect::<Vec<_>>();
        assert_eq!(radii, vec![0.0]);
    }

    #[test]
    fn test_1st_fresnel_zone() {
        let mut iter = zone(900e6, 1e3).iter(3);
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next(), Some(0.0));
        assert_relative_eq!(iter.next().unwrap(), 9.125_551_094_469_735, epsilon = 1e-9);
        assert_eq!(iter.next(), Some(0.0));
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_2nd_fresnel_zone() {
        let mut iter = zone(900e6, 1e3).with_zone(2).unwrap().iter(3);
        assert_eq!(iter.next(), Some(0.0));
        assert_relative_eq!(iter.next().unwrap(), 12.905_478_121_927_74, epsilon = 1e-9);
        assert_eq!(iter.next(), Some(0.0));
    }

    #[test]
    fn test_radius_at() {
        let zone = FresnelZone::new(FresnelZoneConfig {
            wavelength_meter: 0.3,
            distance_meter: 10_000.0,
        })
        .unwrap();
        assert_relative_eq!(
            zone.radius_at(5000.0).unwrap(),
            27.386_127_875_258_307,
            epsilon = 1e-9
        );
        assert_eq!(zone.radius_at(0.0).unwrap(), 0.0);
        assert_eq!(zone.radius_at(10_000.0).unwrap(), 0.0);
        assert!(zone.radius_at(10_001.0).is_err());
    }

    #[test]
    fn test_clearance_radius() {
        let zone = FresnelZone::new(FresnelZoneConfig {
            wavelength_meter: 0.3,
            distance_meter: 10_000.0,
        })
        .unwrap();
        // 0.6 * sqrt(λ D) / 2
        assert_relative_eq!(
            zone.clearance_radius().unwrap(),
            16.431_676_725_154_983,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_config_validated_on_construction() {
        let bad = FresnelZone::new(FresnelZoneConfig {
            wavelength_meter: 0.0,
            distance_meter: 1.0,
        });
        assert!(matches!(
            bad,
            Err(RfError::InvalidParameter {
                name: "wavelength_meter",
                ..
            })
        ));
        let bad = FresnelZone::new(FresnelZoneConfig {
            wavelength_meter: 0.3,
            distance_meter: -1.0,
        });
        assert!(bad.is_err());
    }
}
