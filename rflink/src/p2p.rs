use crate::{
    error::positive,
    fresnel::{fresnel, freq_to_wavelen},
    knife_edge::{diffraction_loss_db, unchecked_parameter, DiffractionResult, ObstructionGeometry},
    render::Render,
    RfError,
};
use log::debug;
use terrain::{
    constants::{DEFAULT_GRANULARITY_M, MEAN_EARTH_RADIUS},
    Coordinate, ElevationLookup, Profile, C,
};

/// Point to point line-of-sight estimate.
#[derive(Debug, Clone)]
pub struct Point2Point {
    /// Wavelength used for the Fresnel zone and diffraction.
    pub wavelength_m: C,

    /// Cumulative path distance for all following vectors.
    pub distances_m: Vec<C>,

    /// Location of step along the great circle route from `start` to
    /// `end`.
    pub great_circle: Vec<Coordinate>,

    /// Elevation at each step along the great circle route from
    /// `start` to `end`, including antenna heights at either end and
    /// earth bulge when requested.
    pub terrain_elev_m: Vec<C>,

    /// A straight line from `start` to `end`.
    pub los_elev_m: Vec<C>,

    /// First Fresnel zone radius from `start` to `end`.
    pub fresnel_zone_m: Vec<C>,

    /// Interior sample with the largest diffraction parameter, if the
    /// path has any interior samples.
    pub obstruction: Option<ObstructionGeometry>,

    /// Knife-edge loss caused by `obstruction`.
    pub diffraction: Option<DiffractionResult>,
}

impl Point2Point {
    pub fn builder() -> Point2PointBuilder {
        Point2PointBuilder {
            freq_hz: None,
            wavelength_m: None,
            start: None,
            granularity_m: DEFAULT_GRANULARITY_M,
            end: None,
            start_alt_m: 0.0,
            end_alt_m: 0.0,
            earth_curve: false,
        }
    }

    /// Total path distance in meters.
    pub fn distance_m(&self) -> C {
        self.distances_m.last().copied().unwrap_or(0.0)
    }

    /// `(cumulative_distance_m, elevation_m)` pairs for plotting.
    pub fn series(&self) -> Vec<(C, C)> {
        self.distances_m
            .iter()
            .copied()
            .zip(self.terrain_elev_m.iter().copied())
            .collect()
    }

    /// Hands the terrain series and dominant obstruction to `renderer`.
    pub fn render<R: Render + ?Sized>(&self, renderer: &mut R) {
        renderer.render(&self.series(), self.obstruction.as_ref());
    }
}

pub struct Point2PointBuilder {
    /// Transmitter frequency (this or `wavelength` required).
    freq_hz: Option<C>,

    /// Transmitter wavelength (this or `freq` required).
    wavelength_m: Option<C>,

    /// Start point of the path (required).
    start: Option<Coordinate>,

    /// Maximum distance between points (meters, defaults to 100).
    granularity_m: C,

    /// End point of the path (required).
    end: Option<Coordinate>,

    /// Starting altitude above ground (meters, defaults to 0).
    start_alt_m: C,

    /// Ending altitude above ground (meters, defaults to 0).
    end_alt_m: C,

    /// Add earth curvature (defaults to false).
    earth_curve: bool,
}

impl Point2PointBuilder {
    /// Frequency of signal (Hz). Overridden by `wavelength`.
    #[must_use]
    pub fn freq(mut self, freq_hz: C) -> Self {
        self.freq_hz = Some(freq_hz);
        self
    }

    /// Wavelength of signal (meters).
    #[must_use]
    pub fn wavelength(mut self, meters: C) -> Self {
        self.wavelength_m = Some(meters);
        self
    }

    /// Start point of the path (required).
    #[must_use]
    pub fn start(mut self, coord: Coordinate) -> Self {
        self.start = Some(coord);
        self
    }

    /// Starting altitude above ground (meters, defaults to 0).
    #[must_use]
    pub fn start_alt(mut self, meters: C) -> Self {
        self.start_alt_m = meters;
        self
    }

    /// Maximum distance between points (meters, defaults to 100).
    #[must_use]
    pub fn granularity(mut self, meters: C) -> Self {
        self.granularity_m = meters;
        self
    }

    /// End point of the path (required).
    #[must_use]
    pub fn end(mut self, coord: Coordinate) -> Self {
        self.end = Some(coord);
        self
    }

    /// Ending altitude above ground (meters, defaults to 0).
    #[must_use]
    pub fn end_alt(mut self, meters: C) -> Self {
        self.end_alt_m = meters;
        self
    }

    /// Add earth curvature (defaults to false).
    #[must_use]
    pub fn earth_curve(mut self, add_curve: bool) -> Self {
        self.earth_curve = add_curve;
        self
    }

    pub fn build<L>(&self, lookup: &L) -> Result<Point2Point, RfError>
    where
        L: ElevationLookup + ?Sized,
    {
        let wavelength_m = match (self.wavelength_m, self.freq_hz) {
            (Some(wavelength_m), _) => positive("wavelength_meter", wavelength_m)?,
            (None, Some(freq_hz)) => freq_to_wavelen(freq_hz)?,
            (None, None) => return Err(RfError::Builder("freq")),
        };
        let start = self.start.ok_or(RfError::Builder("start"))?;
        let end = self.end.ok_or(RfError::Builder("end"))?;
        if start == end {
            return Err(RfError::DegenerateGeometry("link endpoints coincide"));
        }

        let Profile {
            distances_m,
            great_circle,
            mut terrain_elev_m,
        } = Profile::builder()
            .start(start)
            .start_alt(self.start_alt_m)
            .granularity(self.granularity_m)
            .end(end)
            .end_alt(self.end_alt_m)
            .build(lookup)?;

        let total_distance_m = distances_m
            .last()
            .copied()
            .ok_or(RfError::DegenerateGeometry("empty profile"))?;

        if self.earth_curve {
            for (elev, d1) in terrain_elev_m.iter_mut().zip(distances_m.iter()) {
                *elev += earth_bulge(*d1, total_distance_m - d1);
            }
        }

        let los_elev_m = line_of_sight(&distances_m, &terrain_elev_m);

        let fresnel_zone_m = distances_m
            .iter()
            .map(|&d1| fresnel(1.0, wavelength_m, d1, (total_distance_m - d1).max(0.0)))
            .collect();

        let obstruction = dominant_obstruction(
            &distances_m,
            &terrain_elev_m,
            &los_elev_m,
            wavelength_m,
        );
        let diffraction = obstruction.map(|geometry| {
            let v = unchecked_parameter(
                geometry.height_obstruction,
                geometry.distance_transmitter_obstruction,
                geometry.distance_receiver_obstruction,
                wavelength_m,
            );
            DiffractionResult {
                v,
                loss_db: diffraction_loss_db(v),
            }
        });
        debug!("p2p; obstruction: {obstruction:?}, diffraction: {diffraction:?}");

        Ok(Point2Point {
            wavelength_m,
            distances_m,
            great_circle,
            terrain_elev_m,
            los_elev_m,
            fresnel_zone_m,
            obstruction,
            diffraction,
        })
    }
}

/// Height, in meters, the earth's surface rises above the chord
/// between two points `d1_m` and `d2_m` away.
pub fn earth_bulge(d1_m: C, d2_m: C) -> C {
    d1_m * d2_m / (2.0 * MEAN_EARTH_RADIUS)
}

/// Straight line from the first to the last elevation.
fn line_of_sight(distances_m: &[C], terrain_elev_m: &[C]) -> Vec<C> {
    match (
        terrain_elev_m.first(),
        terrain_elev_m.last(),
        distances_m.last(),
    ) {
        (Some(&start_m), Some(&end_m), Some(&total_m)) if total_m > 0.0 => distances_m
            .iter()
            .map(|d| start_m + (end_m - start_m) * d / total_m)
            .collect(),
        _ => terrain_elev_m.to_vec(),
    }
}

/// Picks the interior sample with the largest diffraction parameter.
fn dominant_obstruction(
    distances_m: &[C],
    terrain_elev_m: &[C],
    los_elev_m: &[C],
    wavelength_m: C,
) -> Option<ObstructionGeometry> {
    let total_m = *distances_m.last()?;
    let interior = 1..distances_m.len().saturating_sub(1);
    interior
        .map(|idx| {
            let d_tx = distances_m[idx];
            let d_rx = total_m - d_tx;
            let h = terrain_elev_m[idx] - los_elev_m[idx];
            (unchecked_parameter(h, d_tx, d_rx, wavelength_m), idx)
        })
        .filter(|(v, _)| v.is_finite())
        .max_by(|(a, _), (b, _)| a.total_cmp(b))
        .map(|(_, idx)| ObstructionGeometry {
            distance_receiver_obstruction: total_m - distances_m[idx],
            distance_transmitter_obstruction: distances_m[idx],
            height_obstruction: terrain_elev_m[idx] - los_elev_m[idx],
        })
}
