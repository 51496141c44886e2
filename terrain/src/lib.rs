//! # Terrain Profiles
//!
//! `terrain` walks great circle paths between two coordinates and
//! pairs each step with an elevation from an [`ElevationLookup`].

mod config;
pub mod constants;
mod coordinate;
mod error;
mod interpolate;
mod lookup;
pub mod math;
mod profile;

/// Floating point type used for all coordinates and distances.
pub type C = f64;

pub use crate::{
    config::PathConfig,
    coordinate::Coordinate,
    error::{LookupError, TerrainError},
    interpolate::{great_circle_distance, interpolate, GeodesicInterpolator, Path},
    lookup::{checked_lookup, BatchedLookup, ElevationLookup},
    profile::{assemble, ElevationSample, Profile, ProfileBuilder},
};
pub use geo;
