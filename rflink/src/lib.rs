//! # Radio Line of Sight
//!
//! `rflink` provides Fresnel zone and knife-edge diffraction
//! routines, and combines them with [`terrain`] profiles into
//! point-to-point link estimates.

mod config;
mod error;
pub mod fresnel;
pub mod knife_edge;
pub mod p2p;
pub mod render;

pub use {
    crate::{
        config::LinkConfig,
        error::RfError,
        fresnel::{freq_to_wavelen, FresnelZone, FresnelZoneConfig},
        knife_edge::{DiffractionResult, KnifeEdge, KnifeEdgeConfig, ObstructionGeometry},
        p2p::Point2Point,
        render::{Render, TextPlot},
    },
    terrain,
};
