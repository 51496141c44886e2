mod angle;
mod haversine;

pub use {
    angle::{dm_to_radians, radians_to_dm},
    haversine::HaversineIter,
};
