/// Mean earth radius in meters.
///
/// Matches the radius `geo` uses for haversine distances so that
/// interpolated step sizes and measured segment lengths agree.
pub const MEAN_EARTH_RADIUS: f64 = 6_371_008.8;

/// Angular distance, in radians, from π within which two points are
/// treated as antipodal (roughly 6 meters on the surface).
pub const ANTIPODAL_TOLERANCE: f64 = 1e-6;

/// Default spacing between interpolated path points, in meters.
pub const DEFAULT_GRANULARITY_M: f64 = 100.0;
