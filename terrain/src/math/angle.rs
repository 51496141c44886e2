//! Degree/arcminute conversions.
//!
//! Minutes carry the same sign as the angle they belong to, so
//! `-0.5°` is `(0, -30.0)`.

use std::f64::consts::PI;

/// Converts whole degrees plus arcminutes to radians.
pub fn dm_to_radians(degrees: i32, minutes: f64) -> f64 {
    (f64::from(degrees) + minutes / 60.0) * (PI / 180.0)
}

/// Converts radians to whole degrees (truncated toward zero) and the
/// remaining arcminutes.
pub fn radians_to_dm(radians: f64) -> (i32, f64) {
    let degrees = radians * (180.0 / PI);
    let whole = degrees.trunc();
    #[allow(clippy::cast_possible_truncation)]
    (whole as i32, (degrees - whole) * 60.0)
}
