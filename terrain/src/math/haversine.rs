//! These routines are taken from the [geo] crate, modified to better
//! fit our use-case.
//!
//! [geo](https://github.com/georust/geo/blob/eb0cd98f3ccfa226631af23d94d66d214ea66488/geo/src/algorithm/haversine_intermediate.rs)

use crate::constants::MEAN_EARTH_RADIUS;
use geo::{CoordFloat, Point};
use num_traits::FromPrimitive;

/// Walks the great circle from `start` to `end` in equal steps no
/// longer than `max_step_size` meters.
///
/// The first and last items are exactly `start` and `end`. When the
/// two points coincide a single point is yielded.
pub struct HaversineIter<T: CoordFloat = f64> {
    start: Point<T>,
    end: Point<T>,
    params: HaversineParams<T>,
    step_size_m: T,
    number_of_steps: T,
    current_point: T,
    inverse: T,
}

impl<T: CoordFloat + FromPrimitive> HaversineIter<T> {
    pub fn new(start: Point<T>, max_step_size: T, end: Point<T>) -> Self {
        let params = get_params(&start, &end);
        // Unwrap is fine as the radius fits in any float type.
        let total_distance = params.d * T::from(MEAN_EARTH_RADIUS).unwrap();
        let number_of_steps = (total_distance / max_step_size).ceil();
        let step_size_m = if number_of_steps > T::zero() {
            total_distance / number_of_steps
        } else {
            T::zero()
        };

        Self {
            start,
            end,
            params,
            step_size_m,
            number_of_steps,
            current_point: T::zero(),
            inverse: T::one() / number_of_steps,
        }
    }
}

impl<T: CoordFloat> HaversineIter<T> {
    /// Actual distance between consecutive points, in meters.
    pub fn step_size_m(&self) -> T {
        self.step_size_m
    }

    /// Central angle between `start` and `end`, in radians.
    pub fn angular_distance(&self) -> T {
        self.params.d
    }

    fn remaining(&self) -> usize {
        (self.number_of_steps + T::one() - self.current_point)
            .max(T::zero())
            .to_usize()
            .unwrap_or(0)
    }
}

impl<T: CoordFloat> Iterator for HaversineIter<T> {
    type Item = Point<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_point > self.number_of_steps {
            return None;
        }
        let idx = self.current_point;
        self.current_point = self.current_point + T::one();
        if idx == T::zero() {
            Some(self.start)
        } else if idx == self.number_of_steps {
            Some(self.end)
        } else {
            Some(get_point(&self.params, idx * self.inverse))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<T: CoordFloat> ExactSizeIterator for HaversineIter<T> {
    fn len(&self) -> usize {
        self.remaining()
    }
}

#[allow(clippy::many_single_char_names)]
struct HaversineParams<T> {
    d: T,
    n: T,
    o: T,
    p: T,
    q: T,
    r: T,
    s: T,
}

#[allow(clippy::many_single_char_names)]
fn get_point<T>(params: &HaversineParams<T>, f: T) -> Point<T>
where
    T: CoordFloat,
{
    let one = T::one();

    let HaversineParams {
        d,
        n,
        o,
        p,
        q,
        r,
        s,
    } = *params;

    let a = ((one - f) * d).sin() / d.sin();
    let b = (f * d).sin() / d.sin();

    let x = a * n + b * o;
    let y = a * p + b * q;
    let z = a * r + b * s;

    let lat = z.atan2(x.hypot(y));
    let lon = y.atan2(x);

    Point::new(lon.to_degrees(), lat.to_degrees())
}

#[allow(clippy::many_single_char_names)]
fn get_params<T>(p1: &Point<T>, p2: &Point<T>) -> HaversineParams<T>
where
    T: CoordFloat,
{
    let one = T::one();
    let two = one + one;

    let lat1 = p1.y().to_radians();
    let lon1 = p1.x().to_radians();
    let lat2 = p2.y().to_radians();
    let lon2 = p2.x().to_radians();

    let (lat1_sin, lat1_cos) = lat1.sin_cos();
    let (lat2_sin, lat2_cos) = lat2.sin_cos();
    let (lon1_sin, lon1_cos) = lon1.sin_cos();
    let (lon2_sin, lon2_cos) = lon2.sin_cos();

    let m = lat1_cos * lat2_cos;

    let n = lat1_cos * lon1_cos;
    let o = lat2_cos * lon2_cos;
    let p = lat1_cos * lon1_sin;
    let q = lat2_cos * lon2_sin;

    // Clamp so rounding near antipodes can't push asin out of domain.
    let k = (((lat1 - lat2) / two).sin().powi(2) + m * ((lon1 - lon2) / two).sin().powi(2))
        .sqrt()
        .min(one);

    let d = two * k.asin();

    HaversineParams {
        d,
        n,
        o,
        p,
        q,
        r: lat1_sin,
        s: lat2_sin,
    }
}
