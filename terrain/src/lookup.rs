//! Elevation lookup contract.
//!
//! Elevation data usually lives behind some remote service. The core
//! only depends on [`ElevationLookup`], so callers can plug in a web
//! client, a tile store, or a fixed table in tests.

use crate::{Coordinate, LookupError, C};
use log::{debug, trace};
use rayon::prelude::*;

/// Maps coordinates to elevations in meters.
///
/// Implementations must return exactly one elevation per input
/// coordinate, in input order.
pub trait ElevationLookup: Send + Sync {
    fn lookup(&self, coords: &[Coordinate]) -> Result<Vec<C>, LookupError>;
}

impl<F> ElevationLookup for F
where
    F: Fn(&[Coordinate]) -> Result<Vec<C>, LookupError> + Send + Sync,
{
    fn lookup(&self, coords: &[Coordinate]) -> Result<Vec<C>, LookupError> {
        self(coords)
    }
}

/// Calls `lookup` and enforces the one-elevation-per-coordinate
/// contract.
pub fn checked_lookup<L>(lookup: &L, coords: &[Coordinate]) -> Result<Vec<C>, LookupError>
where
    L: ElevationLookup + ?Sized,
{
    if coords.is_empty() {
        return Err(LookupError::EmptyRequest);
    }
    let elevations = lookup.lookup(coords)?;
    if elevations.len() == coords.len() {
        Ok(elevations)
    } else {
        Err(LookupError::PartialData {
            expected: coords.len(),
            received: elevations.len(),
        })
    }
}

/// Splits large requests into batches and issues them concurrently.
///
/// Results are concatenated in input order. If any batch fails, or
/// comes back short, the whole lookup fails.
#[derive(Debug, Clone)]
pub struct BatchedLookup<L> {
    inner: L,
    batch_size: usize,
}

impl<L: ElevationLookup> BatchedLookup<L> {
    /// Wraps `inner`, sending at most `batch_size` coordinates per
    /// request. A `batch_size` of 0 is treated as 1.
    pub fn new(inner: L, batch_size: usize) -> Self {
        Self {
            inner,
            batch_size: batch_size.max(1),
        }
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn into_inner(self) -> L {
        self.inner
    }
}

impl<L: ElevationLookup> ElevationLookup for BatchedLookup<L> {
    fn lookup(&self, coords: &[Coordinate]) -> Result<Vec<C>, LookupError> {
        if coords.is_empty() {
            return Err(LookupError::EmptyRequest);
        }
        debug!(
            "batched lookup; coords: {}, batches: {}",
            coords.len(),
            coords.len().div_ceil(self.batch_size)
        );
        let batches = coords
            .par_chunks(self.batch_size)
            .enumerate()
            .map(|(idx, batch)| {
                trace!("lookup batch {idx}, len: {}", batch.len());
                checked_lookup(&self.inner, batch)
            })
            .collect::<Result<Vec<Vec<C>>, LookupError>>()?;
        Ok(batches.into_iter().flatten().collect())
    }
}
