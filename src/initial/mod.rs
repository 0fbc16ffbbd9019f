//! Initial partitioners.
//!
//! Refinement only improves a partition locally, so it needs a seed. An
//! [`InitialPartitioner`] produces one from the grid alone:
//!
//! - [`UniformPartitioner`]: equal-width bands, ignores weights.
//! - [`ProjectionPartitioner`]: projects weights onto each axis and cuts
//!   where the cumulative weight crosses even shares.
//! - [`RandomPartitioner`]: seeded random cut points, useful for
//!   multi-start refinement and testing.

mod projection;
mod random;
mod types;
mod uniform;

pub use projection::ProjectionPartitioner;
pub use random::RandomPartitioner;
pub use types::InitialPartitioner;
pub use uniform::UniformPartitioner;

use crate::error::{Axis, PartitionError, Result};

/// Checks that `bands` non-empty bands fit into an axis of `extent`.
pub(crate) fn check_bands(axis: Axis, bands: usize, extent: usize) -> Result<()> {
    if bands == 0 {
        return Err(PartitionError::InvalidConfig(format!(
            "{axis} band count must be at least 1"
        )));
    }
    if bands > extent {
        return Err(PartitionError::TooManyBands {
            axis,
            bands,
            extent,
        });
    }
    Ok(())
}

/// Equal-width cut points for `bands` bands over `extent` indices.
pub(crate) fn uniform_cuts(bands: usize, extent: usize) -> Vec<usize> {
    (1..bands).map(|k| k * extent / bands).collect()
}
