//! Bands balanced on axis projections.

use super::types::InitialPartitioner;
use super::{check_bands, uniform_cuts};
use crate::error::{Axis, Result};
use crate::grid::LoadGrid;
use crate::partition::Partition;

/// Cuts each axis independently on its 1D weight projection.
///
/// Row sums (and column sums) are accumulated, and cut `k` is placed at
/// the index whose prefix weight is closest to `k · total / bands`,
/// subject to leaving every band non-empty. An all-zero projection falls
/// back to equal-width bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectionPartitioner {
    row_bands: usize,
    col_bands: usize,
}

impl ProjectionPartitioner {
    /// Creates a partitioner producing `row_bands × col_bands` blocks.
    pub fn new(row_bands: usize, col_bands: usize) -> Self {
        Self {
            row_bands,
            col_bands,
        }
    }
}

impl InitialPartitioner for ProjectionPartitioner {
    fn name(&self) -> &str {
        "projection"
    }

    fn partition(&self, grid: &LoadGrid) -> Result<Partition> {
        check_bands(Axis::Row, self.row_bands, grid.rows())?;
        check_bands(Axis::Col, self.col_bands, grid.cols())?;
        Ok(Partition::new(
            balanced_cuts(&grid.row_sums(), self.row_bands),
            balanced_cuts(&grid.col_sums(), self.col_bands),
        ))
    }
}

/// Greedy 1D cuts over `weights` for `bands` bands.
fn balanced_cuts(weights: &[u64], bands: usize) -> Vec<usize> {
    let extent = weights.len();
    let total: u64 = weights.iter().sum();
    if total == 0 {
        return uniform_cuts(bands, extent);
    }

    // prefix[i] = weight of indices [0, i)
    let mut prefix = Vec::with_capacity(extent + 1);
    prefix.push(0u64);
    for &w in weights {
        prefix.push(prefix[prefix.len() - 1] + w);
    }

    let mut cuts = Vec::with_capacity(bands.saturating_sub(1));
    let mut previous = 0usize;
    for k in 1..bands {
        let target = (u128::from(total) * k as u128 / bands as u128) as u64;
        let lo = previous + 1;
        let hi = extent - (bands - k);

        // First index whose prefix reaches the target; the one before it
        // wins ties.
        let above = prefix.partition_point(|&p| p < target);
        let overshoot = prefix.get(above).map_or(u64::MAX, |&p| p - target);
        let cut = if above > 0 && target - prefix[above - 1] <= overshoot {
            above - 1
        } else {
            above
        };
        let cut = cut.clamp(lo, hi);
        cuts.push(cut);
        previous = cut;
    }
    cuts
}
