//! Whole-partition load reports.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::types::BlockStatistic;
use crate::partition::Partition;

/// Load of every block, indexed `[row_band][col_band]`.
pub fn block_loads<S: BlockStatistic>(statistic: &S, partition: &Partition) -> Vec<Vec<u64>> {
    let row_load = |i: usize| -> Vec<u64> {
        (0..partition.col_band_count())
            .map(|j| statistic.evaluate(partition, i, j))
            .collect()
    };

    #[cfg(feature = "parallel")]
    {
        (0..partition.row_band_count())
            .into_par_iter()
            .map(row_load)
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        (0..partition.row_band_count()).map(row_load).collect()
    }
}

/// Maximum load over all blocks: the quantity the partition minimizes.
pub fn max_block_load<S: BlockStatistic>(statistic: &S, partition: &Partition) -> u64 {
    let row_max = |i: usize| -> u64 {
        (0..partition.col_band_count())
            .map(|j| statistic.evaluate(partition, i, j))
            .max()
            .unwrap_or(0)
    };

    #[cfg(feature = "parallel")]
    {
        (0..partition.row_band_count())
            .into_par_iter()
            .map(row_max)
            .max()
            .unwrap_or(0)
    }
    #[cfg(not(feature = "parallel"))]
    {
        (0..partition.row_band_count())
            .map(row_max)
            .max()
            .unwrap_or(0)
    }
}
