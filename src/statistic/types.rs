//! Core trait for block statistics.

use crate::grid::LoadGrid;
use crate::partition::{BlockAddress, Partition};

/// How the cells of a block are folded into one load value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Aggregate {
    /// Largest single cell weight in the block.
    #[default]
    Max,
    /// Total weight of the block.
    Sum,
}

/// Reports the aggregate load of one block of a partition.
///
/// Implementations must be pure functions of the grid they are bound to
/// and the partition passed in: two calls with equal arguments return
/// equal values. Any caching is private to the implementation and may
/// depend only on the grid.
///
/// # Examples
///
/// ```
/// use u_rectpart::grid::LoadGrid;
/// use u_rectpart::partition::Partition;
/// use u_rectpart::statistic::{Aggregate, BlockStatistic, NaiveStatistic};
///
/// let grid = LoadGrid::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
/// let stat = NaiveStatistic::new(&grid, Aggregate::Sum);
/// let partition = Partition::new(vec![1], vec![]);
/// assert_eq!(stat.evaluate(&partition, 0, 0), 3);
/// assert_eq!(stat.evaluate(&partition, 1, 0), 7);
/// ```
pub trait BlockStatistic: Send + Sync {
    /// The grid this statistic is bound to.
    fn grid(&self) -> &LoadGrid;

    /// Load of block `(row_band, col_band)` under `partition`.
    ///
    /// `row_band` must be in `[0, P]` and `col_band` in `[0, Q]`.
    fn evaluate(&self, partition: &Partition, row_band: usize, col_band: usize) -> u64;

    /// Load of the block at `address`.
    fn evaluate_block(&self, partition: &Partition, address: BlockAddress) -> u64 {
        self.evaluate(partition, address.row_band, address.col_band)
    }
}

impl<S: BlockStatistic + ?Sized> BlockStatistic for &S {
    fn grid(&self) -> &LoadGrid {
        (**self).grid()
    }

    fn evaluate(&self, partition: &Partition, row_band: usize, col_band: usize) -> u64 {
        (**self).evaluate(partition, row_band, col_band)
    }
}
