//! Local objectives.
//!
//! Each move only changes the blocks in the bands adjacent to the
//! boundaries it shifts, so it is judged by the maximum load over exactly
//! those blocks. All three functions recompute from the statistic on every
//! call; they hold no state.

use crate::partition::{BlockAddress, Partition};
use crate::statistic::BlockStatistic;

/// Maximum load over row bands `row` and `row + 1`, every column band.
///
/// These are the blocks affected by shifting `row_boundaries[row]`.
/// `row` must be a boundary index in `[0, P)`.
pub fn row_pair_max<S: BlockStatistic>(statistic: &S, partition: &Partition, row: usize) -> u64 {
    (row..=row + 1)
        .flat_map(|i| {
            (0..partition.col_band_count())
                .map(move |j| statistic.evaluate_block(partition, BlockAddress::new(i, j)))
        })
        .max()
        .unwrap_or(0)
}

/// Maximum load over column bands `col` and `col + 1`, every row band.
///
/// `col` must be a boundary index in `[0, Q)`.
pub fn col_pair_max<S: BlockStatistic>(statistic: &S, partition: &Partition, col: usize) -> u64 {
    (col..=col + 1)
        .flat_map(|j| {
            (0..partition.row_band_count())
                .map(move |i| statistic.evaluate_block(partition, BlockAddress::new(i, j)))
        })
        .max()
        .unwrap_or(0)
}

/// Maximum load over the union of the row pair at `row` and the column
/// pair at `col`: every block touched by a diagonal move at `(row, col)`.
pub fn corner_max<S: BlockStatistic>(
    statistic: &S,
    partition: &Partition,
    row: usize,
    col: usize,
) -> u64 {
    row_pair_max(statistic, partition, row).max(col_pair_max(statistic, partition, col))
}
