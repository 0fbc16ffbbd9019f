//! Recompute-on-every-query statistic.

use super::types::{Aggregate, BlockStatistic};
use crate::grid::LoadGrid;
use crate::partition::Partition;

/// Scans the block's cells on every call.
///
/// Cheapest to construct and the reference the cached statistics are
/// checked against.
#[derive(Debug, Clone)]
pub struct NaiveStatistic<'g> {
    grid: &'g LoadGrid,
    aggregate: Aggregate,
}

impl<'g> NaiveStatistic<'g> {
    /// Binds a naive statistic to `grid`.
    pub fn new(grid: &'g LoadGrid, aggregate: Aggregate) -> Self {
        Self { grid, aggregate }
    }

    /// The aggregate this statistic computes.
    pub fn aggregate(&self) -> Aggregate {
        self.aggregate
    }
}

impl BlockStatistic for NaiveStatistic<'_> {
    fn grid(&self) -> &LoadGrid {
        self.grid
    }

    fn evaluate(&self, partition: &Partition, row_band: usize, col_band: usize) -> u64 {
        let rows = partition.row_band_range(row_band, self.grid);
        let cols = partition.col_band_range(col_band, self.grid);
        match self.aggregate {
            Aggregate::Max => self.grid.range_max(rows, cols),
            Aggregate::Sum => self.grid.range_sum(rows, cols),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partition::BlockAddress;

    //      5   6 | 7  11
    //      4  15 | 23 44
    //      ------+------
    //      1   0 | 156 346
    fn grid() -> LoadGrid {
        LoadGrid::from_rows(vec![
            vec![5, 6, 7, 11],
            vec![4, 15, 23, 44],
            vec![1, 0, 156, 346],
        ])
        .unwrap()
    }

    #[test]
    fn test_naive_max() {
        let g = grid();
        let stat = NaiveStatistic::new(&g, Aggregate::Max);
        let p = Partition::new(vec![2], vec![2]);
        assert_eq!(stat.evaluate(&p, 0, 0), 15);
        assert_eq!(stat.evaluate(&p, 0, 1), 44);
        assert_eq!(stat.evaluate(&p, 1, 0), 1);
        assert_eq!(stat.evaluate(&p, 1, 1), 346);
    }

    #[test]
    fn test_naive_sum() {
        let g = grid();
        let stat = NaiveStatistic::new(&g, Aggregate::Sum);
        let p = Partition::new(vec![2], vec![2]);
        assert_eq!(stat.evaluate(&p, 0, 0), 30);
        assert_eq!(stat.evaluate(&p, 0, 1), 85);
        assert_eq!(stat.evaluate(&p, 1, 0), 1);
        assert_eq!(stat.evaluate(&p, 1, 1), 502);
        assert_eq!(stat.aggregate(), Aggregate::Sum);
    }

    #[test]
    fn test_reads_live_boundaries() {
        let g = grid();
        let stat = NaiveStatistic::new(&g, Aggregate::Sum);
        let mut p = Partition::new(vec![1], vec![]);
        assert_eq!(stat.evaluate(&p, 0, 0), 29);
        p.row_boundaries[0] = 2;
        assert_eq!(stat.evaluate(&p, 0, 0), 115);
    }

    #[test]
    fn test_evaluate_block_matches_evaluate() {
        let g = grid();
        let stat = NaiveStatistic::new(&g, Aggregate::Max);
        let p = Partition::new(vec![2], vec![2]);
        assert_eq!(stat.evaluate_block(&p, BlockAddress::new(1, 1)), 346);
        assert_eq!(stat.evaluate_block(&p, BlockAddress::new(0, 1)), stat.evaluate(&p, 0, 1));
    }
}
