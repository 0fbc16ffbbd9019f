//! Precomputed statistics with constant-time block queries.
//!
//! Both tables depend only on the grid, so they stay valid however the
//! partition boundaries move.

use super::types::BlockStatistic;
use crate::grid::LoadGrid;
use crate::partition::Partition;

/// Block sums from a summed-area table.
#[derive(Debug, Clone)]
pub struct PrefixSumStatistic<'g> {
    grid: &'g LoadGrid,
    // (rows + 1) × (cols + 1), prefix[r][c] = sum of cells above-left of (r, c)
    prefix: Vec<u64>,
}

impl<'g> PrefixSumStatistic<'g> {
    /// Builds the summed-area table for `grid` in O(R·C).
    pub fn new(grid: &'g LoadGrid) -> Self {
        let stride = grid.cols() + 1;
        let mut prefix = vec![0u64; (grid.rows() + 1) * stride];
        for r in 0..grid.rows() {
            let mut running = 0u64;
            for (c, &w) in grid.row(r).iter().enumerate() {
                running += u64::from(w);
                prefix[(r + 1) * stride + c + 1] = prefix[r * stride + c + 1] + running;
            }
        }
        Self { grid, prefix }
    }

    fn at(&self, r: usize, c: usize) -> u64 {
        self.prefix[r * (self.grid.cols() + 1) + c]
    }
}

impl BlockStatistic for PrefixSumStatistic<'_> {
    fn grid(&self) -> &LoadGrid {
        self.grid
    }

    fn evaluate(&self, partition: &Partition, row_band: usize, col_band: usize) -> u64 {
        let rows = partition.row_band_range(row_band, self.grid);
        let cols = partition.col_band_range(col_band, self.grid);
        if rows.is_empty() || cols.is_empty() {
            return 0;
        }
        self.at(rows.end, cols.end) + self.at(rows.start, cols.start)
            - self.at(rows.start, cols.end)
            - self.at(rows.end, cols.start)
    }
}

/// Block maxima from a 2D sparse table.
///
/// Level `(i, j)` holds, for every anchor `(r, c)`, the maximum over the
/// `2^i × 2^j` rectangle starting there. A query covers its rectangle
/// with four (possibly overlapping) power-of-two rectangles.
///
/// # Memory
///
/// Holds `(⌊log₂ R⌋ + 1) · (⌊log₂ C⌋ + 1)` tables of `R · C` `u32`
/// cells each. A 4096 × 4096 grid needs 169 tables, about 11 GB. For
/// grids that large prefer [`NaiveStatistic`](super::NaiveStatistic)
/// with [`Aggregate::Max`](super::Aggregate::Max).
#[derive(Debug, Clone)]
pub struct SparseMaxStatistic<'g> {
    grid: &'g LoadGrid,
    col_levels: usize,
    // levels[i * col_levels + j], each a rows × cols row-major table
    levels: Vec<Vec<u32>>,
}

impl<'g> SparseMaxStatistic<'g> {
    /// Builds the sparse table for `grid` in O(R·C·log R·log C).
    pub fn new(grid: &'g LoadGrid) -> Self {
        let (rows, cols) = (grid.rows(), grid.cols());
        let row_levels = rows.ilog2() as usize + 1;
        let col_levels = cols.ilog2() as usize + 1;
        let mut levels: Vec<Vec<u32>> = Vec::with_capacity(row_levels * col_levels);

        for i in 0..row_levels {
            for j in 0..col_levels {
                let table = if i == 0 && j == 0 {
                    grid.cells().to_vec()
                } else if i == 0 {
                    let prev = &levels[j - 1];
                    let half = 1usize << (j - 1);
                    let mut t = vec![0u32; rows * cols];
                    for r in 0..rows {
                        for c in 0..=(cols - (1usize << j)) {
                            t[r * cols + c] = prev[r * cols + c].max(prev[r * cols + c + half]);
                        }
                    }
                    t
                } else {
                    let prev = &levels[(i - 1) * col_levels + j];
                    let half = 1usize << (i - 1);
                    let mut t = vec![0u32; rows * cols];
                    for r in 0..=(rows - (1usize << i)) {
                        for c in 0..cols {
                            t[r * cols + c] = prev[r * cols + c].max(prev[(r + half) * cols + c]);
                        }
                    }
                    t
                };
                levels.push(table);
            }
        }

        Self {
            grid,
            col_levels,
            levels,
        }
    }
}

impl BlockStatistic for SparseMaxStatistic<'_> {
    fn grid(&self) -> &LoadGrid {
        self.grid
    }

    fn evaluate(&self, partition: &Partition, row_band: usize, col_band: usize) -> u64 {
        let rows = partition.row_band_range(row_band, self.grid);
        let cols = partition.col_band_range(col_band, self.grid);
        if rows.is_empty() || cols.is_empty() {
            return 0;
        }
        let i = rows.len().ilog2() as usize;
        let j = cols.len().ilog2() as usize;
        let table = &self.levels[i * self.col_levels + j];
        let width = self.grid.cols();
        let r2 = rows.end - (1usize << i);
        let c2 = cols.end - (1usize << j);
        let m = table[rows.start * width + cols.start]
            .max(table[rows.start * width + c2])
            .max(table[r2 * width + cols.start])
            .max(table[r2 * width + c2]);
        u64::from(m)
    }
}
