//! Row-major storage for cell weights.

use std::ops::Range;

use crate::error::{PartitionError, Result};

/// Immutable `rows × cols` grid of non-negative integer weights.
///
/// # Examples
///
/// ```
/// use u_rectpart::grid::LoadGrid;
///
/// let grid = LoadGrid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
/// assert_eq!(grid.rows(), 2);
/// assert_eq!(grid.cols(), 3);
/// assert_eq!(grid.get(1, 2), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoadGrid {
    rows: usize,
    cols: usize,
    cells: Vec<u32>,
}

impl LoadGrid {
    /// Creates a grid from row-major cells.
    ///
    /// Both extents must be at least 1 and `cells.len()` must equal
    /// `rows * cols`.
    pub fn new(rows: usize, cols: usize, cells: Vec<u32>) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(PartitionError::InvalidGrid {
                detail: format!("extents must be positive, got {rows}x{cols}"),
            });
        }
        let expected = cell_count(rows, cols)?;
        if cells.len() != expected {
            return Err(PartitionError::InvalidGrid {
                detail: format!(
                    "expected {expected} cells for {rows}x{cols}, got {}",
                    cells.len()
                ),
            });
        }
        Ok(Self { rows, cols, cells })
    }

    /// Creates a grid from nested rows. All rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != n_cols) {
            return Err(PartitionError::InvalidGrid {
                detail: format!("row {i} has {} cells, expected {n_cols}", row.len()),
            });
        }
        Self::new(n_rows, n_cols, rows.into_iter().flatten().collect())
    }

    /// Creates a grid with every cell set to `value`.
    pub fn filled(rows: usize, cols: usize, value: u32) -> Result<Self> {
        Self::new(rows, cols, vec![value; cell_count(rows, cols)?])
    }

    /// Number of rows (extent of axis 0).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (extent of axis 1).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Weight at `(row, col)`.
    ///
    /// # Panics
    /// Panics if the index is outside the grid.
    pub fn get(&self, row: usize, col: usize) -> u32 {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} grid",
            self.rows,
            self.cols
        );
        self.cells[row * self.cols + col]
    }

    /// One row of weights as a slice.
    pub fn row(&self, row: usize) -> &[u32] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// Row-major view of all weights.
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// Sum of weights in each row.
    pub fn row_sums(&self) -> Vec<u64> {
        (0..self.rows)
            .map(|r| self.row(r).iter().map(|&w| u64::from(w)).sum())
            .collect()
    }

    /// Sum of weights in each column.
    pub fn col_sums(&self) -> Vec<u64> {
        let mut sums = vec![0u64; self.cols];
        for r in 0..self.rows {
            for (sum, &w) in sums.iter_mut().zip(self.row(r)) {
                *sum += u64::from(w);
            }
        }
        sums
    }

    /// Sum of weights inside the rectangle `rows × cols`.
    pub fn range_sum(&self, rows: Range<usize>, cols: Range<usize>) -> u64 {
        rows.map(|r| {
            self.row(r)[cols.clone()]
                .iter()
                .map(|&w| u64::from(w))
                .sum::<u64>()
        })
        .sum()
    }

    /// Largest weight inside the rectangle `rows × cols` (0 if empty).
    pub fn range_max(&self, rows: Range<usize>, cols: Range<usize>) -> u64 {
        rows.filter_map(|r| self.row(r)[cols.clone()].iter().copied().max())
            .max()
            .map_or(0, u64::from)
    }
}

fn cell_count(rows: usize, cols: usize) -> Result<usize> {
    rows.checked_mul(cols)
        .ok_or_else(|| PartitionError::InvalidGrid {
            detail: format!("{rows}x{cols} overflows"),
        })
}
