//! Equal-width bands.

use super::types::InitialPartitioner;
use super::{check_bands, uniform_cuts};
use crate::error::{Axis, Result};
use crate::grid::LoadGrid;
use crate::partition::Partition;

/// Splits each axis into bands of (nearly) equal width.
///
/// # Examples
///
/// ```
/// use u_rectpart::grid::LoadGrid;
/// use u_rectpart::initial::{InitialPartitioner, UniformPartitioner};
///
/// let grid = LoadGrid::filled(10, 6, 1).unwrap();
/// let p = UniformPartitioner::new(3, 2).partition(&grid).unwrap();
/// assert_eq!(p.row_boundaries, vec![3, 6]);
/// assert_eq!(p.col_boundaries, vec![3]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniformPartitioner {
    row_bands: usize,
    col_bands: usize,
}

impl UniformPartitioner {
    /// Creates a partitioner producing `row_bands × col_bands` blocks.
    pub fn new(row_bands: usize, col_bands: usize) -> Self {
        Self {
            row_bands,
            col_bands,
        }
    }
}

impl InitialPartitioner for UniformPartitioner {
    fn name(&self) -> &str {
        "uniform"
    }

    fn partition(&self, grid: &LoadGrid) -> Result<Partition> {
        check_bands(Axis::Row, self.row_bands, grid.rows())?;
        check_bands(Axis::Col, self.col_bands, grid.cols())?;
        Ok(Partition::new(
            uniform_cuts(self.row_bands, grid.rows()),
            uniform_cuts(self.col_bands, grid.cols()),
        ))
    }
}
