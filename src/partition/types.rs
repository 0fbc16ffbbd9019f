//! Boundary sequences and block addressing.

use std::ops::Range;

use crate::error::{Axis, PartitionError, Result};
use crate::grid::LoadGrid;

/// One block of a partition: the intersection of a row band and a
/// column band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockAddress {
    /// Row band index in `[0, P]`.
    pub row_band: usize,
    /// Column band index in `[0, Q]`.
    pub col_band: usize,
}

impl BlockAddress {
    /// Creates a block address.
    pub fn new(row_band: usize, col_band: usize) -> Self {
        Self { row_band, col_band }
    }
}

/// Row and column band boundaries.
///
/// A boundary `b` is the first index of the band that follows it, so
/// bands are half-open ranges:
///
/// - band 0 is `[0, b[0])`
/// - band `i` is `[b[i - 1], b[i])`
/// - the last band is `[b[P - 1], extent)`
///
/// A partition is valid for a grid when each sequence is strictly
/// increasing and lies in `[1, extent - 1]`, i.e. every band is
/// non-empty.
///
/// # Examples
///
/// ```
/// use u_rectpart::grid::LoadGrid;
/// use u_rectpart::partition::Partition;
///
/// let grid = LoadGrid::filled(6, 4, 1).unwrap();
/// let partition = Partition::new(vec![2, 4], vec![1]);
/// assert!(partition.validate(&grid).is_ok());
/// assert_eq!(partition.row_band_count(), 3);
/// assert_eq!(partition.row_band_range(1, &grid), 2..4);
/// assert_eq!(partition.col_band_range(1, &grid), 1..4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Partition {
    /// Boundaries along axis 0 (length `P`).
    pub row_boundaries: Vec<usize>,
    /// Boundaries along axis 1 (length `Q`).
    pub col_boundaries: Vec<usize>,
}

impl Partition {
    /// Creates a partition from two boundary sequences.
    ///
    /// No validation is performed; call [`validate`](Self::validate)
    /// against the target grid.
    pub fn new(row_boundaries: Vec<usize>, col_boundaries: Vec<usize>) -> Self {
        Self {
            row_boundaries,
            col_boundaries,
        }
    }

    /// Number of row bands (`P + 1`).
    pub fn row_band_count(&self) -> usize {
        self.row_boundaries.len() + 1
    }

    /// Number of column bands (`Q + 1`).
    pub fn col_band_count(&self) -> usize {
        self.col_boundaries.len() + 1
    }

    /// Total number of blocks.
    pub fn block_count(&self) -> usize {
        self.row_band_count() * self.col_band_count()
    }

    /// Half-open row range covered by row band `band`.
    pub fn row_band_range(&self, band: usize, grid: &LoadGrid) -> Range<usize> {
        band_range(&self.row_boundaries, band, grid.rows())
    }

    /// Half-open column range covered by column band `band`.
    pub fn col_band_range(&self, band: usize, grid: &LoadGrid) -> Range<usize> {
        band_range(&self.col_boundaries, band, grid.cols())
    }

    /// Boundary sequence of one axis.
    pub fn boundaries(&self, axis: Axis) -> &[usize] {
        match axis {
            Axis::Row => &self.row_boundaries,
            Axis::Col => &self.col_boundaries,
        }
    }

    /// Checks that both boundary sequences fit `grid`.
    pub fn validate(&self, grid: &LoadGrid) -> Result<()> {
        [(Axis::Row, grid.rows()), (Axis::Col, grid.cols())]
            .into_iter()
            .try_for_each(|(axis, extent)| validate_axis(self.boundaries(axis), extent, axis))
    }

    /// Whether shifting `boundaries[index]` by `delta` keeps the axis
    /// valid for `extent`.
    ///
    /// The shifted boundary must stay in `[1, extent - 1]` and strictly
    /// between its neighbours.
    pub(crate) fn can_shift(
        boundaries: &[usize],
        index: usize,
        delta: isize,
        extent: usize,
    ) -> bool {
        let Some(shifted) = boundaries[index].checked_add_signed(delta) else {
            return false;
        };
        let lower = if index == 0 { 0 } else { boundaries[index - 1] };
        let upper = boundaries.get(index + 1).copied().unwrap_or(extent);
        shifted > lower && shifted < upper
    }
}

fn band_range(boundaries: &[usize], band: usize, extent: usize) -> Range<usize> {
    let start = if band == 0 { 0 } else { boundaries[band - 1] };
    let end = boundaries.get(band).copied().unwrap_or(extent);
    start..end
}

fn validate_axis(boundaries: &[usize], extent: usize, axis: Axis) -> Result<()> {
    let mut previous = 0;
    for (i, &b) in boundaries.iter().enumerate() {
        if b <= previous || b >= extent {
            return Err(PartitionError::InvalidPartition {
                detail: format!(
                    "{axis} boundary {i} = {b} must lie in ({previous}, {extent})"
                ),
            });
        }
        previous = b;
    }
    Ok(())
}
