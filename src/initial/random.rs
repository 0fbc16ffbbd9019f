//! Seeded random bands.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::check_bands;
use super::types::InitialPartitioner;
use crate::error::{Axis, Result};
use crate::grid::LoadGrid;
use crate::partition::Partition;

/// Places cut points uniformly at random.
///
/// The same seed always yields the same partition for the same grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomPartitioner {
    row_bands: usize,
    col_bands: usize,
    seed: Option<u64>,
}

impl RandomPartitioner {
    /// Creates a partitioner producing `row_bands × col_bands` blocks.
    pub fn new(row_bands: usize, col_bands: usize) -> Self {
        Self {
            row_bands,
            col_bands,
            seed: None,
        }
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl InitialPartitioner for RandomPartitioner {
    fn name(&self) -> &str {
        "random"
    }

    fn partition(&self, grid: &LoadGrid) -> Result<Partition> {
        check_bands(Axis::Row, self.row_bands, grid.rows())?;
        check_bands(Axis::Col, self.col_bands, grid.cols())?;

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        Ok(Partition::new(
            random_cuts(&mut rng, self.row_bands, grid.rows()),
            random_cuts(&mut rng, self.col_bands, grid.cols()),
        ))
    }
}

/// `bands - 1` distinct sorted cuts drawn from `[1, extent)`.
fn random_cuts<R: Rng>(rng: &mut R, bands: usize, extent: usize) -> Vec<usize> {
    let mut cuts: Vec<usize> = rand::seq::index::sample(rng, extent - 1, bands - 1)
        .into_iter()
        .map(|i| i + 1)
        .collect();
    cuts.sort_unstable();
    cuts
}
