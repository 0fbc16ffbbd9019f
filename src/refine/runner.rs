//! Greedy refinement loop.
//!
//! # Algorithm
//!
//! 1. Copy the seed partition and check it against the grid
//! 2. Sweep: visit every (row boundary, column boundary) pair in
//!    row-major order; at each visit try the moves of
//!    [`MOVE_ORDER`](super::MOVE_ORDER) and keep the first one that
//!    strictly lowers its local objective
//! 3. Repeat sweeps until one accepts no move (fixed point)
//!
//! Every accepted move strictly lowers a non-negative integer objective
//! while leaving all blocks outside that objective untouched, so the
//! global maximum block load never increases and the loop terminates.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::config::RefineConfig;
use super::moves::{visit, AcceptedMove, Move};
use crate::error::{PartitionError, Result};
use crate::partition::Partition;
use crate::statistic::{max_block_load, BlockStatistic};

/// Moves accepted during one sweep, by kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepStats {
    /// Accepted single row-boundary shifts.
    pub row_moves: usize,
    /// Accepted single column-boundary shifts.
    pub col_moves: usize,
    /// Accepted joint row and column shifts.
    pub diagonal_moves: usize,
}

impl SweepStats {
    /// Total accepted moves.
    pub fn accepted(&self) -> usize {
        self.row_moves + self.col_moves + self.diagonal_moves
    }

    fn record(&mut self, accepted: &AcceptedMove) {
        match accepted.mv {
            Move::Row(_) => self.row_moves += 1,
            Move::Col(_) => self.col_moves += 1,
            Move::Diagonal(..) => self.diagonal_moves += 1,
        }
    }

    fn absorb(&mut self, other: SweepStats) {
        self.row_moves += other.row_moves;
        self.col_moves += other.col_moves;
        self.diagonal_moves += other.diagonal_moves;
    }
}

/// Result of a refinement run.
#[derive(Debug, Clone)]
pub struct RefineResult {
    /// The refined partition.
    pub partition: Partition,

    /// Number of sweeps executed, including the final one that found
    /// nothing to improve.
    pub sweeps: usize,

    /// Accepted moves over the whole run, by kind.
    pub moves: SweepStats,

    /// Maximum block load of the seed.
    pub initial_max_load: u64,

    /// Maximum block load of the returned partition.
    pub final_max_load: u64,

    /// Whether a sweep without accepted moves was reached.
    pub converged: bool,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Maximum block load of the seed followed by one entry per sweep.
    /// Empty when history recording is disabled.
    pub load_history: Vec<u64>,
}

impl RefineResult {
    /// Total accepted moves over the whole run.
    pub fn accepted_moves(&self) -> usize {
        self.moves.accepted()
    }
}

/// Greedy boundary refinement runner.
///
/// # Usage
///
/// ```
/// use u_rectpart::grid::LoadGrid;
/// use u_rectpart::partition::Partition;
/// use u_rectpart::refine::{RefineConfig, RefineRunner};
/// use u_rectpart::statistic::PrefixSumStatistic;
///
/// let grid = LoadGrid::filled(8, 8, 1).unwrap();
/// let statistic = PrefixSumStatistic::new(&grid);
/// let seed = Partition::new(vec![1], vec![7]);
///
/// let result = RefineRunner::run(&statistic, &seed, &RefineConfig::default()).unwrap();
/// assert!(result.converged);
/// assert_eq!(result.final_max_load, 16);
/// assert_eq!(result.partition, Partition::new(vec![4], vec![4]));
/// ```
pub struct RefineRunner;

impl RefineRunner {
    /// Refines `seed` until no single move improves it.
    ///
    /// # Errors
    /// - [`PartitionError::InvalidConfig`] if `config` fails validation.
    /// - [`PartitionError::InvalidPartition`] if `seed` does not fit the
    ///   statistic's grid.
    /// - [`PartitionError::SweepLimitExceeded`] if `max_sweeps` runs out
    ///   and `error_on_limit` is set.
    pub fn run<S: BlockStatistic>(
        statistic: &S,
        seed: &Partition,
        config: &RefineConfig,
    ) -> Result<RefineResult> {
        Self::run_with_cancel(statistic, seed, config, None)
    }

    /// Refines with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, refinement
    /// stops before the next sweep and returns the partition reached so
    /// far, which is always valid and never worse than the seed.
    pub fn run_with_cancel<S: BlockStatistic>(
        statistic: &S,
        seed: &Partition,
        config: &RefineConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<RefineResult> {
        config.validate().map_err(PartitionError::InvalidConfig)?;
        seed.validate(statistic.grid())?;

        let mut partition = seed.clone();
        let initial_max_load = max_block_load(statistic, &partition);
        let mut load_history = Vec::new();
        if config.record_history {
            load_history.push(initial_max_load);
        }

        tracing::info!(
            row_bands = partition.row_band_count(),
            col_bands = partition.col_band_count(),
            initial_max_load,
            "starting boundary refinement"
        );

        let mut moves = SweepStats::default();
        let mut sweeps = 0usize;
        let mut converged = false;
        let mut cancelled = false;

        loop {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            if sweeps >= config.max_sweeps {
                tracing::warn!(sweeps, "sweep limit reached before a fixed point");
                if config.error_on_limit {
                    return Err(PartitionError::SweepLimitExceeded { sweeps });
                }
                break;
            }

            let stats = Self::sweep_sites(statistic, &mut partition, config.single_axis);
            sweeps += 1;
            moves.absorb(stats);

            if config.record_history {
                load_history.push(max_block_load(statistic, &partition));
            }
            tracing::debug!(sweep = sweeps, accepted = stats.accepted(), "sweep finished");

            if stats.accepted() == 0 {
                converged = true;
                break;
            }
        }

        let final_max_load = max_block_load(statistic, &partition);
        tracing::info!(
            sweeps,
            accepted_moves = moves.accepted(),
            initial_max_load,
            final_max_load,
            converged,
            cancelled,
            "boundary refinement finished"
        );

        Ok(RefineResult {
            partition,
            sweeps,
            moves,
            initial_max_load,
            final_max_load,
            converged,
            cancelled,
            load_history,
        })
    }

    /// Runs one full sweep over `partition` in place.
    ///
    /// Sites are visited in row-major order of (row boundary, column
    /// boundary). A partition with no boundaries on either axis has no
    /// sites, so the sweep accepts nothing.
    pub fn sweep<S: BlockStatistic>(statistic: &S, partition: &mut Partition) -> SweepStats {
        Self::sweep_sites(statistic, partition, false)
    }

    fn sweep_sites<S: BlockStatistic>(
        statistic: &S,
        partition: &mut Partition,
        single_axis: bool,
    ) -> SweepStats {
        let rows = partition.row_boundaries.len();
        let cols = partition.col_boundaries.len();
        let mut stats = SweepStats::default();

        let mut visit_site = |partition: &mut Partition, row: Option<usize>, col: Option<usize>| {
            if let Some(accepted) = visit(statistic, partition, row, col) {
                tracing::trace!(
                    ?row,
                    ?col,
                    mv = ?accepted.mv,
                    before = accepted.before,
                    after = accepted.after,
                    "move accepted"
                );
                stats.record(&accepted);
            }
        };

        match (rows, cols) {
            (_, 0) | (0, _) if !single_axis => {}
            (_, 0) => (0..rows).for_each(|i| visit_site(partition, Some(i), None)),
            (0, _) => (0..cols).for_each(|j| visit_site(partition, None, Some(j))),
            _ => {
                for i in 0..rows {
                    for j in 0..cols {
                        visit_site(partition, Some(i), Some(j));
                    }
                }
            }
        }

        stats
    }
}
