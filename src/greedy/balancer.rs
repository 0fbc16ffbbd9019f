//! Balancer pipeline.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use crate::error::Result;
use crate::initial::InitialPartitioner;
use crate::refine::{RefineConfig, RefineResult, RefineRunner};
use crate::statistic::BlockStatistic;

/// Runs an auxiliary partitioner, then greedily refines its output.
///
/// # Examples
///
/// ```
/// use u_rectpart::greedy::GreedyBalancer;
/// use u_rectpart::grid::LoadGrid;
/// use u_rectpart::initial::UniformPartitioner;
/// use u_rectpart::statistic::PrefixSumStatistic;
///
/// let grid = LoadGrid::from_rows(vec![
///     vec![9, 9, 1, 1],
///     vec![9, 9, 1, 1],
///     vec![1, 1, 1, 1],
///     vec![1, 1, 1, 1],
/// ])
/// .unwrap();
/// let statistic = PrefixSumStatistic::new(&grid);
/// let balancer = GreedyBalancer::new(UniformPartitioner::new(2, 2));
///
/// let result = balancer.balance(&statistic).unwrap();
/// assert!(result.converged);
/// assert!(result.final_max_load <= result.initial_max_load);
/// ```
#[derive(Debug, Clone)]
pub struct GreedyBalancer<P> {
    auxiliary: P,
    config: RefineConfig,
}

impl<P: InitialPartitioner> GreedyBalancer<P> {
    /// Creates a balancer seeded by `auxiliary` with default refinement
    /// settings.
    pub fn new(auxiliary: P) -> Self {
        Self {
            auxiliary,
            config: RefineConfig::default(),
        }
    }

    /// Sets the refinement configuration.
    pub fn with_config(mut self, config: RefineConfig) -> Self {
        self.config = config;
        self
    }

    /// The auxiliary partitioner.
    pub fn auxiliary(&self) -> &P {
        &self.auxiliary
    }

    /// The refinement configuration.
    pub fn config(&self) -> &RefineConfig {
        &self.config
    }

    /// Partitions the statistic's grid and refines the result.
    pub fn balance<S: BlockStatistic>(&self, statistic: &S) -> Result<RefineResult> {
        self.balance_with_cancel(statistic, None)
    }

    /// Like [`balance`](Self::balance), with an optional cancellation
    /// token forwarded to the refinement loop.
    pub fn balance_with_cancel<S: BlockStatistic>(
        &self,
        statistic: &S,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<RefineResult> {
        let grid = statistic.grid();
        let seed = self.auxiliary.partition(grid)?;
        tracing::info!(
            auxiliary = self.auxiliary.name(),
            rows = grid.rows(),
            cols = grid.cols(),
            blocks = seed.block_count(),
            "seed partition built"
        );

        let result = RefineRunner::run_with_cancel(statistic, &seed, &self.config, cancel)?;
        tracing::info!(
            auxiliary = self.auxiliary.name(),
            initial_max_load = result.initial_max_load,
            final_max_load = result.final_max_load,
            accepted_moves = result.accepted_moves(),
            "balancing finished"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PartitionError;
    use crate::grid::LoadGrid;
    use crate::initial::{ProjectionPartitioner, RandomPartitioner, UniformPartitioner};
    use crate::statistic::{Aggregate, NaiveStatistic, PrefixSumStatistic};

    fn skewed_grid() -> LoadGrid {
        let cells = (0..12)
            .flat_map(|r| (0..12).map(move |c| if r < 4 && c < 4 { 10 } else { 1 }))
            .collect();
        LoadGrid::new(12, 12, cells).unwrap()
    }

    #[test]
    fn test_balance_never_worse_than_seed() {
        let grid = skewed_grid();
        let stat = PrefixSumStatistic::new(&grid);
        for seed in 0..10 {
            let balancer = GreedyBalancer::new(RandomPartitioner::new(3, 3).with_seed(seed));
            let result = balancer.balance(&stat).unwrap();
            assert!(result.converged);
            assert!(result.final_max_load <= result.initial_max_load);
            assert!(result.partition.validate(&grid).is_ok());
            assert_eq!(result.partition.block_count(), 9);
        }
    }

    #[test]
    fn test_balance_propagates_seed_errors() {
        let grid = LoadGrid::filled(2, 2, 1).unwrap();
        let stat = NaiveStatistic::new(&grid, Aggregate::Sum);
        let err = GreedyBalancer::new(UniformPartitioner::new(3, 1))
            .balance(&stat)
            .unwrap_err();
        assert!(matches!(err, PartitionError::TooManyBands { .. }));
    }

    #[test]
    fn test_balance_with_custom_config() {
        let grid = skewed_grid();
        let stat = PrefixSumStatistic::new(&grid);
        let config = RefineConfig::default()
            .with_max_sweeps(1)
            .with_error_on_limit(false);
        let balancer = GreedyBalancer::new(ProjectionPartitioner::new(2, 2)).with_config(config);
        assert_eq!(balancer.config().max_sweeps, 1);
        assert_eq!(balancer.auxiliary().name(), "projection");
        let result = balancer.balance(&stat).unwrap();
        assert_eq!(result.sweeps, 1);
    }
}
