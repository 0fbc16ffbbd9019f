//! End-to-end refinement behaviour over the public API.

use proptest::prelude::*;
use u_rectpart::grid::LoadGrid;
use u_rectpart::initial::{InitialPartitioner, RandomPartitioner, UniformPartitioner};
use u_rectpart::partition::Partition;
use u_rectpart::refine::{visit, RefineConfig, RefineRunner};
use u_rectpart::statistic::{
    block_loads, max_block_load, Aggregate, BlockStatistic, NaiveStatistic, PrefixSumStatistic,
    SparseMaxStatistic,
};

fn heavy_corner_grid(size: usize, heavy: u32) -> LoadGrid {
    let mut cells = vec![1u32; size * size];
    cells[0] = heavy;
    LoadGrid::new(size, size, cells).unwrap()
}

// ---- Scenarios ----

#[test]
fn uniform_2x2_is_already_optimal() {
    let grid = LoadGrid::filled(2, 2, 1).unwrap();
    for aggregate in [Aggregate::Max, Aggregate::Sum] {
        let stat = NaiveStatistic::new(&grid, aggregate);
        let seed = Partition::new(vec![1], vec![1]);
        let result = RefineRunner::run(&stat, &seed, &RefineConfig::default()).unwrap();

        assert_eq!(result.accepted_moves(), 0);
        assert_eq!(result.partition, seed);
        assert_eq!(block_loads(&stat, &result.partition), vec![vec![1, 1], vec![1, 1]]);
    }
}

#[test]
fn heavy_cell_is_isolated_by_sum_refinement() {
    let grid = heavy_corner_grid(6, 100);
    let stat = NaiveStatistic::new(&grid, Aggregate::Sum);
    let seed = Partition::new(vec![5], vec![5]);

    let result = RefineRunner::run(&stat, &seed, &RefineConfig::default()).unwrap();

    assert!(result.converged);
    assert_eq!(result.initial_max_load, 124);
    assert_eq!(result.final_max_load, 100);
    assert_eq!(result.partition, Partition::new(vec![1], vec![1]));
    assert_eq!(stat.evaluate(&result.partition, 0, 0), 100);
}

#[test]
fn heavy_cell_under_max_statistic_cannot_improve() {
    let grid = heavy_corner_grid(6, 100);
    let stat = SparseMaxStatistic::new(&grid);
    let seed = Partition::new(vec![5], vec![5]);

    let result = RefineRunner::run(&stat, &seed, &RefineConfig::default()).unwrap();

    assert_eq!(result.final_max_load, 100);
    assert!(result.final_max_load <= result.initial_max_load);
    assert_eq!(result.partition, seed);
}

#[test]
fn balanced_seed_is_returned_unchanged() {
    let grid = LoadGrid::filled(6, 6, 2).unwrap();
    let stat = PrefixSumStatistic::new(&grid);
    let seed = Partition::new(vec![2, 4], vec![3]);

    let result = RefineRunner::run(&stat, &seed, &RefineConfig::default()).unwrap();

    assert_eq!(result.sweeps, 1);
    assert_eq!(result.accepted_moves(), 0);
    assert_eq!(result.partition, seed);
    assert_eq!(result.load_history, vec![12, 12]);
}

#[test]
fn seven_by_eight_sample_matrix_refines() {
    //  5   6   7  11 100 200 305  40
    //  4  15  23  44   5   6   8 100
    //  1   0 156 346  67   5  46  55
    // 500 30  56  89  65  12   4   8
    //  3  45  67  78 888 567  16 900
    // 34  67  89  60  50  40  30 300
    // 67  56  44  23  45  78  60  90
    let grid = LoadGrid::from_rows(vec![
        vec![5, 6, 7, 11, 100, 200, 305, 40],
        vec![4, 15, 23, 44, 5, 6, 8, 100],
        vec![1, 0, 156, 346, 67, 5, 46, 55],
        vec![500, 30, 56, 89, 65, 12, 4, 8],
        vec![3, 45, 67, 78, 888, 567, 16, 900],
        vec![34, 67, 89, 60, 50, 40, 30, 300],
        vec![67, 56, 44, 23, 45, 78, 60, 90],
    ])
    .unwrap();
    let stat = PrefixSumStatistic::new(&grid);
    let seed = Partition::new(vec![2, 5], vec![2, 5]);

    let result = RefineRunner::run(&stat, &seed, &RefineConfig::default()).unwrap();

    assert!(result.converged);
    assert!(result.final_max_load <= result.initial_max_load);
    assert!(result.partition.validate(&grid).is_ok());
    assert_eq!(result.partition.block_count(), 9);
}

// ---- Per-move monotonicity ----

#[test]
fn every_accepted_move_lowers_its_objective_and_never_raises_global_max() {
    let grid = LoadGrid::from_rows(vec![
        vec![3, 1, 4, 1, 5, 9, 2],
        vec![6, 5, 3, 5, 8, 9, 7],
        vec![9, 3, 2, 3, 8, 4, 6],
        vec![2, 6, 4, 3, 3, 8, 3],
        vec![2, 7, 9, 5, 0, 2, 8],
        vec![8, 4, 1, 9, 7, 1, 6],
    ])
    .unwrap();
    let stat = NaiveStatistic::new(&grid, Aggregate::Sum);
    let mut partition = Partition::new(vec![1, 2], vec![1, 5]);
    let mut global = max_block_load(&stat, &partition);

    loop {
        let mut accepted_any = false;
        for i in 0..partition.row_boundaries.len() {
            for j in 0..partition.col_boundaries.len() {
                if let Some(accepted) = visit(&stat, &mut partition, Some(i), Some(j)) {
                    accepted_any = true;
                    assert!(accepted.after < accepted.before, "{accepted:?}");
                    let now = max_block_load(&stat, &partition);
                    assert!(now <= global, "global max rose from {global} to {now}");
                    global = now;
                    assert!(partition.validate(&grid).is_ok());
                }
            }
        }
        if !accepted_any {
            break;
        }
    }

    let result = RefineRunner::run(
        &stat,
        &Partition::new(vec![1, 2], vec![1, 5]),
        &RefineConfig::default(),
    )
    .unwrap();
    assert_eq!(result.partition, partition);
}

// ---- Properties ----

fn grid_strategy() -> impl Strategy<Value = LoadGrid> {
    (2usize..9, 2usize..9).prop_flat_map(|(rows, cols)| {
        proptest::collection::vec(0u32..50, rows * cols)
            .prop_map(move |cells| LoadGrid::new(rows, cols, cells).unwrap())
    })
}

fn random_seed(grid: &LoadGrid, seed: u64) -> Partition {
    let row_bands = 1 + (seed as usize % grid.rows().min(4));
    let col_bands = 1 + ((seed as usize / 7) % grid.cols().min(4));
    RandomPartitioner::new(row_bands, col_bands)
        .with_seed(seed)
        .partition(grid)
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_result_is_fixed_point(grid in grid_strategy(), seed in 0u64..1000) {
        let stat = PrefixSumStatistic::new(&grid);
        let result = RefineRunner::run(&stat, &random_seed(&grid, seed), &RefineConfig::default())
            .unwrap();

        let mut again = result.partition.clone();
        let stats = RefineRunner::sweep(&stat, &mut again);
        prop_assert_eq!(stats.accepted(), 0);
        prop_assert_eq!(&again, &result.partition);
    }

    #[test]
    fn prop_refine_is_idempotent(grid in grid_strategy(), seed in 0u64..1000) {
        let stat = NaiveStatistic::new(&grid, Aggregate::Sum);
        let config = RefineConfig::default();
        let first = RefineRunner::run(&stat, &random_seed(&grid, seed), &config).unwrap();
        let second = RefineRunner::run(&stat, &first.partition, &config).unwrap();
        prop_assert_eq!(second.accepted_moves(), 0);
        prop_assert_eq!(second.partition, first.partition);
    }

    #[test]
    fn prop_boundaries_stay_in_range(grid in grid_strategy(), seed in 0u64..1000) {
        let stat = SparseMaxStatistic::new(&grid);
        let start = random_seed(&grid, seed);
        let result = RefineRunner::run(&stat, &start, &RefineConfig::default()).unwrap();
        prop_assert!(result.partition.validate(&grid).is_ok());
        prop_assert_eq!(result.partition.row_boundaries.len(), start.row_boundaries.len());
        prop_assert_eq!(result.partition.col_boundaries.len(), start.col_boundaries.len());
    }

    #[test]
    fn prop_global_max_non_increasing(grid in grid_strategy(), seed in 0u64..1000) {
        let stat = PrefixSumStatistic::new(&grid);
        let result = RefineRunner::run(&stat, &random_seed(&grid, seed), &RefineConfig::default())
            .unwrap();
        for window in result.load_history.windows(2) {
            prop_assert!(window[1] <= window[0]);
        }
        prop_assert!(result.final_max_load <= result.initial_max_load);
    }

    #[test]
    fn prop_cached_and_naive_statistics_refine_identically(
        grid in grid_strategy(),
        seed in 0u64..1000,
    ) {
        let start = random_seed(&grid, seed);
        let config = RefineConfig::default();

        let naive_sum = NaiveStatistic::new(&grid, Aggregate::Sum);
        let cached_sum = PrefixSumStatistic::new(&grid);
        prop_assert_eq!(
            RefineRunner::run(&naive_sum, &start, &config).unwrap().partition,
            RefineRunner::run(&cached_sum, &start, &config).unwrap().partition
        );

        let naive_max = NaiveStatistic::new(&grid, Aggregate::Max);
        let cached_max = SparseMaxStatistic::new(&grid);
        prop_assert_eq!(
            RefineRunner::run(&naive_max, &start, &config).unwrap().partition,
            RefineRunner::run(&cached_max, &start, &config).unwrap().partition
        );
    }
}

#[test]
fn uniform_seed_then_refine_on_every_band_shape() {
    let grid = heavy_corner_grid(7, 40);
    let stat = PrefixSumStatistic::new(&grid);
    for rb in 1..=4 {
        for cb in 1..=4 {
            let seed = UniformPartitioner::new(rb, cb).partition(&grid).unwrap();
            let result = RefineRunner::run(&stat, &seed, &RefineConfig::default()).unwrap();
            assert!(result.converged, "{rb}x{cb}");
            assert!(result.final_max_load <= result.initial_max_load);
            assert!(result.partition.validate(&grid).is_ok());
        }
    }
}
