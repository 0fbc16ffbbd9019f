//! Rectilinear partitioning of 2D load grids.
//!
//! Splits a grid of per-cell work weights into row bands and column bands
//! so that the heaviest resulting block is as light as possible:
//!
//! - **Grid**: the immutable weight matrix ([`grid::LoadGrid`]).
//! - **Partition**: row and column boundary sequences
//!   ([`partition::Partition`]).
//! - **Statistics**: pluggable block-load oracles, recomputed naively or
//!   answered from precomputed tables ([`statistic`]).
//! - **Initial partitioners**: uniform, projection-balanced, and seeded
//!   random seeds ([`initial`]).
//! - **Refinement**: greedy single-step boundary hill climbing to a local
//!   optimum ([`refine`]).
//! - **Greedy balancer**: seed-then-refine pipeline ([`greedy`]).
//!
//! # Example
//!
//! ```
//! use u_rectpart::greedy::GreedyBalancer;
//! use u_rectpart::grid::LoadGrid;
//! use u_rectpart::initial::ProjectionPartitioner;
//! use u_rectpart::statistic::PrefixSumStatistic;
//!
//! let grid = LoadGrid::filled(16, 16, 1).unwrap();
//! let statistic = PrefixSumStatistic::new(&grid);
//! let result = GreedyBalancer::new(ProjectionPartitioner::new(4, 4))
//!     .balance(&statistic)
//!     .unwrap();
//! assert_eq!(result.final_max_load, 16);
//! ```

pub mod error;
pub mod greedy;
pub mod grid;
pub mod initial;
pub mod partition;
pub mod refine;
pub mod statistic;

pub use error::{Axis, PartitionError, Result};
