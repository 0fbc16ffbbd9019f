//! Greedy boundary refinement.
//!
//! Hill climbing over a [`Partition`](crate::partition::Partition): each
//! step shifts one row boundary, one column boundary, or one of each by a
//! single index, and is kept only if it strictly lowers the maximum load
//! of the blocks it touches. The search stops at a local optimum, where
//! a full sweep finds no such move.
//!
//! The neighborhood is deliberately small and the acceptance rule is
//! first-improvement in a fixed priority order, so results are fully
//! deterministic for a given seed partition and statistic.

mod config;
mod moves;
pub mod objective;
mod runner;

pub use config::RefineConfig;
pub use moves::{try_move, visit, AcceptedMove, Move, MOVE_ORDER};
pub use objective::{col_pair_max, corner_max, row_pair_max};
pub use runner::{RefineResult, RefineRunner, SweepStats};
