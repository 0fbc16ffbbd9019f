//! Load grid.
//!
//! The immutable 2D array of per-cell work weights that every other
//! component partitions, evaluates, or refines against.

mod load;

pub use load::LoadGrid;
