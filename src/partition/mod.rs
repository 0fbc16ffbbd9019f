//! Rectilinear partitions.
//!
//! A [`Partition`] is a pair of ordered boundary sequences, one per grid
//! axis. `P` row boundaries and `Q` column boundaries cut the grid into
//! `(P + 1) × (Q + 1)` blocks, each addressed by a [`BlockAddress`].

mod types;

pub use types::{BlockAddress, Partition};
