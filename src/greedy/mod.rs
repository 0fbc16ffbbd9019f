//! Seed-then-refine balancing.
//!
//! [`GreedyBalancer`] wraps an auxiliary
//! [`InitialPartitioner`](crate::initial::InitialPartitioner): it asks the
//! auxiliary for a starting partition and hands that to
//! [`RefineRunner`](crate::refine::RefineRunner).

mod balancer;

pub use balancer::GreedyBalancer;
