//! Core trait for initial partitioners.

use crate::error::Result;
use crate::grid::LoadGrid;
use crate::partition::Partition;

/// Produces a starting partition for refinement.
///
/// Implementations carry their own band counts. The returned partition
/// must pass [`Partition::validate`] against `grid`.
///
/// # Examples
///
/// ```ignore
/// struct SingleBlock;
///
/// impl InitialPartitioner for SingleBlock {
///     fn name(&self) -> &str { "single-block" }
///     fn partition(&self, _grid: &LoadGrid) -> Result<Partition> {
///         Ok(Partition::default())
///     }
/// }
/// ```
pub trait InitialPartitioner: Send + Sync {
    /// Short human-readable name, used in logs.
    fn name(&self) -> &str;

    /// Builds a seed partition for `grid`.
    fn partition(&self, grid: &LoadGrid) -> Result<Partition>;
}
