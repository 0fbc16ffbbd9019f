//! Block statistics.
//!
//! A [`BlockStatistic`] reports the aggregate load of one block of a
//! partition. It is bound to an immutable [`LoadGrid`](crate::grid::LoadGrid)
//! and reads the live boundary state through the `&Partition` passed to
//! every query, so it never holds a copy of the boundaries that could
//! drift from the caller's.
//!
//! | Statistic | Aggregate | Query cost | Memory |
//! |---|---|---|---|
//! | [`NaiveStatistic`] | max or sum | O(block cells) | none |
//! | [`PrefixSumStatistic`] | sum | O(1) | O(R·C) |
//! | [`SparseMaxStatistic`] | max | O(1) | O(R·C·log R·log C) |

mod cached;
mod loads;
mod naive;
mod types;

pub use cached::{PrefixSumStatistic, SparseMaxStatistic};
pub use loads::{block_loads, max_block_load};
pub use naive::NaiveStatistic;
pub use types::{Aggregate, BlockStatistic};
