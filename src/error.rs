//! Error types for grid partitioning.

/// Errors that can occur while building or refining a partition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PartitionError {
    /// The load grid has an invalid shape.
    #[error("invalid load grid: {detail}")]
    InvalidGrid { detail: String },

    /// A partition does not fit the grid it is used with.
    #[error("invalid partition: {detail}")]
    InvalidPartition { detail: String },

    /// More bands were requested than the axis has indices.
    #[error("cannot split {axis} axis of extent {extent} into {bands} bands")]
    TooManyBands {
        axis: Axis,
        bands: usize,
        extent: usize,
    },

    /// Refinement did not reach a fixed point within the sweep guard.
    #[error("refinement did not converge within {sweeps} sweeps")]
    SweepLimitExceeded { sweeps: usize },

    /// A configuration parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// One of the two grid axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// Axis 0: rows.
    Row,
    /// Axis 1: columns.
    Col,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Row => f.write_str("row"),
            Axis::Col => f.write_str("column"),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PartitionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = PartitionError::TooManyBands {
            axis: Axis::Col,
            bands: 5,
            extent: 3,
        };
        assert_eq!(
            err.to_string(),
            "cannot split column axis of extent 3 into 5 bands"
        );

        let err = PartitionError::SweepLimitExceeded { sweeps: 10 };
        assert_eq!(err.to_string(), "refinement did not converge within 10 sweeps");
    }
}
