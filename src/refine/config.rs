//! Refinement configuration.

/// Configuration parameters for greedy boundary refinement.
///
/// Refinement always stops at a fixed point; these settings only bound
/// how long it may take to get there and what gets recorded on the way.
///
/// # Examples
///
/// ```
/// use u_rectpart::refine::RefineConfig;
///
/// let config = RefineConfig::default()
///     .with_max_sweeps(1_000)
///     .with_error_on_limit(false)
///     .with_record_history(false);
/// assert_eq!(config.max_sweeps, 1_000);
/// assert!(!config.error_on_limit);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct RefineConfig {
    /// Maximum number of full sweeps before giving up.
    ///
    /// Every accepted move strictly lowers a non-negative integer, so a
    /// fixed point is always reached eventually; this guard turns a
    /// pathologically long run into a reportable outcome.
    pub max_sweeps: usize,

    /// Whether hitting `max_sweeps` is an error.
    ///
    /// When `false`, the partition reached so far (valid, and never worse
    /// than the seed) is returned with `converged == false`.
    pub error_on_limit: bool,

    /// Whether to record the global maximum block load after each sweep.
    pub record_history: bool,

    /// Whether to refine an axis on its own when the other axis has no
    /// boundaries.
    ///
    /// Off by default: a sweep visits (row boundary, column boundary)
    /// pairs, so a partition with no boundaries on either axis is left
    /// as it is. When on, each boundary of the non-empty axis is visited
    /// alone with the moves along its own axis.
    pub single_axis: bool,
}

impl Default for RefineConfig {
    fn default() -> Self {
        Self {
            max_sweeps: 100_000,
            error_on_limit: true,
            record_history: true,
            single_axis: false,
        }
    }
}

impl RefineConfig {
    /// Sets the maximum number of sweeps.
    pub fn with_max_sweeps(mut self, n: usize) -> Self {
        self.max_sweeps = n;
        self
    }

    /// Sets whether exhausting the sweep guard is an error.
    pub fn with_error_on_limit(mut self, error: bool) -> Self {
        self.error_on_limit = error;
        self
    }

    /// Enables or disables per-sweep load history.
    pub fn with_record_history(mut self, record: bool) -> Self {
        self.record_history = record;
        self
    }

    /// Enables or disables refinement of a lone axis.
    pub fn with_single_axis(mut self, enabled: bool) -> Self {
        self.single_axis = enabled;
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_sweeps == 0 {
            return Err("max_sweeps must be at least 1".into());
        }
        Ok(())
    }
}
