//! Engine configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the [`SchedulingEngine`](super::SchedulingEngine).
///
/// # Examples
///
/// ```
/// use u_timetable::scheduler::SchedulerConfig;
///
/// let config = SchedulerConfig::default().with_top_k(5);
/// assert_eq!(config.top_k, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SchedulerConfig {
    /// Number of best combinations to keep and return.
    ///
    /// Values below 1 behave as 1.
    pub top_k: usize,
}

impl SchedulerConfig {
    /// Default number of returned combinations.
    pub const DEFAULT_TOP_K: usize = 3;

    /// Sets how many combinations to keep.
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// `top_k`, raised to at least 1.
    #[inline]
    pub fn effective_top_k(&self) -> usize {
        self.top_k.max(1)
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            top_k: Self::DEFAULT_TOP_K,
        }
    }
}
