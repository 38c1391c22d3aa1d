//! Search engine configuration

use std::time::Duration;

/// Tuning for the search engine.
///
/// Only the debounce window varies by host. The result cap, history cap,
/// and minimum history length are fixed pipeline constants - callers do
/// not get to configure them.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Quiet period between the last submission and pipeline execution
    /// (default: 300ms)
    pub debounce_window: Duration,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_window: Duration::from_millis(300),
        }
    }
}
