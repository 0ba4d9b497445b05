//! Timeout configuration for API calls.

use std::time::Duration;

/// Timeout configuration for a fetch operation.
#[derive(Debug, Clone)]
pub struct TimeoutConfig {
    /// Connection timeout.
    pub connect: Duration,
    /// Time to first byte.
    pub response: Duration,
    /// Total operation timeout.
    pub total: Duration,
}

impl TimeoutConfig {
    /// Create a new timeout configuration.
    pub fn new(connect: Duration, response: Duration, total: Duration) -> Self {
        Self {
            connect,
            response,
            total,
        }
    }

    /// Create from a single total timeout.
    pub fn from_total(total: Duration) -> Self {
        Self {
            connect: Duration::from_millis(total.as_millis() as u64 / 4),
            response: Duration::from_millis(total.as_millis() as u64 / 2),
            total,
        }
    }
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        // Interactive storefront budget: slow enough for a cold backend,
        // fast enough to keep the UI responsive.
        Self {
            connect: Duration::from_millis(500),
            response: Duration::from_secs(2),
            total: Duration::from_secs(5),
        }
    }
}
