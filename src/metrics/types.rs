use std::time::Duration;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleOutcome {
    Success,
    /// Response arrived with a non-2xx status.
    UnexpectedStatus(u16),
    Timeout,
    /// Connection refused, DNS failure, reset, or an aborted virtual user.
    Transport,
}

/// Outcome of a single virtual user's request.
///
/// Failed samples never carry latency, so they cannot skew the average.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    latency: Duration,
    outcome: SampleOutcome,
}

impl Sample {
    #[must_use]
    pub const fn success(latency: Duration) -> Self {
        Self {
            latency,
            outcome: SampleOutcome::Success,
        }
    }

    #[must_use]
    pub const fn failure(outcome: SampleOutcome) -> Self {
        Self {
            latency: Duration::ZERO,
            outcome,
        }
    }

    #[must_use]
    pub const fn latency(&self) -> Duration {
        self.latency
    }

    #[must_use]
    pub const fn outcome(&self) -> SampleOutcome {
        self.outcome
    }

    #[must_use]
    pub const fn succeeded(&self) -> bool {
        matches!(self.outcome, SampleOutcome::Success)
    }
}

/// Aggregate figures for one run. Latency figures cover successful requests only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunResult {
    pub label: String,
    pub virtual_users: u64,
    pub total_requests: u64,
    pub successful_requests: u64,
    pub error_count: u64,
    pub timeout_count: u64,
    pub transport_error_count: u64,
    pub status_error_count: u64,
    pub error_rate_percent: f64,
    pub average_latency_ms: f64,
    pub min_latency_ms: f64,
    pub max_latency_ms: f64,
    pub duration_seconds: f64,
    pub requests_per_second: f64,
}
