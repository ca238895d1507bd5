use std::time::Duration;

use super::types::{RunResult, Sample, SampleOutcome};

const NANOS_PER_MILLI: f64 = 1_000_000.0;

#[derive(Default)]
struct Tally {
    successful: u64,
    timeouts: u64,
    transport_errors: u64,
    status_errors: u64,
    latency_sum_ns: u128,
    min_latency: Option<Duration>,
    max_latency: Option<Duration>,
}

impl Tally {
    fn record(&mut self, sample: &Sample) {
        match sample.outcome() {
            SampleOutcome::Success => {
                let latency = sample.latency();
                self.successful = self.successful.saturating_add(1);
                self.latency_sum_ns = self.latency_sum_ns.saturating_add(latency.as_nanos());
                self.min_latency = Some(self.min_latency.map_or(latency, |min| min.min(latency)));
                self.max_latency = Some(self.max_latency.map_or(latency, |max| max.max(latency)));
            }
            SampleOutcome::Timeout => self.timeouts = self.timeouts.saturating_add(1),
            SampleOutcome::Transport => {
                self.transport_errors = self.transport_errors.saturating_add(1);
            }
            SampleOutcome::UnexpectedStatus(_) => {
                self.status_errors = self.status_errors.saturating_add(1);
            }
        }
    }
}

/// Derives the run-level report from every sample of a run and its wall-clock time.
///
/// Total over its inputs: an empty sample set or a zero duration yields zero
/// rates instead of dividing by zero.
#[must_use]
pub fn aggregate(label: &str, samples: &[Sample], elapsed: Duration) -> RunResult {
    let mut tally = Tally::default();
    for sample in samples {
        tally.record(sample);
    }

    let total_requests = u64::try_from(samples.len()).unwrap_or(u64::MAX);
    let error_count = total_requests.saturating_sub(tally.successful);
    let duration_seconds = elapsed.as_secs_f64();

    RunResult {
        label: label.to_owned(),
        virtual_users: total_requests,
        total_requests,
        successful_requests: tally.successful,
        error_count,
        timeout_count: tally.timeouts,
        transport_error_count: tally.transport_errors,
        status_error_count: tally.status_errors,
        error_rate_percent: percent(error_count, total_requests),
        average_latency_ms: average_ms(tally.latency_sum_ns, tally.successful),
        min_latency_ms: tally.min_latency.map_or(0.0, duration_ms),
        max_latency_ms: tally.max_latency.map_or(0.0, duration_ms),
        duration_seconds,
        requests_per_second: per_second(tally.successful, duration_seconds),
    }
}

#[expect(clippy::float_arithmetic, reason = "reported as a fractional percentage")]
fn percent(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64 * 100.0
}

#[expect(clippy::float_arithmetic, reason = "reported as fractional milliseconds")]
fn average_ms(sum_ns: u128, count: u64) -> f64 {
    if count == 0 {
        return 0.0;
    }
    sum_ns as f64 / count as f64 / NANOS_PER_MILLI
}

#[expect(clippy::float_arithmetic, reason = "reported as fractional milliseconds")]
fn duration_ms(duration: Duration) -> f64 {
    duration.as_nanos() as f64 / NANOS_PER_MILLI
}

#[expect(clippy::float_arithmetic, reason = "throughput is a fractional rate")]
fn per_second(count: u64, seconds: f64) -> f64 {
    if seconds <= 0.0 {
        return 0.0;
    }
    count as f64 / seconds
}
