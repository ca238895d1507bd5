use super::*;
use std::time::Duration;

const EPSILON: f64 = 1e-9;

#[expect(clippy::float_arithmetic, reason = "tolerance comparison")]
fn approx_eq(left: f64, right: f64) -> bool {
    (left - right).abs() < EPSILON
}

fn ok_ms(ms: u64) -> Sample {
    Sample::success(Duration::from_millis(ms))
}

#[test]
fn empty_samples_yield_zero_result() -> Result<(), String> {
    let result = aggregate("Empty", &[], Duration::ZERO);

    let checks = [
        (result.total_requests == 0, "Unexpected total_requests"),
        (result.successful_requests == 0, "Unexpected successful"),
        (result.error_count == 0, "Unexpected error_count"),
        (approx_eq(result.error_rate_percent, 0.0), "Unexpected error rate"),
        (approx_eq(result.average_latency_ms, 0.0), "Unexpected average"),
        (approx_eq(result.min_latency_ms, 0.0), "Unexpected min"),
        (approx_eq(result.max_latency_ms, 0.0), "Unexpected max"),
        (approx_eq(result.requests_per_second, 0.0), "Unexpected rps"),
        (approx_eq(result.duration_seconds, 0.0), "Unexpected duration"),
    ];
    for (ok, message) in checks {
        if !ok {
            return Err(format!("{}: {:?}", message, result));
        }
    }
    Ok(())
}

#[test]
fn successes_average_and_throughput() -> Result<(), String> {
    let samples = [ok_ms(10), ok_ms(20), ok_ms(30)];
    let result = aggregate("AsyncTestSleep", &samples, Duration::from_secs(1));

    if result.label != "AsyncTestSleep" {
        return Err(format!("Unexpected label: {}", result.label));
    }
    if result.total_requests != 3 || result.successful_requests != 3 {
        return Err(format!("Unexpected counts: {:?}", result));
    }
    if !approx_eq(result.average_latency_ms, 20.0) {
        return Err(format!("Unexpected average: {}", result.average_latency_ms));
    }
    if !approx_eq(result.requests_per_second, 3.0) {
        return Err(format!("Unexpected rps: {}", result.requests_per_second));
    }
    if !approx_eq(result.min_latency_ms, 10.0) || !approx_eq(result.max_latency_ms, 30.0) {
        return Err(format!(
            "Unexpected min/max: {} / {}",
            result.min_latency_ms, result.max_latency_ms
        ));
    }
    if !approx_eq(result.error_rate_percent, 0.0) {
        return Err(format!("Unexpected error rate: {}", result.error_rate_percent));
    }
    Ok(())
}

#[test]
fn all_failures_report_full_error_rate_and_zero_latency() -> Result<(), String> {
    let samples = [
        Sample::failure(SampleOutcome::Transport),
        Sample::failure(SampleOutcome::Timeout),
        Sample::failure(SampleOutcome::UnexpectedStatus(503)),
        Sample::failure(SampleOutcome::UnexpectedStatus(404)),
    ];
    let result = aggregate("SyncTestSleep", &samples, Duration::from_millis(500));

    if result.total_requests != 4 || result.successful_requests != 0 || result.error_count != 4 {
        return Err(format!("Unexpected counts: {:?}", result));
    }
    if !approx_eq(result.error_rate_percent, 100.0) {
        return Err(format!("Unexpected error rate: {}", result.error_rate_percent));
    }
    if !approx_eq(result.average_latency_ms, 0.0) {
        return Err(format!("Unexpected average: {}", result.average_latency_ms));
    }
    if !approx_eq(result.requests_per_second, 0.0) {
        return Err(format!("Unexpected rps: {}", result.requests_per_second));
    }
    if result.timeout_count != 1 || result.transport_error_count != 1 || result.status_error_count != 2
    {
        return Err(format!("Unexpected breakdown: {:?}", result));
    }
    Ok(())
}

#[test]
fn failed_samples_do_not_skew_average() -> Result<(), String> {
    let samples = [
        ok_ms(40),
        Sample::failure(SampleOutcome::Timeout),
        ok_ms(60),
        Sample::failure(SampleOutcome::UnexpectedStatus(500)),
    ];
    let result = aggregate("Mixed", &samples, Duration::from_secs(2));

    if result.successful_requests.saturating_add(result.error_count) != result.total_requests {
        return Err(format!("Counts do not add up: {:?}", result));
    }
    if result.error_count
        != result
            .timeout_count
            .saturating_add(result.transport_error_count)
            .saturating_add(result.status_error_count)
    {
        return Err(format!("Breakdown does not add up: {:?}", result));
    }
    if !approx_eq(result.average_latency_ms, 50.0) {
        return Err(format!("Unexpected average: {}", result.average_latency_ms));
    }
    if !approx_eq(result.error_rate_percent, 50.0) {
        return Err(format!("Unexpected error rate: {}", result.error_rate_percent));
    }
    if !approx_eq(result.requests_per_second, 1.0) {
        return Err(format!("Unexpected rps: {}", result.requests_per_second));
    }
    Ok(())
}

#[test]
fn zero_duration_does_not_divide() -> Result<(), String> {
    let result = aggregate("Instant", &[ok_ms(1), ok_ms(2)], Duration::ZERO);
    if !approx_eq(result.requests_per_second, 0.0) {
        return Err(format!("Unexpected rps: {}", result.requests_per_second));
    }
    if result.successful_requests != 2 {
        return Err("Unexpected successful count".to_owned());
    }
    Ok(())
}

#[test]
fn aggregate_is_deterministic() -> Result<(), String> {
    let samples = [
        ok_ms(12),
        Sample::failure(SampleOutcome::Transport),
        ok_ms(7),
        ok_ms(31),
    ];
    let elapsed = Duration::from_millis(1250);
    let first = aggregate("Repeat", &samples, elapsed);
    let second = aggregate("Repeat", &samples, elapsed);
    if first != second {
        return Err(format!("Results differ: {:?} vs {:?}", first, second));
    }
    Ok(())
}

#[test]
fn sample_order_is_irrelevant() -> Result<(), String> {
    let forward = [ok_ms(5), Sample::failure(SampleOutcome::Timeout), ok_ms(15)];
    let reversed = [ok_ms(15), Sample::failure(SampleOutcome::Timeout), ok_ms(5)];
    let elapsed = Duration::from_millis(300);
    let left = aggregate("Order", &forward, elapsed);
    let right = aggregate("Order", &reversed, elapsed);
    if left != right {
        return Err(format!("Order changed result: {:?} vs {:?}", left, right));
    }
    Ok(())
}

#[test]
fn failure_samples_carry_no_latency() -> Result<(), String> {
    let sample = Sample::failure(SampleOutcome::UnexpectedStatus(502));
    if sample.succeeded() {
        return Err("Failure sample reported success".to_owned());
    }
    if sample.latency() != Duration::ZERO {
        return Err(format!("Unexpected latency: {:?}", sample.latency()));
    }
    if !ok_ms(3).succeeded() {
        return Err("Success sample reported failure".to_owned());
    }
    Ok(())
}
