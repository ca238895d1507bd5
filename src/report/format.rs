use std::fmt::Write as _;

use crate::args::OutputFormat;
use crate::error::{AppError, AppResult, ReportError};
use crate::metrics::RunResult;

const SEPARATOR: &str = "======================================";

fn write_line(output: &mut String, line: &str) -> AppResult<()> {
    writeln!(output, "{}", line)
        .map_err(|err| AppError::report(ReportError::WriteLine { source: err }))
}

/// Renders `result` in the requested output format.
///
/// # Errors
///
/// Returns an error when the report cannot be formatted or serialized.
pub fn render(result: &RunResult, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Text => format_text(result),
        OutputFormat::Json => format_json(result),
    }
}

/// Multi-line block titled with the run label; rates use two decimals.
///
/// # Errors
///
/// Returns an error when writing into the buffer fails.
pub fn format_text(result: &RunResult) -> AppResult<String> {
    let mut output = String::new();
    write_line(&mut output, &format!("Results for {}", result.label))?;
    write_line(&mut output, SEPARATOR)?;
    write_line(&mut output, "--- Performance Measurement ---")?;
    write_line(
        &mut output,
        &format!("Test Duration: {:.2} seconds", result.duration_seconds),
    )?;
    write_line(
        &mut output,
        &format!("Virtual Users: {}", result.virtual_users),
    )?;
    write_line(
        &mut output,
        &format!("Total Requests: {}", result.total_requests),
    )?;
    write_line(
        &mut output,
        &format!("Successful Requests: {}", result.successful_requests),
    )?;
    write_line(&mut output, &format!("Error Count: {}", result.error_count))?;
    write_line(
        &mut output,
        &format!(
            "  Timeouts / Transport / Non-2xx: {} / {} / {}",
            result.timeout_count, result.transport_error_count, result.status_error_count
        ),
    )?;
    write_line(
        &mut output,
        &format!("Error Rate: {:.2}%", result.error_rate_percent),
    )?;
    write_line(
        &mut output,
        &format!(
            "Average Response Time: {:.2} ms",
            result.average_latency_ms
        ),
    )?;
    write_line(
        &mut output,
        &format!(
            "Min/Max Response Time: {:.2} ms / {:.2} ms",
            result.min_latency_ms, result.max_latency_ms
        ),
    )?;
    write_line(
        &mut output,
        &format!(
            "Requests Per Second (Throughput): {:.2}",
            result.requests_per_second
        ),
    )?;
    write_line(&mut output, SEPARATOR)?;
    Ok(output)
}

/// One JSON object per run, newline-terminated.
///
/// # Errors
///
/// Returns an error when serialization fails.
pub fn format_json(result: &RunResult) -> AppResult<String> {
    let mut output = serde_json::to_string(result)
        .map_err(|err| AppError::report(ReportError::Serialize { source: err }))?;
    output.push('\n');
    Ok(output)
}
