use std::io::Write;

use tracing::{info, warn};

use crate::args::{OutputFormat, TesterArgs};
use crate::error::AppResult;
use crate::http::{ClientSettings, HttpExecutor, build_client};
use crate::load::{LoadGenerator, RunConfig};
use crate::metrics::{RunResult, aggregate};
use crate::report::render;

/// Runs every selected endpoint in order, writing each report to `out` as soon
/// as its run completes.
///
/// Failed requests only raise the error rate; they never abort the suite.
///
/// # Errors
///
/// Returns an error when a run cannot be started or a report cannot be written.
pub async fn run_suite<W: Write>(args: &TesterArgs, out: &mut W) -> AppResult<Vec<RunResult>> {
    let settings = ClientSettings::from_args(args);
    let endpoints = args.selected_endpoints();
    let mut results = Vec::with_capacity(endpoints.len());

    for endpoint in endpoints {
        let config =
            RunConfig::for_endpoint(&args.base_url, endpoint, args.virtual_users.get());
        let result = run_once(&settings, &config).await?;

        out.write_all(render(&result, args.output_format)?.as_bytes())?;
        if args.output_format == OutputFormat::Text {
            out.write_all(b"\n")?;
        }
        out.flush()?;

        results.push(result);
    }

    Ok(results)
}

/// Executes one run on its own connection pool and aggregates the samples.
///
/// # Errors
///
/// Returns an error when the client cannot be built or the target URL is invalid.
pub async fn run_once(settings: &ClientSettings, config: &RunConfig) -> AppResult<RunResult> {
    let client = build_client(settings)?;
    let generator = LoadGenerator::new(HttpExecutor::new(client));
    let outcome = generator.run(config).await?;
    let result = aggregate(config.label(), &outcome.samples, outcome.elapsed);

    if result.error_count > 0 {
        warn!(
            "{}: {} of {} requests failed ({} timeouts, {} transport, {} non-2xx)",
            result.label,
            result.error_count,
            result.total_requests,
            result.timeout_count,
            result.transport_error_count,
            result.status_error_count
        );
    }
    info!(
        "{} completed in {:.2}s",
        result.label, result.duration_seconds
    );

    Ok(result)
}
