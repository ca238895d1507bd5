use clap::Parser;
use std::time::Duration;

use super::defaults::{DEFAULT_BASE_URL, DEFAULT_VIRTUAL_USERS};
use super::parsers::{parse_bool_env, parse_duration_arg, parse_positive_usize};
use super::types::{Endpoint, OutputFormat, PositiveUsize};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Virtual-user HTTP micro-benchmark - fires one concurrent GET per virtual user at sync/async endpoints and reports latency, error rate, and throughput."
)]
pub struct TesterArgs {
    /// Base URL of the server under test
    #[arg(long = "url", short = 'u', default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Virtual users per run; each issues exactly one request
    #[arg(
        long = "users",
        short = 'c',
        alias = "virtual-users",
        default_value_t = default_virtual_users(),
        value_parser = parse_positive_usize
    )]
    pub virtual_users: PositiveUsize,

    /// Endpoint to benchmark (repeatable, defaults to all four in suite order)
    #[arg(long = "endpoint", short = 'e', ignore_case = true)]
    pub endpoints: Vec<Endpoint>,

    /// Per-request timeout (supports ms/s/m/h); unbounded when unset
    #[arg(long = "timeout", value_parser = parse_duration_arg)]
    pub request_timeout: Option<Duration>,

    /// Connect timeout (supports ms/s/m/h)
    #[arg(long = "connect-timeout", value_parser = parse_duration_arg)]
    pub connect_timeout: Option<Duration>,

    /// Maximum idle pooled connections kept per host
    #[arg(long = "pool-max-idle-per-host")]
    pub pool_max_idle_per_host: Option<usize>,

    /// Report format written to stdout
    #[arg(
        long = "output-format",
        short = 'o',
        default_value = "text",
        ignore_case = true
    )]
    pub output_format: OutputFormat,

    /// Path to a TOML or JSON config file (defaults to ./vubench.toml or ./vubench.json)
    #[arg(long)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,

    /// Disable ANSI colors in log output
    #[arg(long = "no-color", env = "NO_COLOR", value_parser = parse_bool_env)]
    pub no_color: bool,
}

impl TesterArgs {
    /// Endpoints to run, in order. An empty selection means the full suite.
    #[must_use]
    pub fn selected_endpoints(&self) -> Vec<Endpoint> {
        if self.endpoints.is_empty() {
            Endpoint::ALL.to_vec()
        } else {
            self.endpoints.clone()
        }
    }
}

fn default_virtual_users() -> PositiveUsize {
    PositiveUsize::try_from(DEFAULT_VIRTUAL_USERS).unwrap_or(PositiveUsize::MIN)
}
