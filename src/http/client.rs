use std::time::Duration;

use reqwest::Client;
use tracing::error;

use crate::args::{DEFAULT_USER_AGENT, TesterArgs};
use crate::error::{AppError, AppResult, HttpError};

/// Client knobs shared by every virtual user of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientSettings {
    pub request_timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
    pub pool_max_idle_per_host: Option<usize>,
}

impl ClientSettings {
    #[must_use]
    pub const fn from_args(args: &TesterArgs) -> Self {
        Self {
            request_timeout: args.request_timeout,
            connect_timeout: args.connect_timeout,
            pool_max_idle_per_host: args.pool_max_idle_per_host,
        }
    }
}

/// Builds the pooled client handed to every virtual user.
///
/// System proxies are ignored so the measured latency is the target's own.
///
/// # Errors
///
/// Returns an error when the TLS backend or client cannot be initialized.
pub fn build_client(settings: &ClientSettings) -> AppResult<Client> {
    let mut client_builder = Client::builder()
        .user_agent(DEFAULT_USER_AGENT)
        .no_proxy();

    if let Some(timeout) = settings.request_timeout {
        client_builder = client_builder.timeout(timeout);
    }
    if let Some(timeout) = settings.connect_timeout {
        client_builder = client_builder.connect_timeout(timeout);
    }
    if let Some(max_idle) = settings.pool_max_idle_per_host {
        client_builder = client_builder.pool_max_idle_per_host(max_idle);
    }

    client_builder.build().map_err(|err| {
        error!("Failed to build HTTP client: {}", err);
        AppError::http(HttpError::BuildClientFailed { source: err })
    })
}
