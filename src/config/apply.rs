use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::{PositiveUsize, TesterArgs};
use crate::error::{AppError, AppResult, ConfigError};

use super::types::{ConfigFile, DurationValue};

/// Applies configuration values to CLI arguments. Values given on the
/// command line or through their environment variable always win.
///
/// # Errors
///
/// Returns an error when config values are invalid.
pub fn apply_config(
    args: &mut TesterArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    if !is_user_set(matches, "base_url")
        && let Some(base_url) = config.base_url.as_ref()
    {
        args.base_url.clone_from(base_url);
    }

    if !is_user_set(matches, "virtual_users")
        && let Some(users) = config.users
    {
        args.virtual_users = ensure_positive_usize(users, "users")?;
    }

    if !is_user_set(matches, "endpoints")
        && let Some(endpoints) = config.endpoints.as_ref()
    {
        if endpoints.is_empty() {
            return Err(AppError::config(ConfigError::EndpointsEmpty));
        }
        args.endpoints.clone_from(endpoints);
    }

    if !is_user_set(matches, "request_timeout")
        && let Some(timeout) = config.timeout.as_ref()
    {
        args.request_timeout = Some(to_duration(timeout, "timeout")?);
    }

    if !is_user_set(matches, "connect_timeout")
        && let Some(timeout) = config.connect_timeout.as_ref()
    {
        args.connect_timeout = Some(to_duration(timeout, "connect_timeout")?);
    }

    if !is_user_set(matches, "pool_max_idle_per_host")
        && let Some(max_idle) = config.pool_max_idle_per_host
    {
        args.pool_max_idle_per_host = Some(max_idle);
    }

    if !is_user_set(matches, "output_format")
        && let Some(format) = config.output_format
    {
        args.output_format = format;
    }

    if !is_user_set(matches, "verbose")
        && let Some(verbose) = config.verbose
    {
        args.verbose = verbose;
    }

    if !is_user_set(matches, "no_color")
        && let Some(no_color) = config.no_color
    {
        args.no_color = no_color;
    }

    Ok(())
}

/// Command-line flags and their environment fallbacks both outrank the config file.
pub(super) fn is_user_set(matches: &ArgMatches, name: &str) -> bool {
    matches!(
        matches.value_source(name),
        Some(ValueSource::CommandLine | ValueSource::EnvVariable)
    )
}

fn ensure_positive_usize(value: usize, field: &str) -> AppResult<PositiveUsize> {
    PositiveUsize::try_from(value).map_err(|err| {
        AppError::config(ConfigError::FieldMustBePositive {
            field: field.to_owned(),
            source: err,
        })
    })
}

fn to_duration(value: &DurationValue, field: &'static str) -> AppResult<std::time::Duration> {
    value
        .to_duration()
        .map_err(|err| AppError::config(ConfigError::InvalidDuration { field, source: err }))
}
