use std::time::Duration;

use serde::Deserialize;

use crate::args::{Endpoint, OutputFormat, parse_duration_value};
use crate::error::ValidationError;

#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(alias = "url")]
    pub base_url: Option<String>,
    #[serde(alias = "virtual_users")]
    pub users: Option<usize>,
    pub endpoints: Option<Vec<Endpoint>>,
    pub timeout: Option<DurationValue>,
    pub connect_timeout: Option<DurationValue>,
    pub pool_max_idle_per_host: Option<usize>,
    pub output_format: Option<OutputFormat>,
    pub verbose: Option<bool>,
    pub no_color: Option<bool>,
}

/// A duration given either as whole seconds or as a `150ms`-style string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(u64),
    Text(String),
}

impl DurationValue {
    pub(crate) fn to_duration(&self) -> Result<Duration, ValidationError> {
        match self {
            DurationValue::Seconds(0) => Err(ValidationError::DurationZero),
            DurationValue::Seconds(secs) => Ok(Duration::from_secs(*secs)),
            DurationValue::Text(text) => parse_duration_value(text),
        }
    }
}
