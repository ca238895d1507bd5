use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

use crate::error::ValidationError;

/// Target routes exposed by the demo server.
#[derive(Debug, Clone, Copy, ValueEnum, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Endpoint {
    AsyncSleep,
    AsyncCalculate,
    SyncSleep,
    SyncCalculate,
}

impl Endpoint {
    /// Suite order used when no endpoint is selected explicitly.
    pub const ALL: [Endpoint; 4] = [
        Endpoint::AsyncSleep,
        Endpoint::AsyncCalculate,
        Endpoint::SyncSleep,
        Endpoint::SyncCalculate,
    ];

    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Endpoint::AsyncSleep => "/asynctesting/sleep",
            Endpoint::AsyncCalculate => "/asynctesting/calculate",
            Endpoint::SyncSleep => "/synctesting/sleep",
            Endpoint::SyncCalculate => "/synctesting/calculate",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Endpoint::AsyncSleep => "AsyncTestSleep",
            Endpoint::AsyncCalculate => "AsyncTestCalculate",
            Endpoint::SyncSleep => "SyncTestSleep",
            Endpoint::SyncCalculate => "SyncTestCalculate",
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositiveUsize(NonZeroUsize);

impl PositiveUsize {
    pub const MIN: Self = PositiveUsize(NonZeroUsize::MIN);

    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl TryFrom<usize> for PositiveUsize {
    type Error = ValidationError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        NonZeroUsize::new(value)
            .map(PositiveUsize)
            .ok_or(ValidationError::ValueTooSmall { min: 1 })
    }
}

impl std::str::FromStr for PositiveUsize {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: usize = s
            .trim()
            .parse()
            .map_err(|err| ValidationError::InvalidNumber { source: err })?;
        PositiveUsize::try_from(value)
    }
}

impl From<PositiveUsize> for usize {
    fn from(value: PositiveUsize) -> Self {
        value.get()
    }
}

impl std::fmt::Display for PositiveUsize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.get())
    }
}
