use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use futures_util::future::join_all;
use reqwest::Url;
use tokio::sync::Semaphore;
use tokio::time::Instant;
use tracing::{debug, error, info};

use crate::error::{AppError, AppResult, ValidationError};
use crate::metrics::{Sample, SampleOutcome};

use super::config::RunConfig;

/// Performs one virtual user's request.
///
/// Implementations must not fail: every outcome, including transport
/// errors, is reported as a [`Sample`].
#[async_trait]
pub trait Executor: Send + Sync + 'static {
    async fn execute(&self, url: &Url) -> Sample;
}

/// Everything a run produced: one sample per virtual user, in no particular order.
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub samples: Vec<Sample>,
    pub elapsed: Duration,
}

pub struct LoadGenerator<E> {
    executor: Arc<E>,
}

impl<E: Executor> LoadGenerator<E> {
    #[must_use]
    pub fn new(executor: E) -> Self {
        Self {
            executor: Arc::new(executor),
        }
    }

    /// Fans out `virtual_users` concurrent executions and waits for all of them.
    ///
    /// Every virtual user is spawned behind a closed start gate; the clock
    /// starts right before the gate opens and stops once the last one joins.
    /// Each task hands its sample back through its join handle, so no shared
    /// collection is written concurrently.
    ///
    /// # Errors
    ///
    /// Returns an error when the target URL is invalid or the virtual user
    /// count cannot be scheduled.
    pub async fn run(&self, config: &RunConfig) -> AppResult<LoadOutcome> {
        let url = Arc::new(config.target_url()?);
        let virtual_users = config.virtual_users();
        if virtual_users > Semaphore::MAX_PERMITS {
            return Err(AppError::validation(
                ValidationError::TooManyVirtualUsers {
                    requested: virtual_users,
                    max: Semaphore::MAX_PERMITS,
                },
            ));
        }

        info!(
            "Starting {} with {} virtual users against {}",
            config.label(),
            virtual_users,
            url
        );

        let start_gate = Arc::new(Semaphore::new(0));
        let mut handles = Vec::with_capacity(virtual_users);
        for _ in 0..virtual_users {
            let executor = Arc::clone(&self.executor);
            let url = Arc::clone(&url);
            let start_gate = Arc::clone(&start_gate);
            handles.push(tokio::spawn(async move {
                if let Some(aborted) = wait_for_start(start_gate).await {
                    return aborted;
                }
                executor.execute(&url).await
            }));
        }

        let start = Instant::now();
        start_gate.add_permits(virtual_users);
        let joined = join_all(handles).await;
        let elapsed = start.elapsed();

        let samples: Vec<Sample> = joined
            .into_iter()
            .map(|result| match result {
                Ok(sample) => sample,
                Err(err) => {
                    error!("Virtual user aborted: {}", err);
                    Sample::failure(SampleOutcome::Transport)
                }
            })
            .collect();

        debug!(
            "{} finished {} virtual users in {:?}",
            config.label(),
            samples.len(),
            elapsed
        );

        Ok(LoadOutcome { samples, elapsed })
    }
}

/// Parks a virtual user until the run opens the gate. A closed gate aborts
/// the user with a `Transport` sample so the run still yields one sample per user.
pub(super) async fn wait_for_start(start_gate: Arc<Semaphore>) -> Option<Sample> {
    match start_gate.acquire_owned().await {
        Ok(_permit) => None,
        Err(err) => {
            error!("Virtual user never started: {}", err);
            Some(Sample::failure(SampleOutcome::Transport))
        }
    }
}
