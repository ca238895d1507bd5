use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::{Client, Url};
use tokio::time::Instant;
use tracing::debug;

use crate::load::Executor;
use crate::metrics::{Sample, SampleOutcome};

/// [`Executor`] backed by a shared, connection-pooled [`Client`].
#[derive(Debug, Clone)]
pub struct HttpExecutor {
    client: Client,
}

impl HttpExecutor {
    #[must_use]
    pub const fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Executor for HttpExecutor {
    async fn execute(&self, url: &Url) -> Sample {
        execute(&self.client, url.clone()).await
    }
}

/// Issues one GET and times it until the full body has been read.
///
/// Never fails: transport errors, timeouts, and non-2xx statuses all come
/// back as failed samples.
pub async fn execute(client: &Client, url: Url) -> Sample {
    let start = Instant::now();
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(err) => {
            debug!("Request exception: {}", err);
            return Sample::failure(classify(&err));
        }
    };

    let status = response.status();
    if !status.is_success() {
        debug!("Request failed with status code: {}", status);
        // The status already decides the outcome; the body only frees the connection.
        if let Err(err) = drain_response_body(response).await {
            debug!("Failed to read error response body: {}", err);
        }
        return Sample::failure(SampleOutcome::UnexpectedStatus(status.as_u16()));
    }

    if let Err(err) = drain_response_body(response).await {
        debug!("Failed to read response body: {}", err);
        return Sample::failure(classify(&err));
    }
    Sample::success(start.elapsed())
}

fn classify(err: &reqwest::Error) -> SampleOutcome {
    if err.is_timeout() {
        SampleOutcome::Timeout
    } else {
        SampleOutcome::Transport
    }
}

async fn drain_response_body(response: reqwest::Response) -> Result<(), reqwest::Error> {
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        drop(chunk?);
    }
    Ok(())
}
