use reqwest::Url;

use crate::args::Endpoint;
use crate::error::{AppError, AppResult, HttpError};

/// Parameters of a single run: where to send requests and how many virtual users send them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    target_base_url: String,
    endpoint_path: String,
    virtual_users: usize,
    label: String,
}

impl RunConfig {
    #[must_use]
    pub fn new(
        target_base_url: &str,
        endpoint_path: &str,
        virtual_users: usize,
        label: &str,
    ) -> Self {
        Self {
            target_base_url: target_base_url.to_owned(),
            endpoint_path: endpoint_path.to_owned(),
            virtual_users,
            label: label.to_owned(),
        }
    }

    #[must_use]
    pub fn for_endpoint(target_base_url: &str, endpoint: Endpoint, virtual_users: usize) -> Self {
        Self::new(
            target_base_url,
            endpoint.path(),
            virtual_users,
            endpoint.label(),
        )
    }

    #[must_use]
    pub fn target_base_url(&self) -> &str {
        &self.target_base_url
    }

    #[must_use]
    pub fn endpoint_path(&self) -> &str {
        &self.endpoint_path
    }

    #[must_use]
    pub const fn virtual_users(&self) -> usize {
        self.virtual_users
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Joins base URL and endpoint path with exactly one `/` between them.
    ///
    /// # Errors
    ///
    /// Returns an error when the result is not an absolute http(s) URL.
    pub fn target_url(&self) -> AppResult<Url> {
        let raw = format!(
            "{}/{}",
            self.target_base_url.trim_end_matches('/'),
            self.endpoint_path.trim_start_matches('/')
        );
        let url = Url::parse(&raw).map_err(|err| {
            AppError::http(HttpError::InvalidUrl {
                url: raw.clone(),
                source: err,
            })
        })?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(AppError::http(HttpError::UnsupportedScheme {
                scheme: other.to_owned(),
                url: raw,
            })),
        }
    }
}
