use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to serialize run result: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to format report line: {source}")]
    WriteLine {
        #[source]
        source: std::fmt::Error,
    },
}
