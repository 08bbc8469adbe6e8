use thiserror::Error;

/// Failures while serving a search request. Every variant is reported
/// the same way on the wire: HTTP 500 with a search-phase error body
/// carrying the message as the reason.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("failed to read request body: {0}")]
    BodyRead(String),

    #[error("{0}")]
    InvalidBody(String),
}
