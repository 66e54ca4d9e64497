//! Error types surfaced by the catalog core.

use reqwest::StatusCode;

/// The request did not produce a usable response.
#[derive(thiserror::Error, Debug)]
pub enum NetworkError {
    #[error("Network response was not ok. (HTTP {0})")]
    Status(StatusCode),

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// The response body is not a JSON array of satellite records.
#[derive(thiserror::Error, Debug)]
#[error("Response body is not valid satellite JSON: {0}")]
pub struct DecodeError(#[from] pub serde_json::Error);

/// The single error surfaced at the fetch boundary.
#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("Error fetching satellite data: {0}")]
    Network(#[from] NetworkError),

    #[error("Error fetching satellite data: {0}")]
    Decode(#[from] DecodeError),
}

/// Rejected pagination input.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("page must be a positive integer (pages are 1-indexed), got {0}")]
    Page(usize),

    #[error("per_page must be a positive integer, got {0}")]
    PerPage(usize),
}
