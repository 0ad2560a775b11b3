//! API error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status_code}) for {path}")]
    Status {
        status_code: u16,
        path: String,
    },

    #[error("Failed to parse response body from {path}: {source}")]
    InvalidJson {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Response body from {path} is not a JSON object")]
    NotAnObject {
        path: String,
    },

    #[error("Response body from {path} has no '{field}' field")]
    MissingField {
        path: String,
        field: String,
    },

    #[error("Failed to decode '{field}' records: {source}")]
    Decode {
        field: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid request URL {url}: {message}")]
    InvalidUrl {
        url: String,
        message: String,
    },
}
