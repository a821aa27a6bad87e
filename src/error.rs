//! Error types for the Mailosaur client.

use reqwest::{Method, StatusCode};
use thiserror::Error;

/// Error type for all Mailosaur client operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The underlying HTTP client could not be built (bad proxy URL, TLS backend failure).
    #[error("http client error: {0}")]
    Http(#[source] reqwest::Error),
    /// The request could not be built or sent, or its response body could not be read.
    #[error("{method} {path}: request failed: {source}")]
    Transport {
        method: Method,
        path: String,
        #[source]
        source: reqwest::Error,
    },
    /// The response body was not the JSON shape the operation expects.
    ///
    /// Status codes are not interpreted, so a `404` with a non-JSON body
    /// lands here; `status` is kept to tell the two apart.
    #[error("{method} {path}: cannot decode response (status {status}): {source}")]
    Decode {
        method: Method,
        path: String,
        status: StatusCode,
        #[source]
        source: serde_json::Error,
    },
    /// Client configuration is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),
}
