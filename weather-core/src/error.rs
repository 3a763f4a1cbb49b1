use reqwest::StatusCode;
use thiserror::Error;

/// Why a weather fetch did not produce a model.
///
/// Every variant displays with a `fetch failed:` prefix so callers that only
/// want to report failure can print it as-is.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request URL could not be built from the configuration and query.
    #[error("fetch failed: invalid request: {0}")]
    RequestConstruction(String),

    /// Network, TLS or body-read failure from the HTTP client.
    #[error("fetch failed: transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("fetch failed: upstream returned status {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// The body did not match the expected JSON shape.
    #[error("fetch failed: could not decode weather JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("fetch failed: response contained no weather conditions")]
    EmptyConditionList,
}
