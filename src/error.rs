use reqwest::{Response, StatusCode};
use thiserror::Error;

/// A convenient Result type alias using the crate-wide error taxonomy.
pub type Result<T> = std::result::Result<T, AoideError>;

/// Error taxonomy shared by all API clients and the command loop.
///
/// Every failure an API client can raise falls into one of these
/// categories. The command loop catches all of them at its boundary,
/// converts them to a user-facing message, and keeps running; only
/// `Config` failures during startup terminate the process.
#[derive(Error, Debug)]
pub enum AoideError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("authentication failed: {0}")]
    Auth(String),
    #[error("invalid playlist or track reference: {0}")]
    InvalidIdentifier(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("rate limited while {0}")]
    RateLimited(String),
    #[error("API error while {0}")]
    Api(String),
    #[error("request timed out while {0}")]
    Timeout(String),
}

impl AoideError {
    /// Maps a reqwest transport failure into the taxonomy.
    ///
    /// An elapsed request timeout becomes `Timeout`; everything else
    /// (connection refused, DNS, TLS) is reported as a generic `Api`
    /// failure for the named operation.
    pub fn transport(err: reqwest::Error, context: &str) -> Self {
        if err.is_timeout() {
            AoideError::Timeout(context.to_string())
        } else {
            AoideError::Api(format!("{context}: {err}"))
        }
    }
}

/// Converts a non-2xx HTTP response into the matching error category.
///
/// - 404 -> `NotFound`
/// - 429 -> `RateLimited`, carrying the `Retry-After` header when present
/// - 401/403 -> `Auth`
/// - anything else -> `Api` with status and response body
///
/// Consumes the response because the generic branch reads the body.
pub(crate) async fn error_for_response(response: Response, context: &str) -> AoideError {
    let status = response.status();
    match status {
        StatusCode::NOT_FOUND => AoideError::NotFound(context.to_string()),
        StatusCode::TOO_MANY_REQUESTS => {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok());
            match retry_after {
                Some(secs) => {
                    AoideError::RateLimited(format!("{context} (retry after {secs}s)"))
                }
                None => AoideError::RateLimited(context.to_string()),
            }
        }
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            AoideError::Auth(format!("{context}: access denied ({status})"))
        }
        _ => {
            let body = response.text().await.unwrap_or_default();
            AoideError::Api(format!("{context}: HTTP {status}: {body}"))
        }
    }
}
