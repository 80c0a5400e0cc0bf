//! Component error type for the heroes API adapter.
//!
//! [`HeroApiError`] never crosses the [`roster::HeroStore`] boundary: the
//! client recovers every failure into the operation's fallback value. It is
//! public so the recovery path (and tests) can inspect what went wrong.

use thiserror::Error;

/// A failed exchange with the heroes web API.
#[derive(Debug, Error)]
pub enum HeroApiError {
    /// Transport-level failure: connect error, timeout, or a body that did
    /// not decode as the expected shape.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-2xx status. `detail` is the response
    /// body text, which may be empty.
    #[error("server returned status {status}: {detail}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body text.
        detail: String,
    },
}

impl HeroApiError {
    /// The one-line, sink-facing description of this failure.
    ///
    /// Prefers the server-supplied body; falls back to a generic phrase when
    /// the server sent nothing usable.
    pub fn detail(&self) -> String {
        match self {
            Self::Http(err) => err.to_string(),
            Self::Status { detail, .. } if !detail.trim().is_empty() => {
                detail.trim().to_string()
            }
            Self::Status { status, .. } => format!("request failed with status {status}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_prefers_server_body() {
        let err = HeroApiError::Status {
            status: 400,
            detail: "name must not be empty".to_string(),
        };
        assert_eq!(err.detail(), "name must not be empty");
    }

    #[test]
    fn detail_falls_back_when_body_is_blank() {
        let err = HeroApiError::Status {
            status: 404,
            detail: "  ".to_string(),
        };
        assert_eq!(err.detail(), "request failed with status 404");
    }
}
