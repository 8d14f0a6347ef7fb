//! Classification of HEAD request outcomes.

use reqwest::StatusCode;
use std::error::Error;
use std::fmt;

/// Result of probing a download URL. Every response or transport failure maps
/// to exactly one variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlStatus {
    /// HTTP 200
    Valid,
    /// HTTP 404
    NotFound,
    /// Any other HTTP status
    HttpStatus(u16),
    /// The request did not complete within the configured timeout
    Timeout,
    /// Connection, DNS, TLS, redirect-loop or malformed-URL failures
    NetworkError(String),
}

impl UrlStatus {
    /// Classifies a received HTTP status. Only 200 counts as valid.
    pub fn from_status(status: StatusCode) -> Self {
        match status {
            StatusCode::OK => UrlStatus::Valid,
            StatusCode::NOT_FOUND => UrlStatus::NotFound,
            other => UrlStatus::HttpStatus(other.as_u16()),
        }
    }

    /// Classifies a request that produced no response.
    pub fn from_error(error: &reqwest::Error) -> Self {
        if error.is_timeout() {
            UrlStatus::Timeout
        } else {
            UrlStatus::NetworkError(error_chain(error))
        }
    }

    /// Returns true if the URL answered with 200.
    pub fn is_valid(&self) -> bool {
        matches!(self, UrlStatus::Valid)
    }
}

impl fmt::Display for UrlStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrlStatus::Valid => write!(f, "OK"),
            UrlStatus::NotFound => write!(f, "URL not found"),
            UrlStatus::HttpStatus(code) => write!(f, "HTTP {}", code),
            UrlStatus::Timeout => write!(f, "Request timed out"),
            UrlStatus::NetworkError(detail) => write!(f, "Network error: {}", detail),
        }
    }
}

/// reqwest's top-level message ("error sending request for url ...") hides the cause.
fn error_chain(error: &reqwest::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
