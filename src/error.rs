//! Request Errors
//!
//! Every variant means the same thing to the page: the call did not succeed.
//! The variants only exist so the log says why.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// fetch() rejected: offline, DNS, CORS, aborted
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("could not encode request body: {0}")]
    Encode(String),
    #[error("no browser window available")]
    NoWindow,
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Encode(err.to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message() {
        assert_eq!(ApiError::Status(404).to_string(), "server responded with status 404");
    }
}
