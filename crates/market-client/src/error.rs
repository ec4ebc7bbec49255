use std::fmt;

/// Result type for market-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while talking to the marketplace
#[derive(Debug)]
pub enum Error {
    /// Transport, HTTP status or response decoding failure.
    ///
    /// Ends the browsing session; requests are never retried.
    RequestFailed { url: String, reason: String },

    /// Configuration error
    Config(String),

    /// IO operation failed
    Io(std::io::Error),
}

impl Error {
    pub fn request_failed(url: impl Into<String>, reason: impl fmt::Display) -> Self {
        Error::RequestFailed {
            url: url.into(),
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::RequestFailed { url, reason } => {
                write!(f, "Request to {} failed: {}", url, reason)
            }
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::RequestFailed { .. } | Error::Config(_) => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let url = err
            .url()
            .map(|u| u.to_string())
            .unwrap_or_else(|| "(unknown url)".to_string());
        Error::RequestFailed {
            url,
            reason: err.to_string(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_failed_display() {
        let err = Error::request_failed("http://localhost/search/", "HTTP 500");
        assert_eq!(
            err.to_string(),
            "Request to http://localhost/search/ failed: HTTP 500"
        );
    }
}
