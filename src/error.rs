// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Embed(EmbedError),
}

/// Reasons the embedding surface could not display a view.
///
/// Every variant collapses to the same user-facing error state; the variant
/// only selects the detail line shown under the fixed message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmbedError {
    /// The provider forbids framing (`X-Frame-Options` or CSP `frame-ancestors`).
    FramingBlocked,

    /// The provider answered with a non-success status code.
    HttpStatus(u16),

    /// No answer within the configured timeout.
    Timeout,

    /// Connection, TLS or protocol failure.
    Network(String),
}

impl EmbedError {
    /// Returns the i18n message key for the detail line of this error.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            EmbedError::FramingBlocked => "embed-error-framing-blocked",
            EmbedError::HttpStatus(_) => "embed-error-http-status",
            EmbedError::Timeout => "embed-error-timeout",
            EmbedError::Network(_) => "embed-error-network",
        }
    }

    /// Classifies a `reqwest` failure.
    pub fn from_reqwest(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            EmbedError::Timeout
        } else if let Some(status) = err.status() {
            EmbedError::HttpStatus(status.as_u16())
        } else {
            EmbedError::Network(err.to_string())
        }
    }
}

impl fmt::Display for EmbedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmbedError::FramingBlocked => write!(f, "Provider does not allow embedding"),
            EmbedError::HttpStatus(code) => write!(f, "HTTP status {}", code),
            EmbedError::Timeout => write!(f, "Timed out"),
            EmbedError::Network(msg) => write!(f, "Network error: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Embed(e) => write!(f, "Embed Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<EmbedError> for Error {
    fn from(err: EmbedError) -> Self {
        Error::Embed(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
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

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn embed_error_wraps_into_error() {
        let err: Error = EmbedError::Timeout.into();
        assert!(matches!(err, Error::Embed(EmbedError::Timeout)));
        assert_eq!(format!("{}", err), "Embed Error: Timed out");
    }

    #[test]
    fn embed_error_i18n_keys_are_distinct() {
        let keys = [
            EmbedError::FramingBlocked.i18n_key(),
            EmbedError::HttpStatus(404).i18n_key(),
            EmbedError::Timeout.i18n_key(),
            EmbedError::Network("x".into()).i18n_key(),
        ];
        for (i, a) in keys.iter().enumerate() {
            for b in &keys[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn embed_error_display_includes_status() {
        assert!(format!("{}", EmbedError::HttpStatus(503)).contains("503"));
    }
}
