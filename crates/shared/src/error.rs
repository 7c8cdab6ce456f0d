//! Client-wide error types.

use thiserror::Error;

/// Result type alias using `ClientError`.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors surfaced to callers of the PayPal client.
///
/// Nothing here is retried; the caller decides whether to report or abort.
#[derive(Debug, Error)]
pub enum ClientError {
    /// A request or response body carried a value PayPal would reject.
    #[error("Bad request ({identifier}): {reason}")]
    BadRequest {
        /// PayPal machine identifier, e.g. `badValue`.
        identifier: &'static str,
        /// Human readable description naming the field and constraint.
        reason: String,
    },

    /// A value failed a local validation rule.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A body could not be decoded.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Client configuration is missing or invalid.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Returns the HTTP status code class for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::BadRequest { .. } | Self::Validation(_) | Self::Decode(_) => 400,
            Self::Configuration(_) => 500,
        }
    }

    /// Returns the error code for logs and API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::BadRequest { .. } => "BAD_REQUEST",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Decode(_) => "DECODE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
        }
    }
}

impl From<config::ConfigError> for ClientError {
    fn from(err: config::ConfigError) -> Self {
        Self::Configuration(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn bad_request() -> ClientError {
        ClientError::BadRequest {
            identifier: "badValue",
            reason: "msg".into(),
        }
    }

    #[rstest]
    #[case(bad_request(), 400, "BAD_REQUEST")]
    #[case(ClientError::Validation(String::new()), 400, "VALIDATION_ERROR")]
    #[case(ClientError::Decode(String::new()), 400, "DECODE_ERROR")]
    #[case(ClientError::Configuration(String::new()), 500, "CONFIGURATION_ERROR")]
    fn test_status_and_error_codes(
        #[case] err: ClientError,
        #[case] status: u16,
        #[case] code: &str,
    ) {
        assert_eq!(err.status_code(), status);
        assert_eq!(err.error_code(), code);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(bad_request().to_string(), "Bad request (badValue): msg");
        assert_eq!(
            ClientError::Validation("msg".into()).to_string(),
            "Validation error: msg"
        );
        assert_eq!(
            ClientError::Decode("msg".into()).to_string(),
            "Decode error: msg"
        );
        assert_eq!(
            ClientError::Configuration("msg".into()).to_string(),
            "Configuration error: msg"
        );
    }

    #[test]
    fn test_from_config_error() {
        let err: ClientError = config::ConfigError::NotFound("client_id".into()).into();
        assert_eq!(err.error_code(), "CONFIGURATION_ERROR");
        assert!(err.to_string().contains("client_id"));
    }
}
