// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client error types covering transport, parse, and upstream API failures.

use reqwest::StatusCode;

/// Error type for every fallible Fitbit API operation.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FitbitError {
    /// Connection/DNS/TLS failure surfaced verbatim from the transport.
    #[error("transport error: {0}")]
    Transport(String),

    /// Response body was not parseable JSON.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Upstream reported a logical error via its `errors` array.
    #[error("Fitbit API error ({error_type}): {message}")]
    Api { error_type: String, message: String },

    /// Requested time-series metric is not in the supported set.
    /// Raised before any network request is made.
    #[error("unknown time-series metric: {0}")]
    UnknownMetric(String),

    /// Token endpoint rejected an authorization-code or refresh exchange.
    #[error("token exchange rejected ({error_type}): {message}")]
    AuthExchange { error_type: String, message: String },
}

impl FitbitError {
    /// Upstream error types that mean the bearer token itself is bad.
    const TOKEN_ERROR_TYPES: [&'static str; 3] =
        ["invalid_token", "expired_token", "invalid_grant"];

    /// True if this error indicates an invalid or expired token,
    /// i.e. re-authorization (not a retry) is the fix.
    pub fn is_token_error(&self) -> bool {
        match self {
            Self::Api { error_type, .. } | Self::AuthExchange { error_type, .. } => {
                Self::TOKEN_ERROR_TYPES.contains(&error_type.as_str())
            }
            _ => false,
        }
    }

    /// HTTP status a server-side caller would map this failure to.
    ///
    /// The transport contract only hands back body text, so this is a
    /// classification of the upstream error type, not an observed status.
    pub fn http_status_hint(&self) -> StatusCode {
        match self {
            Self::Transport(_) | Self::MalformedResponse(_) => StatusCode::BAD_GATEWAY,
            Self::UnknownMetric(_) => StatusCode::BAD_REQUEST,
            Self::Api { error_type, .. } | Self::AuthExchange { error_type, .. } => {
                match error_type.as_str() {
                    "invalid_token" | "expired_token" | "invalid_grant" => {
                        StatusCode::UNAUTHORIZED
                    }
                    "insufficient_scope" | "insufficient_permissions" => StatusCode::FORBIDDEN,
                    "rate_limit_exceeded" => StatusCode::TOO_MANY_REQUESTS,
                    "invalid_request" | "validation" => StatusCode::BAD_REQUEST,
                    _ => StatusCode::BAD_GATEWAY,
                }
            }
        }
    }
}

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, FitbitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_token_error_matches() {
        let err = FitbitError::Api {
            error_type: "expired_token".to_string(),
            message: "Access token expired".to_string(),
        };
        assert!(err.is_token_error());

        let err = FitbitError::AuthExchange {
            error_type: "invalid_grant".to_string(),
            message: "Refresh token invalid".to_string(),
        };
        assert!(err.is_token_error());
    }

    #[test]
    fn test_is_token_error_no_match() {
        let err = FitbitError::Api {
            error_type: "rate_limit_exceeded".to_string(),
            message: "Too many requests".to_string(),
        };
        assert!(!err.is_token_error());

        assert!(!FitbitError::Transport("connection refused".to_string()).is_token_error());
        assert!(!FitbitError::UnknownMetric("pushups".to_string()).is_token_error());
    }

    #[test]
    fn test_http_status_hint() {
        let err = FitbitError::Api {
            error_type: "expired_token".to_string(),
            message: String::new(),
        };
        assert_eq!(err.http_status_hint(), StatusCode::UNAUTHORIZED);

        let err = FitbitError::UnknownMetric("pushups".to_string());
        assert_eq!(err.http_status_hint(), StatusCode::BAD_REQUEST);

        let err = FitbitError::Transport("dns failure".to_string());
        assert_eq!(err.http_status_hint(), StatusCode::BAD_GATEWAY);
    }
}
