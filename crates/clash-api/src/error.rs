//! Error types for API calls and credential-based token acquisition
//!
//! Both enums are closed: callers match on them instead of inspecting strings.

use serde::{Deserialize, Serialize};

/// Structured error body returned by the upstream service on non-2xx responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientError {
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

/// Errors returned by `ClashClient` calls
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Bad request: {message}")]
    BadRequest {
        message: String,
        body: Option<ClientError>,
    },
    #[error("Access denied: {message}")]
    Forbidden {
        message: String,
        body: Option<ClientError>,
    },
    #[error("Not found: {message}")]
    NotFound {
        message: String,
        body: Option<ClientError>,
    },
    #[error("Rate limited: {message}")]
    TooManyRequests {
        message: String,
        body: Option<ClientError>,
    },
    #[error("Internal server error: {message}")]
    InternalServerError {
        message: String,
        body: Option<ClientError>,
    },
    #[error("Service unavailable: {message}")]
    ServiceUnavailable {
        message: String,
        body: Option<ClientError>,
    },
    #[error("Unexpected status {status}: {message}")]
    UnknownStatus {
        status: u16,
        message: String,
        body: Option<ClientError>,
    },
    #[error("Failed to deserialize response: {0}")]
    Deserialization(String),
    #[error("Request failed: {0}")]
    Request(String),
}

impl ApiError {
    /// Builds the variant matching an HTTP status code
    pub fn from_status(status: u16, message: String, body: Option<ClientError>) -> Self {
        match status {
            400 => Self::BadRequest { message, body },
            403 => Self::Forbidden { message, body },
            404 => Self::NotFound { message, body },
            429 => Self::TooManyRequests { message, body },
            500 => Self::InternalServerError { message, body },
            503 => Self::ServiceUnavailable { message, body },
            _ => Self::UnknownStatus {
                status,
                message,
                body,
            },
        }
    }

    /// Returns the HTTP status this error was produced from, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::BadRequest { .. } => Some(400),
            Self::Forbidden { .. } => Some(403),
            Self::NotFound { .. } => Some(404),
            Self::TooManyRequests { .. } => Some(429),
            Self::InternalServerError { .. } => Some(500),
            Self::ServiceUnavailable { .. } => Some(503),
            Self::UnknownStatus { status, .. } => Some(*status),
            Self::Deserialization(_) | Self::Request(_) => None,
        }
    }

    /// Returns the structured upstream error body, when it parsed
    pub fn client_error(&self) -> Option<&ClientError> {
        match self {
            Self::BadRequest { body, .. }
            | Self::Forbidden { body, .. }
            | Self::NotFound { body, .. }
            | Self::TooManyRequests { body, .. }
            | Self::InternalServerError { body, .. }
            | Self::ServiceUnavailable { body, .. }
            | Self::UnknownStatus { body, .. } => body.as_ref(),
            Self::Deserialization(_) | Self::Request(_) => None,
        }
    }
}

/// Errors from the developer-portal login and key rotation flow
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("Login failed: {0}")]
    Login(String),
    #[error("Failed to retrieve API keys: {0}")]
    KeyRetrieval(String),
    #[error("Failed to create API key: {0}")]
    CreateApiKey(String),
    #[error("Failed to delete API key: {0}")]
    DeleteApiKey(String),
    #[error("Failed to deserialize portal response: {0}")]
    Deserialization(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_status_maps_known_codes() {
        let cases = [
            (400, "BadRequest"),
            (403, "Forbidden"),
            (404, "NotFound"),
            (429, "TooManyRequests"),
            (500, "InternalServerError"),
            (503, "ServiceUnavailable"),
        ];

        for (status, name) in cases {
            let err = ApiError::from_status(status, "msg".to_string(), None);
            assert_eq!(err.status(), Some(status));
            assert!(
                format!("{:?}", err).starts_with(name),
                "status {} produced {:?}",
                status,
                err
            );
        }
    }

    #[test]
    fn from_status_falls_back_to_unknown() {
        for status in [401, 418, 502, 504] {
            let err = ApiError::from_status(status, String::new(), None);
            assert!(matches!(err, ApiError::UnknownStatus { status: s, .. } if s == status));
        }
    }

    #[test]
    fn client_error_is_exposed_on_status_variants() {
        let body = ClientError {
            reason: Some("notFound".to_string()),
            message: Some("Not found".to_string()),
            kind: None,
            detail: None,
        };
        let err = ApiError::from_status(404, "Not found".to_string(), Some(body.clone()));
        assert_eq!(err.client_error(), Some(&body));

        let err = ApiError::Deserialization("bad".to_string());
        assert!(err.client_error().is_none());
        assert!(err.status().is_none());
    }

    #[test]
    fn client_error_parses_upstream_shape() {
        let body: ClientError = serde_json::from_str(
            r#"{"reason":"accessDenied.invalidIp","message":"Invalid authorization: API key does not allow access from IP 1.2.3.4","type":"client"}"#,
        )
        .unwrap();

        assert_eq!(body.reason.as_deref(), Some("accessDenied.invalidIp"));
        assert_eq!(body.kind.as_deref(), Some("client"));
        assert!(body.detail.is_none());
    }

    #[test]
    fn display_includes_message() {
        let err = TokenError::Login("Invalid credentials".to_string());
        assert_eq!(err.to_string(), "Login failed: Invalid credentials");

        let err = ApiError::from_status(502, "Bad gateway".to_string(), None);
        assert_eq!(err.to_string(), "Unexpected status 502: Bad gateway");
    }
}
