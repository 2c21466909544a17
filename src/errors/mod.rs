//! Error handling module for the ROHIS client.
//!
//! Provides the client-wide error type and a closed error-kind enumeration
//! derived from HTTP status at the transport boundary, so callers branch on
//! kind instead of re-parsing status codes.

/// Fallback message when an error body carries neither `message` nor
/// `error`.
pub const GENERIC_FAILURE: &str = "Request failed";

/// Fixed message for binary-endpoint failures, which have no structured
/// body to parse.
pub const EXPORT_FAILURE: &str = "Export failed";

/// Coarse classification of an error for UI branching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Connection-level failure; no structured message available.
    Network,
    /// HTTP 401/403; treat as "session expired" or "not allowed".
    Unauthorized,
    /// HTTP 400/422, or a client-side form check that blocked the request.
    Validation,
    /// HTTP 409; e.g. a duplicate attendance mark.
    Conflict,
    /// Anything else the backend rejected.
    Server,
}

impl ErrorKind {
    /// Classify a non-success HTTP status.
    pub fn from_status(status: u16) -> Self {
        match status {
            401 | 403 => ErrorKind::Unauthorized,
            400 | 422 => ErrorKind::Validation,
            409 => ErrorKind::Conflict,
            _ => ErrorKind::Server,
        }
    }
}

/// Client error type.
#[derive(Debug)]
pub enum Error {
    /// Connection-level failure (DNS, reset, malformed response stream).
    Network(reqwest::Error),
    /// Non-2xx JSON response from the backend.
    Api {
        /// Human-readable message from the body's `message` or `error`
        /// field, else [`GENERIC_FAILURE`].
        message: String,
        /// HTTP status code.
        status: u16,
        /// Raw parsed error body for caller inspection.
        body: serde_json::Value,
    },
    /// Non-2xx response from a binary (document-export) endpoint.
    Export { status: u16 },
    /// A 2xx body that did not match the expected response shape.
    Decode(serde_json::Error),
    /// Client-side form check that blocked the request before any round
    /// trip.
    Validation(String),
}

impl Error {
    /// Build an API error from a parsed error body, extracting the message
    /// the way every resource client surfaces it uniformly.
    pub fn from_error_body(status: u16, body: serde_json::Value) -> Self {
        let message = body
            .get("message")
            .and_then(|v| v.as_str())
            .or_else(|| body.get("error").and_then(|v| v.as_str()))
            .unwrap_or(GENERIC_FAILURE)
            .to_string();

        Error::Api {
            message,
            status,
            body,
        }
    }

    /// The closed kind for UI branching.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Network(_) => ErrorKind::Network,
            Error::Api { status, .. } => ErrorKind::from_status(*status),
            Error::Export { .. } => ErrorKind::Server,
            Error::Decode(_) => ErrorKind::Server,
            Error::Validation(_) => ErrorKind::Validation,
        }
    }

    /// HTTP status, when the backend produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } | Error::Export { status } => Some(*status),
            _ => None,
        }
    }

    /// Display-ready message for toast/alert presentation.
    pub fn message(&self) -> String {
        match self {
            Error::Network(_) => GENERIC_FAILURE.to_string(),
            Error::Api { message, .. } => message.clone(),
            Error::Export { .. } => EXPORT_FAILURE.to_string(),
            Error::Decode(_) => GENERIC_FAILURE.to_string(),
            Error::Validation(msg) => msg.clone(),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Network(e) => write!(f, "network error: {}", e),
            Error::Api {
                message, status, ..
            } => write!(f, "api error ({}): {}", status, message),
            Error::Export { status } => write!(f, "{} ({})", EXPORT_FAILURE, status),
            Error::Decode(e) => write!(f, "unexpected response shape: {}", e),
            Error::Validation(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Network(e) => Some(e),
            Error::Decode(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Network(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_message_prefers_message_field() {
        let err = Error::from_error_body(400, json!({"message": "Nama wajib diisi", "error": "x"}));
        assert_eq!(err.message(), "Nama wajib diisi");
    }

    #[test]
    fn test_message_falls_back_to_error_field() {
        let err = Error::from_error_body(500, json!({"error": "boom"}));
        assert_eq!(err.message(), "boom");
    }

    #[test]
    fn test_message_falls_back_to_generic() {
        let err = Error::from_error_body(500, json!({"success": false}));
        assert_eq!(err.message(), GENERIC_FAILURE);
    }

    #[test]
    fn test_kind_from_status() {
        assert_eq!(ErrorKind::from_status(401), ErrorKind::Unauthorized);
        assert_eq!(ErrorKind::from_status(403), ErrorKind::Unauthorized);
        assert_eq!(ErrorKind::from_status(400), ErrorKind::Validation);
        assert_eq!(ErrorKind::from_status(422), ErrorKind::Validation);
        assert_eq!(ErrorKind::from_status(409), ErrorKind::Conflict);
        assert_eq!(ErrorKind::from_status(500), ErrorKind::Server);
        assert_eq!(ErrorKind::from_status(404), ErrorKind::Server);
    }

    #[test]
    fn test_export_error_is_generic() {
        let err = Error::Export { status: 404 };
        assert_eq!(err.message(), EXPORT_FAILURE);
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.kind(), ErrorKind::Server);
    }

    #[test]
    fn test_validation_error_kind() {
        let err = Error::Validation("Passwords do not match".to_string());
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(err.status().is_none());
    }
}
