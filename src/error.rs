//! Error types for the UISP CRM API client.
//!
//! Every failure a request can produce surfaces as exactly one [`Error`]
//! variant, classified once at the HTTP boundary. Callers branch on the
//! variant (or on [`Error::code`]) instead of parsing message strings.

use thiserror::Error;

/// A specialized `Result` type for UISP CRM operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Message used when a request cannot be constructed or sent at all.
pub(crate) const CONFIGURATION_FAILURE: &str =
    "Request could not be constructed; check client configuration";

/// The error type for all UISP CRM API operations.
///
/// Each variant carries a human-readable message; [`Error::status_code`]
/// exposes the HTTP status the variant maps to, where one exists.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The request was sent but no response was received
    /// (connection refused, DNS failure, timeout).
    #[error("{message}")]
    Network {
        /// Description of the transport failure
        message: String,
    },

    /// The server rejected the app key (401).
    #[error("{message}")]
    Authentication {
        /// Description of the authentication failure
        message: String,
    },

    /// The app key lacks the required permissions (403).
    #[error("{message}")]
    Permission {
        /// Description of the missing permission
        message: String,
    },

    /// The requested resource does not exist (404).
    #[error("{message}")]
    NotFound {
        /// Server-provided message, or the status text
        message: String,
    },

    /// The request body failed server-side validation (422).
    #[error("{message}")]
    Validation {
        /// Server-provided message, or the status text
        message: String,
    },

    /// Too many requests (429).
    #[error("{message}")]
    RateLimit {
        /// Description of the rate limit
        message: String,
    },

    /// Internal server error (500).
    #[error("{message}")]
    Server {
        /// Description of the server failure
        message: String,
    },

    /// The server is temporarily unavailable (502, 503, 504).
    #[error("{message}")]
    ServiceUnavailable {
        /// Description of the outage
        message: String,
        /// The actual gateway status received
        status: u16,
    },

    /// Any failure outside the fixed taxonomy: unmapped status codes,
    /// undecodable response bodies, requests that could not be built.
    #[error("{message}")]
    Generic {
        /// Description of the failure
        message: String,
        /// HTTP status, when a response was received
        status: Option<u16>,
    },
}

impl Error {
    /// Classify a non-2xx response into an error variant.
    ///
    /// `server_message` is the `message` field of the response body, when
    /// the server sent one; `status_text` is the canonical reason phrase.
    pub(crate) fn from_status(
        status: u16,
        server_message: Option<&str>,
        status_text: &str,
    ) -> Self {
        match status {
            401 => Error::Authentication {
                message: "Unauthorized: Invalid or missing app key".to_string(),
            },
            403 => Error::Permission {
                message: "Forbidden: App key does not have required permissions".to_string(),
            },
            404 => Error::NotFound {
                message: server_message.unwrap_or(status_text).to_string(),
            },
            422 => Error::Validation {
                message: server_message.unwrap_or(status_text).to_string(),
            },
            429 => Error::RateLimit {
                message: "Rate limit exceeded. Please try again later".to_string(),
            },
            500 => Error::Server {
                message: "Server error. Please try again later".to_string(),
            },
            502 | 503 | 504 => Error::ServiceUnavailable {
                message: "Service temporarily unavailable. Please try again later".to_string(),
                status,
            },
            _ => Error::Generic {
                message: format!(
                    "HTTP {}: {}",
                    status,
                    server_message.unwrap_or(status_text)
                ),
                status: Some(status),
            },
        }
    }

    /// A stable discriminant string for structural branching and logging.
    pub fn code(&self) -> &'static str {
        match self {
            Error::Network { .. } => "NETWORK_ERROR",
            Error::Authentication { .. } => "AUTH_ERROR",
            Error::Permission { .. } => "PERMISSION_ERROR",
            Error::NotFound { .. } => "NOT_FOUND_ERROR",
            Error::Validation { .. } => "VALIDATION_ERROR",
            Error::RateLimit { .. } => "RATE_LIMIT_ERROR",
            Error::Server { .. } => "SERVER_ERROR",
            Error::ServiceUnavailable { .. } => "SERVICE_UNAVAILABLE_ERROR",
            Error::Generic { .. } => "UISP_ERROR",
        }
    }

    /// The HTTP status code this error maps to, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Network { .. } => None,
            Error::Authentication { .. } => Some(401),
            Error::Permission { .. } => Some(403),
            Error::NotFound { .. } => Some(404),
            Error::Validation { .. } => Some(422),
            Error::RateLimit { .. } => Some(429),
            Error::Server { .. } => Some(500),
            Error::ServiceUnavailable { status, .. } => Some(*status),
            Error::Generic { status, .. } => *status,
        }
    }

    /// The human-readable message carried by this error.
    pub fn message(&self) -> &str {
        match self {
            Error::Network { message }
            | Error::Authentication { message }
            | Error::Permission { message }
            | Error::NotFound { message }
            | Error::Validation { message }
            | Error::RateLimit { message }
            | Error::Server { message }
            | Error::ServiceUnavailable { message, .. }
            | Error::Generic { message, .. } => message,
        }
    }

    /// Returns `true` if this error is potentially transient and the
    /// operation could be retried by the caller.
    ///
    /// The client itself never retries; see the crate documentation.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Error::Network { .. }
                | Error::RateLimit { .. }
                | Error::Server { .. }
                | Error::ServiceUnavailable { .. }
        )
    }

    /// Returns `true` if this is an authentication or permission error.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            Error::Authentication { .. } | Error::Permission { .. }
        )
    }

    /// Returns `true` if this error indicates a client-side issue.
    pub fn is_client_error(&self) -> bool {
        matches!(self.status_code(), Some(status) if (400..500).contains(&status))
    }

    /// Returns `true` if this error indicates a server-side issue.
    pub fn is_server_error(&self) -> bool {
        matches!(self.status_code(), Some(status) if status >= 500)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            return Error::Generic {
                message: CONFIGURATION_FAILURE.to_string(),
                status: None,
            };
        }
        if err.is_timeout() || err.is_connect() || err.is_request() {
            return Error::Network {
                message: "Unable to connect to UISP server".to_string(),
            };
        }
        if err.is_decode() || err.is_body() {
            return Error::Generic {
                message: format!("Failed to read response body: {err}"),
                status: err.status().map(|s| s.as_u16()),
            };
        }
        if let Some(status) = err.status() {
            return Error::from_status(
                status.as_u16(),
                None,
                status.canonical_reason().unwrap_or(""),
            );
        }
        Error::Generic {
            message: err.to_string(),
            status: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_auth_statuses() {
        let err = Error::from_status(401, None, "Unauthorized");
        assert!(matches!(err, Error::Authentication { .. }));
        assert_eq!(err.code(), "AUTH_ERROR");
        assert_eq!(err.status_code(), Some(401));

        let err = Error::from_status(403, Some("nope"), "Forbidden");
        assert!(matches!(err, Error::Permission { .. }));
        assert_eq!(err.status_code(), Some(403));
    }

    #[test]
    fn not_found_prefers_server_message() {
        let err = Error::from_status(404, Some("Client 42 not found"), "Not Found");
        assert_eq!(
            err,
            Error::NotFound {
                message: "Client 42 not found".to_string()
            }
        );

        let err = Error::from_status(404, None, "Not Found");
        assert_eq!(err.message(), "Not Found");
    }

    #[test]
    fn validation_prefers_server_message() {
        let err = Error::from_status(422, Some("email is invalid"), "Unprocessable Entity");
        assert!(matches!(err, Error::Validation { .. }));
        assert_eq!(err.message(), "email is invalid");
    }

    #[test]
    fn rate_limit_uses_fixed_message() {
        let err = Error::from_status(429, Some("slow down"), "Too Many Requests");
        assert_eq!(
            err,
            Error::RateLimit {
                message: "Rate limit exceeded. Please try again later".to_string()
            }
        );
    }

    #[test]
    fn gateway_statuses_map_to_service_unavailable() {
        for status in [502, 503, 504] {
            let err = Error::from_status(status, None, "");
            assert!(matches!(err, Error::ServiceUnavailable { .. }));
            assert_eq!(err.status_code(), Some(status));
            assert!(err.is_retryable());
        }
    }

    #[test]
    fn unmapped_status_degrades_to_generic() {
        let err = Error::from_status(418, None, "I'm a teapot");
        assert_eq!(
            err,
            Error::Generic {
                message: "HTTP 418: I'm a teapot".to_string(),
                status: Some(418),
            }
        );

        let err = Error::from_status(409, Some("already archived"), "Conflict");
        assert_eq!(err.message(), "HTTP 409: already archived");
    }

    #[test]
    fn classified_error_propagates_unchanged() {
        fn passthrough(err: Error) -> Result<()> {
            // resource modules do exactly this with `?`
            Err(err)?
        }

        let original = Error::from_status(404, Some("X not found"), "Not Found");
        let propagated = passthrough(original.clone()).unwrap_err();
        assert_eq!(original, propagated);
    }

    #[test]
    fn error_predicates() {
        assert!(Error::from_status(401, None, "").is_auth_error());
        assert!(Error::from_status(403, None, "").is_auth_error());
        assert!(Error::from_status(422, None, "").is_client_error());
        assert!(Error::from_status(500, None, "").is_server_error());
        assert!(!Error::from_status(404, None, "").is_retryable());
        assert!(
            Error::Network {
                message: "down".to_string()
            }
            .is_retryable()
        );
    }
}
