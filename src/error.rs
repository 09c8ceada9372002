//! Error types for the wicket client.
//!
//! This module defines `Error`, the unified error type used throughout
//! the crate for consistent error handling and propagation.
//!
//! # Security
//!
//! The Basic credential must never appear in logs or error output. Use
//! `sanitize_message()` when constructing error messages from response
//! bodies or other external sources.

use thiserror::Error;

/// Maximum length for HTTP error response bodies carried in errors.
const MAX_ERROR_BODY_LEN: usize = 500;

/// Unified error type for all wicket operations.
///
/// Each variant provides specific context about the failure, enabling
/// meaningful error messages without leaking the API credential.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error - missing or invalid environment variables.
    #[error("configuration error: {0}")]
    Config(String),

    /// Input validation failed before any I/O was attempted.
    #[error("validation error: {0}")]
    Validation(String),

    /// The secret store could not produce the requested secret.
    #[error("secret retrieval failed for {vault}/{name}: {detail}")]
    SecretRetrieval {
        /// The vault that was queried.
        vault: String,
        /// The secret name that was requested.
        name: String,
        /// What went wrong in the store.
        detail: String,
    },

    /// The liveness check during session construction failed.
    #[error("connectivity check failed: {detail}")]
    Connectivity {
        /// Details about why the target tenant could not be reached.
        detail: String,
    },

    /// HTTP request failed during transmission.
    #[error("HTTP request failed: {0}")]
    Http(#[source] reqwest::Error),

    /// HTTP client initialization failed.
    #[error("HTTP client error: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// HTTP response returned a non-success status code.
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// The HTTP status code returned.
        status: reqwest::StatusCode,
        /// The sanitized response body.
        body: String,
    },

    /// JSON serialization or deserialization failed.
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Ticket creation failed.
    #[error("ticket creation failed: {source}")]
    TicketCreate {
        /// The underlying transport or status failure.
        #[source]
        source: Box<Error>,
    },

    /// Adding a note to a ticket failed.
    #[error("adding note failed: {source}")]
    TicketNote {
        /// The underlying transport or status failure.
        #[source]
        source: Box<Error>,
    },

    /// Fetching a ticket failed.
    #[error("ticket fetch failed: {source}")]
    TicketFetch {
        /// The underlying transport or status failure.
        #[source]
        source: Box<Error>,
    },

    /// Updating a ticket failed.
    #[error("ticket update failed: {source}")]
    TicketUpdate {
        /// The underlying transport or status failure.
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Creates a configuration error for a missing environment variable.
    pub fn missing_env(var_name: &str) -> Self {
        Error::Config(format!(
            "missing required environment variable: {}",
            var_name
        ))
    }

    /// Creates a configuration error for an invalid value.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Error::Config(message.into())
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Error::Validation(message.into())
    }

    /// Creates a secret retrieval error.
    pub fn secret_retrieval(
        vault: impl Into<String>,
        name: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Error::SecretRetrieval {
            vault: vault.into(),
            name: name.into(),
            detail: detail.into(),
        }
    }

    /// Creates a connectivity error.
    pub fn connectivity(detail: impl Into<String>) -> Self {
        Error::Connectivity {
            detail: detail.into(),
        }
    }

    /// Creates an `HttpStatus` error from a response, sanitizing and
    /// truncating the body.
    pub(crate) fn http_status(
        status: reqwest::StatusCode,
        body: &str,
        credential: &str,
    ) -> Self {
        let body = Self::sanitize_message(body, credential);
        let body = if body.len() > MAX_ERROR_BODY_LEN {
            let mut end = MAX_ERROR_BODY_LEN;
            while !body.is_char_boundary(end) {
                end -= 1;
            }
            format!("{}...[truncated]", &body[..end])
        } else {
            body
        };
        Error::HttpStatus { status, body }
    }

    /// Sanitizes a message to remove any occurrence of the credential.
    ///
    /// The credential must never appear in logs, error messages, or
    /// responses surfaced to callers.
    ///
    /// # Arguments
    ///
    /// * `message` - The message to sanitize
    /// * `credential` - The credential to strip from the message
    ///
    /// # Returns
    ///
    /// The message with any occurrence of the credential replaced with
    /// `[REDACTED]`
    #[must_use]
    pub fn sanitize_message(message: &str, credential: &str) -> String {
        if credential.is_empty() {
            return message.to_string();
        }
        message.replace(credential, "[REDACTED]")
    }
}
