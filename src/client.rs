//! HTTP client for Zendesk ticket operations.
//!
//! This module provides the `ZdClient` struct for making authenticated
//! requests to the Zendesk REST API. Every operation validates its
//! input, issues exactly one HTTP request, and wraps any transport or
//! non-success failure in an operation-specific error. There are no
//! retries.
//!
//! # Security
//!
//! The credential is never logged. All error messages are sanitized
//! before being surfaced.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method};
use std::time::Duration;

use crate::error::Error;
use crate::models::{
    Comment, CreateTicket, NoteKind, Ticket, TicketEnvelope, TicketPayload, UpdateTicket,
};
use crate::session::Session;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Builds the crate's standard HTTP client.
pub(crate) fn http_client() -> Result<Client, Error> {
    Client::builder()
        .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
        .build()
        .map_err(Error::HttpClient)
}

/// Client for ticket operations against one tenant.
///
/// Constructed from a verified [`Session`]; the session requirement is
/// carried in the type, so an operation can never run without one.
///
/// # Example
///
/// ```ignore
/// let client = ZdClient::new(session)?;
/// let ticket = client.get_ticket(35436).await?;
/// println!("{}", ticket.display_subject());
/// ```
#[derive(Clone)]
pub struct ZdClient {
    /// The underlying HTTP client (cloning is cheap).
    http: Client,

    /// The immutable session descriptor.
    session: Session,
}

impl ZdClient {
    /// Creates a client from a verified session.
    ///
    /// # Errors
    ///
    /// Returns `Error::HttpClient` if the HTTP client fails to initialize.
    pub fn new(session: Session) -> Result<Self, Error> {
        Ok(Self {
            http: http_client()?,
            session,
        })
    }

    /// The session this client operates with.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the agent-facing web URL for a ticket.
    pub fn ticket_web_url(&self, ticket_id: u64) -> String {
        let web_base = self.session.base_url().trim_end_matches("/api/v2");
        format!("{}/agent/tickets/{}", web_base, ticket_id)
    }

    /// Creates a new ticket.
    ///
    /// # Arguments
    ///
    /// * `input` - Subject, priority, initial comment, and optional fields
    /// * `return_ticket` - When set, the created ticket is decoded and
    ///   returned; otherwise success is log-only and `None` is returned
    ///
    /// # Errors
    ///
    /// `Error::Validation` for an empty subject or comment body (before
    /// any I/O); `Error::TicketCreate` wrapping the underlying failure
    /// otherwise.
    pub async fn create_ticket(
        &self,
        input: &CreateTicket,
        return_ticket: bool,
    ) -> Result<Option<Ticket>, Error> {
        if input.subject.trim().is_empty() {
            return Err(Error::validation("ticket subject must not be empty"));
        }
        if input.comment.body.trim().is_empty() {
            return Err(Error::validation("comment body must not be empty"));
        }
        if input.ticket_form_id == Some(0) {
            return Err(Error::validation("ticket_form_id must be positive"));
        }

        let payload = input.to_payload();
        let body = self
            .send(Method::POST, "/tickets.json", Some(&payload))
            .await
            .map_err(|e| Error::TicketCreate {
                source: Box::new(e),
            })?;

        if !return_ticket {
            tracing::info!(subject = %input.subject, "ticket created");
            return Ok(None);
        }

        let envelope: TicketEnvelope =
            serde_json::from_str(&body).map_err(|e| Error::TicketCreate {
                source: Box::new(Error::Serialization(e)),
            })?;
        tracing::info!(ticket_id = envelope.ticket.id, "ticket created");
        Ok(Some(envelope.ticket))
    }

    /// Adds a note to an existing ticket.
    ///
    /// Success is log-only; the updated ticket is not returned.
    ///
    /// # Errors
    ///
    /// `Error::Validation` for a zero id or empty body (before any I/O);
    /// `Error::TicketNote` wrapping the underlying failure otherwise.
    pub async fn add_note(
        &self,
        ticket_id: u64,
        body: &str,
        kind: NoteKind,
    ) -> Result<(), Error> {
        Self::validate_ticket_id(ticket_id)?;
        if body.trim().is_empty() {
            return Err(Error::validation("note body must not be empty"));
        }

        let payload = TicketPayload::comment_only(Comment::new(body, kind));
        let path = format!("/tickets/{}.json", ticket_id);
        self.send(Method::PUT, &path, Some(&payload))
            .await
            .map_err(|e| Error::TicketNote {
                source: Box::new(e),
            })?;

        tracing::info!(ticket_id, kind = %kind, "note added");
        Ok(())
    }

    /// Fetches a ticket by id.
    ///
    /// # Errors
    ///
    /// `Error::Validation` for a zero id; `Error::TicketFetch` wrapping
    /// the underlying failure otherwise.
    pub async fn get_ticket(&self, ticket_id: u64) -> Result<Ticket, Error> {
        Self::validate_ticket_id(ticket_id)?;

        let path = format!("/tickets/{}.json", ticket_id);
        let body = self
            .send(Method::GET, &path, None)
            .await
            .map_err(|e| Error::TicketFetch {
                source: Box::new(e),
            })?;

        let envelope: TicketEnvelope =
            serde_json::from_str(&body).map_err(|e| Error::TicketFetch {
                source: Box::new(Error::Serialization(e)),
            })?;
        Ok(envelope.ticket)
    }

    /// Updates a ticket and returns the decoded result.
    ///
    /// # Errors
    ///
    /// `Error::Validation` for a zero id, an empty update, or an empty
    /// comment body (before any I/O); `Error::TicketUpdate` wrapping the
    /// underlying failure otherwise.
    pub async fn update_ticket(
        &self,
        ticket_id: u64,
        input: &UpdateTicket,
    ) -> Result<Ticket, Error> {
        Self::validate_ticket_id(ticket_id)?;
        if input.is_empty() {
            return Err(Error::validation("update must set at least one field"));
        }
        if let Some(comment) = &input.comment {
            if comment.body.trim().is_empty() {
                return Err(Error::validation("comment body must not be empty"));
            }
        }

        let payload = input.to_payload();
        let path = format!("/tickets/{}.json", ticket_id);
        let body = self
            .send(Method::PUT, &path, Some(&payload))
            .await
            .map_err(|e| Error::TicketUpdate {
                source: Box::new(e),
            })?;

        let envelope: TicketEnvelope =
            serde_json::from_str(&body).map_err(|e| Error::TicketUpdate {
                source: Box::new(Error::Serialization(e)),
            })?;
        tracing::info!(ticket_id, "ticket updated");
        Ok(envelope.ticket)
    }

    /// Ticket ids are positive integers.
    fn validate_ticket_id(ticket_id: u64) -> Result<(), Error> {
        if ticket_id == 0 {
            return Err(Error::validation("ticket id must be positive"));
        }
        Ok(())
    }

    /// Issues a single request with the session's headers and returns
    /// the response body on success.
    async fn send(
        &self,
        method: Method,
        path: &str,
        payload: Option<&TicketPayload>,
    ) -> Result<String, Error> {
        let url = format!("{}{}", self.session.base_url(), path);

        tracing::debug!(method = %method, path = %path, "dispatching API request");

        let mut req = self
            .http
            .request(method, &url)
            .header(AUTHORIZATION, self.session.authorization())
            .header(CONTENT_TYPE, "application/json");

        if let Some(payload) = payload {
            req = req.json(payload);
        }

        let response = req.send().await.map_err(Error::Http)?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::http_status(
                status,
                &body,
                self.session.authorization(),
            ));
        }

        let body = response.text().await.map_err(Error::Http)?;
        tracing::trace!(body = %body, "API response");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_ticket_id_rejects_zero() {
        let err = ZdClient::validate_ticket_id(0).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert!(err.to_string().contains("positive"));
    }

    #[test]
    fn test_validate_ticket_id_accepts_positive() {
        assert!(ZdClient::validate_ticket_id(1).is_ok());
        assert!(ZdClient::validate_ticket_id(u64::MAX).is_ok());
    }
}
