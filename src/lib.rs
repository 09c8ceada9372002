//! # Wicket
//!
//! Wicket is a thin client for the Zendesk REST API: the ticket window
//! you transact through.
//!
//! It builds a Basic-auth credential from a token held in a secrets
//! vault, verifies connectivity once, and then exposes independent
//! ticket operations over JSON-over-HTTPS.
//!
//! ## Features
//!
//! - **Session builder**: domain validation, vault-backed token
//!   resolution, credential assembly, and a liveness check before any
//!   session is handed out
//! - **Ticket operations**: create tickets, add public or internal
//!   notes, fetch and update tickets
//! - **Error handling**: validation rejected before any I/O, one typed
//!   error per operation, no silent retries
//! - **Security**: the credential is never logged or exposed in error
//!   messages
//!
//! ## Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`config`] - Configuration loading from environment variables
//! - [`error`] - Error types with credential sanitization
//! - [`secrets`] - The secret store seam and its env-backed default
//! - [`session`] - Session construction and the liveness check
//! - [`client`] - HTTP client for the ticket operations
//! - [`models`] - Typed request payloads and decoded responses
//!
//! ## Example
//!
//! ```ignore
//! use wicket::client::ZdClient;
//! use wicket::models::{CreateTicket, NoteKind, Priority};
//! use wicket::secrets::{EnvSecretStore, SecretRef};
//! use wicket::session::SessionBuilder;
//!
//! async fn example() -> Result<(), wicket::error::Error> {
//!     let session = SessionBuilder::new(
//!         "agent@acme.com",
//!         "acme.zendesk.com",
//!         SecretRef::new("KV1", "api-token"),
//!     )
//!     .connect(&EnvSecretStore::new())
//!     .await?;
//!
//!     let client = ZdClient::new(session)?;
//!
//!     let input = CreateTicket::new(
//!         "Printer on fire",
//!         Priority::Urgent,
//!         "Third floor, hurry",
//!         NoteKind::Public,
//!     );
//!     if let Some(ticket) = client.create_ticket(&input, true).await? {
//!         println!("created #{}", ticket.id);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Security Considerations
//!
//! The API token is read from the secret store once, encoded into the
//! Basic credential, and dropped. The credential is:
//! - Never logged at any log level
//! - Sanitized from all error messages

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod secrets;
pub mod session;
