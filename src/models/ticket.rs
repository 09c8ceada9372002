//! Ticket models for the Zendesk API.
//!
//! This module defines the priority enumeration, the typed request
//! payloads sent on create/update, and the decoded ticket returned by
//! the API.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Comment, NoteKind};
use crate::error::Error;

/// Ticket priority.
///
/// Serialized lowercase on the wire, matching the API's expected casing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Lowest urgency.
    Low,
    /// Default urgency.
    Normal,
    /// Elevated urgency.
    High,
    /// Highest urgency.
    Urgent,
}

impl Priority {
    /// The wire (lowercase) spelling of this priority.
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Normal => "normal",
            Priority::High => "high",
            Priority::Urgent => "urgent",
        }
    }
}

impl FromStr for Priority {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "normal" => Ok(Priority::Normal),
            "high" => Ok(Priority::High),
            "urgent" => Ok(Priority::Urgent),
            other => Err(Error::validation(format!(
                "unknown priority: {:?} (expected Low, Normal, High or Urgent)",
                other
            ))),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Requester reference embedded in a creation payload.
#[derive(Debug, Clone, Serialize)]
pub struct Requester {
    /// The requester's email address.
    pub email: String,
}

/// Input for creating a ticket.
///
/// Subject, priority, and the initial comment are required; the rest is
/// optional and omitted from the wire when unset.
#[derive(Debug, Clone)]
pub struct CreateTicket {
    /// Ticket subject line.
    pub subject: String,

    /// Ticket priority.
    pub priority: Priority,

    /// The initial comment.
    pub comment: Comment,

    /// Ticket form to file the ticket under.
    pub ticket_form_id: Option<u64>,

    /// Email of the requester to open the ticket on behalf of.
    pub requester_email: Option<String>,

    /// Tags to stamp on the ticket.
    pub tags: Vec<String>,
}

impl CreateTicket {
    /// Creates a ticket input with the required fields.
    pub fn new(
        subject: impl Into<String>,
        priority: Priority,
        body: impl Into<String>,
        kind: NoteKind,
    ) -> Self {
        Self {
            subject: subject.into(),
            priority,
            comment: Comment::new(body, kind),
            ticket_form_id: None,
            requester_email: None,
            tags: Vec::new(),
        }
    }

    /// Sets the ticket form.
    pub fn with_form(mut self, ticket_form_id: u64) -> Self {
        self.ticket_form_id = Some(ticket_form_id);
        self
    }

    /// Sets the requester email.
    pub fn with_requester(mut self, email: impl Into<String>) -> Self {
        self.requester_email = Some(email.into());
        self
    }

    /// Sets the ticket tags.
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Builds the wire payload for this input.
    pub fn to_payload(&self) -> TicketPayload {
        TicketPayload {
            ticket: TicketFields {
                comment: Some(self.comment.clone()),
                subject: Some(self.subject.clone()),
                priority: Some(self.priority),
                status: None,
                ticket_form_id: self.ticket_form_id,
                requester: self.requester_email.clone().map(|email| Requester { email }),
                tags: self.tags.clone(),
            },
        }
    }
}

/// Input for updating a ticket.
///
/// All fields are optional; at least one must be set or the operation is
/// rejected before any I/O.
#[derive(Debug, Clone, Default)]
pub struct UpdateTicket {
    /// New subject line.
    pub subject: Option<String>,

    /// New priority.
    pub priority: Option<Priority>,

    /// New status name (e.g., `open`, `pending`, `solved`).
    pub status: Option<String>,

    /// Comment to append with the update.
    pub comment: Option<Comment>,
}

impl UpdateTicket {
    /// Creates an empty update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the subject.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the status.
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Appends a comment with the given visibility.
    pub fn with_comment(mut self, body: impl Into<String>, kind: NoteKind) -> Self {
        self.comment = Some(Comment::new(body, kind));
        self
    }

    /// Returns true if no field is set.
    pub fn is_empty(&self) -> bool {
        self.subject.is_none()
            && self.priority.is_none()
            && self.status.is_none()
            && self.comment.is_none()
    }

    /// Builds the wire payload for this input.
    pub fn to_payload(&self) -> TicketPayload {
        TicketPayload {
            ticket: TicketFields {
                comment: self.comment.clone(),
                subject: self.subject.clone(),
                priority: self.priority,
                status: self.status.clone(),
                ticket_form_id: None,
                requester: None,
                tags: Vec::new(),
            },
        }
    }
}

/// Wire envelope for write operations: `{"ticket": {...}}`.
#[derive(Debug, Clone, Serialize)]
pub struct TicketPayload {
    /// The nested ticket fields.
    pub ticket: TicketFields,
}

impl TicketPayload {
    /// Payload carrying only a comment, as sent when adding a note.
    pub fn comment_only(comment: Comment) -> Self {
        Self {
            ticket: TicketFields {
                comment: Some(comment),
                subject: None,
                priority: None,
                status: None,
                ticket_form_id: None,
                requester: None,
                tags: Vec::new(),
            },
        }
    }
}

/// Fields nested under `"ticket"` in a write payload.
#[derive(Debug, Clone, Serialize)]
pub struct TicketFields {
    /// Comment to attach.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<Comment>,

    /// Subject line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// Priority, lowercase on the wire.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,

    /// Status name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Ticket form identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_form_id: Option<u64>,

    /// Requester reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requester: Option<Requester>,

    /// Ticket tags.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// A ticket as returned by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct Ticket {
    /// Unique ticket ID.
    pub id: u64,

    /// Subject line.
    #[serde(default)]
    pub subject: Option<String>,

    /// Status name.
    #[serde(default)]
    pub status: Option<String>,

    /// Priority name.
    #[serde(default)]
    pub priority: Option<String>,

    /// First comment / description.
    #[serde(default)]
    pub description: Option<String>,

    /// ID of the requester.
    #[serde(default)]
    pub requester_id: Option<u64>,

    /// Creation timestamp (ISO 8601).
    #[serde(default)]
    pub created_at: Option<String>,

    /// Last-update timestamp (ISO 8601).
    #[serde(default)]
    pub updated_at: Option<String>,

    /// Ticket tags.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Ticket {
    /// Returns the subject or a placeholder.
    pub fn display_subject(&self) -> &str {
        self.subject.as_deref().unwrap_or("(No subject)")
    }

    /// Returns the status or a placeholder.
    pub fn display_status(&self) -> &str {
        self.status.as_deref().unwrap_or("Unknown")
    }
}

/// Response wrapper for single-ticket operations: `{"ticket": {...}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct TicketEnvelope {
    /// The decoded ticket.
    pub ticket: Ticket,
}
