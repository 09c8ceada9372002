//! Comment (note) models for the Zendesk API.
//!
//! A comment is a text entry attached to a ticket, either public
//! (visible to the requester) or internal (agent-only).

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::Error;

/// Visibility class of a ticket note.
///
/// This is a closed two-valued enumeration; any other textual input is
/// rejected at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteKind {
    /// Visible to the ticket requester.
    Public,
    /// Visible to agents only.
    Internal,
}

impl NoteKind {
    /// Wire mapping: `Public` notes set `public: true`, everything else
    /// is agent-only.
    pub fn is_public(self) -> bool {
        matches!(self, NoteKind::Public)
    }
}

impl FromStr for NoteKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.trim().to_ascii_lowercase().as_str() {
            "public" => Ok(NoteKind::Public),
            "internal" => Ok(NoteKind::Internal),
            other => Err(Error::validation(format!(
                "unknown note kind: {:?} (expected Public or Internal)",
                other
            ))),
        }
    }
}

impl fmt::Display for NoteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoteKind::Public => f.write_str("public"),
            NoteKind::Internal => f.write_str("internal"),
        }
    }
}

/// Wire form of a ticket comment: `{"body": ..., "public": ...}`.
#[derive(Debug, Clone, Serialize)]
pub struct Comment {
    /// The comment text.
    pub body: String,

    /// Whether the requester can see the comment.
    pub public: bool,
}

impl Comment {
    /// Creates a comment with visibility derived from the note kind.
    pub fn new(body: impl Into<String>, kind: NoteKind) -> Self {
        Self {
            body: body.into(),
            public: kind.is_public(),
        }
    }
}
