//! Data models for the Zendesk API.
//!
//! This module contains the comment and visibility types, the priority
//! enumeration, typed write payloads, and decoded ticket responses.

mod comment;
mod ticket;

pub use comment::*;
pub use ticket::*;
