//! Core Entity Trait
//!
//! Basic contract shared by boxes, tasks and transports. Identifiers are
//! assigned by the backend and never changed by the client.

use std::fmt::Display;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use super::meta::Labeled;

/// Backend identifier type (`Long` on the server)
pub type EntityId = i64;

pub trait Entity: Sized + Clone + PartialEq + Send + Sync + 'static {
    type Id: Copy + Eq + Hash + Display + Send + Sync + 'static;
    type Status: Copy + Eq + Labeled + Send + Sync + 'static;

    fn id(&self) -> Self::Id;

    fn status(&self) -> Self::Status;

    /// Raw last-update timestamp as sent by the backend
    fn updated_at(&self) -> Option<&str>;
}

/// Nested reference object (`{ "id": 3 }`) used in request payloads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityRef {
    pub id: EntityId,
}

impl EntityRef {
    /// Parse a form select value; empty or malformed means "no reference"
    pub fn parse(raw: &str) -> Option<Self> {
        raw.trim().parse().ok().map(|id| EntityRef { id })
    }
}

/// `None` for blank form input
pub fn non_empty(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
