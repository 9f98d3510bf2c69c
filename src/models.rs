//! Frontend Models
//!
//! Typed identifiers read off the rendered page, and request payloads.

use std::fmt;

use serde::Serialize;

/// Todo identifier, as carried by `data-todo-id`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TodoId(String);

/// List identifier, as carried by `data-list-id`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListId(String);

/// The attribute value is kept exactly as rendered, since the same string
/// also has to match the item's `li[data-*-id]`. Blank values and the dot
/// segments `.`/`..` cannot address a resource.
fn clean(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "." || trimmed == ".." {
        None
    } else {
        Some(raw.to_string())
    }
}

impl TodoId {
    /// Parse an attribute value; see `clean` for what is rejected.
    pub fn parse(raw: &str) -> Option<Self> {
        clean(raw).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ListId {
    /// Parse an attribute value; see `clean` for what is rejected.
    pub fn parse(raw: &str) -> Option<Self> {
        clean(raw).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Body of `POST /todos/{id}/edit`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TodoUpdate {
    pub completed: bool,
}
