//! Aggregate outcome of normalizing one contact file.

use serde::{Deserialize, Serialize};

use crate::contact::Contact;

/// Number of contacts shown in a preview when the caller does not choose.
pub const DEFAULT_PREVIEW_LIMIT: usize = 10;

/// Contacts and row errors extracted from one file.
///
/// A result is built once per file and replaced, never merged, by the next.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResult {
    /// Accepted contacts in source row order.
    pub data: Vec<Contact>,
    /// One message per rejected row, or one message for a file-level failure.
    pub errors: Vec<String>,
    /// Data rows examined.
    pub total_rows: usize,
    /// Always equal to `data.len()`.
    pub valid_rows: usize,
    /// Normalized headers, de-duplicated in first-seen order.
    pub headers: Vec<String>,
}

impl ParseResult {
    /// A zero-row result carrying a single file-level error.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            errors: vec![message.into()],
            ..Self::default()
        }
    }

    /// Whether the file yielded at least one usable contact.
    pub fn is_usable(&self) -> bool {
        self.valid_rows > 0
    }

    /// Rows that were examined but rejected.
    pub fn invalid_rows(&self) -> usize {
        self.total_rows.saturating_sub(self.valid_rows)
    }

    /// The first `limit` contacts.
    pub fn preview(&self, limit: usize) -> &[Contact] {
        &self.data[..limit.min(self.data.len())]
    }
}
