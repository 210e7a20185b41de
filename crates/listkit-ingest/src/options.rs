//! Ingestion options.

use crate::error::{IngestError, Result};

/// Maximum contact file size (50 MB default).
pub const MAX_CONTACT_FILE_SIZE: u64 = 50 * 1024 * 1024;

/// Options controlling how a contact file is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestOptions {
    /// Files larger than this are rejected before parsing.
    pub max_file_size: u64,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            max_file_size: MAX_CONTACT_FILE_SIZE,
        }
    }
}

impl IngestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_max_file_size(mut self, max_file_size: u64) -> Self {
        self.max_file_size = max_file_size;
        self
    }

    /// Check a file size against the configured limit.
    pub fn check_size(&self, size: u64) -> Result<()> {
        if size > self.max_file_size {
            return Err(IngestError::FileTooLarge {
                size,
                max_size: self.max_file_size,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_size_accepts_limit_exactly() {
        let options = IngestOptions::new().with_max_file_size(10);
        assert!(options.check_size(10).is_ok());
        assert!(matches!(
            options.check_size(11),
            Err(IngestError::FileTooLarge {
                size: 11,
                max_size: 10
            })
        ));
    }
}
