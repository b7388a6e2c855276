//! # Preferences Error Types
//!
//! Error types for the durable storage boundary.
//!
//! ## Error Flow
//! ```text
//! std::io::Error / serde_json::Error
//!        │
//!        ▼
//! PrefsError (this module) ← adds the read/parse distinction callers
//!        │                    care about
//!        ▼
//! AppContext boot: warn + fall back to defaults
//! ```

use thiserror::Error;

/// Durable-storage operation errors.
#[derive(Debug, Error)]
pub enum PrefsError {
    /// Reading or writing the blob failed at the filesystem level.
    ///
    /// ## When This Occurs
    /// - Data directory cannot be created
    /// - File permissions issue
    /// - Disk full
    #[error("preferences I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The blob exists but does not parse as the persisted subset.
    ///
    /// ## When This Occurs
    /// - Truncated write from a crashed previous run
    /// - Hand-edited file
    /// - Schema drift between app versions
    #[error("malformed preferences blob: {0}")]
    Malformed(#[source] serde_json::Error),

    /// No platform data directory could be resolved.
    #[error("could not determine an application data directory")]
    NoDataDir,
}

/// Result type for durable-storage operations.
pub type PrefsResult<T> = Result<T, PrefsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = PrefsError::NoDataDir;
        assert_eq!(
            err.to_string(),
            "could not determine an application data directory"
        );
    }
}
