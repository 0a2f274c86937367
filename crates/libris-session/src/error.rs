//! Session error types.

use std::path::PathBuf;
use thiserror::Error;

/// Session storage or state error.
#[derive(Debug, Error)]
pub enum SessionError {
    /// File I/O error.
    #[error("Failed to {operation} session file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The session file is not valid JSON or has the wrong shape.
    #[error("Invalid session file: {path}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The session file was written by a newer client.
    #[error("Session file version {found} is not supported (maximum: {max_supported})")]
    UnsupportedVersion { found: u32, max_supported: u32 },

    #[error("Failed to serialize session")]
    Serialization(#[source] serde_json::Error),

    /// The temp file could not be renamed over the session file.
    #[error("Failed to complete session save")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An operation that needs a signed-in user was attempted without one.
    #[error("No user is signed in")]
    NotSignedIn,
}

impl SessionError {
    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Io {
                operation, path, ..
            } => format!("Could not {} the session file at {}", operation, path.display()),
            Self::Corrupt { path, .. } => format!(
                "The session file at {} could not be read. It may be corrupted.",
                path.display()
            ),
            Self::UnsupportedVersion { .. } => {
                "The session was saved by a newer version of libris.".to_string()
            }
            Self::Serialization(_) => "An error occurred while saving the session.".to_string(),
            Self::AtomicWriteFailed { target_path, .. } => format!(
                "Could not save the session to {}. Please check disk space and permissions.",
                target_path.display()
            ),
            Self::NotSignedIn => "No user is signed in.".to_string(),
        }
    }

    /// Get a suggestion for how to resolve this error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::Io { operation, .. } if *operation == "read" => {
                Some("Check that you have permission to read the session file.".into())
            }
            Self::Io { .. } | Self::AtomicWriteFailed { .. } => {
                Some("Check that you have permission to write to this location.".into())
            }
            Self::Corrupt { .. } | Self::UnsupportedVersion { .. } => {
                Some("Run `libris session sign-out` to start a fresh session.".into())
            }
            Self::Serialization(_) => None,
            Self::NotSignedIn => Some("Run `libris session sign-in USER_JSON` first.".into()),
        }
    }
}

/// Result type alias for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;
