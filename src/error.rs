//! Error types for tunewire
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! Absence is deliberately *not* part of this hierarchy: an optional path
//! that resolves to nothing and a container without a continuation are
//! ordinary `Option` control flow, not errors. Only a required path miss or
//! a collaborator failure surfaces here.

use thiserror::Error;

/// What stopped a required path resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathErrorKind {
    /// The current node is a mapping but does not contain the key
    MissingKey,
    /// The current node is a sequence but the index is out of range
    IndexOutOfRange,
    /// The segment does not apply to the current node shape
    /// (key lookup on a sequence/scalar, index lookup on a mapping/scalar)
    TypeMismatch,
}

impl std::fmt::Display for PathErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::MissingKey => "missing key",
            Self::IndexOutOfRange => "index out of range",
            Self::TypeMismatch => "type mismatch",
        };
        f.write_str(s)
    }
}

/// The main error type for tunewire
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Navigation Errors
    // ============================================================================
    #[error("path not found: {kind} at `{segment}` (segment {depth}) of `{path}`")]
    PathNotFound {
        /// Full path that was being resolved, rendered in dotted form
        path: String,
        /// The segment that could not be resolved
        segment: String,
        /// Zero-based position of the offending segment
        depth: usize,
        /// What stopped the walk
        kind: PathErrorKind,
    },

    // ============================================================================
    // Collaborator (transport) Errors
    // ============================================================================
    #[error("transport failure: {message}")]
    Transport { message: String },

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Authentication failed: {message}")]
    Auth { message: String },

    // ============================================================================
    // Data Errors
    // ============================================================================
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create an auth error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
        }
    }

    /// Check if this error came from the injected transport collaborator
    /// rather than from the response structure itself
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Error::Transport { .. } | Error::HttpStatus { .. } | Error::Auth { .. }
        )
    }
}

/// Result type alias for tunewire
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}
