//! Error types for Talus operations.
//!
//! This module defines [`TalusError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Table load failures ([`TalusError::TableRead`], [`TalusError::TableParse`])
//!   signal bad data on disk; they are never retried and, with the single
//!   exception of the optional `argv` table, never defaulted
//! - [`TalusError::UnknownComponent`] signals a caller bug or stale reference
//!   against an already-loaded palette, not a data-integrity problem
//! - Use `anyhow::Error` (via `TalusError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Talus operations.
#[derive(Debug, Error)]
pub enum TalusError {
    /// A component table file is missing or unreadable.
    #[error("Failed to read table at {path}: {message}")]
    TableRead { path: PathBuf, message: String },

    /// A component table file contains malformed JSON.
    #[error("Failed to parse table at {path}: {message}")]
    TableParse { path: PathBuf, message: String },

    /// Requested component is not in the loaded palette.
    #[error("Unknown component: {name}")]
    UnknownComponent { name: String },

    /// A lifecycle hook script exited with a failure status.
    #[error("Hook '{hook}' failed with exit code {code:?}")]
    HookFailed { hook: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Talus operations.
pub type Result<T> = std::result::Result<T, TalusError>;
