//! Error Types
//!
//! This module defines the error types used throughout the viewer core.
//!
//! # Overview
//!
//! The main error type [`VizError`] covers all failure modes including:
//! - Rendering-backend initialization failures
//! - Mount-surface problems (zero extent, not yet attached)
//! - Operations issued against the wrong lifecycle state
//!
//! # Usage
//!
//! All fallible public APIs return [`Result<T>`] which is an alias for
//! `std::result::Result<T, VizError>`.

use thiserror::Error;

/// The main error type for the stroke viewer core.
///
/// Each variant provides specific context about what went wrong. Note that
/// disposal is deliberately infallible: `dispose()` is idempotent and never
/// produces an error, per the lifecycle contract.
#[derive(Error, Debug)]
pub enum VizError {
    // ========================================================================
    // Initialization Errors
    // ========================================================================
    /// Scene initialization failed (zero-extent mount surface, backend
    /// resource creation failure, ...).
    #[error("Initialization failed: {reason}")]
    InitializationFailure {
        /// Human-readable description of the failure.
        reason: String,
    },

    /// The graphics capability is unavailable on this system.
    #[error("Rendering backend unavailable: {0}")]
    BackendUnavailable(String),

    // ========================================================================
    // State Errors
    // ========================================================================
    /// An operation was issued against the wrong lifecycle state.
    ///
    /// This indicates a programming error in the host, not a recoverable
    /// runtime condition.
    #[error("Invalid state: expected {expected}, actual {actual}")]
    InvalidState {
        /// The state the operation requires.
        expected: &'static str,
        /// The state the component was actually in.
        actual: &'static str,
    },
}

/// Alias for `Result<T, VizError>`.
pub type Result<T> = std::result::Result<T, VizError>;
