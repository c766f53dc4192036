//! Common error infrastructure for arena-core.
//!
//! This module provides shared types and traits used across all error types in
//! the crate. Domain-specific errors (`MoveError`, `ActionError`) are
//! defined in their respective modules alongside the rules they enforce.
//!
//! The rule functions themselves have no recoverable error taxonomy: they
//! operate on trusted snapshots and report caller contract violations (such as
//! an off-board origin) as [`crate::state::StateError`] instead of producing a
//! meaningless result.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the request was fine but the current game state refuses it
/// - **Validation**: invalid input that should be rejected without retry
/// - **Internal**: unexpected state inconsistencies that require investigation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - may succeed later or with another action.
    ///
    /// Examples: destination blocked, bomb limit reached
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: unknown player, position off the board
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// Examples: status regression, bomb bookkeeping desync
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all arena-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
