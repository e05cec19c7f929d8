//! Common error infrastructure for tactics-core.
//!
//! Domain-specific errors (`GridError`, `RosterError`, `ExecuteError`) live next
//! to the code that produces them and implement [`GameError`] so drivers can
//! classify failures uniformly.
//!
//! Legality queries (`can_move_to`, `can_use_ability`) are plain booleans and
//! never surface through this module.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the driver may pick another action and carry on
/// - **Validation**: invalid input or configuration, reject without retry
/// - **Internal**: grid and entity records disagree, a bug to investigate
/// - **Fatal**: the session cannot start or continue
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry with an alternative action.
    ///
    /// Examples: destination blocked, nothing to push
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: unknown entity, target out of bounds
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// Examples: occupancy desync, position mismatch on commit
    Internal,

    /// Fatal error - session cannot proceed.
    ///
    /// Examples: empty roster, incomplete sprite mapping
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all tactics-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
/// - Return a stable `SCREAMING_SNAKE` code per variant
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_classification() {
        assert!(ErrorSeverity::Recoverable.is_recoverable());
        assert!(!ErrorSeverity::Validation.is_recoverable());
        assert!(ErrorSeverity::Internal.is_internal());
        assert!(ErrorSeverity::Fatal.is_internal());
        assert_eq!(ErrorSeverity::Fatal.as_str(), "fatal");
    }
}
