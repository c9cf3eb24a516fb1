//! Unified error types for the domain layer
//!
//! Narrative failure is *not* an error: a failed roll is an ordinary
//! `ChoiceEffect` with `favorable: false`. Errors here mean the engine and
//! its content disagree (a logic precondition was violated) or a caller
//! asked for something the catalog does not contain.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Content record not found
    #[error("Unknown {entity_type} id: {id}")]
    UnknownId {
        entity_type: &'static str,
        id: String,
    },

    /// A call that should have been impossible to reach (e.g. resolving a
    /// choice whose visibility predicate rejects the current stats)
    #[error("Precondition violated: {0}")]
    Precondition(String),

    /// State transition not allowed
    #[error("Invalid state transition: {0}")]
    InvalidStateTransition(String),
}

impl DomainError {
    /// Creates a validation error for business rule violations.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an unknown-id error
    pub fn unknown_id(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::UnknownId {
            entity_type,
            id: id.into(),
        }
    }

    /// Create a precondition violation error.
    ///
    /// These indicate an engine/content mismatch: they should fail loudly in
    /// development and be guarded against in production by never offering
    /// ineligible events or invisible choices.
    pub fn precondition(msg: impl Into<String>) -> Self {
        Self::Precondition(msg.into())
    }

    /// Create an invalid state transition error
    pub fn invalid_state_transition(msg: impl Into<String>) -> Self {
        Self::InvalidStateTransition(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = DomainError::validation("stats out of range");
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(err.to_string(), "Validation failed: stats out of range");
    }

    #[test]
    fn test_unknown_id_error() {
        let err = DomainError::unknown_id("QuestEvent", "phil_stray_jungle");
        assert!(matches!(err, DomainError::UnknownId { .. }));
        assert!(err.to_string().contains("QuestEvent"));
        assert!(err.to_string().contains("phil_stray_jungle"));
    }

    #[test]
    fn test_precondition_error() {
        let err = DomainError::precondition("choice is not visible at current stats");
        assert!(matches!(err, DomainError::Precondition(_)));
    }

    #[test]
    fn test_invalid_state_transition() {
        let err = DomainError::invalid_state_transition("choose() called during NIGHT_SUMMARY");
        assert_eq!(
            err.to_string(),
            "Invalid state transition: choose() called during NIGHT_SUMMARY"
        );
    }
}
