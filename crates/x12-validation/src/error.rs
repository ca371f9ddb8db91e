//! Cross-segment validation errors (spec.md §4.7).

use serde::{Deserialize, Serialize};

/// Which rule a [`ValidationError`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    SegmentCountMismatch,
    HlParentMissing,
    HlParentUnresolved,
    HlChildCodeViolation,
    SubscriberMissingFirstName,
    DuplicateLxAssignedNumber,
    ClaimBalanceMismatch,
    ClaimTotalMismatch,
    DuplicateQualifier,
}

/// One cross-segment validation failure, reported against the closed
/// transaction model (spec.md §4.7: "A validator reports any number of
/// `ValidationError{path, kind, message}` entries").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationError {
    /// Loop/segment path the failure was found at, e.g. `loop_2000[1]/CLP`.
    pub path: String,
    pub kind: ValidationErrorKind,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} at {}: {}", self.kind, self.path, self.message)
    }
}

/// All validator failures for one transaction, aggregated into the single
/// failure the engine surfaces per transaction (spec.md §4.7).
#[derive(Debug, Clone, thiserror::Error)]
#[error("{} validation error(s)", .0.len())]
pub struct ValidationFailure(pub Vec<ValidationError>);

impl ValidationFailure {
    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }
}
