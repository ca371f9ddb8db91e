//! Structure diagnostics emitted during schema-guided assembly.

use serde::{Deserialize, Serialize};

/// A structure-level issue found during schema-guided assembly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructureDiagnostic {
    pub kind: StructureDiagnosticKind,
    pub segment_id: String,
    pub position: usize,
    pub message: String,
}

/// Classification of structure-level diagnostic issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StructureDiagnosticKind {
    /// A segment appeared where it was not expected by the loop schema.
    UnexpectedSegment,
    /// A mandatory segment defined in the loop schema was not found.
    MissingRequiredSegment,
    /// A segment or loop exceeded its maximum allowed repetitions.
    MaxRepetitionsExceeded,
    /// A qualifier value was not recognized for the current context.
    UnrecognizedQualifier,
}

impl std::fmt::Display for StructureDiagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{:?}] {} at position {}: {}",
            self.kind, self.segment_id, self.position, self.message
        )
    }
}
