use thiserror::Error;
use x12_parser::TokenizeError;
use x12_schema::element::{ElementTypeError, EnumDomainError};

/// One element that failed the Element Typer (spec.md §4.4): either a
/// format/length/required-ness failure or an enum domain miss.
#[derive(Error, Debug, Clone)]
pub enum ElementTypingIssue {
    #[error(transparent)]
    Type(#[from] ElementTypeError),
    #[error(transparent)]
    EnumDomain(#[from] EnumDomainError),
}

/// Schema-guided assembly errors (spec.md §7, items 3-5). The structural
/// layer (items 1-2: malformed/truncated input) is `x12_parser::TokenizeError`;
/// this enum covers typing, schema lookup, and loop dispatch.
#[derive(Error, Debug)]
pub enum AssemblyError {
    #[error(
        "Unexpected segment '{segment_id}' at position {position}, expected one of: {expected:?}"
    )]
    UnexpectedSegment {
        segment_id: String,
        position: usize,
        expected: Vec<String>,
    },

    #[error("Missing mandatory segment '{segment_id}' in loop '{loop_name}'")]
    MissingMandatory { segment_id: String, loop_name: String },

    #[error("No schema registered for transaction {transaction_code} version {implementation_version}")]
    UnknownTransactionVersion {
        transaction_code: String,
        implementation_version: String,
    },

    #[error("could not determine transaction code/version from ST segment")]
    TransactionTypeUndetermined,

    /// Element Typer failures accumulated while binding the transaction
    /// (spec.md §7 item 3): parsing continues over the rest of the segment
    /// set, but the transaction as a whole is reported invalid.
    #[error("{} element typing error(s): {issues:?}", issues.len())]
    ElementTyping { issues: Vec<ElementTypingIssue> },

    #[error(transparent)]
    Tokenize(#[from] TokenizeError),

    #[error("Segment cursor out of bounds at position {0}")]
    CursorOutOfBounds(usize),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Expected segment '{expected}' not found")]
    SegmentNotFound { expected: String },
}

impl From<x12_schema::cursor::SegmentNotFound> for AssemblyError {
    fn from(e: x12_schema::cursor::SegmentNotFound) -> Self {
        AssemblyError::SegmentNotFound {
            expected: e.expected,
        }
    }
}
